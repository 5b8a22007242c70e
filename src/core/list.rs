use chrono::NaiveDate;

use crate::config::Config;
use crate::core::bank::format_bank;
use crate::core::restore_ledger;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::day_record::DayRecord;
use crate::utils::formatting::mins2readable;
use crate::utils::table::{Column, Table};

/// High-level business logic for the `list` command.
pub struct ListLogic;

impl ListLogic {
    pub fn print(
        pool: &mut DbPool,
        cfg: &Config,
        dates: &[NaiveDate],
        punches_only: bool,
    ) -> AppResult<()> {
        let ledger = restore_ledger(pool, cfg)?;

        let mut shown = 0usize;
        for date in dates {
            let Some(rec) = ledger.day(*date) else {
                continue;
            };
            shown += 1;

            if punches_only {
                print_punches(rec);
            } else {
                print_day(rec);
            }
        }

        if shown == 0 {
            println!("No punches recorded in the selected period.");
            return Ok(());
        }

        let bank = ledger.bank();
        println!(
            "\nBank of hours: {} ({} closed day{}, expected {}/day)",
            format_bank(bank.balance_minutes),
            bank.counted_days,
            if bank.counted_days == 1 { "" } else { "s" },
            mins2readable(ledger.expected_per_day(), false, true),
        );
        Ok(())
    }
}

fn print_punches(rec: &DayRecord) {
    let mut table = Table::new(vec![
        Column {
            header: "ID".to_string(),
            width: 5,
        },
        Column {
            header: "TIME".to_string(),
            width: 6,
        },
        Column {
            header: "KIND".to_string(),
            width: 12,
        },
        Column {
            header: "LOC".to_string(),
            width: 4,
        },
    ]);

    for punch in &rec.punches {
        table.add_row(vec![
            punch.id.to_string(),
            punch.time_str(),
            punch.kind.pk_as_str().to_string(),
            punch.location.map(|l| l.code().to_string()).unwrap_or_default(),
        ]);
    }

    println!("\n=== {} ===", rec.date);
    print!("{}", table.render());
}

fn print_day(rec: &DayRecord) {
    println!("\n=== {} ===", rec.date);
    println!("Punches: {}", rec.punches.len());

    for iv in &rec.intervals {
        match (iv.end, iv.minutes) {
            (Some(end), Some(mins)) => println!(
                "  break {} - {} ({} min)",
                iv.start.format("%H:%M"),
                end.format("%H:%M"),
                mins
            ),
            _ => println!("  break {} - (open)", iv.start.format("%H:%M")),
        }
    }

    match rec.total_minutes {
        Some(total) => println!(
            "Worked: {} min ({})",
            total,
            mins2readable(total, false, true)
        ),
        None => println!("Worked: (day not closed, excluded from the bank)"),
    }
}
