pub mod day_record;
pub mod interval;
pub mod location;
pub mod punch;
pub mod punch_kind;
