use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd
        && *print_config
    {
        let path = Config::config_file();
        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        println!("{}", content);
    }
    Ok(())
}
