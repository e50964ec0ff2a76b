use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::ExitStatus;
use crate::config::{CONFIG_FILE_NAME, Config};
use crate::reporter::SUCCESS_MARK;

pub fn init() -> Result<ExitStatus> {
    let path = Path::new(CONFIG_FILE_NAME);
    if path.exists() {
        println!("{} already exists, leaving it as is.", CONFIG_FILE_NAME);
        return Ok(ExitStatus::Success);
    }

    let mut content = Config::default().to_pretty_json()?;
    content.push('\n');
    fs::write(path, content).with_context(|| format!("failed to write {}", CONFIG_FILE_NAME))?;

    println!("{} Created {}.", SUCCESS_MARK.green(), CONFIG_FILE_NAME);
    Ok(ExitStatus::Success)
}
