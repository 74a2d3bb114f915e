use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::space::Space;
use crate::ui::messages::{success, warning};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("📄 {}\n", path.display());
                println!("{}", content);
            } else {
                warning(format!(
                    "No config file found at {} (using defaults)",
                    path.display()
                ));
            }
        }

        if *check {
            let mut ok = true;

            if cfg.database.trim().is_empty() {
                warning("database: empty path");
                ok = false;
            }

            if Space::from_code(&cfg.default_space).is_none() {
                warning(format!(
                    "default_space: '{}' is not a valid space slug",
                    cfg.default_space
                ));
                ok = false;
            }

            if crate::core::slots::parse_duration(Some(cfg.default_duration.as_str())).is_none() {
                warning(format!(
                    "default_duration: '{}' does not parse as hours",
                    cfg.default_duration
                ));
                ok = false;
            }

            if ok {
                success("Configuration OK.");
            }
        }
    }

    Ok(())
}
