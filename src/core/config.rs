use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration as YAML.
    pub fn print(cfg: &Config, path: &Path) -> AppResult<()> {
        if path.exists() {
            println!("📄 Current configuration ({}):\n", path.display());
        } else {
            println!("📄 Default configuration (no file at {}):\n", path.display());
        }
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Report keys missing from the file; defaults are used for them.
    pub fn check(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            warning(format!(
                "No configuration file at {}. Run `workhours init` to create one.",
                path.display()
            ));
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let missing = Config::missing_keys(&content)?;

        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!("{} key(s) missing, defaults apply:", missing.len()));
            for key in &missing {
                println!("  - {key}");
            }
        }
        Ok(missing)
    }

    pub fn get(cfg: &Config, key: &str) -> AppResult<String> {
        cfg.get(key)
            .ok_or_else(|| AppError::Config(format!("unknown configuration key '{key}'")))
    }

    /// Set one key and write the whole file back.
    pub fn set(cfg: &Config, path: &Path, assignment: &str) -> AppResult<Config> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| AppError::Config(format!("expected KEY=VALUE, got '{assignment}'")))?;

        let mut updated = cfg.clone();
        updated.set(key.trim(), value)?;
        updated.save_to(path)?;

        tracing::info!(key = key.trim(), value, path = %path.display(), "configuration updated");
        success(format!("{} = {}", key.trim(), value.trim()));
        Ok(updated)
    }

    /// Open the file in an editor: `--editor`, then $EDITOR/$VISUAL, then
    /// the platform default as a fallback.
    pub fn edit(cfg: &Config, path: &Path, editor: &Option<String>) -> AppResult<()> {
        if !path.exists() {
            cfg.save_to(path)?;
            info(format!("Created {} with current settings.", path.display()));
        }

        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                Ok(())
            }
            _ => {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                ));
                match Command::new(&default_editor).arg(path).status() {
                    Ok(s) if s.success() => {
                        success(format!(
                            "Configuration file edited successfully using fallback '{}'",
                            default_editor
                        ));
                        Ok(())
                    }
                    _ => Err(AppError::Config(format!(
                        "failed to edit configuration file using '{}'",
                        default_editor
                    ))),
                }
            }
        }
    }
}
