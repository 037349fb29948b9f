use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use crate::cli::parser::Commands;
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("📄 Current configuration:\n");
            println!("{}", yaml);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
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

            if !path.exists() {
                Config::init_all(Some(cfg.data_dir.clone()), false)?;
                info(format!("Created default configuration at {}", path.display()));
            }

            if run_editor(&editor_to_use, &path) {
                success(format!("Configuration file edited using '{editor_to_use}'"));
            } else if editor_to_use == default_editor {
                return Err(AppError::Config(format!(
                    "editor '{editor_to_use}' failed on {}",
                    path.display()
                )));
            } else {
                warning(format!(
                    "Editor '{editor_to_use}' failed, falling back to '{default_editor}'"
                ));
                if !run_editor(&default_editor, &path) {
                    return Err(AppError::Config(format!(
                        "editors '{editor_to_use}' and '{default_editor}' both failed on {}",
                        path.display()
                    )));
                }
                success(format!("Configuration file edited using '{default_editor}'"));
            }
        }
    }

    Ok(())
}

/// Launch `editor` on `path`; true only if it ran and exited successfully.
fn run_editor(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .is_ok_and(|s| s.success())
}
