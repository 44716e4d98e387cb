//! # Init Command Module / 初始化命令模块
//!
//! Creates a starter profile in the current directory, either through a
//! small interactive wizard or non-interactively with defaults.
//!
//! 在当前目录创建一个起始配置文件，可通过简单的交互式向导，
//! 也可以非交互地使用默认值。

use anyhow::{Context, Result, bail};
use colored::*;
use dialoguer::{Confirm, Input};
use std::fs;
use std::path::Path;

use crate::infra::t;

const PROFILE_FILE: &str = "Blockharness.toml";

/// Runs the init wizard, writing `Blockharness.toml` on success.
pub fn run_init_wizard(locale: &str, non_interactive: bool) -> Result<()> {
    let path = Path::new(PROFILE_FILE);
    if path.exists() {
        if non_interactive {
            bail!(t!("init_profile_exists", locale = locale, path = PROFILE_FILE).to_string());
        }
        let overwrite = Confirm::new()
            .with_prompt(
                t!("init_overwrite_prompt", locale = locale, path = PROFILE_FILE).to_string(),
            )
            .default(false)
            .interact()?;
        if !overwrite {
            println!("{}", t!("init_aborted", locale = locale).yellow());
            return Ok(());
        }
    }

    let (device, output_dir) = if non_interactive {
        ("/dev/vdb".to_string(), "harness-results".to_string())
    } else {
        let device: String = Input::new()
            .with_prompt(t!("init_device_prompt", locale = locale).to_string())
            .default("/dev/vdb".to_string())
            .interact_text()?;
        let output_dir: String = Input::new()
            .with_prompt(t!("init_output_prompt", locale = locale).to_string())
            .default("harness-results".to_string())
            .interact_text()?;
        (device, output_dir)
    };

    let content = format!(
        r#"language = "en"
output_dir = "{output_dir}"

[target]
device = "{device}"
"#
    );
    fs::write(path, content).with_context(|| format!("Failed to write {PROFILE_FILE}"))?;
    println!(
        "{}",
        t!("init_profile_written", locale = locale, path = PROFILE_FILE).green()
    );
    Ok(())
}
