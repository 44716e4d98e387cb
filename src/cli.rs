// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::{env, path::PathBuf};

use crate::infra::t;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return lang.clone();
        }
    }
    // Fallback to system language detection
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

fn build_cli(locale: &str) -> Command {
    Command::new("blockharness")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("run")
                .about(t!("cmd_run_about", locale = locale).to_string())
                .arg(
                    Arg::new("profile")
                        .short('c')
                        .long("profile")
                        .help(t!("arg_profile", locale = locale).to_string())
                        .value_name("PROFILE")
                        .default_value("Blockharness.toml")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("output-dir")
                        .short('o')
                        .long("output-dir")
                        .help(t!("arg_output_dir", locale = locale).to_string())
                        .value_name("OUTPUT_DIR")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("suite")
                        .short('s')
                        .long("suite")
                        .help(t!("arg_suite", locale = locale).to_string())
                        .value_name("SUITE")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("test")
                        .short('t')
                        .long("test")
                        .help(t!("arg_test", locale = locale).to_string())
                        .value_name("NAME")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("filter")
                        .short('p')
                        .long("filter")
                        .help(t!("arg_filter", locale = locale).to_string())
                        .value_name("PATTERN")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("quiet")
                        .short('q')
                        .long("quiet")
                        .help(t!("arg_quiet", locale = locale).to_string())
                        .action(ArgAction::SetTrue)
                        .conflicts_with("verbose"),
                )
                .arg(
                    Arg::new("verbose")
                        .short('v')
                        .long("verbose")
                        .help(t!("arg_verbose", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help("Write a default profile without launching the interactive wizard.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("show-log")
                .about(t!("cmd_show_log_about", locale = locale).to_string())
                .arg(
                    Arg::new("file")
                        .help(t!("arg_log_file", locale = locale).to_string())
                        .value_name("FILE")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

pub fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();

    match matches.subcommand() {
        Some(("run", run_matches)) => {
            let profile = run_matches
                .get_one::<PathBuf>("profile")
                .unwrap() // Has default
                .clone();
            let output_dir = run_matches.get_one::<PathBuf>("output-dir").cloned();
            let suites: Vec<String> = run_matches
                .get_many::<String>("suite")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();
            let tests: Vec<String> = run_matches
                .get_many::<String>("test")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();
            let patterns: Vec<String> = run_matches
                .get_many::<String>("filter")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();
            let quiet = run_matches.get_flag("quiet");
            let verbose = run_matches.get_flag("verbose");

            commands::run::execute(profile, output_dir, suites, tests, patterns, quiet, verbose)?;
        }
        Some(("init", init_matches)) => {
            let non_interactive = init_matches.get_flag("non-interactive");

            // Show language detection message if it was auto-detected
            if env::args().all(|arg| arg != "--lang") {
                println!(
                    "{}",
                    t!("system_language_detected", locale = &language, lang = &language)
                );
            }
            commands::init::run_init_wizard(&language, non_interactive)?;
        }
        Some(("show-log", show_matches)) => {
            let file = show_matches
                .get_one::<PathBuf>("file")
                .unwrap() // Required
                .clone();
            commands::show_log::execute(&file)?;
        }
        _ => {
            // This case handles when no subcommand is given.
            // Clap will have already printed help info.
        }
    }
    Ok(())
}
