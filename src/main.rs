use blockharness::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Pick the console language before any output happens
    blockharness::init();

    // Process the command; this is the single top-level error boundary
    match cli::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
