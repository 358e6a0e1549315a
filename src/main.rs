// Interactive table capture
//
// Asks for a URL, opens a browser on it and writes every table on the page to
// output_tables.xlsx. Environment overrides are read by ScrapeConfig::from_env.

use kodegen_tools_tablescrape::{StdinPrompt, run_interactive};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,chromiumoxide::handler=off,chromiumoxide::conn=off")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut prompt = StdinPrompt;
    match run_interactive(&mut prompt).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if e.is_input_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
