use tracing::{info, warn};

use super::export::{ExportOutcome, capture_and_export};
use super::prompt::Prompt;
use super::MarkupSource;
use crate::browser::BrowserSession;
use crate::config::{NavigationMode, ScrapeConfig};
use crate::error::{TableScrapeError, TableScrapeResult};
use crate::workbook::{WorkbookOptions, WorkbookWriter};

pub const URL_PROMPT: &str = "Enter the url containing the table: ";
pub const CONFIRM_PROMPT: &str =
    "Navigate to the page with the table, then press Enter to capture it: ";
pub const EXIT_PROMPT: &str = "Exit page (y/n): ";

pub const MSG_SAVED: &str = "Outputs saved in excel";
pub const MSG_NO_TABLES: &str = "No tables found on the page";

/// Ask for the URL, read overrides from the environment, then [`run`]
///
/// # Errors
///
/// [`TableScrapeError::Prompt`] when input ends before a URL is entered, plus
/// everything [`run`] can return.
pub async fn run_interactive<P: Prompt>(prompt: &mut P) -> TableScrapeResult<ExportOutcome> {
    let url = prompt
        .ask(URL_PROMPT)
        .await?
        .filter(|answer| !answer.trim().is_empty())
        .ok_or_else(|| TableScrapeError::Prompt("no URL entered".to_string()))?;

    let config = ScrapeConfig::from_env(&url)?;
    run(&config, prompt).await
}

/// Open a browser on the configured URL and export the page's tables
///
/// The browser is shut down before returning, whether or not the export
/// succeeded.
pub async fn run<P: Prompt>(
    config: &ScrapeConfig,
    prompt: &mut P,
) -> TableScrapeResult<ExportOutcome> {
    let mut session = BrowserSession::open(config).await?;
    let result = drive(&session, config, prompt).await;
    session.shutdown().await;
    result
}

/// Everything after the page is open: confirm, capture, export, report
pub async fn drive<S: MarkupSource, P: Prompt>(
    source: &S,
    config: &ScrapeConfig,
    prompt: &mut P,
) -> TableScrapeResult<ExportOutcome> {
    if config.navigation_mode() == NavigationMode::Confirm
        && prompt.ask(CONFIRM_PROMPT).await?.is_none()
    {
        warn!("Input closed before confirmation, capturing the current page");
    }

    let writer = WorkbookWriter::new(WorkbookOptions {
        include_index: config.include_index(),
        sheet_prefix: config.sheet_prefix().to_string(),
        source_url: Some(config.start_url().to_string()),
    });

    let outcome = capture_and_export(source, config.output_path(), &writer).await?;

    match &outcome {
        ExportOutcome::Written(summary) => {
            info!("Workbook written: {}", summary.path.display());
            prompt.tell(&format!(
                "{MSG_SAVED} ({} sheet(s) in {})",
                summary.sheets.len(),
                summary.path.display()
            ));
        }
        ExportOutcome::NoTables => prompt.tell(MSG_NO_TABLES),
    }

    // Nobody can look at a headless page
    if !config.headless() {
        wait_for_exit(prompt).await?;
    }

    Ok(outcome)
}

/// Keep the page open until the user answers `y` or input ends
async fn wait_for_exit<P: Prompt>(prompt: &mut P) -> TableScrapeResult<()> {
    loop {
        match prompt.ask(EXIT_PROMPT).await? {
            None => return Ok(()),
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => return Ok(()),
            Some(_) => {}
        }
    }
}
