//! The scrape-and-export flow
//!
//! `run` drives one session end to end: open the page, optionally wait for the
//! user, capture, extract, write, report, close. Input and page capture sit
//! behind the [`Prompt`] and [`MarkupSource`] traits so the flow can be driven
//! without a terminal or a browser.

mod export;
mod prompt;
mod run;

pub use export::{ExportOutcome, capture_and_export, export_markup};
pub use prompt::{Prompt, StdinPrompt};
pub use run::{
    CONFIRM_PROMPT, EXIT_PROMPT, MSG_NO_TABLES, MSG_SAVED, URL_PROMPT, drive, run, run_interactive,
};

use crate::error::TableScrapeResult;

/// Something that can hand over the rendered HTML of the current page
#[allow(async_fn_in_trait)]
pub trait MarkupSource {
    async fn capture_markup(&self) -> TableScrapeResult<String>;
}
