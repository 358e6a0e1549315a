use std::io::{BufRead, Write};

use crate::error::{TableScrapeError, TableScrapeResult};

/// Interactive input and status output
#[allow(async_fn_in_trait)]
pub trait Prompt {
    /// Show `message` and read one line without its line ending
    ///
    /// `Ok(None)` means input has ended.
    async fn ask(&mut self, message: &str) -> TableScrapeResult<Option<String>>;

    /// Show a status line
    fn tell(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Prompts on stdout, answers from stdin
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    async fn ask(&mut self, message: &str) -> TableScrapeResult<Option<String>> {
        let message = message.to_string();

        // stdin reads block; keep them off the runtime threads
        tokio::task::spawn_blocking(move || -> TableScrapeResult<Option<String>> {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(message.as_bytes())?;
            stdout.flush()?;
            drop(stdout);

            let mut line = String::new();
            let read = std::io::stdin().lock().read_line(&mut line)?;
            if read == 0 {
                return Ok(None);
            }
            Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
        })
        .await
        .map_err(|e| TableScrapeError::Prompt(format!("input task failed: {e}")))?
    }
}
