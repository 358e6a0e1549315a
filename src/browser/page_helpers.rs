//! Helpers for reading state off a chromiumoxide `Page`

use chromiumoxide::page::Page;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

const READY_STATE_SCRIPT: &str = r"
    (function() {
        return {
            readyState: document.readyState,
            bodyExists: document.body !== null
        };
    })()
";

/// Get page URL, `"about:blank"` when it is unavailable
pub async fn get_page_url_with_fallback(page: &Page) -> String {
    match page.url().await {
        Ok(Some(url)) => url,
        Ok(None) => {
            trace!("Page URL is None (page not yet navigated)");
            "about:blank".to_string()
        }
        Err(e) => {
            trace!("Failed to get page URL (browser communication error): {}", e);
            "about:blank".to_string()
        }
    }
}

/// Wait until scripts have had a chance to build the tables
///
/// `wait_for_navigation()` resolves on the HTTP response, before client-side
/// rendering. This polls `document.readyState` until `complete`, then polls for
/// a `<table>` element. Both phases share `max_wait_secs`; running out of time
/// is not an error, the caller captures whatever is there.
pub async fn wait_for_rendered_page(page: &Page, max_wait_secs: u64) {
    let start = Instant::now();
    let max_wait = Duration::from_secs(max_wait_secs);
    let poll_interval = Duration::from_millis(200);

    debug!("Waiting for page to render (max {}s)", max_wait_secs);

    loop {
        if start.elapsed() >= max_wait {
            debug!("Document not complete after {}s, proceeding", max_wait_secs);
            return;
        }

        let ready = match page.evaluate(READY_STATE_SCRIPT).await {
            Ok(result) => result
                .into_value::<serde_json::Value>()
                .map(|value| {
                    value.get("readyState").and_then(|v| v.as_str()) == Some("complete")
                        && value.get("bodyExists").and_then(serde_json::Value::as_bool)
                            == Some(true)
                })
                .unwrap_or(false),
            Err(e) => {
                trace!("readyState probe failed: {}", e);
                false
            }
        };

        if ready {
            break;
        }
        tokio::time::sleep(poll_interval).await;
    }

    loop {
        if page.find_element("table").await.is_ok() {
            info!("Table element rendered after {:.2}s", start.elapsed().as_secs_f64());
            return;
        }
        if start.elapsed() >= max_wait {
            info!("No table element after {}s, capturing page as-is", max_wait_secs);
            return;
        }
        tokio::time::sleep(poll_interval).await;
    }
}
