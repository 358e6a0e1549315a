//! Browser session management
//!
//! Owns the single chromiumoxide browser a scrape run uses: launch, navigate,
//! wait for rendering, hand out the rendered markup and shut everything down.

mod page_helpers;
mod page_timeout;
mod session;
mod wrapper;

pub use page_helpers::{get_page_url_with_fallback, wait_for_rendered_page};
pub use page_timeout::with_page_timeout;
pub use session::BrowserSession;
pub use wrapper::BrowserWrapper;
