//! Shared test utilities for the snakedocs test suite.
//!
//! Provides a deterministic clock and showcase-list builders used by the
//! view and output tests.

use crate::clock::Clock;
use crate::config::{ShowcaseEntry, SiteConfig};

/// A clock pinned to a fixed year.
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

/// A showcase entry with a deterministic image path and link derived from
/// the caption.
pub fn entry(caption: &str, pinned: bool) -> ShowcaseEntry {
    let slug = caption.to_lowercase().replace(' ', "-");
    ShowcaseEntry {
        caption: caption.to_string(),
        image: format!("/img/{slug}.png"),
        info_link: format!("https://{slug}.example"),
        pinned,
    }
}

/// Default config with the users list replaced.
pub fn config_with_users(users: Vec<ShowcaseEntry>) -> SiteConfig {
    SiteConfig {
        users,
        ..SiteConfig::default()
    }
}
