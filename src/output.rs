//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ## Check
//!
//! ```text
//! Site
//!     Bucket Snake — An AWS lambda function that grantsss ...
//!     Base URL: /bucketsnake/
//!     Organization: Netflix-Skunkworks/bucketsnake
//! Showcase
//!     001 Bucket Snake (pinned)
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! Assets → img/
//! Generated 1 page, 1 showcase entry
//! ```

use crate::config::SiteConfig;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

/// Format check output: the resolved site identity and showcase list.
pub fn format_check_output(config: &SiteConfig) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Site".to_string());
    lines.push(format!(
        "    {} \u{2014} {}",
        config.title,
        truncate(&config.tagline, 60)
    ));
    lines.push(format!("    Base URL: {}", config.base_url));
    lines.push(format!(
        "    Organization: {}/{}",
        config.organization, config.project
    ));

    if !config.users.is_empty() {
        lines.push("Showcase".to_string());
        for (i, user) in config.users.iter().enumerate() {
            let marker = if user.pinned { " (pinned)" } else { "" };
            lines.push(format!(
                "    {} {}{}",
                format_index(i + 1),
                user.caption,
                marker
            ));
        }
    }

    lines
}

/// Print check output to stdout.
pub fn print_check_output(config: &SiteConfig) {
    for line in format_check_output(config) {
        println!("{}", line);
    }
}

/// Format generate output: what was written where.
pub fn format_generate_output(config: &SiteConfig, assets_copied: bool) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Home \u{2192} index.html".to_string());
    if assets_copied {
        lines.push("Assets \u{2192} img/".to_string());
    }
    let pinned = config.pinned_users().len();
    let entry_word = if pinned == 1 { "entry" } else { "entries" };
    lines.push(format!(
        "Generated 1 page, {} showcase {}",
        pinned, entry_word
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(config: &SiteConfig, assets_copied: bool) {
    for line in format_generate_output(config, assets_copied) {
        println!("{}", line);
    }
}
