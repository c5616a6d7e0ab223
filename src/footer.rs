//! Site footer: navigation sitemap and copyright line.
//!
//! The footer is a pure function of the config snapshot plus the injected
//! clock. It renders a home link (footer icon), three link groups
//! ("Background", "Getting Started", "Community"), and a copyright line
//! whose year is read from the clock at each render call.
//!
//! Documentation link targets are `base_url` + fixed suffixes — they are
//! not derived from any configured list. The Community link is a fixed
//! external URL, independent of config.

use crate::clock::Clock;
use crate::config::SiteConfig;
use maud::{Markup, html};

/// External community link. Hard-coded: the upstream repository does not
/// move when the site is rehosted under a different base URL.
const COMMUNITY_URL: &str = "https://github.com/Netflix-Skunkworks/bucketsnake";

/// Renders the footer navigation region.
pub fn render_footer(config: &SiteConfig, clock: &dyn Clock) -> Markup {
    let year = clock.current_year();
    html! {
        footer.nav-footer id="footer" {
            section.sitemap {
                a.nav-home href=(config.base_url) {
                    img src={ (config.base_url) (config.footer_icon) }
                        alt=(config.title)
                        width="66"
                        height="58";
                }
                div {
                    h5 { "Background" }
                    a href=(config.doc_url("intro.html")) { "Introduction" }
                    a href=(config.doc_url("s3background.html")) { "General S3 Background" }
                    a href=(config.doc_url("howitworks.html")) { "How Bucket Snake Works" }
                }
                div {
                    h5 { "Getting Started" }
                    a href=(config.doc_url("installation.html")) { "Installation" }
                    a href=(config.doc_url("configuration.html")) { "Configuration" }
                }
                div {
                    h5 { "Community" }
                    a href=(COMMUNITY_URL) target="_blank" rel="noopener" { "GitHub" }
                }
            }
            section.copyright {
                "Copyright © " (year) ", " (config.copyright_holder)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::FixedClock;

    #[test]
    fn footer_has_one_home_link_with_footer_icon() {
        let config = SiteConfig::default();
        let html = render_footer(&config, &FixedClock(2018)).into_string();

        let needle = r#"src="/bucketsnake/img/logo.png""#;
        assert_eq!(html.matches("nav-home").count(), 1);
        assert!(html.contains(needle));
        assert!(html.contains(r#"alt="Bucket Snake""#));
    }

    #[test]
    fn footer_home_link_tracks_base_url() {
        let mut config = SiteConfig::default();
        config.base_url = "/other/".to_string();
        config.footer_icon = "img/mark.png".to_string();
        let html = render_footer(&config, &FixedClock(2018)).into_string();

        assert!(html.contains(r#"src="/other/img/mark.png""#));
        assert!(html.contains(r#"href="/other/""#));
    }

    #[test]
    fn footer_copyright_uses_clock_year() {
        let config = SiteConfig::default();
        let html = render_footer(&config, &FixedClock(2018)).into_string();
        assert!(html.contains("Copyright © 2018, Netflix, Inc."));

        let html = render_footer(&config, &FixedClock(2026)).into_string();
        assert!(html.contains("Copyright © 2026, Netflix, Inc."));
    }

    #[test]
    fn footer_doc_links_use_base_url() {
        let config = SiteConfig::default();
        let html = render_footer(&config, &FixedClock(2018)).into_string();

        assert!(html.contains(r#"href="/bucketsnake/docs/intro.html""#));
        assert!(html.contains(r#"href="/bucketsnake/docs/s3background.html""#));
        assert!(html.contains(r#"href="/bucketsnake/docs/howitworks.html""#));
        assert!(html.contains(r#"href="/bucketsnake/docs/installation.html""#));
        assert!(html.contains(r#"href="/bucketsnake/docs/configuration.html""#));
    }

    #[test]
    fn footer_community_link_is_fixed() {
        let mut config = SiteConfig::default();
        config.base_url = "/elsewhere/".to_string();
        let html = render_footer(&config, &FixedClock(2018)).into_string();
        assert!(html.contains(COMMUNITY_URL));
    }

    #[test]
    fn footer_link_groups_present() {
        let config = SiteConfig::default();
        let html = render_footer(&config, &FixedClock(2018)).into_string();
        assert!(html.contains("Background"));
        assert!(html.contains("Getting Started"));
        assert!(html.contains("Community"));
    }
}
