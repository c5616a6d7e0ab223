//! Home/landing page.
//!
//! A pure, synchronous transformation of the config snapshot into markup:
//! splash banner (title, tagline, logo, warning), call-to-action row,
//! pinned-user showcase, and the fixed feature blocks. Prose blocks are
//! written in markdown and converted with pulldown-cmark at render time.

use crate::config::SiteConfig;
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

/// Language used when the caller does not supply one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// A fixed promotional block on the landing page.
struct Feature {
    title: &'static str,
    content: &'static str,
    /// Image path relative to `base_url`.
    image: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Serverless",
        content: "AWS Lambda function that does all the work.",
        image: "img/Compute_AWSLambda_LARGE.png",
    },
    Feature {
        title: "Simplify S3 Access",
        content: "AWS S3 permissions are hard. Cross-account permissions are harder. \
                  Bucket Snake simplifies the provisioning of this.",
        image: "img/s3check.png",
    },
    Feature {
        title: "Eliminate Cross-Account S3 Issues",
        content: "Creates assumable roles in the bucket residing account. Applications \
                  assume these app-specific roles for S3 access.",
        image: "img/logo.png",
    },
];

const ACL_PITCH_TITLE: &str = "Permanently resolve cross-account S3 access problems";
const ACL_PITCH: &str = "By relying on IAM for all S3 access, Bucket Snake resolves \
                         access issues by completely avoiding bucket and object ACLs.";

const GRANTING_TITLE: &str = "Granting the Right Permissions";
const GRANTING: &str = "Bucket Snake receives a JSON payload on lambda invocation with \
details on which S3 buckets an application needs. Bucket Snake figures out the correct \
IAM permissions to grant.\nThe application then has the correct permissions to assume \
into the correct IAM roles to access a given bucket.\n\n\
See the [how it works](docs/howitworks.html) docs for details.";

/// Resolve the effective language tag: the caller's value, or [`DEFAULT_LANGUAGE`].
pub fn resolve_language(language: Option<&str>) -> &str {
    language.unwrap_or(DEFAULT_LANGUAGE)
}

/// Renders the home page content.
///
/// `language` becomes the `lang` attribute of the page container; `None`
/// falls back to [`DEFAULT_LANGUAGE`].
pub fn render_home(config: &SiteConfig, language: Option<&str>) -> Markup {
    let language = resolve_language(language);
    html! {
        div.home-container lang=(language) {
            (render_splash(config))
            div.main-container {
                (render_showcase(config))
                (render_features(config))
                section.pitch {
                    h2 { (ACL_PITCH_TITLE) }
                    (markdown_block(ACL_PITCH))
                }
                (render_granting(config))
            }
        }
    }
}

/// Renders the splash banner: title, tagline, logo, warning, CTA row.
fn render_splash(config: &SiteConfig) -> Markup {
    html! {
        div.splash {
            h2.project-title {
                (config.title)
                small { (config.tagline) }
            }
            img.splash-logo src={ (config.base_url) (config.header_icon) }
                alt=(config.title)
                width="300";
            @if !config.warning.is_empty() {
                small.warning { (config.warning) }
            }
            div.promo-row {
                a.button href=(config.doc_url("intro.html")) { "Background Info" }
                a.button href=(config.doc_url("howitworks.html")) { "How it Works" }
                a.button href=(config.doc_url("installation.html")) { "Getting Started" }
            }
        }
    }
}

/// Renders the pinned-user showcase, preserving configured order.
///
/// With zero pinned entries the section is omitted entirely — an empty
/// showcase is a normal state, not an error.
fn render_showcase(config: &SiteConfig) -> Markup {
    let pinned = config.pinned_users();
    html! {
        @if !pinned.is_empty() {
            section.showcase {
                @for user in &pinned {
                    a href=(user.info_link) {
                        img src=(user.image) title=(user.caption) alt=(user.caption);
                    }
                }
            }
        }
    }
}

/// Renders the fixed three-block feature grid.
fn render_features(config: &SiteConfig) -> Markup {
    html! {
        section.feature-grid {
            @for feature in &FEATURES {
                div.feature {
                    img src={ (config.base_url) (feature.image) } alt=(feature.title);
                    h3 { (feature.title) }
                    p { (feature.content) }
                }
            }
        }
    }
}

/// Renders the "how permissions are granted" callout.
fn render_granting(config: &SiteConfig) -> Markup {
    html! {
        section.feature-callout {
            div.feature-callout-text {
                h2 { (GRANTING_TITLE) }
                (markdown_block(GRANTING))
            }
            img src={ (config.base_url) "img/logo.png" } alt=(GRANTING_TITLE);
        }
    }
}

/// Convert a markdown snippet to HTML markup.
fn markdown_block(source: &str) -> Markup {
    let parser = Parser::new(source);
    let mut body = String::new();
    md_html::push_html(&mut body, parser);
    PreEscaped(body)
}
