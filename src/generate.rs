//! HTML site generation.
//!
//! Takes the source directory (a `site.toml` plus an `img/` asset
//! directory) and writes the final static site: the landing page with the
//! splash, showcase, feature blocks, and footer, plus the copied assets.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html             # Landing page (home view + footer)
//! └── img/                   # Copied verbatim from the source directory
//!     ├── logo.png
//!     └── favicon.png
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping. CSS is
//! inlined into the page: color custom properties generated from config,
//! followed by the embedded base stylesheet.

use crate::clock::{Clock, SystemClock};
use crate::config::{self, ConfigError, SiteConfig};
use crate::{footer, home};
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Name of the asset directory copied from source to output.
const ASSETS_DIR: &str = "img";

/// Generate the site from `source` into `output_dir` using the wall clock.
pub fn generate(source: &Path, output_dir: &Path) -> Result<SiteConfig, GenerateError> {
    let config = config::load_config(source)?;
    generate_site(&config, source, output_dir, &SystemClock, None)?;
    Ok(config)
}

/// Generate the site from an already-resolved config.
///
/// `language` flows through to the home view; `None` uses the default.
pub fn generate_site(
    config: &SiteConfig,
    source: &Path,
    output_dir: &Path,
    clock: &dyn Clock,
    language: Option<&str>,
) -> Result<(), GenerateError> {
    fs::create_dir_all(output_dir)?;

    let index_html = render_index(config, clock, language);
    fs::write(output_dir.join("index.html"), index_html.into_string())?;

    // Copy assets through verbatim
    let assets_src = source.join(ASSETS_DIR);
    if assets_src.is_dir() {
        let assets_dst = output_dir.join(ASSETS_DIR);
        fs::create_dir_all(&assets_dst)?;
        copy_dir_recursive(&assets_src, &assets_dst)?;
    }

    Ok(())
}

/// Renders the complete landing page document.
pub fn render_index(config: &SiteConfig, clock: &dyn Clock, language: Option<&str>) -> Markup {
    let color_css = config::generate_color_css(&config.colors);
    let css = format!("{}\n\n{}", color_css, CSS_STATIC);
    let page_title = format!("{} · {}", config.title, config.tagline);
    let language = home::resolve_language(language);

    let content = html! {
        (home::render_home(config, Some(language)))
        (footer::render_footer(config, clock))
    };
    base_document(language, &page_title, config, &css, content)
}

/// Renders the base HTML document structure.
fn base_document(
    lang: &str,
    title: &str,
    config: &SiteConfig,
    css: &str,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(config.tagline);
                title { (title) }
                link rel="icon" href={ (config.base_url) (config.favicon) };
                style { (css) }
            }
            body {
                (content)
            }
        }
    }
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::FixedClock;
    use tempfile::TempDir;

    #[test]
    fn base_document_includes_doctype_and_lang() {
        let config = SiteConfig::default();
        let content = html! { p { "test" } };
        let doc = base_document("en", "Test", &config, "body {}", content).into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(r#"<html lang="en">"#));
    }

    #[test]
    fn render_index_contains_home_and_footer() {
        let config = SiteConfig::default();
        let html = render_index(&config, &FixedClock(2018), None).into_string();

        // home splash
        assert!(html.contains("project-title"));
        // footer
        assert!(html.contains("nav-footer"));
        assert!(html.contains("Copyright © 2018"));
    }

    #[test]
    fn render_index_title_combines_title_and_tagline() {
        let config = SiteConfig::default();
        let html = render_index(&config, &FixedClock(2018), None).into_string();
        assert!(html.contains("<title>Bucket Snake · An AWS lambda function"));
    }

    #[test]
    fn render_index_inlines_color_css() {
        let config = SiteConfig::default();
        let html = render_index(&config, &FixedClock(2018), None).into_string();
        assert!(html.contains("--color-primary: #81d34c"));
    }

    #[test]
    fn render_index_references_favicon() {
        let config = SiteConfig::default();
        let html = render_index(&config, &FixedClock(2018), None).into_string();
        assert!(html.contains(r#"href="/bucketsnake/img/favicon.png""#));
    }

    #[test]
    fn generate_site_writes_index_and_assets() {
        let source = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::create_dir(source.path().join("img")).unwrap();
        fs::write(source.path().join("img/logo.png"), b"png-bytes").unwrap();

        let config = SiteConfig::default();
        generate_site(
            &config,
            source.path(),
            output.path(),
            &FixedClock(2018),
            None,
        )
        .unwrap();

        let index = fs::read_to_string(output.path().join("index.html")).unwrap();
        assert!(index.contains("Bucket Snake"));
        assert!(output.path().join("img/logo.png").exists());
    }

    #[test]
    fn generate_site_without_assets_dir_is_ok() {
        let source = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();

        let config = SiteConfig::default();
        generate_site(
            &config,
            source.path(),
            output.path(),
            &FixedClock(2018),
            None,
        )
        .unwrap();

        assert!(output.path().join("index.html").exists());
        assert!(!output.path().join("img").exists());
    }

    #[test]
    fn generate_loads_config_from_source() {
        let source = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(
            source.path().join("site.toml"),
            r#"title = "Configured Title""#,
        )
        .unwrap();

        let config = generate(source.path(), output.path()).unwrap();
        assert_eq!(config.title, "Configured Title");

        let index = fs::read_to_string(output.path().join("index.html")).unwrap();
        assert!(index.contains("Configured Title"));
    }

    #[test]
    fn generate_propagates_config_errors() {
        let source = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(source.path().join("site.toml"), "not [[ valid").unwrap();

        let result = generate(source.path(), output.path());
        assert!(matches!(result, Err(GenerateError::Config(_))));
    }
}
