//! # snakedocs
//!
//! Static documentation-site generator for the Bucket Snake project.
//! One `site.toml` is the data source: it describes the site identity,
//! theme colors, and showcased users, and the generator renders the
//! landing page (splash, showcase, feature blocks, footer) as plain HTML.
//!
//! # Architecture
//!
//! ```text
//! site.toml  →  SiteConfig  →  index.html + img/
//! ```
//!
//! The configuration is loaded once at process start and passed read-only
//! to every renderer. Rendering is purely synchronous: each view is a pure
//! function from the config snapshot to markup. The only time-dependent
//! value is the copyright year, which comes from an injected [`clock::Clock`]
//! rather than an ambient system-time read, so output stays testable.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `site.toml` loading, default/overlay merging, validation |
//! | [`clock`] | Injected time capability for the copyright year |
//! | [`home`] | Home/landing view: splash, CTA row, pinned showcase, feature blocks |
//! | [`footer`] | Footer view: sitemap link groups and copyright line |
//! | [`generate`] | Renders `index.html` and copies assets to the output directory |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, template variables
//! are ordinary Rust expressions, and all interpolation is auto-escaped.
//! There is no template directory to ship or get out of sync.
//!
//! ## Config Defaults Are the Shipped Site
//!
//! The stock defaults are the Bucket Snake site values, so `snakedocs build`
//! in an empty directory reproduces the published landing page. A `site.toml`
//! overlays only the keys it names; unknown keys are rejected to catch typos.
//!
//! ## No Runtime Assets
//!
//! The base stylesheet is embedded at compile time and inlined into the page
//! together with color custom properties generated from config. The output
//! is a single HTML file plus the copied `img/` directory — it can be served
//! from any file host.

pub mod clock;
pub mod config;
pub mod footer;
pub mod generate;
pub mod home;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
