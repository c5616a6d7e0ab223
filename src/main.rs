use clap::{Parser, Subcommand};
use snakedocs::{config, generate, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "snakedocs")]
#[command(about = "Static documentation-site generator for Bucket Snake")]
#[command(long_about = "\
Static documentation-site generator for Bucket Snake

One site.toml is the data source. It describes the site identity, theme
colors, and showcased users; the generator renders the landing page as
plain HTML with no runtime dependencies.

Source structure:

  site/
  ├── site.toml                # Site config (optional, defaults shipped)
  └── img/                     # Logo, favicon, feature images → copied to output

Run 'snakedocs gen-config' to generate a documented site.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site source directory
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the HTML site from the source directory
    Build {
        /// Language tag for the generated pages (defaults to "en")
        #[arg(long)]
        language: Option<String>,
    },
    /// Validate the site configuration without writing output
    Check,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build { language } => {
            let config = config::load_config(&cli.source)?;
            generate::generate_site(
                &config,
                &cli.source,
                &cli.output,
                &snakedocs::clock::SystemClock,
                language.as_deref(),
            )?;
            let assets_copied = cli.source.join("img").is_dir();
            output::print_generate_output(&config, assets_copied);
            println!("Site generated at {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let config = config::load_config(&cli.source)?;
            output::print_check_output(&config);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
