// render-page - Write the page as a standalone HTML document
//
// Sections are emitted revealed by default so the file reads fine without
// JavaScript. `--hidden` emits the pre-reveal classes for the wasm mount
// to take over.
//
// Usage: cargo run --bin render-page -- [--out index.html] [--model-src PATH] [--hidden]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use formella_page::content::PAGE;
use formella_page::render::{self, RenderOptions};
use formella_page::PageConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "render-page", version, about = "Render the Formella page to static HTML")]
struct Args {
    /// Output file
    #[arg(short, long, default_value = "index.html")]
    out: PathBuf,

    /// Page config (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the glTF asset path
    #[arg(long)]
    model_src: Option<String>,

    /// Emit sections in their pre-reveal state
    #[arg(long)]
    hidden: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => PageConfig::default(),
    };
    if let Some(src) = args.model_src {
        config.model_src = src;
    }
    config.validate()?;
    tracing::debug!(?config, "config loaded");

    let options = RenderOptions { model_src: Some(&config.model_src) };
    let revealed = !args.hidden;
    let html = render::document(&PAGE, &options, |_| revealed);

    fs::write(&args.out, &html).with_context(|| format!("writing {}", args.out.display()))?;
    tracing::info!(
        path = %args.out.display(),
        bytes = html.len(),
        sections = PAGE.sections.len(),
        revealed,
        "page written"
    );
    Ok(())
}

fn load_config(path: &Path) -> Result<PageConfig> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: PageConfig =
        toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
