//! `slideshow` - inspect and preview slideshow markup from the command line.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slideshow_widget::{SlideSource, SlideshowError};

#[derive(Parser, Debug)]
#[command(name = "slideshow", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve slideshow attributes and print the slide list as JSON
    Parse(SourceArgs),

    /// Open a window hosting the slideshow, with slides read from local files.
    ///
    /// Only PNG, JPEG, BMP and GIF slides can be displayed; SVG and other
    /// formats show as load failures.
    #[cfg(feature = "preview")]
    Preview(PreviewArgs),
}

/// The container attributes, one flag each.
#[derive(Args, Debug, Clone, Default)]
struct SourceArgs {
    /// Comma-separated filenames (data-files)
    #[arg(long)]
    files: Option<String>,

    /// Prefix for relative filenames (data-base)
    #[arg(long)]
    base: Option<String>,

    /// Alt text shared by all slides (data-alt)
    #[arg(long)]
    alt: Option<String>,

    /// JSON list of {"src", "alt"} objects (data-slides)
    #[arg(long)]
    slides: Option<String>,
}

impl SourceArgs {
    fn to_source(&self) -> SlideSource {
        SlideSource {
            files: self.files.clone(),
            base: self.base.clone(),
            alt: self.alt.clone(),
            slides: self.slides.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Parse(args) => run_parse(&args),
        #[cfg(feature = "preview")]
        Command::Preview(args) => preview_cmd::run_preview(args),
    }
}

fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "slideshow=debug,slideshow_widget=debug"
    } else {
        "slideshow=info,slideshow_widget=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_parse(args: &SourceArgs) -> Result<()> {
    println!("{}", render_slides(args)?);
    Ok(())
}

// Pretty JSON of the resolved slide list; an empty list is an error
fn render_slides(args: &SourceArgs) -> Result<String> {
    let slides = args.to_source().parse()?;
    if slides.is_empty() {
        return Err(SlideshowError::NoSlides.into());
    }
    Ok(serde_json::to_string_pretty(&slides)?)
}

#[cfg(feature = "preview")]
mod preview_cmd {
    use std::path::PathBuf;

    use anyhow::{bail, Result};
    use clap::Args;
    use tracing::info;

    use slideshow_widget::bootstrap;
    use slideshow_widget::config::Config;
    use slideshow_widget::constants::*;
    use slideshow_widget::dom::MemoryDocument;
    use slideshow_widget::preview::{self, PreviewOptions, DEFAULT_HEIGHT, DEFAULT_WIDTH};
    use slideshow_widget::texture_loader::sorted_image_names;

    use super::SourceArgs;

    #[derive(Args, Debug)]
    pub struct PreviewArgs {
        #[command(flatten)]
        source: SourceArgs,

        /// Use every image in this directory (sets --files and --base)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Show every diagnostic on screen
        #[arg(long, env = "SLIDESHOW_DEBUG")]
        debug: bool,

        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: i32,

        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: i32,
    }

    pub fn run_preview(args: PreviewArgs) -> Result<()> {
        let mut source = args.source;
        if let Some(dir) = &args.dir {
            let names = sorted_image_names(dir)?;
            info!("Found {} image(s) in {}", names.len(), dir.display());
            source.files.get_or_insert_with(|| names.join(","));
            source.base.get_or_insert_with(|| dir.display().to_string());
        }

        let attributes: Vec<(&str, &str)> = [
            (FILES_ATTR, &source.files),
            (BASE_ATTR, &source.base),
            (ALT_ATTR, &source.alt),
            (SLIDES_ATTR, &source.slides),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|value| (name, value)))
        .collect();

        let config = Config::default().with_debug(args.debug);
        let doc = MemoryDocument::new();
        let nodes = doc.insert_slideshow(&config.markers, &attributes);

        if bootstrap::init_all(&doc, &config) == 0 {
            bail!("slideshow could not be activated");
        }

        preview::run(&doc, nodes, PreviewOptions { width: args.width, height: args.height })
    }
}

#[cfg(feature = "preview")]
use preview_cmd::PreviewArgs;
