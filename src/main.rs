use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ditherview::models::{AppConfig, CONFIG_ENV};
use ditherview::services::pipeline;
use ditherview::Algorithm;

#[derive(Parser)]
#[command(name = "ditherview")]
#[command(about = "Black-and-white error diffusion dithering of PNG images")]
struct Cli {
    /// Configuration file (default: $DITHERVIEW_CONFIG or ditherview.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dither an image with one algorithm and write a PNG
    Render {
        #[command(flatten)]
        source: Source,

        /// Output PNG file path (default: <output_dir>/<name>-<algorithm>.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Algorithm name, e.g. "atkinson" or "floyd-steinberg"
        #[arg(short, long)]
        algorithm: Option<Algorithm>,

        /// Recompress the output losslessly with oxipng
        #[arg(long)]
        optimize: bool,
    },
    /// Dither an image with every algorithm, one PNG each
    RenderAll {
        #[command(flatten)]
        source: Source,

        /// Output directory (default: output_dir from the config)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Recompress the outputs losslessly with oxipng
        #[arg(long)]
        optimize: bool,
    },
    /// List available algorithms
    Algorithms,
    /// List configured stock images
    Images,
}

/// Where the input image comes from
#[derive(Args)]
#[group(required = true, multiple = false)]
struct Source {
    /// Input PNG file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Name of a stock image from the config
    #[arg(long)]
    image: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = AppConfig::resolve_path(cli.config.as_deref());

    match cli.command {
        Some(Commands::Render {
            source,
            output,
            algorithm,
            optimize,
        }) => {
            init_logging();
            let config = AppConfig::load(&config_path);
            run_render_command(&config, &source, output, algorithm, optimize)
        }
        Some(Commands::RenderAll {
            source,
            output_dir,
            optimize,
        }) => {
            init_logging();
            let config = AppConfig::load(&config_path);
            run_render_all_command(&config, &source, output_dir, optimize)
        }
        Some(Commands::Algorithms) => {
            run_algorithms_command();
            Ok(())
        }
        Some(Commands::Images) => {
            init_logging();
            run_images_command(&AppConfig::load(&config_path));
            Ok(())
        }
        None => {
            run_status_command(&config_path);
            Ok(())
        }
    }
}

/// Minimal logging for CLI
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ditherview=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Resolve `--input` / `--image` to a file path and an output name stem
fn resolve_source(config: &AppConfig, source: &Source) -> anyhow::Result<(PathBuf, String)> {
    if let Some(name) = &source.image {
        let image = config.resolve_image(name)?;
        return Ok((image.path.clone(), name.clone()));
    }

    let input = source
        .input
        .clone()
        .context("either --input or --image is required")?;
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image")
        .to_string();
    Ok((input, stem))
}

fn run_render_command(
    config: &AppConfig,
    source: &Source,
    output: Option<PathBuf>,
    algorithm: Option<Algorithm>,
    optimize: bool,
) -> anyhow::Result<()> {
    let (input, stem) = resolve_source(config, source)?;
    let algorithm = config
        .algorithm_or_default(algorithm)
        .context("invalid default_algorithm in config")?;
    let output =
        output.unwrap_or_else(|| pipeline::output_path(&config.output_dir, &stem, algorithm));

    pipeline::render_file(&input, &output, algorithm, optimize)
        .with_context(|| format!("failed to render {}", input.display()))?;

    println!("{}", output.display());
    Ok(())
}

fn run_render_all_command(
    config: &AppConfig,
    source: &Source,
    output_dir: Option<PathBuf>,
    optimize: bool,
) -> anyhow::Result<()> {
    let (input, stem) = resolve_source(config, source)?;
    let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());

    let written = pipeline::render_all(&input, &output_dir, &stem, optimize)
        .with_context(|| format!("failed to render {}", input.display()))?;

    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

fn run_algorithms_command() {
    println!("Algorithms:\n");
    for algorithm in Algorithm::ALL {
        let detail = match algorithm.kernel() {
            Some(kernel) => format!(
                "{:>5.1}% error propagation, {} taps",
                kernel.propagation() * 100.0,
                kernel.taps.len()
            ),
            None => "no diffusion".to_string(),
        };
        let default = if algorithm == Algorithm::default() {
            " (default)"
        } else {
            ""
        };
        println!(
            "  {:<20} {:<22} {detail}{default}",
            algorithm.slug(),
            algorithm.label()
        );
    }
}

fn run_images_command(config: &AppConfig) {
    if config.images.is_empty() {
        println!("No images configured.");
        return;
    }

    println!("Images:\n");
    for (name, image) in &config.images {
        let status = if image.path.exists() { "" } else { " (missing)" };
        println!(
            "  {name:<16} {:<16} {}{status}",
            image.label,
            image.path.display()
        );
    }
}

fn run_status_command(config_path: &Path) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Ditherview v{VERSION}");
    println!("Black-and-white error diffusion dithering\n");

    // Environment variables section
    let config_env = std::env::var(CONFIG_ENV).ok();
    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        config_env.as_deref().unwrap_or("(not set)")
    );

    // Config source
    let config_source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        format!("defaults ({} not found)", config_path.display())
    };
    println!("\nConfig: {config_source}");

    // Commands section
    println!("\nCommands:");
    println!("  ditherview render       Dither an image with one algorithm");
    println!("  ditherview render-all   Dither an image with every algorithm");
    println!("  ditherview algorithms   List available algorithms");
    println!("  ditherview images       List configured stock images");
    println!("\nRun 'ditherview --help' for more details.");
}
