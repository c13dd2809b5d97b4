use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

use camera_border::{AspectRatio, BorderOpts, CameraBorder, CanvasSize};

/// Render an animated camera-border overlay as a directory of numbered PNG frames.
#[derive(Parser, Debug)]
#[command(name = "camera-border", version)]
struct Cli {
    /// Directory receiving `00.png`, `01.png`, ...
    #[arg(
        long = "output-dir",
        visible_alias = "output_dir",
        env = "CAMERA_BORDER_DIR"
    )]
    output_dir: PathBuf,

    /// Canvas preset: 1:1, 4:3 or 16:9.
    #[arg(long = "aspect-ratio", visible_alias = "aspect_ratio", default_value = "16:9")]
    aspect_ratio: String,

    /// Explicit canvas width in pixels (overrides the aspect ratio).
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Explicit canvas height in pixels (overrides the aspect ratio).
    #[arg(long, requires = "width")]
    height: Option<u32>,

    /// Start color: palette name or #RRGGBB. Needs --secondary-color too.
    #[arg(long = "primary-color", visible_alias = "primary_color")]
    primary_color: Option<String>,

    /// End color: palette name or #RRGGBB. Needs --primary-color too.
    #[arg(long = "secondary-color", visible_alias = "secondary_color")]
    secondary_color: Option<String>,

    /// Two-color preset used when explicit colors are not both given.
    #[arg(long, default_value = camera_border::DEFAULT_PROFILE)]
    profile: String,

    /// Degrees between sampled gradient axes; must divide 180.
    #[arg(long = "degree-step", visible_alias = "degree_step", default_value_t = BorderOpts::DEFAULT_DEGREE_STEP)]
    degree_step: u32,

    /// Gaussian blur sigma applied to every frame after trimming.
    #[arg(long)]
    blur: Option<f32>,

    /// Draw the layout rectangles and gradient axis on top of every frame.
    #[arg(long)]
    guides: bool,

    /// Render frames on a thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for --parallel (defaults to the number of CPUs).
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,

    /// Log per-frame progress.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let (primary, secondary) = camera_border::resolve_colors(
        cli.primary_color.as_deref(),
        cli.secondary_color.as_deref(),
        &cli.profile,
    )
    .context("resolve colors")?;

    let size = match (cli.width, cli.height) {
        (Some(width), Some(height)) => CanvasSize::Explicit { width, height },
        _ => CanvasSize::Aspect(
            cli.aspect_ratio
                .parse::<AspectRatio>()
                .context("parse --aspect-ratio")?,
        ),
    };

    let opts = BorderOpts {
        degree_step: cli.degree_step,
        blur_sigma: cli.blur,
        guides: cli.guides,
        parallel: cli.parallel,
        threads: cli.threads,
    };

    let border = CameraBorder::render(size, primary, secondary, &opts)?;
    let written = border
        .save(&cli.output_dir)
        .with_context(|| format!("write frames to '{}'", cli.output_dir.display()))?;

    eprintln!(
        "wrote {} frames to {}",
        written.len(),
        cli.output_dir.display()
    );
    Ok(())
}
