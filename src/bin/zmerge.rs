use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "zmerge", version)]
/// Composite rendered layers by per-pixel depth.
struct Cli {
    /// Layer list (JSON array of {"I": color, "Z": depth, "M": mode}).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image path; always written as PNG.
    #[arg(long)]
    out: PathBuf,

    /// Treat smaller depth values as nearer (sort descending).
    #[arg(long, default_value_t = false)]
    invert_z: bool,

    /// Grow depth footprints by one pixel before merging.
    #[arg(long, default_value_t = false)]
    expand_z: bool,

    /// Resample the output to this width (0 keeps the input size).
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Resample the output to this height (0 keeps the input size).
    #[arg(long, requires = "width")]
    height: Option<u32>,

    /// Background every pixel starts from, as "r,g,b,a" in [0, 1].
    #[arg(long, default_value = "0,0,0,0")]
    background: String,

    /// Output bits per channel (8 or 16).
    #[arg(long, default_value_t = 16)]
    bit_depth: u32,

    /// Merge rows on a single thread.
    #[arg(long, default_value_t = false)]
    sequential: bool,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,

    /// Log per-layer details.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let opts = zmerge::RunOpts {
        layers_path: cli.in_path,
        out_path: cli.out.clone(),
        expand_z: cli.expand_z,
        merge: zmerge::MergeOpts {
            invert_z: cli.invert_z,
            background: zmerge::parse_rgba(&cli.background).context("parse --background")?,
            threading: zmerge::MergeThreading {
                parallel: !cli.sequential,
                threads: cli.threads,
            },
        },
        out_size: cli
            .width
            .zip(cli.height)
            .map(|(w, h)| zmerge::Resolution::new(w, h)),
        bit_depth: zmerge::BitDepth::from_bits(cli.bit_depth)?,
    };

    zmerge::run(&opts)?;

    eprintln!("wrote {}", cli.out.display());
    Ok(())
}
