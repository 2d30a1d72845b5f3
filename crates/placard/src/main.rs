//! Placard command-line tool
//!
//! ## Usage
//!
//! ```bash
//! # One 1920x1080 placeholder for page 3, image 1
//! placard encode --page 3 --image 1 -o produce/images/3_1.png
//!
//! # Three slots on page 2; image index counts up per output
//! placard encode --page 2 -o 2_1.png -o 2_2.png -o 2_3.png
//!
//! # Fixed 1x1 transparent fallback
//! placard encode --minimal -o blank.png
//!
//! # List chunks and verify CRCs
//! placard inspect produce/images/3_1.png
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use placard::{
    write_slots, BatchReport, ChunkReader, ColorType, Crc32Fast, EncoderConfig, Error, Fill,
    PlaceholderEncoder, Slot,
};

#[derive(Parser, Debug)]
#[command(name = "placard")]
#[command(author = "Daemoniorum LLC")]
#[command(version)]
#[command(about = "Deterministic placeholder PNG encoder", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write placeholder images
    Encode(EncodeArgs),
    /// List the chunks of a PNG file and verify their checksums
    Inspect {
        /// File to inspect
        path: PathBuf,
    },
}

#[derive(Args, Debug)]
struct EncodeArgs {
    /// Output file; repeat for several image slots
    #[arg(short, long = "output", required = true)]
    outputs: Vec<PathBuf>,

    /// Configuration file path (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Image width (overrides config)
    #[arg(long)]
    width: Option<u32>,

    /// Image height (overrides config)
    #[arg(long)]
    height: Option<u32>,

    /// 1-based page index
    #[arg(long, default_value = "1")]
    page: u32,

    /// 1-based index of the first image slot
    #[arg(long, default_value = "1")]
    image: u32,

    /// Annotation text of the slot
    #[arg(long, default_value = "")]
    annotation: String,

    /// Write the fixed 1x1 transparent image instead of the test card
    #[arg(long)]
    minimal: bool,

    /// Emit RGBA instead of RGB
    #[arg(long)]
    rgba: bool,

    /// Omit the tEXt metadata chunk
    #[arg(long)]
    no_metadata: bool,

    /// zlib compression level (0-9, overrides config)
    #[arg(long)]
    level: Option<i32>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to set tracing subscriber: {}", e);
    }

    match cli.command {
        Command::Encode(args) => run_encode(args),
        Command::Inspect { path } => run_inspect(&path),
    }
}

fn resolve_config(args: &EncodeArgs) -> placard::Result<EncoderConfig> {
    let mut config = match &args.config {
        Some(path) => EncoderConfig::from_file(path)?,
        None => EncoderConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(level) = args.level {
        config.compression_level = level;
    }
    if args.rgba {
        config.color_type = ColorType::Rgba;
    }
    if args.no_metadata {
        config.embed_metadata = false;
    }

    config.validate()?;
    Ok(config)
}

fn build_slots(args: &EncodeArgs) -> placard::Result<Vec<Slot>> {
    args.outputs
        .iter()
        .enumerate()
        .map(|(offset, path)| -> placard::Result<Slot> {
            let image = u32::try_from(offset)
                .ok()
                .and_then(|offset| args.image.checked_add(offset))
                .ok_or_else(|| {
                    Error::Config(format!(
                        "--image {} with {} outputs overflows the image index",
                        args.image,
                        args.outputs.len()
                    ))
                })?;
            Ok(Slot {
                path: path.clone(),
                page: args.page,
                image,
                annotation: args.annotation.clone(),
            })
        })
        .collect()
}

fn encode(args: &EncodeArgs) -> placard::Result<BatchReport> {
    let config = resolve_config(args)?;
    let slots = build_slots(args)?;

    let fill = if args.minimal {
        Fill::Minimal
    } else {
        Fill::Pattern {
            width: config.width,
            height: config.height,
        }
    };

    info!(
        slots = slots.len(),
        width = config.width,
        height = config.height,
        color = config.color_type.name(),
        minimal = args.minimal,
        "writing placeholders"
    );

    let encoder = PlaceholderEncoder::from_config(&config);
    let report = write_slots(&encoder, fill, &slots);

    info!(
        written = report.written.len(),
        failed = report.failed.len(),
        "done"
    );
    Ok(report)
}

fn run_encode(args: EncodeArgs) -> ExitCode {
    match encode(&args) {
        Ok(report) if report.is_complete() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!(category = e.category(), "invalid arguments: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn inspect(path: &Path) -> placard::Result<Vec<String>> {
    let bytes = std::fs::read(path)?;
    let reader = ChunkReader::new(&bytes, Crc32Fast)?;

    let mut lines = vec![format!("{}: {} bytes", path.display(), bytes.len())];
    for chunk in reader.read_all()? {
        lines.push(format!(
            "  {:>8}  {}  len={:<10} crc=0x{:08x}",
            chunk.offset,
            chunk.kind_str(),
            chunk.data.len(),
            chunk.crc
        ));
    }
    Ok(lines)
}

fn run_inspect(path: &Path) -> ExitCode {
    match inspect(path) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(path = %path.display(), category = e.category(), "{}", e);
            ExitCode::FAILURE
        }
    }
}
