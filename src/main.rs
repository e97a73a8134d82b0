use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rawpix::image_pipeline::{
    EncodeConfig, FilterOp, PreviewPipeline, ResizeFilter, SourceToRawPipeline, filters,
};
use rawpix::logger;

use tracing::{error, info};

#[derive(Parser)]
#[command(name = "rawpix", about = "Raw image fixture generator and previewer", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a compressed source image into a raw fixture file
    Encode {
        /// Path to the source image (JPEG, PNG, ...)
        source: PathBuf,
        /// Path of the raw file to write
        dest: PathBuf,
        /// Target width of the raw file
        #[arg(long, default_value_t = 300)]
        width: u32,
        /// Target height of the raw file
        #[arg(long, default_value_t = 300)]
        height: u32,
        /// Resampling filter for the resize step
        #[arg(long, value_enum, default_value = "triangle")]
        filter: FilterArg,
    },
    /// Decode a raw file and open it in the platform image viewer
    Preview {
        /// Path to the raw-format file
        raw_file: PathBuf,
    },
    /// Apply a filter pass to a raw file, writing another raw file
    Process {
        /// Path to the raw-format input file
        input: PathBuf,
        /// Path of the raw file to write
        output: PathBuf,
        /// Filter to apply
        #[arg(long, value_enum)]
        filter: ProcessFilter,
        /// Lower hysteresis threshold (sobel only)
        #[arg(long, default_value_t = 10)]
        low: u8,
        /// Upper hysteresis threshold (sobel only)
        #[arg(long, default_value_t = 17)]
        high: u8,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterArg {
    Nearest,
    Triangle,
    CatmullRom,
    Lanczos3,
}

impl From<FilterArg> for ResizeFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Nearest => ResizeFilter::Nearest,
            FilterArg::Triangle => ResizeFilter::Triangle,
            FilterArg::CatmullRom => ResizeFilter::CatmullRom,
            FilterArg::Lanczos3 => ResizeFilter::Lanczos3,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProcessFilter {
    Gaussian3,
    Gaussian5,
    Sobel,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Encode {
            source,
            dest,
            width,
            height,
            filter,
        } => {
            let config = EncodeConfig::builder()
                .target_width(width)
                .target_height(height)
                .filter(filter.into())
                .build();
            let pipeline = SourceToRawPipeline::new(config);

            info!("Source to raw pipeline initialized");
            info!(
                "Target resolution: {}x{}",
                pipeline.config().target_width,
                pipeline.config().target_height
            );

            pipeline.convert_file(&source, &dest)?;
            info!("Finished generating raw file");
            Ok(())
        }
        Command::Preview { raw_file } => {
            let pipeline = PreviewPipeline::new();
            pipeline.preview_file(&raw_file)?;
            Ok(())
        }
        Command::Process {
            input,
            output,
            filter,
            low,
            high,
        } => {
            let op = match filter {
                ProcessFilter::Gaussian3 => FilterOp::Gaussian3x3,
                ProcessFilter::Gaussian5 => FilterOp::Gaussian5x5,
                ProcessFilter::Sobel => FilterOp::Sobel { low, high },
            };
            filters::apply_file(&input, &output, op)?;
            Ok(())
        }
    }
}

fn main() {
    logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}
