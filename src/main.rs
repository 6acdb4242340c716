use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use pixel_gate::mock::{MockImage, parse_hex_color};
use pixel_gate::report::{WikiWriter, print_summary};
use pixel_gate::runner::{GateConfig, run_gate};

/// pixel-gate - Golden-image regression gating for CI
#[derive(Parser, Debug)]
#[command(
    name = "pixel-gate",
    about = "Compare emulator output against golden images with an external perceptual comparator",
    after_help = "ENVIRONMENT VARIABLES:\n\
        PIXEL_GATE_COMPARATOR    Perceptual comparator binary\n\
        PIXEL_GATE_RESULTS_DIR   Golden results root\n\
        PIXEL_GATE_OUTPUT_DIR    Diff artifact output directory\n\
        PIXEL_GATE_RUN_LOG       Run log path\n\
        PIXEL_GATE_IGNORE        Comma-separated suites to skip"
)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare a candidate output tree against the golden results
    Compare {
        /// Path to the emulator-produced output tree
        candidate: PathBuf,

        /// Golden results root
        #[arg(short, long, env = "PIXEL_GATE_RESULTS_DIR", default_value = "results")]
        results: PathBuf,

        /// Directory for diff artifacts (mirrors suite names)
        #[arg(short, long, env = "PIXEL_GATE_OUTPUT_DIR", default_value = "./diff-artifacts")]
        output: PathBuf,

        /// Run log path
        #[arg(short, long, env = "PIXEL_GATE_RUN_LOG", default_value = "./comparison.log")]
        log: PathBuf,

        /// Comparator binary
        #[arg(short, long, env = "PIXEL_GATE_COMPARATOR", default_value = "perceptualdiff")]
        comparator: PathBuf,

        /// Suite name to skip (repeatable, or comma-separated via env)
        #[arg(short, long, env = "PIXEL_GATE_IGNORE", value_delimiter = ',')]
        ignore: Vec<String>,

        /// Output the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate GitHub-wiki markdown pages for a golden results tree
    Wiki {
        /// Golden results root to scan
        results: PathBuf,

        /// Directory into which markdown pages are written
        output: PathBuf,

        /// Base raw-content URL under which the golden images are published
        #[arg(short, long, env = "PIXEL_GATE_WIKI_BASE_URL")]
        base_url: String,
    },

    /// Create a solid-color PNG fixture for testing
    Mock {
        /// Width in pixels
        #[arg(short = 'W', long, default_value = "640")]
        width: u32,

        /// Height in pixels
        #[arg(short = 'H', long, default_value = "480")]
        height: u32,

        /// Output file path
        #[arg(short, long, default_value = "./mock_image.png")]
        output: PathBuf,

        /// Fill color as hex (e.g., "ff0000" for red)
        #[arg(short, long, default_value = "000000")]
        color: String,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.command {
        Some(Commands::Compare {
            candidate,
            results,
            output,
            log,
            comparator,
            ignore,
            json,
        }) => {
            let config = GateConfig {
                results_root: results,
                candidate_root: candidate,
                output_dir: output,
                log_path: log,
                comparator,
                ignored: ignore.into_iter().collect(),
            };

            let summary = match run_gate(&config) {
                Ok(summary) => summary,
                Err(e) => {
                    eprintln!("Comparison run aborted: {}", e);
                    return ExitCode::FAILURE;
                }
            };

            if json {
                match serde_json::to_string_pretty(&summary) {
                    Ok(rendered) => println!("{}", rendered),
                    Err(e) => {
                        eprintln!("Failed to render summary: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print_summary(&summary);
                println!("Run log: {}", config.log_path.display());
            }

            ExitCode::from(summary.exit_code() as u8)
        }

        Some(Commands::Wiki {
            results,
            output,
            base_url,
        }) => {
            let writer = WikiWriter::new(&results, &output, base_url);
            match writer.write() {
                Ok(pages) => {
                    println!("Wrote {} suite pages to {}", pages, output.display());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Wiki generation failed: {}", e);
                    ExitCode::FAILURE
                }
            }
        }

        Some(Commands::Mock {
            width,
            height,
            output,
            color,
        }) => {
            let color_bytes = match parse_hex_color(&color) {
                Ok(bytes) => bytes,
                Err(e) => {
                    eprintln!("{}", e);
                    return ExitCode::FAILURE;
                }
            };

            let fixture = MockImage::new(width, height, color_bytes);
            match fixture.write(&output) {
                Ok(()) => {
                    println!("Created mock image: {}", output.display());
                    println!("  Size: {}x{}", width, height);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Failed to write mock image: {}", e);
                    ExitCode::FAILURE
                }
            }
        }

        None => {
            println!("pixel-gate - Golden-image regression gating for CI");
            println!();
            println!("Usage: pixel-gate <COMMAND>");
            println!();
            println!("Commands:");
            println!("  compare  Compare emulator output against golden images");
            println!("  wiki     Generate GitHub-wiki markdown for a results tree");
            println!("  mock     Create a solid-color PNG fixture for testing");
            println!();
            println!("Run with --help for more information.");
            ExitCode::FAILURE
        }
    }
}
