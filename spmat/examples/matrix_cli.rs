use clap::{Parser, Subcommand, ValueEnum};
use log::error;
use spmat::{IntMatrix, MatrixInfo, SpmatFile};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "spmat CLI - combine sparse integer matrices stored in text files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Operation {
    Add,
    Subtract,
    Multiply,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply an operation to two matrix files and write the result
    Compute {
        /// Operation to apply
        #[arg(value_enum)]
        operation: Operation,

        /// First operand
        lhs: PathBuf,

        /// Second operand
        rhs: PathBuf,

        /// Where to write the result
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Show matrix file info
    Info {
        /// Matrix file
        path: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = match &cli.command {
        Commands::Compute {
            operation,
            lhs,
            rhs,
            output,
        } => handle_compute(*operation, lhs, rhs, output),
        Commands::Info { path, json } => handle_info(path, *json),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:?}: {err}", err.kind());
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn handle_compute(
    operation: Operation,
    lhs: &Path,
    rhs: &Path,
    output: &Path,
) -> spmat::Result<()> {
    let start_time = std::time::Instant::now();

    let lhs: IntMatrix = SpmatFile::read_matrix(lhs)?;
    let rhs: IntMatrix = SpmatFile::read_matrix(rhs)?;

    let result = match operation {
        Operation::Add => spmat::add(&lhs, &rhs)?,
        Operation::Subtract => spmat::subtract(&lhs, &rhs)?,
        Operation::Multiply => spmat::multiply(&lhs, &rhs)?,
    };

    SpmatFile::write_matrix(&result, output)?;

    let elapsed = start_time.elapsed();
    println!("Operation completed. Result saved to {}", output.display());
    println!("{}", MatrixInfo::of(&result));
    println!("Completed in {elapsed:.2?}");
    Ok(())
}

fn handle_info(path: &Path, json: bool) -> spmat::Result<()> {
    let matrix: IntMatrix = SpmatFile::read_matrix(path)?;

    if json {
        #[cfg(feature = "serde")]
        {
            println!("{}", spmat::export::info_json(&matrix)?);
            return Ok(());
        }
        #[cfg(not(feature = "serde"))]
        eprintln!("JSON output requires the 'serde' feature; printing plain summary");
    }

    println!("{}", MatrixInfo::of(&matrix));
    Ok(())
}
