use clap::Parser;
use log::{LevelFilter, debug, info};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use tdes_core::{
    BoundaryPolicy, CipherContext, CipherInput, CipherOutput, KeyTriple, Operation, Pipeline,
    PipelineConfig,
};
use tempfile::NamedTempFile;

/// Compute 3DES (EDE, ECB) over a file on a pool of parallel workers
#[derive(Parser, Debug)]
#[command(name = "des_spark", version)]
struct Args {
    /// Number of cores to compute on
    #[arg(short, long, default_value_t = 1)]
    cores: usize,

    /// Logs verbosity level (0 debug, 1 info, 2 warn, 3 error)
    #[arg(short, long, default_value_t = 1)]
    verbosity: u8,

    /// Three hex-encoded integers representing the 3DES key
    #[arg(short, long, num_args = 3, required = true, value_name = "HEX")]
    key: Vec<String>,

    /// Mode of the 3DES algorithm (enc or dec)
    #[arg(short, long)]
    mode: Operation,

    /// Handling of inputs that are not a multiple of 8 bytes (pad or reject)
    #[arg(long, default_value = "pad")]
    policy: BoundaryPolicy,

    /// Path to input file (- for STDIN)
    input: String,

    /// Path to output file
    output: PathBuf,
}

fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Debug,
        1 => LevelFilter::Info,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Error,
        _ => LevelFilter::Warn,
    }
}

/// Stdin is spilled to a temporary file first so it goes through the same
/// path as a regular input. The file is removed when the handle drops.
fn spill_stdin() -> io::Result<NamedTempFile> {
    let mut spill = NamedTempFile::new()?;
    io::copy(&mut io::stdin().lock(), &mut spill)?;
    spill.flush()?;
    Ok(spill)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(log_level(args.verbosity))
        .parse_default_env()
        .init();

    // Keys and settings are checked before the input is even opened.
    let keys = KeyTriple::parse(&args.key)?;
    let config = PipelineConfig::default()
        .with_workers(args.cores)
        .with_boundary(args.policy);
    let pipeline = Pipeline::new(config)?;
    let context = CipherContext::new(&keys, args.mode);
    info!(
        "Set up 3DES pipeline on {} workers ({:?})",
        pipeline.config().workers,
        pipeline.config().boundary
    );

    let spill = if args.input == "-" {
        Some(spill_stdin()?)
    } else {
        None
    };
    let input = match &spill {
        Some(file) => CipherInput::File(file.path().to_path_buf()),
        None => CipherInput::File(PathBuf::from(&args.input)),
    };

    let started = Instant::now();
    let mut output = CipherOutput::File(args.output.clone());
    pipeline.process(&context, input, &mut output).await?;
    let elapsed = started.elapsed();
    info!("Saved results to {:?}", args.output);

    if let Some(file) = spill {
        file.close()?;
        debug!("Deleted temp input file");
    }

    println!("{:.6}", elapsed.as_secs_f64());
    Ok(())
}
