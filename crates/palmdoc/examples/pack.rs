use anyhow::Context;
use clap::Parser;
use palmdoc::CompressionType;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Compress or decompress a file with PalmDOC.
#[derive(Debug, Parser)]
struct Args {
    input: PathBuf,

    /// Where to write the result. Without it only the sizes are reported.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long)]
    decompress: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let data = std::fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let result = if args.decompress {
        CompressionType::PalmDoc.decompress(&data)?
    } else {
        let packed = CompressionType::PalmDoc.compress(&data)?;
        let check = palmdoc::decompress(&packed)?;
        anyhow::ensure!(check == data, "round trip mismatch");
        packed
    };

    eprintln!(
        "{}: {} -> {} bytes ({:.1}%)",
        args.input.display(),
        data.len(),
        result.len(),
        result.len() as f64 * 100.0 / data.len().max(1) as f64
    );

    if let Some(output) = args.output {
        std::fs::write(&output, &result)
            .with_context(|| format!("failed to write {}", output.display()))?;
    }

    Ok(())
}
