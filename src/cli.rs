use crate::config::{GmcConfig, DEFAULT_PRECISION};
use crate::error::GmcError;
use crate::pipeline::{self, AnalysisReport};
use crate::transpose::transpose_bit_pairs;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = "Gilbert-Moore Coding (GMC) Analysis Platform")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyzes files: entropy of the bit expansion before and after the
    /// bit-pair transposition, plus a Gilbert-Moore code-word table
    Analyze {
        /// Input files to analyze
        #[arg(short, long, value_name = "FILE", required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Directory for the encoded bit sequences (default: next to each input)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Fractional binary digits used when formatting code midpoints
        #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
        precision: usize,

        /// Number of threads to use (default: all available cores)
        #[arg(short, long)]
        threads: Option<usize>,
    },
    /// Applies the bit-pair transposition to a persisted '0'/'1' sequence
    /// (its own inverse on even-length input)
    Transpose {
        /// Input sequence file
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file name
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
}

pub fn run() -> Result<(), GmcError> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Analyze { input, output, precision, threads } => {
            let config = GmcConfig {
                precision: *precision,
                threads: threads.unwrap_or_else(num_cpus::get),
            };
            config.validate()?;
            analyze_files(input, output.as_deref(), &config)?;
        }
        Commands::Transpose { input, output } => {
            println!("Transposing {} to {}...", input.display(), output.display());

            let mut in_file = BufReader::new(File::open(input)?);
            let bits = pipeline::read_bit_sequence(&mut in_file)?;
            let encoded = transpose_bit_pairs(&bits);

            let mut out_file = BufWriter::new(File::create(output)?);
            pipeline::write_bit_sequence(&mut out_file, &encoded)?;

            println!("Transposition successful!");
            println!("  Input bits:  {}", bits.len());
            println!("  Output bits: {}", encoded.len());
            if encoded.len() != bits.len() {
                println!("  Note: odd-length input was zero-padded before the swap");
            }
        }
    }

    Ok(())
}

fn analyze_files(
    inputs: &[PathBuf],
    out_dir: Option<&Path>,
    config: &GmcConfig,
) -> Result<(), GmcError> {
    println!("Analyzing {} file(s)...", inputs.len());

    let _ = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build_global();

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] Files {pos}/{len} ({eta})")
        .unwrap()
        .progress_chars("#>-")
    );

    let start = Instant::now();
    let results: Vec<(PathBuf, AnalysisReport, PathBuf)> = inputs
        .par_iter()
        .map(|path| {
            let result = analyze_one(path, out_dir, config);
            pb.inc(1);
            result
        })
        .collect::<Result<Vec<_>, GmcError>>()?;
    pb.finish_with_message("Analysis finished");
    let duration = start.elapsed();

    for (path, report, encoded_path) in &results {
        print_report(path, report, encoded_path, config.precision);
    }
    println!("\nElapsed Time: {:.2?}", duration);

    Ok(())
}

fn analyze_one(
    path: &Path,
    out_dir: Option<&Path>,
    config: &GmcConfig,
) -> Result<(PathBuf, AnalysisReport, PathBuf), GmcError> {
    let mut in_file = BufReader::new(File::open(path)?);
    let report = pipeline::analyze(&mut in_file, config)?;

    let encoded_path = encoded_output_path(path, out_dir);
    let mut out_file = BufWriter::new(File::create(&encoded_path)?);
    pipeline::write_bit_sequence(&mut out_file, &report.encoded)?;

    Ok((path.to_path_buf(), report, encoded_path))
}

/// `<stem>.encoded.txt`, placed in `out_dir` when given, otherwise next to
/// the input.
fn encoded_output_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "input".to_string());
    let file_name = format!("{}.encoded.txt", stem);
    match out_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

fn print_report(path: &Path, report: &AnalysisReport, encoded_path: &Path, precision: usize) {
    println!("\n{}", path.display());
    println!("  Input Size:       {} bytes ({} bits)", report.byte_count, report.bits.len());
    println!("  Source Entropy:   {:.6} bits/symbol", report.source_entropy);
    println!("  Encoded Entropy:  {:.6} bits/symbol", report.encoded_entropy);
    println!("  Encoded Sequence: {}", encoded_path.display());

    let binary_width = precision + 4;
    println!("\n  {:>3}  {:>8}  {:>6}  {:>6}  {:>6}  {:<width$}  {:>3}  {}",
        "#", "symbol", "prob", "cum", "g", "g (binary)", "len", "code word",
        width = binary_width);
    for row in &report.rows {
        println!("  {:>3}  {:>8}  {:>6.2}  {:>6.2}  {:>6.2}  {:<width$}  {:>3}  {}",
            row.index,
            format!("{:?}", row.symbol),
            row.probability,
            row.cumulative,
            row.midpoint,
            row.midpoint_binary,
            row.code_length,
            row.code_word,
            width = binary_width);
    }
}
