use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;
use tricodec::{
    compressed_path, decompressed_path, Algorithm, CodecConfig, DEFAULT_MAX_DECODED_LEN,
};

#[derive(Parser, Debug)]
#[command(name = "tricodec")]
#[command(about = "Compress and decompress files with Huffman, RLE or LZW coding")]
#[command(version)]
struct Args {
    /// Input file (use - for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file (use - for stdout). Defaults to a name derived from the input
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Decompress instead of compress
    #[arg(short, long)]
    decompress: bool,

    /// Codec: huffman, rle or lzw (decompression defaults to the input extension)
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Largest original length a compressed stream may declare
    #[arg(long, default_value_t = DEFAULT_MAX_DECODED_LEN)]
    max_size: usize,

    /// After compressing, decompress in memory and compare CRC32 checksums
    #[arg(long)]
    verify: bool,

    /// Overwrite an existing decompression target instead of picking a new name
    #[arg(long)]
    force: bool,

    /// Show verbose statistics
    #[arg(short, long)]
    verbose: bool,
}

/// Exit codes
const EXIT_OK: u8 = 0;
const EXIT_VERIFY_FAILED: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run() -> Result<u8, Box<dyn std::error::Error>> {
    let args = Args::parse();

    let is_stdin = args.input.to_str() == Some("-");

    let algorithm = match args.algorithm {
        Some(algorithm) => algorithm,
        None if args.decompress => Algorithm::from_path(&args.input).ok_or_else(|| {
            format!(
                "cannot tell the codec of {} from its extension, pass --algorithm",
                args.input.display()
            )
        })?,
        None => Algorithm::default(),
    };

    let output_path = match &args.output {
        Some(path) => path.clone(),
        None if is_stdin => PathBuf::from("-"),
        None if args.decompress => decompression_target(&args.input, args.force),
        None => compressed_path(&args.input, algorithm),
    };
    let is_stdout = output_path.to_str() == Some("-");

    // Read the whole input up front
    let input = if is_stdin {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(&args.input)?
    };

    let codec = algorithm.codec(CodecConfig { max_decoded_len: args.max_size });

    let start = Instant::now();
    let result =
        if args.decompress { codec.decompress(&input)? } else { codec.compress(&input)? };
    let elapsed = start.elapsed();

    if args.verify && !args.decompress {
        let restored = codec.decompress(&result)?;
        let expected = crc32fast::hash(&input);
        let found = crc32fast::hash(&restored);
        if expected != found || restored.len() != input.len() {
            eprintln!("Verification failed: CRC32 0x{:08x}, round trip 0x{:08x}", expected, found);
            return Ok(EXIT_VERIFY_FAILED);
        }
        if args.verbose {
            eprintln!("Round trip verified (CRC32 0x{:08x})", expected);
        }
    }

    if is_stdout {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&result)?;
        stdout.flush()?;
    } else {
        fs::write(&output_path, &result)?;
    }

    if args.verbose {
        if args.decompress {
            eprintln!("Decompression complete ({}):", algorithm);
            eprintln!("  Compressed:       {}", format_size(input.len()));
            eprintln!("  Restored:         {}", format_size(result.len()));
        } else {
            eprintln!("Compression complete ({}):", algorithm);
            eprintln!("  Original:         {}", format_size(input.len()));
            eprintln!("  Compressed:       {}", format_size(result.len()));
            if !input.is_empty() {
                eprintln!(
                    "  Ratio:            {:.2}%",
                    100.0 * result.len() as f64 / input.len() as f64
                );
                if result.len() < input.len() {
                    let saved = input.len() - result.len();
                    eprintln!(
                        "  Saved:            {} ({:.1}%)",
                        format_size(saved),
                        100.0 * saved as f64 / input.len() as f64
                    );
                } else {
                    eprintln!("  Grew by:          {} bytes", result.len() - input.len());
                }
            }
        }
        eprintln!("  Time:             {:.2?}", elapsed);
        eprintln!("  Throughput:       {:.1} MB/s", throughput_mb_s(input.len(), elapsed));
        eprintln!("  Output:           {}", output_path.display());
    }

    Ok(EXIT_OK)
}

/// Default decompression target, avoiding an existing file unless `force` is set
fn decompression_target(input: &Path, force: bool) -> PathBuf {
    let target = decompressed_path(input);
    if force || !target.exists() {
        return target;
    }
    let stamp = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0);
    restored_path(&target, stamp)
}

/// `dir/name.ext` -> `dir/name_restored_<stamp>.ext`
fn restored_path(target: &Path, stamp: u64) -> PathBuf {
    let mut name = target.file_stem().map(|s| s.to_os_string()).unwrap_or_default();
    name.push(format!("_restored_{}", stamp));
    if let Some(ext) = target.extension() {
        name.push(".");
        name.push(ext);
    }
    target.with_file_name(name)
}

/// Human-readable size: bytes below 1 KB, then KB or MB with two decimals
fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * 1024;
    if bytes < KB {
        format!("{} bytes", bytes)
    } else if bytes < MB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    }
}

fn throughput_mb_s(bytes: usize, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs == 0.0 {
        return 0.0;
    }
    bytes as f64 / secs / 1_000_000.0
}
