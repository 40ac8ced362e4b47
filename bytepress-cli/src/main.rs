//! Bytepress CLI
//!
//! Compress, expand, verify, and inspect single files with the bytepress
//! stream coders.

use bytepress_core::BitReader;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bytepress")]
#[command(
    author,
    version,
    about = "Pure Rust byte-stream compression toolkit"
)]
#[command(long_about = "
Bytepress compresses single files with classic stream coders:
fixed-width LZW, two-pass Huffman, and bit-level run-length encoding.

Examples:
  bytepress compress notes.txt
  bytepress compress image.pgm --method huffman
  bytepress expand notes.lzw
  bytepress test genome.dat --method lzw
  bytepress show notes.lzw --bits-per-line 48
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Compression method
        #[arg(short, long, value_enum, default_value = "lzw")]
        method: Method,

        /// Output file (defaults to the input with the method's extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Expand a compressed file
    #[command(alias = "x")]
    Expand {
        /// File to expand
        input: PathBuf,

        /// Compression method (inferred from the input extension if omitted)
        #[arg(short, long, value_enum)]
        method: Option<Method>,

        /// Output file (defaults to the input with extension "expanded")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Round-trip a file in memory and verify the result
    #[command(alias = "t")]
    Test {
        /// File to test
        input: PathBuf,

        /// Compression method
        #[arg(short, long, value_enum, default_value = "lzw")]
        method: Method,
    },

    /// Print a file bit by bit
    Show {
        /// File to dump
        input: PathBuf,

        /// Bits per output line
        #[arg(short, long, default_value_t = 64)]
        bits_per_line: u64,
    },
}

/// Compression method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Method {
    /// Fixed-width LZW over an adaptive phrase dictionary
    Lzw,
    /// Two-pass Huffman coding with a self-describing header
    Huffman,
    /// Bit-level run-length encoding
    Rle,
}

impl Method {
    fn name(self) -> &'static str {
        match self {
            Method::Lzw => "lzw",
            Method::Huffman => "huffman",
            Method::Rle => "rle",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Method::Lzw => "lzw",
            Method::Huffman => "huf",
            Method::Rle => "rle",
        }
    }

    fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "lzw" => Some(Method::Lzw),
            "huf" => Some(Method::Huffman),
            "rle" => Some(Method::Rle),
            _ => None,
        }
    }

    fn compress(self, input: &[u8]) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        Ok(match self {
            Method::Lzw => bytepress_lzw::compress(input)?,
            Method::Huffman => bytepress_huffman::compress(input)?,
            Method::Rle => bytepress_rle::compress(input)?,
        })
    }

    fn expand(self, input: &[u8]) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        Ok(match self {
            Method::Lzw => bytepress_lzw::expand(input)?,
            Method::Huffman => bytepress_huffman::expand(input)?,
            Method::Rle => bytepress_rle::expand(input)?,
        })
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            method,
            output,
        } => cmd_compress(&input, method, output.as_deref()),
        Commands::Expand {
            input,
            method,
            output,
        } => cmd_expand(&input, method, output.as_deref()),
        Commands::Test { input, method } => cmd_test(&input, method),
        Commands::Show {
            input,
            bits_per_line,
        } => cmd_show(&input, bits_per_line),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_compress(
    input: &Path,
    method: Method,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let compressed = method.compress(&data)?;

    let target = match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension(method.extension()),
    };
    fs::write(&target, &compressed)?;

    println!("Compressed {} -> {}", input.display(), target.display());
    println!("  Method: {}", method.name());
    println!("  Original size: {} bytes", data.len());
    println!("  Compressed size: {} bytes", compressed.len());
    if !data.is_empty() {
        println!(
            "  Compression ratio: {:.1}%",
            (1.0 - compressed.len() as f64 / data.len() as f64) * 100.0
        );
    }
    Ok(())
}

fn cmd_expand(
    input: &Path,
    method: Option<Method>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let method = match method {
        Some(m) => m,
        None => Method::from_extension(input).ok_or_else(|| {
            format!(
                "cannot infer method from '{}'; pass --method",
                input.display()
            )
        })?,
    };

    let data = fs::read(input)?;
    let expanded = method.expand(&data)?;

    let target = match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension("expanded"),
    };
    fs::write(&target, &expanded)?;

    println!("Expanded {} -> {}", input.display(), target.display());
    println!("  Method: {}", method.name());
    println!("  Compressed size: {} bytes", data.len());
    println!("  Expanded size: {} bytes", expanded.len());
    Ok(())
}

fn cmd_test(input: &Path, method: Method) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;

    println!("Testing {} ({})", input.display(), method.name());

    let compressed = method.compress(&data)?;
    let expanded = method.expand(&compressed)?;

    println!("  Original size: {} bytes", data.len());
    println!("  Compressed size: {} bytes", compressed.len());
    if !data.is_empty() {
        println!(
            "  Compression ratio: {:.1}%",
            (1.0 - compressed.len() as f64 / data.len() as f64) * 100.0
        );
    }

    if expanded != data {
        println!();
        println!("FAILED: round-trip output differs from input");
        std::process::exit(2);
    }

    println!();
    println!("OK: round-trip matches");
    Ok(())
}

fn cmd_show(input: &Path, bits_per_line: u64) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let mut reader = BitReader::new(data.as_slice());

    let mut count: u64 = 0;
    let mut line = String::new();
    while !reader.is_eof() {
        let bit = reader.read_bit()?;
        line.push(if bit { '1' } else { '0' });
        count += 1;
        if count % 8 == 0 {
            line.push(' ');
        }
        if bits_per_line > 0 && count % bits_per_line == 0 {
            println!("{}", line.trim_end());
            line.clear();
        }
    }
    if !line.is_empty() {
        println!("{}", line.trim_end());
    }
    println!("{} bits", count);
    Ok(())
}
