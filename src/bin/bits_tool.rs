use bloom_bits::io_utils::bits_cli_error;
use bloom_bits::{ArchiveFormat, BitArray, Config, DecodePolicy};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Create and inspect bit array archives")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a new archive with the given bits set
    Create {
        /// Output archive path
        output: PathBuf,
        /// Requested capacity in bits
        #[arg(long)]
        count: usize,
        /// Bit indices to set (repeatable or comma separated)
        #[arg(long = "set", value_delimiter = ',')]
        set: Vec<usize>,
        /// Archive format: keyed or compact
        #[arg(long, default_value = "keyed")]
        format: ArchiveFormat,
    },
    /// Print a summary of an existing archive
    Inspect {
        /// Input archive path
        input: PathBuf,
        /// Archive format: keyed or compact
        #[arg(long, default_value = "keyed")]
        format: ArchiveFormat,
        /// Reject archives with a missing or malformed word field
        #[arg(long)]
        strict: bool,
        /// List the index of every set bit
        #[arg(long)]
        list: bool,
        /// Print each word as hex
        #[arg(long)]
        hex: bool,
        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct Summary {
    words: usize,
    count: usize,
    ones: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    set_bits: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hex: Option<Vec<String>>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    match args.command {
        Command::Create {
            output,
            count,
            set,
            format,
        } => {
            let mut bits = BitArray::new(count);
            for index in set {
                bits.set_bit(index, true).map_err(|e| bits_cli_error("set", e))?;
            }
            bits.save(&output, format).map_err(|e| bits_cli_error("save", e))?;
            eprintln!(
                "Wrote {} words ({} bits set) to {}",
                bits.word_count(),
                bits.count_ones(),
                output.display()
            );
        }
        Command::Inspect {
            input,
            format,
            strict,
            list,
            hex,
            json,
        } => {
            let config = Config {
                decode_policy: if strict {
                    DecodePolicy::Strict
                } else {
                    DecodePolicy::Lenient
                },
                format,
            };
            let bits = BitArray::load(&input, &config).map_err(|e| bits_cli_error("load", e))?;
            let summary = summarize(&bits, list, hex)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_summary(&summary);
            }
        }
    }
    Ok(())
}

fn summarize(bits: &BitArray, list: bool, show_hex: bool) -> Result<Summary, Box<dyn std::error::Error>> {
    let set_bits = if list {
        let mut out = Vec::new();
        for i in 0..=bits.count() {
            if bits.get_bit(i)? {
                out.push(i);
            }
        }
        Some(out)
    } else {
        None
    };
    let hex = show_hex.then(|| {
        bits.words()
            .iter()
            .map(|w| hex::encode(w.to_be_bytes()))
            .collect()
    });
    Ok(Summary {
        words: bits.word_count(),
        count: bits.count(),
        ones: bits.count_ones(),
        set_bits,
        hex,
    })
}

fn print_summary(summary: &Summary) {
    println!("Words: {}", summary.words);
    println!("Count: {}", summary.count);
    println!("Ones: {}", summary.ones);
    if let Some(set_bits) = &summary.set_bits {
        let joined: Vec<String> = set_bits.iter().map(|i| i.to_string()).collect();
        println!("Set bits: {}", joined.join(","));
    }
    if let Some(hex) = &summary.hex {
        for (i, word) in hex.iter().enumerate() {
            println!("{i:>6}: {word}");
        }
    }
}
