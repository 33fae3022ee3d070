// src/main.rs
use clap::{Args, Parser, Subcommand};
use huffman_coder::{EncodedResult, logger};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use thiserror::Error;

const SAMPLE: &str = "abcdeffg";

#[derive(Parser)]
#[command(name = "huffman", version)]
#[command(about = "Huffman coding of bytes into a '0'/'1' bit sequence.", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Input {
    /// Literal text to use as input
    #[arg(short, long, conflicts_with = "file")]
    text: Option<String>,
    /// Read input from a file (stdin when neither --text nor --file is given)
    #[arg(short, long)]
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a sample and print it original, encoded and decoded
    Demo {
        #[arg(default_value = SAMPLE)]
        text: String,
    },
    /// Compress input and write the encoded result as JSON
    Encode {
        #[command(flatten)]
        input: Input,
        /// Write JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decompress an encoded result JSON document ("-" for stdin)
    Decode { path: PathBuf },
    /// Print the code table of the input
    Table {
        #[command(flatten)]
        input: Input,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid encoded result: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Codec(#[from] huffman_coder::Error),
}

fn read_input(input: Input) -> io::Result<Vec<u8>> {
    match (input.text, input.file) {
        (Some(text), _) => Ok(text.into_bytes()),
        (None, Some(path)) => fs::read(path),
        (None, None) => {
            let mut data = Vec::new();
            io::stdin().read_to_end(&mut data)?;
            Ok(data)
        }
    }
}

fn demo(text: &str) -> Result<(), CliError> {
    let result = huffman_coder::compress(text.as_bytes());
    let decoded = huffman_coder::decompress(&result)?;
    println!("Original: {}", text);
    println!("Encoded: {}", result.bits());
    println!("Decoded: {}", String::from_utf8_lossy(&decoded));
    Ok(())
}

fn encode(input: Input, output: Option<PathBuf>) -> Result<(), CliError> {
    let data = read_input(input)?;
    let result = huffman_coder::compress(&data);
    tracing::info!(
        input_bits = data.len() * 8,
        encoded_bits = result.bit_len(),
        "encoded"
    );
    let json = serde_json::to_string_pretty(&result)?;
    match output {
        Some(path) => fs::write(path, json + "\n")?,
        None => println!("{}", json),
    }
    Ok(())
}

fn decode(path: PathBuf) -> Result<(), CliError> {
    let json = if path.as_os_str() == "-" {
        let mut json = String::new();
        io::stdin().read_to_string(&mut json)?;
        json
    } else {
        fs::read_to_string(&path)?
    };
    let result: EncodedResult = serde_json::from_str(&json)?;
    let data = huffman_coder::decompress(&result)?;
    io::stdout().write_all(&data)?;
    Ok(())
}

fn table(input: Input) -> Result<(), CliError> {
    let data = read_input(input)?;
    let frequencies = huffman_coder::build_frequency_table(&data);
    let Some(tree) = huffman_coder::build_huffman_tree(&frequencies) else {
        tracing::warn!("empty input has no code table");
        return Ok(());
    };
    let mut leaves = huffman_coder::leaf_codes(&tree);
    leaves.sort_by_key(|leaf| leaf.symbol);
    for leaf in leaves {
        println!("{:#04x}\t{}\t{}", leaf.symbol, leaf.weight, leaf.code);
    }
    Ok(())
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let span = tracing::info_span!("command_execution", command = ?std::env::args().collect::<Vec<_>>());
    let _enter = span.enter();

    match cli.command {
        Commands::Demo { text } => demo(&text),
        Commands::Encode { input, output } => encode(input, output),
        Commands::Decode { path } => decode(path),
        Commands::Table { input } => table(input),
    }
}
