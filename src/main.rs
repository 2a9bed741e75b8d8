use clap::Parser;
use std::fs::File;
use std::io::Write;

mod codec;
mod compress;
mod cover;
mod secret;
mod utils;

use crate::codec::{Alphabet, Width};
use crate::cover::*;
use crate::secret::Secret;

#[derive(Parser)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
enum Args {
    #[command(name = "hide")]
    Hide {
        carrier: String,

        /// Secret file to hide; prompts for a message when absent
        #[arg(short, long)]
        secret: Option<String>,

        /// Write carrier plus payload here instead of appending to the carrier
        #[arg(short, long)]
        output: Option<String>,

        /// Compress the secret before hiding it
        #[arg(short = 'z', long)]
        compress: bool,

        /// Bits hidden per invisible byte (1 or 2)
        #[arg(short, long, default_value = "1", value_parser = parse_width)]
        width: Width,
    },

    #[command(name = "extract")]
    Extract {
        carrier: String,

        /// Write the recovered secret here instead of printing it
        #[arg(short, long)]
        output: Option<String>,

        /// Decompress the recovered secret (it was hidden with -z)
        #[arg(short = 'z', long)]
        compress: bool,

        #[arg(short, long, default_value = "1", value_parser = parse_width)]
        width: Width,
    },

    #[command(name = "strip")]
    Strip {
        carrier: String,

        /// Write the cleaned carrier here instead of overwriting it in place
        #[arg(short, long)]
        output: Option<String>,

        #[arg(short, long, default_value = "1", value_parser = parse_width)]
        width: Width,
    },
}

fn parse_width(arg: &str) -> Result<Width, String> {
    match arg {
        "1" => Ok(Width::One),
        "2" => Ok(Width::Two),
        _ => Err(String::from("width must be 1 or 2")),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    match args {
        Args::Hide {
            carrier,
            secret,
            output,
            compress,
            width,
        } => {
            let source = match secret {
                Some(path) => Secret::FromFile(path),
                None => Secret::FromConsole,
            };

            hide(&carrier, &source, &output, compress, Alphabet::new(width))?;
        }
        Args::Extract {
            carrier,
            output,
            compress,
            width,
        } => {
            extract(&carrier, &output, compress, Alphabet::new(width))?;
        }
        Args::Strip {
            carrier,
            output,
            width,
        } => {
            strip_file(&carrier, &output, Alphabet::new(width))?;
        }
    }

    println!("Ok");

    Ok(())
}

fn hide(
    carrier: &String,
    source: &Secret,
    output: &Option<String>,
    compress: bool,
    alphabet: Alphabet,
) -> Result<(), Box<dyn std::error::Error>> {
    let secret = source.read()?;

    let payload = if compress {
        let compressed = compress::compress(&secret)?;

        if !secret.is_empty() {
            println!(
                "Compressed secret to {:.1}% of its original size",
                compressed.len() as f64 / secret.len() as f64 * 100.0
            );
        }

        compressed
    } else {
        secret
    };

    match output {
        None => {
            let file = File::options().append(true).open(carrier)?;

            TextCover::new(file, alphabet).cover(&payload)?;
        }
        Some(path) => {
            // The carrier stays untouched; the copy gets the payload
            let mut file = File::create(path)?;
            file.write_all(&utils::read_file_bytes(carrier)?)?;

            TextCover::new(file, alphabet).cover(&payload)?;
        }
    }

    Ok(())
}

fn extract(
    carrier: &String,
    output: &Option<String>,
    compressed: bool,
    alphabet: Alphabet,
) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = utils::read_file_bytes(carrier)?;

    let mut recovered = Vec::new();
    TextUncover::new(&bytes[..], alphabet).uncover(&mut recovered)?;

    if compressed {
        recovered = compress::decompress(&recovered)?;
    }

    match output {
        None => println!("{}", recovered.escape_ascii()),
        Some(path) => File::create(path)?.write_all(&recovered)?,
    }

    Ok(())
}

fn strip_file(
    carrier: &String,
    output: &Option<String>,
    alphabet: Alphabet,
) -> Result<(), Box<dyn std::error::Error>> {
    // Fully materialized before the carrier is reopened for writing;
    // source and destination are the same path by default
    let bytes = utils::read_file_bytes(carrier)?;

    let clean = strip(&alphabet, &bytes);

    let path = output.as_ref().unwrap_or(carrier);
    File::create(path)?.write_all(&clean)?;

    Ok(())
}
