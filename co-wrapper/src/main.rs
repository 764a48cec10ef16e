//! Reads concatenated C sources on stdin and writes the generated wrappers
//! to stdout.
//!
//! ```bash
//! cat block/coroutines.h include/block/block-io.h | co-wrapper > block/block-gen.c
//! ```
//!
//! Exits with status 1, writing nothing to stdout, if any declaration cannot
//! be wrapped.

use anyhow::{Context, Result};
use clap::Parser;
use co_wrapper::{ClangFormat, GeneratorConfig, generate_file};
use std::io::{self, Read, Write};

#[derive(Parser, Debug)]
#[command(
    name = "co-wrapper",
    version,
    about = "Generates blocking wrappers for generated_co_wrapper declarations read from stdin"
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read declarations from stdin")?;

    let code = generate_file(&input, &GeneratorConfig::default(), &ClangFormat::new())
        .context("Failed to generate coroutine wrappers")?;

    io::stdout()
        .lock()
        .write_all(code.as_bytes())
        .context("Failed to write generated code")?;
    Ok(())
}
