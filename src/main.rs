//! Command-line front end: check that a file is a navigable ELF64 object.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use elfview::{Elf64File, MappedFile};
use tracing_subscriber::EnvFilter;

/// Validate the identification of an ELF64 object file.
#[derive(Parser, Debug)]
#[command(name = "elfview", version, about)]
struct Cli {
    /// Path of the object file to inspect.
    path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mapped = MappedFile::open(&cli.path)
        .with_context(|| format!("cannot map {}", cli.path.display()))?;
    let file = Elf64File::new(mapped.view());
    let ident = file
        .identification()
        .with_context(|| format!("{} is not a supported ELF64 object", cli.path.display()))?;

    println!(
        "{}: ELF64 little-endian, identification version {}, OS/ABI {}/{}",
        cli.path.display(),
        ident.ident_version,
        ident.os_abi,
        ident.os_abi_version
    );
    Ok(())
}
