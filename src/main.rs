use std::fs;
use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use serde::Serialize;
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};

use kado::args::{Args, Command};
use kado::config::Settings;
use kado::hash::strong_context;
use kado::tree::HashTree;
use kado::{gear, Chunk, HasData, HasId};

/// One chunk's boundary and digests, rendered as a JSON array element for
/// `kado chunk --json`.
#[derive(Serialize)]
struct ChunkRecord {
    start: usize,
    end: usize,
    len: usize,
    id: String,
    shash: String,
    whash: String,
}

fn init_logging(level: LevelFilter) {
    TermLogger::init(level, LogConfig::default(), TerminalMode::Mixed, ColorChoice::Auto)
        .unwrap_or_else(|e| eprintln!("failed to initialize logger: {e}"));
}

fn main() -> Result<()> {
    let settings = Settings::new().context("loading settings.ini")?;
    init_logging(settings.log_level());

    for spec in kado::registry::resolve() {
        log::debug!("registered subcommand '{}': {}", spec.name, spec.about);
    }

    let args = Args::parse();
    match args.command {
        Command::Chunk { target_file, json } => run_chunk(&target_file, json),
        Command::HashTree => run_hash_tree(),
    }
}

fn run_chunk(target_file: &std::path::Path, json: bool) -> Result<()> {
    log::info!("chunking {}", target_file.display());
    let data = fs::read(target_file)
        .with_context(|| format!("reading {}", target_file.display()))?;

    if json {
        let records: Vec<ChunkRecord> = gear::chop(&data)
            .map(|(start, end, bytes)| {
                let chunk = Chunk::new(bytes.to_vec());
                ChunkRecord {
                    start,
                    end,
                    len: chunk.len(),
                    id: chunk.id().to_string(),
                    shash: chunk.shash(),
                    whash: chunk.whash(),
                }
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&records).context("encoding chunk records as JSON")?);
        return Ok(());
    }

    let mut total = 0usize;
    for (idx, (start, end, bytes)) in gear::chop(&data).enumerate() {
        let chunk = Chunk::new(bytes.to_vec());
        println!(
            "chunk {idx:>4}: [{start:>9}, {end:>9}) {:>6} bytes  id={}  shash={}",
            chunk.len(),
            chunk.id(),
            chunk.shash(),
        );
        total += 1;
    }

    println!("total bytes: {}, chunks: {total}", data.len());
    Ok(())
}

fn run_hash_tree() -> Result<()> {
    let stdin = io::stdin();
    let mut tree = HashTree::new(strong_context);

    for line in stdin.lock().lines() {
        let line = line.context("reading a line from stdin")?;
        tree.update(line.as_bytes());
    }

    if tree.is_empty() {
        log::warn!("no input lines; printing the empty tree's root");
    }
    println!("{}", tree.digest_hex(None)?);

    Ok(())
}
