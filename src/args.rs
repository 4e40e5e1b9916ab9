use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// `kado`: content-defined chunking, hash trees, and a chunk/item object
/// model, exposed as a small demonstration CLI over the library.
#[derive(Parser, Debug)]
#[command(name = "kado", version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

/// The subcommands this binary ships with. Each corresponds to an entry in
/// [`crate::registry::resolve`]; keep the two in sync.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Chunk a file with the Gear rolling hash and print each boundary.
    Chunk {
        /// File to read and chunk.
        #[arg(short = 'F', long = "file", value_name = "file", value_hint = clap::ValueHint::FilePath)]
        target_file: PathBuf,

        /// Print chunk records as a JSON array instead of a plain table.
        #[arg(long)]
        json: bool,
    },
    /// Read newline-separated records from stdin and print the hash-tree
    /// root digest over them.
    HashTree,
}
