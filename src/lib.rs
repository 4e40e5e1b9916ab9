//! `kado`: content-defined chunking, a hash tree, and a chunk/item object
//! model for content-addressed deduplication.
//!
//! Three subsystems make up the core:
//!
//! - [`gear`] — the Gear rolling hash plus `cut`/`chop`/`read`, which turn
//!   raw bytes (or a file) into a sequence of content-defined chunks.
//! - [`tree`] — an incremental hash tree that reduces a sequence of per-leaf
//!   strong digests to a single root digest.
//! - [`object`] and [`index`] — `Chunk`, `Item`, and a multi-map `Index` built
//!   on top of the first two subsystems.
//!
//! The crate has no persistence, network, or access-control layer of its own:
//! it is meant to be embedded by a higher layer that owns those concerns.

pub mod error;
pub mod gear;
pub mod hash;
pub mod id;
pub mod index;
pub mod object;
pub mod tree;

pub mod args;
pub mod config;
pub mod registry;

pub use error::{Error, Result};
pub use index::Index;
pub use object::{Chunk, HasData, HasId, HasMetadata, Item};
pub use tree::HashTree;
