//! Capability traits shared by every data-bearing object, plus the `Chunk`
//! and `Item` types built from them.
//!
//! The original mix-in layering (identity, data, metadata) collapses into
//! trait composition: `Chunk` implements `HasId + HasData`; `Item` implements
//! `HasId + HasData + HasMetadata`. `Item`'s strong/weak hashing is an
//! alternative hashing *strategy* selected at construction — a
//! `HashTreeContext` factory instead of a plain leaf-hash factory — rather
//! than a method-resolution-order override.

mod chunk;
mod item;

pub use chunk::Chunk;
pub use item::Item;

use uuid::Uuid;

/// An object with a stable identifier.
pub trait HasId {
    fn id(&self) -> Uuid;
}

/// An object that carries bytes and exposes lazily-recomputed digests over
/// them.
///
/// `shash`/`whash` are computed from a persistent hash context the first time
/// they are read after a mutation, and cached until the next mutation. `Chunk`
/// refuses the mutation outright ([`HasData::set_data`] always returns
/// `Err(Error::NotSupported)`); `Item` accepts it and rechunks.
pub trait HasData {
    fn data(&self) -> &[u8];
    fn set_data(&mut self, data: Vec<u8>) -> crate::error::Result<()>;
    fn shash(&self) -> String;
    fn whash(&self) -> String;

    fn len(&self) -> usize {
        self.data().len()
    }

    fn is_empty(&self) -> bool {
        self.data().is_empty()
    }
}

/// An object carrying an ordered string-to-string metadata mapping.
///
/// Keys and values are `String` by construction, so the dynamic
/// `type-error`/`value-error` cases the original's duck-typed metadata setter
/// could raise for non-string input are structurally unreachable here.
pub trait HasMetadata {
    fn metadata(&self) -> &indexmap::IndexMap<String, String>;
    fn metadata_mut(&mut self) -> &mut indexmap::IndexMap<String, String>;
}

/// Constant-time byte comparison, used by [`HasData`] implementors' `Eq` so
/// that comparing two data-bearing objects does not leak timing information
/// about where their contents first diverge.
pub(crate) fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
