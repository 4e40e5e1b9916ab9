//! Identifier derivation: random v4 UUIDs for items, content-derived UUIDs
//! for chunks.

use uuid::Uuid;

/// Number of leading hex characters of a chunk's strong digest used to build
/// its UUID. 32 hex chars == 16 bytes == one full UUID's worth of entropy.
pub const UUID_LEN: usize = 32;

/// A fresh random identifier for an `Item`.
pub fn item_id() -> Uuid {
    Uuid::new_v4()
}

/// Derive a deterministic UUID from the first [`UUID_LEN`] hex characters of
/// a strong digest (hex-encoded).
///
/// The first 16 bytes of the digest become the UUID's 16 bytes verbatim — a
/// raw reinterpretation of the hex prefix, with no version/variant bits
/// forced (spec.md §8 property 7: `Chunk(b).id == UUID(Chunk(b).shash[:UUID_LEN])`).
/// Two chunks with the same bytes therefore always derive the same id; chunks
/// with different bytes derive different ids with overwhelming probability.
pub fn chunk_id(shash_hex: &str) -> Uuid {
    let prefix = &shash_hex[..UUID_LEN.min(shash_hex.len())];
    let raw = hex::decode(prefix).expect("strong digest hex is well-formed");

    let mut bytes = [0u8; 16];
    bytes[..raw.len().min(16)].copy_from_slice(&raw[..raw.len().min(16)]);

    Uuid::from_bytes(bytes)
}
