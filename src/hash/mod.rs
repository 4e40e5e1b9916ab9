//! Pluggable hash contexts.
//!
//! A data-bearing object's strong/weak digest is produced by a [`HashContext`]
//! obtained from a factory function. `Chunk` and `Item` both use the plain
//! BLAKE3/xxh64 factories for leaf data; `Item` additionally aggregates its
//! chunks' digests through a [`crate::tree::HashTree`], which implements the
//! same trait by treating every `update` as appending one more leaf. This is
//! the "overridable hash-init hook" collapsed into a trait object instead of a
//! subclass override.

mod strong;
mod weak;

pub use strong::Blake3Context;
pub use weak::XxhContext;

/// A cloneable, incrementally-fed hash context.
///
/// Implementors mirror the `init(seed, size) / update(bytes) / digest() /
/// copy()` contract the wider system treats hash functions through: `update`
/// feeds bytes in, `digest` reads the current state without consuming it, and
/// `copy` produces an independent context seeded from the same initial state.
pub trait HashContext: Send + Sync {
    /// Feed more bytes into the running digest.
    fn update(&mut self, bytes: &[u8]);

    /// Render the digest of everything fed so far, as raw bytes.
    fn digest(&self) -> Vec<u8>;

    /// Hex-encode [`HashContext::digest`].
    fn digest_hex(&self) -> String {
        hex::encode(self.digest())
    }

    /// Produce an independent clone of this context's current state.
    fn copy(&self) -> Box<dyn HashContext>;
}

/// A zero-argument constructor for a fresh [`HashContext`].
///
/// Data-bearing objects hold one of these per digest kind (strong, weak)
/// rather than a single shared context, so that `shash`/`whash` can each be
/// recomputed from a clean initial state on demand.
pub type HashContextFactory = fn() -> Box<dyn HashContext>;

/// Domain-separation key for the strong (BLAKE3) hash.
///
/// BLAKE3's keyed mode requires exactly 32 bytes; this is the core's fixed
/// personalization constant. Changing it is a format break (spec.md §6).
pub const STRONG_KEY: [u8; 32] = *b"kado-strong-hash-personalizer-v1";

/// Seed for the weak (xxh64) hash. A fixed domain-separation constant.
pub const WEAK_SEED: u64 = 0x6b61_646f_7768_6173; // b"kadowhas"

/// Build a fresh strong-hash context.
pub fn strong_context() -> Box<dyn HashContext> {
    Box::new(Blake3Context::new())
}

/// Build a fresh weak-hash context.
pub fn weak_context() -> Box<dyn HashContext> {
    Box::new(XxhContext::new())
}

/// Digest a single byte slice through a fresh strong-hash context.
pub fn strong_hash(bytes: &[u8]) -> String {
    let mut ctx = strong_context();
    ctx.update(bytes);
    ctx.digest_hex()
}

/// Digest a single byte slice through a fresh weak-hash context.
pub fn weak_hash(bytes: &[u8]) -> String {
    let mut ctx = weak_context();
    ctx.update(bytes);
    ctx.digest_hex()
}
