use xxhash_rust::xxh64::Xxh64;

use super::{HashContext, WEAK_SEED};

/// Weak (non-cryptographic) hash context: xxh64 seeded with the core's fixed
/// constant. Produces an 8-byte digest.
#[derive(Clone)]
pub struct XxhContext {
    state: Xxh64,
}

impl XxhContext {
    pub fn new() -> Self {
        Self {
            state: Xxh64::new(WEAK_SEED),
        }
    }
}

impl Default for XxhContext {
    fn default() -> Self {
        Self::new()
    }
}

impl HashContext for XxhContext {
    fn update(&mut self, bytes: &[u8]) {
        self.state.update(bytes);
    }

    fn digest(&self) -> Vec<u8> {
        self.state.digest().to_be_bytes().to_vec()
    }

    fn copy(&self) -> Box<dyn HashContext> {
        Box::new(self.clone())
    }
}
