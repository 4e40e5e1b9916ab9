use super::{HashContext, STRONG_KEY};

/// Strong (cryptographic) hash context: keyed BLAKE3 with the core's fixed
/// personalization key and a 32-byte digest.
#[derive(Clone)]
pub struct Blake3Context {
    hasher: blake3::Hasher,
}

impl Blake3Context {
    pub fn new() -> Self {
        Self {
            hasher: blake3::Hasher::new_keyed(&STRONG_KEY),
        }
    }
}

impl Default for Blake3Context {
    fn default() -> Self {
        Self::new()
    }
}

impl HashContext for Blake3Context {
    fn update(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    fn digest(&self) -> Vec<u8> {
        self.hasher.finalize().as_bytes().to_vec()
    }

    fn copy(&self) -> Box<dyn HashContext> {
        Box::new(self.clone())
    }
}
