use std::cell::RefCell;

use indexmap::IndexMap;
use uuid::Uuid;

use crate::error::Result;
use crate::gear::chop;
use crate::hash::{strong_context, weak_context, HashContext};
use crate::id::item_id;
use crate::tree::HashTreeContext;

use super::{ct_eq, Chunk, HasData, HasId, HasMetadata};

struct Digests {
    shash: RefCell<Option<String>>,
    whash: RefCell<Option<String>>,
}

impl Digests {
    fn fresh() -> Self {
        Self { shash: RefCell::new(None), whash: RefCell::new(None) }
    }
}

/// An ordered, mutable sequence of chunks plus string-keyed metadata.
///
/// `Item`'s strong/weak digests are not computed over its raw bytes directly:
/// they are the hash-tree root over its chunks' per-chunk digests (spec.md
/// §4.5 — "Item override"), using the same lazy-recompute-and-cache machinery
/// a plain `Chunk` uses for its single leaf: the digest is recomputed the
/// first time it's read after a mutation, and cached until the next one.
pub struct Item {
    id: Uuid,
    data: Vec<u8>,
    chunks: Vec<Chunk>,
    metadata: IndexMap<String, String>,
    digests: Digests,
}

impl Item {
    /// Build an item from bytes, chunking them with [`crate::gear::chop`],
    /// and optional initial metadata.
    pub fn new(data: impl AsRef<[u8]>, metadata: IndexMap<String, String>) -> Self {
        let mut item = Self {
            id: item_id(),
            data: Vec::new(),
            chunks: Vec::new(),
            metadata,
            digests: Digests::fresh(),
        };
        item.rechunk(data.as_ref());
        item
    }

    /// An empty item with no metadata.
    pub fn empty() -> Self {
        Self::new(Vec::new(), IndexMap::new())
    }

    fn rechunk(&mut self, data: &[u8]) {
        self.chunks = chop(data).map(|(_, _, d)| Chunk::new(d.to_vec())).collect();
        self.data = data.to_vec();
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        *self.digests.shash.borrow_mut() = None;
        *self.digests.whash.borrow_mut() = None;
    }

    /// The chunks making up this item, in order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Append a chunk directly (bypassing re-chunking of the whole item).
    /// Used by ingestion pipelines that build an item chunk-by-chunk as they
    /// stream data in, rather than handing the whole buffer to `Item::new`.
    pub fn push_chunk(&mut self, chunk: Chunk) {
        self.data.extend_from_slice(chunk.data());
        self.chunks.push(chunk);
        self.mark_dirty();
    }

    fn aggregate(&self, leaf_factory: fn() -> Box<dyn HashContext>) -> String {
        let mut ctx = HashTreeContext::new(leaf_factory);
        for chunk in &self.chunks {
            ctx.update(chunk.data());
        }
        hex::encode(ctx.digest())
    }

    /// A deep copy with a freshly regenerated `id`; content and metadata are
    /// preserved, but the copy is always a distinct item.
    pub fn duplicate(&self) -> Self {
        Self {
            id: item_id(),
            data: self.data.clone(),
            chunks: self.chunks.iter().map(|c| Chunk::new(c.data().to_vec())).collect(),
            metadata: self.metadata.clone(),
            digests: Digests::fresh(),
        }
    }
}

impl HasId for Item {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl HasData for Item {
    fn data(&self) -> &[u8] {
        &self.data
    }

    fn set_data(&mut self, data: Vec<u8>) -> Result<()> {
        self.rechunk(&data);
        Ok(())
    }

    fn shash(&self) -> String {
        if let Some(cached) = self.digests.shash.borrow().as_ref() {
            return cached.clone();
        }
        let hex = self.aggregate(strong_context);
        *self.digests.shash.borrow_mut() = Some(hex.clone());
        hex
    }

    fn whash(&self) -> String {
        if let Some(cached) = self.digests.whash.borrow().as_ref() {
            return cached.clone();
        }
        let hex = self.aggregate(weak_context);
        *self.digests.whash.borrow_mut() = Some(hex.clone());
        hex
    }
}

impl HasMetadata for Item {
    fn metadata(&self) -> &IndexMap<String, String> {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut IndexMap<String, String> {
        &mut self.metadata
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.data, &other.data)
    }
}

impl Eq for Item {}

impl std::hash::Hash for Item {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::HashTree;

    #[test]
    fn data_roundtrips_through_chunking() {
        let bytes = vec![42u8; 100_000];
        let item = Item::new(bytes.clone(), IndexMap::new());
        assert_eq!(item.data(), bytes.as_slice());
        assert_eq!(item.len(), bytes.len());
    }

    #[test]
    fn data_equals_concatenation_of_chunks() {
        let bytes = vec![9u8; 150_000];
        let item = Item::new(bytes, IndexMap::new());
        let concat: Vec<u8> = item.chunks().iter().flat_map(|c| c.data().to_vec()).collect();
        assert_eq!(item.data(), concat.as_slice());
    }

    #[test]
    fn shash_equals_hash_tree_root_over_chunk_shashes() {
        let bytes = vec![3u8; 200_000];
        let item = Item::new(bytes, IndexMap::new());

        let mut tree = HashTree::new(strong_context);
        for chunk in item.chunks() {
            tree.update(chunk.data());
        }
        assert_eq!(item.shash(), tree.digest_hex(None).unwrap());
    }

    #[test]
    fn empty_item_digests_match_empty_hash_tree() {
        let item = Item::empty();
        let empty_tree = HashTree::new(strong_context);
        assert_eq!(item.shash(), empty_tree.digest_hex(None).unwrap());
        assert!(item.chunks().is_empty());
        assert_eq!(item.len(), 0);
    }

    #[test]
    fn duplicate_preserves_content_but_gets_a_new_id() {
        let mut original = Item::new(b"hello world".to_vec(), IndexMap::new());
        original.metadata_mut().insert("k".into(), "v".into());

        let copy = original.duplicate();
        assert_ne!(original.id(), copy.id());
        assert_eq!(original.data(), copy.data());
        assert_eq!(original.metadata(), copy.metadata());
        assert_eq!(original.shash(), copy.shash());
    }

    #[test]
    fn set_data_rechunks_and_replaces_all_chunks() {
        let mut item = Item::new(b"first".to_vec(), IndexMap::new());
        let before_shash = item.shash();

        item.set_data(b"entirely different content".to_vec()).unwrap();
        assert_eq!(item.data(), b"entirely different content");
        assert_ne!(item.shash(), before_shash);
    }

    #[test]
    fn metadata_is_ordered_and_string_keyed() {
        let mut item = Item::empty();
        item.metadata_mut().insert("b".into(), "2".into());
        item.metadata_mut().insert("a".into(), "1".into());
        let keys: Vec<_> = item.metadata().keys().cloned().collect();
        assert_eq!(keys, vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn shash_is_cached_until_the_next_mutation() {
        let mut item = Item::new(b"x".to_vec(), IndexMap::new());
        let first = item.shash();
        let second = item.shash();
        assert_eq!(first, second);
        assert!(item.digests.shash.borrow().is_some());

        item.set_data(b"y".to_vec()).unwrap();
        assert!(item.digests.shash.borrow().is_none());
        let third = item.shash();
        assert_ne!(second, third);
    }

    #[test]
    fn equal_data_hashes_equal() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let a = Item::new(b"same".to_vec(), IndexMap::new());
        let b = Item::new(b"same".to_vec(), IndexMap::new());
        assert_eq!(a, b);

        let mut ha = DefaultHasher::new();
        a.hash(&mut ha);
        let mut hb = DefaultHasher::new();
        b.hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }
}
