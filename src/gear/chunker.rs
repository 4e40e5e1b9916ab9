use super::table::gear;

/// Minimum chunk size. No cut point is ever chosen before this many bytes,
/// except for the trailing chunk of a short input.
pub const CHUNK_LO: usize = 8192;

/// Normal (target) chunk size. The looser `MASK_LO` is tried up to this many
/// bytes into the candidate chunk.
pub const CHUNK_MD: usize = 16384;

/// Maximum chunk size. A cut is always forced here if no earlier boundary was
/// found.
pub const CHUNK_HI: usize = 65536;

/// Boundary mask applied while scanning within the normal range
/// `[CHUNK_LO, CHUNK_MD)`. 13 low bits, giving an average hit probability of
/// 1/8192 in that window.
pub const MASK_LO: u64 = (1 << 13) - 1;

/// Boundary mask applied while scanning past the normal range
/// `[CHUNK_MD, CHUNK_HI)`. 15 low bits: a stricter (less probable) condition
/// that still gives most chunks a chance to end before the hard cap.
pub const MASK_HI: u64 = (1 << 15) - 1;

const _: () = assert!(CHUNK_LO > 0 && CHUNK_LO <= CHUNK_MD && CHUNK_MD <= CHUNK_HI);

/// Find the offset within `buf` at which the first chunk ends.
///
/// The rolling hash always restarts at 0 for each call: a cut point depends
/// only on the bytes of the candidate chunk currently being scanned, never on
/// bytes that preceded it.
pub fn cut(buf: &[u8]) -> usize {
    if buf.len() <= CHUNK_LO {
        return buf.len();
    }

    let sentinel_md = CHUNK_MD.min(buf.len());
    let sentinel_hi = CHUNK_HI.min(buf.len());

    let mut h: u64 = 0;
    let mut idx = CHUNK_LO;

    while idx < sentinel_md {
        h = gear(h, buf[idx]);
        if h & MASK_LO == 0 {
            return idx;
        }
        idx += 1;
    }

    while idx < sentinel_hi {
        h = gear(h, buf[idx]);
        if h & MASK_HI == 0 {
            return idx;
        }
        idx += 1;
    }

    // Fall-through: hard cut at min(CHUNK_HI, len(buf)). At this point `idx`
    // already equals `sentinel_hi`, matching the reference's for/else whose
    // else clause runs unconditionally on fall-through.
    sentinel_hi
}

/// Lazily split `buf` into non-overlapping `(start, end, data)` triples
/// covering it exactly, with `start` strictly increasing and the last
/// `end == buf.len()`.
///
/// Each step calls [`cut`] on `buf[start .. min(start + CHUNK_HI, buf.len())]`
/// — the hard cap bounds the scan — and advances `start` to the returned
/// `end`. The sequence terminates the iteration after yielding the triple
/// whose `end` reaches `buf.len()`.
pub fn chop(buf: &[u8]) -> Chop<'_> {
    Chop { buf, start: 0, done: buf.is_empty() }
}

/// Iterator returned by [`chop`].
pub struct Chop<'a> {
    buf: &'a [u8],
    start: usize,
    done: bool,
}

impl<'a> Iterator for Chop<'a> {
    type Item = (usize, usize, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let window_end = (self.start + CHUNK_HI).min(self.buf.len());
        let window = &self.buf[self.start..window_end];
        let ct_idx = cut(window);
        let end = self.start + ct_idx;

        let triple = (self.start, end, &self.buf[self.start..end]);

        if end == self.buf.len() {
            self.done = true;
        } else {
            self.start = end;
        }

        Some(triple)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concat(triples: &[(usize, usize, &[u8])]) -> Vec<u8> {
        triples.iter().flat_map(|(_, _, d)| d.iter().copied()).collect()
    }

    #[test]
    fn short_input_is_one_chunk() {
        let data = vec![b'x'; CHUNK_LO];
        let triples: Vec<_> = chop(&data).collect();
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0], (0, CHUNK_LO, &data[..]));
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(chop(&[]).count(), 0);
    }

    #[test]
    fn all_ones_cap() {
        let data = vec![b'1'; CHUNK_HI + 1];
        assert_eq!(cut(&data), CHUNK_HI);
    }

    #[test]
    fn coverage_and_bounds_hold_for_varied_input() {
        let mut data = Vec::with_capacity(5 * CHUNK_HI);
        let mut x: u32 = 0xC0FF_EE11;
        for _ in 0..data.capacity() {
            x = x.wrapping_mul(1664525).wrapping_add(1013904223);
            data.push((x >> 24) as u8);
        }

        let triples: Vec<_> = chop(&data).collect();
        assert!(!triples.is_empty());

        let mut prev_end = 0usize;
        for (i, (s, e, d)) in triples.iter().enumerate() {
            assert_eq!(*s, prev_end);
            assert!(e > s);
            assert!(e - s <= CHUNK_HI);
            if i + 1 != triples.len() {
                assert!(e - s >= CHUNK_LO, "non-terminal chunk shorter than CHUNK_LO");
            }
            assert_eq!(d.len(), e - s);
            prev_end = *e;
        }
        assert_eq!(prev_end, data.len());
        assert_eq!(concat(&triples), data);
    }

    #[test]
    fn deterministic() {
        let data = vec![7u8; 3 * CHUNK_HI + 17];
        let a: Vec<_> = chop(&data).map(|(s, e, _)| (s, e)).collect();
        let b: Vec<_> = chop(&data).map(|(s, e, _)| (s, e)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn chop_is_insensitive_to_how_the_buffer_was_assembled() {
        // Splitting the data before feeding it to chop (but still calling
        // chop on the whole, reassembled buffer) must not change the result:
        // chop is a pure function of the bytes, not of how they arrived.
        let mut data = Vec::new();
        let mut x: u64 = 1;
        for _ in 0..4 * CHUNK_HI {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((x >> 56) as u8);
        }
        let whole: Vec<_> = chop(&data).map(|(s, e, _)| (s, e)).collect();

        let mut reassembled = Vec::new();
        reassembled.extend_from_slice(&data[..CHUNK_LO + 3]);
        reassembled.extend_from_slice(&data[CHUNK_LO + 3..]);
        let again: Vec<_> = chop(&reassembled).map(|(s, e, _)| (s, e)).collect();

        assert_eq!(whole, again);
    }
}
