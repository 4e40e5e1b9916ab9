use std::fs::File;
use std::io::Read as IoRead;
use std::path::Path;

use crate::error::Result;

use super::chunker::{chop, CHUNK_HI};
use super::iterator::XLast;

/// Chunk a file whose size may exceed memory, using a fixed working buffer of
/// `CHUNK_HI` bytes and a carry-over region for the tail chunk that might
/// still grow on the next refill.
///
/// The returned sequence equals `chop(&entire file contents)` triple for
/// triple; peak resident memory is `O(CHUNK_HI)`. The file is opened for the
/// lifetime of the returned iterator and closed when it is dropped, whether
/// that is by normal exhaustion, early abandonment, or an I/O error.
pub fn read(path: impl AsRef<Path>) -> Result<Reader> {
    let file = File::open(path)?;
    Ok(Reader {
        file: Some(file),
        file_idx: 0,
        remain: Vec::new(),
        pending: std::collections::VecDeque::new(),
        eof_emitted: false,
        error: None,
    })
}

/// Iterator returned by [`read`]. Each item is a `(start, end, data)` triple
/// with offsets absolute to the whole file.
pub struct Reader {
    file: Option<File>,
    file_idx: usize,
    remain: Vec<u8>,
    pending: std::collections::VecDeque<(usize, usize, Vec<u8>)>,
    eof_emitted: bool,
    error: Option<std::io::Error>,
}

impl Reader {
    fn refill(&mut self) -> std::io::Result<()> {
        loop {
            if !self.pending.is_empty() {
                return Ok(());
            }

            let Some(file) = self.file.as_mut() else {
                return Ok(());
            };

            let mut buf = vec![0u8; CHUNK_HI];
            let mut read_total = 0usize;
            while read_total < buf.len() {
                match file.read(&mut buf[read_total..]) {
                    Ok(0) => break,
                    Ok(n) => read_total += n,
                    Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                }
            }

            if read_total == 0 {
                // EOF: drop the handle (closes the file) and flush the carry.
                self.file = None;
                if !self.eof_emitted {
                    self.eof_emitted = true;
                    let base = self.file_idx;
                    for (s, e, d) in chop(&self.remain) {
                        self.pending.push_back((base + s, base + e, d.to_vec()));
                    }
                }
                return Ok(());
            }

            let mut region = std::mem::take(&mut self.remain);
            region.extend_from_slice(&buf[..read_total]);

            let base = self.file_idx;
            let mut emitted_len = 0usize;
            let triples: Vec<(usize, usize, Vec<u8>)> =
                chop(&region).map(|(s, e, d)| (s, e, d.to_vec())).collect();

            for (s, e, d) in XLast::new(triples.into_iter()) {
                emitted_len = e;
                self.pending.push_back((base + s, base + e, d));
            }

            self.remain = region[emitted_len..].to_vec();
            self.file_idx = base + emitted_len;

            if !self.pending.is_empty() {
                return Ok(());
            }
            // Nothing emitted yet (whole region was a single growing tail
            // chunk); loop again to pull more bytes before yielding.
        }
    }
}

impl Iterator for Reader {
    type Item = Result<(usize, usize, Vec<u8>)>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(e) = self.error.take() {
            return Some(Err(e.into()));
        }

        if self.pending.is_empty() {
            if let Err(e) = self.refill() {
                return Some(Err(e.into()));
            }
        }

        self.pending.pop_front().map(Ok)
    }
}
