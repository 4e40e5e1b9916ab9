//! Content-defined chunking: the Gear rolling hash, the `cut`/`chop`
//! boundary finder, and the bounded-memory streaming driver.

mod chunker;
mod iterator;
mod stream;
mod table;

pub use chunker::{chop, cut, Chop, CHUNK_HI, CHUNK_LO, CHUNK_MD, MASK_HI, MASK_LO};
pub use iterator::{OneXLast, XLast};
pub use stream::{read, Reader};
pub use table::{gear, GHASH_TABLE};
