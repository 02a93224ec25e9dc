//! Export of scraped products.
//!
//! Products are written as JSON Lines (one JSON object per line), to a file or
//! to stdout.

mod jsonl;
mod pipe;

pub use jsonl::{open_output, write_jsonl};
pub(crate) use pipe::IgnoreBrokenPipe;
