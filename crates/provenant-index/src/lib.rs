//! # provenant-index
//!
//! Append-only store of text segments with associated data, searchable by
//! exact match, substring relation, and token overlap. Raw text is kept
//! byte-for-byte for display; matching runs on the normalized form.

pub mod index;
pub mod segment;

pub use index::SegmentIndex;
pub use segment::{Segment, SegmentMatch};
