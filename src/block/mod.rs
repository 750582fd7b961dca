//! Paragraph segmentation.
//!
//! The segmenter is the structural pre-pass: it decides how the source
//! splits into paragraph blocks before any inline markup is examined.
//! - CRLF line breaks: one paragraph per line, trailing block included
//! - anything else: a single paragraph over the trimmed text

mod paragraph;

pub use paragraph::{segment, Layout, Segmented};
