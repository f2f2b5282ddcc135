//! Convenience extension traits for slices, strings, byte buffers, paths,
//! URLs and JSON-serializable values.

pub mod error;
pub mod file;
pub mod hex;
pub mod json;
pub mod lines;
pub mod path;
pub mod slice;
pub mod string;
pub mod url;
