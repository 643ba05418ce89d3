//! Template sources

pub mod source;

pub use source::*;
