//! Report module - presenting and exporting the configured transfer

pub mod export;
pub mod summary;

pub use export::*;
pub use summary::*;
