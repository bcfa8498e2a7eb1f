//! identicon-io: Persistence and the end-to-end entry point.
//!
//! Composes the pure pipeline with an encoder from `identicon-export`
//! and hands the encoded bytes to an [`ImageSink`]. Encoding and
//! persistence are the only steps that can fail.

pub mod generate;
pub mod sink;

pub use generate::{GenerateError, Generated, file_name, generate, generate_from_state};
pub use sink::{FileSink, ImageSink, MemorySink, SinkError};
