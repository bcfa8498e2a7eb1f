//! Input hashing.
//!
//! The first pipeline step: an arbitrary string in, a fixed 16-byte
//! [`Digest`] out. MD5 is used for its compact output and wide
//! availability, not for security; accidental visual collisions are
//! what matters here.

use md5::{Digest as _, Md5};

use crate::types::Digest;

/// Hash the UTF-8 bytes of `input` with MD5.
///
/// Total over every string, including the empty one.
#[must_use = "returns the input digest"]
pub fn hash_input(input: &str) -> Digest {
    Digest::new(Md5::digest(input.as_bytes()).into())
}
