//! End-to-end generation: pipeline, encode, persist.

use identicon_export::{ExportError, RasterEncoder};
use identicon_pipeline::IdenticonState;
use log::debug;

use crate::sink::{ImageSink, SinkError};

/// Errors from the two fallible boundaries of [`generate`].
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The encoder could not render the canvas.
    #[error(transparent)]
    Encode(#[from] ExportError),

    /// The sink could not store the encoded bytes.
    #[error(transparent)]
    Persist(#[from] SinkError),
}

/// Output of a successful [`generate`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    /// Encoded image bytes, exactly as handed to the sink.
    pub bytes: Vec<u8>,
    /// Name the bytes were persisted under.
    pub name: String,
    /// Every pipeline intermediate.
    pub state: IdenticonState,
}

/// Name an identicon for `input` is persisted under: `"<input>.<ext>"`.
///
/// The input is used verbatim, including the empty string (`".png"`).
#[must_use]
pub fn file_name(input: &str, encoder: &impl RasterEncoder) -> String {
    format!("{input}.{}", encoder.extension())
}

/// Derive the identicon for `input`, encode it, and persist it.
///
/// Runs the pure pipeline, encodes the canvas with `encoder`, then
/// hands the bytes to `sink` under [`file_name`]. Nothing is retried;
/// the first failure is returned as-is.
///
/// # Errors
///
/// Returns [`GenerateError::Encode`] if encoding fails and
/// [`GenerateError::Persist`] if the sink fails.
pub fn generate<E, S>(input: &str, encoder: &E, sink: &mut S) -> Result<Generated, GenerateError>
where
    E: RasterEncoder,
    S: ImageSink + ?Sized,
{
    let state = identicon_pipeline::process(input);
    generate_from_state(input, state, encoder, sink)
}

/// Encode and persist an already-computed pipeline state.
///
/// # Errors
///
/// Same as [`generate`].
pub fn generate_from_state<E, S>(
    input: &str,
    state: IdenticonState,
    encoder: &E,
    sink: &mut S,
) -> Result<Generated, GenerateError>
where
    E: RasterEncoder,
    S: ImageSink + ?Sized,
{
    let bytes = encoder.encode(&state.image)?;
    let name = file_name(input, encoder);
    debug!("encoded {} bytes for {name}", bytes.len());

    sink.persist(&name, &bytes)?;
    Ok(Generated { bytes, name, state })
}
