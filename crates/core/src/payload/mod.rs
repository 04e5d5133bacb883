//! Inline payload decoding.
//!
//! Accepts plain base64 or a `data:<media-type>;base64,<data>` URI and yields the raw
//! bytes together with the declared media type, if any.

mod decoder;
mod error;

#[cfg(test)]
mod decoder_props;

pub use decoder::{DecodedPayload, decode};
pub use error::PayloadError;
