//! Error types for decode, encode and whole-buffer conversion.

use thiserror::Error;

/// Result type for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Result type for encode operations
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors raised while decoding raw bytes into code points.
///
/// Offsets are byte offsets for UTF-8 and unit offsets for UTF-16, counted
/// from the start of the payload handed to the decoder (after any BOM).
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A leading or continuation byte that cannot appear at this position,
    /// or a completed sequence whose value does not match its length
    #[error("invalid UTF-8 byte {byte:#04x} at offset {offset}")]
    InvalidUtf8 { byte: u8, offset: usize },

    /// Input ended in the middle of a multi-byte UTF-8 sequence
    #[error("truncated UTF-8 sequence at offset {offset}: expected {expected} bytes, found {found}")]
    TruncatedUtf8 {
        offset: usize,
        expected: usize,
        found: usize,
    },

    /// A high surrogate without a following low surrogate, or a low
    /// surrogate with no preceding high surrogate
    #[error("unpaired surrogate {unit:#06x} at unit offset {offset}")]
    UnpairedSurrogate { unit: u16, offset: usize },

    /// Payload length is not a whole number of 16- or 32-bit units
    #[error("input length {len} is not a multiple of the {unit_size}-byte unit size")]
    MisalignedInput { len: usize, unit_size: usize },
}

/// Errors raised while encoding code points into a target format.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// A bare surrogate value cannot be re-encoded as UTF-16
    #[error("surrogate code point {codepoint:#06x} at index {index} cannot be encoded as UTF-16")]
    UnencodableSurrogate { codepoint: u32, index: usize },

    /// Code point is above U+10FFFF and has no encoding in this format
    #[error("code point {codepoint:#x} at index {index} is beyond U+10FFFF")]
    CodePointOutOfRange { codepoint: u32, index: usize },
}

/// Errors raised by whole-buffer conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input starts with no recognized byte-order mark
    #[error("no recognized byte-order mark at the start of input")]
    UnknownBom,

    /// Decoding the source format failed
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),

    /// Encoding into the target format failed
    #[error("encode failed: {0}")]
    Encode(#[from] EncodeError),
}

/// A format name that is not one of the three supported UTF formats.
#[derive(Debug, Error)]
#[error("unsupported format {0:?}, expected utf8, utf16 or utf32")]
pub struct FormatParseError(pub String);
