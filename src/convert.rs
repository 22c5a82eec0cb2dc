//! Whole-buffer conversion: detect, decode, re-encode.

use crate::decode::decode;
use crate::encode::encode;
use crate::error::ConvertError;
use crate::format::{detect, Endianness, UtfFormat};

/// Convert a BOM-carrying buffer into the target format.
///
/// The output carries the target format's BOM and little-endian units, so
/// converter output always re-detects.
pub fn convert(input: &[u8], target: UtfFormat) -> Result<Vec<u8>, ConvertError> {
    let detection = detect(input).ok_or(ConvertError::UnknownBom)?;
    convert_pretagged(
        &input[detection.bom_len..],
        detection.format,
        detection.endianness,
        target,
    )
}

/// Convert a BOM-less payload whose format the caller already knows.
pub fn convert_pretagged(
    payload: &[u8],
    format: UtfFormat,
    endianness: Endianness,
    target: UtfFormat,
) -> Result<Vec<u8>, ConvertError> {
    let codepoints = decode(payload, format, endianness)?;
    let units = encode(&codepoints, target)?;
    let mut output = target.bom(Endianness::LittleEndian).to_vec();
    output.extend(units.into_bytes(Endianness::LittleEndian));
    Ok(output)
}
