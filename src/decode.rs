//! Decoders from raw bytes to the canonical code-point sequence.

use itertools::Itertools;

use crate::error::{DecodeError, DecodeResult};
use crate::format::{Endianness, UtfFormat};
use crate::utf::utf16sequence::Utf16Sequence;
use crate::utf::utf8sequence::Utf8Sequence;
use crate::utf::Utf;

/// Decode a payload in a known format. The payload must not carry a BOM.
pub fn decode(bytes: &[u8], format: UtfFormat, endianness: Endianness) -> DecodeResult<Vec<u32>> {
    match format {
        UtfFormat::Utf8 => decode_utf8(bytes),
        UtfFormat::Utf16 => decode_utf16(bytes, endianness),
        UtfFormat::Utf32 => decode_utf32(bytes, endianness),
    }
}

pub fn decode_utf8(bytes: &[u8]) -> DecodeResult<Vec<u32>> {
    let mut codepoints = Vec::new();
    let mut offset = 0;
    while offset < bytes.len() {
        let lead = bytes[offset];
        let mut sequence = Utf8Sequence::build(lead).ok_or(DecodeError::InvalidUtf8 {
            byte: lead,
            offset,
        })?;
        while !sequence.is_complete() {
            let index = offset + sequence.current_len();
            let Some(&point) = bytes.get(index) else {
                return Err(DecodeError::TruncatedUtf8 {
                    offset,
                    expected: sequence.full_len(),
                    found: sequence.current_len(),
                });
            };
            if !sequence.add_point(point) {
                return Err(DecodeError::InvalidUtf8 {
                    byte: point,
                    offset: index,
                });
            }
        }
        if !sequence.is_valid() {
            return Err(DecodeError::InvalidUtf8 { byte: lead, offset });
        }
        codepoints.push(sequence.get_codepoint());
        offset += sequence.full_len();
    }
    Ok(codepoints)
}

pub fn decode_utf16(bytes: &[u8], endianness: Endianness) -> DecodeResult<Vec<u32>> {
    if bytes.len() % 2 != 0 {
        return Err(DecodeError::MisalignedInput {
            len: bytes.len(),
            unit_size: 2,
        });
    }
    let units: Vec<u16> = bytes
        .iter()
        .copied()
        .tuples()
        .map(|(a, b)| match endianness {
            Endianness::BigEndian => u16::from_be_bytes([a, b]),
            Endianness::LittleEndian => u16::from_le_bytes([a, b]),
        })
        .collect();
    let mut codepoints = Vec::with_capacity(units.len());
    let mut offset = 0;
    while offset < units.len() {
        let unit = units[offset];
        let mut sequence =
            Utf16Sequence::build(unit).ok_or(DecodeError::UnpairedSurrogate { unit, offset })?;
        if sequence.is_surrogate() {
            let Some(&low) = units.get(offset + 1) else {
                return Err(DecodeError::UnpairedSurrogate { unit, offset });
            };
            if !sequence.add_point(low) {
                return Err(DecodeError::UnpairedSurrogate {
                    unit: low,
                    offset: offset + 1,
                });
            }
        }
        codepoints.push(sequence.get_codepoint());
        offset += if sequence.is_surrogate() { 2 } else { 1 };
    }
    Ok(codepoints)
}

/// Identity mapping from 32-bit units; values are not range-checked here,
/// re-encoding is where out-of-range values get rejected.
pub fn decode_utf32(bytes: &[u8], endianness: Endianness) -> DecodeResult<Vec<u32>> {
    if bytes.len() % 4 != 0 {
        return Err(DecodeError::MisalignedInput {
            len: bytes.len(),
            unit_size: 4,
        });
    }
    Ok(bytes
        .iter()
        .copied()
        .tuples()
        .map(|(a, b, c, d)| match endianness {
            Endianness::BigEndian => u32::from_be_bytes([a, b, c, d]),
            Endianness::LittleEndian => u32::from_le_bytes([a, b, c, d]),
        })
        .collect())
}
