//! Encoders from the canonical code-point sequence to target-format units.

use crate::error::{EncodeError, EncodeResult};
use crate::format::{Endianness, UtfFormat};

/// The units produced by one encoder, tagged by format. Serialization to
/// bytes is a separate step so the caller picks the byte order once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitBuffer {
    Utf8(Vec<u8>),
    Utf16(Vec<u16>),
    Utf32(Vec<u32>),
}

impl UnitBuffer {
    pub fn into_bytes(self, endianness: Endianness) -> Vec<u8> {
        match self {
            Self::Utf8(units) => units,
            Self::Utf16(units) => units
                .into_iter()
                .flat_map(|unit| match endianness {
                    Endianness::BigEndian => unit.to_be_bytes(),
                    Endianness::LittleEndian => unit.to_le_bytes(),
                })
                .collect(),
            Self::Utf32(units) => units
                .into_iter()
                .flat_map(|unit| match endianness {
                    Endianness::BigEndian => unit.to_be_bytes(),
                    Endianness::LittleEndian => unit.to_le_bytes(),
                })
                .collect(),
        }
    }
}

/// Encode the code-point sequence into the target format, selected by tag.
pub fn encode(codepoints: &[u32], target: UtfFormat) -> EncodeResult<UnitBuffer> {
    match target {
        UtfFormat::Utf8 => encode_utf8(codepoints).map(UnitBuffer::Utf8),
        UtfFormat::Utf16 => encode_utf16(codepoints).map(UnitBuffer::Utf16),
        UtfFormat::Utf32 => encode_utf32(codepoints).map(UnitBuffer::Utf32),
    }
}

pub fn encode_utf8(codepoints: &[u32]) -> EncodeResult<Vec<u8>> {
    let mut bytes = Vec::with_capacity(codepoints.len());
    for (index, &codepoint) in codepoints.iter().enumerate() {
        if codepoint <= 0x7F {
            bytes.push(codepoint as u8);
        } else if codepoint <= 0x7FF {
            bytes.push((codepoint >> 6) as u8 | 0b1100_0000);
            bytes.push((codepoint & 0x3F) as u8 | 0b1000_0000);
        } else if codepoint <= 0xFFFF {
            bytes.push((codepoint >> 12) as u8 | 0b1110_0000);
            bytes.push(((codepoint >> 6) & 0x3F) as u8 | 0b1000_0000);
            bytes.push((codepoint & 0x3F) as u8 | 0b1000_0000);
        } else if codepoint <= 0x10FFFF {
            bytes.push((codepoint >> 18) as u8 | 0b1111_0000);
            bytes.push(((codepoint >> 12) & 0x3F) as u8 | 0b1000_0000);
            bytes.push(((codepoint >> 6) & 0x3F) as u8 | 0b1000_0000);
            bytes.push((codepoint & 0x3F) as u8 | 0b1000_0000);
        } else {
            return Err(EncodeError::CodePointOutOfRange { codepoint, index });
        }
    }
    Ok(bytes)
}

pub fn encode_utf16(codepoints: &[u32]) -> EncodeResult<Vec<u16>> {
    let mut units = Vec::with_capacity(codepoints.len());
    for (index, &codepoint) in codepoints.iter().enumerate() {
        if matches!(codepoint, 0xD800..=0xDFFF) {
            return Err(EncodeError::UnencodableSurrogate { codepoint, index });
        }
        if codepoint > 0x10FFFF {
            return Err(EncodeError::CodePointOutOfRange { codepoint, index });
        }
        if codepoint >= 0x010000 {
            let offset = codepoint - 0x10000;
            units.push(((offset >> 10) + 0xD800) as u16);
            units.push(((offset & 0x3FF) + 0xDC00) as u16);
        } else {
            units.push(codepoint as u16);
        }
    }
    Ok(units)
}

/// Identity: one 32-bit unit per code point, unchanged.
pub fn encode_utf32(codepoints: &[u32]) -> EncodeResult<Vec<u32>> {
    Ok(codepoints.to_vec())
}
