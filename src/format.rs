//! UTF format tags, byte-order marks and BOM-based format detection.

use std::str::FromStr;

use crate::error::FormatParseError;

pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
pub const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
pub const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];
pub const UTF32_LE_BOM: [u8; 4] = [0xFF, 0xFE, 0x00, 0x00];
pub const UTF32_BE_BOM: [u8; 4] = [0x00, 0x00, 0xFE, 0xFF];

/// One of the three supported Unicode Transformation Formats.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UtfFormat {
    Utf8,
    Utf16,
    Utf32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endianness {
    BigEndian,
    LittleEndian,
}

/// What [`detect`] found: the format, the byte order of its units, and how
/// many leading bytes the BOM occupies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Detection {
    pub format: UtfFormat,
    pub endianness: Endianness,
    pub bom_len: usize,
}

impl UtfFormat {
    /// Width of one code unit in bytes.
    pub const fn unit_size(self) -> usize {
        match self {
            Self::Utf8 => 1,
            Self::Utf16 => 2,
            Self::Utf32 => 4,
        }
    }

    /// The byte-order mark that announces this format in the given byte
    /// order. UTF-8 is byte-oriented and has a single mark.
    pub const fn bom(self, endianness: Endianness) -> &'static [u8] {
        match (self, endianness) {
            (Self::Utf8, _) => &UTF8_BOM,
            (Self::Utf16, Endianness::LittleEndian) => &UTF16_LE_BOM,
            (Self::Utf16, Endianness::BigEndian) => &UTF16_BE_BOM,
            (Self::Utf32, Endianness::LittleEndian) => &UTF32_LE_BOM,
            (Self::Utf32, Endianness::BigEndian) => &UTF32_BE_BOM,
        }
    }
}

impl FromStr for UtfFormat {
    type Err = FormatParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Self::Utf8),
            "utf16" | "utf-16" => Ok(Self::Utf16),
            "utf32" | "utf-32" => Ok(Self::Utf32),
            _ => Err(FormatParseError(name.to_owned())),
        }
    }
}

/// Inspect the leading bytes of a buffer and return the format its BOM
/// announces, or `None` when no mark is recognized. No content heuristics.
///
/// The UTF-32 LE mark extends the UTF-16 LE mark by two zero bytes, so the
/// four-byte patterns must be tested before the two-byte ones.
pub fn detect(bytes: &[u8]) -> Option<Detection> {
    let (format, endianness, bom_len) = if bytes.starts_with(&UTF8_BOM) {
        (UtfFormat::Utf8, Endianness::LittleEndian, UTF8_BOM.len())
    } else if bytes.starts_with(&UTF32_LE_BOM) {
        (UtfFormat::Utf32, Endianness::LittleEndian, UTF32_LE_BOM.len())
    } else if bytes.starts_with(&UTF32_BE_BOM) {
        (UtfFormat::Utf32, Endianness::BigEndian, UTF32_BE_BOM.len())
    } else if bytes.starts_with(&UTF16_LE_BOM) {
        (UtfFormat::Utf16, Endianness::LittleEndian, UTF16_LE_BOM.len())
    } else if bytes.starts_with(&UTF16_BE_BOM) {
        (UtfFormat::Utf16, Endianness::BigEndian, UTF16_BE_BOM.len())
    } else {
        return None;
    };
    Some(Detection {
        format,
        endianness,
        bom_len,
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::utf8(&[0xEF, 0xBB, 0xBF, 0x41], UtfFormat::Utf8, Endianness::LittleEndian, 3)]
    #[case::utf32_le(&[0xFF, 0xFE, 0x00, 0x00], UtfFormat::Utf32, Endianness::LittleEndian, 4)]
    #[case::utf32_be(&[0x00, 0x00, 0xFE, 0xFF], UtfFormat::Utf32, Endianness::BigEndian, 4)]
    #[case::utf16_le(&[0xFF, 0xFE, 0x41, 0x00], UtfFormat::Utf16, Endianness::LittleEndian, 2)]
    #[case::utf16_be(&[0xFE, 0xFF, 0x00, 0x41], UtfFormat::Utf16, Endianness::BigEndian, 2)]
    fn detects_bom(
        #[case] bytes: &[u8],
        #[case] format: UtfFormat,
        #[case] endianness: Endianness,
        #[case] bom_len: usize,
    ) {
        assert_eq!(
            detect(bytes),
            Some(Detection {
                format,
                endianness,
                bom_len
            })
        );
    }

    #[test]
    fn utf32_le_mark_wins_over_utf16_le() {
        // FF FE 00 00 is a UTF-32 BOM, not a UTF-16 BOM followed by a NUL.
        assert_eq!(
            detect(&[0xFF, 0xFE, 0x00, 0x00]).unwrap().format,
            UtfFormat::Utf32
        );
        assert_eq!(
            detect(&[0xFF, 0xFE, 0x41, 0x00]).unwrap().format,
            UtfFormat::Utf16
        );
    }

    #[test]
    fn bare_utf16_le_mark() {
        assert_eq!(detect(&[0xFF, 0xFE]).unwrap().format, UtfFormat::Utf16);
    }

    #[test]
    fn no_mark_is_no_detection() {
        assert_eq!(detect(b"plain ascii"), None);
        assert_eq!(detect(&[]), None);
        assert_eq!(detect(&[0xEF, 0xBB]), None);
    }

    #[rstest]
    #[case("utf8", UtfFormat::Utf8)]
    #[case("UTF-8", UtfFormat::Utf8)]
    #[case("utf16", UtfFormat::Utf16)]
    #[case("Utf-16", UtfFormat::Utf16)]
    #[case("utf32", UtfFormat::Utf32)]
    #[case("UTF32", UtfFormat::Utf32)]
    fn parses_format_names(#[case] name: &str, #[case] format: UtfFormat) {
        assert_eq!(name.parse::<UtfFormat>().unwrap(), format);
    }

    #[test]
    fn rejects_unknown_format_name() {
        assert!("latin1".parse::<UtfFormat>().is_err());
        assert!("".parse::<UtfFormat>().is_err());
    }

    #[test]
    fn boms_round_trip_through_detection() {
        for format in [UtfFormat::Utf8, UtfFormat::Utf16, UtfFormat::Utf32] {
            for endianness in [Endianness::LittleEndian, Endianness::BigEndian] {
                let detection = detect(format.bom(endianness)).unwrap();
                assert_eq!(detection.format, format);
                assert_eq!(detection.bom_len, format.bom(endianness).len());
            }
        }
    }
}
