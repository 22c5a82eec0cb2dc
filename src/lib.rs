pub mod convert;
pub mod decode;
pub mod encode;
pub mod error;
pub mod format;
mod utf;

pub use convert::{convert, convert_pretagged};
pub use decode::{decode, decode_utf16, decode_utf32, decode_utf8};
pub use encode::{encode, encode_utf16, encode_utf32, encode_utf8, UnitBuffer};
pub use error::{ConvertError, DecodeError, EncodeError, FormatParseError};
pub use format::{detect, Detection, Endianness, UtfFormat};

/// Entry point for the binary: `utfconv <input> <output> <utf8|utf16|utf32>`.
///
/// Reads the whole input file, converts it to the requested format and
/// writes the whole output file. Any failure aborts the conversion; no
/// partial output is written.
pub fn utfconv(argv: Vec<std::ffi::OsString>) -> Result<(), Box<dyn std::error::Error>> {
    let [input_path, output_path, format_name]: [std::ffi::OsString; 3] = match argv.try_into() {
        Ok(arguments) => arguments,
        Err(_) => {
            if let Ok(exe) = std::env::current_exe() {
                eprintln!(
                    "Wrong number of arguments. Usage: {} <input> <output> <utf8|utf16|utf32>",
                    exe.display()
                );
            }
            return Err(std::io::Error::from(std::io::ErrorKind::InvalidInput).into());
        }
    };
    let target: UtfFormat = format_name.to_string_lossy().parse()?;
    let input = std::fs::read(std::path::Path::new(&input_path))?;
    let output = convert(&input, target)?;
    std::fs::write(std::path::Path::new(&output_path), output)?;
    Ok(())
}
