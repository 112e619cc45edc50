//! Output formats for a finished triplet table.
//!
//! The text format is a Dynamic C library header defining the table as a
//! `db` macro that the BIOS expands in front of its own code:
//!
//! ```text
//! /* THIS FILE WAS AUTOMATICALLY GENERATED.  DO NOT MODIFY. */
//! /* Tripleted serial bootloader for Rabbit 5000 and later. */
//! /*** BeginHeader */
//! #define	SERIAL_FLASH_BOOT_LOADER \
//! 	db 0x80,  0x0e,  0x80 \
//! 	,  0x40,  0x00,  0x11
//! /*** EndHeader */
//! ```
//!
//! The layout is consumed verbatim by the BIOS build, so separators and
//! casing must not change.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::triplet::{TripletBuffer, TRIPLET_SIZE};

pub const HEADER: &str = "/* THIS FILE WAS AUTOMATICALLY GENERATED.  DO NOT MODIFY. */\n\
                          /* Tripleted serial bootloader for Rabbit 5000 and later. */\n\
                          /*** BeginHeader */\n";
pub const FOOTER: &str = "/*** EndHeader */\n";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Format {
    Text,
    Binary,
}

impl Format {
    pub fn render(self, buffer: &TripletBuffer, macro_name: &str) -> Vec<u8> {
        match self {
            Format::Text => render_text(buffer, macro_name).into_bytes(),
            Format::Binary => render_binary(buffer),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Format::Text),
            "binary" => Ok(Format::Binary),
            _ => Err(format!("unknown output format `{}`", s)),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Format::Text => f.write_str("text"),
            Format::Binary => f.write_str("binary"),
        }
    }
}

pub fn render_text(buffer: &TripletBuffer, macro_name: &str) -> String {
    let bytes = buffer.as_bytes();
    // "0xNN,  " per byte plus a line continuation per triplet
    let mut out = String::with_capacity(HEADER.len() + FOOTER.len() + bytes.len() * 9);
    out.push_str(HEADER);
    out.push_str(&format!("#define\t{} \\\n\tdb", macro_name));
    for (i, byte) in bytes.iter().enumerate() {
        if i == 0 {
            out.push_str(&format!(" 0x{:02x}", byte));
            continue;
        }
        if i % TRIPLET_SIZE == 0 {
            out.push_str(" \\\n\t");
        }
        out.push_str(&format!(",  0x{:02x}", byte));
    }
    out.push('\n');
    out.push_str(FOOTER);
    out
}

pub fn render_binary(buffer: &TripletBuffer) -> Vec<u8> {
    buffer.as_bytes().to_vec()
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum DecodeError {
    #[error("no #define line found")]
    MissingDefine,
    #[error("no end of header found")]
    MissingFooter,
    #[error("invalid byte literal `{0}`")]
    BadLiteral(String),
}

/// Recovers the raw table bytes from the text format.
pub fn decode_text(text: &str) -> Result<Vec<u8>, DecodeError> {
    let define = text.find("#define").ok_or(DecodeError::MissingDefine)?;
    let body = &text[define..];
    let body = match body.find('\n') {
        Some(eol) => &body[eol + 1..],
        None => "",
    };
    let end = body.find(FOOTER.trim_end()).ok_or(DecodeError::MissingFooter)?;
    body[..end]
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty() && *token != "\\" && *token != "db")
        .map(|token| {
            token
                .strip_prefix("0x")
                .filter(|digits| digits.len() == 2 && digits.bytes().all(|b| b.is_ascii_hexdigit()))
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(|| DecodeError::BadLiteral(token.into()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn buffer_of(triplets: &[(u16, u8)]) -> TripletBuffer {
        let mut buffer = TripletBuffer::new(512);
        for &(address, value) in triplets {
            buffer.push(address, value).unwrap();
        }
        buffer
    }

    #[test]
    fn text_layout() {
        let buffer = buffer_of(&[(0x800E, 0x80), (0x4000, 0x11), (0x0001, 0xAB)]);
        assert_eq!(
            render_text(&buffer, "SERIAL_FLASH_BOOT_LOADER"),
            "/* THIS FILE WAS AUTOMATICALLY GENERATED.  DO NOT MODIFY. */\n\
             /* Tripleted serial bootloader for Rabbit 5000 and later. */\n\
             /*** BeginHeader */\n\
             #define\tSERIAL_FLASH_BOOT_LOADER \\\n\
             \tdb 0x80,  0x0e,  0x80 \\\n\
             \t,  0x40,  0x00,  0x11 \\\n\
             \t,  0x00,  0x01,  0xab\n\
             /*** EndHeader */\n"
        );
    }

    #[test]
    fn single_triplet() {
        let text = render_text(&buffer_of(&[(0x8024, 0x80)]), "BL");
        assert!(text.contains("#define\tBL \\\n\tdb 0x80,  0x24,  0x80\n/*** EndHeader */\n"));
    }

    #[test]
    fn empty_table() {
        let text = render_text(&TripletBuffer::new(512), "BL");
        assert!(text.ends_with("#define\tBL \\\n\tdb\n/*** EndHeader */\n"));
        assert_eq!(decode_text(&text), Ok(vec![]));
    }

    #[test]
    fn binary_is_raw_triplets() {
        let buffer = buffer_of(&[(0x8024, 0x80), (0x0000, 0xC3)]);
        assert_eq!(
            Format::Binary.render(&buffer, "BL"),
            vec![0x80, 0x24, 0x80, 0x00, 0x00, 0xC3]
        );
    }

    #[test]
    fn format_from_str() {
        assert_eq!("text".parse::<Format>(), Ok(Format::Text));
        assert_eq!("binary".parse::<Format>(), Ok(Format::Binary));
        assert!("hex".parse::<Format>().is_err());
    }

    #[test]
    fn decode_errors() {
        assert_eq!(decode_text("db 0x01"), Err(DecodeError::MissingDefine));
        assert_eq!(
            decode_text("#define X \\\n\tdb 0x01\n"),
            Err(DecodeError::MissingFooter)
        );
        assert_eq!(
            decode_text("#define X \\\n\tdb 0x1,  0x02\n/*** EndHeader */\n"),
            Err(DecodeError::BadLiteral("0x1".into()))
        );
    }

    quickcheck! {
        fn decode_recovers_bytes(triplets: Vec<(u16, u8)>) -> bool {
            let triplets: Vec<_> = triplets.into_iter().take(170).collect();
            let buffer = buffer_of(&triplets);
            let decoded = decode_text(&render_text(&buffer, "SERIAL_FLASH_BOOT_LOADER")).unwrap();
            decoded.len() == TRIPLET_SIZE * buffer.len() && decoded == buffer.as_bytes()
        }
    }
}
