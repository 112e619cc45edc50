//! Directives embedded in comments of the boot loader source.
//!
//! A directive is any line containing the marker (`//@` unless configured
//! otherwise); everything after the marker is the command text:
//!
//! ```text
//! //@ GOCR    0xA0        register write
//! //@ start   0x4000      base address of the program image
//! //@ patch   0x10  0xC3  byte at start + 0x10, after the image
//! ```

use std::fmt;
use std::io::{self, BufRead};

use combine::error::ParseError;
use combine::parser::char::{char, digit, hex_digit, oct_digit};
use combine::stream::Stream;
use combine::{choice, eof, many, many1, one_of, Parser};
use num_traits::Num;

/// Yields the command text of each marked line of a source file.
pub struct DirectiveScanner<R> {
    input: R,
    marker: String,
    line: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> DirectiveScanner<R> {
    pub fn new(input: R, marker: &str) -> Self {
        DirectiveScanner {
            input,
            marker: marker.into(),
            line: 0,
            buf: Vec::new(),
        }
    }

    /// Returns the text following the marker on the next marked line, or
    /// `None` at the end of input.
    pub fn next_command(&mut self) -> io::Result<Option<String>> {
        loop {
            self.buf.clear();
            if self.input.read_until(b'\n', &mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            // C sources are not necessarily UTF-8; comments may hold anything.
            let line = String::from_utf8_lossy(&self.buf);
            let line = line.trim_end_matches(&['\n', '\r'][..]);
            if let Some(pos) = line.find(self.marker.as_str()) {
                return Ok(Some(line[pos + self.marker.len()..].to_owned()));
            }
        }
    }

    /// 1-based number of the line the last command was read from.
    pub fn line(&self) -> usize {
        self.line
    }
}

/// Ways in which command text can fail to parse.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Syntax {
    MissingName,
    BadValue,
    BadPatchValue,
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Syntax::MissingName => f.write_str("missing register name"),
            Syntax::BadValue => f.write_str("missing or invalid value"),
            Syntax::BadPatchValue => f.write_str("missing or invalid patch byte"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    RegisterWrite { name: String, value: u16 },
    Start { address: u16 },
    Patch { offset: u16, value: u8 },
}

impl Command {
    pub fn parse(text: &str) -> Result<Self, Syntax> {
        let mut tokens = text.split_whitespace();
        let name = tokens.next().ok_or(Syntax::MissingName)?;
        let value = tokens.next().ok_or(Syntax::BadValue)?;
        let command = match name {
            "start" => Command::Start {
                address: parse_number(value).ok_or(Syntax::BadValue)?,
            },
            "patch" => {
                let offset = parse_number(value).ok_or(Syntax::BadValue)?;
                let byte = tokens.next().ok_or(Syntax::BadPatchValue)?;
                Command::Patch {
                    offset,
                    value: parse_number(byte).ok_or(Syntax::BadPatchValue)?,
                }
            }
            _ => Command::RegisterWrite {
                name: name.into(),
                value: parse_number(value).ok_or(Syntax::BadValue)?,
            },
        };
        Ok(command)
    }
}

/// Parses an integer literal with C prefix rules: `0x` for hexadecimal, a
/// leading `0` for octal, decimal otherwise.
///
/// Returns `None` if the token is not a literal or does not fit into `T`.
pub fn parse_number<T: Num>(token: &str) -> Option<T> {
    let ((radix, digits), _) = literal().parse(token).ok()?;
    T::from_str_radix(&digits, radix).ok()
}

fn literal<Input>() -> impl Parser<Input, Output = (u32, String)>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    // After a leading `0` only `x`-hex or octal digits may follow.
    let hex = one_of("xX".chars())
        .with(many1(hex_digit()))
        .map(|digits: String| (16u32, digits));
    let octal = many(oct_digit()).map(|digits: String| {
        if digits.is_empty() {
            (8u32, "0".to_owned())
        } else {
            (8u32, digits)
        }
    });
    let prefixed = char('0').with(choice((hex, octal)));
    let decimal = (one_of("123456789".chars()), many(digit()))
        .map(|(first, rest): (char, String)| (10u32, format!("{}{}", first, rest)));
    choice((prefixed, decimal)).skip(eof())
}
