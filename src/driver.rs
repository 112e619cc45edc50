//! Builds the triplet table from a directive source and a program image.
//!
//! The table is assembled in four steps, each appending to the same
//! buffer:
//!
//! 1. register writes up to the `start` directive,
//! 2. the program image, loaded at the `start` address,
//! 3. patches and register writes following `start`,
//! 4. a jump to the program at address 0 and the write to `SPCR` which
//!    makes the boot ROM begin execution.

use std::io::{BufRead, Read};

use log::{debug, info, warn};
use rabbit_io::IoMap;

use crate::directive::{Command, DirectiveScanner};
use crate::error::{Error, Phase};
use crate::options::Options;
use crate::sentinel::SentinelScanner;
use crate::triplet::{CapacityExceeded, TripletBuffer, IO_FLAG};

/// `jp nn` opcode.
const JP: u8 = 0xC3;

/// `SPCR` with the I/O flag set.
const SPCR: u16 = IO_FLAG | 0x0024;

/// `SPCR` value ending the bootstrap and starting execution at address 0.
const SPCR_START: u8 = 0x80;

/// Highest address reachable by a memory triplet.
const MEMORY_END: u32 = 0x7FFF;

#[derive(Debug)]
pub struct Generated {
    pub buffer: TripletBuffer,
    pub start_address: u16,
}

pub fn generate<D, I>(
    io_map: &IoMap,
    options: &Options,
    directives: D,
    image: I,
) -> Result<Generated, Error>
where
    D: BufRead,
    I: Read,
{
    let mut directives = DirectiveScanner::new(directives, &options.marker);
    let mut buffer = TripletBuffer::new(options.capacity);

    let start_address = pre_load(&mut directives, io_map, &mut buffer)?;
    let image_len = load_image(
        SentinelScanner::new(image, options.sentinel),
        start_address,
        &mut buffer,
    )?;
    info!(
        "loaded {} image bytes at {:#06x}",
        image_len, start_address
    );
    post_load(&mut directives, io_map, start_address, &mut buffer)?;
    epilogue(start_address, &mut buffer)?;

    Ok(Generated {
        buffer,
        start_address,
    })
}

/// Emits register writes until the `start` directive and returns its
/// address.
pub fn pre_load<R: BufRead>(
    directives: &mut DirectiveScanner<R>,
    io_map: &IoMap,
    buffer: &mut TripletBuffer,
) -> Result<u16, Error> {
    while let Some((command, text)) = next_command(directives, Phase::PreLoad)? {
        match command {
            Command::RegisterWrite { name, value } => {
                write_register(io_map, buffer, &name, value, directives.line())?
            }
            Command::Start { address } => return Ok(address),
            Command::Patch { .. } => {
                return Err(Error::UnexpectedCommand {
                    phase: Phase::PreLoad,
                    line: directives.line(),
                    command: text,
                })
            }
        }
    }
    Err(Error::MissingStart)
}

/// Emits one memory triplet per image byte, starting at `start_address`.
///
/// Returns the number of bytes loaded.
pub fn load_image<R: Read>(
    mut image: SentinelScanner<R>,
    start_address: u16,
    buffer: &mut TripletBuffer,
) -> Result<usize, Error> {
    let mut address = u32::from(start_address);
    let mut count = 0;
    while let Some(byte) = image.next_byte()? {
        push_memory(buffer, address, byte)?;
        address += 1;
        count += 1;
    }
    Ok(count)
}

/// Emits patches and register writes following the image.
pub fn post_load<R: BufRead>(
    directives: &mut DirectiveScanner<R>,
    io_map: &IoMap,
    start_address: u16,
    buffer: &mut TripletBuffer,
) -> Result<(), Error> {
    while let Some((command, text)) = next_command(directives, Phase::PostLoad)? {
        match command {
            Command::Patch { offset, value } => push_memory(
                buffer,
                u32::from(start_address) + u32::from(offset),
                value,
            )?,
            Command::RegisterWrite { name, value } => {
                write_register(io_map, buffer, &name, value, directives.line())?
            }
            Command::Start { .. } => {
                return Err(Error::UnexpectedCommand {
                    phase: Phase::PostLoad,
                    line: directives.line(),
                    command: text,
                })
            }
        }
    }
    Ok(())
}

/// Appends the jump to `start_address` and the final `SPCR` write.
pub fn epilogue(start_address: u16, buffer: &mut TripletBuffer) -> Result<(), CapacityExceeded> {
    let [high, low] = start_address.to_be_bytes();
    buffer.push(0x0000, JP)?;
    buffer.push(0x0001, low)?;
    buffer.push(0x0002, high)?;
    buffer.push(SPCR, SPCR_START)
}

fn next_command<R: BufRead>(
    directives: &mut DirectiveScanner<R>,
    phase: Phase,
) -> Result<Option<(Command, String)>, Error> {
    let text = match directives.next_command()? {
        Some(text) => text,
        None => return Ok(None),
    };
    info!("got command: {}", text.trim());
    match Command::parse(&text) {
        Ok(command) => Ok(Some((command, text.trim().to_owned()))),
        Err(kind) => Err(Error::Syntax {
            phase,
            kind,
            line: directives.line(),
            command: text.trim().to_owned(),
        }),
    }
}

fn write_register(
    io_map: &IoMap,
    buffer: &mut TripletBuffer,
    name: &str,
    value: u16,
    line: usize,
) -> Result<(), Error> {
    let address = io_map.lookup(name).ok_or_else(|| Error::UnknownSymbol {
        name: name.into(),
        line,
    })?;
    let [high, low] = value.to_be_bytes();
    if high != 0 {
        warn!(
            "line {}: value {:#x} for {} truncated to {:#04x}",
            line, value, name, low
        );
    }
    debug!("{} ({:#06x}) <- {:#04x}", name, address | IO_FLAG, low);
    Ok(buffer.push(address | IO_FLAG, low)?)
}

fn push_memory(buffer: &mut TripletBuffer, address: u32, value: u8) -> Result<(), Error> {
    if address > MEMORY_END {
        return Err(Error::AddressOutOfRange { address });
    }
    debug!("{:#06x} <- {:#04x}", address, value);
    // Bounded by MEMORY_END above.
    Ok(buffer.push(address as u16, value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triplet::Triplet;
    use quickcheck::{quickcheck, TestResult};

    fn io_map() -> IoMap {
        IoMap::from_pairs(vec![("GOCR", 0x0E), ("SPCR", 0x24), ("MB0CR", 0x14)])
    }

    fn run(directives: &str, image: &[u8]) -> Result<Generated, Error> {
        generate(&io_map(), &Options::default(), directives.as_bytes(), image)
    }

    fn triplets(generated: &Generated) -> Vec<(u16, u8)> {
        generated
            .buffer
            .triplets()
            .map(|t| (t.address, t.value))
            .collect()
    }

    fn epilogue_for(start: u16) -> Vec<(u16, u8)> {
        vec![
            (0x0000, 0xC3),
            (0x0001, start as u8),
            (0x0002, (start >> 8) as u8),
            (0x8024, 0x80),
        ]
    }

    #[test]
    fn register_write_image_and_epilogue() {
        let generated = run(
            "//@ GOCR 0x80\n//@ start 0x4000\n",
            &[0x11, 0x22, 0x76, 0x76, 0x76, 0x76],
        )
        .unwrap();
        let mut expected = vec![(0x800E, 0x80), (0x4000, 0x11), (0x4001, 0x22)];
        expected.extend(epilogue_for(0x4000));
        assert_eq!(triplets(&generated), expected);
        assert_eq!(generated.buffer.len(), 7);
        assert_eq!(generated.start_address, 0x4000);
    }

    #[test]
    fn image_without_terminator() {
        let generated = run("//@ start 0x4000\n", &[0x76, 0x76, 0x41]).unwrap();
        assert_eq!(
            triplets(&generated)[..3],
            [(0x4000, 0x76), (0x4001, 0x76), (0x4002, 0x41)]
        );
    }

    #[test]
    fn patch_after_image() {
        let generated = run(
            "//@ start 0x4000\n//@ patch 0x10 0xC3\n//@ SPCR 0x84\n",
            &[0x00, 0x76, 0x76, 0x76, 0x76],
        )
        .unwrap();
        let mut expected = vec![(0x4000, 0x00), (0x4010, 0xC3), (0x8024, 0x84)];
        expected.extend(epilogue_for(0x4000));
        assert_eq!(triplets(&generated), expected);
    }

    #[test]
    fn unknown_register() {
        let error = run("//@ NOSUCH 0x80\n//@ start 0x4000\n", &[]).unwrap_err();
        assert!(matches!(error, Error::UnknownSymbol { ref name, line: 1 } if name == "NOSUCH"));
        assert_eq!(error.exit_code(), 11);
    }

    #[test]
    fn unknown_register_after_start() {
        let error = run("//@ start 0x4000\n//@ NOSUCH 1\n", &[]).unwrap_err();
        assert_eq!(error.exit_code(), 11);
    }

    #[test]
    fn image_exceeding_capacity() {
        let image = vec![0x00; 600];
        let error = run("//@ start 0x0000\n", &image).unwrap_err();
        assert!(matches!(error, Error::Capacity(CapacityExceeded { capacity: 512 })));
        assert_eq!(error.exit_code(), 10);
    }

    #[test]
    fn epilogue_exceeding_capacity() {
        // 166 image triplets leave room for three of the four epilogue ones.
        let image = vec![0x00; 167];
        assert!(run("//@ start 0x0000\n", &image[..166]).is_ok());
        let error = run("//@ start 0x0000\n", &image).unwrap_err();
        assert_eq!(error.exit_code(), 10);
    }

    #[test]
    fn missing_start() {
        let error = run("//@ GOCR 0x80\n", &[0x01]).unwrap_err();
        assert!(matches!(error, Error::MissingStart));
        assert_eq!(error.exit_code(), 12);
    }

    #[test]
    fn patch_before_start() {
        let error = run("//@ patch 0x10 0x00\n//@ start 0x4000\n", &[]).unwrap_err();
        assert!(matches!(
            error,
            Error::UnexpectedCommand {
                phase: Phase::PreLoad,
                line: 1,
                ..
            }
        ));
        assert_eq!(error.exit_code(), 13);
    }

    #[test]
    fn second_start() {
        let error = run("//@ start 0x4000\n//@ start 0x5000\n", &[]).unwrap_err();
        assert_eq!(error.exit_code(), 13);
    }

    #[test]
    fn syntax_errors_per_phase() {
        let code = |directives: &str| run(directives, &[]).unwrap_err().exit_code();
        assert_eq!(code("//@\n"), 5);
        assert_eq!(code("//@ GOCR\n"), 6);
        assert_eq!(code("//@ GOCR 0xZZ\n"), 6);
        assert_eq!(code("//@ start 0x4000\n//@   \n"), 7);
        assert_eq!(code("//@ start 0x4000\n//@ GOCR\n"), 8);
        assert_eq!(code("//@ start 0x4000\n//@ patch 0x10\n"), 9);
        assert_eq!(code("//@ start 0x4000\n//@ patch 0x10 0x100\n"), 9);
    }

    #[test]
    fn syntax_error_echoes_command() {
        let error = run("\n//@ GOCR nope\n", &[]).unwrap_err();
        match error {
            Error::Syntax { line, command, .. } => {
                assert_eq!(line, 2);
                assert_eq!(command, "GOCR nope");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn image_overrunning_memory() {
        let error = run("//@ start 0x7FFF\n", &[0x01, 0x02]).unwrap_err();
        assert!(matches!(error, Error::AddressOutOfRange { address: 0x8000 }));
        assert_eq!(error.exit_code(), 14);
    }

    #[test]
    fn patch_overrunning_memory() {
        let error = run("//@ start 0x4000\n//@ patch 0x4000 0x00\n", &[]).unwrap_err();
        assert!(matches!(error, Error::AddressOutOfRange { address: 0x8000 }));
    }

    #[test]
    fn wide_register_value_is_truncated() {
        let generated = run("//@ GOCR 0x1A5\n//@ start 0\n", &[]).unwrap();
        assert_eq!(triplets(&generated)[0], (0x800E, 0xA5));
    }

    #[test]
    fn configurable_marker_and_sentinel() {
        let options = Options {
            marker: "#@".into(),
            sentinel: 0xFF,
            ..Options::default()
        };
        let generated = generate(
            &io_map(),
            &options,
            &b"//@ GOCR 1\n#@ start 0x100\n"[..],
            &[0x76, 0x76, 0x76, 0x76, 0xFF, 0xFF, 0xFF, 0xFF][..],
        )
        .unwrap();
        assert_eq!(generated.buffer.len(), 4 + 4);
        assert_eq!(triplets(&generated)[0], (0x0100, 0x76));
    }

    #[test]
    fn identical_inputs_give_identical_tables() {
        let directives = "//@ MB0CR 0x45\n//@ start 0x1000\n//@ patch 2 0x99\n";
        let image = [0x3E, 0x84, 0xD3, 0x24, 0x76, 0x76, 0x76, 0x76];
        let first = run(directives, &image).unwrap();
        let second = run(directives, &image).unwrap();
        assert_eq!(first.buffer.as_bytes(), second.buffer.as_bytes());
    }

    quickcheck! {
        fn address_discipline(start: u16, image: Vec<u8>, writes: Vec<u8>) -> TestResult {
            let start = start % 0x4000;
            let image: Vec<u8> = image.into_iter().filter(|&b| b != 0x76).take(100).collect();
            let writes: Vec<u8> = writes.into_iter().take(20).collect();

            let mut directives = String::new();
            for value in &writes {
                directives.push_str(&format!("//@ GOCR {:#x}\n", value));
            }
            directives.push_str(&format!("//@ start {:#x}\n", start));
            directives.push_str("//@ patch 0x10 0x01\n//@ SPCR 0x80\n");

            let generated = match run(&directives, &image) {
                Ok(generated) => generated,
                Err(_) => return TestResult::failed(),
            };
            let all: Vec<Triplet> = generated.buffer.triplets().collect();
            let (pre, rest) = all.split_at(writes.len());
            let (loaded, rest) = rest.split_at(image.len());

            let pre_ok = pre.iter().all(Triplet::is_io);
            let loaded_ok = loaded.iter().enumerate().all(|(i, t)| {
                !t.is_io() && u32::from(t.address) == u32::from(start) + i as u32 && t.value == image[i]
            });
            let post_ok = !rest[0].is_io() && rest[0].address == start + 0x10 && rest[1].is_io();
            TestResult::from_bool(
                pre_ok
                    && loaded_ok
                    && post_ok
                    && generated.buffer.as_bytes().len() == 3 * generated.buffer.len()
                    && generated.buffer.len() <= 512 / 3
            )
        }
    }
}
