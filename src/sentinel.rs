//! Byte stream of a program image terminated by a sentinel run.
//!
//! The compiler pads the end of the boot loader code with four copies of
//! the sentinel byte (`0x76`, the `halt` opcode). Shorter runs of that byte
//! are ordinary code and must be passed through unchanged, so each
//! sentinel byte is followed by a bounded lookahead which is pushed back
//! into the stream when the run turns out to be too short.

use std::collections::VecDeque;
use std::io::{self, Read};

/// Number of consecutive sentinel bytes that end the image.
pub const SENTINEL_RUN: usize = 4;

pub struct SentinelScanner<R> {
    bytes: io::Bytes<R>,
    sentinel: u8,
    lookahead: VecDeque<u8>,
    finished: bool,
}

impl<R: Read> SentinelScanner<R> {
    pub fn new(input: R, sentinel: u8) -> Self {
        SentinelScanner {
            bytes: input.bytes(),
            sentinel,
            lookahead: VecDeque::with_capacity(SENTINEL_RUN - 1),
            finished: false,
        }
    }

    /// Returns the next image byte, or `None` once the sentinel run or the
    /// end of input has been reached.
    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if self.finished {
            return Ok(None);
        }
        let byte = match self.pull()? {
            Some(byte) => byte,
            None => {
                self.finished = true;
                return Ok(None);
            }
        };
        if byte != self.sentinel {
            return Ok(Some(byte));
        }

        let mut run = [0; SENTINEL_RUN - 1];
        let mut n = 0;
        while n < run.len() {
            match self.pull()? {
                Some(next) => {
                    run[n] = next;
                    n += 1;
                    if next != self.sentinel {
                        break;
                    }
                }
                None => break,
            }
        }
        if n == run.len() && run.iter().all(|&b| b == self.sentinel) {
            self.finished = true;
            return Ok(None);
        }
        for &b in run[..n].iter().rev() {
            self.lookahead.push_front(b);
        }
        Ok(Some(byte))
    }

    fn pull(&mut self) -> io::Result<Option<u8>> {
        match self.lookahead.pop_front() {
            Some(byte) => Ok(Some(byte)),
            None => self.bytes.next().transpose(),
        }
    }
}

impl<R: Read> Iterator for SentinelScanner<R> {
    type Item = io::Result<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.next_byte();
        if result.is_err() {
            self.finished = true;
        }
        result.transpose()
    }
}
