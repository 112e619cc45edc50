//! Triplets: `(address_hi, address_lo, value)` records replayed by the
//! boot ROM. An address with the high bit set is an internal I/O register,
//! anything else is a memory byte.

use byteorder::{BigEndian, ByteOrder};
use thiserror::Error;

pub const TRIPLET_SIZE: usize = 3;

/// Address bit selecting internal I/O space.
pub const IO_FLAG: u16 = 0x8000;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Triplet {
    pub address: u16,
    pub value: u8,
}

impl Triplet {
    pub fn new(address: u16, value: u8) -> Self {
        Triplet { address, value }
    }

    pub fn is_io(&self) -> bool {
        self.address & IO_FLAG != 0
    }

    pub fn to_bytes(self) -> [u8; TRIPLET_SIZE] {
        let mut buf = [0; TRIPLET_SIZE];
        BigEndian::write_u16(&mut buf[..2], self.address);
        buf[2] = self.value;
        buf
    }

    pub fn from_bytes(buf: &[u8]) -> Self {
        Triplet {
            address: BigEndian::read_u16(buf),
            value: buf[2],
        }
    }
}

#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
#[error("boot loader would exceed {capacity} bytes")]
pub struct CapacityExceeded {
    pub capacity: usize,
}

/// Append-only triplet table with a fixed upper bound in bytes.
#[derive(Clone, Debug)]
pub struct TripletBuffer {
    bytes: Vec<u8>,
    capacity: usize,
}

impl TripletBuffer {
    pub fn new(capacity: usize) -> Self {
        TripletBuffer {
            bytes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, address: u16, value: u8) -> Result<(), CapacityExceeded> {
        if self.bytes.len() + TRIPLET_SIZE > self.capacity {
            return Err(CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.bytes
            .extend_from_slice(&Triplet::new(address, value).to_bytes());
        Ok(())
    }

    /// Number of triplets.
    pub fn len(&self) -> usize {
        self.bytes.len() / TRIPLET_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Upper bound in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn triplets(&self) -> impl Iterator<Item = Triplet> + '_ {
        self.bytes.chunks_exact(TRIPLET_SIZE).map(Triplet::from_bytes)
    }
}
