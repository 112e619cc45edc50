//! Serial boot loader triplet generator for Rabbit processors.
//!
//! Turns a boot loader's C source (for its `//@` directives) and compiled
//! image into the triplet table the Rabbit boot ROM replays when booting
//! from serial flash.

pub mod directive;
pub mod driver;
pub mod error;
pub mod options;
pub mod output;
pub mod render;
pub mod sentinel;
pub mod triplet;

pub use driver::{generate, Generated};
pub use error::{Error, Phase};
pub use options::Options;
pub use rabbit_io::IoMap;
