/// Marker introducing a directive inside a comment of the source file.
pub const DEFAULT_MARKER: &str = "//@";

/// Byte which, repeated four times, terminates the program image.
pub const DEFAULT_SENTINEL: u8 = 0x76;

/// Maximum size of the generated table in bytes.
pub const DEFAULT_CAPACITY: usize = 512;

/// Name of the macro the generated table is defined as.
pub const DEFAULT_MACRO_NAME: &str = "SERIAL_FLASH_BOOT_LOADER";

#[derive(Clone, Debug)]
pub struct Options {
    pub marker: String,
    pub sentinel: u8,
    pub capacity: usize,
    pub macro_name: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            marker: DEFAULT_MARKER.into(),
            sentinel: DEFAULT_SENTINEL,
            capacity: DEFAULT_CAPACITY,
            macro_name: DEFAULT_MACRO_NAME.into(),
        }
    }
}
