//! Apple II configuration: the system ROM image.

/// Size of the system ROM image (mapped at $D000-$FFFF).
pub const SYSTEM_ROM_SIZE: usize = 0x3000;

/// Address the system ROM is installed at.
pub const SYSTEM_ROM_BASE: u16 = 0xD000;

/// Configuration for constructing an Apple II instance.
pub struct Apple2Config {
    /// System ROM (12,288 bytes, mapped at $D000-$FFFF). The top six
    /// bytes hold the NMI, reset and break vectors.
    pub rom: Vec<u8>,
}
