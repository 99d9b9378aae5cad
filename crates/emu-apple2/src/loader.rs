//! Program and firmware loading.
//!
//! A program image is a raw binary blob copied byte-for-byte into memory
//! at a caller-chosen address — there is no header format. Firmware goes
//! in the same way (the machine installs its system ROM at $D000 with
//! [`load_blob`]).

use std::fs;
use std::path::Path;

use crate::memory::Apple2Memory;

/// Copy a raw binary blob into memory starting at `address`.
///
/// Writes go directly to storage, bypassing soft-switch decode and ROM
/// write protection — this is how firmware gets into the write-protected
/// region in the first place. The address wraps at the top of memory.
pub fn load_blob(memory: &mut Apple2Memory, data: &[u8], address: u16) {
    for (i, &byte) in data.iter().enumerate() {
        memory.ram_write(address.wrapping_add(i as u16), byte);
    }
}

/// Load a program file into memory starting at `address`.
///
/// Returns the number of bytes loaded.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if it
/// contains no data. The file is read completely before any byte is
/// copied, so a failed load never leaves memory half-written.
pub fn load_file(memory: &mut Apple2Memory, path: &Path, address: u16) -> Result<usize, String> {
    let data =
        fs::read(path).map_err(|e| format!("Cannot read {}: {e}", path.display()))?;

    if data.is_empty() {
        return Err(format!("Nothing was loaded from {}", path.display()));
    }

    load_blob(memory, &data, address);
    Ok(data.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn load_blob_copies_bytes() {
        let mut mem = Apple2Memory::new();
        load_blob(&mut mem, &[0x0A, 0x0B, 0x0C], 0x2000);
        assert_eq!(mem.ram_read(0x2000), 0x0A);
        assert_eq!(mem.ram_read(0x2001), 0x0B);
        assert_eq!(mem.ram_read(0x2002), 0x0C);
    }

    #[test]
    fn load_blob_wraps_at_top_of_memory() {
        let mut mem = Apple2Memory::new();
        load_blob(&mut mem, &[0x01, 0x02], 0xFFFF);
        assert_eq!(mem.ram_read(0xFFFF), 0x01);
        assert_eq!(mem.ram_read(0x0000), 0x02);
    }

    #[test]
    fn load_blob_reaches_firmware_region() {
        let mut mem = Apple2Memory::new();
        load_blob(&mut mem, &[0xEE], 0xD000);
        assert_eq!(mem.ram_read(0xD000), 0xEE);
    }

    #[test]
    fn load_file_round_trip() {
        let path = env::temp_dir().join("emu_apple2_loader_test.bin");
        fs::write(&path, [0x11, 0x22, 0x33]).expect("write test file");

        let mut mem = Apple2Memory::new();
        let loaded = load_file(&mut mem, &path, 0x0800).expect("load should succeed");
        assert_eq!(loaded, 3);
        assert_eq!(mem.ram_read(0x0800), 0x11);
        assert_eq!(mem.ram_read(0x0802), 0x33);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn load_file_missing_file() {
        let mut mem = Apple2Memory::new();
        let result = load_file(
            &mut mem,
            Path::new("/nonexistent/emu_apple2_no_such.rom"),
            0x0800,
        );
        assert!(result.is_err());
    }

    #[test]
    fn load_file_rejects_empty_file() {
        let path = env::temp_dir().join("emu_apple2_loader_empty.bin");
        fs::write(&path, []).expect("write test file");

        let mut mem = Apple2Memory::new();
        let result = load_file(&mut mem, &path, 0x0800);
        assert!(result.is_err());

        fs::remove_file(&path).ok();
    }
}
