//! Top-level Apple II system.
//!
//! Composes the 6502 with the Apple II memory map into a single-step
//! execution primitive. The host loop calls [`Apple2::step`] (or
//! [`Apple2::run_cycles`] for frame pacing); rendering, host keyboard
//! translation and disk handling live outside this crate and consume the
//! machine's memory/register surface:
//!
//! - the renderer reads `ram_read` plus the display-mode flags;
//! - the keyboard feeder calls [`Apple2::press_key`];
//! - the pacing loop budgets cycles via [`Apple2::run_cycles`].
//!
//! Everything is single-threaded and synchronous. A step is atomic from
//! the caller's perspective; stopping is simply not calling `step` again.

use std::io::Write;
use std::path::Path;

use emu_core::Cpu;
use mos_6502::Mos6502;

use crate::config::{Apple2Config, SYSTEM_ROM_BASE, SYSTEM_ROM_SIZE};
use crate::loader;
use crate::memory::Apple2Memory;
use crate::snapshot::Snapshot;

/// Apple II system: CPU plus memory-mapped I/O.
pub struct Apple2 {
    cpu: Mos6502,
    memory: Apple2Memory,
}

impl Apple2 {
    /// Create a new Apple II from the given configuration.
    ///
    /// Installs the system ROM at $D000, then resets the CPU: the
    /// interrupt vectors are read from the top of the ROM and PC starts
    /// at the reset vector.
    ///
    /// # Panics
    ///
    /// Panics if the ROM image is not exactly 12,288 bytes.
    #[must_use]
    pub fn new(config: &Apple2Config) -> Self {
        assert!(
            config.rom.len() == SYSTEM_ROM_SIZE,
            "System ROM must be {SYSTEM_ROM_SIZE} bytes"
        );

        let mut memory = Apple2Memory::new();
        loader::load_blob(&mut memory, &config.rom, SYSTEM_ROM_BASE);

        let mut cpu = Mos6502::new();
        cpu.reset(&mut memory);

        Self { cpu, memory }
    }

    /// Execute one instruction; returns its cycle cost.
    pub fn step(&mut self) -> u32 {
        self.cpu.step(&mut self.memory)
    }

    /// Run whole instructions until at least `budget` cycles have
    /// executed; returns the cycles actually executed (the last
    /// instruction may overshoot the budget).
    ///
    /// Hosts pace frames with this: run a fixed cycle budget per display
    /// refresh.
    pub fn run_cycles(&mut self, budget: u64) -> u64 {
        let mut executed = 0;
        while executed < budget {
            executed += u64::from(self.step());
        }
        executed
    }

    /// Cumulative executed cycles since reset.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cpu.cycles()
    }

    /// Reset the machine: power-on register state, PC re-seeded from the
    /// reset vector. Memory contents are left alone.
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.memory);
    }

    /// Queue a key press: a 7-bit character code latched until the
    /// running program strobes $C010.
    pub fn press_key(&mut self, code: u8) {
        self.memory.set_key(code);
    }

    /// Is a key queued and not yet acknowledged by the program?
    #[must_use]
    pub fn key_pending(&self) -> bool {
        self.memory.key_pending()
    }

    /// Text display mode enabled?
    #[must_use]
    pub fn text_mode(&self) -> bool {
        self.memory.text_mode()
    }

    /// Mixed graphics+text mode enabled?
    #[must_use]
    pub fn mixed_mode(&self) -> bool {
        self.memory.mixed_mode()
    }

    /// Low-resolution graphics selected?
    #[must_use]
    pub fn low_res(&self) -> bool {
        self.memory.low_res()
    }

    /// High-resolution graphics selected?
    #[must_use]
    pub fn high_res(&self) -> bool {
        self.memory.high_res()
    }

    /// Reference to the CPU.
    #[must_use]
    pub fn cpu(&self) -> &Mos6502 {
        &self.cpu
    }

    /// Mutable reference to the CPU.
    pub fn cpu_mut(&mut self) -> &mut Mos6502 {
        &mut self.cpu
    }

    /// Reference to the memory subsystem.
    #[must_use]
    pub fn memory(&self) -> &Apple2Memory {
        &self.memory
    }

    /// Mutable reference to the memory subsystem.
    pub fn memory_mut(&mut self) -> &mut Apple2Memory {
        &mut self.memory
    }

    /// Copy a raw program blob into memory at `address`.
    pub fn load_program(&mut self, data: &[u8], address: u16) {
        loader::load_blob(&mut self.memory, data, address);
    }

    /// Load a program file into memory at `address`; returns the byte
    /// count.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is empty.
    pub fn load_program_file(&mut self, path: &Path, address: u16) -> Result<usize, String> {
        loader::load_file(&mut self.memory, path, address)
    }

    /// Attach a diagnostic trace sink to the CPU (one register-dump line
    /// per step).
    pub fn set_trace(&mut self, sink: Box<dyn Write>) {
        self.cpu.set_trace(sink);
    }

    /// Capture the complete machine state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.cpu, &self.memory)
    }

    /// Restore a previously captured machine state.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        snapshot.restore(&mut self.cpu, &mut self.memory);
    }
}
