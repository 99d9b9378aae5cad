//! MOS 6502 CPU emulator.
//!
//! An instruction-stepped NMOS 6502 core: each [`Cpu::step`] executes one
//! complete fetch-decode-execute cycle and returns the instruction's base
//! cycle cost. Dispatch is table-driven — a flat 256-entry table maps the
//! opcode byte to (addressing mode, base cycles, operation).
//!
//! Faithfully reproduced hardware behavior:
//!
//! - The indirect-JMP page-boundary bug (a pointer at $xxFF fetches its
//!   high byte from $xx00).
//! - Binary-coded-decimal ADC/SBC when the D flag is set.
//! - Silent 8-bit stack pointer wraparound.
//!
//! Not modeled: page-crossing penalty cycles, cycle-exact bus traffic,
//! and asynchronous IRQ/NMI delivery — interrupts happen only through the
//! synchronous BRK instruction. Opcodes the data sheet leaves undefined
//! execute as one-byte no-ops instead of their undocumented silicon
//! behavior; attach a trace sink to observe them.

use std::io::Write;

use emu_core::{Bus, Cpu};

mod addressing;
mod execute;
pub mod flags;
mod opcodes;
mod registers;

pub use addressing::AddrMode;
pub use flags::Status;
pub use registers::Registers;

use opcodes::{OPCODES, Op};

/// NMI vector location ($FFFA-$FFFB, little-endian).
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Reset vector location ($FFFC-$FFFD).
pub const RESET_VECTOR: u16 = 0xFFFC;
/// Break (BRK) vector location ($FFFE-$FFFF).
pub const BRK_VECTOR: u16 = 0xFFFE;

/// The MOS 6502 CPU state.
pub struct Mos6502 {
    /// Registers and flags, public for observation by hosts and tests.
    /// The contract is read-mostly: only the CPU's own operations mutate
    /// them during execution.
    pub regs: Registers,

    /// Interrupt vectors cached by [`Cpu::reset`]. BRK jumps through the
    /// cached break vector; the firmware region holding the vectors is
    /// write-protected, so the cache cannot go stale.
    nmi_vector: u16,
    reset_vector: u16,
    pub(crate) brk_vector: u16,

    /// Cumulative executed cycles, for host frame pacing.
    cycles: u64,

    /// Optional diagnostic sink. When attached, each step logs the
    /// register state before executing. Emulation never depends on it.
    trace: Option<Box<dyn Write>>,
}

impl Mos6502 {
    #[must_use]
    pub fn new() -> Self {
        Self {
            regs: Registers::new(),
            nmi_vector: 0,
            reset_vector: 0,
            brk_vector: 0,
            cycles: 0,
            trace: None,
        }
    }

    /// Cumulative cycle count since reset.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Overwrite the cycle counter (snapshot restore).
    pub fn set_cycles(&mut self, cycles: u64) {
        self.cycles = cycles;
    }

    /// The NMI vector cached at reset.
    #[must_use]
    pub fn nmi_vector(&self) -> u16 {
        self.nmi_vector
    }

    /// The reset vector cached at reset.
    #[must_use]
    pub fn reset_vector(&self) -> u16 {
        self.reset_vector
    }

    /// The break vector cached at reset; BRK jumps through this.
    #[must_use]
    pub fn brk_vector(&self) -> u16 {
        self.brk_vector
    }

    /// Re-read the three interrupt vectors from the bus.
    ///
    /// Called by [`Cpu::reset`]; also needed after restoring a snapshot,
    /// where memory changes under the CPU without a reset.
    pub fn reload_vectors<B: Bus>(&mut self, bus: &mut B) {
        self.nmi_vector = bus.read_word(NMI_VECTOR);
        self.reset_vector = bus.read_word(RESET_VECTOR);
        self.brk_vector = bus.read_word(BRK_VECTOR);
    }

    /// Attach a diagnostic sink. Each subsequent step writes one
    /// register-dump line before executing; illegal opcodes are logged
    /// too. Write failures are ignored — diagnostics must not perturb
    /// emulation.
    pub fn set_trace(&mut self, sink: Box<dyn Write>) {
        self.trace = Some(sink);
    }

    /// Detach the diagnostic sink.
    pub fn clear_trace(&mut self) {
        self.trace = None;
    }

    fn trace_registers(&mut self) {
        if let Some(sink) = self.trace.as_mut() {
            let _ = writeln!(
                sink,
                "A: {:02X}, X: {:02X}, Y: {:02X}, PC: {:04X}, SP: {:02X}, SR: {:02X}",
                self.regs.a,
                self.regs.x,
                self.regs.y,
                self.regs.pc,
                self.regs.sp,
                self.regs.p.pushed_byte(),
            );
        }
    }

    fn trace_illegal(&mut self, opcode: u8, at: u16) {
        if let Some(sink) = self.trace.as_mut() {
            let _ = writeln!(sink, "Illegal opcode {opcode:02X} at {at:04X} (executed as NOP)");
        }
    }
}

impl Default for Mos6502 {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu for Mos6502 {
    type Registers = Registers;

    fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        if self.trace.is_some() {
            self.trace_registers();
        }

        let opcode_pc = self.regs.pc;
        let opcode_byte = bus.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);

        let opcode = OPCODES[usize::from(opcode_byte)];
        let addr = self.operand_address(bus, opcode.mode);

        if opcode.op == Op::Ill {
            self.trace_illegal(opcode_byte, opcode_pc);
        }
        self.execute(bus, opcode.op, addr);

        self.cycles += u64::from(opcode.cycles);
        opcode.cycles
    }

    fn reset<B: Bus>(&mut self, bus: &mut B) {
        self.reload_vectors(bus);
        self.regs = Registers::new();
        self.regs.pc = self.reset_vector;
        self.cycles = 0;
    }

    fn pc(&self) -> u16 {
        self.regs.pc
    }

    fn registers(&self) -> Registers {
        self.regs
    }
}
