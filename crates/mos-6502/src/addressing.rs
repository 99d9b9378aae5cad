//! 6502 addressing modes.
//!
//! Each mode consumes its operand bytes from the instruction stream
//! (advancing PC) and resolves to an effective address. The 6502 has:
//!
//! - Implied: no operand (e.g. CLC, RTS); resolves to 0
//! - Immediate: #$nn (the operand address is the operand byte itself)
//! - Zero Page: $nn
//! - Zero Page,X: $nn,X (wraps within page zero)
//! - Zero Page,Y: $nn,Y (wraps within page zero)
//! - Absolute: $nnnn
//! - Absolute,X: $nnnn,X
//! - Absolute,Y: $nnnn,Y
//! - Indirect: ($nnnn) (JMP only; buggy page-boundary behavior)
//! - Indexed Indirect: ($nn,X) (zero-page pointer pre-indexed by X)
//! - Indirect Indexed: ($nn),Y (zero-page pointer post-indexed by Y)
//! - Relative: branch displacement byte, sign-extended by the branch ops

use crate::Mos6502;
use emu_core::Bus;

/// Addressing-mode tag for an opcode table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrMode {
    Implied,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndexedIndirect,
    IndirectIndexed,
    Relative,
}

impl Mos6502 {
    /// Fetch the next byte at PC and advance PC.
    pub(crate) fn fetch(&mut self, bus: &mut impl Bus) -> u8 {
        let value = bus.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Fetch a 16-bit little-endian word at PC.
    pub(crate) fn fetch_word(&mut self, bus: &mut impl Bus) -> u16 {
        let low = self.fetch(bus);
        let high = self.fetch(bus);
        u16::from_le_bytes([low, high])
    }

    /// Read a 16-bit word with the 6502 page-boundary bug (indirect JMP).
    ///
    /// When the pointer sits at $xxFF, the high byte is fetched from
    /// $xx00 — the start of the *same* page — instead of the next page.
    /// Firmware relies on this defect, so it is reproduced bit-for-bit.
    pub(crate) fn read_word_page_bug(&self, bus: &mut impl Bus, address: u16) -> u16 {
        let low = bus.read(address);
        let high_addr = (address & 0xFF00) | (address.wrapping_add(1) & 0x00FF);
        let high = bus.read(high_addr);
        u16::from_le_bytes([low, high])
    }

    /// Resolve the operand address for `mode`, consuming operand bytes.
    ///
    /// For `Relative` the returned value is the raw displacement byte;
    /// branch operations sign-extend it. For `Implied` it is 0 and no
    /// bytes are consumed.
    pub(crate) fn operand_address(&mut self, bus: &mut impl Bus, mode: AddrMode) -> u16 {
        match mode {
            AddrMode::Implied => 0,
            AddrMode::Immediate => {
                let addr = self.regs.pc;
                self.regs.pc = self.regs.pc.wrapping_add(1);
                addr
            }
            AddrMode::ZeroPage => u16::from(self.fetch(bus)),
            AddrMode::ZeroPageX => u16::from(self.fetch(bus).wrapping_add(self.regs.x)),
            AddrMode::ZeroPageY => u16::from(self.fetch(bus).wrapping_add(self.regs.y)),
            AddrMode::Absolute => self.fetch_word(bus),
            AddrMode::AbsoluteX => self.fetch_word(bus).wrapping_add(u16::from(self.regs.x)),
            AddrMode::AbsoluteY => self.fetch_word(bus).wrapping_add(u16::from(self.regs.y)),
            AddrMode::Indirect => {
                let ptr = self.fetch_word(bus);
                self.read_word_page_bug(bus, ptr)
            }
            AddrMode::IndexedIndirect => {
                let ptr = self.fetch(bus).wrapping_add(self.regs.x);
                let low = bus.read(u16::from(ptr));
                let high = bus.read(u16::from(ptr.wrapping_add(1)));
                u16::from_le_bytes([low, high])
            }
            AddrMode::IndirectIndexed => {
                let ptr = self.fetch(bus);
                let low = bus.read(u16::from(ptr));
                let high = bus.read(u16::from(ptr.wrapping_add(1)));
                u16::from_le_bytes([low, high]).wrapping_add(u16::from(self.regs.y))
            }
            AddrMode::Relative => u16::from(self.fetch(bus)),
        }
    }

    /// Push a byte onto the stack.
    pub(crate) fn push(&mut self, bus: &mut impl Bus, value: u8) {
        bus.write(0x0100 | u16::from(self.regs.sp), value);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
    }

    /// Pull a byte from the stack.
    pub(crate) fn pull(&mut self, bus: &mut impl Bus) -> u8 {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        bus.read(0x0100 | u16::from(self.regs.sp))
    }

    /// Push a 16-bit word onto the stack, high byte first.
    pub(crate) fn push_word(&mut self, bus: &mut impl Bus, value: u16) {
        self.push(bus, (value >> 8) as u8);
        self.push(bus, value as u8);
    }

    /// Pull a 16-bit word from the stack, low byte first.
    pub(crate) fn pull_word(&mut self, bus: &mut impl Bus) -> u16 {
        let low = self.pull(bus);
        let high = self.pull(bus);
        u16::from_le_bytes([low, high])
    }
}
