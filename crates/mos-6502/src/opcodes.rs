//! The 256-entry opcode dispatch table.
//!
//! Each slot maps an opcode byte to its addressing mode, base cycle cost
//! and operation. Slots without a documented opcode hold [`Op::Ill`],
//! which executes as a one-byte no-op (see the crate root) — corrupted
//! firmware paths must degrade gracefully, never abort emulation.
//!
//! Only base cycle counts are modeled; page-crossing penalty cycles are
//! deliberately not.

use crate::addressing::AddrMode;

/// Operation identifier, dispatched through a single match in `execute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    // Load/store
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,
    // Increment/decrement
    Inc,
    Inx,
    Iny,
    Dec,
    Dex,
    Dey,
    // Stack
    Pha,
    Php,
    Pla,
    Plp,
    // Branches
    Bcc,
    Bcs,
    Beq,
    Bne,
    Bmi,
    Bpl,
    Bvc,
    Bvs,
    // Jumps and returns
    Jmp,
    Jsr,
    Rts,
    Rti,
    // Transfers
    Tax,
    Tay,
    Txa,
    Tya,
    Tsx,
    Txs,
    // Arithmetic and logic
    Adc,
    Sbc,
    And,
    Eor,
    Ora,
    Cmp,
    Cpx,
    Cpy,
    Bit,
    // Shifts and rotates (accumulator and memory forms)
    AslA,
    Asl,
    LsrA,
    Lsr,
    RolA,
    Rol,
    RorA,
    Ror,
    // Flag set/clear
    Sec,
    Sed,
    Sei,
    Clc,
    Cld,
    Cli,
    Clv,
    // Interrupt and no-op
    Brk,
    Nop,
    /// Undocumented opcode: executes as a one-byte no-op.
    Ill,
}

/// One opcode table entry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Opcode {
    pub mode: AddrMode,
    pub cycles: u32,
    pub op: Op,
}

const fn entry(mode: AddrMode, cycles: u32, op: Op) -> Opcode {
    Opcode { mode, cycles, op }
}

/// The dispatch table, indexed by the fetched opcode byte.
pub(crate) const OPCODES: [Opcode; 256] = build_table();

#[allow(clippy::enum_glob_use)]
const fn build_table() -> [Opcode; 256] {
    use AddrMode::*;
    use Op::*;

    // Slots not assigned below stay on the illegal-opcode entry.
    let mut t = [entry(Implied, 2, Ill); 256];

    t[0xA9] = entry(Immediate, 2, Lda); // LDA Immediate
    t[0xA5] = entry(ZeroPage, 3, Lda); // LDA Zero Page
    t[0xB5] = entry(ZeroPageX, 4, Lda); // LDA Zero Page,X
    t[0xAD] = entry(Absolute, 4, Lda); // LDA Absolute
    t[0xBD] = entry(AbsoluteX, 4, Lda); // LDA Absolute,X
    t[0xB9] = entry(AbsoluteY, 4, Lda); // LDA Absolute,Y
    t[0xA1] = entry(IndexedIndirect, 6, Lda); // LDA (Indirect,X)
    t[0xB1] = entry(IndirectIndexed, 5, Lda); // LDA (Indirect),Y

    t[0xA2] = entry(Immediate, 2, Ldx); // LDX Immediate
    t[0xA6] = entry(ZeroPage, 3, Ldx); // LDX Zero Page
    t[0xB6] = entry(ZeroPageY, 4, Ldx); // LDX Zero Page,Y
    t[0xAE] = entry(Absolute, 4, Ldx); // LDX Absolute
    t[0xBE] = entry(AbsoluteY, 4, Ldx); // LDX Absolute,Y

    t[0xA0] = entry(Immediate, 2, Ldy); // LDY Immediate
    t[0xA4] = entry(ZeroPage, 3, Ldy); // LDY Zero Page
    t[0xB4] = entry(ZeroPageX, 4, Ldy); // LDY Zero Page,X
    t[0xAC] = entry(Absolute, 4, Ldy); // LDY Absolute
    t[0xBC] = entry(AbsoluteX, 4, Ldy); // LDY Absolute,X

    t[0x85] = entry(ZeroPage, 3, Sta); // STA Zero Page
    t[0x95] = entry(ZeroPageX, 4, Sta); // STA Zero Page,X
    t[0x8D] = entry(Absolute, 4, Sta); // STA Absolute
    t[0x9D] = entry(AbsoluteX, 5, Sta); // STA Absolute,X
    t[0x99] = entry(AbsoluteY, 5, Sta); // STA Absolute,Y
    t[0x81] = entry(IndexedIndirect, 6, Sta); // STA (Indirect,X)
    t[0x91] = entry(IndirectIndexed, 6, Sta); // STA (Indirect),Y

    t[0x86] = entry(ZeroPage, 3, Stx); // STX Zero Page
    t[0x96] = entry(ZeroPageY, 4, Stx); // STX Zero Page,Y
    t[0x8E] = entry(Absolute, 4, Stx); // STX Absolute

    t[0x84] = entry(ZeroPage, 3, Sty); // STY Zero Page
    t[0x94] = entry(ZeroPageX, 4, Sty); // STY Zero Page,X
    t[0x8C] = entry(Absolute, 4, Sty); // STY Absolute

    t[0x69] = entry(Immediate, 2, Adc); // ADC Immediate
    t[0x65] = entry(ZeroPage, 3, Adc); // ADC Zero Page
    t[0x75] = entry(ZeroPageX, 4, Adc); // ADC Zero Page,X
    t[0x6D] = entry(Absolute, 4, Adc); // ADC Absolute
    t[0x7D] = entry(AbsoluteX, 4, Adc); // ADC Absolute,X
    t[0x79] = entry(AbsoluteY, 4, Adc); // ADC Absolute,Y
    t[0x61] = entry(IndexedIndirect, 6, Adc); // ADC (Indirect,X)
    t[0x71] = entry(IndirectIndexed, 5, Adc); // ADC (Indirect),Y

    t[0xE9] = entry(Immediate, 2, Sbc); // SBC Immediate
    t[0xE5] = entry(ZeroPage, 3, Sbc); // SBC Zero Page
    t[0xF5] = entry(ZeroPageX, 4, Sbc); // SBC Zero Page,X
    t[0xED] = entry(Absolute, 4, Sbc); // SBC Absolute
    t[0xFD] = entry(AbsoluteX, 4, Sbc); // SBC Absolute,X
    t[0xF9] = entry(AbsoluteY, 4, Sbc); // SBC Absolute,Y
    t[0xE1] = entry(IndexedIndirect, 6, Sbc); // SBC (Indirect,X)
    t[0xF1] = entry(IndirectIndexed, 5, Sbc); // SBC (Indirect),Y

    t[0x29] = entry(Immediate, 2, And); // AND Immediate
    t[0x25] = entry(ZeroPage, 3, And); // AND Zero Page
    t[0x35] = entry(ZeroPageX, 4, And); // AND Zero Page,X
    t[0x2D] = entry(Absolute, 4, And); // AND Absolute
    t[0x3D] = entry(AbsoluteX, 4, And); // AND Absolute,X
    t[0x39] = entry(AbsoluteY, 4, And); // AND Absolute,Y
    t[0x21] = entry(IndexedIndirect, 6, And); // AND (Indirect,X)
    t[0x31] = entry(IndirectIndexed, 5, And); // AND (Indirect),Y

    t[0x49] = entry(Immediate, 2, Eor); // EOR Immediate
    t[0x45] = entry(ZeroPage, 3, Eor); // EOR Zero Page
    t[0x55] = entry(ZeroPageX, 4, Eor); // EOR Zero Page,X
    t[0x4D] = entry(Absolute, 4, Eor); // EOR Absolute
    t[0x5D] = entry(AbsoluteX, 4, Eor); // EOR Absolute,X
    t[0x59] = entry(AbsoluteY, 4, Eor); // EOR Absolute,Y
    t[0x41] = entry(IndexedIndirect, 6, Eor); // EOR (Indirect,X)
    t[0x51] = entry(IndirectIndexed, 5, Eor); // EOR (Indirect),Y

    t[0x09] = entry(Immediate, 2, Ora); // ORA Immediate
    t[0x05] = entry(ZeroPage, 3, Ora); // ORA Zero Page
    t[0x15] = entry(ZeroPageX, 4, Ora); // ORA Zero Page,X
    t[0x0D] = entry(Absolute, 4, Ora); // ORA Absolute
    t[0x1D] = entry(AbsoluteX, 4, Ora); // ORA Absolute,X
    t[0x19] = entry(AbsoluteY, 4, Ora); // ORA Absolute,Y
    t[0x01] = entry(IndexedIndirect, 6, Ora); // ORA (Indirect,X)
    t[0x11] = entry(IndirectIndexed, 5, Ora); // ORA (Indirect),Y

    t[0xC9] = entry(Immediate, 2, Cmp); // CMP Immediate
    t[0xC5] = entry(ZeroPage, 3, Cmp); // CMP Zero Page
    t[0xD5] = entry(ZeroPageX, 4, Cmp); // CMP Zero Page,X
    t[0xCD] = entry(Absolute, 4, Cmp); // CMP Absolute
    t[0xDD] = entry(AbsoluteX, 4, Cmp); // CMP Absolute,X
    t[0xD9] = entry(AbsoluteY, 4, Cmp); // CMP Absolute,Y
    t[0xC1] = entry(IndexedIndirect, 6, Cmp); // CMP (Indirect,X)
    t[0xD1] = entry(IndirectIndexed, 5, Cmp); // CMP (Indirect),Y

    t[0xE0] = entry(Immediate, 2, Cpx); // CPX Immediate
    t[0xE4] = entry(ZeroPage, 3, Cpx); // CPX Zero Page
    t[0xEC] = entry(Absolute, 4, Cpx); // CPX Absolute

    t[0xC0] = entry(Immediate, 2, Cpy); // CPY Immediate
    t[0xC4] = entry(ZeroPage, 3, Cpy); // CPY Zero Page
    t[0xCC] = entry(Absolute, 4, Cpy); // CPY Absolute

    t[0x0A] = entry(Implied, 2, AslA); // ASL Accumulator
    t[0x06] = entry(ZeroPage, 5, Asl); // ASL Zero Page
    t[0x16] = entry(ZeroPageX, 6, Asl); // ASL Zero Page,X
    t[0x0E] = entry(Absolute, 6, Asl); // ASL Absolute
    t[0x1E] = entry(AbsoluteX, 7, Asl); // ASL Absolute,X

    t[0x4A] = entry(Implied, 2, LsrA); // LSR Accumulator
    t[0x46] = entry(ZeroPage, 5, Lsr); // LSR Zero Page
    t[0x56] = entry(ZeroPageX, 6, Lsr); // LSR Zero Page,X
    t[0x4E] = entry(Absolute, 6, Lsr); // LSR Absolute
    t[0x5E] = entry(AbsoluteX, 7, Lsr); // LSR Absolute,X

    t[0x2A] = entry(Implied, 2, RolA); // ROL Accumulator
    t[0x26] = entry(ZeroPage, 5, Rol); // ROL Zero Page
    t[0x36] = entry(ZeroPageX, 6, Rol); // ROL Zero Page,X
    t[0x2E] = entry(Absolute, 6, Rol); // ROL Absolute
    t[0x3E] = entry(AbsoluteX, 7, Rol); // ROL Absolute,X

    t[0x6A] = entry(Implied, 2, RorA); // ROR Accumulator
    t[0x66] = entry(ZeroPage, 5, Ror); // ROR Zero Page
    t[0x76] = entry(ZeroPageX, 6, Ror); // ROR Zero Page,X
    t[0x6E] = entry(Absolute, 6, Ror); // ROR Absolute
    t[0x7E] = entry(AbsoluteX, 7, Ror); // ROR Absolute,X

    t[0x90] = entry(Relative, 2, Bcc); // BCC Relative
    t[0xB0] = entry(Relative, 2, Bcs); // BCS Relative
    t[0xF0] = entry(Relative, 2, Beq); // BEQ Relative
    t[0xD0] = entry(Relative, 2, Bne); // BNE Relative
    t[0x30] = entry(Relative, 2, Bmi); // BMI Relative
    t[0x10] = entry(Relative, 2, Bpl); // BPL Relative
    t[0x50] = entry(Relative, 2, Bvc); // BVC Relative
    t[0x70] = entry(Relative, 2, Bvs); // BVS Relative

    t[0x4C] = entry(Absolute, 3, Jmp); // JMP Absolute
    t[0x6C] = entry(Indirect, 5, Jmp); // JMP Indirect
    t[0x20] = entry(Absolute, 6, Jsr); // JSR Absolute
    t[0x60] = entry(Implied, 6, Rts); // RTS Implied
    t[0x40] = entry(Implied, 6, Rti); // RTI Implied

    t[0xE6] = entry(ZeroPage, 5, Inc); // INC Zero Page
    t[0xF6] = entry(ZeroPageX, 6, Inc); // INC Zero Page,X
    t[0xEE] = entry(Absolute, 6, Inc); // INC Absolute
    t[0xFE] = entry(AbsoluteX, 7, Inc); // INC Absolute,X

    t[0xE8] = entry(Implied, 2, Inx); // INX Implied
    t[0xC8] = entry(Implied, 2, Iny); // INY Implied

    t[0xC6] = entry(ZeroPage, 5, Dec); // DEC Zero Page
    t[0xD6] = entry(ZeroPageX, 6, Dec); // DEC Zero Page,X
    t[0xCE] = entry(Absolute, 6, Dec); // DEC Absolute
    t[0xDE] = entry(AbsoluteX, 7, Dec); // DEC Absolute,X

    t[0xCA] = entry(Implied, 2, Dex); // DEX Implied
    t[0x88] = entry(Implied, 2, Dey); // DEY Implied

    t[0x24] = entry(ZeroPage, 3, Bit); // BIT Zero Page
    t[0x2C] = entry(Absolute, 4, Bit); // BIT Absolute

    t[0x38] = entry(Implied, 2, Sec); // SEC Implied
    t[0xF8] = entry(Implied, 2, Sed); // SED Implied
    t[0x78] = entry(Implied, 2, Sei); // SEI Implied
    t[0x18] = entry(Implied, 2, Clc); // CLC Implied
    t[0xD8] = entry(Implied, 2, Cld); // CLD Implied
    t[0x58] = entry(Implied, 2, Cli); // CLI Implied
    t[0xB8] = entry(Implied, 2, Clv); // CLV Implied

    t[0x48] = entry(Implied, 3, Pha); // PHA Implied
    t[0x08] = entry(Implied, 3, Php); // PHP Implied
    t[0x68] = entry(Implied, 4, Pla); // PLA Implied
    t[0x28] = entry(Implied, 4, Plp); // PLP Implied

    t[0xAA] = entry(Implied, 2, Tax); // TAX Implied
    t[0xA8] = entry(Implied, 2, Tay); // TAY Implied
    t[0x8A] = entry(Implied, 2, Txa); // TXA Implied
    t[0x98] = entry(Implied, 2, Tya); // TYA Implied
    t[0xBA] = entry(Implied, 2, Tsx); // TSX Implied
    t[0x9A] = entry(Implied, 2, Txs); // TXS Implied

    t[0x00] = entry(Implied, 7, Brk); // BRK Implied
    t[0xEA] = entry(Implied, 2, Nop); // NOP Implied

    t
}
