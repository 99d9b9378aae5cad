//! Instruction semantics.
//!
//! Every operation reads and writes through the bus and updates exactly
//! the flags documented for it; undocumented flags are never touched
//! (INC/DEC leave Carry and Overflow alone, stores touch nothing).

use crate::Mos6502;
use crate::opcodes::Op;
use emu_core::Bus;

impl Mos6502 {
    /// Execute one decoded operation against its resolved operand address.
    ///
    /// For `Relative`-mode operations `addr` holds the raw displacement
    /// byte; for `Implied` it is 0.
    pub(crate) fn execute(&mut self, bus: &mut impl Bus, op: Op, addr: u16) {
        match op {
            // Load/store
            Op::Lda => {
                let value = bus.read(addr);
                self.regs.a = value;
                self.regs.p.set_zn(value);
            }
            Op::Ldx => {
                let value = bus.read(addr);
                self.regs.x = value;
                self.regs.p.set_zn(value);
            }
            Op::Ldy => {
                let value = bus.read(addr);
                self.regs.y = value;
                self.regs.p.set_zn(value);
            }
            Op::Sta => bus.write(addr, self.regs.a),
            Op::Stx => bus.write(addr, self.regs.x),
            Op::Sty => bus.write(addr, self.regs.y),

            // Increment/decrement
            Op::Inc => {
                let value = bus.read(addr).wrapping_add(1);
                bus.write(addr, value);
                self.regs.p.set_zn(value);
            }
            Op::Dec => {
                let value = bus.read(addr).wrapping_sub(1);
                bus.write(addr, value);
                self.regs.p.set_zn(value);
            }
            Op::Inx => {
                self.regs.x = self.regs.x.wrapping_add(1);
                self.regs.p.set_zn(self.regs.x);
            }
            Op::Iny => {
                self.regs.y = self.regs.y.wrapping_add(1);
                self.regs.p.set_zn(self.regs.y);
            }
            Op::Dex => {
                self.regs.x = self.regs.x.wrapping_sub(1);
                self.regs.p.set_zn(self.regs.x);
            }
            Op::Dey => {
                self.regs.y = self.regs.y.wrapping_sub(1);
                self.regs.p.set_zn(self.regs.y);
            }

            // Stack
            Op::Pha => {
                let a = self.regs.a;
                self.push(bus, a);
            }
            Op::Php => {
                let status = self.regs.p.pushed_byte();
                self.push(bus, status);
            }
            Op::Pla => {
                let value = self.pull(bus);
                self.regs.a = value;
                self.regs.p.set_zn(value);
            }
            Op::Plp => {
                let value = self.pull(bus);
                self.regs.p.set_from_pull(value);
            }

            // Branches (addr holds the displacement byte)
            Op::Bcc => self.branch(!self.regs.p.c, addr),
            Op::Bcs => self.branch(self.regs.p.c, addr),
            Op::Beq => self.branch(self.regs.p.z, addr),
            Op::Bne => self.branch(!self.regs.p.z, addr),
            Op::Bmi => self.branch(self.regs.p.n, addr),
            Op::Bpl => self.branch(!self.regs.p.n, addr),
            Op::Bvc => self.branch(!self.regs.p.v, addr),
            Op::Bvs => self.branch(self.regs.p.v, addr),

            // Jumps and returns
            Op::Jmp => self.regs.pc = addr,
            Op::Jsr => {
                // The 6502 pushes the address of the JSR's last operand
                // byte, not of the next instruction; RTS adds the 1 back.
                let return_addr = self.regs.pc.wrapping_sub(1);
                self.push_word(bus, return_addr);
                self.regs.pc = addr;
            }
            Op::Rts => {
                self.regs.pc = self.pull_word(bus).wrapping_add(1);
            }
            Op::Rti => {
                let status = self.pull(bus);
                self.regs.p.set_from_byte(status);
                // No +1 here: RTI resumes exactly at the pulled address.
                self.regs.pc = self.pull_word(bus);
            }

            // Transfers
            Op::Tax => {
                self.regs.x = self.regs.a;
                self.regs.p.set_zn(self.regs.x);
            }
            Op::Tay => {
                self.regs.y = self.regs.a;
                self.regs.p.set_zn(self.regs.y);
            }
            Op::Txa => {
                self.regs.a = self.regs.x;
                self.regs.p.set_zn(self.regs.a);
            }
            Op::Tya => {
                self.regs.a = self.regs.y;
                self.regs.p.set_zn(self.regs.a);
            }
            Op::Tsx => {
                self.regs.x = self.regs.sp;
                self.regs.p.set_zn(self.regs.x);
            }
            // TXS touches no flags.
            Op::Txs => self.regs.sp = self.regs.x,

            // Arithmetic and logic
            Op::Adc => {
                let value = bus.read(addr);
                self.adc(value);
            }
            Op::Sbc => {
                let value = bus.read(addr);
                self.sbc(value);
            }
            Op::And => {
                self.regs.a &= bus.read(addr);
                self.regs.p.set_zn(self.regs.a);
            }
            Op::Eor => {
                self.regs.a ^= bus.read(addr);
                self.regs.p.set_zn(self.regs.a);
            }
            Op::Ora => {
                self.regs.a |= bus.read(addr);
                self.regs.p.set_zn(self.regs.a);
            }
            Op::Cmp => {
                let value = bus.read(addr);
                self.compare(self.regs.a, value);
            }
            Op::Cpx => {
                let value = bus.read(addr);
                self.compare(self.regs.x, value);
            }
            Op::Cpy => {
                let value = bus.read(addr);
                self.compare(self.regs.y, value);
            }
            Op::Bit => {
                let value = bus.read(addr);
                self.regs.p.z = self.regs.a & value == 0;
                self.regs.p.n = value & 0x80 != 0;
                self.regs.p.v = value & 0x40 != 0;
            }

            // Shifts and rotates
            Op::AslA => self.regs.a = self.asl(self.regs.a),
            Op::Asl => {
                let value = bus.read(addr);
                let result = self.asl(value);
                bus.write(addr, result);
            }
            Op::LsrA => self.regs.a = self.lsr(self.regs.a),
            Op::Lsr => {
                let value = bus.read(addr);
                let result = self.lsr(value);
                bus.write(addr, result);
            }
            Op::RolA => self.regs.a = self.rol(self.regs.a),
            Op::Rol => {
                let value = bus.read(addr);
                let result = self.rol(value);
                bus.write(addr, result);
            }
            Op::RorA => self.regs.a = self.ror(self.regs.a),
            Op::Ror => {
                let value = bus.read(addr);
                let result = self.ror(value);
                bus.write(addr, result);
            }

            // Flag set/clear
            Op::Sec => self.regs.p.c = true,
            Op::Sed => self.regs.p.d = true,
            Op::Sei => self.regs.p.i = true,
            Op::Clc => self.regs.p.c = false,
            Op::Cld => self.regs.p.d = false,
            Op::Cli => self.regs.p.i = false,
            Op::Clv => self.regs.p.v = false,

            Op::Brk => self.brk(bus),
            Op::Nop | Op::Ill => {}
        }
    }

    /// ADC - Add with Carry (binary or BCD depending on the D flag).
    ///
    /// The 9-bit intermediate includes the incoming carry. In decimal
    /// mode the nibble corrections are applied to the intermediate before
    /// the Carry and Overflow flags are derived from it.
    fn adc(&mut self, value: u8) {
        let a = self.regs.a;
        let carry_in = u16::from(self.regs.p.c);
        let mut result = u16::from(a) + u16::from(value) + carry_in;

        if self.regs.p.d {
            if u16::from(a & 0x0F) + u16::from(value & 0x0F) + carry_in > 9 {
                result += 0x06;
            }
            if result > 0x99 {
                result += 0x60;
            }
        }

        self.regs.p.c = result & 0x100 != 0;
        self.regs.p.v = (u16::from(a) ^ result) & (u16::from(value) ^ result) & 0x80 != 0;

        self.regs.a = result as u8;
        self.regs.p.set_zn(self.regs.a);
    }

    /// SBC - Subtract with Carry (borrow is the inverted carry).
    ///
    /// Carry and Overflow come from the binary intermediate; the decimal
    /// corrections only adjust the result byte.
    fn sbc(&mut self, value: u8) {
        let a = self.regs.a;
        let borrow = u16::from(!self.regs.p.c);
        let mut result = u16::from(a)
            .wrapping_sub(u16::from(value))
            .wrapping_sub(borrow);

        self.regs.p.c = result < 0x100;
        self.regs.p.v = (u16::from(a) ^ result) & (u16::from(!value) ^ result) & 0x80 != 0;

        if self.regs.p.d {
            let mut tmp = result;
            if i16::from(a & 0x0F) - (borrow as i16) < i16::from(value & 0x0F) {
                tmp = tmp.wrapping_sub(0x06);
            }
            if tmp > 0x99 {
                tmp = tmp.wrapping_sub(0x60);
            }
            result = tmp;
        }

        self.regs.a = result as u8;
        self.regs.p.set_zn(self.regs.a);
    }

    /// CMP/CPX/CPY - compare without mutating the register.
    fn compare(&mut self, register: u8, value: u8) {
        let result = register.wrapping_sub(value);
        self.regs.p.c = register >= value;
        self.regs.p.set_zn(result);
    }

    /// ASL - Arithmetic Shift Left. Carry receives bit 7.
    fn asl(&mut self, value: u8) -> u8 {
        self.regs.p.c = value & 0x80 != 0;
        let result = value << 1;
        self.regs.p.set_zn(result);
        result
    }

    /// LSR - Logical Shift Right. Carry receives bit 0.
    fn lsr(&mut self, value: u8) -> u8 {
        self.regs.p.c = value & 0x01 != 0;
        let result = value >> 1;
        self.regs.p.set_zn(result);
        result
    }

    /// ROL - Rotate Left through the carry captured before the shift.
    fn rol(&mut self, value: u8) -> u8 {
        let carry_in = u8::from(self.regs.p.c);
        self.regs.p.c = value & 0x80 != 0;
        let result = (value << 1) | carry_in;
        self.regs.p.set_zn(result);
        result
    }

    /// ROR - Rotate Right through the carry captured before the shift.
    fn ror(&mut self, value: u8) -> u8 {
        let carry_in = if self.regs.p.c { 0x80 } else { 0 };
        self.regs.p.c = value & 0x01 != 0;
        let result = (value >> 1) | carry_in;
        self.regs.p.set_zn(result);
        result
    }

    /// Take the branch if `condition` holds, adding the sign-extended
    /// displacement to PC. No page-crossing cycle penalty is modeled.
    fn branch(&mut self, condition: bool, displacement: u16) {
        if condition {
            let offset = (displacement as u8) as i8;
            self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
        }
    }

    /// BRK - software interrupt.
    ///
    /// Pushes PC + 1 (the byte after BRK's padding byte) and the status
    /// byte with Break forced set, sets Interrupt-disable, and jumps
    /// through the break vector cached at reset.
    fn brk(&mut self, bus: &mut impl Bus) {
        self.regs.p.i = true;

        let return_addr = self.regs.pc.wrapping_add(1);
        self.push_word(bus, return_addr);

        let status = self.regs.p.pushed_byte();
        self.push(bus, status);

        self.regs.pc = self.brk_vector;
    }
}
