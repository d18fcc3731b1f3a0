//! 256-entry opcode table mapping every opcode byte to an instruction
//! descriptor: mnemonic, addressing mode, operation, and base cycle cost.
//!
//! Page-crossing and branch penalties are not part of the base cost; the
//! addressing resolver and branch handler report them to the caller.
//! Opcodes outside the implemented set decode to a single-cycle "???" entry
//! that only consumes budget.

use super::StatusFlags;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    IndexedIndirect,
    IndirectIndexed,
    Relative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Lda,
    Sta,
    Adc,
    And,
    Asl,
    Bit,
    Branch { flag: StatusFlags, branch_when: bool },
    Brk,
    Clear(StatusFlags),
    Cmp,
    Nop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    pub operation: Operation,
    pub base_cycles: u8,
}

const FALLBACK: Instruction = Instruction {
    mnemonic: "???",
    mode: AddressingMode::Implied,
    operation: Operation::Nop,
    base_cycles: 1,
};

const fn instr(
    mnemonic: &'static str,
    mode: AddressingMode,
    operation: Operation,
    base_cycles: u8,
) -> Instruction {
    Instruction {
        mnemonic,
        mode,
        operation,
        base_cycles,
    }
}

pub static OPCODE_TABLE: [Instruction; 256] = {
    use AddressingMode::*;
    use Operation::*;

    const fn branch(flag: StatusFlags, branch_when: bool) -> Operation {
        Operation::Branch { flag, branch_when }
    }

    let mut t = [FALLBACK; 256];

    // LDA
    t[0xA9] = instr("LDA", Immediate, Lda, 2);
    t[0xA5] = instr("LDA", ZeroPage, Lda, 3);
    t[0xB5] = instr("LDA", ZeroPageX, Lda, 4);
    t[0xAD] = instr("LDA", Absolute, Lda, 4);
    t[0xBD] = instr("LDA", AbsoluteX, Lda, 4);
    t[0xB9] = instr("LDA", AbsoluteY, Lda, 4);
    t[0xA1] = instr("LDA", IndexedIndirect, Lda, 6);
    t[0xB1] = instr("LDA", IndirectIndexed, Lda, 5);

    // STA
    t[0x85] = instr("STA", ZeroPage, Sta, 3);
    t[0x95] = instr("STA", ZeroPageX, Sta, 4);
    t[0x8D] = instr("STA", Absolute, Sta, 4);
    t[0x9D] = instr("STA", AbsoluteX, Sta, 5);
    t[0x99] = instr("STA", AbsoluteY, Sta, 5);
    t[0x81] = instr("STA", IndexedIndirect, Sta, 6);
    t[0x91] = instr("STA", IndirectIndexed, Sta, 6);

    // ADC
    t[0x69] = instr("ADC", Immediate, Adc, 2);
    t[0x65] = instr("ADC", ZeroPage, Adc, 3);
    t[0x75] = instr("ADC", ZeroPageX, Adc, 4);
    t[0x6D] = instr("ADC", Absolute, Adc, 4);
    t[0x7D] = instr("ADC", AbsoluteX, Adc, 4);
    t[0x79] = instr("ADC", AbsoluteY, Adc, 4);
    t[0x61] = instr("ADC", IndexedIndirect, Adc, 6);
    t[0x71] = instr("ADC", IndirectIndexed, Adc, 5);

    // AND
    t[0x29] = instr("AND", Immediate, And, 2);
    t[0x25] = instr("AND", ZeroPage, And, 3);
    t[0x35] = instr("AND", ZeroPageX, And, 4);
    t[0x2D] = instr("AND", Absolute, And, 4);
    t[0x3D] = instr("AND", AbsoluteX, And, 4);
    t[0x39] = instr("AND", AbsoluteY, And, 4);
    t[0x21] = instr("AND", IndexedIndirect, And, 6);
    t[0x31] = instr("AND", IndirectIndexed, And, 5);

    // ASL
    t[0x0A] = instr("ASL", Accumulator, Asl, 2);
    t[0x06] = instr("ASL", ZeroPage, Asl, 5);
    t[0x16] = instr("ASL", ZeroPageX, Asl, 6);
    t[0x0E] = instr("ASL", Absolute, Asl, 6);
    t[0x1E] = instr("ASL", AbsoluteX, Asl, 7);

    // Branches
    t[0x90] = instr("BCC", Relative, branch(StatusFlags::CARRY, false), 2);
    t[0xB0] = instr("BCS", Relative, branch(StatusFlags::CARRY, true), 2);
    t[0xD0] = instr("BNE", Relative, branch(StatusFlags::ZERO, false), 2);
    t[0xF0] = instr("BEQ", Relative, branch(StatusFlags::ZERO, true), 2);
    t[0x10] = instr("BPL", Relative, branch(StatusFlags::NEGATIVE, false), 2);
    t[0x30] = instr("BMI", Relative, branch(StatusFlags::NEGATIVE, true), 2);
    t[0x50] = instr("BVC", Relative, branch(StatusFlags::OVERFLOW, false), 2);
    t[0x70] = instr("BVS", Relative, branch(StatusFlags::OVERFLOW, true), 2);

    // BIT
    t[0x24] = instr("BIT", ZeroPage, Bit, 3);
    t[0x2C] = instr("BIT", Absolute, Bit, 4);

    // BRK
    t[0x00] = instr("BRK", Implied, Brk, 7);

    // CMP
    t[0xC9] = instr("CMP", Immediate, Cmp, 2);
    t[0xC5] = instr("CMP", ZeroPage, Cmp, 3);
    t[0xD5] = instr("CMP", ZeroPageX, Cmp, 4);
    t[0xCD] = instr("CMP", Absolute, Cmp, 4);
    t[0xDD] = instr("CMP", AbsoluteX, Cmp, 4);
    t[0xD9] = instr("CMP", AbsoluteY, Cmp, 4);
    t[0xC1] = instr("CMP", IndexedIndirect, Cmp, 6);
    t[0xD1] = instr("CMP", IndirectIndexed, Cmp, 5);

    // Flag clears
    t[0x18] = instr("CLC", Implied, Clear(StatusFlags::CARRY), 2);
    t[0xD8] = instr("CLD", Implied, Clear(StatusFlags::DECIMAL), 2);
    t[0x58] = instr("CLI", Implied, Clear(StatusFlags::INTERRUPT_DISABLE), 2);
    t[0xB8] = instr("CLV", Implied, Clear(StatusFlags::OVERFLOW), 2);

    t
};
