//! Canned demo programs driven through the public emulator boundary, with a
//! pass/fail tally. The real coverage lives in the unit tests; these groups
//! exist so the interactive menu and the headless runner can show the engine
//! executing actual instruction streams.

use crate::cpu::{StatusFlags, IRQ_VECTOR};
use crate::emulator::Emulator;
use crate::save_state::SaveState;

#[derive(Default)]
pub struct Outcome {
    pub passed: u32,
    pub failed: u32,
}

impl Outcome {
    pub fn check(&mut self, desc: &str, condition: bool) {
        if condition {
            println!("  [PASS] {}", desc);
            self.passed += 1;
        } else {
            println!("  [FAIL] {}", desc);
            self.failed += 1;
        }
    }

    pub fn summary(&self) {
        println!("\n=== SUMMARY ===");
        println!("Passed: {}", self.passed);
        println!("Failed: {}", self.failed);
        if self.failed == 0 {
            println!("All checks passed!");
        }
    }
}

fn parse_u16_hex_or_dec(s: &str) -> Option<u16> {
    let s = s.trim();
    if let Some(stripped) = s.strip_prefix("0x") {
        u16::from_str_radix(stripped, 16).ok()
    } else {
        s.parse().ok()
    }
}

/// Load address for the demo programs; override with PRG_START (hex or
/// decimal) in the environment.
pub fn prg_start() -> u16 {
    std::env::var("PRG_START")
        .ok()
        .and_then(|s| parse_u16_hex_or_dec(&s))
        .unwrap_or(0x0200)
}

fn setup() -> Emulator {
    let mut emu = Emulator::new();
    emu.reset();
    emu.cpu.pc = prg_start();
    emu
}

fn print_cpu(emu: &Emulator) {
    let cpu = &emu.cpu;
    println!(
        "  Regs: A=0x{:02X}  X=0x{:02X}  Y=0x{:02X}  SP=0x{:02X}  PC=0x{:04X}  cycles={}",
        cpu.a, cpu.x, cpu.y, cpu.sp, cpu.pc, cpu.cycles
    );
    let bits = cpu.status.bits();
    let names = ['N', 'V', 'U', 'B', 'D', 'I', 'Z', 'C'];
    print!("  Flags: ");
    for (i, name) in names.iter().enumerate() {
        print!("{}={} ", name, (bits >> (7 - i)) & 1);
    }
    println!("[0b{:08b}]", bits);
}

pub fn demo_memory(out: &mut Outcome) {
    println!("\n========== MEMORY ==========");
    let mut emu = setup();

    emu.write(0x0400, 0xAB);
    out.check("read back 0xAB from 0x0400", emu.read(0x0400) == 0xAB);

    emu.write(0x0400, 0xBB);
    out.check("overwrite to 0xBB", emu.read(0x0400) == 0xBB);

    emu.write(0xFFF0, 0x7E);
    out.check("high address 0xFFF0", emu.read(0xFFF0) == 0x7E);

    emu.reset();
    out.check("reset clears memory", emu.read(0x0400) == 0x00 && emu.read(0xFFF0) == 0x00);
}

pub fn demo_stack(out: &mut Outcome) {
    println!("\n========== STACK ==========");
    let mut emu = setup();

    let sp_before = emu.cpu.sp;
    emu.cpu.push(&mut emu.bus, 0x11);
    emu.cpu.push(&mut emu.bus, 0x22);
    emu.cpu.push(&mut emu.bus, 0x33);
    println!("  SP after 3 pushes = 0x{:02X}", emu.cpu.sp);

    let p3 = emu.cpu.pop(&mut emu.bus);
    let p2 = emu.cpu.pop(&mut emu.bus);
    let p1 = emu.cpu.pop(&mut emu.bus);
    out.check("pop order is 0x33, 0x22, 0x11", (p3, p2, p1) == (0x33, 0x22, 0x11));
    out.check("SP restored", emu.cpu.sp == sp_before);
    out.check("stack lives in page 1", emu.read(0x01FF) == 0x11);
}

pub fn demo_flags(out: &mut Outcome) {
    println!("\n========== FLAG ACCESS ==========");
    let mut emu = setup();

    emu.set_flag(StatusFlags::CARRY, true);
    out.check("carry set and readable", emu.flag(StatusFlags::CARRY));

    emu.toggle_flag(StatusFlags::CARRY);
    out.check("carry toggled off", !emu.flag(StatusFlags::CARRY));
    out.check("unused bit forced to 1", emu.flag(StatusFlags::UNUSED));
}

pub fn demo_lda(out: &mut Outcome) {
    println!("\n========== LDA ==========");
    let start = prg_start();

    // LDA #$42
    let mut emu = setup();
    emu.load_program(&[0xA9, 0x42], start);
    let cycles = emu.step();
    print_cpu(&emu);
    out.check("LDA # loads 0x42", emu.cpu.a == 0x42);
    out.check("LDA # costs 2 cycles", cycles == 2);

    // LDA $FF,X with X=0x02 wraps to 0x0001
    let mut emu = setup();
    emu.cpu.x = 0x02;
    emu.write(0x0001, 0xEF);
    emu.load_program(&[0xB5, 0xFF], start);
    emu.step();
    out.check("LDA zp,X wraps within page zero", emu.cpu.a == 0xEF);

    // LDA $03FF,X with X=0x01 crosses into page 4
    let mut emu = setup();
    emu.cpu.x = 0x01;
    emu.write(0x0400, 0x99);
    emu.load_program(&[0xBD, 0xFF, 0x03], start);
    let cycles = emu.step();
    out.check("LDA abs,X page cross costs 5 cycles", cycles == 5 && emu.cpu.a == 0x99);
}

pub fn demo_sta(out: &mut Outcome) {
    println!("\n========== STA ==========");
    let start = prg_start();

    // LDA #$42; STA $10
    let mut emu = setup();
    emu.load_program(&[0xA9, 0x42, 0x85, 0x10], start);
    emu.step();
    emu.step();
    print_cpu(&emu);
    out.check("STA zp stores the accumulator", emu.read(0x0010) == 0x42);

    // STA ($30),Y
    let mut emu = setup();
    emu.cpu.a = 0x24;
    emu.cpu.y = 0x02;
    emu.write(0x0030, 0x00);
    emu.write(0x0031, 0x03);
    emu.load_program(&[0x91, 0x30], start);
    let cycles = emu.step();
    out.check("STA (zp),Y stores through the pointer", emu.read(0x0302) == 0x24);
    out.check("STA (zp),Y costs 6 cycles", cycles == 6);
}

pub fn demo_adc(out: &mut Outcome) {
    println!("\n========== ADC ==========");
    let start = prg_start();

    // 0xFF + 0x01 = 0x100: zero result, carry out
    let mut emu = setup();
    emu.cpu.a = 0xFF;
    emu.set_flag(StatusFlags::CARRY, false);
    emu.load_program(&[0x69, 0x01], start);
    emu.step();
    print_cpu(&emu);
    out.check("0xFF + 0x01 wraps to 0x00", emu.cpu.a == 0x00);
    out.check("carry out", emu.flag(StatusFlags::CARRY));
    out.check("zero flag", emu.flag(StatusFlags::ZERO));

    // 0x7F + 0x01: signed overflow
    let mut emu = setup();
    emu.cpu.a = 0x7F;
    emu.set_flag(StatusFlags::CARRY, false);
    emu.load_program(&[0x69, 0x01], start);
    emu.step();
    out.check("0x7F + 0x01 = 0x80 with overflow", emu.cpu.a == 0x80 && emu.flag(StatusFlags::OVERFLOW));

    // carry-in chains a previous add
    let mut emu = setup();
    emu.cpu.a = 0x10;
    emu.set_flag(StatusFlags::CARRY, true);
    emu.load_program(&[0x69, 0x10], start);
    emu.step();
    out.check("carry-in adds one", emu.cpu.a == 0x21);
}

pub fn demo_and(out: &mut Outcome) {
    println!("\n========== AND ==========");
    let start = prg_start();

    let mut emu = setup();
    emu.cpu.a = 0xFF;
    emu.load_program(&[0x29, 0x0F], start);
    emu.step();
    print_cpu(&emu);
    out.check("0xFF & 0x0F = 0x0F", emu.cpu.a == 0x0F);

    let mut emu = setup();
    emu.cpu.a = 0xAA;
    emu.load_program(&[0x29, 0x55], start);
    emu.step();
    out.check("disjoint masks raise Z", emu.cpu.a == 0x00 && emu.flag(StatusFlags::ZERO));
}

pub fn demo_asl(out: &mut Outcome) {
    println!("\n========== ASL ==========");
    let start = prg_start();

    let mut emu = setup();
    emu.cpu.a = 0x80;
    emu.load_program(&[0x0A], start);
    emu.step();
    print_cpu(&emu);
    out.check("0x80 << 1 = 0x00 with carry out", emu.cpu.a == 0x00 && emu.flag(StatusFlags::CARRY));

    // ASL $10,X reads and writes the indexed address
    let mut emu = setup();
    emu.cpu.x = 0x04;
    emu.write(0x0014, 0x08);
    emu.load_program(&[0x16, 0x10], start);
    let cycles = emu.step();
    out.check("ASL zp,X shifts the indexed cell", emu.read(0x0014) == 0x10);
    out.check("ASL zp,X costs 6 cycles", cycles == 6);
}

pub fn demo_branches(out: &mut Outcome) {
    println!("\n========== BRANCHES ==========");
    let start = prg_start();

    // BCC not taken
    let mut emu = setup();
    emu.set_flag(StatusFlags::CARRY, true);
    emu.load_program(&[0x90, 0x10], start);
    let cycles = emu.step();
    out.check("BCC not taken, PC unchanged", emu.cpu.pc == start + 2 && cycles == 2);

    // BCC taken forward
    let mut emu = setup();
    emu.set_flag(StatusFlags::CARRY, false);
    emu.load_program(&[0x90, 0x10], start);
    let cycles = emu.step();
    out.check("BCC taken costs 3 cycles", emu.cpu.pc == start + 2 + 0x10 && cycles == 3);

    // BEQ across a page boundary
    let mut emu = setup();
    emu.cpu.pc = 0x02FD;
    emu.set_flag(StatusFlags::ZERO, true);
    emu.load_program(&[0xF0, 0x01], 0x02FD);
    let cycles = emu.step();
    out.check("BEQ page cross costs 4 cycles", emu.cpu.pc == 0x0300 && cycles == 4);

    // BPL backward
    let mut emu = setup();
    emu.set_flag(StatusFlags::NEGATIVE, false);
    emu.load_program(&[0x10, 0xF0], start);
    emu.step();
    print_cpu(&emu);
    out.check("BPL -16 lands before the program", emu.cpu.pc == start + 2 - 0x10);
}

pub fn demo_bit(out: &mut Outcome) {
    println!("\n========== BIT ==========");
    let start = prg_start();

    let mut emu = setup();
    emu.cpu.a = 0x0F;
    emu.write(0x0010, 0xF0);
    emu.load_program(&[0x24, 0x10], start);
    emu.step();
    print_cpu(&emu);
    out.check("A untouched", emu.cpu.a == 0x0F);
    out.check("Z from A & mem", emu.flag(StatusFlags::ZERO));
    out.check("N/V from memory bits 7/6", emu.flag(StatusFlags::NEGATIVE) && emu.flag(StatusFlags::OVERFLOW));
}

pub fn demo_brk(out: &mut Outcome) {
    println!("\n========== BRK ==========");
    let start = prg_start();

    let mut emu = setup();
    emu.write(IRQ_VECTOR, 0x34);
    emu.write(IRQ_VECTOR.wrapping_add(1), 0x12);
    emu.load_program(&[0x00], start);

    let sp_before = emu.cpu.sp;
    let remaining = emu.execute(7);
    print_cpu(&emu);

    out.check("PC follows the IRQ vector", emu.cpu.pc == 0x1234);
    out.check("three bytes pushed", emu.cpu.sp == sp_before.wrapping_sub(3));
    let pushed_pc = ((emu.read(0x01FF) as u16) << 8) | emu.read(0x01FE) as u16;
    out.check("pushed return address is PC+2", pushed_pc == start + 3);
    out.check(
        "pushed flags carry B, live B cleared",
        emu.read(0x01FD) & 0x10 != 0 && !emu.flag(StatusFlags::BREAK),
    );
    out.check("interrupt disable set", emu.flag(StatusFlags::INTERRUPT_DISABLE));
    out.check("budget consumed exactly", remaining == 0);
}

pub fn demo_cmp(out: &mut Outcome) {
    println!("\n========== CMP ==========");
    let start = prg_start();

    let mut emu = setup();
    emu.cpu.a = 0x50;
    emu.load_program(&[0xC9, 0x30], start);
    emu.step();
    print_cpu(&emu);
    out.check("A > operand sets C", emu.flag(StatusFlags::CARRY) && !emu.flag(StatusFlags::ZERO));

    let mut emu = setup();
    emu.cpu.a = 0x42;
    emu.load_program(&[0xC9, 0x42], start);
    emu.step();
    out.check("A == operand sets C and Z", emu.flag(StatusFlags::CARRY) && emu.flag(StatusFlags::ZERO));

    let mut emu = setup();
    emu.cpu.a = 0x20;
    emu.load_program(&[0xC9, 0x40], start);
    emu.step();
    out.check("A < operand clears C, sets N", !emu.flag(StatusFlags::CARRY) && emu.flag(StatusFlags::NEGATIVE));
}

pub fn demo_save_state(out: &mut Outcome) {
    println!("\n========== SAVE STATE ==========");
    let start = prg_start();

    let mut emu = setup();
    emu.load_program(&[0xA9, 0x5A, 0x85, 0x40], start); // LDA #$5A; STA $40
    emu.step();
    emu.step();

    let state = emu.save_state();
    let path = std::env::temp_dir().join("emu6502-demo.state");
    let path = path.to_string_lossy().into_owned();

    match state
        .save_to_file(&path)
        .and_then(|_| SaveState::load_from_file(&path))
    {
        Ok(loaded) => {
            let mut restored = Emulator::new();
            restored.restore_state(&loaded);
            out.check("accumulator restored", restored.cpu.a == 0x5A);
            out.check("RAM restored", restored.read(0x0040) == 0x5A);
            out.check("PC restored", restored.cpu.pc == emu.cpu.pc);
        }
        Err(err) => {
            println!("  save state round trip failed: {}", err);
            out.check("save state round trip", false);
        }
    }
}

pub fn run_all(out: &mut Outcome) {
    demo_memory(out);
    demo_stack(out);
    demo_flags(out);
    demo_lda(out);
    demo_sta(out);
    demo_adc(out);
    demo_and(out);
    demo_asl(out);
    demo_branches(out);
    demo_bit(out);
    demo_brk(out);
    demo_cmp(out);
    demo_save_state(out);
}
