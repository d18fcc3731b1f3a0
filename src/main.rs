mod bus;
mod cpu;
mod emulator;
mod harness;
mod memory;
mod save_state;

use std::io::{self, BufRead, Write};

use harness::Outcome;

fn print_menu() {
    println!("\n=== 6502 Emulator Test Suite ===");
    println!("Select instruction set to test:");
    println!("  0. Mem read/write + Stack push/pop + Flag access");
    println!("  1. LDA (all addressing modes)");
    println!("  2. STA (all addressing modes)");
    println!("  3. ADC (flag corner cases)");
    println!("  4. AND");
    println!("  5. ASL");
    println!("  6. Branches (BCC/BCS/BNE/BEQ/BPL/BMI/BVC/BVS)");
    println!("  7. BIT");
    println!("  8. BRK");
    println!("  9. CMP");
    println!("  s. Save-state round trip");
    println!("  a. Run all");
    println!("  q. Quit");
    print!("Choice: ");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_menu();
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break, // EOF
        };

        let mut out = Outcome::default();
        match line.trim() {
            "0" => {
                harness::demo_memory(&mut out);
                harness::demo_stack(&mut out);
                harness::demo_flags(&mut out);
            }
            "1" => harness::demo_lda(&mut out),
            "2" => harness::demo_sta(&mut out),
            "3" => harness::demo_adc(&mut out),
            "4" => harness::demo_and(&mut out),
            "5" => harness::demo_asl(&mut out),
            "6" => harness::demo_branches(&mut out),
            "7" => harness::demo_bit(&mut out),
            "8" => harness::demo_brk(&mut out),
            "9" => harness::demo_cmp(&mut out),
            "s" => harness::demo_save_state(&mut out),
            "a" => harness::run_all(&mut out),
            "q" => {
                println!("Bye.");
                break;
            }
            _ => {
                println!("Invalid choice.");
                continue;
            }
        }
        out.summary();
    }

    Ok(())
}
