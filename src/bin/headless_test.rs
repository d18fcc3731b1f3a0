#[path = "../bus.rs"]
mod bus;
#[path = "../cpu/mod.rs"]
mod cpu;
#[path = "../emulator.rs"]
mod emulator;
#[path = "../harness.rs"]
mod harness;
#[path = "../memory/mod.rs"]
mod memory;
#[path = "../save_state.rs"]
mod save_state;

use std::process;

use crate::harness::Outcome;

// Non-interactive runner: executes every demo group once and exits non-zero
// if any check failed.
fn main() {
    env_logger::init();

    let mut out = Outcome::default();
    harness::run_all(&mut out);
    out.summary();

    if out.failed > 0 {
        process::exit(1);
    }
}
