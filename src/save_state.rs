use serde::{Deserialize, Serialize};

/// Snapshot of the whole machine: CPU registers plus the RAM contents.
#[derive(Serialize, Deserialize)]
pub struct SaveState {
    // CPU state
    pub cpu_a: u8,
    pub cpu_x: u8,
    pub cpu_y: u8,
    pub cpu_pc: u16,
    pub cpu_sp: u8,
    pub cpu_status: u8,
    pub cpu_cycles: u64,

    // Main RAM
    pub ram: Vec<u8>,
}

impl SaveState {
    pub fn save_to_file(&self, filename: &str) -> Result<(), Box<dyn std::error::Error>> {
        let data = bincode::serialize(self)?;
        std::fs::write(filename, data)?;
        log::info!("save state written to {}", filename);
        Ok(())
    }

    pub fn load_from_file(filename: &str) -> Result<SaveState, Box<dyn std::error::Error>> {
        let data = std::fs::read(filename)?;
        let state = bincode::deserialize(&data)?;
        log::info!("save state loaded from {}", filename);
        Ok(state)
    }
}
