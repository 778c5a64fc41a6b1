//! # Voxel World Demo Entry Point
//!
//! Runs the headless world demo: terrain generation, meshing, a short walk and a
//! break/place round trip, all reported through the logger.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- [config.json]
//! ```

fn main() {
    if let Err(error) = voxel_world::run() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
