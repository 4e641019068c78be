//! Pointclick walkthrough simulator
//!
//! Runs a scene's route headlessly with a simulated player and camera,
//! logging every walk and printing a summary.
//!
//! Run with: cargo run -p pointclick_sim -- [scene.toml]
//!       or: RUST_LOG=debug cargo run --bin pointclick-sim

mod scene_file;
mod walkthrough;

use scene_file::SceneFile;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let scene = SceneFile::load();
    scene.print_summary();

    match walkthrough::run(&scene) {
        Ok(report) => report.print(),
        Err(e) => {
            log::error!("Walkthrough failed: {}", e);
            std::process::exit(1);
        }
    }
}
