//! Satellite trajectory viewer.
//!
//! Reads per-satellite position files (`output{i}.txt`, comma-delimited
//! x/y/z rows with one header row) from a directory and renders every
//! trajectory as a labeled 3D curve in an interactive window.

mod app;
mod drawing;
mod error;
mod math;
mod trajectory;

use eframe::egui;

use crate::app::App;
use crate::trajectory::load_trajectories;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let dir = match std::env::args().nth(1) {
        Some(arg) => std::path::PathBuf::from(arg),
        None => match std::env::current_dir() {
            Ok(d) => d,
            Err(e) => {
                log::error!("cannot resolve working directory: {e}");
                std::process::exit(1);
            }
        },
    };

    let trajectories = match load_trajectories(&dir) {
        Ok(t) => t,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "loaded {} trajectories from {}",
        trajectories.len(),
        dir.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Trajectory Viz",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(trajectories)))),
    )
}
