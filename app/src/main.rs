mod app;
mod config;

use life::LifeGrid;

use crate::{app::App, config::Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = Config::default();
    let grid = LifeGrid::new(config.width, config.height)?;
    log::info!("starting with {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size())
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, grid, config)))),
    )?;
    Ok(())
}
