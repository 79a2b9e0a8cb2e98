use std::time::Instant;

use eframe::{CreationContext, Frame};
use egui::{
    Color32, ColorImage, Context, Sense, TextureHandle, TextureOptions, Ui, load::SizedTexture,
};
use life::{Controller, LifeGrid, render};

use crate::config::Config;

pub struct App {
    controller: Controller,
    texture: Option<TextureHandle>,
    settings: render::Settings,
}

impl App {
    /// Called once before the first frame.
    pub fn new(_cc: &CreationContext<'_>, grid: LifeGrid, config: Config) -> Self {
        Self {
            controller: Controller::new(grid, config.interval),
            texture: None,
            settings: config.render,
        }
    }

    fn controls(&mut self, ui: &mut Ui, now: Instant) {
        ui.horizontal(|ui| {
            if ui.button("Start").clicked() {
                self.controller.start(now);
            }
            if ui.button("Stop").clicked() {
                self.controller.stop();
            }
            if ui.button("Reset").clicked() {
                self.controller.reset();
            }
            let grid = self.controller.grid();
            ui.label(format!(
                "generation {}, population {}",
                grid.generation(),
                grid.population()
            ));
        });
    }

    fn board(&mut self, ctx: &Context, ui: &mut Ui) {
        let grid = self.controller.grid();
        let pixels = grid.render(self.settings);
        let pixels: Vec<Color32> = pixels.into_iter().map(From::from).collect();
        let image = ColorImage::new(self.settings.image_size(grid), pixels);
        let options = TextureOptions::NEAREST;
        let texture = match self.texture.take() {
            Some(mut t) if t.size() == image.size => {
                t.set(image, options);
                t
            }
            _ => ctx.load_texture("life", image, options),
        };
        let size = texture.size_vec2();
        let sized_texture = SizedTexture::new(&texture, size);
        let response = ui.add(
            egui::Image::new(sized_texture)
                .fit_to_exact_size(size)
                .sense(Sense::click()),
        );
        self.texture = Some(texture);

        if !response.clicked() {
            return;
        }
        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };
        let offset = pos - response.rect.min;
        let Some((x, y)) = self
            .settings
            .cell_at(self.controller.grid(), (offset.x, offset.y))
        else {
            return;
        };
        if let Err(err) = self.controller.toggle(x, y) {
            log::warn!("click at {pos:?} ignored: {err}");
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = Instant::now();
        self.controller.tick(now);
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| self.controls(ui, now));
        egui::CentralPanel::default().show(ctx, |ui| self.board(ctx, ui));
        if let Some(wait) = self.controller.time_to_next_step(now) {
            ctx.request_repaint_after(wait);
        }
    }
}
