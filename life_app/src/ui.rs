// ui.rs - egui front end: control bar, grid painter and frame cadence

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use rand::rngs::StdRng;

use life_core::patterns::PATTERNS;
use life_core::{CellStore, Command, Config, Controller, Rule};

use crate::input::{PointerMapper, key_commands};

const BACKGROUND: Color32 = Color32::from_rgb(128, 128, 128);
const LINE_COLOR: Color32 = Color32::BLACK;

pub struct LifeApp<R: Rule> {
    controller: Controller<R, StdRng>,
    pointer: PointerMapper,
    tile_size: f32,
    frame_interval: Duration,
    last_frame: Instant,
    live_color: Color32,
    selected_pattern: usize,
    random_count: usize,
    title: &'static str,
}

impl<R: Rule> LifeApp<R> {
    pub fn new(controller: Controller<R, StdRng>, config: &Config) -> Self {
        let random_count = controller.simulation().grid().width() as usize * 6;
        Self {
            controller,
            pointer: PointerMapper::new(),
            tile_size: config.tile_size as f32,
            frame_interval: Duration::from_secs_f64(1.0 / config.fps.max(1) as f64),
            last_frame: Instant::now(),
            live_color: Color32::YELLOW,
            selected_pattern: 0,
            random_count,
            title: "Paused",
        }
    }

    fn cell_color(&self, shade: f32) -> Color32 {
        let scale = |channel: u8| (channel as f32 * shade.clamp(0.0, 1.0)) as u8;
        Color32::from_rgb(scale(self.live_color.r()), scale(self.live_color.g()), scale(self.live_color.b()))
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let button_text = if self.controller.is_playing() { "⏸ Pause" } else { "▶ Play" };
            if ui.button(button_text).clicked() {
                self.controller.handle(Command::TogglePlayback);
            }

            if ui.button("⏭ Step").clicked() {
                self.controller.handle(Command::Step);
            }

            if ui.button("⏹ Clear").clicked() {
                self.controller.handle(Command::Clear);
            }

            ui.add(egui::DragValue::new(&mut self.random_count).clamp_range(0..=100_000).prefix("cells: "));
            if ui.button("🎲 Random").clicked() {
                self.controller.handle(Command::Randomize(self.random_count));
            }

            ui.separator();

            // Pattern dropdown
            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Apply Pattern").clicked() {
                self.controller.handle(Command::LoadPattern(self.selected_pattern));
            }
        });

        ui.horizontal(|ui| {
            ui.label("Frames per generation:");
            let mut update_freq = self.controller.cadence().update_freq();
            if ui.add(egui::Slider::new(&mut update_freq, 1..=60)).changed() {
                self.controller.cadence_mut().set_update_freq(update_freq);
            }

            ui.separator();
            ui.checkbox(&mut self.controller.auto_pause, "Pause on cycle");

            ui.separator();
            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);

            ui.separator();
            let sim = self.controller.simulation();
            ui.label(format!("Iterations: {}", sim.generation()));
            ui.label(format!("Live cells: {}", sim.population()));
            ui.label(format!("Rule: {}", sim.rule().name()));
        });
    }

    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let grid = *self.controller.simulation().grid();
        let tile = self.tile_size;
        let total_size = Vec2::new(grid.width() as f32 * tile, grid.height() as f32 * tile);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click_and_drag());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, BACKGROUND);

        // Live cells only
        for (cell, value) in self.controller.simulation().cells() {
            let top_left = origin + Vec2::new(cell.col as f32 * tile, cell.row as f32 * tile);
            let rect = Rect::from_min_size(top_left, Vec2::splat(tile));
            painter.rect_filled(rect, 0.0, self.cell_color(<R::Store as CellStore>::shade(value)));
        }

        let stroke = Stroke::new(1.0, LINE_COLOR);
        for row in 0..grid.height() {
            let y = origin.y + row as f32 * tile;
            painter.line_segment([egui::pos2(origin.x, y), egui::pos2(origin.x + total_size.x, y)], stroke);
        }
        for col in 0..grid.width() {
            let x = origin.x + col as f32 * tile;
            painter.line_segment([egui::pos2(x, origin.y), egui::pos2(x, origin.y + total_size.y)], stroke);
        }

        if let Some(command) = self.pointer.command(&response, &grid, tile) {
            self.controller.handle(command);
        }
    }
}

impl<R: Rule> eframe::App for LifeApp<R> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for command in key_commands(ctx) {
            self.controller.handle(command);
        }

        // One cadence frame per elapsed frame interval
        if self.last_frame.elapsed() >= self.frame_interval {
            self.controller.tick();
            self.last_frame = Instant::now();
        }

        let title = if self.controller.is_playing() { "Playing" } else { "Paused" };
        if title != self.title {
            self.title = title;
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.to_owned()));
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.controls(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.draw_grid(ui);
            });

        if self.controller.is_playing() {
            ctx.request_repaint_after(self.frame_interval);
        }
    }
}
