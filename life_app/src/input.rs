// input.rs - Turns egui keyboard and pointer state into simulation commands

use eframe::egui;
use egui::{Key, Pos2, Rect, Response};

use life_core::{Cell, Command, Grid};

/// Keyboard shortcuts: Space plays/pauses, C clears, G seeds, N steps once.
pub fn key_commands(ctx: &egui::Context) -> Vec<Command> {
    ctx.input(|i| {
        let bindings = [
            (Key::Space, Command::TogglePlayback),
            (Key::C, Command::Clear),
            (Key::G, Command::Seed),
            (Key::N, Command::Step),
        ];
        bindings
            .into_iter()
            .filter(|&(key, _)| i.key_pressed(key))
            .map(|(_, command)| command)
            .collect()
    })
}

/// Maps clicks and drags over the grid area to toggles and paints.
///
/// A drag paints each cell once as the pointer enters it; `last_painted`
/// carries the previous cell across frames.
#[derive(Default)]
pub struct PointerMapper {
    last_painted: Option<Cell>,
}

impl PointerMapper {
    pub fn new() -> Self {
        Self { last_painted: None }
    }

    pub fn command(&mut self, response: &Response, grid: &Grid, tile_size: f32) -> Option<Command> {
        if !response.dragged() {
            self.last_painted = None;
        }
        let pos = response.interact_pointer_pos()?;
        let cell = cell_under(response.rect, pos, grid, tile_size)?;

        if response.clicked() {
            return Some(Command::Toggle(cell));
        }
        if response.dragged() && self.last_painted != Some(cell) {
            self.last_painted = Some(cell);
            return Some(Command::Paint(cell));
        }
        None
    }
}

fn cell_under(area: Rect, pos: Pos2, grid: &Grid, tile_size: f32) -> Option<Cell> {
    let local = pos - area.min;
    grid.cell_at(local.x, local.y, tile_size)
}
