use super::{App, Config};
use eframe::egui::{
    vec2, Button, DragValue, Rect, RichText, Sense, Slider, Stroke, Ui, Vec2,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let text = if self.is_paused { "Start" } else { "Stop" };
            if ui.add(Self::new_button(text)).clicked() {
                self.is_paused = !self.is_paused;
            }

            if ui
                .add_enabled(self.is_paused, Self::new_button("Next step"))
                .clicked()
            {
                self.do_one_step = true;
            }

            if ui.add(Self::new_button("Reset")).clicked() {
                self.reset();
            }
        });

        ui.add_space(Config::WIDGET_GAP);

        ui.add_enabled_ui(self.is_paused, |ui| {
            if ui.add(Self::new_button("Randomize")).clicked() {
                self.randomize();
            }

            ui.horizontal(|ui| {
                ui.label(Self::new_text("Seed: "));
                ui.add(DragValue::new(&mut self.seed).speed(1));
            });

            ui.horizontal(|ui| {
                ui.label(Self::new_text("Fill rate: "));
                ui.add(Slider::new(&mut self.fill_rate, 0.05..=0.95));
            });
        });

        ui.add_space(Config::WIDGET_GAP);

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Steps/s: "));
            ui.add(Slider::new(
                &mut self.steps_per_sec,
                Config::MIN_STEPS_PER_SEC..=Config::MAX_STEPS_PER_SEC,
            ));
        });

        ui.add_space(Config::WIDGET_GAP);

        ui.label(Self::new_text(&format!("Generation: {}", self.generation)));
        ui.label(Self::new_text(&format!(
            "Population: {}",
            self.board.population()
        )));

        ui.add_space(Config::WIDGET_GAP);
        ui.label(Self::new_text(
            "Click a cell to toggle it while stopped.\nSpace: one step, E: start/stop.",
        ));
    }

    fn draw_board(&mut self, ui: &mut Ui) {
        let size = vec2(
            self.board.width() as f32 * Config::CELL_SIZE,
            self.board.height() as f32 * Config::CELL_SIZE,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let origin = response.rect.left_top();

        painter.rect_filled(response.rect, 0., Config::BOARD_BACKGROUND);

        // alive cells are filled squares, dead cells outlined ones
        let stroke = Stroke::new(Config::GRID_LINE_WIDTH, Config::GRID_LINE_COLOR);
        for (row, cells) in self.board.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let min = origin
                    + vec2(
                        col as f32 * Config::CELL_SIZE,
                        row as f32 * Config::CELL_SIZE,
                    );
                let rect = Rect::from_min_size(min, Vec2::splat(Config::CELL_SIZE));
                if cell.is_alive() {
                    painter.rect_filled(rect, 0., Config::ALIVE_COLOR);
                } else {
                    painter.rect_stroke(rect, 0., stroke);
                }
            }
        }

        self.board_rect.replace(response.rect);
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let aw = ui.available_width();
        ui.horizontal(|ui| {
            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_controls(ui);
                });

                // to adjust the bounds
                ui.add_space((Config::CONTROL_PANEL_WIDTH - aw + ui.available_width()).max(0.));
            });

            self.draw_board(ui);
        });
    }
}
