use super::Config;
use crate::{next_generation, Board, Cell};
use eframe::egui::{CentralPanel, Color32, Context, Frame, Key, Margin, Rect};
use std::time::{Duration, Instant};

pub struct App {
    pub(super) board: Board,          // Current generation.
    pub(super) is_paused: bool,       // Whether the timer-driven stepping is stopped.
    pub(super) do_one_step: bool,     // Advance one generation and stay paused.
    pub(super) steps_per_sec: f64,    // Stepping cadence while running.
    pub(super) last_step: Instant,    // When the board was last advanced.
    pub(super) generation: u64,       // Current generation number.
    pub(super) seed: u64,             // Seed used by the Randomize button.
    pub(super) fill_rate: f64,        // Alive probability for Randomize.
    pub(super) board_rect: Option<Rect>, // Part of the window displaying the grid.
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let mut board = Board::empty(Config::BOARD_H, Config::BOARD_W);
        for (row, col) in Config::INITIAL_PATTERN {
            board.set(row, col, Cell::Alive).unwrap();
        }
        Self {
            board,
            is_paused: true,
            do_one_step: false,
            steps_per_sec: Config::DEFAULT_STEPS_PER_SEC,
            last_step: Instant::now(),
            generation: 0,
            seed: Config::DEFAULT_SEED,
            fill_rate: Config::DEFAULT_FILL_RATE,
            board_rect: None,
        }
    }

    pub fn reset(&mut self) {
        self.board = Board::empty(Config::BOARD_H, Config::BOARD_W);
        self.is_paused = true;
        self.do_one_step = false;
        self.generation = 0;
    }

    pub fn randomize(&mut self) {
        log::debug!("randomizing with seed {}", self.seed);
        self.board.randomize(Some(self.seed), self.fill_rate);
        self.generation = 0;
    }

    fn step_interval(&self) -> Duration {
        Duration::from_secs_f64(1. / self.steps_per_sec)
    }

    fn update_board(&mut self) {
        if self.is_paused && !self.do_one_step {
            return;
        }
        if !self.do_one_step && self.last_step.elapsed() < self.step_interval() {
            return;
        }

        self.board = next_generation(&self.board);
        self.generation += 1;
        self.last_step = Instant::now();
        self.do_one_step = false;
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                self.do_one_step = true;
            }
            if input.key_pressed(Key::E) && !input.modifiers.ctrl {
                self.is_paused = !self.is_paused;
            }

            // Manual edits are only accepted while the timer is stopped.
            if self.is_paused && input.pointer.primary_clicked() {
                if let (Some(pos), Some(rect)) = (input.pointer.interact_pos(), self.board_rect) {
                    if rect.contains(pos) {
                        let col = ((pos.x - rect.left()) / Config::CELL_SIZE).floor() as usize;
                        let row = ((pos.y - rect.top()) / Config::CELL_SIZE).floor() as usize;
                        match self.board.toggle(row, col) {
                            Ok(cell) => log::debug!("cell ({row}, {col}) set to {cell:?}"),
                            Err(err) => log::debug!("click ignored: {err}"),
                        }
                    }
                }
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                self.handle_input(ctx);

                self.draw(ui);

                self.update_board();
            });

        if !self.is_paused {
            ctx.request_repaint_after(
                self.step_interval()
                    .saturating_sub(self.last_step.elapsed()),
            );
        }
    }
}
