mod board;
mod error;
mod gui;
mod stepper;

pub use board::{Board, Cell};
pub use error::GridError;
pub use gui::{App, Config};
pub use stepper::{next_generation, next_generation_into};
