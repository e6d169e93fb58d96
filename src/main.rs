#![warn(clippy::all)]

fn main() {
    use eframe::egui::{vec2, ViewportBuilder};

    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(960., 700.))
            .with_min_inner_size(vec2(640.0, 480.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|_cc| Ok(Box::new(lifegrid::App::new()))),
    )
    .unwrap();
}
