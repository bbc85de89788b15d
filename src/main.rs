mod app;
mod data;
mod render;
mod spectral;
mod ui;
mod utils;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();

    let config = data::config::Config::load_or_default()?;
    let theme = ui::theme::Theme::detect();
    let signals = data::stored::stored_signals()?;

    let mut app = app::state::AppState::new(config, theme, signals);
    app::event_loop::run(&mut app)
}
