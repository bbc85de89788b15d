use crate::app::state::AppState;
use crate::ui::tui::Tui;
use crate::utils::input::{map_key, Action};
use anyhow::Result;
use crossterm::event::{self, Event};
use std::time::Duration;

const POLL: Duration = Duration::from_millis(250);

pub fn run(app: &mut AppState) -> Result<()> {
    let mut tui = Tui::new()?;
    tui.enter()?;

    let res = drive(&mut tui, app);

    // always restore the terminal, even when drawing failed
    tui.exit()?;
    res
}

fn drive(tui: &mut Tui, app: &mut AppState) -> Result<()> {
    let mut dirty = true;
    while !app.should_quit {
        if dirty {
            tui.draw(app)?;
            dirty = false;
        }

        if !event::poll(POLL)? {
            continue;
        }
        match event::read()? {
            Event::Key(k) => dirty = handle_action(app, map_key(k)),
            Event::Resize(_, _) => dirty = true,
            _ => {}
        }
    }
    Ok(())
}

/// Applies an action; returns whether the frame needs redrawing.
fn handle_action(app: &mut AppState, action: Action) -> bool {
    match action {
        Action::Quit => {
            app.should_quit = true;
            false
        }
        Action::CyclePolicy => {
            app.cycle_policy();
            true
        }
        Action::ToggleCircles => {
            app.toggle_circles();
            true
        }
        Action::Recolor => {
            app.reseed_colors();
            true
        }
        Action::None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::config::Config;
    use crate::data::stored::stored_signals;
    use crate::spectral::policy::PolicyVariant;
    use crate::ui::theme::{ColorCapability, Theme};

    #[test]
    fn actions_update_state() {
        let mut app = AppState::new(
            Config::default(),
            Theme::with_capability(ColorCapability::NoColor),
            stored_signals().unwrap(),
        );
        assert!(handle_action(&mut app, Action::CyclePolicy));
        assert_eq!(app.config.policy, PolicyVariant::Expand);
        assert!(!handle_action(&mut app, Action::None));
        assert!(!handle_action(&mut app, Action::Quit));
        assert!(app.should_quit);
    }
}
