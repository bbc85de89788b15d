use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    CyclePolicy,
    ToggleCircles,
    Recolor,
    None,
}

pub fn map_key(ev: KeyEvent) -> Action {
    if ev.kind == KeyEventKind::Release {
        return Action::None;
    }

    if ev.modifiers.contains(KeyModifiers::CONTROL) {
        return match ev.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Action::Quit,
            _ => Action::None,
        };
    }

    match ev.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
        KeyCode::Esc => Action::Quit,
        KeyCode::Char('p') | KeyCode::Char('P') => Action::CyclePolicy,
        KeyCode::Char('c') | KeyCode::Char('C') => Action::ToggleCircles,
        KeyCode::Char('s') | KeyCode::Char('S') => Action::Recolor,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn maps_shortcuts() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(map_key(key(KeyCode::Esc)), Action::Quit);
        assert_eq!(map_key(key(KeyCode::Char('P'))), Action::CyclePolicy);
        assert_eq!(map_key(key(KeyCode::Char('c'))), Action::ToggleCircles);
        assert_eq!(map_key(key(KeyCode::Char('s'))), Action::Recolor);
        assert_eq!(map_key(key(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ev), Action::Quit);
    }
}
