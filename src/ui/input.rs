use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.reset();
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => app.move_focus(true),
        KeyCode::BackTab | KeyCode::Up => app.move_focus(false),
        KeyCode::Enter => app.submit(),
        KeyCode::Left => app.cycle_type(false),
        KeyCode::Right => app.cycle_type(true),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.type_char(ch)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
