//! Keyboard Input Handler
//!
//! Maps key presses to control panel actions and card scrolling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use countryviz::logic;
use countryviz::model::VimCommandState;

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Release/repeat events arrive on some platforms
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.model.ui.should_quit = true,
            KeyCode::Char('d') if app.model.ui.vim_mode => app.scroll_cards_by_page(true, true),
            KeyCode::Char('u') if app.model.ui.vim_mode => app.scroll_cards_by_page(false, true),
            _ => {}
        }
        return;
    }

    // Any key other than a second 'g' cancels a pending 'gg'
    let waiting_for_g = app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG;
    app.model.ui.vim_command_state = VimCommandState::None;

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.model.ui.should_quit = true,

        // Focus and activation
        KeyCode::Tab | KeyCode::Right => {
            app.model.ui.focus = logic::ui::next_control(app.model.ui.focus);
        }
        KeyCode::BackTab | KeyCode::Left => {
            app.model.ui.focus = logic::ui::previous_control(app.model.ui.focus);
        }
        KeyCode::Char(' ') | KeyCode::Enter => app.activate_focused_control(),

        // Direct hotkeys
        KeyCode::Char('a') => app.toggle_area_filter(),
        KeyCode::Char('o') => app.toggle_region_filter(),
        KeyCode::Char('s') => app.flip_sort_order(),
        KeyCode::Char('f') => app.apply_filters(),
        KeyCode::Char('r') => app.reset_filters(),

        // Card scrolling
        KeyCode::Down => app.scroll_cards_by(1),
        KeyCode::Up => app.scroll_cards_by(-1),
        KeyCode::PageDown => app.scroll_cards_by_page(true, false),
        KeyCode::PageUp => app.scroll_cards_by_page(false, false),
        KeyCode::Home => app.scroll_to_top(),
        KeyCode::End => app.scroll_to_bottom(),

        KeyCode::Char('j') if app.model.ui.vim_mode => app.scroll_cards_by(1),
        KeyCode::Char('k') if app.model.ui.vim_mode => app.scroll_cards_by(-1),
        KeyCode::Char('G') if app.model.ui.vim_mode => app.scroll_to_bottom(),
        KeyCode::Char('g') if app.model.ui.vim_mode => {
            if waiting_for_g {
                app.scroll_to_top();
            } else {
                app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
            }
        }

        _ => {}
    }
}
