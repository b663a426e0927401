//! Key event handlers for each screen

use crate::input_key::InputKey;
use crate::message::Message;
use crate::search::FormField;
use crate::seat_view::CursorMove;
use crate::state::{AppState, Screen};
use skybook_core::{SeatFilter, PRICE_CEILING, PRICE_FLOOR};

/// Convert key events to messages based on current screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C quits from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.screen {
        Screen::Search => handle_key_search(state, key),
        Screen::SeatMap => handle_key_seat_map(key),
    }
}

/// Handle key events on the search screen
fn handle_key_search(state: &AppState, key: InputKey) -> Option<Message> {
    let focus = state.search.focus;

    match key {
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrevious),
        InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('r') => Some(Message::ClearFilters),

        InputKey::Enter if focus == FormField::Results => Some(Message::OpenSelectedFlight),
        InputKey::Enter => Some(Message::SubmitSearch),

        // Text fields
        InputKey::Char(c) if focus.is_text() => Some(Message::InputChar(c)),
        InputKey::Backspace if focus.is_text() => Some(Message::InputBackspace),

        // Price slider
        InputKey::Left if focus == FormField::MaxPrice => Some(Message::AdjustMaxPrice {
            delta: -i64::from(state.settings.search.price_step),
        }),
        InputKey::Right if focus == FormField::MaxPrice => Some(Message::AdjustMaxPrice {
            delta: i64::from(state.settings.search.price_step),
        }),
        InputKey::Home if focus == FormField::MaxPrice => {
            Some(Message::SetMaxPrice(i64::from(PRICE_FLOOR)))
        }
        InputKey::End if focus == FormField::MaxPrice => {
            Some(Message::SetMaxPrice(i64::from(PRICE_CEILING)))
        }

        // Result list
        InputKey::Down if focus == FormField::Results => Some(Message::SelectNextFlight),
        InputKey::Up if focus == FormField::Results => Some(Message::SelectPreviousFlight),

        _ => None,
    }
}

/// Handle key events on the seat map screen
fn handle_key_seat_map(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseSeatMap),

        InputKey::Up => Some(Message::MoveSeatCursor(CursorMove::Up)),
        InputKey::Down => Some(Message::MoveSeatCursor(CursorMove::Down)),
        InputKey::Left => Some(Message::MoveSeatCursor(CursorMove::Left)),
        InputKey::Right => Some(Message::MoveSeatCursor(CursorMove::Right)),

        InputKey::Char(' ') | InputKey::Enter => Some(Message::ToggleSeatAtCursor),

        InputKey::Char('w') => Some(Message::ToggleFilter(SeatFilter::Window)),
        InputKey::Char('l') => Some(Message::ToggleFilter(SeatFilter::ExtraLegroom)),
        InputKey::Char('e') => Some(Message::ToggleFilter(SeatFilter::NearExit)),

        InputKey::Char('b') => Some(Message::BookNow),

        _ => None,
    }
}
