//! Input handling - convert key and mouse events to UI commands

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

/// Everything the calculator screen can be asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// Swipe to the next survivor
    NextSurvivor,
    /// Swipe to the previous survivor
    PreviousSurvivor,
    /// Jump to a survivor by zero-based slot
    SelectSurvivor(usize),
    /// Switch between the hit and wound pages
    TogglePage,
    CursorUp,
    CursorDown,
    /// Step the field under the cursor up
    Increment,
    /// Step the field under the cursor down
    Decrement,
    /// Flip the flag under the cursor
    Toggle,
    /// Reset the survivor on screen
    ResetSurvivor,
    Share,
    Help,
    /// Close an overlay, or quit from the main screen
    Back,
    Quit,
}

/// Convert a key event to a command.
pub fn key_to_command(key: KeyEvent) -> Option<UiCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl key combos
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UiCommand::Quit),
            _ => None,
        };
    }

    match key.code {
        // Swipe between survivors
        KeyCode::Left | KeyCode::Char('h') => Some(UiCommand::PreviousSurvivor),
        KeyCode::Right | KeyCode::Char('l') => Some(UiCommand::NextSurvivor),
        KeyCode::Char(c @ '1'..='4') => Some(UiCommand::SelectSurvivor(c as usize - '1' as usize)),

        // Pages
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('p') => Some(UiCommand::TogglePage),

        // Field cursor
        KeyCode::Up | KeyCode::Char('k') => Some(UiCommand::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiCommand::CursorDown),

        // Steppers
        KeyCode::Char('+') | KeyCode::Char('=') => Some(UiCommand::Increment),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(UiCommand::Decrement),
        KeyCode::Char(' ') | KeyCode::Enter => Some(UiCommand::Toggle),

        KeyCode::Char('r') => Some(UiCommand::ResetSurvivor),
        KeyCode::Char('s') => Some(UiCommand::Share),
        KeyCode::Char('?') => Some(UiCommand::Help),
        KeyCode::Esc => Some(UiCommand::Back),
        KeyCode::Char('q') => Some(UiCommand::Quit),

        _ => None,
    }
}

/// Horizontal trackpad scrolls act as swipes
pub fn mouse_to_command(mouse: MouseEvent) -> Option<UiCommand> {
    match mouse.kind {
        MouseEventKind::ScrollRight => Some(UiCommand::NextSurvivor),
        MouseEventKind::ScrollLeft => Some(UiCommand::PreviousSurvivor),
        _ => None,
    }
}
