//! Application state and main UI controller

use crossterm::event::Event;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use kdm_core::{CalculatorState, Field, MAX_SURVIVORS, RollReport, SlotIndex, StatValue};

use crate::input::{UiCommand, key_to_command, mouse_to_command};
use crate::theme::Theme;
use crate::widgets::{HelpWidget, PageBar, ResultWidget, StatsWidget, SurvivorTabs};

/// Terminals at least this wide get stats and result side by side
const WIDE_LAYOUT_WIDTH: u16 = 100;

const KEY_HINTS: &str =
    "←/→ survivor  Tab page  ↑/↓ field  +/- adjust  Space toggle  s share  ? help  q quit";
const KEY_HINTS_SHORT: &str = "←/→ survivor  Tab page  ↑/↓ field  +/- adjust  ? help  q quit";

/// UI mode - what the app is currently displaying
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMode {
    /// Calculator screen
    Normal,
    /// Showing key bindings
    Help,
    /// Showing a text summary to copy
    Share { summary: String },
}

/// Application state
pub struct App {
    /// Roster and selection
    state: CalculatorState,

    /// Tab labels, one per slot
    names: [String; MAX_SURVIVORS],

    /// Color theme (adapts to light/dark terminal background)
    theme: Theme,

    /// Current UI mode
    mode: UiMode,

    /// Row of the focused field on the current page
    cursor: usize,

    should_quit: bool,
}

impl App {
    pub fn new(state: CalculatorState, theme: Theme) -> Self {
        Self {
            state,
            names: SlotIndex::ALL.map(|slot| slot.label()),
            theme,
            mode: UiMode::Normal,
            cursor: 0,
            should_quit: false,
        }
    }

    /// Replace the default "Survivor N" tab labels
    pub fn with_names(mut self, names: [String; MAX_SURVIVORS]) -> Self {
        self.names = names;
        self
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn mode(&self) -> &UiMode {
        &self.mode
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Field under the cursor
    pub fn selected_field(&self) -> Field {
        let fields = self.state.page().fields();
        fields[self.cursor.min(fields.len() - 1)]
    }

    /// Label of the survivor on screen
    pub fn active_name(&self) -> &str {
        &self.names[self.state.active_slot().get()]
    }

    /// Snapshot of the survivor on screen, under its tab label
    pub fn report(&self) -> RollReport {
        RollReport::from_state(&self.state, self.active_name())
    }

    /// Handle a terminal event
    pub fn handle_event(&mut self, event: Event) {
        let command = match event {
            Event::Key(key) => key_to_command(key),
            Event::Mouse(mouse) => mouse_to_command(mouse),
            _ => None,
        };
        if let Some(command) = command {
            self.apply(command);
        }
    }

    /// Apply one command in the current mode
    pub fn apply(&mut self, command: UiCommand) {
        match self.mode {
            UiMode::Normal => self.apply_normal(command),
            UiMode::Help | UiMode::Share { .. } => match command {
                UiCommand::Quit => self.should_quit = true,
                UiCommand::Back | UiCommand::Toggle | UiCommand::Help | UiCommand::Share => {
                    self.mode = UiMode::Normal;
                }
                _ => {}
            },
        }
    }

    fn apply_normal(&mut self, command: UiCommand) {
        let state = self.state;
        self.state = match command {
            UiCommand::NextSurvivor => state.next_survivor(),
            UiCommand::PreviousSurvivor => state.previous_survivor(),
            UiCommand::SelectSurvivor(index) => match state.select_survivor(index) {
                Ok(next) => next,
                Err(err) => {
                    tracing::warn!(%err, "survivor selection ignored");
                    state
                }
            },
            UiCommand::TogglePage => state.toggle_page(),
            UiCommand::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
                state
            }
            UiCommand::CursorDown => {
                self.cursor = (self.cursor + 1).min(state.page().fields().len() - 1);
                state
            }
            UiCommand::Increment => self.step_selected(state, 1),
            UiCommand::Decrement => self.step_selected(state, -1),
            UiCommand::Toggle => self.toggle_selected(state),
            UiCommand::ResetSurvivor => state.reset_active_survivor(),
            UiCommand::Share => {
                let summary = self.report().summary();
                tracing::info!(%summary, "sharing results");
                self.mode = UiMode::Share { summary };
                state
            }
            UiCommand::Help => {
                self.mode = UiMode::Help;
                state
            }
            UiCommand::Back | UiCommand::Quit => {
                self.should_quit = true;
                state
            }
        };
    }

    /// Steppers only act on numeric fields; checkboxes use Toggle
    fn step_selected(&self, state: CalculatorState, delta: i32) -> CalculatorState {
        let field = self.selected_field();
        if field.is_flag() {
            state
        } else {
            state.adjust_active_field(field, delta)
        }
    }

    /// Flip the checkbox under the cursor; numeric fields are left alone
    fn toggle_selected(&self, state: CalculatorState) -> CalculatorState {
        let field = self.selected_field();
        let Some(checked) = state.roster.get(state.active_slot(), field).as_flag() else {
            return state;
        };
        match state.update_active_field(field, StatValue::Flag(!checked)) {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(%err, %field, "toggle ignored");
                state
            }
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        // Layout: survivor tabs, calculator body, page bar, key hints
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Survivor tabs
                Constraint::Min(9),    // Stats + result
                Constraint::Length(1), // Page bar
                Constraint::Length(1), // Key hints
            ])
            .split(frame.area());

        // Side by side when wide enough, stats above the result otherwise
        let fields = self.state.page().fields().len() as u16;
        let body = if frame.area().width >= WIDE_LAYOUT_WIDTH {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(chunks[1])
        } else {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(fields + 2), Constraint::Min(0)])
                .split(chunks[1])
        };

        frame.render_widget(
            SurvivorTabs::new(&self.names, self.state.active_slot(), &self.theme),
            chunks[0],
        );
        frame.render_widget(
            StatsWidget::new(&self.state, &self.theme).cursor(self.cursor),
            body[0],
        );
        frame.render_widget(ResultWidget::new(&self.state, &self.theme), body[1]);
        frame.render_widget(PageBar::new(self.state.page(), &self.theme), chunks[2]);

        let hints = if frame.area().width >= WIDE_LAYOUT_WIDTH {
            KEY_HINTS
        } else {
            KEY_HINTS_SHORT
        };
        let hints =
            Paragraph::new(Line::from(hints)).style(Style::default().fg(self.theme.text_dim));
        frame.render_widget(hints, chunks[3]);

        match &self.mode {
            UiMode::Normal => {}
            UiMode::Help => {
                let area = centered_rect(70, 80, frame.area());
                frame.render_widget(HelpWidget::new(&self.theme), area);
            }
            UiMode::Share { summary } => self.render_share(frame, summary),
        }
    }

    /// Render the share overlay
    fn render_share(&self, frame: &mut Frame, summary: &str) {
        let area = centered_rect(70, 30, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title("Share")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));

        let lines = vec![
            Line::styled(summary.to_string(), Style::default().fg(self.theme.text)),
            Line::default(),
            Line::styled("Press ESC to close", Style::default().fg(self.theme.text_dim)),
        ];

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use kdm_core::{MonsterField, Page, SurvivorField};

    fn app() -> App {
        App::new(CalculatorState::default(), Theme::dark())
    }

    #[test]
    fn test_cursor_stays_on_page() {
        let mut app = app();
        app.apply(UiCommand::CursorUp);
        assert_eq!(app.cursor(), 0);
        for _ in 0..10 {
            app.apply(UiCommand::CursorDown);
        }
        assert_eq!(app.cursor(), Page::Hit.fields().len() - 1);
        assert_eq!(app.selected_field(), Field::Monster(MonsterField::KnockedDown));
    }

    #[test]
    fn test_steppers_skip_flags() {
        let mut app = app();
        app.apply(UiCommand::CursorDown);
        app.apply(UiCommand::CursorDown);
        app.apply(UiCommand::CursorDown);
        assert_eq!(app.selected_field(), Field::Survivor(SurvivorField::BlindSpot));
        app.apply(UiCommand::Increment);
        assert!(!app.state().active_survivor().blind_spot);
        app.apply(UiCommand::Toggle);
        assert!(app.state().active_survivor().blind_spot);
    }

    #[test]
    fn test_toggle_ignores_numbers() {
        let mut app = app();
        app.apply(UiCommand::Toggle);
        assert_eq!(app.state().active_survivor().accuracy, 0);
    }

    #[test]
    fn test_share_uses_tab_name() {
        let names = ["Ada".to_string(), "B".to_string(), "C".to_string(), "D".to_string()];
        let mut app = app().with_names(names);
        app.apply(UiCommand::Share);
        let UiMode::Share { summary } = app.mode() else {
            panic!("expected share overlay");
        };
        assert!(summary.starts_with("Ada: hits on 2+"));
    }

    #[test]
    fn test_overlay_swallows_commands() {
        let mut app = app();
        app.apply(UiCommand::Help);
        assert_eq!(*app.mode(), UiMode::Help);
        app.apply(UiCommand::Increment);
        assert_eq!(app.state().active_survivor().accuracy, 0);
        app.apply(UiCommand::Back);
        assert_eq!(*app.mode(), UiMode::Normal);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_back_on_main_screen_quits() {
        let mut app = app();
        app.apply(UiCommand::Back);
        assert!(app.should_quit());
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(50, 50, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 25);
        assert_eq!(inner.x, 25);
    }
}
