//! Required roll panel

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use kdm_core::{CRITICAL_NOTE, CalculatorState, HIT_NOTE, Page, WOUND_NOTE};

use crate::theme::Theme;

/// Shows the roll needed on the current page, plus the critical range on
/// the wound page
pub struct ResultWidget<'a> {
    state: &'a CalculatorState,
    theme: &'a Theme,
}

impl<'a> ResultWidget<'a> {
    pub fn new(state: &'a CalculatorState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for ResultWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let muted = Style::default().fg(theme.text_muted);

        let (required, note) = match self.state.page() {
            Page::Hit => (self.state.hit_roll(), HIT_NOTE),
            Page::Wound => (self.state.wound_roll().required_roll, WOUND_NOTE),
        };

        let mut lines = vec![
            Line::styled("Required Roll", Style::default().fg(theme.accent)),
            Line::styled(
                format!("{required}+"),
                Style::default()
                    .fg(theme.result)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            Line::styled(note, muted),
        ];

        if self.state.page() == Page::Wound {
            let critical = self.state.wound_roll().critical;
            let color = if critical.is_attainable() {
                theme.good
            } else {
                theme.bad
            };
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("Critical wound on: ", Style::default().fg(theme.text)),
                Span::styled(
                    critical.to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]));
            if critical.is_attainable() {
                lines.push(Line::styled(CRITICAL_NOTE, muted));
            }
        }

        let block = Block::default()
            .title("Result")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_result));

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
