//! Stat input card for the page on screen

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use kdm_core::{CalculatorState, Field, StatValue};

use crate::theme::Theme;

/// Width of a rendered value: "- 99 +" with room for a sign
const VALUE_WIDTH: usize = 7;

/// Renders every input of the current page with the cursor row highlighted
pub struct StatsWidget<'a> {
    state: &'a CalculatorState,
    cursor: usize,
    theme: &'a Theme,
}

impl<'a> StatsWidget<'a> {
    pub fn new(state: &'a CalculatorState, theme: &'a Theme) -> Self {
        Self {
            state,
            cursor: 0,
            theme,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    /// Label column width for an inner area `width` columns wide
    ///
    /// Labels are padded to the longest one on the page, and cut short when
    /// the value column would otherwise fall off the edge.
    fn label_width(&self, width: u16) -> usize {
        let longest = self
            .state
            .page()
            .fields()
            .iter()
            .map(|field| field.label().chars().count())
            .max()
            .unwrap_or(0);
        longest.min(usize::from(width).saturating_sub(VALUE_WIDTH + 1))
    }

    fn field_line(&self, index: usize, field: Field, label_width: usize) -> Line<'static> {
        let value = self.state.roster.get(self.state.active_slot(), field);
        let selected = index == self.cursor;

        let label_style = if selected {
            Style::default()
                .fg(self.theme.cursor_fg)
                .bg(self.theme.cursor_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.text)
        };

        let value_span = match value {
            StatValue::Number(n) => {
                Span::styled(format!("- {n:>3} +"), Style::default().fg(self.theme.text))
            }
            StatValue::Flag(true) => Span::styled("[x]", Style::default().fg(self.theme.good)),
            StatValue::Flag(false) => Span::styled("[ ]", Style::default().fg(self.theme.text_dim)),
        };

        Line::from(vec![
            Span::styled(fit_label(field.label(), label_width), label_style),
            Span::raw(" "),
            value_span,
        ])
    }
}

/// Pad or truncate `label` to exactly `width` columns
fn fit_label(label: &str, width: usize) -> String {
    let mut text: String = label.chars().take(width).collect();
    if text.chars().count() < label.chars().count() && width > 0 {
        text.pop();
        text.push('…');
    }
    format!("{text:<width$}")
}

impl Widget for StatsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let page = self.state.page();
        let block = Block::default()
            .title(Span::styled(
                page.heading(),
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border));

        let label_width = self.label_width(block.inner(area).width);
        let lines: Vec<Line> = page
            .fields()
            .iter()
            .enumerate()
            .map(|(index, field)| self.field_line(index, *field, label_width))
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
