//! Survivor tabs and the page navigation bar

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Tabs, Widget};

use kdm_core::{MAX_SURVIVORS, Page, SlotIndex};
use strum::IntoEnumIterator;

use crate::theme::Theme;

/// One tab per roster slot, the active survivor highlighted
pub struct SurvivorTabs<'a> {
    names: &'a [String; MAX_SURVIVORS],
    active: SlotIndex,
    theme: &'a Theme,
}

impl<'a> SurvivorTabs<'a> {
    pub fn new(names: &'a [String; MAX_SURVIVORS], active: SlotIndex, theme: &'a Theme) -> Self {
        Self {
            names,
            active,
            theme,
        }
    }
}

impl Widget for SurvivorTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = self.names.iter().map(|name| Line::from(name.as_str())).collect();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border));

        Tabs::new(titles)
            .block(block)
            .select(self.active.get())
            .style(Style::default().fg(self.theme.tab_inactive))
            .highlight_style(
                Style::default()
                    .fg(self.theme.tab_active)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider("|")
            .render(area, buf);
    }
}

/// Bottom navigation between the hit and wound pages
pub struct PageBar<'a> {
    page: Page,
    theme: &'a Theme,
}

impl<'a> PageBar<'a> {
    pub fn new(page: Page, theme: &'a Theme) -> Self {
        Self { page, theme }
    }
}

impl Widget for PageBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = Page::iter().map(|page| Line::from(page.title())).collect();
        let selected = Page::iter().position(|page| page == self.page).unwrap_or(0);

        Tabs::new(titles)
            .select(selected)
            .style(Style::default().fg(self.theme.tab_inactive))
            .highlight_style(
                Style::default()
                    .fg(self.theme.tab_active)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("|")
            .render(area, buf);
    }
}
