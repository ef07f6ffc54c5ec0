//! Key binding overlay

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::theme::Theme;

const HELP_TEXT: &str = r#"Survivors:
  Left/h  Previous survivor     Right/l  Next survivor
  1-4     Jump to survivor      r        Reset survivor

Pages:
  Tab/p   Switch To Hit / To Wound

Fields:
  Up/k    Previous field        Down/j   Next field
  +/=     Increase              -/_      Decrease
  Space   Toggle checkbox

Other:
  s       Share results         ?        This help
  Esc     Close / quit          q        Quit

Press ESC or SPACE to close"#;

pub struct HelpWidget<'a> {
    theme: &'a Theme,
}

impl<'a> HelpWidget<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));

        Paragraph::new(HELP_TEXT)
            .block(block)
            .style(Style::default().fg(self.theme.text))
            .render(area, buf);
    }
}
