use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::PageViewModel;

/// Details of the slot under the cursor.
pub struct DetailView<'a> {
    page: &'a PageViewModel,
    cursor: usize,
}

impl<'a> DetailView<'a> {
    pub fn new(page: &'a PageViewModel, cursor: usize) -> Self {
        Self { page, cursor }
    }
}

impl<'a> Widget for DetailView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" Slot {} ", self.cursor))
            .borders(Borders::ALL);

        let lines = match self.page.slot(self.cursor) {
            Some(slot) => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        slot.label.clone(),
                        Style::default().fg(Color::Cyan),
                    )),
                    Line::from(format!("icon: {}", slot.icon)),
                ];
                lines.extend(slot.lore.iter().map(|l| Line::from(l.clone())));
                lines
            }
            None => vec![Line::from(Span::styled(
                "(empty)",
                Style::default().fg(Color::DarkGray),
            ))],
        };

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
