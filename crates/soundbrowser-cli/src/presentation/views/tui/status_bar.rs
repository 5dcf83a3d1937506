use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::status_level_to_color;
use crate::presentation::view_models::StatusBarViewModel;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.status_level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(inner);

        let mut status = vec![
            Span::raw(format!("Page {} ", self.model.page_label)),
            Span::raw("| "),
            Span::raw(format!("Pitch {} ", self.model.pitch)),
            Span::raw("| "),
        ];
        if let Some(key) = &self.model.now_playing {
            status.push(Span::styled(
                format!("♪ {} ", key),
                Style::default().fg(Color::Magenta),
            ));
            status.push(Span::raw("| "));
        }
        status.push(Span::styled(
            &self.model.status_message,
            Style::default().fg(color),
        ));
        Paragraph::new(Line::from(status)).render(chunks[0], buf);

        let help = Line::from(vec![
            Span::styled("[q]", Style::default().fg(Color::Yellow)),
            Span::raw("uit "),
            Span::styled("[←↑↓→/hjkl]", Style::default().fg(Color::Yellow)),
            Span::raw("move "),
            Span::styled("[enter]", Style::default().fg(Color::Yellow)),
            Span::raw("click"),
        ]);
        Paragraph::new(help).render(chunks[1], buf);
    }
}
