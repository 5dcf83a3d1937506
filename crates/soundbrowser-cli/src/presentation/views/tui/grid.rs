use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};
use soundbrowser_types::truncate;

use super::kind_to_color;
use crate::presentation::view_models::PageViewModel;

/// The page grid, one bordered cell per slot.
pub struct GridView<'a> {
    page: &'a PageViewModel,
    cursor: usize,
}

impl<'a> GridView<'a> {
    pub fn new(page: &'a PageViewModel, cursor: usize) -> Self {
        Self { page, cursor }
    }
}

impl<'a> Widget for GridView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.page.filter.is_empty() {
            format!(" Sounds ({}) ", self.page.filtered_count)
        } else {
            format!(
                " Sounds matching \"{}\" ({}) ",
                self.page.filter, self.page.filtered_count
            )
        };
        let block = Block::default().title(title).borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical(vec![Constraint::Ratio(1, self.page.rows as u32); self.page.rows])
            .split(inner);

        for (row, row_area) in rows.iter().enumerate() {
            let cells = Layout::horizontal(vec![
                Constraint::Ratio(1, self.page.columns as u32);
                self.page.columns
            ])
            .split(*row_area);

            for (column, cell_area) in cells.iter().enumerate() {
                let index = row * self.page.columns + column;
                render_cell(self.page, index, index == self.cursor, *cell_area, buf);
            }
        }
    }
}

fn render_cell(page: &PageViewModel, index: usize, selected: bool, area: Rect, buf: &mut Buffer) {
    let mut border_style = Style::default();
    if selected {
        border_style = border_style.add_modifier(Modifier::REVERSED);
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    block.render(area, buf);

    let Some(slot) = page.slot(index) else {
        return;
    };

    // Entries show the key only; the index is in the detail pane.
    let text = slot
        .label
        .split_once(": ")
        .map(|(_, key)| key)
        .unwrap_or(&slot.label);
    let mut style = Style::default().fg(kind_to_color(slot.kind));
    if selected {
        style = style.add_modifier(Modifier::BOLD);
    }

    Paragraph::new(truncate(text, inner.width as usize))
        .style(style)
        .render(inner, buf);
}
