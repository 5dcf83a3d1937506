//! Interactive browse screen.
//!
//! The renderer owns UI state (cursor, quit flag) but not the data: every
//! click is handed back to the caller, which returns the next screen.

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};

use crate::presentation::view_models::BrowseScreenViewModel;
use crate::presentation::views::tui::{DetailView, GridView, StatusBarView};

pub struct TuiRenderer {
    screen: BrowseScreenViewModel,
    cursor: usize,
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(screen: BrowseScreenViewModel) -> Self {
        Self {
            screen,
            cursor: 0,
            should_quit: false,
        }
    }

    /// Run until the user quits. `on_click` receives the slot under the
    /// cursor and returns the screen to show next.
    pub fn run<F>(mut self, on_click: F) -> Result<()>
    where
        F: FnMut(usize) -> BrowseScreenViewModel,
    {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, on_click);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<F>(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        mut on_click: F,
    ) -> Result<()>
    where
        F: FnMut(usize) -> BrowseScreenViewModel,
    {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if let Event::Key(key) = event::read()?
                && let Some(slot) = self.handle_key_event(key)
            {
                self.screen = on_click(slot);
            }
        }
        Ok(())
    }

    /// Returns the slot to click, if the key asked for one.
    fn handle_key_event(&mut self, key: KeyEvent) -> Option<usize> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let columns = self.screen.page.columns.max(1);
        let capacity = self.screen.page.rows * columns;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.cursor = (self.cursor + 1).min(capacity.saturating_sub(1));
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(columns);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + columns < capacity {
                    self.cursor += columns;
                }
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::Enter | KeyCode::Char(' ') => return Some(self.cursor),
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Min(10),
            Constraint::Length(6),
            Constraint::Length(3),
        ])
        .split(f.area());

        f.render_widget(GridView::new(&self.screen.page, self.cursor), chunks[0]);
        f.render_widget(DetailView::new(&self.screen.page, self.cursor), chunks[1]);
        f.render_widget(StatusBarView::new(&self.screen.status_bar), chunks[2]);
    }
}
