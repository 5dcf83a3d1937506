use std::fmt;

use crate::presentation::view_models::{CompletionViewModel, CreateView};

impl CreateView for CompletionViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(CompletionView { data: self })
    }
}

/// One key per line, nothing else, so shells can consume it directly.
struct CompletionView<'a> {
    data: &'a CompletionViewModel,
}

impl<'a> fmt::Display for CompletionView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for key in &self.data.suggestions {
            writeln!(f, "{}", key)?;
        }
        Ok(())
    }
}
