use std::fmt;

use soundbrowser_engine::Dispatch;

use super::page::PageView;
use crate::presentation::view_models::{ClickViewModel, CreateView};

impl CreateView for ClickViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(ClickView { data: self })
    }
}

struct ClickView<'a> {
    data: &'a ClickViewModel,
}

fn effect_name(dispatch: &Dispatch) -> &'static str {
    match dispatch {
        Dispatch::Ignored => "ignored",
        Dispatch::Unroutable => "unroutable",
        Dispatch::Play { .. } => "play",
        Dispatch::Navigate { .. } => "navigate",
        Dispatch::StopAll => "stop_all",
    }
}

impl<'a> fmt::Display for ClickView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let outcome = &self.data.outcome;
        write!(
            f,
            "slot {} -> {}",
            outcome.slot,
            effect_name(&outcome.dispatch)
        )?;
        if !outcome.cancelled {
            write!(f, " (passed to host)")?;
        }
        writeln!(f)?;

        if let Some(page) = &self.data.next_page {
            writeln!(f)?;
            write!(f, "{}", PageView::new(page))?;
        }

        Ok(())
    }
}
