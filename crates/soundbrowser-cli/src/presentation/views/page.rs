use std::fmt;

use crate::presentation::view_models::{CreateView, PageViewModel, SlotViewModel};

impl CreateView for PageViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(PageView { data: self })
    }
}

pub struct PageView<'a> {
    data: &'a PageViewModel,
}

impl<'a> PageView<'a> {
    pub fn new(data: &'a PageViewModel) -> Self {
        Self { data }
    }
}

fn write_slot(f: &mut fmt::Formatter, slot: &SlotViewModel) -> fmt::Result {
    write!(f, "{:>3}  {:<32} {}", slot.slot, slot.label, slot.icon)?;
    if !slot.lore.is_empty() {
        write!(f, "  ({})", slot.lore.join(", "))?;
    }
    writeln!(f)
}

impl<'a> fmt::Display for PageView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        write!(
            f,
            "Page {}/{} | {} sounds | pitch {}",
            data.page_number, data.page_count, data.filtered_count, data.pitch
        )?;
        if !data.filter.is_empty() {
            write!(f, " | filter \"{}\"", data.filter)?;
        }
        writeln!(f)?;
        writeln!(f)?;

        let mut any_entry = false;
        for slot in data.entries() {
            any_entry = true;
            write_slot(f, slot)?;
        }
        if !any_entry {
            writeln!(f, "  (no entries on this page)")?;
        }

        writeln!(f)?;
        for slot in data.controls() {
            write_slot(f, slot)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_page_view;
    use soundbrowser_core::{IconHeuristic, StateCodec};
    use soundbrowser_engine::render_page;
    use soundbrowser_types::{Catalog, GridLayout, Page};

    #[test]
    fn test_plain_page_rendering() {
        let catalog = Catalog::from_keys([
            "BLOCK_BELL_USE",
            "ENTITY_CAT_PURR",
            "BLOCK_LAVA_POP",
            "UI_TOAST_IN",
        ]);
        let icons = IconHeuristic::new(["BELL", "CAT", "LAVA", "LAVA_BUCKET"]);
        let layout = GridLayout::new(2).unwrap();
        let view = render_page(
            &Page::new(0, "", 1),
            &catalog,
            &icons,
            layout,
            &StateCodec::default(),
        );

        let vm = present_page_view(&view);
        insta::assert_snapshot!(PageView::new(&vm).to_string(), @r#"
        Page 1/1 | 4 sounds | pitch 1

          0  0: BLOCK_BELL_USE                BELL
          1  1: ENTITY_CAT_PURR               CAT
          2  2: BLOCK_LAVA_POP                LAVA_BUCKET
          3  3: UI_TOAST_IN                   STICK

         10  Stop Sound                       BARRIER
         12  -Pitch                           RED_WOOL  (1)
         13  +Pitch                           GREEN_WOOL  (1)
         16  Current Page                     RED_STAINED_GLASS  (1/1)
        "#);
    }
}
