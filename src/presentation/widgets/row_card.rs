use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

use crate::{domain::row::RowVisual, presentation::config::Styles};

const MENU_MARKER: &str = "⋯";
const SELECTED_GUTTER: &str = "▌";

/// One feed row drawn as a colored block.
///
/// `area` passed to `render` is the visible slice of the row; `skip_top`
/// says how many of the row's lines are scrolled off above it.
#[derive(Clone, Debug)]
pub struct RowCard<'a> {
    pub label: usize,
    pub visual: RowVisual,
    pub height: u32,
    pub skip_top: u32,
    pub selected: bool,
    pub focused: bool,
    styles: &'a Styles,
}

impl<'a> RowCard<'a> {
    pub fn new(label: usize, visual: RowVisual, height: u32, styles: &'a Styles) -> Self {
        Self {
            label,
            visual,
            height,
            skip_top: 0,
            selected: false,
            focused: false,
            styles,
        }
    }

    pub fn skip_top(mut self, skip_top: u32) -> Self {
        self.skip_top = skip_top;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Line of the row holding the pill
    pub fn middle_line(&self) -> u32 {
        self.height.saturating_sub(1) / 2
    }

    pub fn pill_text(&self) -> String {
        format!(" {} ", self.label)
    }

    fn pill_style(&self) -> Style {
        let pill = self.styles.style("pill");
        if self.focused {
            pill.patch(self.styles.style("focused"))
        } else {
            pill
        }
    }
}

impl Widget for RowCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let background = Style::default().bg(self.visual.color.into());
        buf.set_style(area, background);

        let separator = background.patch(self.styles.style("separator"));
        let last_line = self.height.saturating_sub(1);
        let middle = self.middle_line();
        let highlighted = self.selected || self.focused;

        for (offset, y) in (area.top()..area.bottom()).enumerate() {
            let line = self.skip_top + offset as u32;

            if line == last_line {
                let rule = "─".repeat(usize::from(area.width));
                buf.set_stringn(area.x, y, rule, usize::from(area.width), separator);
            }

            if self.selected {
                buf.set_string(area.x, y, SELECTED_GUTTER, self.styles.style("menu"));
            }

            if line == middle {
                let pill = self.pill_text();
                let pill_width = pill.width() as u16;
                let x = area.x + area.width.saturating_sub(pill_width) / 2;
                buf.set_stringn(x, y, &pill, usize::from(area.width), self.pill_style());

                if highlighted && area.width >= 4 {
                    let menu = format!(" {MENU_MARKER} ");
                    let x = area.right().saturating_sub(menu.width() as u16 + 1);
                    buf.set_string(x, y, menu, self.styles.style("menu"));
                }
            }
        }
    }
}
