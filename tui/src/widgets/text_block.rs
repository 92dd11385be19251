//! TextBlock Widget
//!
//! A borderless, scrollable region of styled lines, anchored to the bottom
//! so the newest content stays in view.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::StatefulWidget;
use textwrap::wrap;

/// State for a scrollable text block
#[derive(Debug, Default)]
pub struct TextBlockState {
    /// Scroll offset (lines from bottom, 0 = latest)
    pub scroll_offset: usize,
    /// Total wrapped lines at the last render
    pub total_lines: usize,
}

impl TextBlockState {
    /// Scroll towards older content
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = (self.scroll_offset + lines).min(self.total_lines.saturating_sub(1));
    }

    /// Scroll towards newer content
    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    /// Scroll to bottom
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }
}

/// A borderless, scrollable block of styled lines
pub struct TextBlock<'a> {
    lines: &'a [(String, Style)],
}

impl<'a> TextBlock<'a> {
    /// Create a block over pre-styled, unwrapped lines
    pub fn new(lines: &'a [(String, Style)]) -> Self {
        Self { lines }
    }
}

/// Wrap styled lines to `width`, keeping each line's style
pub fn wrap_lines(lines: &[(String, Style)], width: usize) -> Vec<(String, Style)> {
    lines
        .iter()
        .flat_map(|(line, style)| {
            if line.is_empty() || width == 0 {
                vec![(String::new(), *style)]
            } else {
                wrap(line, width)
                    .into_iter()
                    .map(|cow| (cow.into_owned(), *style))
                    .collect()
            }
        })
        .collect()
}

impl StatefulWidget for TextBlock<'_> {
    type State = TextBlockState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let wrapped = wrap_lines(self.lines, area.width as usize);
        state.total_lines = wrapped.len();

        // Clamp scroll
        let height = area.height as usize;
        let max_scroll = state.total_lines.saturating_sub(height);
        state.scroll_offset = state.scroll_offset.min(max_scroll);

        let visible_end = state.total_lines - state.scroll_offset;
        let visible_start = visible_end.saturating_sub(height);

        for (i, (line, style)) in wrapped[visible_start..visible_end].iter().enumerate() {
            let y = area.y + i as u16;
            buf.set_string(area.x, y, line, *style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_keeps_style_per_line() {
        let style = Style::default().fg(ratatui::style::Color::Green);
        let lines = vec![("one two three four".to_string(), style), (String::new(), Style::default())];
        let wrapped = wrap_lines(&lines, 9);
        assert_eq!(wrapped.len(), 4);
        assert_eq!(wrapped[0].0, "one two");
        assert_eq!(wrapped[1].0, "three");
        assert_eq!(wrapped[2].1, style);
        assert_eq!(wrapped[3].0, "");
    }

    #[test]
    fn test_render_shows_bottom_lines() {
        let lines: Vec<_> = (0..10)
            .map(|i| (format!("line {i}"), Style::default()))
            .collect();
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        let mut state = TextBlockState::default();

        TextBlock::new(&lines).render(area, &mut buf, &mut state);
        assert_eq!(state.total_lines, 10);
        assert_eq!(buf[(0, 2)].symbol(), "l");
        assert_eq!(buf[(5, 2)].symbol(), "9");

        state.scroll_up(4);
        TextBlock::new(&lines).render(area, &mut buf, &mut state);
        assert_eq!(buf[(5, 2)].symbol(), "5");
    }
}
