//! Array pane: one vertical bar per value

use crate::playback::PlaybackView;
use crate::snapshot::Value;
use crate::ui::theme::{bar_color, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Partial-cell glyphs, indexed by eighths filled
const EIGHTHS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Render the array as bars scaled to `view.max_value`
pub fn render_bars_pane(frame: &mut Frame, area: Rect, view: &PlaybackView) {
    let border_style = if view.running {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let direction = if view.config.ascending { "↑" } else { "↓" };
    let block = Block::default()
        .title(format!(" {} {} ", view.config.algorithm.name(), direction))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    let lines = bar_lines(view.array, view.max_value, inner.width, inner.height);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Height of each terminal column in eighths of a cell.
///
/// When the area is narrower than the array, columns sample the array
/// evenly; when wider, each value spans one or more columns.
pub(crate) fn column_heights(
    values: &[Value],
    max: Value,
    width: u16,
    height: u16,
) -> Vec<(Value, u32)> {
    if values.is_empty() || width == 0 || height == 0 || max == 0 {
        return Vec::new();
    }
    let n = values.len();
    let full = height as u64 * 8;
    (0..width as usize)
        .map(|x| {
            let value = values[x * n / width as usize];
            let eighths = (value.min(max) as u64 * full / max as u64) as u32;
            (value, eighths)
        })
        .collect()
}

fn bar_lines(values: &[Value], max: Value, width: u16, height: u16) -> Vec<Line<'static>> {
    let columns = column_heights(values, max, width, height);
    if columns.is_empty() {
        return Vec::new();
    }

    (0..height as u32)
        .map(|row| {
            // Rows are drawn top-down; `floor` is the eighths below this row
            let floor = (height as u32 - 1 - row) * 8;
            let spans: Vec<Span<'static>> = columns
                .iter()
                .map(|&(value, eighths)| {
                    let fill = eighths.saturating_sub(floor).min(8) as usize;
                    Span::styled(EIGHTHS[fill], Style::default().fg(bar_color(value, max)))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}
