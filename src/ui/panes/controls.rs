//! Controls pane: commands, direction, algorithm and speed slider

use crate::config::{Speed, SLIDER_MAX, SLIDER_MIN};
use crate::playback::PlaybackView;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the speed slider track in cells
const SLIDER_TRACK: usize = 20;

/// Render the controls row. Reset and Start are drawn disabled while
/// running.
pub fn render_controls_pane(frame: &mut Frame, area: Rect, view: &PlaybackView) {
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let label_style = Style::default().fg(DEFAULT_THEME.fg);
    let sep = Span::styled("  │  ", Style::default().fg(DEFAULT_THEME.comment));

    let mut spans = Vec::new();
    spans.extend(button("r", "Reset", !view.running));
    spans.push(Span::raw(" "));
    spans.extend(button("s", "Start", !view.running));
    spans.push(sep.clone());

    spans.extend(key_hint("d"));
    let checkbox = if view.config.ascending { "[x]" } else { "[ ]" };
    spans.push(Span::styled(format!("{} Ascending", checkbox), label_style));
    spans.push(sep.clone());

    spans.extend(key_hint("a"));
    spans.push(Span::styled("Algorithm: ", label_style));
    spans.push(Span::styled(
        view.config.algorithm.name(),
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(sep);

    spans.extend(key_hint("←/→"));
    spans.push(Span::styled("Speed ", label_style));
    spans.push(Span::styled(
        slider_track(view.config.speed),
        Style::default().fg(DEFAULT_THEME.secondary),
    ));
    spans.push(Span::styled(
        format!(
            " {} ({} ms)",
            view.config.speed.slider(),
            view.config.speed.millis()
        ),
        label_style,
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn key_hint(key: &str) -> [Span<'static>; 2] {
    [
        Span::styled(
            format!(" {} ", key),
            Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black),
        ),
        Span::raw(" "),
    ]
}

fn button(key: &str, label: &str, enabled: bool) -> [Span<'static>; 2] {
    let (key_bg, label_fg) = if enabled {
        (DEFAULT_THEME.comment, DEFAULT_THEME.fg)
    } else {
        (DEFAULT_THEME.disabled, DEFAULT_THEME.disabled)
    };
    [
        Span::styled(
            format!(" {} ", key),
            Style::default().bg(key_bg).fg(Color::Black),
        ),
        Span::styled(format!(" {}", label), Style::default().fg(label_fg)),
    ]
}

/// Text slider, e.g. `━━━━━━━━━━━━━━━━━━●━`
pub(crate) fn slider_track(speed: Speed) -> String {
    let span = (SLIDER_MAX - SLIDER_MIN) as usize;
    let knob = (speed.slider() - SLIDER_MIN) as usize * (SLIDER_TRACK - 1) / span;
    (0..SLIDER_TRACK)
        .map(|i| if i == knob { '●' } else { '━' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_knob_position() {
        assert!(slider_track(Speed::from_slider(1)).starts_with('●'));
        assert!(slider_track(Speed::from_slider(1999)).ends_with('●'));
        assert_eq!(slider_track(Speed::from_slider(1000)).chars().count(), SLIDER_TRACK);
        assert_eq!(
            slider_track(Speed::from_slider(1000)).chars().position(|c| c == '●'),
            Some(9)
        );
    }
}
