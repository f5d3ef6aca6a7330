//! Disclaimer and key hints.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::config::KeyBindings;

pub const DISCLAIMER: &str = "Disclaimer: This application is for demonstration purposes only. \
Trading signals are generated by an AI and should not be considered financial advice.";

/// Footer widget.
pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, keys: &KeyBindings, show_help_bar: bool) {
        let mut lines = Vec::with_capacity(2);

        if show_help_bar {
            let key_style = Style::default().fg(Color::Cyan);
            let text_style = Style::default().fg(Color::Gray);
            let hints = [
                (format!("{}/{}", keys.next_pair, keys.prev_pair), "pair"),
                (format!("{}/{}", keys.prev_timeframe, keys.next_timeframe), "timeframe"),
                ("1-4".to_string(), "jump"),
                (keys.refresh.clone(), "refresh"),
                (keys.help.clone(), "help"),
                (keys.quit.clone(), "quit"),
            ];

            let mut spans = vec![Span::raw(" ")];
            for (key, label) in hints {
                spans.push(Span::styled(key, key_style));
                spans.push(Span::styled(format!(" {label}  "), text_style));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(Span::styled(
            format!(" {DISCLAIMER}"),
            Style::default().fg(Color::DarkGray),
        )));

        frame.render_widget(Paragraph::new(lines), area);
    }
}
