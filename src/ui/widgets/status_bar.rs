//! Status bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{CyclePhase, CycleState};

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(frame: &mut Frame, area: Rect, cycle: &CycleState) {
        let phase = match cycle.phase {
            CyclePhase::Idle => Span::styled("○ Idle", Style::default().fg(Color::Gray)),
            CyclePhase::Fetching => Span::styled(
                "⟳ Updating...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ),
            CyclePhase::Settled => Span::styled("● Live", Style::default().fg(Color::Green)),
            CyclePhase::Failed => Span::styled("✗ Failed", Style::default().fg(Color::Red)),
        };

        let updated = match cycle.last_updated {
            Some(at) => Span::styled(
                format!(" Updated {} ", at.format("%H:%M:%S UTC")),
                Style::default().fg(Color::Gray),
            ),
            None => Span::raw(""),
        };

        let help_hint = Span::styled(" Press ? for help ", Style::default().fg(Color::Gray));

        let left_content = vec![
            Span::styled(
                " 📈 fxpulse ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("{} · {}", cycle.selection.pair, cycle.selection.timeframe.label),
                Style::default().fg(Color::White),
            ),
            Span::raw(" | "),
            phase,
            updated,
        ];

        let status_line = Line::from(left_content);

        // Pad so the help hint sits on the right edge
        let left_len = status_line.width();
        let right_len = help_hint.width();
        let padding = (area.width as usize).saturating_sub(left_len + right_len);

        let mut full_line = status_line.spans;
        full_line.push(Span::raw(" ".repeat(padding)));
        full_line.push(help_hint);

        let paragraph =
            Paragraph::new(Line::from(full_line)).style(Style::default().bg(Color::DarkGray));

        frame.render_widget(paragraph, area);
    }
}
