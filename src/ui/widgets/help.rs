//! Help panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::super::layout::centered_rect;
use crate::config::KeyBindings;

/// Help panel showing keybindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect, keys: &KeyBindings) {
        let popup_area = centered_rect(60, 70, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let mut help_text = section("Selection");
        help_text.push(binding(format!("{}/↓", keys.next_pair), "Next pair"));
        help_text.push(binding(format!("{}/↑", keys.prev_pair), "Previous pair"));
        help_text.push(binding(format!("{}/→", keys.next_timeframe), "Next timeframe"));
        help_text.push(binding(format!("{}/←", keys.prev_timeframe), "Previous timeframe"));
        help_text.push(binding("1-4".to_string(), "Select timeframe"));
        help_text.push(Line::from(""));

        help_text.extend(section("Actions"));
        help_text.push(binding(keys.refresh.clone(), "Refresh now"));
        help_text.push(binding(keys.help.clone(), "Toggle help"));
        help_text.push(binding(keys.quit.clone(), "Quit"));
        help_text.push(Line::from(""));

        help_text.push(Line::from(Span::styled(
            "Signals refresh automatically every interval unless a fetch is running.",
            Style::default().fg(Color::DarkGray),
        )));

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(help, popup_area);
    }
}

fn section(title: &'static str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ]
}

fn binding(key: String, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<7}"), Style::default().fg(Color::Cyan)),
        Span::raw(description),
    ])
}
