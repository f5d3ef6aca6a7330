//! Headline list.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::state::CycleState;

/// News panel widget.
pub struct NewsPanel;

impl NewsPanel {
    pub fn render(frame: &mut Frame, area: Rect, cycle: &CycleState) {
        let block = Block::default()
            .title(format!(" Latest News for {} ", cycle.selection.pair))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        if cycle.news_loading {
            let loading = Paragraph::new(Line::from(Span::styled(
                "Fetching news...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )))
            .block(block);
            frame.render_widget(loading, area);
            return;
        }

        if cycle.news.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No recent news found.",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block)
            .wrap(Wrap { trim: true });
            frame.render_widget(empty, area);
            return;
        }

        let width = block.inner(area).width as usize;
        let items: Vec<ListItem> = cycle
            .news
            .iter()
            .map(|item| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        truncate(&item.title, width),
                        Style::default().fg(Color::LightBlue),
                    )),
                    Line::from(Span::styled(
                        truncate(&item.uri, width),
                        Style::default().fg(Color::DarkGray),
                    )),
                    Line::from(""),
                ])
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}

/// Shorten to `max` characters, ending with an ellipsis when cut.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(1);
    let mut out: String = s.chars().take(keep).collect();
    out.push('…');
    out
}
