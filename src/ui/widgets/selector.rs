//! Pair and timeframe selector.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::catalog::{CURRENCY_PAIRS, TIMEFRAMES};
use crate::state::Selection;

/// Two-line selector bar: pairs on top, timeframes below.
pub struct SelectorBar;

impl SelectorBar {
    pub fn render(frame: &mut Frame, area: Rect, selection: &Selection) {
        let label_style = Style::default().fg(Color::Gray);

        let mut pairs = vec![Span::styled(" Pair:      ", label_style)];
        for pair in CURRENCY_PAIRS {
            pairs.push(Span::styled(pair.name, item_style(pair == selection.pair)));
            pairs.push(Span::raw("  "));
        }

        let mut timeframes = vec![Span::styled(" Timeframe: ", label_style)];
        for (i, timeframe) in TIMEFRAMES.iter().enumerate() {
            timeframes.push(Span::styled(
                format!("[{}] ", i + 1),
                Style::default().fg(Color::DarkGray),
            ));
            timeframes.push(Span::styled(
                timeframe.label,
                item_style(*timeframe == selection.timeframe),
            ));
            timeframes.push(Span::raw("  "));
        }

        let paragraph = Paragraph::new(vec![Line::from(pairs), Line::from(timeframes)]);
        frame.render_widget(paragraph, area);
    }
}

fn item_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::White)
    }
}
