//! Indicator table and AI recommendation.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::api::{SignalAction, SignalResult};
use crate::indicators::IndicatorSnapshot;
use crate::state::CycleState;

/// Signal panel widget.
pub struct SignalPanel;

impl SignalPanel {
    pub fn render(frame: &mut Frame, area: Rect, cycle: &CycleState) {
        let block = Block::default()
            .title(format!(
                " {} · {} ",
                cycle.selection.pair, cycle.selection.timeframe.label
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(0)])
            .split(inner);

        frame.render_widget(indicator_table(&cycle.indicators), chunks[0]);

        let recommendation = if cycle.signal_loading {
            loading_lines()
        } else {
            match &cycle.signal {
                Some(signal) => signal_lines(signal),
                None => vec![Line::from(Span::styled(
                    "No signal available.",
                    Style::default().fg(Color::DarkGray),
                ))],
            }
        };

        frame.render_widget(
            Paragraph::new(recommendation).alignment(Alignment::Center),
            chunks[1],
        );
    }
}

fn indicator_table(indicators: &IndicatorSnapshot) -> Table<'static> {
    let header = Row::new(["Indicator", "Value", ""].map(|h| {
        Cell::from(h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    }))
    .bottom_margin(1);

    let (rsi_color, rsi_note) = if indicators.is_overbought() {
        (Color::Red, "overbought")
    } else if indicators.is_oversold() {
        (Color::Green, "oversold")
    } else {
        (Color::Gray, "")
    };
    let histogram_color = if indicators.histogram.is_sign_negative() {
        Color::Red
    } else {
        Color::Green
    };
    let crossover = if indicators.is_bullish_crossover() {
        "bullish"
    } else {
        "bearish"
    };

    let rows = vec![
        Row::new(vec![
            Cell::from("RSI"),
            Cell::from(format!("{:.2}", indicators.rsi)).style(Style::default().fg(rsi_color)),
            Cell::from(rsi_note).style(Style::default().fg(rsi_color)),
        ]),
        Row::new(vec![
            Cell::from("MACD"),
            Cell::from(format!("{:.5}", indicators.macd)).style(Style::default().fg(Color::Blue)),
            Cell::from(""),
        ]),
        Row::new(vec![
            Cell::from("Signal"),
            Cell::from(format!("{:.5}", indicators.signal_line))
                .style(Style::default().fg(Color::LightRed)),
            Cell::from(""),
        ]),
        Row::new(vec![
            Cell::from("Histogram"),
            Cell::from(format!("{:.5}", indicators.histogram))
                .style(Style::default().fg(histogram_color)),
            Cell::from(crossover).style(Style::default().fg(histogram_color)),
        ]),
    ];

    Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Min(0),
        ],
    )
    .header(header)
}

fn loading_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            "Analyzing...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )),
    ]
}

fn signal_lines(signal: &SignalResult) -> Vec<Line<'static>> {
    let color = match signal.action {
        SignalAction::Buy => Color::Green,
        SignalAction::Sell => Color::Red,
        SignalAction::Hold => Color::Yellow,
    };

    vec![
        Line::from(""),
        Line::from(Span::styled(
            signal.action.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Confidence ({}/10)", signal.confidence),
            Style::default().fg(Color::Gray),
        )),
        confidence_meter(signal.confidence),
    ]
}

fn confidence_meter(confidence: u8) -> Line<'static> {
    let color = match confidence {
        7.. => Color::Green,
        4..=6 => Color::Yellow,
        _ => Color::Red,
    };
    let filled = usize::from(confidence.min(SignalResult::MAX_CONFIDENCE));
    let empty = usize::from(SignalResult::MAX_CONFIDENCE) - filled;

    Line::from(vec![
        Span::styled("■ ".repeat(filled), Style::default().fg(color)),
        Span::styled("□ ".repeat(empty), Style::default().fg(Color::DarkGray)),
    ])
}
