//! Data conversion from model output to dashboard types.

use super::types::GroundingChunk;
use super::{NewsItem, SignalAction, SignalResult};
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Upper bound on headlines kept per cycle.
pub const MAX_NEWS_ITEMS: usize = 5;

/// Converts raw model output into dashboard types.
pub struct DataConverter;

impl DataConverter {
    /// Parse and validate the JSON text returned for a signal request.
    ///
    /// Expects `{"signal": "BUY"|"SELL"|"HOLD", "confidence": 1..=10}`.
    /// Confidence must be a whole number; `7` and `7.0` are accepted, `7.5` is not.
    pub fn parse_signal(text: &str) -> Result<SignalResult> {
        let value: serde_json::Value = serde_json::from_str(text.trim())?;

        let action = value
            .get("signal")
            .and_then(|v| v.as_str())
            .and_then(SignalAction::parse)
            .ok_or_else(|| Error::invalid_response(format!("unexpected signal in {value}")))?;

        let confidence = value
            .get("confidence")
            .and_then(|v| v.as_f64())
            .filter(|c| c.fract() == 0.0 && (1.0..=10.0).contains(c))
            .ok_or_else(|| Error::invalid_response(format!("unexpected confidence in {value}")))?;

        SignalResult::new(action, confidence as u8)
            .ok_or_else(|| Error::invalid_response("confidence out of range"))
    }

    /// Turn grounding citations into at most `limit` news items.
    ///
    /// Chunks without both a URI and a title are skipped. Duplicate URIs keep
    /// the position of their first occurrence and the title of their last.
    pub fn collect_news(chunks: &[GroundingChunk], limit: usize) -> Vec<NewsItem> {
        let mut items: Vec<NewsItem> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        let sources = chunks
            .iter()
            .filter_map(|c| c.web.as_ref())
            .filter_map(|web| match (web.uri.as_deref(), web.title.as_deref()) {
                (Some(uri), Some(title)) if !uri.is_empty() && !title.is_empty() => {
                    Some(NewsItem::new(title, uri))
                }
                _ => None,
            });

        for item in sources {
            match positions.get(&item.uri) {
                Some(&index) => items[index] = item,
                None => {
                    positions.insert(item.uri.clone(), items.len());
                    items.push(item);
                }
            }
        }

        items.truncate(limit);
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::WebSource;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_parse_valid_signal() {
        let signal = DataConverter::parse_signal(r#"{"signal": "SELL", "confidence": 8}"#).unwrap();
        assert_eq!(signal, SignalResult::new(SignalAction::Sell, 8).unwrap());
    }

    #[test]
    fn test_parse_signal_tolerates_whitespace_and_whole_floats() {
        let signal =
            DataConverter::parse_signal("\n  {\"confidence\": 3.0, \"signal\": \"BUY\"}  ").unwrap();
        assert_eq!(signal.action, SignalAction::Buy);
        assert_eq!(signal.confidence, 3);
    }

    #[test]
    fn test_parse_signal_rejects_unknown_action() {
        let err = DataConverter::parse_signal(r#"{"signal": "STRONG_BUY", "confidence": 9}"#);
        assert!(matches!(err, Err(Error::InvalidResponse(_))));

        let err = DataConverter::parse_signal(r#"{"signal": "buy", "confidence": 9}"#);
        assert!(matches!(err, Err(Error::InvalidResponse(_))));
    }

    #[test]
    fn test_parse_signal_rejects_bad_confidence() {
        for body in [
            r#"{"signal": "HOLD", "confidence": 0}"#,
            r#"{"signal": "HOLD", "confidence": 11}"#,
            r#"{"signal": "HOLD", "confidence": 7.5}"#,
            r#"{"signal": "HOLD", "confidence": "7"}"#,
            r#"{"signal": "HOLD"}"#,
        ] {
            assert!(
                matches!(DataConverter::parse_signal(body), Err(Error::InvalidResponse(_))),
                "accepted {body}"
            );
        }
    }

    #[test]
    fn test_parse_signal_rejects_non_json() {
        let err = DataConverter::parse_signal("BUY with confidence 9");
        assert!(matches!(err, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_collect_news_skips_incomplete_chunks() {
        let chunks = vec![
            GroundingChunk::web("https://a.example", "A"),
            GroundingChunk { web: None },
            GroundingChunk {
                web: Some(WebSource {
                    uri: Some("https://b.example".into()),
                    title: None,
                }),
            },
            GroundingChunk::web("", "Empty uri"),
            GroundingChunk::web("https://c.example", ""),
            GroundingChunk::web("https://d.example", "D"),
        ];

        let news = DataConverter::collect_news(&chunks, MAX_NEWS_ITEMS);
        assert_eq!(
            news,
            vec![
                NewsItem::new("A", "https://a.example"),
                NewsItem::new("D", "https://d.example"),
            ]
        );
    }

    #[test]
    fn test_collect_news_duplicate_uri_keeps_first_position_last_title() {
        let chunks = vec![
            GroundingChunk::web("https://a.example", "First title"),
            GroundingChunk::web("https://b.example", "B"),
            GroundingChunk::web("https://a.example", "Second title"),
        ];

        let news = DataConverter::collect_news(&chunks, MAX_NEWS_ITEMS);
        assert_eq!(
            news,
            vec![
                NewsItem::new("Second title", "https://a.example"),
                NewsItem::new("B", "https://b.example"),
            ]
        );
    }

    #[test]
    fn test_collect_news_limits_and_stays_unique() {
        let chunks: Vec<GroundingChunk> = (0..12)
            .map(|i| GroundingChunk::web(&format!("https://news.example/{}", i % 7), &format!("t{i}")))
            .collect();

        let news = DataConverter::collect_news(&chunks, MAX_NEWS_ITEMS);
        assert_eq!(news.len(), MAX_NEWS_ITEMS);

        let uris: HashSet<_> = news.iter().map(|n| n.uri.as_str()).collect();
        assert_eq!(uris.len(), news.len());

        let order: Vec<_> = news.iter().map(|n| n.uri.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "https://news.example/0",
                "https://news.example/1",
                "https://news.example/2",
                "https://news.example/3",
                "https://news.example/4",
            ]
        );
        // uri 0 was seen again at i = 7
        assert_eq!(news[0].title, "t7");
    }

    #[test]
    fn test_collect_news_is_idempotent() {
        let chunks = vec![
            GroundingChunk::web("https://a.example", "A"),
            GroundingChunk::web("https://a.example", "A2"),
            GroundingChunk::web("https://b.example", "B"),
        ];
        let once = DataConverter::collect_news(&chunks, MAX_NEWS_ITEMS);
        let again_chunks: Vec<_> = once
            .iter()
            .map(|n| GroundingChunk::web(&n.uri, &n.title))
            .collect();
        assert_eq!(DataConverter::collect_news(&again_chunks, MAX_NEWS_ITEMS), once);
    }
}
