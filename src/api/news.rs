//! Currency news client backed by search-grounded generation.

use super::types::{GenerateContentRequest, Tool};
use super::{DataConverter, MAX_NEWS_ITEMS, ModelTransport, NewsClient, NewsItem};
use crate::catalog::CurrencyPair;
use crate::config::ApiConfig;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Collects headlines from the grounding citations of a search-enabled model call.
pub struct AiNewsClient {
    transport: Arc<dyn ModelTransport>,
    model: String,
}

impl AiNewsClient {
    /// Create a new news client.
    pub fn new(transport: Arc<dyn ModelTransport>, config: &ApiConfig) -> Self {
        Self {
            transport,
            model: config.news_model.clone(),
        }
    }

    async fn request_news(&self, pair: CurrencyPair) -> Result<Vec<NewsItem>> {
        let request = GenerateContentRequest::prompt(format!(
            "What is the latest news and market sentiment for the {} currency pair?",
            pair.name
        ))
        .with_tool(Tool::google_search());

        let response = self.transport.generate_content(&self.model, request).await?;
        Ok(DataConverter::collect_news(
            response.grounding_chunks(),
            MAX_NEWS_ITEMS,
        ))
    }
}

#[async_trait]
impl NewsClient for AiNewsClient {
    async fn currency_news(&self, pair: CurrencyPair) -> Vec<NewsItem> {
        match self.request_news(pair).await {
            Ok(news) => {
                debug!(pair = pair.name, count = news.len(), "News received");
                news
            }
            Err(e) => {
                warn!(pair = pair.name, error = %e, "News request failed, showing no headlines");
                Vec::new()
            }
        }
    }
}
