use chrono::Utc;
use std::sync::Arc;

use crate::models::{RankLookup, RankRequest};
use crate::services::{SearchError, SearchProvider};
use crate::utils::{find_rank, normalize_url, RankMatch};

/// Number of provider results echoed back for display.
pub const TOP_RESULTS_SHOWN: usize = 10;

#[derive(Clone)]
pub struct RankService {
    provider: Arc<dyn SearchProvider>,
}

impl RankService {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }

    /// Normalizes the target, queries the provider once and scans the
    /// results. A blank keyword short-circuits to a not-found lookup.
    pub async fn lookup(&self, req: &RankRequest) -> Result<RankLookup, SearchError> {
        let normalized_target_url = normalize_url(&req.url);
        let keyword = req.keyword.as_str();

        if keyword.trim().is_empty() {
            tracing::info!("empty keyword, skipping search");
            let RankMatch { rank, found_url } = RankMatch::not_found();
            return Ok(RankLookup {
                rank,
                found_url,
                normalized_target_url,
                timestamp: Utc::now(),
                top_results: Vec::new(),
            });
        }

        let results = self.provider.organic_results(keyword).await?;
        let RankMatch { rank, found_url } = find_rank(&normalized_target_url, &results);

        tracing::info!(
            keyword,
            target = %normalized_target_url,
            results = results.len(),
            rank = ?rank.position(),
            "rank lookup finished"
        );

        let mut top_results = results;
        top_results.truncate(TOP_RESULTS_SHOWN);

        Ok(RankLookup {
            rank,
            found_url,
            normalized_target_url,
            timestamp: Utc::now(),
            top_results,
        })
    }
}
