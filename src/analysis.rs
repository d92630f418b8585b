//! One submit, start to finish.
//!
//! ```text
//! Query ──► trends ──┬─ Err ─────────► Analysis::Failed
//!                    ├─ Ok(Empty) ───► Analysis::NoData
//!                    └─ Ok(Data) ──► suggestions ──► Analysis::Ready
//! ```
//!
//! The two requests never overlap. A suggestion failure is kept inside the
//! report so the chart and table still render.

use anyhow::{Context, Result};

use crate::config::Config;
use crate::error::{SuggestError, TrendsError};
use crate::query::Query;
use crate::suggest::SuggestClient;
use crate::trends::{TrendOutcome, TrendSeries, TrendsClient};

/// Provider clients, built once at startup and passed to each analysis
pub struct Providers {
    pub trends: TrendsClient,
    pub suggest: SuggestClient,
}

impl Providers {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            trends: TrendsClient::new(&config.trends).context("Failed to build trends client")?,
            suggest: SuggestClient::new(&config.suggest)
                .context("Failed to build suggestion client")?,
        })
    }
}

/// Everything the report screen shows
#[derive(Debug)]
pub struct Report {
    pub query: Query,
    pub series: TrendSeries,
    pub suggestions: Result<Vec<String>, SuggestError>,
}

/// Result of running one query
#[derive(Debug)]
pub enum Analysis {
    Ready(Report),
    /// Provider answered, but has nothing for this keyword and window
    NoData { query: Query },
    Failed { query: Query, error: TrendsError },
}

/// Fetch trends, then suggestions, for a query
pub async fn analyze(providers: &Providers, query: Query) -> Analysis {
    tracing::info!("Analyzing '{}' over {}", query.keyword(), query.timeframe());

    let series = match providers.trends.fetch(&query).await {
        Ok(TrendOutcome::Data(series)) => series,
        Ok(TrendOutcome::Empty) => return Analysis::NoData { query },
        Err(error) => {
            tracing::error!("Trend fetch for '{}' failed: {}", query.keyword(), error);
            return Analysis::Failed { query, error };
        }
    };

    let suggestions = providers.suggest.fetch(query.keyword()).await;
    if let Err(ref e) = suggestions {
        tracing::warn!("Suggestion fetch for '{}' failed: {}", query.keyword(), e);
    }

    Analysis::Ready(Report {
        query,
        series,
        suggestions,
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Mock provider servers shared by orchestration and app tests

    use super::*;
    use crate::config::{SuggestConfig, TrendsConfig};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub const EXPLORE: &str = r#")]}'
{"widgets":[{"id":"TIMESERIES","token":"tok","request":{"time":"today 1-m"}}]}"#;

    pub fn timeline(values: &[u32]) -> String {
        let rows: Vec<String> = values
            .iter()
            .enumerate()
            .map(|(i, v)| format!(r#"{{"time":"{}","value":[{}]}}"#, 1_700_000_000 + i as i64 * 86_400, v))
            .collect();
        format!(")]}}',\n{{\"default\":{{\"timelineData\":[{}]}}}}", rows.join(","))
    }

    pub struct MockProviders {
        pub trends: MockServer,
        pub suggest: MockServer,
    }

    impl MockProviders {
        pub async fn start() -> Self {
            Self {
                trends: MockServer::start().await,
                suggest: MockServer::start().await,
            }
        }

        pub fn providers(&self) -> Providers {
            let config = Config {
                trends: TrendsConfig {
                    base_url: self.trends.uri(),
                    ..TrendsConfig::default()
                },
                suggest: SuggestConfig {
                    base_url: self.suggest.uri(),
                    ..SuggestConfig::default()
                },
                ..Config::default()
            };
            Providers::from_config(&config).unwrap()
        }

        /// Serve a timeline with the given values
        pub async fn trends_with(&self, values: &[u32]) {
            Mock::given(method("GET"))
                .and(path("/trends/api/explore"))
                .respond_with(ResponseTemplate::new(200).set_body_string(EXPLORE))
                .mount(&self.trends)
                .await;
            Mock::given(method("GET"))
                .and(path("/trends/api/widgetdata/multiline"))
                .respond_with(ResponseTemplate::new(200).set_body_string(timeline(values)))
                .mount(&self.trends)
                .await;
        }

        /// Serve a suggestion response; `expected` pins the call count
        pub async fn suggest_with(&self, response: ResponseTemplate, expected: u64) {
            Mock::given(method("GET"))
                .and(path("/complete/search"))
                .respond_with(response)
                .expect(expected)
                .mount(&self.suggest)
                .await;
        }
    }
}
