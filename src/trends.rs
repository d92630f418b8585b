//! Google Trends client for interest-over-time data.
//!
//! # Protocol
//!
//! The trends web API needs two calls per query:
//!
//! 1. `explore` registers the comparison (keyword, time window, category 0)
//!    and answers with a list of widgets. The `TIMESERIES` widget carries a
//!    signed `token` and a `request` object.
//! 2. `widgetdata/multiline` takes that token and request back and answers
//!    with the timeline.
//!
//! Both bodies start with an anti-XSSI prefix (`)]}'`) that has to be
//! stripped before the JSON parses.
//!
//! An empty timeline is a valid answer and maps to [`TrendOutcome::Empty`];
//! only transport, status, and shape problems are errors.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::TrendsConfig;
use crate::error::TrendsError;
use crate::query::Query;

const USER_AGENT: &str = concat!("keyword-trends/", env!("CARGO_PKG_VERSION"));

/// "All categories"
const CATEGORY_ALL: u32 = 0;

const EXPLORE_PATH: &str = "/trends/api/explore";
const MULTILINE_PATH: &str = "/trends/api/widgetdata/multiline";

/// One bucket of the interest timeline
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub timestamp: DateTime<Utc>,
    /// Provider-normalized interest, 0-100
    pub value: f64,
    /// The bucket is still filling up (usually the newest one)
    pub partial: bool,
}

/// Interest-over-time series for one keyword, ascending by timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    keyword: String,
    points: Vec<TrendPoint>,
}

impl TrendSeries {
    pub fn new(keyword: impl Into<String>, mut points: Vec<TrendPoint>) -> Self {
        points.sort_by_key(|p| p.timestamp);
        Self {
            keyword: keyword.into(),
            points,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn points(&self) -> &[TrendPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest value in the series
    pub fn max_value(&self) -> Option<f64> {
        self.points.iter().map(|p| p.value).reduce(f64::max)
    }

    /// (unix seconds, value) pairs for charting
    pub fn chart_points(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.timestamp.timestamp() as f64, p.value))
            .collect()
    }
}

/// Successful answer from the trends provider
#[derive(Debug, Clone, PartialEq)]
pub enum TrendOutcome {
    Data(TrendSeries),
    /// The provider has no data for this keyword and window
    Empty,
}

/// `explore` request payload
#[derive(Debug, Serialize)]
struct ExploreRequest<'a> {
    #[serde(rename = "comparisonItem")]
    comparison_item: [ComparisonItem<'a>; 1],
    category: u32,
    property: &'a str,
}

#[derive(Debug, Serialize)]
struct ComparisonItem<'a> {
    keyword: &'a str,
    time: &'a str,
    geo: &'a str,
}

#[derive(Debug, Deserialize)]
struct ExploreResponse {
    #[serde(default)]
    widgets: Vec<Widget>,
}

#[derive(Debug, Deserialize)]
struct Widget {
    id: String,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    request: serde_json::Value,
}

/// Token and request of the registered TIMESERIES widget
#[derive(Debug, Clone)]
pub struct TimeseriesWidget {
    token: String,
    request: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct MultilineResponse {
    default: Timeline,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Timeline {
    #[serde(default)]
    timeline_data: Vec<TimelineEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimelineEntry {
    /// Unix seconds, as a string
    time: String,
    /// One value per compared keyword
    #[serde(default)]
    value: Vec<f64>,
    #[serde(default)]
    is_partial: bool,
}

/// Client for the trends provider
pub struct TrendsClient {
    client: Client,
    base_url: String,
    language: String,
    tz_offset: i32,
    geo: String,
}

impl TrendsClient {
    pub fn new(config: &TrendsConfig) -> Result<Self, TrendsError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .cookie_store(true)
            .gzip(true)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            language: config.language.clone(),
            tz_offset: config.tz_offset,
            geo: config.geo.clone(),
        })
    }

    /// Fetch interest over time for a query
    pub async fn fetch(&self, query: &Query) -> Result<TrendOutcome, TrendsError> {
        self.warm_up().await;
        let widget = self.build_payload(query).await?;
        self.interest_over_time(query.keyword(), &widget).await
    }

    /// Pick up the provider's session cookie. Best effort.
    async fn warm_up(&self) {
        let url = format!("{}/", self.base_url);
        match self.client.get(&url).query(&[("geo", &self.geo)]).send().await {
            Ok(resp) => tracing::debug!("Trends warm-up returned {}", resp.status()),
            Err(e) => tracing::debug!("Trends warm-up failed: {}", e),
        }
    }

    /// Register the query and return the TIMESERIES widget
    pub async fn build_payload(&self, query: &Query) -> Result<TimeseriesWidget, TrendsError> {
        let req = ExploreRequest {
            comparison_item: [ComparisonItem {
                keyword: query.keyword(),
                time: query.timeframe().token(),
                geo: &self.geo,
            }],
            category: CATEGORY_ALL,
            property: "",
        };
        let req = serde_json::to_string(&req)?;

        let explore: ExploreResponse = self.get_json(EXPLORE_PATH, &[("req", req)]).await?;

        explore
            .widgets
            .into_iter()
            .find(|w| w.id == "TIMESERIES")
            .and_then(|w| {
                w.token.map(|token| TimeseriesWidget {
                    token,
                    request: w.request,
                })
            })
            .ok_or(TrendsError::MissingWidget)
    }

    /// Request the timeline for a registered widget
    pub async fn interest_over_time(
        &self,
        keyword: &str,
        widget: &TimeseriesWidget,
    ) -> Result<TrendOutcome, TrendsError> {
        let req = serde_json::to_string(&widget.request)?;
        let response: MultilineResponse = self
            .get_json(
                MULTILINE_PATH,
                &[("req", req), ("token", widget.token.clone())],
            )
            .await?;

        let entries = response.default.timeline_data;
        if entries.is_empty() {
            tracing::info!("No trend data for '{}'", keyword);
            return Ok(TrendOutcome::Empty);
        }

        let mut points = Vec::with_capacity(entries.len());
        for entry in entries {
            let Some(&value) = entry.value.first() else {
                tracing::debug!("Skipping timeline entry {} without a value", entry.time);
                continue;
            };
            points.push(TrendPoint {
                timestamp: parse_timestamp(&entry.time)?,
                value,
                partial: entry.is_partial,
            });
        }

        if points.is_empty() {
            return Ok(TrendOutcome::Empty);
        }

        tracing::info!("Fetched {} trend points for '{}'", points.len(), keyword);
        Ok(TrendOutcome::Data(TrendSeries::new(keyword, points)))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, TrendsError> {
        let url = format!("{}{}", self.base_url, path);
        let tz = self.tz_offset.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[("hl", self.language.as_str()), ("tz", tz.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrendsError::Status(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(strip_xssi(&body))?)
    }
}

/// Drop the `)]}'` guard (and the comma/newline after it) from a response body
fn strip_xssi(body: &str) -> &str {
    let body = body.trim_start();
    body.strip_prefix(")]}'")
        .unwrap_or(body)
        .trim_start_matches(|c: char| c == ',' || c.is_whitespace())
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, TrendsError> {
    raw.parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .ok_or_else(|| TrendsError::InvalidTimestamp(raw.to_string()))
}
