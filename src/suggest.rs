//! Related keyword suggestions from the Google Suggest endpoint.
//!
//! With `client=firefox` the endpoint answers with a plain JSON array:
//! `[original_query, [suggestion, ...], ...]`. Only the second element is
//! used, and it must be a list of strings.

use reqwest::Client;
use serde_json::Value;

use crate::config::SuggestConfig;
use crate::error::SuggestError;

const USER_AGENT: &str = concat!("keyword-trends/", env!("CARGO_PKG_VERSION"));

/// Client for the autocomplete provider
pub struct SuggestClient {
    client: Client,
    base_url: String,
    client_name: String,
}

impl SuggestClient {
    pub fn new(config: &SuggestConfig) -> Result<Self, SuggestError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client_name: config.client.clone(),
        })
    }

    /// Fetch suggestions for a keyword, in provider order
    pub async fn fetch(&self, keyword: &str) -> Result<Vec<String>, SuggestError> {
        let url = format!("{}/complete/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("client", self.client_name.as_str()), ("q", keyword)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::Status(status));
        }

        let body = response.text().await?;
        let suggestions = parse_suggestions(&body)?;
        tracing::info!("Fetched {} suggestions for '{}'", suggestions.len(), keyword);
        Ok(suggestions)
    }
}

/// Extract the suggestion list from a response body
pub fn parse_suggestions(body: &str) -> Result<Vec<String>, SuggestError> {
    let value: Value = serde_json::from_str(body)?;

    let Value::Array(items) = value else {
        return Err(SuggestError::UnexpectedShape(
            "response is not a JSON array".to_string(),
        ));
    };

    let Some(second) = items.get(1) else {
        return Err(SuggestError::UnexpectedShape(
            "suggestion list is missing".to_string(),
        ));
    };

    let Value::Array(list) = second else {
        return Err(SuggestError::UnexpectedShape(format!(
            "suggestion list is not an array: {}",
            second
        )));
    };

    list.iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                SuggestError::UnexpectedShape(format!("suggestion is not a string: {}", item))
            })
        })
        .collect()
}

/// Render suggestions as a single comma-separated line
pub fn suggestion_line(suggestions: &[String]) -> String {
    suggestions.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SuggestClient {
        let config = SuggestConfig {
            base_url: server.uri(),
            ..SuggestConfig::default()
        };
        SuggestClient::new(&config).unwrap()
    }

    #[test]
    fn test_parse_and_join() {
        let body = r#"["digital marketing", ["digital marketing agency", "digital marketing course"]]"#;
        let suggestions = parse_suggestions(body).unwrap();
        assert_eq!(
            suggestion_line(&suggestions),
            "digital marketing agency, digital marketing course"
        );
    }

    #[test]
    fn test_parse_keeps_order_and_duplicates() {
        let body = r#"["q", ["b", "a", "b"], [], {"google:suggesttype": []}]"#;
        assert_eq!(parse_suggestions(body).unwrap(), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse_suggestions(r#"["q", []]"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for body in [
            r#"{"q": []}"#,
            r#"["q"]"#,
            r#"["q", "not a list"]"#,
            r#"["q", ["ok", 7]]"#,
        ] {
            assert!(
                matches!(parse_suggestions(body), Err(SuggestError::UnexpectedShape(_))),
                "accepted {}",
                body
            );
        }
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(
            parse_suggestions("[\"q\", [\"unterminated"),
            Err(SuggestError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_encodes_keyword() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/complete/search"))
            .and(query_param("client", "firefox"))
            .and(query_param("q", "c++ & rust"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"["c++ & rust", ["c++ & rust interop"]]"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let suggestions = client_for(&server).fetch("c++ & rust").await.unwrap();
        assert_eq!(suggestions, vec!["c++ & rust interop"]);
    }

    #[tokio::test]
    async fn test_fetch_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/complete/search"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result = client_for(&server).fetch("rust").await;
        assert!(matches!(result, Err(SuggestError::Status(s)) if s.as_u16() == 503));
    }
}
