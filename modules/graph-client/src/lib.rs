pub mod error;
pub mod types;

pub use error::{GraphError, Result};
pub use types::{AdsResponse, RawAd};

use types::DebugTokenResponse;

const BASE_URL: &str = "https://graph.facebook.com/v20.0";

/// Nested field selection for the `/ads` edge. Fixed: the pipeline reads
/// exactly these paths.
const AD_FIELDS: &str = "id,name,created_time,creative{id,object_story_spec{link_data{call_to_action{type,value},message,page_welcome_message,link}},image_url},adset{id,name,campaign{id,name}},insights{clicks,impressions,reach,spend}";

/// One bounded page per account; paging cursors are never followed.
const PAGE_LIMIT: u32 = 1000;

pub struct GraphClient {
    client: reqwest::Client,
    access_token: String,
    app_id: String,
    app_secret: String,
}

impl GraphClient {
    pub fn new(access_token: String, app_id: String, app_secret: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            access_token,
            app_id,
            app_secret,
        }
    }

    /// Check the configured user token against `/debug_token`, authenticated
    /// with the `app_id|app_secret` app token.
    pub async fn validate_token(&self) -> Result<bool> {
        let url = format!("{BASE_URL}/debug_token");
        let app_token = format!("{}|{}", self.app_id, self.app_secret);
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("input_token", self.access_token.as_str()),
                ("access_token", app_token.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GraphError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let parsed: DebugTokenResponse = resp.json().await?;
        tracing::info!(is_valid = parsed.data.is_valid, "Access token validated");
        Ok(parsed.data.is_valid)
    }

    /// Fetch one bounded page of ads for an account, with the nested
    /// creative/adset/campaign/insight fields expanded.
    pub async fn fetch_account_ads(&self, account_id: &str) -> Result<Vec<RawAd>> {
        let url = format!("{BASE_URL}/{account_id}/ads");
        let limit = PAGE_LIMIT.to_string();
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("access_token", self.access_token.as_str()),
                ("fields", AD_FIELDS),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GraphError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let page: AdsResponse = resp.json().await?;
        tracing::debug!(account_id, count = page.data.len(), "Fetched ads page");
        Ok(page.data)
    }
}

/// Graph API error bodies look like `{"error":{"message":"..."}}`. Falls
/// back to the raw body when the shape doesn't match.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_extracts_graph_shape() {
        let body = r#"{"error":{"message":"Invalid OAuth access token.","code":190}}"#;
        assert_eq!(api_error_message(body), "Invalid OAuth access token.");
    }

    #[test]
    fn test_api_error_message_falls_back_to_raw_body() {
        assert_eq!(api_error_message("gateway timeout"), "gateway timeout");
    }
}
