//! Per-ad flattening: one qualifying RawAd in, one AdRecord out.

use chrono::DateTime;
use thiserror::Error;
use tracing::warn;

use adpulse_common::{AdRecord, Platform, NA};
use graph_client::RawAd;

use crate::phone::extract_phone_number;

/// Graph API timestamps carry an embedded numeric offset,
/// e.g. `2024-05-01T12:34:56+0000`.
const CREATED_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("ad {ad_id}: unparseable created_time {value:?}")]
    Timestamp { ad_id: String, value: String },
}

/// Flatten one ad into an output record.
///
/// The caller guarantees the ad already passed the WhatsApp call-to-action
/// filter. Every absent nested path degrades to "N/A"; only a missing or
/// malformed `created_time` is fatal for the ad. Pure apart from a single
/// warning when the welcome-message JSON fails to parse.
pub fn normalize_ad(ad: &RawAd) -> Result<AdRecord, NormalizeError> {
    let ad_id = ad.id.clone().unwrap_or_else(na);
    let raw_time = ad.created_time.clone().unwrap_or_default();
    let created = DateTime::parse_from_str(&raw_time, CREATED_TIME_FORMAT).map_err(|_| {
        NormalizeError::Timestamp {
            ad_id: ad_id.clone(),
            value: raw_time.clone(),
        }
    })?;

    let link_data = ad.link_data();
    let platform = Platform::classify(ad.name.as_deref().unwrap_or_default());
    let adset = ad.adset.as_ref();
    let campaign = adset.and_then(|a| a.campaign.as_ref());

    let (thumbnail, thumbnail_url) = match ad.image_url() {
        Some(url) if !url.is_empty() => (extract_image_name(url), url.to_string()),
        _ => (na(), na()),
    };

    Ok(AdRecord {
        date: created.format("%d/%m/%Y").to_string(),
        time: created.format("%H:%M:%S").to_string(),
        phone_number: extract_phone_number(ad),
        campaign_id: campaign.and_then(|c| c.id.clone()).unwrap_or_else(na),
        adset_id: adset.and_then(|a| a.id.clone()).unwrap_or_else(na),
        thumbnail,
        thumbnail_url,
        body: link_data
            .and_then(|ld| ld.message.as_deref())
            .map(clean_body)
            .unwrap_or_else(na),
        platform_code: platform.code().to_string(),
        welcome_text: welcome_text(&ad_id, link_data.and_then(|ld| ld.page_welcome_message.as_deref())),
        campaign_name: campaign.and_then(|c| c.name.clone()).unwrap_or_else(na),
        adset_name: adset.and_then(|a| a.name.clone()).unwrap_or_else(na),
        ad_name: ad.name.clone().unwrap_or_else(na),
        platform: platform.label().to_string(),
    })
}

/// File name portion of the creative image URL, query string dropped.
pub fn extract_image_name(image_url: &str) -> String {
    if image_url.is_empty() {
        return na();
    }
    let path = image_url.split('?').next().unwrap_or(image_url);
    path.rsplit('/').next().unwrap_or(path).to_string()
}

/// Strip the literal bracket markers some creatives wrap copy in.
fn clean_body(message: &str) -> String {
    message.replace(['[', ']'], "").trim().to_string()
}

/// `page_welcome_message` arrives double-encoded as a JSON string. A parse
/// failure degrades this one field to "N/A"; the record still completes.
fn welcome_text(ad_id: &str, raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return na();
    };
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => value
            .pointer("/text_format/message/text")
            .and_then(|t| t.as_str())
            .map(str::to_string)
            .unwrap_or_else(na),
        Err(error) => {
            warn!(ad_id, %error, "Failed to parse page_welcome_message");
            na()
        }
    }
}

fn na() -> String {
    NA.to_string()
}
