//! Per-account fetch with fault isolation, plus the fan-out/fan-in join.

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{error, info, warn};

use adpulse_common::AdRecord;
use graph_client::{GraphClient, RawAd};

use crate::normalize::normalize_ad;

/// Call-to-action type selecting WhatsApp message ads. The filter runs
/// before any normalization; no other subtype reaches the normalizer.
pub const WHATSAPP_CTA_TYPE: &str = "WHATSAPP_MESSAGE";

/// Anything that can list raw ads for an account.
/// Implemented by GraphClient; stubbed in tests.
#[async_trait]
pub trait AdsSource: Send + Sync {
    async fn list_ads(&self, account_id: &str) -> graph_client::Result<Vec<RawAd>>;
}

#[async_trait]
impl AdsSource for GraphClient {
    async fn list_ads(&self, account_id: &str) -> graph_client::Result<Vec<RawAd>> {
        self.fetch_account_ads(account_id).await
    }
}

/// Fetch one account and flatten its WhatsApp ads.
///
/// The unit of fault isolation: a request-level failure is logged and
/// degrades to an empty list so sibling accounts keep going. An ad with an
/// unparseable timestamp is skipped with a warning and the rest of the
/// account's batch survives.
pub async fn fetch_account(source: &dyn AdsSource, account_id: &str) -> Vec<AdRecord> {
    let ads = match source.list_ads(account_id).await {
        Ok(ads) => ads,
        Err(error) => {
            error!(account_id, %error, "Failed to fetch ads for account");
            return Vec::new();
        }
    };

    ads.iter()
        .filter(|ad| ad.cta_type() == Some(WHATSAPP_CTA_TYPE))
        .filter_map(|ad| match normalize_ad(ad) {
            Ok(record) => Some(record),
            Err(error) => {
                warn!(account_id, %error, "Skipping ad");
                None
            }
        })
        .collect()
}

/// Fan out one fetch per account over a shared source, wait for all of
/// them, and concatenate. Failures already degraded to empty lists inside
/// [`fetch_account`], so the join needs no failure handling of its own.
/// Cross-account ordering in the combined list is unspecified.
pub async fn collect_ads(source: &dyn AdsSource, account_ids: &[String]) -> Vec<AdRecord> {
    let fetches = account_ids.iter().map(|id| fetch_account(source, id));
    let per_account = join_all(fetches).await;

    let records: Vec<AdRecord> = per_account.into_iter().flatten().collect();
    info!(
        accounts = account_ids.len(),
        records = records.len(),
        "Aggregated WhatsApp ads"
    );
    records
}
