use serde::Deserialize;

/// One ad from the `/{account_id}/ads` edge, with the nested
/// creative/adset/campaign expansions the field selection requests.
/// Every nested level is optional; the API omits whatever a given ad
/// doesn't carry.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAd {
    pub id: Option<String>,
    pub name: Option<String>,
    pub created_time: Option<String>,
    pub creative: Option<Creative>,
    pub adset: Option<AdSet>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Creative {
    pub id: Option<String>,
    pub object_story_spec: Option<ObjectStorySpec>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectStorySpec {
    pub link_data: Option<LinkData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkData {
    pub call_to_action: Option<CallToAction>,
    pub message: Option<String>,
    /// Welcome flow, double-encoded by the API as a JSON string.
    pub page_welcome_message: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallToAction {
    #[serde(rename = "type")]
    pub cta_type: Option<String>,
    pub value: Option<CtaValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CtaValue {
    #[serde(rename = "fromNumberId")]
    pub from_number_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdSet {
    pub id: Option<String>,
    pub name: Option<String>,
    pub campaign: Option<Campaign>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Campaign {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Envelope for the `/ads` edge. Paging cursors are ignored; one bounded
/// page per account is the whole contract.
#[derive(Debug, Clone, Deserialize)]
pub struct AdsResponse {
    #[serde(default)]
    pub data: Vec<RawAd>,
}

/// Response shape of `/debug_token`.
#[derive(Debug, Clone, Deserialize)]
pub struct DebugTokenResponse {
    pub data: TokenData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenData {
    pub is_valid: bool,
}

impl RawAd {
    /// The link_data block, if every level of the creative expansion is
    /// present.
    pub fn link_data(&self) -> Option<&LinkData> {
        self.creative
            .as_ref()?
            .object_story_spec
            .as_ref()?
            .link_data
            .as_ref()
    }

    /// The call-to-action type string, e.g. "WHATSAPP_MESSAGE".
    pub fn cta_type(&self) -> Option<&str> {
        self.link_data()?.call_to_action.as_ref()?.cta_type.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.creative.as_ref()?.image_url.as_deref()
    }
}
