//! Contact-number recovery from inconsistent creative structures.
//!
//! An ordered chain of independent strategies, tried until one yields a
//! number. First hit wins; the strategies never combine.

use std::sync::LazyLock;

use regex::Regex;

use adpulse_common::NA;
use graph_client::RawAd;

/// wa.me / api.whatsapp.com deeplinks, scheme- and www-optional.
static DEEPLINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://)?(?:www\.)?(?:wa\.me/|api\.whatsapp\.com/send\?phone=)(\d+)")
        .unwrap()
});

/// Brazilian-style phone token: optional +55 country code, optional (NN)
/// area code, optional leading mobile 9, two four-digit groups.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:\+?55\s?)?(?:\(?\d{2}\)?\s?)?(?:9\s?)?\d{4}[-.\s]?\d{4}\b").unwrap()
});

const STRATEGIES: &[fn(&RawAd) -> Option<String>] =
    &[from_cta_value, from_deeplink, from_message_text];

/// Resolve a contact number for an ad, or the "N/A" sentinel.
/// Absence is a normal, representable outcome — never an error.
pub fn extract_phone_number(ad: &RawAd) -> String {
    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(ad))
        .unwrap_or_else(|| NA.to_string())
}

/// Strategy 1: explicit `fromNumberId` on the call-to-action value,
/// returned verbatim.
fn from_cta_value(ad: &RawAd) -> Option<String> {
    let cta = ad.link_data()?.call_to_action.as_ref()?;
    cta.value.as_ref()?.from_number_id.clone()
}

/// Strategy 2: digit sequence captured from a messaging deeplink in the
/// link field.
fn from_deeplink(ad: &RawAd) -> Option<String> {
    let link = ad.link_data()?.link.as_deref()?;
    let caps = DEEPLINK_RE.captures(link)?;
    Some(caps[1].to_string())
}

/// Strategy 3: a phone-shaped token in the free-text message, with all
/// separator characters stripped.
fn from_message_text(ad: &RawAd) -> Option<String> {
    let message = ad.link_data()?.message.as_deref()?;
    let token = PHONE_RE.find(message)?.as_str();
    Some(
        token
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ad_with_link_data(link_data: serde_json::Value) -> RawAd {
        serde_json::from_value(json!({
            "id": "1",
            "name": "test ad",
            "creative": { "object_story_spec": { "link_data": link_data } }
        }))
        .unwrap()
    }

    #[test]
    fn test_explicit_number_id_wins_over_link_and_message() {
        let ad = ad_with_link_data(json!({
            "call_to_action": {
                "type": "WHATSAPP_MESSAGE",
                "value": { "fromNumberId": "123456" }
            },
            "link": "https://wa.me/5511888888888",
            "message": "Fale conosco: (11) 99999-9999"
        }));
        assert_eq!(extract_phone_number(&ad), "123456");
    }

    #[test]
    fn test_wa_me_deeplink() {
        let ad = ad_with_link_data(json!({
            "link": "https://wa.me/5511999999999"
        }));
        assert_eq!(extract_phone_number(&ad), "5511999999999");
    }

    #[test]
    fn test_deeplink_scheme_and_www_optional() {
        let bare = ad_with_link_data(json!({ "link": "wa.me/5511999999999" }));
        assert_eq!(extract_phone_number(&bare), "5511999999999");

        let www = ad_with_link_data(json!({
            "link": "https://www.api.whatsapp.com/send?phone=5511988887777"
        }));
        assert_eq!(extract_phone_number(&www), "5511988887777");
    }

    #[test]
    fn test_message_phone_token_separators_stripped() {
        let ad = ad_with_link_data(json!({
            "message": "Promo! Chame agora (11) 99999-9999 e garanta."
        }));
        assert_eq!(extract_phone_number(&ad), "11999999999");
    }

    #[test]
    fn test_message_token_with_dot_separator() {
        let ad = ad_with_link_data(json!({
            "message": "ligue 3456.7890"
        }));
        assert_eq!(extract_phone_number(&ad), "34567890");
    }

    #[test]
    fn test_no_signal_yields_sentinel() {
        let ad = ad_with_link_data(json!({
            "message": "no contact info in here"
        }));
        assert_eq!(extract_phone_number(&ad), NA);
    }

    #[test]
    fn test_missing_creative_yields_sentinel() {
        let ad: RawAd = serde_json::from_value(json!({ "id": "1" })).unwrap();
        assert_eq!(extract_phone_number(&ad), NA);
    }
}
