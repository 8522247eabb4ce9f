use serde::Serialize;

/// Placeholder for any field whose source value is absent or unparseable.
pub const NA: &str = "N/A";

/// Delivery channel an ad belongs to, inferred from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Facebook,
    Instagram,
    Whatsapp,
}

impl Platform {
    /// Short code used in the exported `platform_code` column.
    pub fn code(&self) -> &'static str {
        match self {
            Platform::Facebook => "Fb_Ads",
            Platform::Instagram => "IG_Ads",
            Platform::Whatsapp => "WA_Ads",
        }
    }

    /// Enumerant name used in the exported `platform` column.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Facebook => "FACEBOOK",
            Platform::Instagram => "INSTAGRAM",
            Platform::Whatsapp => "WHATSAPP",
        }
    }

    /// Classify an ad by its name: WhatsApp keywords first, then Instagram,
    /// else Facebook. Plain substring containment over the lowercased name,
    /// so "wa" matches inside words ("wax-sale" classifies as WhatsApp) —
    /// a known limitation of the keyword heuristic.
    pub fn classify(ad_name: &str) -> Platform {
        let name = ad_name.to_lowercase();
        if name.contains("whatsapp") || name.contains("wa") {
            Platform::Whatsapp
        } else if name.contains("instagram") || name.contains("ig") {
            Platform::Instagram
        } else {
            Platform::Facebook
        }
    }
}

/// One flat output row, built once per qualifying ad. Terminal: nothing
/// mutates a record after construction. Field order is the CSV column
/// order. Absent source fields hold the "N/A" sentinel.
#[derive(Debug, Clone, Serialize)]
pub struct AdRecord {
    pub date: String,
    pub time: String,
    pub phone_number: String,
    pub campaign_id: String,
    pub adset_id: String,
    pub thumbnail: String,
    pub thumbnail_url: String,
    pub body: String,
    pub platform_code: String,
    pub welcome_text: String,
    pub campaign_name: String,
    pub adset_name: String,
    pub ad_name: String,
    pub platform: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_whatsapp_keyword() {
        assert_eq!(Platform::classify("Promo WA Launch"), Platform::Whatsapp);
        assert_eq!(Platform::classify("whatsapp direct"), Platform::Whatsapp);
    }

    #[test]
    fn test_classify_instagram_keyword() {
        assert_eq!(Platform::classify("IG Story Push"), Platform::Instagram);
    }

    #[test]
    fn test_classify_defaults_to_facebook() {
        assert_eq!(Platform::classify("Generic Campaign"), Platform::Facebook);
    }

    #[test]
    fn test_classify_whatsapp_wins_over_instagram() {
        // "wa" is checked before "ig"
        assert_eq!(Platform::classify("WA + IG combo"), Platform::Whatsapp);
    }

    #[test]
    fn test_classify_substring_limitation() {
        // Documented heuristic limitation: "wa" inside a word still matches.
        assert_eq!(Platform::classify("wax-sale"), Platform::Whatsapp);
    }

    #[test]
    fn test_platform_codes_and_labels() {
        assert_eq!(Platform::Whatsapp.code(), "WA_Ads");
        assert_eq!(Platform::Instagram.code(), "IG_Ads");
        assert_eq!(Platform::Facebook.code(), "Fb_Ads");
        assert_eq!(Platform::Whatsapp.label(), "WHATSAPP");
    }
}
