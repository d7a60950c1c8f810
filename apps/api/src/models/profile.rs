use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Platforms offered by the social-media picker. `Other` opens a free-text
/// custom name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Github,
    Linkedin,
    Facebook,
    Twitter,
    Instagram,
    #[default]
    Other,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Github,
        Platform::Linkedin,
        Platform::Facebook,
        Platform::Twitter,
        Platform::Instagram,
        Platform::Other,
    ];

    pub const KEYS: [&'static str; 6] = [
        "github",
        "linkedin",
        "facebook",
        "twitter",
        "instagram",
        "other",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaEntry {
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub icon: Platform,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_icon: Option<Value>,
}

impl Default for SocialMediaEntry {
    /// A freshly appended row: platform `other` with an empty custom name.
    fn default() -> Self {
        SocialMediaEntry {
            platform: String::new(),
            icon: Platform::Other,
            url: String::new(),
            custom_name: Some(String::new()),
            custom_icon: None,
        }
    }
}

/// The single profile document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub country_code: String,
    pub phone: String,
    pub email: String,
    pub professional_summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    pub social_media: Vec<SocialMediaEntry>,
    pub skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_reads_camel_case_document() {
        let profile: Profile = serde_json::from_value(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "countryCode": "+44",
            "phone": "2071234567",
            "socialMedia": [{"platform": "GitHub", "icon": "github", "url": "https://github.com/ada"}],
            "skills": ["Analysis"]
        }))
        .unwrap();

        assert_eq!(profile.first_name, "Ada");
        assert_eq!(profile.country_code, "+44");
        assert_eq!(profile.social_media[0].icon, Platform::Github);
        assert!(profile.social_media[0].custom_name.is_none());
        assert!(profile.address.is_empty());
    }

    #[test]
    fn test_blank_social_entry_starts_as_other() {
        let entry = SocialMediaEntry::default();
        assert_eq!(entry.icon, Platform::Other);
        assert_eq!(entry.custom_name.as_deref(), Some(""));
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({"platform": "", "icon": "other", "url": "", "customName": ""})
        );
    }

    #[test]
    fn test_platform_keys_match_serde_names() {
        for (platform, key) in Platform::ALL.iter().zip(Platform::KEYS) {
            assert_eq!(serde_json::to_value(platform).unwrap(), json!(key));
        }
    }
}
