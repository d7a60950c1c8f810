use super::ListEditor;
use crate::models::profile::{Platform, SocialMediaEntry};

impl ListEditor<SocialMediaEntry> {
    /// Picks a platform for one row. `Other` clears any inherited custom icon
    /// and opens an empty custom name; a named platform drops the custom name.
    pub fn select_platform(&mut self, index: usize, platform: Platform) -> bool {
        let Some(entry) = self.get_mut(index) else {
            return false;
        };
        entry.icon = platform;
        if platform == Platform::Other {
            entry.custom_icon = None;
            entry.custom_name = Some(String::new());
        } else {
            entry.custom_name = None;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn linked(icon: Platform) -> SocialMediaEntry {
        SocialMediaEntry {
            platform: "Profile".to_string(),
            icon,
            url: "https://example.com/ada".to_string(),
            custom_name: Some("Mastodon".to_string()),
            custom_icon: Some(json!({"name": "mastodon.svg"})),
        }
    }

    #[test]
    fn test_selecting_other_resets_custom_fields() {
        let mut list = ListEditor::new(vec![linked(Platform::Github)]);
        assert!(list.select_platform(0, Platform::Other));

        let entry = &list.entries()[0];
        assert_eq!(entry.icon, Platform::Other);
        assert!(entry.custom_icon.is_none());
        assert_eq!(entry.custom_name.as_deref(), Some(""));
        assert_eq!(entry.url, "https://example.com/ada");
    }

    #[test]
    fn test_selecting_named_platform_drops_custom_name() {
        let mut list = ListEditor::new(vec![linked(Platform::Other)]);
        assert!(list.select_platform(0, Platform::Linkedin));
        assert!(list.entries()[0].custom_name.is_none());
    }

    #[test]
    fn test_append_select_remove() {
        let mut list: ListEditor<SocialMediaEntry> = ListEditor::default();
        let i = list.append_blank();
        assert_eq!(list.entries()[i].icon, Platform::Other);
        assert!(!list.select_platform(3, Platform::Twitter));

        assert!(list.remove(i).is_some());
        assert!(list.is_empty());
    }
}
