use serde::{Deserialize, Serialize};

/// Input kinds a user can add to a free-form section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Short text.
    Text,
    /// Long text.
    Textarea,
    Date,
    /// Single choice.
    Radio,
    /// Multiple choice; the value is a comma-joined list of picked options.
    Checkbox,
}

impl FieldKind {
    pub const KEYS: [&'static str; 5] = ["text", "textarea", "date", "radio", "checkbox"];

    pub fn is_choice(&self) -> bool {
        matches!(self, FieldKind::Radio | FieldKind::Checkbox)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default = "default_show_label")]
    pub show_label: bool,
}

fn default_show_label() -> bool {
    true
}

/// A user-defined resume section: a heading and its ordered fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    pub heading: String,
    pub fields: Vec<Field>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_uses_type_key() {
        let field: Field = serde_json::from_value(json!({
            "id": "f1",
            "type": "checkbox",
            "label": "Languages",
            "value": "English,French",
            "options": ["English", "French", "German"],
            "showLabel": false
        }))
        .unwrap();
        assert_eq!(field.kind, FieldKind::Checkbox);
        assert!(!field.show_label);
        assert_eq!(field.options.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn test_show_label_defaults_true() {
        let field: Field = serde_json::from_value(json!({"id": "f2", "type": "text"})).unwrap();
        assert!(field.show_label);
        assert!(field.options.is_none());
    }

    #[test]
    fn test_choice_kinds() {
        assert!(FieldKind::Radio.is_choice());
        assert!(FieldKind::Checkbox.is_choice());
        assert!(!FieldKind::Date.is_choice());
    }

    #[test]
    fn test_new_section_document_shape() {
        assert_eq!(
            serde_json::to_value(Section::default()).unwrap(),
            json!({"heading": "", "fields": []})
        );
    }
}
