use serde_json::json;
use uuid::Uuid;

use crate::models::others::{Field, FieldKind, Section};
use crate::store::Document;

/// Edits one free-form section. Every mutation marks the section dirty;
/// `take_patch` yields the partial update to send and clears the mark.
#[derive(Debug, Clone)]
pub struct OtherSectionEditor {
    id: String,
    section: Section,
    heading_dirty: bool,
    fields_dirty: bool,
}

/// Partial changes to one field. `None` leaves the attribute untouched.
#[derive(Debug, Clone, Default)]
pub struct FieldUpdate {
    pub label: Option<String>,
    pub value: Option<String>,
    pub show_label: Option<bool>,
}

impl OtherSectionEditor {
    pub fn new(id: impl Into<String>, section: Section) -> Self {
        OtherSectionEditor {
            id: id.into(),
            section,
            heading_dirty: false,
            fields_dirty: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn section(&self) -> &Section {
        &self.section
    }

    pub fn set_heading(&mut self, heading: impl Into<String>) {
        self.section.heading = heading.into();
        self.heading_dirty = true;
    }

    /// Appends a field of `kind` and returns its id. Choice kinds start with
    /// one option.
    pub fn add_field(&mut self, kind: FieldKind) -> String {
        let id = Uuid::new_v4().simple().to_string();
        self.section.fields.push(Field {
            id: id.clone(),
            kind,
            label: String::new(),
            value: String::new(),
            options: kind.is_choice().then(|| vec!["Option 1".to_string()]),
            show_label: true,
        });
        self.fields_dirty = true;
        id
    }

    pub fn update_field(&mut self, field_id: &str, update: FieldUpdate) -> bool {
        let Some(field) = self.field_mut(field_id) else {
            return false;
        };
        if let Some(label) = update.label {
            field.label = label;
        }
        if let Some(value) = update.value {
            field.value = value;
        }
        if let Some(show_label) = update.show_label {
            field.show_label = show_label;
        }
        self.fields_dirty = true;
        true
    }

    pub fn remove_field(&mut self, field_id: &str) -> bool {
        let before = self.section.fields.len();
        self.section.fields.retain(|f| f.id != field_id);
        let removed = self.section.fields.len() != before;
        self.fields_dirty |= removed;
        removed
    }

    /// Adds `Option N+1` to a choice field.
    pub fn add_option(&mut self, field_id: &str) -> bool {
        let Some(options) = self.field_mut(field_id).and_then(|f| f.options.as_mut()) else {
            return false;
        };
        options.push(format!("Option {}", options.len() + 1));
        self.fields_dirty = true;
        true
    }

    pub fn update_option(&mut self, field_id: &str, index: usize, text: impl Into<String>) -> bool {
        let Some(slot) = self
            .field_mut(field_id)
            .and_then(|f| f.options.as_mut())
            .and_then(|o| o.get_mut(index))
        else {
            return false;
        };
        *slot = text.into();
        self.fields_dirty = true;
        true
    }

    /// Picks `option` on a choice field. Single choice replaces the value;
    /// multiple choice toggles it within the comma-joined list.
    pub fn toggle_choice(&mut self, field_id: &str, option: &str, checked: bool) -> bool {
        let Some(field) = self.field_mut(field_id) else {
            return false;
        };
        match field.kind {
            FieldKind::Radio => {
                if checked {
                    field.value = option.to_string();
                } else if field.value == option {
                    field.value.clear();
                }
            }
            FieldKind::Checkbox => {
                let mut picked: Vec<&str> = field
                    .value
                    .split(',')
                    .filter(|v| !v.is_empty() && *v != option)
                    .collect();
                if checked {
                    picked.push(option);
                }
                field.value = picked.join(",");
            }
            _ => return false,
        }
        self.fields_dirty = true;
        true
    }

    pub fn is_dirty(&self) -> bool {
        self.heading_dirty || self.fields_dirty
    }

    /// The `PUT /api/others` body for pending changes, or `None` when clean.
    pub fn take_patch(&mut self) -> Option<Document> {
        if !self.is_dirty() {
            return None;
        }
        let mut patch = Document::new();
        patch.insert("id".to_string(), json!(self.id));
        if self.heading_dirty {
            patch.insert("heading".to_string(), json!(self.section.heading));
        }
        if self.fields_dirty {
            patch.insert("fields".to_string(), json!(self.section.fields));
        }
        self.heading_dirty = false;
        self.fields_dirty = false;
        Some(patch)
    }

    fn field_mut(&mut self, field_id: &str) -> Option<&mut Field> {
        self.section.fields.iter_mut().find(|f| f.id == field_id)
    }
}
