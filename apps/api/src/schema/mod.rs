//! Resource schemas: one declarative rule table per collection, shared by
//! server-side validation and the form descriptor served to the pages.
//!
//! Paths address nested JSON with `.` and mark list items with `[]`:
//! `startDate.month`, `socialMedia[].url`.

pub mod descriptor;
pub mod registry;

use std::fmt;

use serde::Serialize;
use serde_json::Value;

pub use registry::schema_for;

use crate::store::{Collection, Document};

/// A single check applied to a field value.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "rule", content = "value", rename_all = "snake_case")]
pub enum Check {
    /// String with at least N characters.
    MinLen(usize),
    /// String with at most N characters.
    MaxLen(usize),
    /// String made only of ASCII digits.
    Digits,
    Email,
    Url,
    /// Array with at least N items.
    MinItems(usize),
    Boolean,
    /// Any string, including empty.
    Text,
    /// Array whose items are all strings.
    StringList,
    Object,
    List,
    /// String equal to one of the listed values.
    OneOf(&'static [&'static str]),
}

impl Check {
    pub fn passes(&self, value: &Value) -> bool {
        match self {
            Check::MinLen(n) => value.as_str().is_some_and(|s| s.chars().count() >= *n),
            Check::MaxLen(n) => value.as_str().is_some_and(|s| s.chars().count() <= *n),
            Check::Digits => value
                .as_str()
                .is_some_and(|s| s.chars().all(|c| c.is_ascii_digit())),
            Check::Email => value.as_str().is_some_and(is_email),
            Check::Url => value.as_str().is_some_and(|s| validator::validate_url(s)),
            Check::MinItems(n) => value.as_array().is_some_and(|a| a.len() >= *n),
            Check::Boolean => value.is_boolean(),
            Check::Text => value.is_string(),
            Check::StringList => value
                .as_array()
                .is_some_and(|a| a.iter().all(Value::is_string)),
            Check::Object => value.is_object(),
            Check::List => value.is_array(),
            Check::OneOf(options) => value.as_str().is_some_and(|s| options.contains(&s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Rule {
    #[serde(flatten)]
    pub check: Check,
    pub message: &'static str,
}

/// Rules for one field path. Optional fields skip their rules when absent or null;
/// a missing required field reports its first rule's message.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldRule {
    pub path: &'static str,
    pub optional: bool,
    pub rules: &'static [Rule],
}

impl FieldRule {
    /// The document key this rule hangs off, e.g. `socialMedia` for `socialMedia[].url`.
    pub fn root_key(&self) -> &'static str {
        let end = self
            .path
            .find(|c| c == '.' || c == '[')
            .unwrap_or(self.path.len());
        &self.path[..end]
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResourceSchema {
    pub collection: Collection,
    pub fields: &'static [FieldRule],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every field-level failure found in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl ResourceSchema {
    /// Validates a whole document, collecting every failure.
    pub fn validate(&self, doc: &Document) -> Result<(), ValidationErrors> {
        self.run(doc, |_| true)
    }

    /// Validates only the fields whose top-level key is present in `doc`.
    /// Used for partial updates.
    pub fn validate_partial(&self, doc: &Document) -> Result<(), ValidationErrors> {
        self.run(doc, |rule| doc.contains_key(rule.root_key()))
    }

    fn run(
        &self,
        doc: &Document,
        applies: impl Fn(&FieldRule) -> bool,
    ) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let root = Value::Object(doc.clone());

        for field in self.fields.iter().filter(|f| applies(f)) {
            for (path, value) in resolve(&root, field.path) {
                if let Some(message) = first_failure(field, value) {
                    errors.push(FieldError::new(path, message));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A syntactically valid address whose domain has a top-level part.
fn is_email(s: &str) -> bool {
    validator::validate_email(s)
        && s
            .rsplit_once('@')
            .is_some_and(|(_, domain)| domain.contains('.') && !domain.ends_with('.'))
}

fn first_failure(field: &FieldRule, value: Option<&Value>) -> Option<&'static str> {
    match value {
        None | Some(Value::Null) if field.optional => None,
        None | Some(Value::Null) => Some(
            field
                .rules
                .first()
                .map(|r| r.message)
                .unwrap_or("Required"),
        ),
        Some(value) => field
            .rules
            .iter()
            .find(|r| !r.check.passes(value))
            .map(|r| r.message),
    }
}

/// Expands a rule path into concrete `(path, value)` pairs. Each `[]` segment
/// fans out over the array items; a missing array yields no pairs.
fn resolve<'a>(root: &'a Value, path: &str) -> Vec<(String, Option<&'a Value>)> {
    let mut current: Vec<(String, Option<&'a Value>)> = vec![(String::new(), Some(root))];

    for segment in path.split('.') {
        let (key, fan_out) = match segment.strip_suffix("[]") {
            Some(key) => (key, true),
            None => (segment, false),
        };

        let mut next = Vec::new();
        for (prefix, value) in current {
            let child = value.and_then(|v| v.get(key));
            let child_path = if prefix.is_empty() {
                key.to_string()
            } else {
                format!("{prefix}.{key}")
            };

            if fan_out {
                if let Some(items) = child.and_then(Value::as_array) {
                    for (i, item) in items.iter().enumerate() {
                        next.push((format!("{child_path}.{i}"), Some(item)));
                    }
                }
            } else {
                next.push((child_path, child));
            }
        }
        current = next;
    }

    current
}
