//! Form model: the editing operations behind the resume pages, kept apart
//! from transport so the same rules run before submission and on the server.

pub mod others;
pub mod skills;
pub mod social;

use serde::Serialize;

use crate::models::history::HistoryItem;
use crate::schema::{schema_for, FieldError, ValidationErrors};
use crate::store::{Collection, Document};

pub use others::OtherSectionEditor;
pub use skills::SkillSet;

/// An appendable, removable list of entries (experience, education, social media).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListEditor<T> {
    entries: Vec<T>,
}

impl<T: Default> ListEditor<T> {
    pub fn new(entries: Vec<T>) -> Self {
        ListEditor { entries }
    }

    /// Appends a blank entry and returns its index.
    pub fn append_blank(&mut self) -> usize {
        self.entries.push(T::default());
        self.entries.len() - 1
    }

    /// Out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.entries.get_mut(index)
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<T> {
        self.entries
    }
}

impl ListEditor<HistoryItem> {
    /// Toggles the "currently here" checkbox of one entry. Other entries are
    /// left alone; several entries may be current at once.
    pub fn set_current(&mut self, index: usize, current: bool) -> bool {
        match self.entries.get_mut(index) {
            Some(item) => {
                item.set_current(current);
                true
            }
            None => false,
        }
    }
}

/// Serialises form state and runs it through the collection's schema. On
/// failure nothing is submitted and the field messages are returned.
pub fn prepare_submission<T: Serialize>(
    collection: Collection,
    state: &T,
) -> Result<Document, ValidationErrors> {
    let doc = match serde_json::to_value(state) {
        Ok(serde_json::Value::Object(doc)) => doc,
        _ => {
            let mut errors = ValidationErrors::default();
            errors.push(FieldError::new("", "Form state is not an object"));
            return Err(errors);
        }
    };
    schema_for(collection).validate(&doc)?;
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::history::{MonthYear, Tenure};

    #[test]
    fn test_append_and_remove() {
        let mut list: ListEditor<HistoryItem> = ListEditor::default();
        assert_eq!(list.append_blank(), 0);
        assert_eq!(list.append_blank(), 1);
        list.get_mut(1).unwrap().title = "Second".to_string();

        let removed = list.remove(0).unwrap();
        assert!(removed.title.is_empty());
        assert_eq!(list.len(), 1);
        assert_eq!(list.entries()[0].title, "Second");
        assert!(list.remove(5).is_none());
    }

    #[test]
    fn test_current_is_not_exclusive() {
        let mut list = ListEditor::new(vec![HistoryItem::default(), HistoryItem::default()]);
        assert!(list.set_current(0, true));
        assert!(list.set_current(1, true));
        assert!(list.entries().iter().all(HistoryItem::is_current));
        assert!(!list.set_current(2, true));
    }

    #[test]
    fn test_blank_entry_is_blocked_from_submission() {
        let errors =
            prepare_submission(Collection::Education, &HistoryItem::default()).unwrap_err();
        assert_eq!(errors.message_for("title"), Some("Degree is required"));
        assert_eq!(errors.message_for("startDate.month"), Some("Start month is required"));
    }

    #[test]
    fn test_filled_entry_submits() {
        let item = HistoryItem {
            title: "BSc".to_string(),
            organization: "State University".to_string(),
            start_date: MonthYear::new("August", "2019"),
            tenure: Tenure::Ended(MonthYear::new("May", "2023")),
            ..Default::default()
        };
        let doc = prepare_submission(Collection::Education, &item).unwrap();
        assert_eq!(doc["endDate"]["year"], "2023");
        assert_eq!(doc["current"], false);
    }
}
