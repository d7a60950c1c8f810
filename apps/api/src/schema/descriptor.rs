use anyhow::Result;
use chrono::{Datelike, Utc};
use serde::Serialize;
use serde_json::Value;

use super::{schema_for, FieldRule};
use crate::models::history::{HistoryItem, MONTHS};
use crate::models::others::Section;
use crate::models::profile::Profile;
use crate::store::Collection;

/// How many years back the year pickers reach.
pub const YEAR_SPAN: i32 = 50;

/// Everything a form page needs to render and pre-validate one resource.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDescriptor {
    pub resource: Collection,
    pub singleton: bool,
    pub fields: &'static [FieldRule],
    /// The entry appended by "Add More" (or the empty profile).
    pub blank_entry: Value,
    pub months: &'static [&'static str],
    pub years: Vec<String>,
}

pub fn describe(collection: Collection) -> Result<FormDescriptor> {
    Ok(FormDescriptor {
        resource: collection,
        singleton: collection.is_singleton(),
        fields: schema_for(collection).fields,
        blank_entry: blank_entry(collection)?,
        months: &MONTHS,
        years: year_options(Utc::now().year()),
    })
}

pub fn blank_entry(collection: Collection) -> Result<Value> {
    let value = match collection {
        Collection::Profile => serde_json::to_value(Profile::default())?,
        Collection::Experience | Collection::Education => {
            serde_json::to_value(HistoryItem::default())?
        }
        Collection::Others => serde_json::to_value(Section::default())?,
    };
    Ok(value)
}

/// `current_year` first, counting back.
pub fn year_options(current_year: i32) -> Vec<String> {
    (0..YEAR_SPAN)
        .map(|offset| (current_year - offset).to_string())
        .collect()
}
