//! Listing-response normalization.
//!
//! The listing endpoint has returned three body shapes over time: a bare
//! array, `{"items": [...]}`, and `{"data": [...]}`. Shapes are checked
//! explicitly in that order; the first whose container matches wins, and
//! anything else normalizes to an empty listing.

use serde_json::Value;

use crate::types::TemplateSummary;

/// Normalize a listing response body into an ordered sequence of summaries.
///
/// Entries inside a matched container that fail to deserialize are dropped
/// with a warning; the rest of the listing is preserved in order.
pub fn normalize_template_listing(body: Value) -> Vec<TemplateSummary> {
    let entries = match body {
        Value::Array(entries) => entries,
        Value::Object(mut fields) => {
            match take_array(&mut fields, "items").or_else(|| take_array(&mut fields, "data")) {
                Some(entries) => entries,
                None => return Vec::new(),
            }
        }
        _ => return Vec::new(),
    };

    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<TemplateSummary>(entry) {
            Ok(summary) => Some(summary),
            Err(err) => {
                log::warn!("Dropping malformed template listing entry: {err}");
                None
            }
        })
        .collect()
}

fn take_array(fields: &mut serde_json::Map<String, Value>, key: &str) -> Option<Vec<Value>> {
    match fields.remove(key) {
        Some(Value::Array(entries)) => Some(entries),
        _ => None,
    }
}
