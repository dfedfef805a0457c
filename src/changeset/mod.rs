pub mod fields;

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Map, Value};

pub use fields::{CustomerField, LoanField};

/// fixed country-code prefix carried by stored phone numbers
pub const COUNTRY_CODE_PREFIX: &str = "+91";

/// a tracked field path of an entity
pub trait TrackedField: Copy + Ord + fmt::Debug {
    /// wire name of the field in api payloads
    fn api_name(&self) -> &'static str;
}

/// an entity whose edit form supports change detection
pub trait Snapshot {
    type Field: TrackedField + 'static;

    /// the closed set of fields eligible for change detection; excludes
    /// server-managed fields (identifiers, audit timestamps)
    fn tracked_fields() -> &'static [Self::Field];

    /// value of one tracked field
    fn field_value(&self, field: Self::Field) -> FieldValue;
}

/// one field's value, tagged with its comparison rule
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// free text; trimmed, blank and absent are equivalent
    Text(Option<String>),
    /// phone number; the stored side may carry the country-code prefix
    Phone(Option<String>),
    Number(Option<Decimal>),
    Flag(bool),
    Date(Option<NaiveDate>),
    /// nested block or list, compared by canonical structure as a whole
    Composite(Value),
}

fn normalized_text(s: &Option<String>) -> Option<&str> {
    s.as_deref().map(str::trim).filter(|t| !t.is_empty())
}

impl FieldValue {
    /// true when the live value is unchanged from the stored one
    ///
    /// `self` is the live form side, `original` the persisted side; the
    /// distinction matters only for phone numbers, where the prefix strip
    /// applies to the stored side
    fn unchanged_from(&self, original: &FieldValue) -> bool {
        match (original, self) {
            (FieldValue::Text(o), FieldValue::Text(c)) => {
                normalized_text(o) == normalized_text(c)
            }
            (FieldValue::Phone(o), FieldValue::Phone(c)) => {
                let stored = normalized_text(o)
                    .map(|t| t.strip_prefix(COUNTRY_CODE_PREFIX).unwrap_or(t));
                stored == normalized_text(c)
            }
            (FieldValue::Number(o), FieldValue::Number(c)) => o == c,
            (FieldValue::Flag(o), FieldValue::Flag(c)) => o == c,
            (FieldValue::Date(o), FieldValue::Date(c)) => o == c,
            (FieldValue::Composite(o), FieldValue::Composite(c)) => o == c,
            // a field changing representation counts as changed
            _ => false,
        }
    }

    /// wire value recorded for a changed field
    fn to_value(&self) -> Value {
        match self {
            FieldValue::Text(s) | FieldValue::Phone(s) => s
                .clone()
                .map(Value::String)
                .unwrap_or(Value::Null),
            FieldValue::Number(n) => n
                .and_then(|n| serde_json::to_value(n).ok())
                .unwrap_or(Value::Null),
            FieldValue::Flag(b) => Value::Bool(*b),
            FieldValue::Date(d) => d
                .and_then(|d| serde_json::to_value(d).ok())
                .unwrap_or(Value::Null),
            FieldValue::Composite(v) => v.clone(),
        }
    }
}

/// the minimal set of modified fields for a partial update
///
/// advisory only: the server remains the source of truth for what is
/// persisted; this exists to minimize the PATCH payload and to gate the
/// submit control
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeSet<F: TrackedField> {
    changed: BTreeMap<F, Value>,
}

impl<F: TrackedField> ChangeSet<F> {
    /// submit gate: true iff any tracked field differs
    pub fn has_changes(&self) -> bool {
        !self.changed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
    }

    pub fn contains(&self, field: F) -> bool {
        self.changed.contains_key(&field)
    }

    /// new wire value of a changed field
    pub fn new_value(&self, field: F) -> Option<&Value> {
        self.changed.get(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.changed.keys().copied()
    }

    /// PATCH request body with wire field names
    pub fn into_payload(self) -> Map<String, Value> {
        self.changed
            .into_iter()
            .map(|(field, value)| (field.api_name().to_string(), value))
            .collect()
    }
}

/// diff a live form snapshot against the persisted original
///
/// a field appears in the result iff its normalized current value differs
/// from its normalized original value; composites are compared whole, so one
/// changed sub-field marks the entire block changed
pub fn compute_changes<S: Snapshot>(
    original: &S,
    current: &S,
    tracked: &[S::Field],
) -> ChangeSet<S::Field> {
    let mut changed = BTreeMap::new();

    for &field in tracked {
        let stored = original.field_value(field);
        let live = current.field_value(field);
        if !live.unchanged_from(&stored) {
            changed.insert(field, live.to_value());
        }
    }

    ChangeSet { changed }
}
