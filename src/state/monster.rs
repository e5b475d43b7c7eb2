//! Monster store slice: add-form values, validation errors, and the most
//! recently created record.
//!
//! DESIGN
//! ======
//! The add page never keeps its own copy of these values. It reads the
//! latest `MonsterState` snapshot from context and writes through
//! `actions::MonsterActions`, so this slice is the single source of truth.

#[cfg(test)]
#[path = "monster_test.rs"]
mod monster_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Editable fields of the add-Monster form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    Name,
    Citizenship,
    BirthDate,
}

impl FieldKey {
    /// Render order on the add page.
    pub const ALL: [FieldKey; 3] = [FieldKey::Name, FieldKey::Citizenship, FieldKey::BirthDate];

    /// Wire key, also used as the input's DOM id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Citizenship => "citizenship",
            Self::BirthDate => "birthDate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Citizenship => "Citizenship",
            Self::BirthDate => "Birth Date",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == raw)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current values of the add-Monster form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterForm {
    pub name: String,
    pub citizenship: String,
    pub birth_date: String,
}

impl MonsterForm {
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Citizenship => &self.citizenship,
            FieldKey::BirthDate => &self.birth_date,
        }
    }

    pub fn set(&mut self, key: FieldKey, value: String) {
        match key {
            FieldKey::Name => self.name = value,
            FieldKey::Citizenship => self.citizenship = value,
            FieldKey::BirthDate => self.birth_date = value,
        }
    }
}

/// Field-level validation messages keyed by wire field name.
///
/// Keys are plain strings: the remote validator may report keys beyond the
/// three editable fields and those still block submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message for `key`, or `None` when absent or empty.
    pub fn message(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str).filter(|m| !m.is_empty())
    }

    pub fn set(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.0.insert(key.into(), message.into());
    }

    pub fn clear(&mut self, key: &str) {
        self.0.remove(key);
    }

    /// True iff at least one entry carries a non-empty message.
    pub fn has_values(&self) -> bool {
        self.0.values().any(|m| !m.is_empty())
    }

    /// First non-empty message in key order.
    pub fn first_message(&self) -> Option<&str> {
        self.0.values().map(String::as_str).find(|m| !m.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormErrors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Record identifier as issued by the backend: numeric or opaque string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl ItemId {
    /// Interpret a route segment, preferring the numeric form.
    pub fn from_param(raw: &str) -> Self {
        raw.parse::<u64>().map_or_else(|_| Self::Text(raw.to_owned()), Self::Number)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

/// A stored Monster record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub citizenship: String,
    #[serde(default)]
    pub birth_date: String,
}

/// Store slice shared by the Monster pages via context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MonsterState {
    pub add_form: MonsterForm,
    pub add_form_errors: FormErrors,
    pub current_item: Option<Monster>,
}

impl MonsterState {
    /// Restore the add form and its errors to their initial, empty state.
    pub fn reset_add_form(&mut self) {
        self.add_form = MonsterForm::default();
        self.add_form_errors = FormErrors::default();
    }
}
