//! Property editor → semantic value type table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::SemanticType;

/// Editors every platform ships with.
///
/// Text editors resolve to `Html` when they produce markup: the rich text
/// and markdown converters replace the plain string ones.
const BUILTIN_EDITORS: &[(&str, SemanticType)] = &[
    ("textbox", SemanticType::Text),
    ("textarea", SemanticType::Text),
    ("email", SemanticType::Text),
    ("dropdown", SemanticType::Text),
    ("radiobuttons", SemanticType::Text),
    ("richtext", SemanticType::Html),
    ("markdown", SemanticType::Html),
    ("integer", SemanticType::Integer),
    ("decimal", SemanticType::Decimal),
    ("slider", SemanticType::Decimal),
    ("truefalse", SemanticType::Boolean),
    ("datepicker", SemanticType::Date),
    ("datetime", SemanticType::Date),
    ("contentpicker", SemanticType::Content),
    ("mediapicker", SemanticType::Media),
    ("tags", SemanticType::Json),
    ("json", SemanticType::Json),
];

/// Case-insensitive editor alias table.
///
/// `Default` holds the built-in editors; `empty()` starts from nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditorMap {
    entries: IndexMap<String, SemanticType>,
}

impl Default for EditorMap {
    fn default() -> Self {
        let mut map = Self::empty();
        for (alias, ty) in BUILTIN_EDITORS {
            map.insert(alias, ty.clone());
        }
        map
    }
}

impl EditorMap {
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Parse a JSON object of `editor alias → value type`.
    ///
    /// Keys are normalized, so the result can be layered with `merge`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: IndexMap<String, SemanticType> = serde_json::from_str(json)?;
        let mut map = Self::empty();
        map.extend(raw);
        Ok(map)
    }

    /// Insert or replace an editor mapping. Returns the previous type.
    pub fn insert(&mut self, alias: &str, ty: SemanticType) -> Option<SemanticType> {
        self.entries.insert(alias.to_ascii_lowercase(), ty)
    }

    /// Layer another table on top of this one; its entries win.
    pub fn merge(&mut self, other: EditorMap) {
        self.entries.extend(other.entries);
    }

    pub fn resolve(&self, alias: &str) -> Option<&SemanticType> {
        self.entries.get(&alias.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SemanticType)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: AsRef<str>> Extend<(K, SemanticType)> for EditorMap {
    fn extend<I: IntoIterator<Item = (K, SemanticType)>>(&mut self, iter: I) {
        for (alias, ty) in iter {
            self.insert(alias.as_ref(), ty);
        }
    }
}

