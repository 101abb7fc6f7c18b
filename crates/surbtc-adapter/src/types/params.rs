/*
[INPUT]:  Heterogeneous request parameters from endpoint wrappers
[OUTPUT]: Ordered parameter bag with query-string and JSON encoders
[POS]:    Data layer - single source for both wire encodings
[UPDATE]: When parameter value kinds or encoding rules change
*/

use serde::ser::{Serialize, SerializeMap, Serializer};
use url::form_urlencoded;

/// A single request parameter value.
///
/// `Null` entries are kept when the bag is serialized as a JSON body but
/// skipped by the query-string encoder, matching how the exchange expects
/// optional GET filters to simply be absent.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Map(Params),
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<Params> for ParamValue {
    fn from(value: Params) -> Self {
        ParamValue::Map(value)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => ParamValue::Null,
        }
    }
}

/// Insertion-ordered mapping of parameter names to values.
///
/// One bag feeds both encoders: `to_query_string` for GET requests and the
/// `Serialize` impl (via `serde_json`) for POST/PUT bodies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Vec<(String, ParamValue)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. `Option` arguments insert an explicit `Null` when
    /// absent; use [`Params::insert_opt`] to omit the key entirely.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.0.push((key.into(), value.into()));
        self
    }

    /// Insert the value only when present.
    pub fn insert_opt<T: Into<ParamValue>>(
        &mut self,
        key: impl Into<String>,
        value: Option<T>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, ParamValue)> {
        self.0.iter()
    }

    /// Encode as an application/x-www-form-urlencoded query string.
    ///
    /// Nulls are skipped, booleans become `1`/`0` and nested maps flatten to
    /// bracketed keys (`outer[inner]=v`).
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.0 {
            append_query_value(&mut serializer, key, value);
        }
        serializer.finish()
    }
}

fn append_query_value<T: form_urlencoded::Target>(
    serializer: &mut form_urlencoded::Serializer<'_, T>,
    key: &str,
    value: &ParamValue,
) {
    match value {
        ParamValue::Null => {}
        ParamValue::Bool(b) => {
            serializer.append_pair(key, if *b { "1" } else { "0" });
        }
        ParamValue::Int(i) => {
            serializer.append_pair(key, &i.to_string());
        }
        ParamValue::Float(f) => {
            serializer.append_pair(key, &f.to_string());
        }
        ParamValue::Str(s) => {
            serializer.append_pair(key, s);
        }
        ParamValue::Map(nested) => {
            for (sub_key, sub_value) in nested.iter() {
                append_query_value(serializer, &format!("{key}[{sub_key}]"), sub_value);
            }
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Null => serializer.serialize_unit(),
            ParamValue::Bool(b) => serializer.serialize_bool(*b),
            ParamValue::Int(i) => serializer.serialize_i64(*i),
            ParamValue::Float(f) => serializer.serialize_f64(*f),
            ParamValue::Str(s) => serializer.serialize_str(s),
            ParamValue::Map(nested) => nested.serialize(serializer),
        }
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
