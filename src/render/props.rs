//! Prop bags: the keyword-argument boundary between callers and templates.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A bag of loosely typed props.
///
/// Callers fill the bag with whatever they have; each template decodes it into
/// its own typed props record, applying documented defaults for anything
/// missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropBag {
    values: Map<String, Value>,
}

impl PropBag {
    /// An empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Insert or replace a prop.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a raw prop value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Prop names.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Decode into a typed props record.
    ///
    /// Missing keys take the record's defaults and unknown keys are ignored.
    /// A key whose value does not fit its field is dropped with a debug
    /// diagnostic so the remaining props still apply.
    #[must_use]
    pub fn decode<P>(&self) -> P
    where
        P: DeserializeOwned + Default,
    {
        if let Ok(props) = serde_json::from_value(Value::Object(self.values.clone())) {
            return props;
        }

        let mut accepted = Map::new();
        for (key, value) in &self.values {
            let mut candidate = accepted.clone();
            candidate.insert(key.clone(), value.clone());
            match serde_json::from_value::<P>(Value::Object(candidate)) {
                Ok(_) => {
                    accepted.insert(key.clone(), value.clone());
                }
                Err(e) => {
                    tracing::debug!(
                        name: "render.prop.malformed",
                        prop = %key,
                        error = %e,
                        "Dropping malformed prop"
                    );
                }
            }
        }

        serde_json::from_value(Value::Object(accepted)).unwrap_or_default()
    }
}

impl From<Map<String, Value>> for PropBag {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

impl From<Value> for PropBag {
    /// Objects become bags; any other JSON value yields an empty bag.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(values) => Self { values },
            _ => Self::default(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for PropBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
