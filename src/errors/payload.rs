use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered field name -> string value mapping attached to an error for
/// logging and serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticPayload {
    entries: Vec<(&'static str, String)>,
}

impl DiagnosticPayload {
    pub const STATUS_CODE: &'static str = "statusCode";
    pub const ERROR_CODE: &'static str = "errorCode";
    pub const USER_MESSAGE: &'static str = "userMessage";

    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::with_capacity(3),
        }
    }

    pub(crate) fn insert(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }
}

impl Serialize for DiagnosticPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
