//! Insertion-ordered JSON objects.
//!
//! `serde_json::Map` sorts its keys, which would put schema properties in
//! alphabetical order. Output order is part of the format, so objects whose
//! keys come from data are serialized from a `Vec` of pairs instead.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A JSON object that serializes its entries in the order they were pushed.
#[derive(Debug, Clone, Default)]
pub(crate) struct OrderedObject<'a, V> {
    entries: Vec<(&'a str, V)>,
}

impl<'a, V> OrderedObject<'a, V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, key: &'a str, value: V) {
        self.entries.push((key, value));
    }
}

impl<V: Serialize> Serialize for OrderedObject<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_in_push_order() {
        let mut obj = OrderedObject::with_capacity(3);
        obj.push("zeta", 1);
        obj.push("alpha", 2);
        obj.push("mid", 3);

        assert_eq!(
            serde_json::to_string(&obj).unwrap(),
            r#"{"zeta":1,"alpha":2,"mid":3}"#
        );
    }

    #[test]
    fn test_empty_object() {
        let obj: OrderedObject<'_, bool> = OrderedObject::default();
        assert_eq!(serde_json::to_string(&obj).unwrap(), "{}");
    }
}
