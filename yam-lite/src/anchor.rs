use alloc::string::String;

use hashbrown::HashMap;
use log::trace;
use yam_lite_common::{ErrorType, Marker, Value, YamlError, YamlResult};

/// Values captured by `&name`, looked up by `*name`.
///
/// Lives for one parse call and is shared by every document of the stream.
/// Redefining a name overwrites the earlier value.
#[derive(Debug, Default)]
pub struct AnchorTable {
    anchors: HashMap<String, Value>,
}

impl AnchorTable {
    #[must_use]
    pub fn new() -> Self {
        AnchorTable::default()
    }

    pub fn define(&mut self, name: String, value: Value) {
        trace!("anchor &{name} = {value:?}");
        self.anchors.insert(name, value);
    }

    /// Returns a copy of the value stored under `name`.
    pub fn resolve(&self, name: &str, mark: Marker) -> YamlResult<Value> {
        self.anchors
            .get(name)
            .cloned()
            .ok_or_else(|| YamlError::new_parse(mark, ErrorType::UndefinedAnchor(name.into())))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}

#[cfg(test)]
mod test {
    use alloc::string::String;

    use yam_lite_common::{ErrorType, Marker, Value};

    use super::AnchorTable;

    #[test]
    fn define_resolve_overwrite() {
        let mut table = AnchorTable::new();
        assert!(table.is_empty());
        table.define(String::from("x"), Value::Integer(1));
        assert_eq!(table.resolve("x", Marker::default()), Ok(Value::Integer(1)));
        table.define(String::from("x"), Value::from("two"));
        assert_eq!(table.resolve("x", Marker::default()), Ok(Value::from("two")));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn undefined_anchor() {
        let table = AnchorTable::new();
        let err = table
            .resolve("missing", Marker::new(4, 1, 3))
            .expect_err("undefined");
        assert_eq!(
            err.kind(),
            Some(&ErrorType::UndefinedAnchor(String::from("missing")))
        );
        assert_eq!(err.mark(), Some(Marker::new(4, 1, 3)));
    }
}
