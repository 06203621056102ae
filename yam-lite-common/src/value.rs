use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::Index;

/// Ordered sequence of zero or more [`Value`]s
pub type Sequence = Vec<Value>;

/// Key-value pairing of [`Value`]s, ordered by the [`Value`] total order.
pub type Mapping = BTreeMap<Value, Value>;

static NULL: Value = Value::Null;

/// Dynamic value produced by the loader.
///
/// Values are totally ordered so they can serve as [`Mapping`] keys. Values
/// compare first by variant, in declaration order, then by payload:
///
/// * `Null < Bool < Integer < FloatingPoint < String < Sequence < Mapping`
/// * `false < true`, integers numerically
/// * floats by [`f64::total_cmp`], so `NaN == NaN` and `-0.0 < 0.0`
/// * strings bytewise, sequences and mappings lexicographically
///
/// Equality is `cmp == Equal`: `Integer(1)`, `FloatingPoint(1.0)` and
/// `String("1")` are three distinct keys.
#[derive(Debug, Default, Clone)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    FloatingPoint(f64),
    String(String),
    // block style like:
    //     - x
    //     - x
    // or flow style like `[x, x, x]`
    Sequence(Sequence),
    // block style like:
    //     x: Y
    //     a: B
    // or flow style like `{x: Y, a: B}`
    Mapping(Mapping),
}

impl Value {
    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Integer(_) => 2,
            Value::FloatingPoint(_) => 3,
            Value::String(_) => 4,
            Value::Sequence(_) => 5,
            Value::Mapping(_) => 6,
        }
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::FloatingPoint(_) => "float",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(x) => Some(*x),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(x) => Some(*x),
            _ => None,
        }
    }

    /// Floats as-is, integers widened.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::FloatingPoint(x) => Some(*x),
            Value::Integer(x) => Some(*x as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(x) => Some(x),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Value::Sequence(x) => Some(x),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(x) => Some(x),
            _ => None,
        }
    }

    /// Looks up a string key in a mapping.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping()
            .and_then(|map| map.get(&Value::String(key.to_string())))
    }

    #[must_use]
    pub fn is_non_empty_collection(&self) -> bool {
        match self {
            Value::Sequence(x) => !x.is_empty(),
            Value::Mapping(x) => !x.is_empty(),
            _ => false,
        }
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::FloatingPoint(a), Value::FloatingPoint(b)) => a.total_cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Sequence(a), Value::Sequence(b)) => a.cmp(b),
            (Value::Mapping(a), Value::Mapping(b)) => a.iter().cmp(b.iter()),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::FloatingPoint(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Sequence> for Value {
    fn from(value: Sequence) -> Self {
        Value::Sequence(value)
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Value::Mapping(value)
    }
}

impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }
}

impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, idx: usize) -> &Value {
        self.as_sequence()
            .and_then(|seq| seq.get(idx))
            .unwrap_or(&NULL)
    }
}
