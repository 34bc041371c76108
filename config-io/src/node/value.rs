//! The tagged value union stored in a [`ConfigNode`].

use std::fmt;

use super::ConfigNode;

/// A leaf value of a configuration document.
///
/// Unsigned integers that do not fit in an `i64` are stored as `Float`.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// `null` in JSON, `~`/`null`/empty in YAML.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(String),
}

impl Scalar {
    /// Returns whether the scalar counts as "set" for directive and marker checks.
    ///
    /// `null`, `false`, zero and the empty string are falsy; everything else is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::String(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

/// Any value in a configuration document: a scalar, a nested node, or a sequence.
///
/// # Examples
///
/// ```
/// use config_io::{ConfigNode, Value};
///
/// let mut node = ConfigNode::new();
/// node.insert("lr", vec![Value::from(0.1), Value::from(0.01)]);
/// node.insert("lr_expand", true);
///
/// assert!(node.get("lr").unwrap().as_sequence().is_some());
/// assert!(node.get("lr_expand").unwrap().is_truthy());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A leaf value.
    Scalar(Scalar),
    /// A nested mapping.
    Node(ConfigNode),
    /// An ordered list of values.
    Sequence(Vec<Value>),
}

impl Value {
    /// The `null` value.
    pub const NULL: Self = Self::Scalar(Scalar::Null);

    /// Returns whether the value counts as "set".
    ///
    /// Scalars follow [`Scalar::is_truthy`]; nodes and sequences are truthy when non-empty.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Scalar(s) => s.is_truthy(),
            Self::Node(n) => !n.is_empty(),
            Self::Sequence(items) => !items.is_empty(),
        }
    }

    /// Returns true for the `null` scalar.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::Null))
    }

    /// Short name of the value's kind, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(Scalar::Null) => "null",
            Self::Scalar(Scalar::Bool(_)) => "bool",
            Self::Scalar(Scalar::Int(_) | Scalar::Float(_)) => "number",
            Self::Scalar(Scalar::String(_)) => "string",
            Self::Node(_) => "mapping",
            Self::Sequence(_) => "sequence",
        }
    }

    /// Borrows the string payload, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean payload, if any.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer payload, if any.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Scalar(Scalar::Int(i)) => Some(*i),
            _ => None,
        }
    }

    /// Returns the numeric payload as a float, converting integers.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Scalar(Scalar::Int(i)) => Some(*i as f64),
            Self::Scalar(Scalar::Float(f)) => Some(*f),
            _ => None,
        }
    }

    /// Borrows the nested node, if any.
    #[must_use]
    pub fn as_node(&self) -> Option<&ConfigNode> {
        match self {
            Self::Node(n) => Some(n),
            _ => None,
        }
    }

    /// Mutably borrows the nested node, if any.
    pub fn as_node_mut(&mut self) -> Option<&mut ConfigNode> {
        match self {
            Self::Node(n) => Some(n),
            _ => None,
        }
    }

    /// Borrows the sequence items, if any.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Consumes the value, returning the nested node if it is one.
    #[must_use]
    pub fn into_node(self) -> Option<ConfigNode> {
        match self {
            Self::Node(n) => Some(n),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::NULL
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

impl From<ConfigNode> for Value {
    fn from(n: ConfigNode) -> Self {
        Self::Node(n)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Sequence(items)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Scalar(Scalar::Int(i))
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Scalar(Scalar::Int(i64::from(i)))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Scalar(Scalar::Float(f))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Scalar(Scalar::String(s))
    }
}

impl From<serde_json::Value> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::NULL,
            serde_json::Value::Bool(b) => Self::from(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::from(i)
                } else {
                    Self::from(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Self::from(s),
            serde_json::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Node(
                map.into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_yaml::Value> for Value {
    fn from(v: serde_yaml::Value) -> Self {
        match v {
            serde_yaml::Value::Null => Self::NULL,
            serde_yaml::Value::Bool(b) => Self::from(b),
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::from(i)
                } else {
                    Self::from(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_yaml::Value::String(s) => Self::from(s),
            serde_yaml::Value::Sequence(items) => {
                Self::Sequence(items.into_iter().map(Self::from).collect())
            }
            serde_yaml::Value::Mapping(map) => Self::Node(
                map.into_iter()
                    .map(|(k, v)| (yaml_key_to_string(k), Self::from(v)))
                    .collect(),
            ),
            serde_yaml::Value::Tagged(tagged) => Self::from(tagged.value),
        }
    }
}

fn yaml_key_to_string(key: serde_yaml::Value) -> String {
    match Value::from(key) {
        Value::Scalar(s) => s.to_string(),
        other => format!("{other:?}"),
    }
}
