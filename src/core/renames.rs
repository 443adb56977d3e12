use crate::core::{Field, Move};
use crate::error::RenameError;
use error_stack::{IntoReport, Report, Result};
use serde_json::Value;

/// Rename instructions
///
/// - [`Renames::Nothing`] keeps every field
/// - a [`Move`] is used as-is
/// - a literal starting with a dot (`.`) sets `extname`
/// - any other literal sets `basename`
/// - a [`Spec`] renames the fields it names
/// - a sequence performs all renames in it, in order
#[derive(Debug, Clone, Default)]
pub enum Renames {
    #[default]
    Nothing,
    Move(Move),
    Literal(String),
    Spec(Spec),
    Sequence(Vec<Renames>),
}

/// Path properties mapped to their new values
///
/// Keys are kept as given and only checked when the `Spec` is compiled, so a
/// spec can carry names that are not path properties.
/// Inserting a key that is already present replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spec {
    entries: Vec<(String, FieldValue)>,
}

/// New value of a field in a [`Spec`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Replace the field
    Literal(String),
    /// Add to the current value of the field
    Affix(Affix),
}

/// Text to prepend and/or append to a field
///
/// Empty strings are treated the same as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Affix {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl Affix {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            suffix: Some(suffix.into()),
        }
    }

    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            suffix: None,
        }
    }

    pub fn suffix(suffix: impl Into<String>) -> Self {
        Self {
            prefix: None,
            suffix: Some(suffix.into()),
        }
    }
}

impl Spec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Spec::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Entries in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Spec
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut spec = Spec::new();
        for (k, v) in iter {
            spec.insert(k, v);
        }
        spec
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl From<Affix> for FieldValue {
    fn from(affix: Affix) -> Self {
        Self::Affix(affix)
    }
}

impl From<&str> for Renames {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for Renames {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl From<Move> for Renames {
    fn from(m: Move) -> Self {
        Self::Move(m)
    }
}

impl From<Spec> for Renames {
    fn from(spec: Spec) -> Self {
        Self::Spec(spec)
    }
}

impl<T: Into<Renames>> From<Vec<T>> for Renames {
    fn from(renames: Vec<T>) -> Self {
        Self::Sequence(renames.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Renames>> From<Option<T>> for Renames {
    fn from(renames: Option<T>) -> Self {
        match renames {
            Some(r) => r.into(),
            None => Self::Nothing,
        }
    }
}

impl Renames {
    /// Parse rename instructions from JSON text
    ///
    /// Accepts the same shapes as `Renames::try_from(&serde_json::Value)`.
    pub fn from_json(json: &str) -> Result<Self, RenameError> {
        let value: Value = serde_json::from_str(json).into_report().map_err(|e| {
            e.change_context(RenameError::InvalidInstruction)
                .attach_printable(format!("cannot parse renames as json: {json}"))
        })?;
        Self::try_from(&value)
    }
}

/// Dynamic rename instructions
///
/// `null` is nothing, a string is a literal, an array is a sequence and an
/// object is a spec. In a spec, each value is a string, `null` (ignored) or an
/// object with optional `prefix` and `suffix` strings.
/// Numbers and booleans are not instructions.
impl TryFrom<&Value> for Renames {
    type Error = Report<RenameError>;

    fn try_from(value: &Value) -> std::result::Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Renames::Nothing),
            Value::String(s) => Ok(Renames::Literal(s.clone())),
            Value::Array(values) => values
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    Renames::try_from(v)
                        .map_err(|e| e.attach_printable(format!("in renames at index {i}")))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Renames::Sequence),
            Value::Object(map) => {
                // unknown keys fail before any value is looked at
                if let Some(key) = map.keys().find(|k| Field::try_from(k.as_str()).is_err()) {
                    return Err(Report::new(RenameError::InvalidField(key.clone())));
                }
                let mut spec = Spec::new();
                for (key, v) in map {
                    spec.insert(key.as_str(), field_value_from_json(key, v)?);
                }
                Ok(Renames::Spec(spec))
            }
            Value::Bool(_) | Value::Number(_) => Err(Report::new(RenameError::InvalidInstruction)
                .attach_printable(format!("got `{value}`"))),
        }
    }
}

fn field_value_from_json(key: &str, value: &Value) -> Result<FieldValue, RenameError> {
    match value {
        Value::String(s) => Ok(FieldValue::Literal(s.clone())),
        Value::Null => Ok(FieldValue::Affix(Affix::default())),
        Value::Object(map) => {
            let part = |name: &str| match map.get(name) {
                None | Some(Value::Null) => Ok(None),
                Some(Value::String(s)) => Ok(Some(s.clone())),
                Some(other) => Err(Report::new(RenameError::InvalidFieldValue(key.to_string()))
                    .attach_printable(format!("`{name}` must be a string, got `{other}`"))),
            };
            Ok(FieldValue::Affix(Affix {
                prefix: part("prefix")?,
                suffix: part("suffix")?,
            }))
        }
        _ => Err(Report::new(RenameError::InvalidFieldValue(key.to_string()))
            .attach_printable(format!("got `{value}`"))),
    }
}
