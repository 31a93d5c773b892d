use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use crate::Result;
use crate::common::is_blank;

const EMPTY_COLUMNS_ERROR: &str = "source columns can't be null or empty";

/// A column descriptor from a job's `column` list. The effective source column
/// name is resolved with a strict priority: a non-blank `name` wins, then a
/// numeric `index` (rendered in decimal, fractional values truncated toward
/// zero), then a non-blank constant `value` prefixed with `val_`.
///
/// `index` is kept as a raw json value: its type is only validated when it is
/// actually consulted, so a descriptor with a usable `name` never rejects a
/// malformed `index`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredColumn {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub index: Option<Value>,
    #[serde(default)]
    pub value: Option<String>,
}

impl StructuredColumn {
    pub fn resolve_name(&self) -> Result<String> {
        if let Some(name) = &self.name {
            if !is_blank(name) {
                return Ok(name.clone());
            }
        }
        if let Some(index) = &self.index {
            let index = match index {
                Value::Number(n) => {
                    if let Some(i) = n.as_i64() {
                        i.to_string()
                    } else if let Some(u) = n.as_u64() {
                        u.to_string()
                    } else if let Some(f) = n.as_f64() {
                        (f.trunc() as i64).to_string()
                    } else {
                        return Err("invalid src col index".to_string());
                    }
                },
                _ => return Err("invalid src col index".to_string()),
            };
            return Ok(index);
        }
        if let Some(value) = &self.value {
            if !is_blank(value) {
                return Ok(format!("val_{}", value));
            }
        }
        Err("can't determine source column name".to_string())
    }
}

/// The job's declared column list, classified once at the input boundary from
/// the shape of its first element. Every element must share that shape, mixed
/// lists are rejected when the job document is parsed.
#[derive(Clone, Debug, PartialEq)]
pub enum JobColumnList {
    Named(Vec<String>),
    Structured(Vec<StructuredColumn>),
}

impl JobColumnList {
    pub fn from_value(value: &Value) -> Result<JobColumnList> {
        let columns = match value {
            Value::Array(columns) => columns,
            v => return Err(format!("column must be an array, found: {}", v)),
        };
        if columns.is_empty() {
            return Ok(JobColumnList::Named(Vec::new()));
        }
        match &columns[0] {
            Value::String(_) => {
                let mut names = Vec::with_capacity(columns.len());
                for column in columns {
                    match column {
                        Value::String(name) => names.push(name.clone()),
                        v => return Err(format!("mixed column shapes, expected a string but found: {}", v)),
                    }
                }
                Ok(JobColumnList::Named(names))
            },
            Value::Object(_) => {
                let mut specs = Vec::with_capacity(columns.len());
                for column in columns {
                    match column {
                        Value::Object(map) => specs.push(StructuredColumn {
                            name: get_string_field(map, "name")?,
                            index: map.get("index").filter(|v| !v.is_null()).cloned(),
                            value: get_string_field(map, "value")?,
                        }),
                        v => return Err(format!("mixed column shapes, expected an object but found: {}", v)),
                    }
                }
                Ok(JobColumnList::Structured(specs))
            },
            v => Err(format!("unsupported column shape: {}", v)),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            JobColumnList::Named(names) => names.len(),
            JobColumnList::Structured(specs) => specs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolves the ordered list of source column names, one per declared
    /// column. Order is preserved, nothing is deduplicated or sorted.
    pub fn resolve(&self) -> Result<Vec<String>> {
        if self.is_empty() {
            return Err(EMPTY_COLUMNS_ERROR.to_string());
        }
        match self {
            JobColumnList::Named(names) => {
                debug!("resolving {} plain string columns", names.len());
                Ok(names.clone())
            },
            JobColumnList::Structured(specs) => {
                debug!("resolving {} structured columns", specs.len());
                specs.iter().map(|spec| spec.resolve_name()).collect()
            },
        }
    }
}

fn get_string_field(map: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(v) => Err(format!("column {} must be a string, found: {}", key, v)),
    }
}

impl<'de> Deserialize<'de> for JobColumnList {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>
    {
        let value = Value::deserialize(deserializer)?;
        JobColumnList::from_value(&value).map_err(serde::de::Error::custom)
    }
}

impl Serialize for JobColumnList {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        match self {
            JobColumnList::Named(names) => names.serialize(serializer),
            JobColumnList::Structured(specs) => specs.serialize(serializer),
        }
    }
}
