//! Explicit response-shape descriptions.

use clickforge_error::{ContractError, ContractErrorKind};
use serde_json::{Map, Value, json};

/// Shape a model response must take.
///
/// Every property of an [`Schema::Object`] is required: it must be present and
/// non-null. Extra properties are ignored.
///
/// # Examples
///
/// ```
/// use clickforge_studio::Schema;
/// use serde_json::json;
///
/// let schema = Schema::object([
///     ("title", Schema::String),
///     ("tags", Schema::array_of(Schema::String)),
/// ]);
///
/// assert!(schema.validate(&json!({"title": "Hi", "tags": []})).is_ok());
/// assert!(schema.validate(&json!({"title": "Hi"})).is_err());
/// assert_eq!(schema.to_json()["required"], json!(["title", "tags"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schema {
    /// A JSON string
    String,
    /// A JSON array whose items all match the inner schema
    Array(Box<Schema>),
    /// A JSON object with the listed properties, in declaration order
    Object(Vec<(&'static str, Schema)>),
}

impl Schema {
    /// Array of `item`.
    pub fn array_of(item: Schema) -> Self {
        Self::Array(Box::new(item))
    }

    /// Object with the given required properties.
    pub fn object(properties: impl IntoIterator<Item = (&'static str, Schema)>) -> Self {
        Self::Object(properties.into_iter().collect())
    }

    /// Render as the OpenAPI subset Gemini accepts for `responseSchema`.
    pub fn to_json(&self) -> Value {
        match self {
            Self::String => json!({ "type": "STRING" }),
            Self::Array(item) => json!({ "type": "ARRAY", "items": item.to_json() }),
            Self::Object(properties) => {
                let names: Vec<&str> = properties.iter().map(|(name, _)| *name).collect();
                let mut rendered = Map::new();
                for (name, schema) in properties {
                    rendered.insert((*name).to_string(), schema.to_json());
                }
                json!({
                    "type": "OBJECT",
                    "properties": rendered,
                    "required": names,
                    "propertyOrdering": names,
                })
            }
        }
    }

    /// Check `value` against this shape, reporting the first violation.
    pub fn validate(&self, value: &Value) -> Result<(), ContractError> {
        self.check(value, "").map_err(ContractError::new)
    }

    fn check(&self, value: &Value, path: &str) -> Result<(), ContractErrorKind> {
        match self {
            Self::String => {
                if value.is_string() {
                    Ok(())
                } else {
                    Err(wrong_type(path, "a string"))
                }
            }
            Self::Array(item) => {
                let items = value.as_array().ok_or_else(|| wrong_type(path, "an array"))?;
                items
                    .iter()
                    .enumerate()
                    .try_for_each(|(index, entry)| item.check(entry, &format!("{path}[{index}]")))
            }
            Self::Object(properties) => {
                let object = value.as_object().ok_or_else(|| wrong_type(path, "an object"))?;
                for (name, schema) in properties {
                    let field_path = if path.is_empty() {
                        (*name).to_string()
                    } else {
                        format!("{path}.{name}")
                    };
                    match object.get(*name) {
                        None | Some(Value::Null) => {
                            return Err(ContractErrorKind::MissingField(field_path));
                        }
                        Some(field) => schema.check(field, &field_path)?,
                    }
                }
                Ok(())
            }
        }
    }
}

fn wrong_type(path: &str, expected: &str) -> ContractErrorKind {
    ContractErrorKind::WrongType {
        path: if path.is_empty() {
            "<root>".to_string()
        } else {
            path.to_string()
        },
        expected: expected.to_string(),
    }
}
