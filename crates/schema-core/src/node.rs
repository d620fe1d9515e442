//! Tagged schema nodes and their parser.
//!
//! Parsing applies the node resolution order exactly once:
//!
//! 1. a node that is not a mapping is [`SchemaNode::Null`]
//! 2. a recognized `type` wins
//! 3. otherwise `enum`
//! 4. otherwise `anyOf`
//! 5. otherwise [`SchemaNode::Null`]
//!
//! An unrecognized `type` (a name such as `"null"` or `"number"`, or any
//! non-string value such as a list of names) is not an error; it falls
//! through to steps 3-5.

use crate::error::{display_path, SchemaError};
use serde_json::{Map, Value};

/// Lower bound used when an integer node has no `minimum`.
pub const DEFAULT_INTEGER_MINIMUM: i64 = 0;

/// Upper bound used when an integer node has no `maximum`.
pub const DEFAULT_INTEGER_MAXIMUM: i64 = 100;

/// One node of a parsed schema tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// Absent, non-mapping or unrecognized node. Always generates null.
    Null,

    /// `type: string`, optionally constrained by `pattern`
    String { pattern: Option<String> },

    /// `type: integer` with inclusive bounds
    Integer { minimum: i64, maximum: i64 },

    /// `type: boolean`
    Boolean,

    /// `type: array`; a missing or non-mapping `items` becomes [`SchemaNode::Null`]
    Array { items: Box<SchemaNode> },

    /// `type: object`
    Object(ObjectSchema),

    /// `enum` without a recognized `type`; never empty
    Enum(Vec<Value>),

    /// `anyOf` without a recognized `type` or `enum`; never empty
    AnyOf(Vec<SchemaNode>),
}

impl SchemaNode {
    /// Parse a raw schema value into a node.
    pub fn parse(value: &Value) -> Result<Self, SchemaError> {
        Self::parse_at(value, "")
    }

    pub(crate) fn parse_at(value: &Value, path: &str) -> Result<Self, SchemaError> {
        let Some(map) = value.as_object() else {
            return Ok(SchemaNode::Null);
        };

        if let Some(Value::String(type_name)) = map.get("type") {
            if let Some(node) = Self::parse_typed(type_name, map, path)? {
                return Ok(node);
            }
        }

        if let Some(candidates) = map.get("enum") {
            let candidates = candidates
                .as_array()
                .ok_or_else(|| SchemaError::invalid(path, "enum", "a sequence"))?;
            if candidates.is_empty() {
                return Ok(SchemaNode::Null);
            }
            return Ok(SchemaNode::Enum(candidates.clone()));
        }

        if let Some(alternatives) = map.get("anyOf") {
            let alternatives = alternatives
                .as_array()
                .ok_or_else(|| SchemaError::invalid(path, "anyOf", "a sequence"))?;
            let nodes = alternatives
                .iter()
                .enumerate()
                .map(|(i, alternative)| Self::parse_at(alternative, &format!("{path}/anyOf/{i}")))
                .collect::<Result<Vec<_>, _>>()?;
            if nodes.is_empty() {
                return Ok(SchemaNode::Null);
            }
            return Ok(SchemaNode::AnyOf(nodes));
        }

        Ok(SchemaNode::Null)
    }

    /// Parse a node whose `type` is a single name. Returns `None` for names
    /// this generator does not know, so the caller can fall through.
    fn parse_typed(
        type_name: &str,
        map: &Map<String, Value>,
        path: &str,
    ) -> Result<Option<Self>, SchemaError> {
        let node = match type_name {
            "string" => {
                let pattern = match map.get("pattern") {
                    None => None,
                    Some(Value::String(pattern)) => Some(pattern.clone()),
                    Some(_) => return Err(SchemaError::invalid(path, "pattern", "a string")),
                };
                SchemaNode::String { pattern }
            }
            "integer" => {
                let minimum = integer_keyword(map, "minimum", path)?.unwrap_or(DEFAULT_INTEGER_MINIMUM);
                let maximum = integer_keyword(map, "maximum", path)?.unwrap_or(DEFAULT_INTEGER_MAXIMUM);
                if minimum > maximum {
                    return Err(SchemaError::InvalidRange {
                        path: display_path(path),
                        minimum,
                        maximum,
                    });
                }
                SchemaNode::Integer { minimum, maximum }
            }
            "boolean" => SchemaNode::Boolean,
            "array" => {
                let items = match map.get("items") {
                    None => SchemaNode::Null,
                    Some(items) => Self::parse_at(items, &format!("{path}/items"))?,
                };
                SchemaNode::Array {
                    items: Box::new(items),
                }
            }
            "object" => SchemaNode::Object(ObjectSchema::parse_map(map, path)?),
            _ => return Ok(None),
        };
        Ok(Some(node))
    }

    /// Short name of the node shape, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            SchemaNode::Null => "null",
            SchemaNode::String { pattern: None } => "string",
            SchemaNode::String { pattern: Some(_) } => "pattern string",
            SchemaNode::Integer { .. } => "integer",
            SchemaNode::Boolean => "boolean",
            SchemaNode::Array { .. } => "array",
            SchemaNode::Object(_) => "object",
            SchemaNode::Enum(_) => "enum",
            SchemaNode::AnyOf(_) => "anyOf",
        }
    }
}

fn integer_keyword(
    map: &Map<String, Value>,
    keyword: &'static str,
    path: &str,
) -> Result<Option<i64>, SchemaError> {
    match map.get(keyword) {
        None => Ok(None),
        Some(value) => value
            .as_i64()
            .map(Some)
            .ok_or_else(|| SchemaError::invalid(path, keyword, "an integer")),
    }
}

/// An object-shaped schema: declared properties plus the `required` list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
    /// Declared properties in document order
    pub properties: Vec<PropertySchema>,

    /// Names listed under `required`. Informational only.
    pub required: Vec<String>,
}

impl ObjectSchema {
    /// Parse an object schema from a raw mapping value.
    pub fn parse(value: &Value) -> Result<Self, SchemaError> {
        let map = value.as_object().ok_or_else(|| SchemaError::NotAMapping {
            path: display_path(""),
        })?;
        Self::parse_map(map, "")
    }

    pub(crate) fn parse_map(map: &Map<String, Value>, path: &str) -> Result<Self, SchemaError> {
        let properties = match map.get("properties") {
            None => Vec::new(),
            Some(Value::Object(properties)) => properties
                .iter()
                .map(|(name, property)| {
                    PropertySchema::parse_at(name, property, &format!("{path}/properties/{name}"))
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(SchemaError::invalid(path, "properties", "a mapping")),
        };

        let required = match map.get("required") {
            None => Vec::new(),
            Some(Value::Array(names)) => names
                .iter()
                .map(|name| {
                    name.as_str().map(str::to_string).ok_or_else(|| {
                        SchemaError::invalid(path, "required", "a sequence of strings")
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => {
                return Err(SchemaError::invalid(
                    path,
                    "required",
                    "a sequence of strings",
                ))
            }
        };

        Ok(Self {
            properties,
            required,
        })
    }

    /// Get a property by name.
    pub fn property(&self, name: &str) -> Option<&PropertySchema> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Property names in declaration order.
    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name.as_str()).collect()
    }

    /// Whether `name` is listed under `required`.
    ///
    /// Generation never consults this; every declared property is generated.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

/// A declared property of an object schema.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySchema {
    /// Property name
    pub name: String,

    /// Literal `default`, present whenever the key is, even if it is null
    pub default: Option<Value>,

    /// Parsed schema of the property value
    pub node: SchemaNode,
}

impl PropertySchema {
    fn parse_at(name: &str, value: &Value, path: &str) -> Result<Self, SchemaError> {
        let default = value
            .as_object()
            .and_then(|map| map.get("default"))
            .cloned();
        Ok(Self {
            name: name.to_string(),
            default,
            node: SchemaNode::parse_at(value, path)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_mapping_is_null() {
        assert_eq!(SchemaNode::parse(&Value::Null).unwrap(), SchemaNode::Null);
        assert_eq!(SchemaNode::parse(&json!("string")).unwrap(), SchemaNode::Null);
        assert_eq!(SchemaNode::parse(&json!({})).unwrap(), SchemaNode::Null);
    }

    #[test]
    fn test_integer_defaults() {
        let node = SchemaNode::parse(&json!({"type": "integer"})).unwrap();
        assert_eq!(
            node,
            SchemaNode::Integer {
                minimum: 0,
                maximum: 100
            }
        );

        let node = SchemaNode::parse(&json!({"type": "integer", "minimum": 10, "maximum": 20}))
            .unwrap();
        assert_eq!(
            node,
            SchemaNode::Integer {
                minimum: 10,
                maximum: 20
            }
        );
    }

    #[test]
    fn test_type_wins_over_enum() {
        let node = SchemaNode::parse(&json!({"type": "boolean", "enum": ["a", "b"]})).unwrap();
        assert_eq!(node, SchemaNode::Boolean);
    }

    #[test]
    fn test_unknown_type_falls_through_to_enum() {
        let node = SchemaNode::parse(&json!({"type": "number", "enum": [1, 2]})).unwrap();
        assert_eq!(node, SchemaNode::Enum(vec![json!(1), json!(2)]));
    }

    #[test]
    fn test_null_type_falls_through_to_null() {
        let node = SchemaNode::parse(&json!({"type": "null"})).unwrap();
        assert_eq!(node, SchemaNode::Null);
    }

    #[test]
    fn test_enum_wins_over_any_of() {
        let node = SchemaNode::parse(&json!({
            "enum": ["view"],
            "anyOf": [{"type": "string"}]
        }))
        .unwrap();
        assert_eq!(node, SchemaNode::Enum(vec![json!("view")]));
    }

    #[test]
    fn test_any_of_branches() {
        let node = SchemaNode::parse(&json!({
            "anyOf": [{"type": "null"}, {"type": "integer"}, "bogus"]
        }))
        .unwrap();
        assert_eq!(
            node,
            SchemaNode::AnyOf(vec![
                SchemaNode::Null,
                SchemaNode::Integer {
                    minimum: 0,
                    maximum: 100
                },
                SchemaNode::Null,
            ])
        );
    }

    #[test]
    fn test_empty_enum_and_any_of_are_null() {
        assert_eq!(SchemaNode::parse(&json!({"enum": []})).unwrap(), SchemaNode::Null);
        assert_eq!(SchemaNode::parse(&json!({"anyOf": []})).unwrap(), SchemaNode::Null);
    }

    #[test]
    fn test_array_without_items() {
        let node = SchemaNode::parse(&json!({"type": "array"})).unwrap();
        assert_eq!(
            node,
            SchemaNode::Array {
                items: Box::new(SchemaNode::Null)
            }
        );
    }

    #[test]
    fn test_ref_only_items_parse_to_null() {
        let node = SchemaNode::parse(&json!({"type": "array", "items": {"$ref": "#attendees"}}))
            .unwrap();
        assert_eq!(
            node,
            SchemaNode::Array {
                items: Box::new(SchemaNode::Null)
            }
        );
    }

    #[test]
    fn test_type_list_falls_through() {
        let node = SchemaNode::parse(&json!({"type": ["string"], "enum": ["a"]})).unwrap();
        assert_eq!(node, SchemaNode::Enum(vec![json!("a")]));

        let node = SchemaNode::parse(&json!({"type": ["string", "null"]})).unwrap();
        assert_eq!(node, SchemaNode::Null);

        let node = SchemaNode::parse(&json!({
            "type": ["integer"],
            "anyOf": [{"type": "boolean"}]
        }))
        .unwrap();
        assert_eq!(node, SchemaNode::AnyOf(vec![SchemaNode::Boolean]));

        assert_eq!(SchemaNode::parse(&json!({"type": 7})).unwrap(), SchemaNode::Null);
    }

    #[test]
    fn test_tuple_items_parse_to_null() {
        let node = SchemaNode::parse(&json!({"type": "array", "items": [{"type": "integer"}]}))
            .unwrap();
        assert_eq!(
            node,
            SchemaNode::Array {
                items: Box::new(SchemaNode::Null)
            }
        );

        let node = SchemaNode::parse(&json!({"type": "array", "items": 3})).unwrap();
        assert_eq!(
            node,
            SchemaNode::Array {
                items: Box::new(SchemaNode::Null)
            }
        );
    }

    #[test]
    fn test_pattern_string() {
        let node = SchemaNode::parse(&json!({"type": "string", "pattern": "^a+$"})).unwrap();
        assert_eq!(
            node,
            SchemaNode::String {
                pattern: Some("^a+$".to_string())
            }
        );
        assert_eq!(node.kind(), "pattern string");
    }

    #[test]
    fn test_invalid_range() {
        let err = SchemaNode::parse(&json!({"type": "integer", "minimum": 5, "maximum": 1}))
            .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::InvalidRange {
                minimum: 5,
                maximum: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_keyword_reports_path() {
        let err = SchemaNode::parse(&json!({
            "type": "object",
            "properties": {
                "form": {
                    "type": "object",
                    "properties": { "id": { "type": "integer", "minimum": "zero" } }
                }
            }
        }))
        .unwrap_err();
        match err {
            SchemaError::InvalidKeyword { path, keyword, .. } => {
                assert_eq!(path, "/properties/form/properties/id");
                assert_eq!(keyword, "minimum");
            }
            other => panic!("Expected InvalidKeyword, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_kind_keywords() {
        assert!(SchemaNode::parse(&json!({"enum": "red"})).is_err());
        assert!(SchemaNode::parse(&json!({"anyOf": {}})).is_err());
        assert!(SchemaNode::parse(&json!({"type": "string", "pattern": 3})).is_err());
        assert!(SchemaNode::parse(&json!({"type": "object", "properties": []})).is_err());
        assert!(SchemaNode::parse(&json!({"type": "object", "required": [1]})).is_err());
    }

    #[test]
    fn test_object_properties_keep_document_order() {
        let object = ObjectSchema::parse(&json!({
            "properties": {
                "zeta": {"type": "string"},
                "alpha": {"type": "integer"},
                "mid": {"type": "boolean"}
            },
            "required": ["alpha"]
        }))
        .unwrap();
        assert_eq!(object.property_names(), vec!["zeta", "alpha", "mid"]);
        assert!(object.is_required("alpha"));
        assert!(!object.is_required("zeta"));
    }

    #[test]
    fn test_default_presence_not_truthiness() {
        let object = ObjectSchema::parse(&json!({
            "properties": {
                "a": {"type": "array", "default": []},
                "b": {"type": "string", "default": null},
                "c": {"type": "string"}
            }
        }))
        .unwrap();
        assert_eq!(object.property("a").unwrap().default, Some(json!([])));
        assert_eq!(object.property("b").unwrap().default, Some(Value::Null));
        assert_eq!(object.property("c").unwrap().default, None);
    }

    #[test]
    fn test_object_without_properties() {
        let object = ObjectSchema::parse(&json!({"type": "object"})).unwrap();
        assert!(object.properties.is_empty());
        assert!(ObjectSchema::parse(&json!([])).is_err());
    }
}
