//! Object assembler.
//!
//! Used for the top-level document and for every nested `type: object`
//! node alike.

use crate::generator::GeneratorError;
use crate::generators::{generate_value, GenerationContext};
use rand::Rng;
use schema_core::ObjectSchema;
use serde_json::{Map, Value};

/// Generate a mapping with one entry per declared property, in declaration
/// order.
///
/// A property carrying `default` always takes the literal verbatim.
/// `required` has no effect: every declared property is generated.
pub fn generate_random_data<R: Rng>(
    object: &ObjectSchema,
    rng: &mut R,
    ctx: &GenerationContext<'_>,
) -> Result<Map<String, Value>, GeneratorError> {
    let mut document = Map::with_capacity(object.properties.len());

    for property in &object.properties {
        let value = match &property.default {
            Some(default) => default.clone(),
            None => {
                let property_ctx = ctx.descend(&property.name)?;
                generate_value(&property.node, rng, &property_ctx)?
            }
        };
        document.insert(property.name.clone(), value);
    }

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::GeneratorOptions;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn object(schema: Value) -> ObjectSchema {
        ObjectSchema::parse(&schema).unwrap()
    }

    #[test]
    fn test_all_declared_properties_present() {
        let options = GeneratorOptions::default();
        let ctx = GenerationContext::new(&options).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let schema = object(json!({
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "age": {"type": "integer"}
            },
            "required": ["name"]
        }));

        let document = generate_random_data(&schema, &mut rng, &ctx).unwrap();
        assert!(document.contains_key("name"));
        assert!(document.contains_key("age"));
    }

    #[test]
    fn test_default_always_wins() {
        let options = GeneratorOptions::default();
        let ctx = GenerationContext::new(&options).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let schema = object(json!({
            "properties": {
                "attendees": {"type": "array", "items": {"type": "integer"}, "default": []},
                "note": {"type": "string", "default": null},
                "level": {"enum": [1, 2, 3], "default": 9}
            }
        }));

        for _ in 0..20 {
            let document = generate_random_data(&schema, &mut rng, &ctx).unwrap();
            assert_eq!(document["attendees"], json!([]));
            assert_eq!(document["note"], Value::Null);
            assert_eq!(document["level"], json!(9));
        }
    }

    #[test]
    fn test_no_properties_gives_empty_mapping() {
        let options = GeneratorOptions::default();
        let ctx = GenerationContext::new(&options).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let document = generate_random_data(&object(json!({})), &mut rng, &ctx).unwrap();
        assert!(document.is_empty());
    }

    #[test]
    fn test_property_order_preserved() {
        let options = GeneratorOptions::default();
        let ctx = GenerationContext::new(&options).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let schema = object(json!({
            "properties": {
                "zeta": {"type": "boolean"},
                "alpha": {"type": "boolean"},
                "mid": {"type": "boolean"}
            }
        }));

        let document = generate_random_data(&schema, &mut rng, &ctx).unwrap();
        let keys: Vec<&str> = document.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_self_similar_nesting_hits_depth_limit() {
        let options = GeneratorOptions {
            max_depth: 3,
            ..Default::default()
        };
        let ctx = GenerationContext::new(&options).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let schema = object(json!({
            "properties": {
                "a": {"type": "object", "properties": {
                    "b": {"type": "object", "properties": {
                        "c": {"type": "object", "properties": {
                            "d": {"type": "boolean"}
                        }}
                    }}
                }}
            }
        }));

        match generate_random_data(&schema, &mut rng, &ctx) {
            Err(GeneratorError::DepthExceeded { limit, path }) => {
                assert_eq!(limit, 3);
                assert_eq!(path, "/a/b/c/d");
            }
            other => panic!("Expected DepthExceeded, got {other:?}"),
        }
    }
}
