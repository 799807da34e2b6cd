use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Types that can be requested as a strict structured response.
///
/// Automatically implemented for any `JsonSchema + DeserializeOwned` type.
pub trait StructuredOutput: JsonSchema + DeserializeOwned {
    /// JSON schema in the dialect strict structured-output endpoints accept:
    ///
    /// 1. `additionalProperties: false` on every object
    /// 2. every property listed in `required`, nullable ones included
    /// 3. no `$ref`/`definitions`; everything inlined
    /// 4. no `format` annotations (`uint8`, `int64`, ... are rejected)
    fn strict_schema() -> Value {
        let schema = schema_for!(Self);
        let mut value = serde_json::to_value(schema).unwrap_or_default();
        strictify(&mut value);
        value
    }

    /// Schema name sent alongside the schema (`[A-Za-z0-9_-]` only).
    fn response_name() -> String {
        <Self as JsonSchema>::schema_name()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect()
    }
}

impl<T: JsonSchema + DeserializeOwned> StructuredOutput for T {}

/// Rewrite an arbitrary schemars document into the strict dialect.
pub fn strictify(value: &mut Value) {
    inline_refs(value);
    fix_object_schemas(value);

    if let Value::Object(map) = value {
        map.remove("definitions");
        map.remove("$schema");
    }
}

fn fix_object_schemas(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if matches!(map.get("format"), Some(Value::String(_))) && map.contains_key("type") {
                map.remove("format");
            }

            if map.get("type") == Some(&Value::String("object".to_string())) {
                map.insert("additionalProperties".to_string(), Value::Bool(false));

                if let Some(Value::Object(props)) = map.get("properties") {
                    let all_keys = props.keys().cloned().map(Value::String).collect();
                    map.insert("required".to_string(), Value::Array(all_keys));
                }
            }

            for (_, v) in map.iter_mut() {
                fix_object_schemas(v);
            }
        }
        Value::Array(arr) => {
            for item in arr.iter_mut() {
                fix_object_schemas(item);
            }
        }
        _ => {}
    }
}

fn inline_refs(value: &mut Value) {
    let definitions = match value {
        Value::Object(map) => map.get("definitions").cloned(),
        _ => None,
    };

    if let Some(defs) = definitions {
        inline_refs_recursive(value, &defs);
    }
}

fn inline_refs_recursive(value: &mut Value, definitions: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(ref_path)) = map.get("$ref").cloned() {
                if let Some(def) = ref_path
                    .strip_prefix("#/definitions/")
                    .and_then(|name| definitions.get(name))
                {
                    *value = def.clone();
                    inline_refs_recursive(value, definitions);
                    return;
                }
            }

            // schemars wraps documented `$ref`s as a single-element `allOf`
            if let Some(Value::Array(all_of)) = map.get("allOf").cloned() {
                if let [only] = all_of.as_slice() {
                    let description = map.get("description").cloned();
                    *value = only.clone();
                    inline_refs_recursive(value, definitions);
                    if let (Some(desc), Value::Object(inlined)) = (description, &mut *value) {
                        inlined.insert("description".to_string(), desc);
                    }
                    return;
                }
            }

            for (_, v) in map.iter_mut() {
                inline_refs_recursive(v, definitions);
            }
        }
        Value::Array(arr) => {
            for item in arr.iter_mut() {
                inline_refs_recursive(item, definitions);
            }
        }
        _ => {}
    }
}
