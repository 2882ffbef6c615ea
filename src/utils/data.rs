use serde_json::{Map, Value};

/// Convert a YAML value into a JSON value, preserving mapping order.
///
/// YAML is the authoring surface (config and reaction files); chunk
/// parameters and event payloads are JSON values throughout the rest of the
/// system, so rendered documents cross this boundary exactly once.
///
/// Mapping keys must be strings; ordering of mapping entries is preserved
/// because keyword-argument order is observable for the caller backend.
///
/// # Example
///
/// ```rust
/// use event_reactor::utils::yaml_to_json;
///
/// let yaml: serde_yaml::Value = serde_yaml::from_str("tgt: test\norder: 1").unwrap();
/// let json = yaml_to_json(&yaml).unwrap();
///
/// assert_eq!(json["tgt"], "test");
/// assert_eq!(json["order"], 1);
/// ```
pub fn yaml_to_json(value: &serde_yaml::Value) -> Result<Value, String> {
    match value {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::from(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::from(u))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("number {} cannot be represented in JSON", f))
            } else {
                Err(format!("unsupported number: {:?}", n))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => seq
            .iter()
            .map(yaml_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                let key = key
                    .as_str()
                    .ok_or_else(|| format!("mapping key is not a string: {:?}", key))?;
                object.insert(key.to_string(), yaml_to_json(value)?);
            }
            Ok(Value::Object(object))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn convert(yaml: &str) -> Result<Value, String> {
        let parsed: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
        yaml_to_json(&parsed)
    }

    #[test]
    fn test_scalars() {
        assert_eq!(convert("~").unwrap(), Value::Null);
        assert_eq!(convert("true").unwrap(), json!(true));
        assert_eq!(convert("42").unwrap(), json!(42));
        assert_eq!(convert("-7").unwrap(), json!(-7));
        assert_eq!(convert("2.5").unwrap(), json!(2.5));
        assert_eq!(convert("hello").unwrap(), json!("hello"));
    }

    #[test]
    fn test_nested_structures() {
        let value = convert(
            r#"
install_zsh:
  local.state.single:
    - tgt: test
    - arg:
      - pkg.installed
      - zsh
"#,
        )
        .unwrap();

        assert_eq!(
            value,
            json!({
                "install_zsh": {
                    "local.state.single": [
                        {"tgt": "test"},
                        {"arg": ["pkg.installed", "zsh"]}
                    ]
                }
            })
        );
    }

    #[test]
    fn test_mapping_order_preserved() {
        let value = convert("zulu: 1\nalpha: 2\nmike: 3").unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["zulu", "alpha", "mike"]);
    }

    #[test]
    fn test_non_string_key_is_an_error() {
        let result = convert("1: one");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not a string"));
    }
}
