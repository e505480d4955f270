use serde_json::Value;
use std::collections::HashMap;

use crate::error::Error;
use crate::Result;

/// Mapping from output field name to a slash-delimited path into a record
pub type PathMap = HashMap<String, String>;

/// Project fields out of a record into a flat object.
///
/// Each entry in `paths` maps an output key to a slash-delimited path into
/// `record`; object segments index by key, array segments by integer. With
/// `None` or an empty map the record is returned unchanged.
pub fn transform(record: Value, paths: Option<&PathMap>) -> Result<Value> {
    let paths = match paths {
        Some(paths) if !paths.is_empty() => paths,
        _ => return Ok(record),
    };

    let mut projected = serde_json::Map::with_capacity(paths.len());
    for (key, path) in paths {
        let value = lookup(&record, path)?;
        projected.insert(key.clone(), value.clone());
    }
    Ok(Value::Object(projected))
}

/// Walk a slash-delimited path through a JSON value, skipping empty segments
fn lookup<'a>(record: &'a Value, path: &str) -> Result<&'a Value> {
    let mut current = record;
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        current = match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index)),
            _ => None,
        }
        .ok_or_else(|| Error::PathNotFound(path.to_string()))?;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn source() -> Value {
        json!({
            "id": "123",
            "nested": {"key": "value", "list": [1, 2, 3]},
            "list": ["a", "b", "c"],
        })
    }

    #[test]
    fn test_transform() {
        let paths = PathMap::from([
            ("new_id".to_string(), "/id".to_string()),
            ("nested_value".to_string(), "/nested/key".to_string()),
            ("first_list_item".to_string(), "/list/0".to_string()),
        ]);
        let expected = json!({
            "new_id": "123",
            "nested_value": "value",
            "first_list_item": "a",
        });
        assert_eq!(transform(source(), Some(&paths)).unwrap(), expected);
    }

    #[test]
    fn test_transform_with_empty_or_absent_path_map() {
        assert_eq!(transform(source(), Some(&PathMap::new())).unwrap(), source());
        assert_eq!(transform(source(), None).unwrap(), source());
    }

    #[test]
    fn test_transform_missing_path_errors() {
        let paths = PathMap::from([("invalid_key".to_string(), "/nonexistent/path".to_string())]);
        let err = transform(source(), Some(&paths)).unwrap_err();
        assert!(matches!(err, Error::PathNotFound(path) if path == "/nonexistent/path"));
    }

    #[test]
    fn test_transform_path_through_scalar_errors() {
        let paths = PathMap::from([("bad".to_string(), "id/deeper".to_string())]);
        assert!(transform(source(), Some(&paths)).is_err());
    }

    #[test]
    fn test_transform_non_numeric_array_index_errors() {
        let paths = PathMap::from([("bad".to_string(), "list/first".to_string())]);
        assert!(transform(source(), Some(&paths)).is_err());
    }
}
