//! Structured query-string encoding.
//!
//! Flattens nested mappings into bracketed keys (`b[0]=2`, `f[tag]=rust`)
//! and rebuilds them on the way back, so callers can pass arrays and nested
//! maps, not just flat key/value pairs.

use ::url::form_urlencoded;
use serde_json::{Map, Value};

/// A structured query mapping: string keys to scalars, arrays, or nested
/// maps.
pub type Query = Map<String, Value>;

/// Numeric bracket segments up to this value index into arrays; anything
/// larger becomes a plain map key rather than allocating a sparse array.
const ARRAY_INDEX_LIMIT: usize = 20;

/// Serialize a query mapping into a URL-encoded query string.
///
/// `{a: 1, b: [2, 3]}` becomes `a=1&b[0]=2&b[1]=3` and `{f: {tag: "x"}}`
/// becomes `f[tag]=x`, with the brackets themselves percent-encoded. An
/// empty mapping yields an empty string.
pub fn stringify(query: &Query) -> String {
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (key, value) in query {
        collect_pairs(key.clone(), value, &mut pairs);
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

fn collect_pairs(key: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => pairs.push((key, String::new())),
        Value::Bool(flag) => pairs.push((key, flag.to_string())),
        Value::Number(number) => pairs.push((key, number.to_string())),
        Value::String(text) => pairs.push((key, text.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                collect_pairs(format!("{key}[{index}]"), item, pairs);
            }
        }
        Value::Object(map) => {
            for (sub, item) in map {
                collect_pairs(format!("{key}[{sub}]"), item, pairs);
            }
        }
    }
}

/// Parse a query string produced by [`stringify`] back into a mapping.
///
/// Bracketed keys rebuild nested arrays and maps; missing array indices pad
/// with `Null` and duplicate keys resolve last-write-wins. Bare scalars are
/// re-typed (integer, then boolean, otherwise string) so a mapping of simple
/// values survives an encode/decode round trip unchanged.
pub fn parse(input: &str) -> Query {
    let mut root = Query::new();
    for (key, value) in form_urlencoded::parse(input.as_bytes()) {
        let segments = split_key(&key);
        if let Some((first, rest)) = segments.split_first() {
            let slot = root.entry(first.clone()).or_insert(Value::Null);
            place(slot, rest, revive_scalar(&value));
        }
    }
    root
}

/// Split `f[tag][0]` into `["f", "tag", "0"]`. Unbalanced brackets keep
/// whatever text they enclose; no input panics.
fn split_key(key: &str) -> Vec<String> {
    match key.find('[') {
        None => vec![key.to_string()],
        Some(open) => {
            let mut segments = vec![key[..open].to_string()];
            for piece in key[open..].split('[').skip(1) {
                let end = piece.find(']').unwrap_or(piece.len());
                segments.push(piece[..end].to_string());
            }
            segments
        }
    }
}

fn place(slot: &mut Value, segments: &[String], value: Value) {
    let Some((first, rest)) = segments.split_first() else {
        *slot = value;
        return;
    };

    match first.parse::<usize>() {
        Ok(index) if index <= ARRAY_INDEX_LIMIT => {
            if !slot.is_array() {
                *slot = Value::Array(Vec::new());
            }
            if let Some(items) = slot.as_array_mut() {
                while items.len() <= index {
                    items.push(Value::Null);
                }
                place(&mut items[index], rest, value);
            }
        }
        _ => {
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            if let Some(map) = slot.as_object_mut() {
                let child = map.entry(first.clone()).or_insert(Value::Null);
                place(child, rest, value);
            }
        }
    }
}

/// Re-type a decoded scalar. Only canonical renderings convert back, so
/// `"007"` stays a string while `"7"` becomes a number.
fn revive_scalar(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::Null;
    }
    if let Ok(number) = raw.parse::<i64>() {
        if number.to_string() == raw {
            return Value::Number(number.into());
        }
    }
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query(value: serde_json::Value) -> Query {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_stringify_scalars_and_arrays() {
        let encoded = stringify(&query(json!({"a": 1, "b": [2, 3]})));
        assert_eq!(encoded, "a=1&b%5B0%5D=2&b%5B1%5D=3");
    }

    #[test]
    fn test_stringify_nested_map() {
        let encoded = stringify(&query(json!({"filter": {"tag": "rust"}})));
        assert_eq!(encoded, "filter%5Btag%5D=rust");
    }

    #[test]
    fn test_stringify_empty_query() {
        assert_eq!(stringify(&Query::new()), "");
    }

    #[test]
    fn test_round_trip_simple_mapping() {
        let original = query(json!({"a": 1, "b": [2, 3]}));
        assert_eq!(parse(&stringify(&original)), original);
    }

    #[test]
    fn test_round_trip_nested_structure() {
        let original = query(json!({
            "filter": {"tags": ["rust", "web"], "limit": 10},
            "page": 2,
            "exact": true,
        }));
        assert_eq!(parse(&stringify(&original)), original);
    }

    #[test]
    fn test_parse_retypes_bare_scalars() {
        let parsed = parse("a=1&b=true&c=hello");
        assert_eq!(parsed, query(json!({"a": 1, "b": true, "c": "hello"})));
    }

    #[test]
    fn test_parse_keeps_noncanonical_numbers_as_strings() {
        let parsed = parse("code=007");
        assert_eq!(parsed, query(json!({"code": "007"})));
    }

    #[test]
    fn test_parse_pads_missing_indices() {
        let parsed = parse("a%5B2%5D=x");
        assert_eq!(parsed, query(json!({"a": [null, null, "x"]})));
    }

    #[test]
    fn test_parse_unbalanced_brackets_does_not_panic() {
        let parsed = parse("a%5B=1&b%5D=2");
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_huge_index_becomes_map_key() {
        let parsed = parse("a%5B4096%5D=x");
        assert_eq!(parsed, query(json!({"a": {"4096": "x"}})));
    }
}
