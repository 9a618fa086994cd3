/// Query-string parsing
///
/// Keys ending in `[]` collect every value into a list; a key with no `=`
/// gets the value `"true"`; `+` decodes to a space.

use indexmap::IndexMap;

use serde::{Deserialize, Serialize};

use super::decode_component;

/// Value of one query-string key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Single(String),
    List(Vec<String>),
}

impl QueryValue {
    /// Returns the value when it is a single string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            QueryValue::Single(value) => Some(value),
            QueryValue::List(_) => None,
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Single(value.to_string())
    }
}

/// Query parameters keyed by name
pub type QueryParams = IndexMap<String, QueryValue>;

/// Parses a raw query string (without the leading `?`)
///
/// # Examples
///
/// ```
/// use statepath_router::path::{parse_query_string, QueryValue};
///
/// let query = parse_query_string("q=456&u=abc&tag[]=a&tag[]=b&debug");
/// assert_eq!(query.get("q"), Some(&QueryValue::from("456")));
/// assert_eq!(query.get("debug"), Some(&QueryValue::from("true")));
/// assert_eq!(
///     query.get("tag"),
///     Some(&QueryValue::List(vec!["a".to_string(), "b".to_string()]))
/// );
/// ```
pub fn parse_query_string(query: &str) -> QueryParams {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .fold(QueryParams::new(), |mut params, pair| {
            match pair.split_once('=') {
                None => {
                    params.insert(decode_part(pair), QueryValue::Single("true".to_string()));
                }
                Some((raw_key, raw_value)) => {
                    let key = decode_part(raw_key);
                    let value = decode_part(raw_value);
                    match key.strip_suffix("[]").filter(|name| !name.is_empty()) {
                        Some(name) => push_list_value(&mut params, name, value),
                        None => {
                            params.insert(key, QueryValue::Single(value));
                        }
                    }
                }
            }
            params
        })
}

fn push_list_value(params: &mut QueryParams, name: &str, value: String) {
    let entry = params
        .entry(name.to_string())
        .or_insert_with(|| QueryValue::List(Vec::new()));
    match entry {
        QueryValue::List(values) => values.push(value),
        QueryValue::Single(previous) => {
            let previous = std::mem::take(previous);
            *entry = QueryValue::List(vec![previous, value]);
        }
    }
}

fn decode_part(part: &str) -> String {
    decode_component(&part.replace('+', "%20"))
}
