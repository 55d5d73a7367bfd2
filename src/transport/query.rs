//! Query-string encoding for read operations.

use std::collections::HashMap;
use url::form_urlencoded;

/// Encode `params` as `application/x-www-form-urlencoded`, keys sorted.
///
/// Spaces become `+`, everything outside the unreserved set is percent-encoded.
pub fn encode_query(params: &HashMap<String, String>) -> String {
    let mut pairs: Vec<(&String, &String)> = params.iter().collect();
    pairs.sort();

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Append `params` to `path`. An empty or absent map leaves the path untouched.
pub fn append_query(path: &str, params: Option<&HashMap<String, String>>) -> String {
    let Some(params) = params.filter(|p| !p.is_empty()) else {
        return path.to_string();
    };
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{}{}{}", path, separator, encode_query(params))
}
