// src/cache.rs

use serde_json::Value;
use std::collections::HashMap;

/// Client-side cache for GET responses, keyed by endpoint + canonicalized
/// query params. The caller owns one and threads it through every list call;
/// there is no module-level singleton, so tests can hand in a fresh or
/// pre-seeded one.
///
/// Lifecycle is the page's: `clear` on navigation. No eviction beyond that;
/// the handful of list endpoints this fronts stay small.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: HashMap<String, Value>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical cache key: endpoint plus params sorted by name, so call
    /// sites that build the same query in a different order still hit.
    pub fn key(endpoint: &str, params: &[(&str, String)]) -> String {
        let mut params: Vec<(&str, &str)> = params
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();
        params.sort_by_key(|&(name, _)| name);

        let mut key = endpoint.to_string();
        for (i, (name, value)) in params.iter().enumerate() {
            key.push(if i == 0 { '?' } else { '&' });
            key.push_str(name);
            key.push('=');
            key.push_str(value);
        }
        key
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn put(&mut self, key: String, body: Value) {
        self.entries.insert(key, body);
    }

    /// Drops everything; called on page navigation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_is_order_insensitive() {
        let a = ResponseCache::key("/districts", &[("stateId", "4".into()), ("page", "1".into())]);
        let b = ResponseCache::key("/districts", &[("page", "1".into()), ("stateId", "4".into())]);
        assert_eq!(a, b);
        assert_eq!(a, "/districts?page=1&stateId=4");
    }

    #[test]
    fn put_get_clear() {
        let mut cache = ResponseCache::new();
        let key = ResponseCache::key("/states", &[]);
        assert!(cache.get(&key).is_none());

        cache.put(key.clone(), json!([{"id": 1, "name": "Maharashtra"}]));
        assert_eq!(cache.get(&key).unwrap()[0]["id"], 1);

        cache.clear();
        assert!(cache.is_empty());
    }
}
