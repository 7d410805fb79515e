// ABOUTME: In-memory DocumentStore over a tokio RwLock-guarded nested map
// ABOUTME: Backs the test suite and embedded deployments with store-equivalent semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Wellness

use super::{DocumentStore, QueryFilter};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

type Collections = HashMap<String, HashMap<String, Value>>;

/// In-memory document store
///
/// Collections are nested maps guarded by one `RwLock`; `create_if_absent`
/// holds the write lock across the presence check and the insert, which gives
/// the atomic conditional create the trait promises.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    collections: Arc<RwLock<Collections>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(document: &Value, filters: &[QueryFilter]) -> bool {
    filters
        .iter()
        .all(|filter| document.get(&filter.field) == Some(&filter.value))
}

fn compare_field(a: &Value, b: &Value, field: &str) -> Ordering {
    let left = a.get(field);
    let right = b.get(field);
    match (left, right) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .unwrap_or_default()
            .total_cmp(&y.as_f64().unwrap_or_default()),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

fn shallow_merge(target: &mut Value, partial: Value) {
    match (target, partial) {
        (Value::Object(existing), Value::Object(incoming)) => {
            for (key, value) in incoming {
                existing.insert(key, value);
            }
        }
        (target, partial) => *target = partial,
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Value>> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .and_then(|documents| documents.get(key))
            .cloned())
    }

    async fn set(&self, collection: &str, key: &str, document: Value) -> Result<()> {
        let mut guard = self.collections.write().await;
        guard
            .entry(collection.to_owned())
            .or_default()
            .insert(key.to_owned(), document);
        Ok(())
    }

    async fn update(&self, collection: &str, key: &str, partial: Value) -> Result<()> {
        let mut guard = self.collections.write().await;
        let documents = guard.entry(collection.to_owned()).or_default();
        match documents.get_mut(key) {
            Some(existing) => shallow_merge(existing, partial),
            None => {
                let mut fresh = Value::Object(Map::new());
                shallow_merge(&mut fresh, partial);
                documents.insert(key.to_owned(), fresh);
            }
        }
        Ok(())
    }

    async fn create_if_absent(
        &self,
        collection: &str,
        key: &str,
        document: Value,
    ) -> Result<bool> {
        let mut guard = self.collections.write().await;
        let documents = guard.entry(collection.to_owned()).or_default();
        if documents.contains_key(key) {
            return Ok(false);
        }
        documents.insert(key.to_owned(), document);
        Ok(true)
    }

    async fn query(
        &self,
        collection: &str,
        filters: &[QueryFilter],
        order_by: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Value>> {
        let guard = self.collections.read().await;
        let mut results: Vec<Value> = guard
            .get(collection)
            .map(|documents| {
                documents
                    .values()
                    .filter(|document| matches(document, filters))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        if let Some(field) = order_by {
            results.sort_by(|a, b| compare_field(a, b, field));
        }
        if let Some(limit) = limit {
            results.truncate(limit);
        }
        Ok(results)
    }
}
