//! Sitewright test utilities.
//!
//! Fixture builders for the JSON shapes the server accepts (content blocks,
//! export artifacts, account requests) and small assertion helpers.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{Value as JsonValue, json};

static EMAIL_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// An email address no other call in this process returns.
pub fn unique_email(prefix: &str) -> String {
    let n = EMAIL_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{n}@example.test")
}

/// Registration or user-creation request body.
pub fn account_request(email: &str, password: &str, role: &str) -> JsonValue {
    json!({
        "email": email,
        "password": password,
        "name": "Test User",
        "role": role,
    })
}

/// Create a test block with empty content.
pub fn test_block(id: i64, block_type: &str, position: &str) -> TestBlock {
    TestBlock {
        id,
        block_type: block_type.to_string(),
        position: position.to_string(),
        content: json!({}),
    }
}

/// A content block builder in wire form.
#[derive(Debug, Clone)]
pub struct TestBlock {
    pub id: i64,
    pub block_type: String,
    pub position: String,
    pub content: JsonValue,
}

impl TestBlock {
    /// Replace the content payload.
    pub fn with_content(mut self, content: JsonValue) -> Self {
        self.content = content;
        self
    }

    /// Set a single content field.
    pub fn with_field(mut self, name: &str, value: JsonValue) -> Self {
        if let Some(obj) = self.content.as_object_mut() {
            obj.insert(name.to_string(), value);
        }
        self
    }

    pub fn to_json(&self) -> JsonValue {
        json!({
            "id": self.id,
            "type": self.block_type,
            "position": self.position,
            "content": self.content,
        })
    }
}

/// Create an export artifact builder.
pub fn test_export(theme: &str, layout: &str) -> TestExport {
    TestExport {
        theme: theme.to_string(),
        layout: layout.to_string(),
        components: Vec::new(),
    }
}

/// An export artifact builder.
#[derive(Debug, Clone)]
pub struct TestExport {
    pub theme: String,
    pub layout: String,
    pub components: Vec<TestBlock>,
}

impl TestExport {
    pub fn with_block(mut self, block: TestBlock) -> Self {
        self.components.push(block);
        self
    }

    pub fn to_json(&self) -> JsonValue {
        json!({
            "theme": self.theme,
            "layout": self.layout,
            "components": self.components.iter().map(TestBlock::to_json).collect::<Vec<_>>(),
            "exportDate": "2026-01-01T00:00:00Z",
        })
    }
}

/// Ids of a JSON component list, in order.
pub fn component_ids(components: &JsonValue) -> Vec<i64> {
    components
        .as_array()
        .map(|list| list.iter().filter_map(|c| c["id"].as_i64()).collect())
        .unwrap_or_default()
}
