//! Test fixtures and builders
//!
//! Provides convenient builders for status API replies.

use serde_json::{Value, json};

/// Builder for a status API reply
pub struct ReplyBuilder {
    homeworks: Vec<Value>,
    current_date: i64,
}

impl ReplyBuilder {
    pub fn new() -> Self {
        Self {
            homeworks: Vec::new(),
            current_date: 1_700_000_000,
        }
    }

    pub fn homework(mut self, name: &str, status: &str) -> Self {
        self.homeworks.push(json!({
            "id": self.homeworks.len() + 1,
            "homework_name": name,
            "status": status,
            "reviewer_comment": "",
            "lesson_name": "Sprint",
        }));
        self
    }

    pub fn raw_homework(mut self, record: Value) -> Self {
        self.homeworks.push(record);
        self
    }

    pub fn build(self) -> Value {
        json!({
            "homeworks": self.homeworks,
            "current_date": self.current_date,
        })
    }
}

impl Default for ReplyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Reply with no homework
pub fn empty_reply() -> Value {
    ReplyBuilder::new().build()
}

/// Reply with one homework in `status`
pub fn single_reply(name: &str, status: &str) -> Value {
    ReplyBuilder::new().homework(name, status).build()
}
