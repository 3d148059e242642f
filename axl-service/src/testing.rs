//! In-memory service for tests.
//!
//! [`StubService`] answers schema lookups from registered shapes and remote
//! calls from canned replies, and journals every request so tests can
//! assert on what would have gone over the wire.

use crate::error::{ServiceError, ServiceResult};
use crate::service::AxlService;
use serde_json::{Map, Value, json};
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Verb prefixes a reply can be registered under instead of a full operation name.
const VERBS: &[&str] = &[
    "get",
    "list",
    "add",
    "update",
    "remove",
    "executeSQLQuery",
    "executeSQLUpdate",
    "do",
];

/// One journaled remote call.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub operation: String,
    pub payload: Value,
}

impl Request {
    /// Looks up a value in the payload by JSON pointer (e.g. `/user/userid`).
    pub fn field(&self, pointer: &str) -> Option<&Value> {
        self.payload.pointer(pointer)
    }
}

#[derive(Debug, Clone)]
enum Reply {
    Value(Value),
    Fault { code: String, message: String },
}

/// A scripted [`AxlService`].
///
/// Replies are looked up by exact operation name first, then by verb prefix
/// (`get`, `list`, `add`, ...). When several replies are queued for a key
/// they are consumed in order; the last one keeps answering.
#[derive(Default)]
pub struct StubService {
    shapes: Mutex<HashMap<String, Value>>,
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    journal: Mutex<Vec<Request>>,
}

fn guard<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl StubService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a blank object with every field set to an empty string.
    pub fn blank(fields: &[&str]) -> Value {
        Value::Object(
            fields
                .iter()
                .map(|f| ((*f).to_string(), Value::String(String::new())))
                .collect::<Map<String, Value>>(),
        )
    }

    /// Registers the shape returned for a qualified type name (e.g. `ns0:XUser`).
    pub fn with_shape(self, type_name: &str, shape: Value) -> Self {
        guard(&self.shapes).insert(type_name.to_string(), shape);
        self
    }

    /// Queues a reply for an operation name or verb prefix.
    ///
    /// The value is wrapped into the `{"return": ...}` envelope.
    pub fn respond(&self, key: &str, value: Value) -> &Self {
        self.push(key, Reply::Value(json!({ "return": value })));
        self
    }

    /// Queues a raw response, used as-is without an envelope.
    pub fn respond_raw(&self, key: &str, response: Value) -> &Self {
        self.push(key, Reply::Value(response));
        self
    }

    /// Queues a remote fault.
    pub fn fail(&self, key: &str, code: &str, message: &str) -> &Self {
        self.push(
            key,
            Reply::Fault {
                code: code.to_string(),
                message: message.to_string(),
            },
        );
        self
    }

    fn push(&self, key: &str, reply: Reply) {
        guard(&self.replies)
            .entry(key.to_string())
            .or_default()
            .push_back(reply);
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<Request> {
        guard(&self.journal).clone()
    }

    pub fn last_request(&self) -> Option<Request> {
        guard(&self.journal).last().cloned()
    }

    /// Number of calls made to exactly this operation.
    pub fn calls_to(&self, operation: &str) -> usize {
        guard(&self.journal)
            .iter()
            .filter(|r| r.operation == operation)
            .count()
    }

    /// Total number of remote calls.
    pub fn call_count(&self) -> usize {
        guard(&self.journal).len()
    }

    fn next_reply(&self, operation: &str) -> Option<Reply> {
        let mut replies = guard(&self.replies);
        let key = if replies.contains_key(operation) {
            operation
        } else {
            VERBS
                .iter()
                .copied()
                .find(|verb| operation.starts_with(verb) && replies.contains_key(*verb))?
        };
        let queue = replies.get_mut(key)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

impl AxlService for StubService {
    fn create_empty(&self, type_name: &str) -> ServiceResult<Value> {
        guard(&self.shapes)
            .get(type_name)
            .cloned()
            .ok_or_else(|| ServiceError::SchemaNotFound(type_name.to_string()))
    }

    fn call(&self, operation: &str, payload: Value) -> ServiceResult<Value> {
        guard(&self.journal).push(Request {
            operation: operation.to_string(),
            payload,
        });
        match self.next_reply(operation) {
            Some(Reply::Value(value)) => Ok(value),
            Some(Reply::Fault { code, message }) => Err(ServiceError::Fault { code, message }),
            None => Err(ServiceError::Transport(format!(
                "no stubbed reply for {operation}"
            ))),
        }
    }
}
