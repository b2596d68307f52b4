//! Stateful in-memory directory backend
//!
//! Behaves like a plain JSON file server: `POST` assigns the next id, `PUT`
//! replaces the whole record, `DELETE` removes it without touching related
//! records. Mounted on a wiremock server as a custom responder.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use serde_json::{json, Value};
use wiremock::{matchers::any, Mock, MockServer, Request, Respond, ResponseTemplate};

#[derive(Debug, Default)]
struct BackendState {
    campuses: Vec<Value>,
    students: Vec<Value>,
    next_id: i64,
    log: Vec<String>,
    failing_puts: BTreeSet<String>,
}

impl BackendState {
    fn collection(&mut self, name: &str) -> Option<&mut Vec<Value>> {
        match name {
            "campuses" => Some(&mut self.campuses),
            "students" => Some(&mut self.students),
            _ => None,
        }
    }
}

/// Shared handle to the fake backend's data
#[derive(Debug, Clone, Default)]
pub struct FakeDirectoryBackend {
    state: Arc<Mutex<BackendState>>,
}

impl FakeDirectoryBackend {
    pub fn new() -> Self {
        let backend = Self::default();
        backend.state.lock().unwrap().next_id = 100;
        backend
    }

    /// Seed with the sample directory
    pub fn with_sample_data() -> Self {
        let backend = Self::new();
        {
            let mut state = backend.state.lock().unwrap();
            state.campuses = super::sample_campuses_json().as_array().cloned().unwrap_or_default();
            state.students = super::sample_students_json().as_array().cloned().unwrap_or_default();
        }
        backend
    }

    /// Start a wiremock server answering every request from this backend
    pub async fn start(&self) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(self.clone())
            .mount(&server)
            .await;
        server
    }

    pub fn campuses(&self) -> Vec<Value> {
        self.state.lock().unwrap().campuses.clone()
    }

    pub fn students(&self) -> Vec<Value> {
        self.state.lock().unwrap().students.clone()
    }

    pub fn student(&self, id: i64) -> Option<Value> {
        self.students().into_iter().find(|s| s["id"] == json!(id))
    }

    /// Requests seen so far, as `"METHOD /path"`
    pub fn log(&self) -> Vec<String> {
        self.state.lock().unwrap().log.clone()
    }

    /// Make `PUT` on the given path answer 500
    pub fn fail_put(&self, path: &str) {
        self.state.lock().unwrap().failing_puts.insert(path.to_string());
    }

    pub fn insert_student(&self, student: Value) {
        self.state.lock().unwrap().students.push(student);
    }
}

impl Respond for FakeDirectoryBackend {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut state = self.state.lock().unwrap();
        let method = request.method.as_str().to_string();
        let request_path = request.url.path().to_string();
        state.log.push(format!("{} {}", method, request_path));

        let segments: Vec<&str> = request_path.trim_matches('/').split('/').collect();
        let (name, id) = match segments.as_slice() {
            [name] => (name.to_string(), None),
            [name, id] => match id.parse::<i64>() {
                Ok(id) => (name.to_string(), Some(id)),
                Err(_) => return ResponseTemplate::new(404).set_body_json(json!({})),
            },
            _ => return ResponseTemplate::new(404).set_body_json(json!({})),
        };

        if method == "PUT" && state.failing_puts.contains(&request_path) {
            return ResponseTemplate::new(500).set_body_string("update rejected");
        }

        let body: Option<Value> = serde_json::from_slice(&request.body).ok();
        let next_id = state.next_id;

        let Some(records) = state.collection(&name) else {
            return ResponseTemplate::new(404).set_body_json(json!({}));
        };
        let position = id.and_then(|id| records.iter().position(|r| r["id"] == json!(id)));

        match (method.as_str(), id, position) {
            ("GET", None, _) => ResponseTemplate::new(200).set_body_json(Value::Array(records.clone())),
            ("GET", Some(_), Some(index)) => ResponseTemplate::new(200).set_body_json(records[index].clone()),
            ("POST", None, _) => {
                let mut record = body.unwrap_or_else(|| json!({}));
                record["id"] = json!(next_id);
                records.push(record.clone());
                state.next_id += 1;
                ResponseTemplate::new(201).set_body_json(record)
            }
            ("PUT", Some(id), Some(index)) => {
                let mut record = body.unwrap_or_else(|| json!({}));
                record["id"] = json!(id);
                records[index] = record.clone();
                ResponseTemplate::new(200).set_body_json(record)
            }
            ("DELETE", Some(_), Some(index)) => {
                records.remove(index);
                ResponseTemplate::new(200).set_body_json(json!({}))
            }
            (_, Some(_), None) => ResponseTemplate::new(404).set_body_json(json!({})),
            _ => ResponseTemplate::new(405).set_body_json(json!({})),
        }
    }
}
