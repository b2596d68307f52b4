//! Directory API client
//!
//! This service wraps the REST-ish JSON backend: HTTP client setup, URL
//! building, response parsing and error mapping. It holds no state beyond
//! the HTTP client; caching lives in the store.

use std::collections::BTreeMap;
use std::time::Duration;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;
use crate::config::ApiConfig;
use crate::models::{Campus, CampusInput, Student, StudentInput};
use crate::utils::errors::{DirectoryError, Entity, RemoteError, Result};
use crate::utils::logging::log_api_error;

/// Records addressable by id
pub trait Record: DeserializeOwned {
    const ENTITY: Entity;
    const COLLECTION: &'static str;

    fn id(&self) -> i64;
}

impl Record for Campus {
    const ENTITY: Entity = Entity::Campus;
    const COLLECTION: &'static str = "campuses";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for Student {
    const ENTITY: Entity = Entity::Student;
    const COLLECTION: &'static str = "students";

    fn id(&self) -> i64 {
        self.id
    }
}

/// HTTP client for the campus/student collections
#[derive(Clone, Debug)]
pub struct DirectoryApi {
    client: Client,
    base_url: String,
}

impl DirectoryApi {
    /// Create a new client from configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let parsed = Url::parse(&config.base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(DirectoryError::Http)?;

        Ok(Self {
            client,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_campuses(&self) -> Result<Vec<Campus>> {
        self.list::<Campus>().await
    }

    pub async fn get_campus(&self, id: i64) -> Result<Campus> {
        self.get::<Campus>(id).await
    }

    pub async fn create_campus(&self, input: &CampusInput) -> Result<Campus> {
        self.create::<Campus, _>(input).await
    }

    pub async fn update_campus(&self, campus: &Campus) -> Result<Campus> {
        self.replace(campus.id, campus).await
    }

    pub async fn delete_campus(&self, id: i64) -> Result<()> {
        self.delete::<Campus>(id).await
    }

    pub async fn list_students(&self) -> Result<Vec<Student>> {
        self.list::<Student>().await
    }

    pub async fn get_student(&self, id: i64) -> Result<Student> {
        self.get::<Student>(id).await
    }

    pub async fn create_student(&self, input: &StudentInput) -> Result<Student> {
        self.create::<Student, _>(input).await
    }

    pub async fn update_student(&self, student: &Student) -> Result<Student> {
        self.replace(student.id, student).await
    }

    pub async fn delete_student(&self, id: i64) -> Result<()> {
        self.delete::<Student>(id).await
    }

    fn collection_url<R: Record>(&self) -> String {
        format!("{}/{}", self.base_url, R::COLLECTION)
    }

    fn record_url<R: Record>(&self, id: i64) -> String {
        format!("{}/{}/{}", self.base_url, R::COLLECTION, id)
    }

    async fn list<R: Record>(&self) -> Result<Vec<R>> {
        let url = self.collection_url::<R>();
        let body: Value = self.execute(self.client.request(Method::GET, &url), "GET", &url, None).await?;
        parse_list::<R>(body)
    }

    async fn get<R: Record>(&self, id: i64) -> Result<R> {
        let url = self.record_url::<R>(id);
        let body = self
            .execute(self.client.request(Method::GET, &url), "GET", &url, Some((R::ENTITY, id)))
            .await?;
        parse_record(body)
    }

    async fn create<R: Record, B: Serialize>(&self, input: &B) -> Result<R> {
        let url = self.collection_url::<R>();
        let request = self.client.request(Method::POST, &url).json(input);
        let body = self.execute(request, "POST", &url, None).await?;
        parse_record(body)
    }

    async fn replace<R: Record + Serialize>(&self, id: i64, record: &R) -> Result<R> {
        let url = self.record_url::<R>(id);
        let request = self.client.request(Method::PUT, &url).json(record);
        let body = self.execute(request, "PUT", &url, Some((R::ENTITY, id))).await?;
        parse_record(body)
    }

    async fn delete<R: Record>(&self, id: i64) -> Result<()> {
        let url = self.record_url::<R>(id);
        self.execute(self.client.request(Method::DELETE, &url), "DELETE", &url, Some((R::ENTITY, id)))
            .await?;
        Ok(())
    }

    /// Send a request and return its JSON body (`null` when empty)
    async fn execute(
        &self,
        request: RequestBuilder,
        method: &str,
        url: &str,
        target: Option<(Entity, i64)>,
    ) -> Result<Value> {
        debug!(method = method, url = %url, "Making directory API request");

        let response = request.send().await.map_err(|e| {
            log_api_error(method, url, &e.to_string());
            if e.is_timeout() {
                DirectoryError::Remote(RemoteError::Timeout)
            } else if e.is_connect() {
                DirectoryError::Remote(RemoteError::ServiceUnavailable)
            } else {
                DirectoryError::Remote(RemoteError::RequestFailed(e.to_string()))
            }
        })?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            if let Some((entity, id)) = target {
                debug!(method = method, url = %url, "Record not found");
                return Err(DirectoryError::NotFound { entity, id });
            }
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log_api_error(method, url, &format!("HTTP {}", status));
            return Err(DirectoryError::Remote(RemoteError::Status {
                status: status.as_u16(),
                body: error_text,
            }));
        }

        let bytes = response.bytes().await.map_err(|e| {
            DirectoryError::Remote(RemoteError::InvalidResponse(e.to_string()))
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            log_api_error(method, url, &e.to_string());
            DirectoryError::Remote(RemoteError::InvalidResponse(e.to_string()))
        })
    }
}

fn parse_record<R: Record>(body: Value) -> Result<R> {
    serde_json::from_value(body).map_err(|e| {
        DirectoryError::Remote(RemoteError::InvalidResponse(format!(
            "malformed {}: {}",
            R::ENTITY,
            e
        )))
    })
}

/// Parse a listing, skipping empty slots and collapsing duplicate ids.
///
/// Order of first appearance is kept; a later duplicate replaces the
/// earlier record.
pub fn parse_list<R: Record>(body: Value) -> Result<Vec<R>> {
    let items = match body {
        Value::Array(items) => items,
        other => {
            return Err(DirectoryError::Remote(RemoteError::InvalidResponse(format!(
                "expected a list of {}, got {}",
                R::COLLECTION,
                json_kind(&other)
            ))))
        }
    };

    let mut records: Vec<R> = Vec::with_capacity(items.len());
    let mut positions: BTreeMap<i64, usize> = BTreeMap::new();

    for item in items {
        if item.is_null() {
            warn!(collection = R::COLLECTION, "Skipping empty slot in listing");
            continue;
        }

        let record: R = parse_record(item)?;
        match positions.get(&record.id()) {
            Some(&index) => {
                warn!(collection = R::COLLECTION, id = record.id(), "Duplicate id in listing");
                records[index] = record;
            }
            None => {
                positions.insert(record.id(), records.len());
                records.push(record);
            }
        }
    }

    Ok(records)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
