//! Recording in-memory [`OneViewApi`] for tests

use async_trait::async_trait;
use http::StatusCode;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use super::{BackendError, BackendResult, OneViewApi, ResourceKind};

/// Backend call as seen by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetAll {
        kind: ResourceKind,
        filter: Option<String>,
    },
    Get {
        uri: String,
    },
}

#[derive(Debug, Clone)]
enum Canned {
    Records(Value),
    NotFound,
    Failure,
}

impl Canned {
    fn answer(&self, target: &str) -> BackendResult<Value> {
        match self {
            Canned::Records(value) => Ok(value.clone()),
            Canned::NotFound => Err(BackendError::NotFound(target.to_string())),
            Canned::Failure => Err(failure(target)),
        }
    }
}

fn failure(target: &str) -> BackendError {
    BackendError::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        uri: target.to_string(),
    }
}

/// Canned answers keyed by collection, filter and URI
///
/// Filtered answers take precedence over the unfiltered answer of the same
/// collection. Anything not configured fails like a broken appliance.
#[derive(Debug, Default)]
pub struct MockOneView {
    lists: HashMap<ResourceKind, Canned>,
    filtered: HashMap<(ResourceKind, String), Canned>,
    resources: HashMap<String, Canned>,
    calls: Mutex<Vec<Call>>,
}

impl MockOneView {
    pub fn new() -> Self {
        Self::default()
    }

    /// `records` must be a JSON array
    pub fn with_list(mut self, kind: ResourceKind, records: Value) -> Self {
        self.lists.insert(kind, Canned::Records(records));
        self
    }

    pub fn with_filtered_list(
        mut self,
        kind: ResourceKind,
        filter: impl Into<String>,
        records: Value,
    ) -> Self {
        self.filtered
            .insert((kind, filter.into()), Canned::Records(records));
        self
    }

    pub fn with_list_not_found(mut self, kind: ResourceKind) -> Self {
        self.lists.insert(kind, Canned::NotFound);
        self
    }

    pub fn with_list_failure(mut self, kind: ResourceKind) -> Self {
        self.lists.insert(kind, Canned::Failure);
        self
    }

    pub fn with_resource(mut self, uri: impl Into<String>, document: Value) -> Self {
        self.resources.insert(uri.into(), Canned::Records(document));
        self
    }

    pub fn with_resource_not_found(mut self, uri: impl Into<String>) -> Self {
        self.resources.insert(uri.into(), Canned::NotFound);
        self
    }

    pub fn with_resource_failure(mut self, uri: impl Into<String>) -> Self {
        self.resources.insert(uri.into(), Canned::Failure);
        self
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl OneViewApi for MockOneView {
    async fn get_all(&self, kind: ResourceKind, filter: Option<&str>) -> BackendResult<Vec<Value>> {
        self.record(Call::GetAll {
            kind,
            filter: filter.map(str::to_string),
        });

        let canned = filter
            .and_then(|f| self.filtered.get(&(kind, f.to_string())))
            .or_else(|| self.lists.get(&kind));

        let value = match canned {
            Some(canned) => canned.answer(kind.path())?,
            None => return Err(failure(kind.path())),
        };

        match value {
            Value::Array(records) => Ok(records),
            _ => Err(failure(kind.path())),
        }
    }

    async fn get(&self, uri: &str) -> BackendResult<Value> {
        self.record(Call::Get {
            uri: uri.to_string(),
        });

        match self.resources.get(uri) {
            Some(canned) => canned.answer(uri),
            None => Err(failure(uri)),
        }
    }
}
