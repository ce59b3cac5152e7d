use serde::{Deserialize, Serialize};

/// Platform tags applied when the source does not name any.
pub const DEFAULT_PLATFORM: &str = "linux, darwin, windows";

/// Description applied when the source does not provide one.
pub const DEFAULT_DESCRIPTION: &str = "No description provided";

/// Schedule interval (seconds) applied when the source does not provide one.
pub const DEFAULT_INTERVAL: u64 = 3600;

/// One normalized query, before it is wrapped in the FleetDM envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRecord {
    pub name: String,
    pub query: String,
    pub description: String,
    pub platform: String,
    pub interval: u64,
}

impl QueryRecord {
    /// Wraps the record in the FleetDM document envelope.
    ///
    /// `metadata.name` and `spec.name` are both taken from `self.name`, so
    /// the two can never disagree in an emitted document.
    pub fn into_document(self) -> OutputDocument {
        OutputDocument {
            api_version: "v1".to_string(),
            kind: "query".to_string(),
            metadata: Metadata {
                name: self.name.clone(),
            },
            spec: QuerySpec {
                name: self.name,
                query: self.query,
                description: self.description,
                platform: self.platform,
                interval: self.interval,
            },
        }
    }
}

/// FleetDM query document, shaped like a Kubernetes resource manifest.
/// Field order here fixes the key order in the emitted YAML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputDocument {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub metadata: Metadata,
    pub spec: QuerySpec,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metadata {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuerySpec {
    pub name: String,
    pub query: String,
    pub description: String,
    pub platform: String,
    pub interval: u64,
}

/// Outcome of one conversion run. `output` is `None` when the run succeeded
/// without writing a file (zero statements in the SQL case).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    pub output: Option<String>,
}
