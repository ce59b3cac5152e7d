use crate::core::emit;
use crate::domain::model::{
    OutputDocument, QueryRecord, Summary, DEFAULT_DESCRIPTION, DEFAULT_PLATFORM,
};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{ConvertError, Result};
use serde_json::Value;

/// Converts an osquery pack (JSON) into FleetDM query documents, one per
/// entry in the pack's `queries` mapping, in source key order.
pub struct OsqueryPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> OsqueryPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for OsqueryPipeline<S, C> {
    type Raw = Value;

    fn extract(&self) -> Result<Value> {
        let path = self.config.input_path();
        let content = self.storage.read_to_string(path)?;
        tracing::debug!("Read {} bytes from {}", content.len(), path);

        serde_json::from_str(&content).map_err(|source| ConvertError::JsonError {
            path: path.to_string(),
            source,
        })
    }

    fn transform(&self, pack: Value) -> Result<Vec<OutputDocument>> {
        // 驗證 osquery pack 結構
        let queries = pack
            .get("queries")
            .and_then(Value::as_object)
            .ok_or_else(|| ConvertError::SchemaError {
                message: "Invalid osquery pack: Missing or invalid \"queries\" field".to_string(),
            })?;

        // 逐一轉換查詢，保留來源順序
        let mut documents = Vec::with_capacity(queries.len());
        for (query_name, details) in queries {
            let record = convert_entry(query_name, details)?;
            documents.push(record.into_document());
        }

        Ok(documents)
    }

    fn load(&self, documents: Vec<OutputDocument>) -> Result<Summary> {
        let yaml = emit::render_documents(&documents)?;
        let path = self.config.output_path();
        self.storage.write_file(path, yaml.as_bytes())?;

        Ok(Summary {
            count: documents.len(),
            output: Some(path.to_string()),
        })
    }
}

fn convert_entry(query_name: &str, details: &Value) -> Result<QueryRecord> {
    let query = details
        .get("query")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|query| !query.is_empty());

    let interval = details.get("interval").filter(|value| !is_falsy(value));

    let (Some(query), Some(interval)) = (query, interval) else {
        return Err(ConvertError::SchemaError {
            message: format!(
                "Query \"{}\" is missing required fields \"query\" or \"interval\"",
                query_name
            ),
        });
    };

    let interval = parse_interval(interval).ok_or_else(|| ConvertError::SchemaError {
        message: format!(
            "Query \"{}\" has a non-numeric or non-positive \"interval\"",
            query_name
        ),
    })?;

    // platform 與 description 僅在來源完全沒有提供時才用預設值，
    // 空字串視為刻意設定並原樣保留
    let platform = details
        .get("platform")
        .and_then(Value::as_str)
        .map_or_else(|| DEFAULT_PLATFORM.to_string(), str::to_string);

    let description = details
        .get("description")
        .and_then(Value::as_str)
        .map_or_else(|| DEFAULT_DESCRIPTION.to_string(), str::to_string);

    Ok(QueryRecord {
        name: query_name.to_string(),
        query: query.to_string(),
        description,
        platform,
        interval,
    })
}

/// JSON values that fail the required-field check: null, false, 0, "".
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Coerces a JSON number or base-10 numeric string to a positive interval.
fn parse_interval(value: &Value) -> Option<u64> {
    let interval = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    interval.filter(|seconds| *seconds > 0)
}
