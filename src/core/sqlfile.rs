use crate::core::emit;
use crate::domain::model::{
    OutputDocument, QueryRecord, Summary, DEFAULT_INTERVAL, DEFAULT_PLATFORM,
};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;
use regex::Regex;

/// Extracts `;`-terminated statements from a flat SQL file and wraps each in
/// a FleetDM query document. Queries are named `query_<n>` in file order.
pub struct SqlPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SqlPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for SqlPipeline<S, C> {
    type Raw = String;

    fn extract(&self) -> Result<String> {
        let path = self.config.input_path();
        let content = self.storage.read_to_string(path)?;
        tracing::debug!("Read {} bytes from {}", content.len(), path);
        Ok(content)
    }

    fn transform(&self, content: String) -> Result<Vec<OutputDocument>> {
        let documents = split_statements(&content)
            .into_iter()
            .enumerate()
            .map(|(index, query)| {
                QueryRecord {
                    name: format!("query_{}", index + 1),
                    query,
                    description: format!("Query {}", index + 1),
                    platform: DEFAULT_PLATFORM.to_string(),
                    interval: DEFAULT_INTERVAL,
                }
                .into_document()
            })
            .collect();

        Ok(documents)
    }

    fn load(&self, documents: Vec<OutputDocument>) -> Result<Summary> {
        // 沒有任何查詢時不產生輸出檔，視為成功結束
        if documents.is_empty() {
            tracing::info!("No valid queries found in the SQL file");
            return Ok(Summary {
                count: 0,
                output: None,
            });
        }

        let yaml = emit::render_documents(&documents)?;
        let path = self.config.output_path();
        self.storage.write_file(path, yaml.as_bytes())?;

        Ok(Summary {
            count: documents.len(),
            output: Some(path.to_string()),
        })
    }
}

/// Strips SQL comments. Line comments first, then block comments; both
/// passes run over the whole text before any statement splitting. Block
/// comments match non-greedily, so the first `*/` closes the span even when
/// it sits inside a string literal.
fn strip_comments(content: &str) -> String {
    let line_comments = Regex::new(r"--[^\n]*").unwrap();
    let block_comments = Regex::new(r"(?s)/\*.*?\*/").unwrap();

    let without_line = line_comments.replace_all(content, "");
    block_comments.replace_all(&without_line, "").into_owned()
}

/// Splits cleaned text on `;`, trims each piece, drops empties.
fn split_statements(content: &str) -> Vec<String> {
    strip_comments(content)
        .split(';')
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ConvertError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockStorage {
        files: Mutex<HashMap<String, Vec<u8>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, content: &str) -> Self {
            let storage = Self::default();
            storage
                .files
                .lock()
                .unwrap()
                .insert(path.to_string(), content.as_bytes().to_vec());
            storage
        }

        fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().unwrap().get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        fn read_to_string(&self, path: &str) -> Result<String> {
            let files = self.files.lock().unwrap();
            let data = files.get(path).ok_or_else(|| ConvertError::InputError {
                path: path.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
            })?;
            Ok(String::from_utf8_lossy(data).into_owned())
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().unwrap();
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        input: String,
        output: String,
    }

    impl MockConfig {
        fn new() -> Self {
            Self {
                input: "queries.sql".to_string(),
                output: "fleet.yml".to_string(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn input_path(&self) -> &str {
            &self.input
        }

        fn output_path(&self) -> &str {
            &self.output
        }
    }

    fn pipeline_with_input(content: &str) -> SqlPipeline<MockStorage, MockConfig> {
        SqlPipeline::new(
            MockStorage::with_file("queries.sql", content),
            MockConfig::new(),
        )
    }

    #[test]
    fn test_split_statements_strips_both_comment_styles() {
        let sql = "SELECT 1; -- comment\nSELECT 2;\n/* block */ SELECT 3;";

        let statements = split_statements(sql);

        assert_eq!(statements, vec!["SELECT 1", "SELECT 2", "SELECT 3"]);
    }

    #[test]
    fn test_split_statements_strips_multi_line_block_comment() {
        let sql = "SELECT a FROM t;\n/* spans\nseveral\nlines */\nSELECT b FROM t;";

        let statements = split_statements(sql);

        assert_eq!(statements, vec!["SELECT a FROM t", "SELECT b FROM t"]);
    }

    #[test]
    fn test_block_comment_closes_at_first_terminator() {
        // Non-greedy match: the second `*/` survives as statement text
        let sql = "/* one */ SELECT 1 */;";

        let statements = split_statements(sql);

        assert_eq!(statements, vec!["SELECT 1 */"]);
    }

    #[test]
    fn test_split_statements_drops_empty_pieces() {
        let sql = ";;  ;\nSELECT 1;\n;";

        let statements = split_statements(sql);

        assert_eq!(statements, vec!["SELECT 1"]);
    }

    #[test]
    fn test_transform_names_queries_by_position() {
        let pipeline = pipeline_with_input("SELECT 1;\nSELECT 2;");
        let documents = pipeline
            .transform(pipeline.extract().unwrap())
            .unwrap();

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].metadata.name, "query_1");
        assert_eq!(documents[0].spec.description, "Query 1");
        assert_eq!(documents[1].metadata.name, "query_2");
        assert_eq!(documents[1].spec.query, "SELECT 2");
        assert_eq!(documents[1].spec.interval, 3600);
        assert_eq!(documents[1].spec.platform, "linux, darwin, windows");
    }

    #[test]
    fn test_load_skips_write_when_no_statements_remain() {
        let pipeline = pipeline_with_input("-- just a comment\n");

        let documents = pipeline
            .transform(pipeline.extract().unwrap())
            .unwrap();
        assert!(documents.is_empty());

        let summary = pipeline.load(documents).unwrap();

        assert_eq!(summary.count, 0);
        assert_eq!(summary.output, None);
        assert!(pipeline.storage.get_file("fleet.yml").is_none());
    }

    #[test]
    fn test_load_writes_documents_with_separator() {
        let pipeline = pipeline_with_input("SELECT 1;\nSELECT 2;");

        let documents = pipeline
            .transform(pipeline.extract().unwrap())
            .unwrap();
        let summary = pipeline.load(documents).unwrap();

        assert_eq!(summary.count, 2);
        assert_eq!(summary.output.as_deref(), Some("fleet.yml"));

        let written = pipeline.storage.get_file("fleet.yml").unwrap();
        let yaml = String::from_utf8(written).unwrap();
        assert_eq!(yaml.lines().filter(|line| *line == "---").count(), 1);
    }

    #[test]
    fn test_extract_rejects_missing_file() {
        let pipeline = SqlPipeline::new(MockStorage::default(), MockConfig::new());
        let err = pipeline.extract().unwrap_err();

        assert!(matches!(err, ConvertError::InputError { .. }));
    }
}
