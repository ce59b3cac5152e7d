use crate::domain::model::OutputDocument;
use crate::utils::error::Result;

/// Serializes each document as YAML and joins them with a `---` separator
/// line. No separator before the first document or after the last one; each
/// serialized document keeps its own trailing newline.
pub fn render_documents(documents: &[OutputDocument]) -> Result<String> {
    let mut rendered = Vec::with_capacity(documents.len());

    for document in documents {
        rendered.push(serde_yaml::to_string(document)?);
    }

    Ok(rendered.join("\n---\n"))
}
