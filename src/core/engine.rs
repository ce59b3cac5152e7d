use crate::core::Pipeline;
use crate::domain::model::Summary;
use crate::utils::error::Result;

pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<Summary> {
        // Extract
        tracing::debug!("Extracting input...");
        let raw = self.pipeline.extract()?;

        // Transform
        tracing::debug!("Transforming queries...");
        let documents = self.pipeline.transform(raw)?;
        tracing::debug!("Transformed {} queries", documents.len());

        // Load
        tracing::debug!("Writing output...");
        let summary = self.pipeline.load(documents)?;

        Ok(summary)
    }
}
