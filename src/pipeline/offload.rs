use std::sync::Arc;

use anyhow::anyhow;

use crate::{
    actions::ActionSet,
    foundation::error::{PipelineError, PipelineResult},
    pipeline::{BatchError, ImagePipeline, Source, Transformed},
};

impl ImagePipeline {
    /// Run one job on tokio's blocking pool so async callers never stall their executor.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn process_async(
        self: Arc<Self>,
        source: Source,
        actions: ActionSet,
    ) -> PipelineResult<Transformed> {
        tokio::task::spawn_blocking(move || self.process(&source, &actions))
            .await
            .map_err(|e| PipelineError::Other(anyhow!("transform worker failed: {e}")))?
    }

    /// Async form of [`ImagePipeline::process_batch`].
    ///
    /// The outer error reports a lost worker; the inner one is the batch outcome.
    pub async fn process_batch_async(
        self: Arc<Self>,
        jobs: Vec<(Source, ActionSet)>,
    ) -> PipelineResult<Result<Vec<Transformed>, BatchError>> {
        tokio::task::spawn_blocking(move || self.process_batch(&jobs))
            .await
            .map_err(|e| PipelineError::Other(anyhow!("batch worker failed: {e}")))
    }
}
