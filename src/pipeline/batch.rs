use rayon::prelude::*;
use tracing::warn;

use crate::{
    actions::ActionSet,
    foundation::error::PipelineError,
    pipeline::{ImagePipeline, Source, Transformed},
};

/// One failed batch item.
#[derive(Debug)]
pub struct ItemFailure {
    /// Position of the item in the submitted batch.
    pub index: usize,
    pub error: PipelineError,
}

/// Every failure of a batch, in input order.
///
/// Items never cancel each other: the batch runs to completion and then reports all
/// failures together.
#[derive(thiserror::Error, Debug)]
#[error(
    "{} of {total} batch items failed (first: item {}: {})",
    .failures.len(),
    first_index(.failures),
    first_message(.failures)
)]
pub struct BatchError {
    pub failures: Vec<ItemFailure>,
    /// Number of submitted items.
    pub total: usize,
}

fn first_index(failures: &[ItemFailure]) -> usize {
    failures.first().map_or(0, |f| f.index)
}

fn first_message(failures: &[ItemFailure]) -> String {
    failures
        .first()
        .map_or_else(String::new, |f| f.error.to_string())
}

impl BatchError {
    /// Input indices that failed, ascending.
    pub fn failed_indices(&self) -> Vec<usize> {
        self.failures.iter().map(|f| f.index).collect()
    }
}

impl ImagePipeline {
    /// Run every job on the worker pool; results keep input order.
    ///
    /// Fails with a [`BatchError`] listing every failed item once all jobs have finished.
    #[tracing::instrument(level = "debug", skip_all, fields(items = jobs.len()))]
    pub fn process_batch(
        &self,
        jobs: &[(Source, ActionSet)],
    ) -> Result<Vec<Transformed>, BatchError> {
        collect_aggregate(self.process_batch_partial(jobs))
    }

    /// Like [`ImagePipeline::process_batch`], with one action set shared by every source.
    #[tracing::instrument(level = "debug", skip_all, fields(items = sources.len()))]
    pub fn process_batch_shared(
        &self,
        sources: &[Source],
        actions: &ActionSet,
    ) -> Result<Vec<Transformed>, BatchError> {
        let results = self.fan_out(sources, |source| self.process(source, actions));
        collect_aggregate(results)
    }

    /// One result per job, in input order. Failures are returned in place, not aggregated.
    pub fn process_batch_partial(
        &self,
        jobs: &[(Source, ActionSet)],
    ) -> Vec<Result<Transformed, PipelineError>> {
        self.fan_out(jobs, |(source, actions)| self.process(source, actions))
    }

    fn fan_out<T, F>(&self, items: &[T], job: F) -> Vec<Result<Transformed, PipelineError>>
    where
        T: Sync,
        F: Fn(&T) -> Result<Transformed, PipelineError> + Sync,
    {
        self.pool
            .install(|| items.par_iter().map(&job).collect::<Vec<_>>())
    }
}

fn collect_aggregate(
    results: Vec<Result<Transformed, PipelineError>>,
) -> Result<Vec<Transformed>, BatchError> {
    let total = results.len();
    let mut out = Vec::with_capacity(total);
    let mut failures = Vec::new();
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(item) => out.push(item),
            Err(error) => {
                warn!(index, %error, "batch item failed");
                failures.push(ItemFailure { index, error });
            }
        }
    }
    if failures.is_empty() {
        Ok(out)
    } else {
        Err(BatchError { failures, total })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/batch.rs"]
mod tests;
