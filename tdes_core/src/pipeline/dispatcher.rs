use crate::config::{PipelineConfig, hardware_parallelism};
use crate::crypto::cipher_context::CipherContext;
use crate::error::CipherError;
use crate::pipeline::block::{Block, BlockResult};
use crossbeam::channel;
use log::{debug, warn};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};

/// A contiguous run of blocks handed to one worker.
#[derive(Debug, Clone, Copy)]
pub struct Partition<'a> {
    pub id: usize,
    pub blocks: &'a [Block],
}

impl Partition<'_> {
    /// Block indices covered, as a half-open range.
    pub fn span(&self) -> (usize, usize) {
        match (self.blocks.first(), self.blocks.last()) {
            (Some(first), Some(last)) => (first.index, last.index + 1),
            _ => (0, 0),
        }
    }
}

/// Applies the cipher to every block of a partition. Pure: the output only
/// depends on the blocks and the context, so a partition can be re-run.
pub fn transform_partition(partition: &Partition<'_>, context: &CipherContext) -> Vec<BlockResult> {
    partition
        .blocks
        .iter()
        .map(|block| BlockResult {
            index: block.index,
            data: context.transform_block(block.data),
        })
        .collect()
}

/// Fans partitions out over a fixed-size rayon pool and gathers the results
/// in completion order.
pub struct ParallelDispatcher {
    workers: usize,
    max_retries: usize,
    pool: ThreadPool,
}

impl ParallelDispatcher {
    pub fn new(config: &PipelineConfig) -> Result<Self, CipherError> {
        config.validate()?;

        let available = hardware_parallelism();
        if config.workers > available {
            warn!(
                "Requested {} workers but only {} hardware threads are available",
                config.workers, available
            );
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .thread_name(|i| format!("tdes-worker-{i}"))
            .build()?;

        Ok(Self {
            workers: config.workers,
            max_retries: config.max_retries,
            pool,
        })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Splits `blocks` into `min(workers, len)` contiguous partitions. The
    /// first `len % workers` partitions take one block more than the rest.
    pub fn partition<'a>(&self, blocks: &'a [Block]) -> Vec<Partition<'a>> {
        let count = self.workers.min(blocks.len());
        if count == 0 {
            return Vec::new();
        }

        let base = blocks.len() / count;
        let larger = blocks.len() % count;
        let mut rest = blocks;
        (0..count)
            .map(|id| {
                let size = if id < larger { base + 1 } else { base };
                let (head, tail) = rest.split_at(size);
                rest = tail;
                Partition { id, blocks: head }
            })
            .collect()
    }

    /// Transforms every block and returns the results, unordered.
    ///
    /// Blocks until all partitions have finished. The first failing
    /// partition stops partitions that have not started yet and is returned
    /// as the error; no partial result set escapes.
    pub fn dispatch(
        &self,
        blocks: &[Block],
        context: &CipherContext,
    ) -> Result<Vec<BlockResult>, CipherError> {
        let partitions = self.partition(blocks);
        let (sender, receiver) = channel::unbounded();
        let cancelled = AtomicBool::new(false);

        self.pool.scope(|scope| {
            for partition in &partitions {
                let sender = sender.clone();
                let cancelled = &cancelled;
                scope.spawn(move |_| {
                    if cancelled.load(Ordering::Acquire) {
                        debug!("Partition {} skipped after an earlier failure", partition.id);
                        return;
                    }
                    let outcome = self.run_partition(partition, context);
                    if outcome.is_err() {
                        cancelled.store(true, Ordering::Release);
                    }
                    // the receiver outlives the scope, so this cannot fail
                    let _ = sender.send(outcome);
                });
            }
        });
        drop(sender);

        let mut results = Vec::with_capacity(blocks.len());
        for outcome in receiver.iter() {
            results.extend(outcome?);
        }
        Ok(results)
    }

    fn run_partition(
        &self,
        partition: &Partition<'_>,
        context: &CipherContext,
    ) -> Result<Vec<BlockResult>, CipherError> {
        let (first_block, end_block) = partition.span();
        let mut attempts = 0;

        loop {
            attempts += 1;
            let outcome =
                panic::catch_unwind(AssertUnwindSafe(|| transform_partition(partition, context)));

            match outcome {
                Ok(results) => {
                    debug!(
                        "Partition {} (blocks {}..{}) done after {} attempt(s)",
                        partition.id, first_block, end_block, attempts
                    );
                    return Ok(results);
                }
                Err(payload) if attempts <= self.max_retries => {
                    warn!(
                        "Partition {} (blocks {}..{}) failed: {}; retrying",
                        partition.id,
                        first_block,
                        end_block,
                        panic_message(payload.as_ref())
                    );
                }
                Err(payload) => {
                    return Err(CipherError::WorkerExecution {
                        partition: partition.id,
                        first_block,
                        end_block,
                        attempts,
                        reason: panic_message(payload.as_ref()),
                    });
                }
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}
