//! Order-preserving parallel ECB pipeline:
//! bytes -> [`BlockPartitioner`] -> [`ParallelDispatcher`] -> [`StreamAssembler`] -> bytes.

pub mod assembler;
pub mod block;
pub mod dispatcher;
pub mod partitioner;

pub use assembler::StreamAssembler;
pub use block::{BLOCK_SIZE, Block, BlockResult};
pub use dispatcher::{ParallelDispatcher, Partition, transform_partition};
pub use partitioner::BlockPartitioner;

use crate::config::PipelineConfig;
use crate::crypto::cipher_context::CipherContext;
use crate::crypto::cipher_io::{read_all, write_all};
use crate::crypto::cipher_types::{CipherInput, CipherOutput};
use crate::error::CipherError;
use log::info;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    partitioner: BlockPartitioner,
    dispatcher: Arc<ParallelDispatcher>,
    assembler: StreamAssembler,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Result<Self, CipherError> {
        let dispatcher = ParallelDispatcher::new(&config)?;
        Ok(Self {
            config,
            partitioner: BlockPartitioner::new(config.boundary),
            dispatcher: Arc::new(dispatcher),
            assembler: StreamAssembler::new(config.boundary),
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs the whole stream through the cipher. The result is the same for
    /// any worker count.
    pub fn process_bytes(
        &self,
        context: &CipherContext,
        data: &[u8],
    ) -> Result<Vec<u8>, CipherError> {
        let started = Instant::now();
        let operation = context.operation();

        let blocks = self.partitioner.split(data, operation)?;
        let results = self.dispatcher.dispatch(&blocks, context)?;
        let output = self.assembler.assemble(results, blocks.len(), operation)?;

        info!(
            "{} of {} bytes ({} blocks) on {} workers produced {} bytes in {:?}",
            operation,
            data.len(),
            blocks.len(),
            self.dispatcher.workers(),
            output.len(),
            started.elapsed()
        );
        Ok(output)
    }

    /// Async front end over buffers and files. The pipeline runs on tokio's
    /// blocking pool; the output is only touched once it has succeeded.
    pub async fn process(
        &self,
        context: &CipherContext,
        input: CipherInput,
        output: &mut CipherOutput,
    ) -> Result<(), CipherError> {
        let this = self.clone();
        let context = context.clone();

        let processed = Self::run_blocking_task(move || {
            let data = read_all(input)?;
            this.process_bytes(&context, &data)
        })
        .await?;

        write_all(output, &processed)?;
        Ok(())
    }

    async fn run_blocking_task<F, T>(task: F) -> Result<T, CipherError>
    where
        F: FnOnce() -> Result<T, CipherError> + Send + 'static,
        T: Send + 'static,
    {
        tokio::task::spawn_blocking(task).await?
    }
}
