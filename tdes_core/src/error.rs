use thiserror::Error;

/// Problems with keys, operation flags or pipeline settings.
///
/// These are always detected before any block is touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("expected exactly {expected} keys, got {actual}")]
    KeyCount { expected: usize, actual: usize },

    #[error("key {position}: {text:?} is not a hexadecimal integer")]
    MalformedKey { position: usize, text: String },

    #[error("key {position}: {text:?} does not fit in 56 bits")]
    KeyOutOfRange { position: usize, text: String },

    #[error("key value {0:#x} does not fit in 56 bits")]
    KeyTooWide(u64),

    #[error("unknown operation {0:?}, expected \"enc\" or \"dec\"")]
    UnknownOperation(String),

    #[error("unknown boundary policy {0:?}, expected \"pad\" or \"reject\"")]
    UnknownBoundaryPolicy(String),

    #[error("worker count must be at least 1")]
    ZeroWorkers,
}

#[derive(Debug, Error)]
pub enum CipherError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("input length {len} is not a multiple of the {block_size}-byte block size")]
    InputAlignment { len: usize, block_size: usize },

    #[error("ciphertext carries no length trailer")]
    MissingTrailer,

    #[error("length trailer records {recorded} bytes for a {available}-byte payload")]
    InvalidTrailer { recorded: u64, available: usize },

    #[error(
        "worker failed on partition {partition} (blocks {first_block}..{end_block}) \
         after {attempts} attempt(s): {reason}"
    )]
    WorkerExecution {
        partition: usize,
        first_block: usize,
        end_block: usize,
        attempts: usize,
        reason: String,
    },

    #[error("result set does not cover block {index} exactly once")]
    IncompleteResults { index: usize },

    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("blocking task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
