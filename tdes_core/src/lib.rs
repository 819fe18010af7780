pub mod config;
pub mod crypto;
pub mod error;
pub mod pipeline;

pub use config::PipelineConfig;
pub use crypto::cipher_context::*;
pub use crypto::cipher_traits::*;
pub use crypto::cipher_types::*;
pub use crypto::key::{Key, KeyTriple};
pub use error::{CipherError, ConfigError};
pub use pipeline::Pipeline;
