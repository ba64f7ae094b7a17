pub mod cli;
pub mod config;
pub mod error;
pub mod language;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod types;

pub use error::{DrdError, Result};
pub use language::Language;
pub use pipeline::{Pipeline, PipelineOutput, PipelineReport};
pub use types::Record;
