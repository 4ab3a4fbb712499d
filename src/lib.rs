pub mod analyzers;
pub mod cli;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod renderers;
pub mod settings;
pub mod utils;
pub mod writers;

pub use error::{DashboardError, DataLoadError, EmptyAggregateWarning, Result};
