pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod pipeline;
pub mod types;
