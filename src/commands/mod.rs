//! CLI command implementations.
//!
//! - **compute**: score, filter and export a survey file
//! - **init**: write a default `.scalemap.toml`

pub mod compute;
pub mod init;

pub use compute::{handle_compute, run_pipeline, ComputeConfig};
pub use init::init_config;
