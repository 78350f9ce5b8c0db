//! Command handlers behind the CLI subcommands.
//!
//! Each handler takes the style transfer API, the runtime (where it reads
//! input) and an output writer, so tests can drive them with mocks and
//! in-memory buffers.

pub mod config;
mod input;
mod results;
pub mod services;
mod transfer;

pub use config::{Config, ConfigOverrides};
pub use results::{list_results, save_result, show_result};
pub use services::{Services, build_services};
pub use transfer::{TransferOptions, submit, transfer};
