//! Runtime abstraction for the system access the CLI needs.
//!
//! Configuration and command handlers go through this trait so they can be
//! tested with `MockRuntime` instead of the real environment.
//!
//! # Structure
//!
//! - `env` - Environment variables
//! - `fs` - Reading JSON/text inputs from files or stdin

mod env;
mod fs;

use anyhow::Result;
use std::env as std_env;
use std::path::Path;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;

    // Input
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn read_stdin(&self) -> Result<String>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }

    fn read_stdin(&self) -> Result<String> {
        self.read_stdin_impl()
    }
}
