pub mod commands;
pub mod http;
pub mod path;
pub mod runtime;
pub mod style;
