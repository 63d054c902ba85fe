pub mod args;
pub mod commands;
pub mod error;
pub mod invocation;
pub mod logging;
pub mod tools;
