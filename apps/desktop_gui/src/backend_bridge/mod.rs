//! Backend side of the GUI: command types and the worker thread that runs
//! classification requests on a tokio runtime.

pub mod commands;
pub mod runtime;
