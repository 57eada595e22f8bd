#![forbid(unsafe_code)]

pub mod config;
pub mod console;
pub mod report;
pub mod session;
