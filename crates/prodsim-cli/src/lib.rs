//! # Production Simulator CLI
//!
//! 命令列驅動程式

pub mod app;
pub mod config;
pub mod logging;
