//! rollwrap library
//!
//! Core functionality for the rollwrap build tool: declarative bundle
//! specs, a pure planning pass that turns them into bundler actions,
//! and the collaborators that resolve files, generate configs, and run
//! the external process.

pub mod cli;
pub mod config;
pub mod error;
pub mod linker;
pub mod planner;
pub mod resolver;
pub mod runner;
pub mod template;

pub use cli::Cli;
pub use config::Config;
pub use planner::BundlePlanner;
