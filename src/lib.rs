// Library surface for headless/integration tests and reuse.
// Terminal drawing and the CLI live in main.rs.
pub mod app_dirs;
pub mod config;
pub mod countdown;
pub mod engine;
pub mod error;
pub mod input;
pub mod logging;
pub mod runtime;
pub mod scoring;
pub mod session;
pub mod theme;
pub mod typing_test;
pub mod words;

pub use engine::SessionEngine;
pub use error::{Error, Result};
