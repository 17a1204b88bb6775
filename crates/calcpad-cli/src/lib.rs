//! calcpad CLI Library
//!
//! Headless front end for the calcpad engine: keystroke scripts go in, the
//! published display state comes out.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
mod session;

pub use commands::{Cli, FormatArg};
pub use config::{CliConfig, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use session::{render_state, Session};
