//! Keystroke session over one view model

use std::io::{BufRead, Write};

use calcpad::keypad::parse_keys;
use calcpad::viewmodel::{CalculatorViewModel, UiState};
use tracing::{debug, info};

use crate::config::{CliConfig, OutputFormat};
use crate::error::{CliError, CliResult};

/// Renders a published state in the configured format
pub fn render_state(state: &UiState, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(state)?),
        OutputFormat::Text => {
            let mut lines = Vec::with_capacity(3);
            if !state.expression.is_empty() {
                lines.push(state.expression.clone());
            }
            lines.push(state.display_value.clone());
            if let Some(message) = &state.error_message {
                lines.push(format!("error: {message}"));
            }
            Ok(lines.join("\n"))
        }
    }
}

/// One calculator session fed by keystroke scripts
#[derive(Debug)]
pub struct Session {
    view_model: CalculatorViewModel,
    config: CliConfig,
}

impl Session {
    /// Starts a session in the all-clear state
    #[must_use]
    pub fn new(config: CliConfig) -> Self {
        Self {
            view_model: CalculatorViewModel::new(),
            config,
        }
    }

    /// Returns the last published state
    #[must_use]
    pub fn state(&self) -> &UiState {
        self.view_model.state()
    }

    /// Presses every key of `script` and writes the resulting state
    ///
    /// A divide-by-zero is shown as part of the state, not returned as an
    /// error; only an unrecognised key fails, before any key is pressed.
    pub fn run_script<W: Write>(&mut self, script: &str, out: &mut W) -> CliResult<()> {
        let actions = parse_keys(script).map_err(|key| CliError::invalid_key(key, script))?;
        debug!(script, keys = actions.len(), "running script");

        for action in actions {
            if let Err(err) = self.view_model.dispatch(action) {
                info!(%err, "calculation error shown");
            }
            if self.config.trace {
                self.write_state(out)?;
            }
        }

        if !self.config.trace {
            self.write_state(out)?;
        }
        Ok(())
    }

    /// Runs every line of `input` as a script against this session
    pub fn run_lines<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> CliResult<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            self.run_script(&line, out)?;
        }
        Ok(())
    }

    fn write_state<W: Write>(&self, out: &mut W) -> CliResult<()> {
        let rendered = render_state(self.view_model.state(), self.config.format)?;
        writeln!(out, "{rendered}")?;
        Ok(())
    }
}
