use std::fmt::Display;

use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

/// Chooses between human text and pretty JSON on stdout.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn emit<D: Display, T: Serialize>(&self, text: D, json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => println!("{text}"),
            OutputMode::Json => println!("{}", serde_json::to_string_pretty(json_value)?),
        }
        Ok(())
    }
}
