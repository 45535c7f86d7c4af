//! Centralised error types used across the crate.
//!
//! Rendering never fails; these only surface from ingest, colour parsing,
//! configuration and terminal I/O.

use std::{error::Error, fmt, io};

use crate::core::{color::ColorError, data::ParseError};

/// Precise configuration faults.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    EmptyPalette,
    NonFiniteBound { field: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyPalette => f.write_str("palette must contain at least one glyph"),
            ConfigError::NonFiniteBound { field, value } => {
                write!(f, "{field} must be a finite number, got {value}")
            }
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum ChartError {
    Io(io::Error),
    Parse(ParseError),
    Color(ColorError),
    Config(ConfigError),
    EmptyData,
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::Io(e) => write!(f, "{e}"),
            ChartError::Parse(e) => write!(f, "{e}"),
            ChartError::Color(e) => write!(f, "{e}"),
            ChartError::Config(e) => write!(f, "{e}"),
            ChartError::EmptyData => f.write_str("no values to plot"),
        }
    }
}
impl Error for ChartError {}

// automatic conversions
impl From<io::Error> for ChartError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseError> for ChartError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}
impl From<ColorError> for ChartError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}
impl From<ConfigError> for ChartError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
