//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::{color::ColorError, constants::MAX_GRID_DIMENSION};

/// A function has no real value at `x`.
///
/// This is the only recoverable failure while plotting: the renderer maps it
/// to a blank cell and keeps going.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainError {
    pub x: f64,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function undefined at x = {}", self.x)
    }
}
impl Error for DomainError {}

/// Precise configuration faults.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositive { field: &'static str, value: f64 },
    NonFinite(&'static str),
    ZeroCharsPerUnit,
    ZeroTurns,
    GridTooLarge { axis: &'static str, cells: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { field, value } => {
                write!(f, "{field} must be > 0, got {value}")
            }
            ConfigError::NonFinite(field) => write!(f, "{field} must be a finite number"),
            ConfigError::ZeroCharsPerUnit => f.write_str("chars per unit must be at least 1"),
            ConfigError::ZeroTurns => f.write_str("coil needs at least one turn"),
            ConfigError::GridTooLarge { axis, cells } => write!(
                f,
                "plot would be {cells:.0} cells {axis}, limit is {MAX_GRID_DIMENSION}"
            ),
        }
    }
}
impl Error for ConfigError {}

/// What went wrong while parsing an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprErrorKind {
    UnexpectedChar(char),
    UnexpectedEnd,
    BadNumber,
    UnknownIdent(String),
    TrailingInput,
    TooDeep,
}

/// Expression parse failure at byte `offset` of the source.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprError {
    pub offset: usize,
    pub kind: ExprErrorKind,
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at = self.offset;
        match &self.kind {
            ExprErrorKind::UnexpectedChar(c) => write!(f, "unexpected '{c}' at offset {at}"),
            ExprErrorKind::UnexpectedEnd => f.write_str("expression ended unexpectedly"),
            ExprErrorKind::BadNumber => write!(f, "malformed number at offset {at}"),
            ExprErrorKind::UnknownIdent(name) => {
                write!(f, "unknown name `{name}` at offset {at}")
            }
            ExprErrorKind::TrailingInput => write!(f, "unexpected input after offset {at}"),
            ExprErrorKind::TooDeep => write!(f, "expression nested too deeply at offset {at}"),
        }
    }
}
impl Error for ExprError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum GraphError {
    Io(io::Error),
    Config(ConfigError),
    Expr(ExprError),
    Color(ColorError),
    UnknownFunction(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::Io(e) => write!(f, "{e}"),
            GraphError::Config(e) => write!(f, "{e}"),
            GraphError::Expr(e) => write!(f, "{e}"),
            GraphError::Color(e) => write!(f, "{e}"),
            GraphError::UnknownFunction(name) => write!(
                f,
                "no function named `{name}` (run `termigraph functions` for the list)"
            ),
        }
    }
}
impl Error for GraphError {}

// automatic conversions
impl From<io::Error> for GraphError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ConfigError> for GraphError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
impl From<ExprError> for GraphError {
    fn from(e: ExprError) -> Self {
        Self::Expr(e)
    }
}
impl From<ColorError> for GraphError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}
