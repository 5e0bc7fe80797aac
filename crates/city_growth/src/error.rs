// ---------------------------------------------------------------------------
// Error types for setup and grid access
// ---------------------------------------------------------------------------

use std::fmt;

use crate::grid::ZoneKind;

/// Problems detected while assembling the simulation. All of them are fatal:
/// setup aborts instead of running with a half-configured city.
#[derive(Debug)]
pub enum ConfigError {
    /// The grid must have at least one cell.
    EmptyGrid { width: usize, height: usize },
    /// No attribute entry was supplied for a building archetype.
    MissingArchetype(ZoneKind),
    /// More than one attribute entry was supplied for the same archetype.
    DuplicateArchetype(ZoneKind),
    /// A tunable is outside the range the models accept.
    InvalidParameter { name: &'static str, value: f64 },
    /// The configuration file could not be parsed.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyGrid { width, height } => {
                write!(f, "grid must not be empty (got {width}x{height})")
            }
            ConfigError::MissingArchetype(kind) => {
                write!(f, "missing attributes for archetype {}", kind.label())
            }
            ConfigError::DuplicateArchetype(kind) => {
                write!(f, "archetype {} is defined more than once", kind.label())
            }
            ConfigError::InvalidParameter { name, value } => {
                write!(f, "parameter `{name}` is out of range: {value}")
            }
            ConfigError::Parse(e) => write!(f, "failed to parse configuration: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Grid access outside its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    OutOfBounds { x: usize, y: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { x, y } => write!(f, "cell ({x}, {y}) is outside the grid"),
        }
    }
}

impl std::error::Error for GridError {}
