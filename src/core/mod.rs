//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;

// re-export frequently-used items for convenience
pub use color::{ColorError, RESET, Rgb, colorize, strip_ansi};
pub use config::{Config, ConfigBuilder, Palette};
pub use constants::DEFAULT_LENGTH;
pub use data::{read_samples, read_values, sine_samples};
pub use error::{ChartError, ConfigError};
