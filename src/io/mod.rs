/// Command-line parsing and the cascade session driver
pub mod cli;
/// Defaults and constants
pub mod configuration;
/// Error types
pub mod error;
/// Gray-scale PNG rendering, export and loading
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Progress bars for cascade stages
pub mod progress;
/// Animated GIF export of cascade stages
pub mod visualization;
