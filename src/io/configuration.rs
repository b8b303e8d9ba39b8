//! Filter defaults, fixture constants and output settings

// Reference cascade parameters
/// Plane-wave propagation angle in degrees
pub const DEFAULT_THETA_DEGREES: f64 = 0.0;
/// Number of lattice orders per cascade stage
pub const DEFAULT_ORDER: usize = 2;
/// Samples along the fast axis (n1)
pub const DEFAULT_FAST_SAMPLES: usize = 32;
/// Samples along the slow axis (n2)
pub const DEFAULT_SLOW_SAMPLES: usize = 32;

// Synthetic plane-wave fixture
/// Number of superposed plane waves
pub const PLANE_WAVE_COUNT: usize = 10;
/// Total wavenumber band covered by the plane waves, in units of pi
pub const PLANE_WAVE_BANDWIDTH: f64 = 0.4;

// Safety limits applied to command-line input only; the library accepts any order
/// Maximum allowed field dimension
pub const MAX_FIELD_DIMENSION: usize = 10_000;
/// Maximum lattice order accepted from the command line
pub const MAX_ORDER: usize = 1_000;

/// Fixed seed for reproducible noise
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Nearest-neighbour upscaling applied to exported images
pub const DEFAULT_PIXEL_SCALE: u32 = 8;
/// Largest accepted pixel scale
pub const MAX_PIXEL_SCALE: u32 = 64;
/// File name for the rendered input field
pub const INPUT_IMAGE_NAME: &str = "input.png";
/// Prefix for the rendered forward-error field of each cascade stage
pub const STAGE_IMAGE_PREFIX: &str = "stage";
/// File name for the animated cascade
pub const ANIMATION_NAME: &str = "cascade.gif";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 800;
/// Multiplier applied to the final frame delay
pub const GIF_FINAL_FRAME_HOLD: u32 = 3;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
