//! Command-line interface running the two-stage lattice cascade

use crate::algorithm::cascade::{Cascade, CascadeResult};
use crate::analysis::statistics::{FieldSummary, energy_ratio};
use crate::io::configuration::{
    ANIMATION_NAME, DEFAULT_FAST_SAMPLES, DEFAULT_ORDER, DEFAULT_PIXEL_SCALE, DEFAULT_SEED,
    DEFAULT_SLOW_SAMPLES, DEFAULT_THETA_DEGREES, GIF_FINAL_FRAME_HOLD, GIF_FRAME_DELAY_MS,
    INPUT_IMAGE_NAME, MAX_FIELD_DIMENSION, MAX_ORDER, MAX_PIXEL_SCALE, STAGE_IMAGE_PREFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_field_as_png, load_field_from_png};
use crate::io::progress::ProgressManager;
use crate::io::visualization::StageAnimation;
use crate::math::plane_waves::PlaneWaves;
use clap::{ArgAction, Parser};
use ndarray::Array2;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "burg2d")]
#[command(
    author,
    version,
    about = "Whiten an image with a two-stage 2-D Burg lattice cascade",
    allow_negative_numbers = true
)]
/// Command-line arguments for the cascade tool
pub struct Cli {
    /// Plane-wave propagation angle in degrees
    #[arg(value_name = "THETA", default_value_t = DEFAULT_THETA_DEGREES)]
    pub theta: f64,

    /// Lattice orders applied by each stage
    #[arg(value_name = "ORDER", default_value_t = DEFAULT_ORDER)]
    pub order: usize,

    /// Samples along the fast axis of the synthetic image
    #[arg(long, default_value_t = DEFAULT_FAST_SAMPLES)]
    pub n1: usize,

    /// Samples along the slow axis of the synthetic image
    #[arg(long, default_value_t = DEFAULT_SLOW_SAMPLES)]
    pub n2: usize,

    /// Filter this PNG instead of the synthetic plane waves
    #[arg(short, long, value_name = "PNG")]
    pub input: Option<PathBuf>,

    /// Add uniform noise of this amplitude to the synthetic image
    #[arg(long, value_name = "AMPLITUDE")]
    pub noise: Option<f64>,

    /// Random seed for the noise
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Write the input and every stage output as PNG images here
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Pixels per sample in exported images
    #[arg(long, default_value_t = DEFAULT_PIXEL_SCALE)]
    pub scale: u32,

    /// Also write an animated GIF stepping through the stages
    #[arg(short, long)]
    pub animate: bool,

    /// Increase verbosity (-v coefficients, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Reject arguments outside the supported ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first offending argument
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("n1", self.n1), ("n2", self.n2)] {
            if value == 0 || value > MAX_FIELD_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_FIELD_DIMENSION}"),
                ));
            }
        }
        if self.order > MAX_ORDER {
            return Err(invalid_parameter(
                "order",
                &self.order,
                &format!("must not exceed {MAX_ORDER}"),
            ));
        }
        if self.scale == 0 || self.scale > MAX_PIXEL_SCALE {
            return Err(invalid_parameter(
                "scale",
                &self.scale,
                &format!("must be between 1 and {MAX_PIXEL_SCALE}"),
            ));
        }
        if !self.theta.is_finite() {
            return Err(invalid_parameter("theta", &self.theta, &"must be finite"));
        }
        Ok(())
    }
}

/// File name for the forward-error image of stage `index` (zero-based)
pub fn stage_image_name(index: usize) -> String {
    format!("{STAGE_IMAGE_PREFIX}{}.png", index + 1)
}

/// Runs one cascade according to the command-line arguments
pub struct Session {
    cli: Cli,
}

impl Session {
    /// Create a session for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the PNG input if given, otherwise synthesize plane waves
    ///
    /// # Errors
    ///
    /// Returns an error if the PNG cannot be loaded or the synthetic field
    /// parameters are invalid
    pub fn load_input(&self) -> Result<Array2<f32>> {
        if let Some(path) = &self.cli.input {
            return load_field_from_png(path);
        }

        let waves = PlaneWaves::new(self.cli.theta);
        let waves = match self.cli.noise {
            Some(amplitude) => waves.with_noise(amplitude, self.cli.seed),
            None => waves,
        };
        waves.render(self.cli.n1, self.cli.n2)
    }

    /// Validate arguments, load the input and run the cascade
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation or input loading fails
    pub fn run(&self) -> Result<CascadeResult<f32>> {
        self.cli.validate()?;
        let input = self.load_input()?;

        let cascade = Cascade::new(self.cli.order);
        let mut progress = if self.cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };
        let result = cascade.apply_observed(&input.view(), &mut progress)?;
        progress.finish();

        log_summary(&result);
        Ok(result)
    }

    /// Write the requested images for a finished cascade
    ///
    /// Returns the paths written, which is empty when no output directory
    /// was requested.
    ///
    /// # Errors
    ///
    /// Returns an error if any image cannot be rendered or written
    pub fn export(&self, result: &CascadeResult<f32>) -> Result<Vec<PathBuf>> {
        let Some(dir) = &self.cli.output_dir else {
            return Ok(Vec::new());
        };

        let mut fields = vec![(INPUT_IMAGE_NAME.to_string(), result.input().view())];
        for (index, prediction) in result.stages().iter().enumerate() {
            fields.push((stage_image_name(index), prediction.forward().view()));
        }

        let mut written = Vec::with_capacity(fields.len() + 1);
        let mut animation = self.cli.animate.then(|| StageAnimation::new(self.cli.scale));

        for (name, field) in &fields {
            let clip = FieldSummary::of(field).clip();
            let path = dir.join(name);
            export_field_as_png(field, clip, self.cli.scale, &path)?;
            if let Some(animation) = animation.as_mut() {
                animation.push(field, clip)?;
            }
            info!(path = %path.display(), "exported image");
            written.push(path);
        }

        if let Some(animation) = animation {
            let path = dir.join(ANIMATION_NAME);
            animation.export_gif(&path, GIF_FRAME_DELAY_MS, GIF_FINAL_FRAME_HOLD)?;
            info!(path = %path.display(), frames = animation.frame_count(), "exported animation");
            written.push(path);
        }

        Ok(written)
    }
}

fn log_summary(result: &CascadeResult<f32>) {
    let input = FieldSummary::of(&result.input().view());
    info!(
        field = "input",
        min = input.min,
        max = input.max,
        rms = input.rms(),
        "field summary"
    );

    for (index, prediction) in result.stages().iter().enumerate() {
        let forward = FieldSummary::of(&prediction.forward().view());
        let ratio = energy_ratio(&result.input().view(), &prediction.forward().view());
        info!(
            stage = index + 1,
            direction = %prediction.direction(),
            min = forward.min,
            max = forward.max,
            rms = forward.rms(),
            energy_ratio = ?ratio,
            coefficients = ?prediction.coefficients(),
            "field summary"
        );
    }
}
