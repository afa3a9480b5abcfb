pub mod cli;

use crate::domain::model::Target;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ChartError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// STScI Digitized Sky Survey cutout service.
pub const DEFAULT_ENDPOINT: &str = "https://archive.stsci.edu/cgi-bin/dss_search";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "fchart")]
#[command(about = "Generate finding charts from sky-survey cutouts")]
pub struct CliConfig {
    /// Either a batch file of `source_id ra dec` rows, or NAME RA DEC (degrees)
    #[arg(value_name = "FILE | NAME RA DEC", num_args = 0.., allow_negative_numbers = true)]
    pub args: Vec<String>,

    /// Cutout service URL
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Survey identifier passed to the cutout service
    #[arg(long, default_value = "DSS")]
    pub survey: String,

    /// Field-of-view radius in arcminutes
    #[arg(long, default_value = "2.0")]
    pub fov_arcmin: f64,

    /// Directory charts are written into
    #[arg(long, default_value = ".")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Invocation mode, resolved from positional-argument arity.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// One `source_id ra dec` row per target, processed in file order.
    Batch(String),
    Single(Target),
}

impl CliConfig {
    /// Dispatch on arity: one positional argument is a batch file, three are
    /// `NAME RA DEC`. Anything else is answered with usage text.
    pub fn mode(&self) -> Result<Mode> {
        match self.args.as_slice() {
            [file] => Ok(Mode::Batch(file.clone())),
            [name, ra, dec] => {
                let ra_deg = parse_degrees("ra", ra)?;
                let dec_deg = parse_degrees("dec", dec)?;
                Ok(Mode::Single(Target::new(name.clone(), ra_deg, dec_deg)))
            }
            _ => Err(ChartError::Usage),
        }
    }
}

fn parse_degrees(field: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ChartError::CoordinateError {
            field: field.to_string(),
            value: value.to_string(),
        })
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn survey(&self) -> &str {
        &self.survey
    }

    fn fov_arcmin(&self) -> f64 {
        self.fov_arcmin
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint", &self.endpoint)?;
        validation::validate_non_empty_string("survey", &self.survey)?;
        validation::validate_positive("fov_arcmin", self.fov_arcmin)?;
        validation::validate_non_empty_string("output_path", &self.output_path)?;
        Ok(())
    }
}
