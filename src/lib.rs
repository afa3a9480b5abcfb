pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig, Mode};
pub use core::{batch, dss::DssClient, engine::ChartEngine, pipeline::ChartPipeline};
pub use domain::model::{Cutout, SkyCoord, Target};
pub use utils::error::{ChartError, Result};
