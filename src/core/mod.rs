pub mod batch;
pub mod dss;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{Cutout, SkyCoord, Target};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
