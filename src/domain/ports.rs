use crate::domain::model::{Cutout, Target};
use crate::utils::error::Result;
use async_trait::async_trait;
use image::RgbImage;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn survey(&self) -> &str;
    fn fov_arcmin(&self) -> f64;
    fn output_path(&self) -> &str;
}

/// Per-target chart generation: fetch the cutout, draw the overlay, write the
/// PNG. Each stage may fail; a failure aborts the remaining batch targets.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self, target: &Target) -> Result<Cutout>;
    async fn transform(&self, cutout: Cutout) -> Result<RgbImage>;
    async fn load(&self, target: &Target, chart: RgbImage) -> Result<String>;
}
