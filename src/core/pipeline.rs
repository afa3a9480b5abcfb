use crate::core::dss::DssClient;
use crate::core::{ConfigProvider, Cutout, Pipeline, Storage, Target};
use crate::render;
use crate::utils::error::Result;
use image::RgbImage;
use std::io::Cursor;

/// Chart generation for one target at a time: fetch the cutout, draw the
/// fixed overlay, encode and write `<name>.png`.
pub struct ChartPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    cutouts: DssClient,
}

impl<S: Storage, C: ConfigProvider> ChartPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let cutouts = DssClient::new(config.endpoint(), config.survey());
        Self {
            storage,
            config,
            cutouts,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ChartPipeline<S, C> {
    async fn extract(&self, target: &Target) -> Result<Cutout> {
        tracing::debug!("Fetching cutout for '{}'", target.name);
        self.cutouts
            .fetch_cutout(&target.coord, self.config.fov_arcmin(), true)
            .await
    }

    async fn transform(&self, cutout: Cutout) -> Result<RgbImage> {
        let Cutout { survey, mut image } = cutout;
        render::annotate_chart(&mut image, &survey);
        Ok(image)
    }

    async fn load(&self, target: &Target, chart: RgbImage) -> Result<String> {
        let file_name = format!("{}.png", target.name);

        let mut buf = Vec::new();
        chart.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)?;

        self.storage.write_file(&file_name, &buf).await?;
        Ok(file_name)
    }
}
