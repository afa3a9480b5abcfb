use crate::core::{Pipeline, Target};
use crate::utils::error::Result;

/// Drives the chart pipeline over a list of targets, strictly sequentially:
/// each target's fetch, annotation, and write completes before the next
/// starts. The first failure aborts the remaining targets.
pub struct ChartEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ChartEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Generate one chart per target, returning the written file names in
    /// input order.
    pub async fn run(&self, targets: &[Target]) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(targets.len());

        for target in targets {
            tracing::info!(
                "Generating chart for '{}' (ra={} dec={})",
                target.name,
                target.coord.ra_deg,
                target.coord.dec_deg
            );

            let cutout = self.pipeline.extract(target).await?;
            let chart = self.pipeline.transform(cutout).await?;
            let path = self.pipeline.load(target, chart).await?;

            tracing::info!("Chart saved to: {}", path);
            written.push(path);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cutout;
    use crate::utils::error::ChartError;
    use async_trait::async_trait;
    use image::{Rgb, RgbImage};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Pipeline stub that fails on a chosen target name.
    struct StubPipeline {
        fail_on: Option<String>,
        extracted: AtomicUsize,
        loaded: AtomicUsize,
    }

    impl StubPipeline {
        fn new(fail_on: Option<&str>) -> Self {
            Self {
                fail_on: fail_on.map(str::to_string),
                extracted: AtomicUsize::new(0),
                loaded: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Pipeline for StubPipeline {
        async fn extract(&self, target: &Target) -> Result<Cutout> {
            self.extracted.fetch_add(1, Ordering::SeqCst);
            if self.fail_on.as_deref() == Some(target.name.as_str()) {
                return Err(ChartError::EmptyCutout {
                    survey: "DSS".to_string(),
                });
            }
            Ok(Cutout {
                survey: "DSS".to_string(),
                image: RgbImage::from_pixel(8, 8, Rgb([0, 0, 0])),
            })
        }

        async fn transform(&self, cutout: Cutout) -> Result<RgbImage> {
            Ok(cutout.image)
        }

        async fn load(&self, target: &Target, _chart: RgbImage) -> Result<String> {
            self.loaded.fetch_add(1, Ordering::SeqCst);
            Ok(format!("{}.png", target.name))
        }
    }

    fn targets(names: &[&str]) -> Vec<Target> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Target::new(*name, i as f64, -(i as f64)))
            .collect()
    }

    #[tokio::test]
    async fn test_run_processes_all_targets_in_order() {
        let engine = ChartEngine::new(StubPipeline::new(None));
        let written = engine.run(&targets(&["T1", "T2", "T3"])).await.unwrap();
        assert_eq!(written, vec!["T1.png", "T2.png", "T3.png"]);
    }

    #[tokio::test]
    async fn test_first_failure_aborts_remaining_targets() {
        let pipeline = StubPipeline::new(Some("T2"));
        let engine = ChartEngine::new(pipeline);

        let err = engine.run(&targets(&["T1", "T2", "T3"])).await.unwrap_err();
        assert!(matches!(err, ChartError::EmptyCutout { .. }));

        // T1 completed, T2 failed during extract, T3 was never started.
        assert_eq!(engine.pipeline.extracted.load(Ordering::SeqCst), 2);
        assert_eq!(engine.pipeline.loaded.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_run_with_no_targets_writes_nothing() {
        let engine = ChartEngine::new(StubPipeline::new(None));
        let written = engine.run(&[]).await.unwrap();
        assert!(written.is_empty());
    }
}
