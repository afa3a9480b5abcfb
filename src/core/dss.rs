use crate::domain::model::{Cutout, SkyCoord};
use crate::render;
use crate::utils::error::{ChartError, Result};
use reqwest::Client;

/// HTTP client for a DSS-style cutout service.
///
/// The request shape follows the STScI `dss_search` CGI: `r`/`d` are the
/// center in degrees, `h`/`w` the cutout size in arcminutes, `v` the survey
/// identifier. The response body is a single encoded image (GIF by default;
/// PNG and JPEG decode too).
pub struct DssClient {
    client: Client,
    endpoint: String,
    survey: String,
}

impl DssClient {
    pub fn new(endpoint: impl Into<String>, survey: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            survey: survey.into(),
        }
    }

    /// Fetch the cutout centered on `coord`. `fov_arcmin` is the field-of-view
    /// radius, so the requested image spans twice that on each side. With
    /// `reticle` set, crosshair strokes are drawn at the image center the way
    /// the retrieval side of the original tool did.
    pub async fn fetch_cutout(
        &self,
        coord: &SkyCoord,
        fov_arcmin: f64,
        reticle: bool,
    ) -> Result<Cutout> {
        let size_arcmin = 2.0 * fov_arcmin;

        tracing::debug!(
            "Requesting {} cutout at ra={} dec={} ({}' x {}')",
            self.survey,
            coord.ra_deg,
            coord.dec_deg,
            size_arcmin,
            size_arcmin
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("r", coord.ra_deg.to_string()),
                ("d", coord.dec_deg.to_string()),
                ("e", "J2000".to_string()),
                ("h", size_arcmin.to_string()),
                ("w", size_arcmin.to_string()),
                ("v", self.survey.clone()),
                ("f", "gif".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        tracing::debug!("Cutout response: {} bytes", body.len());

        if body.is_empty() {
            return Err(ChartError::EmptyCutout {
                survey: self.survey.clone(),
            });
        }

        let mut image = image::load_from_memory(&body)?.to_rgb8();
        if reticle {
            render::draw_reticle(&mut image);
        }

        Ok(Cutout {
            survey: self.survey.clone(),
            image,
        })
    }
}
