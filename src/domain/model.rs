use image::RgbImage;
use serde::{Deserialize, Serialize};

/// An ICRS/J2000 sky position in degrees. Values are passed through to the
/// cutout service uninspected; no range normalization is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyCoord {
    pub ra_deg: f64,
    pub dec_deg: f64,
}

/// One chart target. The name doubles as the output filename stem, so two
/// targets with the same name silently overwrite each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    pub coord: SkyCoord,
}

impl Target {
    pub fn new(name: impl Into<String>, ra_deg: f64, dec_deg: f64) -> Self {
        Self {
            name: name.into(),
            coord: SkyCoord { ra_deg, dec_deg },
        }
    }
}

/// A decoded survey cutout, centered on the requested coordinate.
#[derive(Debug, Clone)]
pub struct Cutout {
    pub survey: String,
    pub image: RgbImage,
}
