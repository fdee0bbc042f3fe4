use std::f64::consts::PI;
use serde::{Serialize, Deserialize};

use crate::spiral::{self, ProcResult};

/// Resist tone, passed through to the renderer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resist {
    #[serde(rename = "+", alias = "positive")]
    Positive,
    #[serde(rename = "-", alias = "negative")]
    Negative,
}

/// Waveguide routing template.
/// Only the bend radius and cladding width feed the spiral geometry;
/// the rest is carried for the renderer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WaveguideTemplate {
    #[serde(default = "WaveguideTemplate::default_bend_radius")]
    pub bend_radius: f64,
    #[serde(default = "WaveguideTemplate::default_wg_width")]
    pub wg_width: f64,
    #[serde(default = "WaveguideTemplate::default_clad_width")]
    pub clad_width: f64,
    #[serde(default = "WaveguideTemplate::default_layer")]
    pub layer: u16,
    #[serde(default)]
    pub datatype: u16,
    #[serde(default = "WaveguideTemplate::default_resist")]
    pub resist: Resist,
}
impl WaveguideTemplate {
    pub fn default_bend_radius() -> f64 {
        50.0
    }
    pub fn default_wg_width() -> f64 {
        2.0
    }
    pub fn default_clad_width() -> f64 {
        10.0
    }
    pub fn default_layer() -> u16 {
        1
    }
    pub fn default_resist() -> Resist {
        Resist::Positive
    }

    /// Template with the given bend radius and default everything else.
    pub fn with_bend_radius(bend_radius: f64) -> Self {
        WaveguideTemplate{bend_radius, ..Default::default()}
    }

    /// Path length saved at each 90 degree bend compared to a sharp corner.
    pub fn corner_dl(&self) -> f64 {
        2.0 * self.bend_radius - 0.25 * (2.0 * PI * self.bend_radius)
    }

    /// Gap between parallel runs when the caller gives none.
    pub fn default_spacing(&self) -> f64 {
        3.0 * self.clad_width
    }

    /// Check that the template dimensions are usable.
    pub fn validate(&self) -> ProcResult<()> {
        for (name, value) in [
            ("bend_radius", self.bend_radius),
            ("wg_width", self.wg_width),
            ("clad_width", self.clad_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                spiral::err_spec(&format!("waveguide template {name} must be positive and finite (got {value})"))?;
            }
        }
        Ok(())
    }
}
impl Default for WaveguideTemplate {
    fn default() -> Self {
        WaveguideTemplate{
            bend_radius: WaveguideTemplate::default_bend_radius(),
            wg_width: WaveguideTemplate::default_wg_width(),
            clad_width: WaveguideTemplate::default_clad_width(),
            layer: WaveguideTemplate::default_layer(),
            datatype: 0,
            resist: WaveguideTemplate::default_resist(),
        }
    }
}
