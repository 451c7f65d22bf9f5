use serde::{Deserialize, Serialize};

use crate::{CarId, FrameNumber, Real};

/// One tracked-vehicle row from a per-camera CSV export.
///
/// `fbr_x`/`bbr_x` are the front/back bumper longitudinal positions and `y`
/// the transverse position, all in meters; `speed` is in m/s. Exports without
/// a speed column load with `speed` zeroed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryRecord {
    #[serde(rename = "ID")]
    pub id: CarId,
    #[serde(rename = "Frame #")]
    pub frame: FrameNumber,
    #[serde(rename = "Timestamp")]
    pub timestamp: Real,
    pub y: Real,
    pub fbr_x: Real,
    pub bbr_x: Real,
    #[serde(default)]
    pub speed: Real,
}
