use anyhow::{bail, Result};

use crate::Real;

/// Longitudinal visual range of a camera view, in feet.
///
/// The tables are fixed survey data; an unknown id is a caller bug and fails
/// the lookup instead of falling back to a default span.
pub fn camera_range(camera_num: u32) -> Result<(Real, Real)> {
    let range = match camera_num {
        1 => (200.0, 440.0),
        2 => (400.0, 680.0),
        3 => (630.0, 790.0),
        4 => (600.0, 810.0),
        5 => (700.0, 950.0),
        6 => (820.0, 1240.0),
        _ => bail!("unknown camera id {camera_num}"),
    };
    Ok(range)
}

/// Longitudinal span covered by all camera views together, in feet.
pub fn corridor_range() -> (Real, Real) {
    (200.0, 1200.0)
}

/// Transverse band of a lane, in feet. Closed on both ends.
///
/// Lanes 5..=8 sit across the median, hence the gap after 48 ft.
pub fn lane_band(lane_num: u32) -> Result<(Real, Real)> {
    let band = match lane_num {
        1 => (0.0, 12.0),
        2 => (12.0, 24.0),
        3 => (24.0, 36.0),
        4 => (36.0, 48.0),
        5 => (72.0, 84.0),
        6 => (84.0, 96.0),
        7 => (96.0, 108.0),
        8 => (108.0, 120.0),
        _ => bail!("unknown lane id {lane_num}"),
    };
    Ok(band)
}
