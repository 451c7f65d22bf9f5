use anyhow::Result;

use crate::{lane_band, units::feet_to_meters, FrameNumber, TrajectoryRecord};

/// Inclusive frame range, closed on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameWindow {
    pub start: FrameNumber,
    pub end: FrameNumber,
}

impl FrameWindow {
    pub fn new(start: FrameNumber, end: FrameNumber) -> Self {
        FrameWindow { start, end }
    }

    pub fn contains(&self, frame: FrameNumber) -> bool {
        self.start <= frame && frame <= self.end
    }

    pub fn frames(&self) -> impl Iterator<Item = FrameNumber> {
        self.start..=self.end
    }
}

/// Narrows records to one lane's transverse band and a frame window.
///
/// The lane table is in feet while records store meters, so the band is
/// converted before comparison. Both band ends and both window ends are
/// inclusive. Record order is preserved. Fails only on an unknown lane id.
pub fn filter_lane_window(
    records: &[TrajectoryRecord],
    lane_num: u32,
    window: FrameWindow,
) -> Result<Vec<TrajectoryRecord>> {
    let (band_lo_ft, band_hi_ft) = lane_band(lane_num)?;
    let band_lo = feet_to_meters(band_lo_ft);
    let band_hi = feet_to_meters(band_hi_ft);

    Ok(records
        .iter()
        .filter(|r| r.y >= band_lo && r.y <= band_hi && window.contains(r.frame))
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::feet_to_meters;

    fn record(id: u64, frame: u64, y: f64) -> TrajectoryRecord {
        TrajectoryRecord {
            id,
            frame,
            timestamp: frame as f64 / 30.0,
            y,
            fbr_x: 200.0,
            bbr_x: 195.0,
            speed: 31.0,
        }
    }

    #[test]
    fn lane_band_is_inclusive_at_both_ends() {
        let records = vec![
            record(1, 10, feet_to_meters(24.0)),
            record(2, 10, feet_to_meters(36.0)),
            record(3, 10, feet_to_meters(23.0)),
            record(4, 10, feet_to_meters(37.0)),
        ];
        let kept = filter_lane_window(&records, 3, FrameWindow::new(0, 100)).unwrap();
        let ids: Vec<u64> = kept.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn frame_window_is_inclusive_at_both_ends() {
        let y = feet_to_meters(30.0);
        let records = vec![
            record(1, 9, y),
            record(1, 10, y),
            record(1, 20, y),
            record(1, 21, y),
        ];
        let kept = filter_lane_window(&records, 3, FrameWindow::new(10, 20)).unwrap();
        let frames: Vec<u64> = kept.iter().map(|r| r.frame).collect();
        assert_eq!(frames, vec![10, 20]);
    }

    #[test]
    fn record_order_is_preserved() {
        let y = feet_to_meters(6.0);
        let records = vec![record(2, 12, y), record(1, 10, y), record(2, 11, y)];
        let kept = filter_lane_window(&records, 1, FrameWindow::new(10, 12)).unwrap();
        let frames: Vec<u64> = kept.iter().map(|r| r.frame).collect();
        assert_eq!(frames, vec![12, 10, 11]);
    }

    #[test]
    fn unknown_lane_fails_the_query() {
        assert!(filter_lane_window(&[], 42, FrameWindow::new(0, 1)).is_err());
    }
}
