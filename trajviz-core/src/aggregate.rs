use crate::{units::meters_to_feet, CarId, FrameNumber, FrameWindow, Real, TrajectoryRecord};

/// One vehicle's longitudinal extent over time, ready to draw.
///
/// `frames`, `front_ft` and `back_ft` are aligned and equally long; frames
/// ascend. Positions are already converted to feet.
#[derive(Debug, Clone, PartialEq)]
pub struct CarBand {
    pub id: CarId,
    pub frames: Vec<FrameNumber>,
    pub front_ft: Vec<Real>,
    pub back_ft: Vec<Real>,
}

/// Groups filtered records by vehicle id and sorts each group by frame.
///
/// Bands come out in first-appearance order of the ids; callers treat the
/// ordering among vehicles as arbitrary.
pub fn car_bands(records: &[TrajectoryRecord]) -> Vec<CarBand> {
    let mut ids: Vec<CarId> = vec![];
    for r in records {
        if !ids.contains(&r.id) {
            ids.push(r.id);
        }
    }

    ids.into_iter()
        .map(|id| {
            let mut snap: Vec<&TrajectoryRecord> =
                records.iter().filter(|r| r.id == id).collect();
            snap.sort_by_key(|r| r.frame);

            CarBand {
                id,
                frames: snap.iter().map(|r| r.frame).collect(),
                front_ft: snap.iter().map(|r| meters_to_feet(r.fbr_x)).collect(),
                back_ft: snap.iter().map(|r| meters_to_feet(r.bbr_x)).collect(),
            }
        })
        .collect()
}

/// Mean recorded speed per frame across the whole window, ascending.
///
/// A frame with no vehicles present contributes 0.0 rather than NaN; both
/// window ends are included, matching the query filter.
pub fn mean_speed_by_frame(
    records: &[TrajectoryRecord],
    window: FrameWindow,
) -> Vec<(FrameNumber, Real)> {
    window
        .frames()
        .map(|frame| {
            let mut sum = 0.0;
            let mut count = 0usize;
            for r in records.iter().filter(|r| r.frame == frame) {
                sum += r.speed;
                count += 1;
            }
            let mean = if count == 0 { 0.0 } else { sum / count as Real };
            (frame, mean)
        })
        .collect()
}
