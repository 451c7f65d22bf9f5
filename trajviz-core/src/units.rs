use crate::Real;

/// Positions and speeds are stored metric on disk and shown in feet.
pub const FEET_PER_METER: Real = 3.28084;

pub fn meters_to_feet(meters: Real) -> Real {
    meters * FEET_PER_METER
}

pub fn feet_to_meters(feet: Real) -> Real {
    feet / FEET_PER_METER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_meter_is_3_28084_feet() {
        assert!((meters_to_feet(1.0) - 3.28084).abs() < 1e-9);
    }

    #[test]
    fn conversions_round_trip() {
        let m = feet_to_meters(meters_to_feet(630.0)) - 630.0;
        assert!(m.abs() < 1e-9);
    }
}
