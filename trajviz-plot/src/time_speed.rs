use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;
use trajviz_core::{FrameNumber, Real};

const DARK_CYAN: RGBColor = RGBColor(0, 139, 139);

pub struct TimeSpeedChart<'a> {
    pub camera_num: u32,
    pub lane_num: u32,
    /// One mean-speed point per frame, ascending. Frames with no vehicles
    /// carry 0.0 and still get a point.
    pub series: &'a [(FrameNumber, Real)],
    /// Fixed speed axis bounds in m/s.
    pub speed_range: (Real, Real),
}

impl TimeSpeedChart<'_> {
    pub fn render(&self, output_path: &Path, figure_size: (u32, u32)) -> Result<()> {
        let root = BitMapBackend::new(output_path, figure_size).into_drawing_area();
        root.fill(&WHITE)?;

        let frame_range = match (self.series.first(), self.series.last()) {
            (Some(&(first, _)), Some(&(last, _))) => first as f64..last as f64,
            _ => 0.0..1.0,
        };

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!(
                    "Camera #{}, Lane #{}: Average Speed vs. Frame",
                    self.camera_num, self.lane_num
                ),
                ("sans-serif", 30),
            )
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(frame_range, self.speed_range.0..self.speed_range.1)?;

        chart
            .configure_mesh()
            .x_desc("Frame #")
            .y_desc("Avg Speed (m/s)")
            .draw()?;

        chart.draw_series(LineSeries::new(
            self.series.iter().map(|&(frame, speed)| (frame as f64, speed)),
            &DARK_CYAN,
        ))?;

        root.present()?;
        Ok(())
    }
}
