use anyhow::Result;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use std::path::Path;
use trajviz_core::{car_bands, units::meters_to_feet, FrameWindow, Real, TrajectoryRecord};

/// How one lane's time-space data is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeSpaceStyle {
    /// Front/back polylines per vehicle with the area between them filled,
    /// one color per vehicle.
    #[default]
    BandedFill,
    /// One dot per record: front bumper red, back bumper blue.
    FrameScatter,
}

pub struct TimeSpaceChart<'a> {
    pub camera_num: u32,
    pub lane_num: u32,
    pub window: FrameWindow,
    /// Longitudinal axis bounds in feet, from the camera range table.
    pub position_range: (Real, Real),
    pub records: &'a [TrajectoryRecord],
    pub style: TimeSpaceStyle,
}

impl TimeSpaceChart<'_> {
    pub fn render(&self, output_path: &Path, figure_size: (u32, u32)) -> Result<()> {
        let root = BitMapBackend::new(output_path, figure_size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Camera #{}, Lane #{}", self.camera_num, self.lane_num),
                ("sans-serif", 30),
            )
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(
                self.window.start as f64..self.window.end as f64,
                self.position_range.0..self.position_range.1,
            )?;

        chart
            .configure_mesh()
            .x_desc("Frame #")
            .y_desc("Car Positions (ft)")
            .draw()?;

        match self.style {
            TimeSpaceStyle::BandedFill => self.draw_bands(&mut chart)?,
            TimeSpaceStyle::FrameScatter => self.draw_scatter(&mut chart)?,
        }

        root.present()?;
        Ok(())
    }

    fn draw_bands<'b>(
        &self,
        chart: &mut ChartContext<'b, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    ) -> Result<()> {
        for (car_index, band) in car_bands(self.records).iter().enumerate() {
            // Any distinguishing color will do; pick by group index.
            let color = Palette99::pick(car_index).to_rgba();

            let front: Vec<(f64, f64)> = band
                .frames
                .iter()
                .zip(&band.front_ft)
                .map(|(&frame, &pos)| (frame as f64, pos))
                .collect();
            let back: Vec<(f64, f64)> = band
                .frames
                .iter()
                .zip(&band.back_ft)
                .map(|(&frame, &pos)| (frame as f64, pos))
                .collect();

            chart.draw_series(LineSeries::new(front.iter().copied(), color.stroke_width(1)))?;
            chart.draw_series(LineSeries::new(back.iter().copied(), color.stroke_width(1)))?;

            // Fill between the two curves: front polyline forward, back
            // polyline reversed, closed as one polygon.
            let mut outline = front.clone();
            outline.extend(back.iter().rev().copied());
            chart
                .draw_series(std::iter::once(Polygon::new(
                    outline,
                    color.mix(0.4).filled(),
                )))?
                .label(format!("Car #{}", band.id))
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE)
            .border_style(&BLACK)
            .draw()?;
        Ok(())
    }

    fn draw_scatter(
        &self,
        chart: &mut ChartContext<BitMapBackend, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    ) -> Result<()> {
        chart.draw_series(self.records.iter().map(|r| {
            Circle::new(
                (r.frame as f64, meters_to_feet(r.fbr_x)),
                2,
                RED.filled(),
            )
        }))?;
        chart.draw_series(self.records.iter().map(|r| {
            Circle::new(
                (r.frame as f64, meters_to_feet(r.bbr_x)),
                2,
                BLUE.filled(),
            )
        }))?;
        Ok(())
    }
}
