use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;
use trajviz_core::{
    camera_range, filter_lane_window, mean_speed_by_frame, FrameNumber, FrameWindow, Real,
};
use trajviz_dataset_reader::TrajectoryReader;

use crate::time_space::{TimeSpaceChart, TimeSpaceStyle};
use crate::time_speed::TimeSpeedChart;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    TimeSpace,
    TimeSpeed,
}

impl PlotKind {
    fn suffix(&self) -> &'static str {
        match self {
            PlotKind::TimeSpace => "timespace",
            PlotKind::TimeSpeed => "timespeed",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VisualizationCfg {
    data_dir: PathBuf,
    output_dir: PathBuf,
    figure_width: u32,
    figure_height: u32,
    speed_axis: (Real, Real),
    header_skip_rows: usize,
}

impl Default for VisualizationCfg {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("csvData"),
            output_dir: PathBuf::from("output_graphs"),
            figure_width: 700,
            figure_height: 700,
            speed_axis: (30.0, 40.0),
            header_skip_rows: 0,
        }
    }
}

impl VisualizationCfg {
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Validates the camera id against the range table and creates the
    /// output directory.
    pub fn finalize(self, pole_num: u32, camera_num: u32) -> Result<Visualization> {
        camera_range(camera_num)?;
        std::fs::create_dir_all(&self.output_dir)?;

        Ok(Visualization {
            pole_num,
            camera_num,
            reader: TrajectoryReader::new(&self.data_dir, pole_num, camera_num),
            output_dir: self.output_dir,
            figure_size: (self.figure_width, self.figure_height),
            speed_axis: self.speed_axis,
            header_skip_rows: self.header_skip_rows,
        })
    }
}

/// Batch plotter for one camera's tracking export. Every plot call loads the
/// CSV fresh, filters, aggregates and writes one JPEG; no state is shared
/// between calls.
pub struct Visualization {
    pole_num: u32,
    camera_num: u32,
    reader: TrajectoryReader,
    output_dir: PathBuf,
    figure_size: (u32, u32),
    speed_axis: (Real, Real),
    header_skip_rows: usize,
}

impl Visualization {
    pub fn output_path(&self, lane_num: u32, kind: PlotKind) -> PathBuf {
        self.output_dir.join(format!(
            "p{}c{}_lane{}_{}.jpg",
            self.pole_num,
            self.camera_num,
            lane_num,
            kind.suffix()
        ))
    }

    /// Time vs. longitudinal position for the cars in one lane, over the
    /// closed frame window. Returns the written file's path.
    pub fn time_space_graph(
        &self,
        lane_num: u32,
        start_frame: FrameNumber,
        end_frame: FrameNumber,
        style: TimeSpaceStyle,
    ) -> Result<PathBuf> {
        let window = FrameWindow::new(start_frame, end_frame);
        let records = self.reader.load_records(self.header_skip_rows)?;
        let records = filter_lane_window(&records, lane_num, window)?;
        log::debug!(
            "camera {} lane {}: {} records in frames {}..={}",
            self.camera_num,
            lane_num,
            records.len(),
            start_frame,
            end_frame
        );

        let output_path = self.output_path(lane_num, PlotKind::TimeSpace);
        TimeSpaceChart {
            camera_num: self.camera_num,
            lane_num,
            window,
            position_range: camera_range(self.camera_num)?,
            records: &records,
            style,
        }
        .render(&output_path, self.figure_size)?;

        log::info!("wrote {}", output_path.display());
        Ok(output_path)
    }

    /// Mean vehicle speed per frame for one lane, over the closed frame
    /// window. Returns the written file's path.
    pub fn time_speed_graph(
        &self,
        lane_num: u32,
        start_frame: FrameNumber,
        end_frame: FrameNumber,
    ) -> Result<PathBuf> {
        let window = FrameWindow::new(start_frame, end_frame);
        let records = self.reader.load_records(self.header_skip_rows)?;
        let records = filter_lane_window(&records, lane_num, window)?;
        let series = mean_speed_by_frame(&records, window);

        let output_path = self.output_path(lane_num, PlotKind::TimeSpeed);
        TimeSpeedChart {
            camera_num: self.camera_num,
            lane_num,
            series: &series,
            speed_range: self.speed_axis,
        }
        .render(&output_path, self.figure_size)?;

        log::info!("wrote {}", output_path.display());
        Ok(output_path)
    }
}
