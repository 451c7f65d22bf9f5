use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::path::{Path, PathBuf};
use trajviz_core::TrajectoryRecord;

// Column order mirrors TrajectoryRecord's position fields first. The speed
// column is absent from time-space-only exports and loads as 0.0.
const COLUMNS: [&str; 7] = ["fbr_x", "bbr_x", "y", "Frame #", "Timestamp", "ID", "speed"];

const FBR_X: usize = 0;
const BBR_X: usize = 1;
const Y: usize = 2;
const FRAME: usize = 3;
const TIMESTAMP: usize = 4;
const ID: usize = 5;
const SPEED: usize = 6;

/// Loads one camera's tracking export, `p{pole}c{camera}.csv` under the
/// dataset directory.
pub struct TrajectoryReader {
    dataset_path: PathBuf,
    pole_num: u32,
    camera_num: u32,
}

impl TrajectoryReader {
    pub fn new(dataset_path: &Path, pole_num: u32, camera_num: u32) -> Self {
        TrajectoryReader {
            dataset_path: dataset_path.to_path_buf(),
            pole_num,
            camera_num,
        }
    }

    pub fn csv_path(&self) -> PathBuf {
        self.dataset_path
            .join(format!("p{}c{}.csv", self.pole_num, self.camera_num))
    }

    /// Reads the CSV tolerantly: columns are located by (trimmed) header
    /// name, empty or unparseable field values become 0.0, and rows the CSV
    /// layer cannot produce at all are skipped with a warning. The first
    /// `skip_rows` data rows after the header are dropped.
    pub fn load_records(&self, skip_rows: usize) -> Result<Vec<TrajectoryRecord>> {
        let csv_path = self.csv_path();
        let file = std::fs::File::open(&csv_path)
            .with_context(|| format!("opening {}", csv_path.display()))?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers = reader.headers()?.clone();
        let column_indices: Vec<Option<usize>> = COLUMNS
            .iter()
            .map(|&name| headers.iter().position(|h| h.trim() == name))
            .collect();
        log::debug!(
            "{}: column indices {:?}",
            csv_path.display(),
            column_indices
        );

        let mut records = vec![];
        for (row_num, row) in reader.records().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(err) => {
                    log::warn!(
                        "{}: skipping malformed row {}: {err}",
                        csv_path.display(),
                        row_num + 1
                    );
                    continue;
                }
            };
            if row_num < skip_rows {
                continue;
            }

            records.push(TrajectoryRecord {
                id: numeric_field(&row, &column_indices, ID) as u64,
                frame: numeric_field(&row, &column_indices, FRAME) as u64,
                timestamp: numeric_field(&row, &column_indices, TIMESTAMP),
                y: numeric_field(&row, &column_indices, Y),
                fbr_x: numeric_field(&row, &column_indices, FBR_X),
                bbr_x: numeric_field(&row, &column_indices, BBR_X),
                speed: numeric_field(&row, &column_indices, SPEED),
            });
        }
        log::info!("{}: loaded {} records", csv_path.display(), records.len());

        Ok(records)
    }
}

fn numeric_field(row: &StringRecord, column_indices: &[Option<usize>], column: usize) -> f64 {
    column_indices[column]
        .and_then(|i| row.get(i))
        .map(|field| field.trim().parse::<f64>().unwrap_or(0.0))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_fixture(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("trajviz-reader-{name}"));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("p1c3.csv"), contents).unwrap();
        dir
    }

    #[test]
    fn csv_path_encodes_pole_and_camera() {
        let reader = TrajectoryReader::new(Path::new("csvData"), 2, 5);
        assert_eq!(reader.csv_path(), Path::new("csvData").join("p2c5.csv"));
    }

    #[test]
    fn loads_named_columns_regardless_of_order() {
        let dir = write_fixture(
            "order",
            "ID,Frame #,Timestamp,y,fbr_x,bbr_x,speed\n\
             4,10,0.333,2.7,61.0,56.0,31.5\n",
        );
        let records = TrajectoryReader::new(&dir, 1, 3).load_records(0).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 4);
        assert_eq!(records[0].frame, 10);
        assert_eq!(records[0].y, 2.7);
        assert_eq!(records[0].fbr_x, 61.0);
        assert_eq!(records[0].bbr_x, 56.0);
        assert_eq!(records[0].speed, 31.5);
    }

    #[test]
    fn missing_speed_column_loads_as_zero() {
        let dir = write_fixture(
            "nospeed",
            "fbr_x,bbr_x,y,Frame #,Timestamp,ID\n\
             61.0,56.0,2.7,10,0.333,4\n",
        );
        let records = TrajectoryReader::new(&dir, 1, 3).load_records(0).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].speed, 0.0);
    }

    #[test]
    fn empty_and_garbage_fields_load_as_zero() {
        let dir = write_fixture(
            "nullfill",
            "fbr_x,bbr_x,y,Frame #,Timestamp,ID,speed\n\
             61.0,,2.7,10,n/a,4,\n",
        );
        let records = TrajectoryReader::new(&dir, 1, 3).load_records(0).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].bbr_x, 0.0);
        assert_eq!(records[0].timestamp, 0.0);
        assert_eq!(records[0].speed, 0.0);
    }

    #[test]
    fn short_rows_load_with_missing_fields_zeroed() {
        let dir = write_fixture(
            "short",
            "fbr_x,bbr_x,y,Frame #,Timestamp,ID,speed\n\
             61.0,56.0,2.7\n\
             62.0,57.0,2.8,11,0.366,4,31.0\n",
        );
        let records = TrajectoryReader::new(&dir, 1, 3).load_records(0).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].frame, 0);
        assert_eq!(records[0].id, 0);
        assert_eq!(records[1].frame, 11);
    }

    #[test]
    fn skip_rows_drops_leading_data_rows() {
        let dir = write_fixture(
            "skip",
            "fbr_x,bbr_x,y,Frame #,Timestamp,ID,speed\n\
             1.0,0.5,2.7,1,0.0,1,30.0\n\
             2.0,1.5,2.7,2,0.033,1,30.0\n\
             3.0,2.5,2.7,3,0.066,1,30.0\n",
        );
        let records = TrajectoryReader::new(&dir, 1, 3).load_records(2).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].frame, 3);
    }

    #[test]
    fn missing_file_is_an_error() {
        let reader = TrajectoryReader::new(Path::new("/nonexistent"), 9, 9);
        assert!(reader.load_records(0).is_err());
    }

    #[test]
    fn fractional_frame_numbers_truncate() {
        let dir = write_fixture(
            "frac",
            "fbr_x,bbr_x,y,Frame #,Timestamp,ID,speed\n\
             61.0,56.0,2.7,10.0,0.333,4.0,31.5\n",
        );
        let records = TrajectoryReader::new(&dir, 1, 3).load_records(0).unwrap();
        assert_eq!(records[0].frame, 10);
        assert_eq!(records[0].id, 4);
    }
}
