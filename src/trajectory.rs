//! Input file discovery and parsing.
//!
//! The propagator writes one file per body, `output{i}.txt`, with a
//! comma-delimited `x, y, z` row per integration step. The first row is
//! the initial state and is treated as a header.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{Result, ViewError};

/// Directory entries starting with this prefix count as input files.
pub const FILE_PREFIX: &str = "output";

/// Rows skipped at the top of every file; data starts on row 2.
pub const HEADER_ROWS: usize = 1;

/// One satellite's position samples, one element per row.
#[derive(Debug)]
pub struct Trajectory {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Counts directory entries whose name starts with [`FILE_PREFIX`].
///
/// Discovery yields only a count; the load loop reconstructs filenames
/// from the index. Any matching name counts, so a stray `outputs_old.csv`
/// inflates the count and the load fails later on the missing
/// `output{N-1}.txt`.
pub fn count_prefix_matches(dir: &Path) -> Result<usize> {
    let entries = std::fs::read_dir(dir).map_err(|source| ViewError::ListDir {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut count = 0;
    for entry in entries {
        let entry = entry.map_err(|source| ViewError::ListDir {
            dir: dir.to_path_buf(),
            source,
        })?;
        if entry.file_name().to_string_lossy().starts_with(FILE_PREFIX) {
            count += 1;
        }
    }
    Ok(count)
}

/// Parses one `x, y, z` table, skipping [`HEADER_ROWS`] leading rows.
pub fn parse_trajectory_file(path: &Path, label: &str) -> Result<Trajectory> {
    let file = std::fs::File::open(path).map_err(|source| ViewError::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut traj = Trajectory {
        label: label.to_string(),
        x: Vec::new(),
        y: Vec::new(),
        z: Vec::new(),
    };

    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|source| ViewError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if idx < HEADER_ROWS {
            continue;
        }
        let row = idx + 1;
        if record.len() != 3 {
            return Err(ViewError::ColumnCount {
                path: path.to_path_buf(),
                row,
                found: record.len(),
            });
        }
        let mut sample = [0.0_f64; 3];
        for (value, field) in sample.iter_mut().zip(record.iter()) {
            *value = field.parse().map_err(|_| ViewError::NonNumeric {
                path: path.to_path_buf(),
                row,
                value: field.to_string(),
            })?;
        }
        traj.x.push(sample[0]);
        traj.y.push(sample[1]);
        traj.z.push(sample[2]);
    }

    Ok(traj)
}

/// Loads `output0.txt … output{N-1}.txt` from `dir`, labeled `sat{i}`.
///
/// N comes from [`count_prefix_matches`]. The first missing or malformed
/// file aborts the whole load; zero matches yields an empty set and the
/// viewer opens with bare axes.
pub fn load_trajectories(dir: &Path) -> Result<Vec<Trajectory>> {
    let n = count_prefix_matches(dir)?;

    let mut trajectories = Vec::with_capacity(n);
    for i in 0..n {
        let path = dir.join(format!("{FILE_PREFIX}{i}.txt"));
        let traj = parse_trajectory_file(&path, &format!("sat{i}"))?;
        log::debug!("{}: {} samples", traj.label, traj.len());
        trajectories.push(traj);
    }
    Ok(trajectories)
}
