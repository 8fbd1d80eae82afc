use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

const LINE_ENDING: &str = "\r\n";

/// Which arm(s) a trajectory file is recorded for. The selection only
/// chooses the header; every checkpoint line carries both groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmSelection {
    Left,
    Right,
    Both,
}

impl ArmSelection {
    /// Group name written in the file header.
    pub fn header_group(self) -> &'static str {
        match self {
            ArmSelection::Left => "left_arm",
            ArmSelection::Right => "right_arm",
            ArmSelection::Both => "both_arms",
        }
    }
}

/// Which data each checkpoint records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    Joints,
    Pose,
    Both,
}

/// Target files of a recording session, derived from the output directory,
/// the user-supplied name, and the output kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputTargets {
    pub joints: Option<PathBuf>,
    pub poses: Option<PathBuf>,
}

impl OutputTargets {
    /// `<dir>/<name>.txt` for a single kind, `<dir>/<name>_joints.txt` and
    /// `<dir>/<name>_poses.txt` when both kinds are requested.
    pub fn new(output_dir: &Path, output_name: &str, kind: OutputKind) -> Self {
        match kind {
            OutputKind::Joints => Self {
                joints: Some(output_dir.join(format!("{output_name}.txt"))),
                poses: None,
            },
            OutputKind::Pose => Self {
                joints: None,
                poses: Some(output_dir.join(format!("{output_name}.txt"))),
            },
            OutputKind::Both => Self {
                joints: Some(output_dir.join(format!("{output_name}_joints.txt"))),
                poses: Some(output_dir.join(format!("{output_name}_poses.txt"))),
            },
        }
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.joints
            .as_deref()
            .into_iter()
            .chain(self.poses.as_deref())
    }
}

/// One trajectory output file with CRLF line endings.
///
/// The file is created together with its header line and reopened in append
/// mode for every checkpoint line, so no handle stays open between writes.
#[derive(Debug)]
pub struct TrajectoryFile {
    path: PathBuf,
}

impl TrajectoryFile {
    /// Creates `path` with `header` as its first line. Fails with
    /// [`Error::OutputFileExists`] if the file already exists.
    pub fn create(path: PathBuf, header: &str) -> Result<Self, Error> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => Error::OutputFileExists(path.clone()),
                _ => Error::WriteFailure(path.clone(), e),
            })?;
        write!(file, "{header}{LINE_ENDING}")
            .map_err(|e| Error::WriteFailure(path.clone(), e))?;
        Ok(Self { path })
    }

    /// Appends one line, opening and closing the file around the write.
    pub fn append_line(&self, line: &str) -> Result<(), Error> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::WriteFailure(self.path.clone(), e))?;
        write!(file, "{line}{LINE_ENDING}")
            .map_err(|e| Error::WriteFailure(self.path.clone(), e))?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
