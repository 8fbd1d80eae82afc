use std::path::Path;

use armci::MotionGroupClient;
use tracing::info;

use crate::{
    checkpoint::{
        is_gripper_joint, joints_line, pose_line, GroupJoints, GroupPose, FINISH_COMMAND,
    },
    error::Error,
    trajectory_file::{ArmSelection, OutputKind, OutputTargets, TrajectoryFile},
};

/// What [`CheckpointRecorder::record`] did with a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordOutcome {
    /// A checkpoint was appended; more commands are expected.
    Recorded,
    /// The `finish` checkpoint was appended; the session is over.
    Finished,
}

/// Appends checkpoints for a pair of kinematic groups to trajectory files.
///
/// Every checkpoint line carries both groups, first group first; the arm
/// selection only chooses the header.
#[derive(Debug)]
pub struct CheckpointRecorder {
    joints_file: Option<TrajectoryFile>,
    poses_file: Option<TrajectoryFile>,
}

impl CheckpointRecorder {
    /// Creates the target files with their headers.
    ///
    /// Fails if `output_dir` does not exist or any target file already does;
    /// existing files are never modified.
    pub fn new(
        output_dir: &Path,
        output_name: &str,
        selection: ArmSelection,
        kind: OutputKind,
    ) -> Result<Self, Error> {
        if !output_dir.is_dir() {
            return Err(Error::NoOutputDirectory(output_dir.to_owned()));
        }
        let targets = OutputTargets::new(output_dir, output_name, kind);
        for path in targets.paths() {
            if path.exists() {
                return Err(Error::OutputFileExists(path.to_owned()));
            }
        }
        let header_group = selection.header_group();
        let joints_file = targets
            .joints
            .map(|path| TrajectoryFile::create(path, &format!("joints {header_group}")))
            .transpose()?;
        let poses_file = targets
            .poses
            .map(|path| TrajectoryFile::create(path, &format!("poses {header_group}")))
            .transpose()?;
        Ok(Self {
            joints_file,
            poses_file,
        })
    }

    /// Paths of the created files, joints file first.
    pub fn paths(&self) -> Vec<&Path> {
        self.joints_file
            .iter()
            .chain(self.poses_file.iter())
            .map(|file| file.path())
            .collect()
    }

    /// Queries both groups and appends one checkpoint for `label` to every
    /// open file.
    pub fn record(
        &self,
        label: &str,
        first: &dyn MotionGroupClient,
        second: &dyn MotionGroupClient,
    ) -> Result<RecordOutcome, Error> {
        if let Some(file) = &self.joints_file {
            let records = [joints_record(first)?, joints_record(second)?];
            file.append_line(&joints_line(label, &records))?;
            info!("Joints stored with command: {label}");
        }
        if let Some(file) = &self.poses_file {
            let records = [pose_record(first)?, pose_record(second)?];
            file.append_line(&pose_line(label, &records))?;
            info!("Pose stored with command: {label}");
        }
        if label == FINISH_COMMAND {
            Ok(RecordOutcome::Finished)
        } else {
            Ok(RecordOutcome::Recorded)
        }
    }
}

fn joints_record(group: &dyn MotionGroupClient) -> Result<GroupJoints, Error> {
    Ok(GroupJoints {
        group_name: group.group_name(),
        positions: group.current_joint_positions()?,
    })
}

fn pose_record(group: &dyn MotionGroupClient) -> Result<GroupPose, Error> {
    let has_gripper = group
        .joint_names()
        .last()
        .map_or(false, |name| is_gripper_joint(name));
    let gripper_position = if has_gripper {
        group.current_joint_positions()?.last().copied()
    } else {
        None
    };
    Ok(GroupPose {
        group_name: group.group_name(),
        gripper_position,
        pose: group.current_pose()?,
    })
}
