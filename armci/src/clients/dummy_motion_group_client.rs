use std::sync::{Arc, Mutex};

use nalgebra::Isometry3;

use crate::{error::Error, traits::MotionGroupClient};

/// Dummy MotionGroupClient for debug or tests.
#[derive(Debug)]
pub struct DummyMotionGroupClient {
    pub group_name: String,
    pub joint_names: Vec<String>,
    pub positions: Arc<Mutex<Vec<f64>>>,
    pub pose: Arc<Mutex<Isometry3<f64>>>,
}

impl DummyMotionGroupClient {
    /// Creates a client reporting all-zero joint positions and an identity
    /// pose until changed.
    pub fn new(group_name: String, joint_names: Vec<String>) -> Self {
        let dof = joint_names.len();
        Self {
            group_name,
            joint_names,
            positions: Arc::new(Mutex::new(vec![0.0; dof])),
            pose: Arc::new(Mutex::new(Isometry3::identity())),
        }
    }

    pub fn set_current_joint_positions(&self, positions: Vec<f64>) -> Result<(), Error> {
        if positions.len() != self.joint_names.len() {
            return Err(Error::LengthMismatch {
                model: self.joint_names.len(),
                input: positions.len(),
            });
        }
        *self.positions.lock().unwrap() = positions;
        Ok(())
    }

    pub fn set_current_pose(&self, pose: Isometry3<f64>) {
        *self.pose.lock().unwrap() = pose;
    }
}

impl MotionGroupClient for DummyMotionGroupClient {
    fn group_name(&self) -> String {
        self.group_name.clone()
    }

    fn joint_names(&self) -> Vec<String> {
        self.joint_names.clone()
    }

    fn current_joint_positions(&self) -> Result<Vec<f64>, Error> {
        Ok(self.positions.lock().unwrap().clone())
    }

    fn current_pose(&self) -> Result<Isometry3<f64>, Error> {
        Ok(*self.pose.lock().unwrap())
    }
}
