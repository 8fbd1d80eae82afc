use auto_impl::auto_impl;
use nalgebra::Isometry3;

use crate::error::Error;

/// Read-only view of a named kinematic group (an arm, possibly with a
/// gripper as its terminal joint).
#[auto_impl(Box, Arc)]
pub trait MotionGroupClient: Send + Sync {
    /// Returns the name of the group this client queries.
    fn group_name(&self) -> String;

    /// Returns names of the active joints of this group, in query order.
    fn joint_names(&self) -> Vec<String>;

    /// Returns the current joint positions, ordered as
    /// [`joint_names`](Self::joint_names).
    fn current_joint_positions(&self) -> Result<Vec<f64>, Error>;

    /// Returns the current pose of the end effector relative to the group
    /// base frame.
    fn current_pose(&self) -> Result<Isometry3<f64>, Error>;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::clients::DummyMotionGroupClient;

    #[test]
    fn test_boxed_client() {
        let client: Box<dyn MotionGroupClient> = Box::new(DummyMotionGroupClient::new(
            "right_arm".to_owned(),
            vec!["a".to_owned(), "b".to_owned()],
        ));
        assert_eq!(client.group_name(), "right_arm");
        assert_eq!(client.joint_names(), vec!["a", "b"]);
        assert_eq!(client.current_joint_positions().unwrap().len(), 2);
    }

    #[test]
    fn test_arc_client() {
        let client: Arc<dyn MotionGroupClient> = Arc::new(DummyMotionGroupClient::new(
            "left_arm".to_owned(),
            vec!["a".to_owned()],
        ));
        assert_eq!(client.group_name(), "left_arm");
        assert!(client.current_pose().is_ok());
    }
}
