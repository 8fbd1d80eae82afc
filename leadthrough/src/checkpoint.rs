use armci::Isometry3;

/// Command label that ends a recording session after its checkpoint is
/// stored.
pub const FINISH_COMMAND: &str = "finish";

const GRIPPER_JOINT_PREFIX: &str = "gripper";

/// Whether a joint name marks the terminal joint of its group as a gripper.
pub fn is_gripper_joint(joint_name: &str) -> bool {
    joint_name.starts_with(GRIPPER_JOINT_PREFIX)
}

/// Snapshot of one group for a joints record.
#[derive(Clone, Debug)]
pub struct GroupJoints {
    pub group_name: String,
    pub positions: Vec<f64>,
}

/// Snapshot of one group for a pose record.
#[derive(Clone, Debug)]
pub struct GroupPose {
    pub group_name: String,
    /// Position of the gripper joint, present when the group's last active
    /// joint is one.
    pub gripper_position: Option<f64>,
    pub pose: Isometry3<f64>,
}

/// Builds a joints checkpoint line:
/// `<label> <group_name> <count> <v0> … <v(count-1)>` per group.
pub fn joints_line(label: &str, groups: &[GroupJoints]) -> String {
    let mut fields = vec![label.to_owned()];
    for group in groups {
        fields.push(group.group_name.clone());
        fields.push(group.positions.len().to_string());
        fields.extend(group.positions.iter().map(|v| v.to_string()));
    }
    fields.join(" ")
}

/// Builds a pose checkpoint line:
/// `<label> <group_name> <has_gripper> [<gripper_pos>] <x> <y> <z> <qx> <qy> <qz> <qw>`
/// per group.
pub fn pose_line(label: &str, groups: &[GroupPose]) -> String {
    let mut fields = vec![label.to_owned()];
    for group in groups {
        fields.push(group.group_name.clone());
        fields.push(group.gripper_position.is_some().to_string());
        if let Some(gripper_position) = group.gripper_position {
            fields.push(gripper_position.to_string());
        }
        let position = &group.pose.translation.vector;
        fields.push(position.x.to_string());
        fields.push(position.y.to_string());
        fields.push(position.z.to_string());
        let orientation = &group.pose.rotation.coords;
        fields.push(orientation.x.to_string());
        fields.push(orientation.y.to_string());
        fields.push(orientation.z.to_string());
        fields.push(orientation.w.to_string());
    }
    fields.join(" ")
}

#[cfg(test)]
mod tests {
    use nalgebra::{Translation3, UnitQuaternion, Vector3};

    use super::*;

    fn pose(x: f64, y: f64, z: f64) -> Isometry3<f64> {
        Isometry3::from_parts(
            Translation3::new(x, y, z),
            UnitQuaternion::from_scaled_axis(Vector3::zeros()),
        )
    }

    #[test]
    fn gripper_joint_prefix() {
        assert!(is_gripper_joint("gripper_r_joint"));
        assert!(is_gripper_joint("gripper"));
        assert!(!is_gripper_joint("joint_7_r"));
        assert!(!is_gripper_joint("r_gripper_joint"));
    }

    #[test]
    fn joints_line_fields() {
        let line = joints_line(
            "p1",
            &[
                GroupJoints {
                    group_name: "right_arm".to_owned(),
                    positions: vec![0.1, 0.2, 0.3],
                },
                GroupJoints {
                    group_name: "left_arm".to_owned(),
                    positions: vec![-0.1, -0.2],
                },
            ],
        );
        assert_eq!(line, "p1 right_arm 3 0.1 0.2 0.3 left_arm 2 -0.1 -0.2");
        // label + (name + count + values) per group
        assert_eq!(line.split_whitespace().count(), 1 + (2 + 3) + (2 + 2));
    }

    #[test]
    fn pose_line_without_gripper() {
        let line = pose_line(
            "p1",
            &[GroupPose {
                group_name: "right_arm".to_owned(),
                gripper_position: None,
                pose: pose(0.3, -0.2, 0.5),
            }],
        );
        assert_eq!(line, "p1 right_arm false 0.3 -0.2 0.5 0 0 0 1");
        assert_eq!(line.split_whitespace().count(), 1 + 9);
    }

    #[test]
    fn pose_line_with_gripper() {
        let line = pose_line(
            "grasp",
            &[GroupPose {
                group_name: "left_arm".to_owned(),
                gripper_position: Some(0.02),
                pose: pose(0.0, 0.1, 0.2),
            }],
        );
        assert_eq!(line, "grasp left_arm true 0.02 0 0.1 0.2 0 0 0 1");
        assert_eq!(line.split_whitespace().count(), 1 + 10);
    }

    #[test]
    fn pose_line_two_groups() {
        let line = pose_line(
            "p2",
            &[
                GroupPose {
                    group_name: "right_arm".to_owned(),
                    gripper_position: Some(0.01),
                    pose: pose(1.0, 2.0, 3.0),
                },
                GroupPose {
                    group_name: "left_arm".to_owned(),
                    gripper_position: None,
                    pose: pose(4.0, 5.0, 6.0),
                },
            ],
        );
        assert_eq!(line.split_whitespace().count(), 1 + 10 + 9);
        assert!(line.starts_with("p2 right_arm true 0.01 "));
        assert!(line.contains(" left_arm false 4 5 6 "));
    }
}
