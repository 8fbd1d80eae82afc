use armci::{copy_joint_positions, Error, Isometry3, MotionGroupClient};
use nalgebra::{Quaternion, Translation3, UnitQuaternion};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tf_rosrust::TfListener;
use tracing::{debug, warn};

use crate::rosrust_utils::SubscriberHandler;

mod msg {
    rosrust::rosmsg_include!(sensor_msgs / JointState);
}

#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RosMotionGroupClientConfig {
    /// Group name recorded with every checkpoint.
    pub name: String,
    /// Active joints of the group, in the order their values are reported.
    pub joint_names: Vec<String>,
    #[serde(default = "default_joint_state_topic")]
    pub joint_state_topic: String,
    /// Frame the end-effector pose is expressed in.
    pub base_frame_id: String,
    pub end_effector_frame_id: String,
    #[serde(default = "default_tf_retry_rate")]
    pub tf_retry_rate: f64,
    #[serde(default = "default_tf_max_retry")]
    pub tf_max_retry: usize,
}

fn default_joint_state_topic() -> String {
    "joint_states".to_string()
}

fn default_tf_retry_rate() -> f64 {
    10.0
}

fn default_tf_max_retry() -> usize {
    10
}

/// [`MotionGroupClient`] that reads joint positions from a
/// `sensor_msgs/JointState` topic and the end-effector pose from tf.
pub struct RosMotionGroupClient {
    config: RosMotionGroupClientConfig,
    joint_state_subscriber: SubscriberHandler<msg::sensor_msgs::JointState>,
    tf_listener: TfListener,
}

impl RosMotionGroupClient {
    /// Subscribes to the joint state topic and blocks until a first message
    /// has been observed, so the first query never sees an empty state.
    pub fn new(config: RosMotionGroupClientConfig) -> Self {
        let joint_state_subscriber = SubscriberHandler::new(&config.joint_state_topic, 1);
        joint_state_subscriber.wait_message(100);
        Self {
            config,
            joint_state_subscriber,
            tf_listener: TfListener::new(),
        }
    }
}

impl MotionGroupClient for RosMotionGroupClient {
    fn group_name(&self) -> String {
        self.config.name.clone()
    }

    fn joint_names(&self) -> Vec<String> {
        self.config.joint_names.clone()
    }

    fn current_joint_positions(&self) -> Result<Vec<f64>, Error> {
        let message = self
            .joint_state_subscriber
            .get()?
            .ok_or_else(|| Error::Uninitialized {
                message: format!(
                    "No joint state is available on {}",
                    self.config.joint_state_topic
                ),
            })?;
        let mut positions = vec![0.0; self.config.joint_names.len()];
        copy_joint_positions(
            &message.name,
            &message.position,
            &self.config.joint_names,
            &mut positions,
        )?;
        Ok(positions)
    }

    fn current_pose(&self) -> Result<Isometry3<f64>, Error> {
        let rate = rosrust::rate(self.config.tf_retry_rate);
        let mut last_error = None;
        for i in 0..=self.config.tf_max_retry {
            if i != 0 {
                warn!(
                    "Retrying {} -> {} ({} / {}) ...",
                    self.config.base_frame_id, self.config.end_effector_frame_id, i,
                    self.config.tf_max_retry
                );
            }
            // time zero asks tf for the latest available transform
            let result = self.tf_listener.lookup_transform(
                &self.config.base_frame_id,
                &self.config.end_effector_frame_id,
                rosrust::Time::from_nanos(0),
            );
            match result {
                Ok(result) => {
                    let translation = result.transform.translation;
                    let rotation = result.transform.rotation;

                    return Ok(Isometry3::from_parts(
                        Translation3::new(translation.x, translation.y, translation.z),
                        UnitQuaternion::from_quaternion(Quaternion::new(
                            rotation.w, rotation.x, rotation.y, rotation.z,
                        )),
                    ));
                }
                Err(e) => {
                    debug!("Failed to lookup_transform ({:?})", e);
                    last_error = Some(e)
                }
            }
            rate.sleep();
        }
        match last_error {
            Some(e) => Err(anyhow::anyhow!("{:?}", e).into()),
            None => Err(anyhow::anyhow!("Broken Logic").into()),
        }
    }
}
