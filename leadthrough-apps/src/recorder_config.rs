use std::path::{Path, PathBuf};
#[cfg(feature = "ros")]
use std::sync::Arc;

#[cfg(feature = "ros")]
use armci::MotionGroupClient;
#[cfg(feature = "ros")]
use armci_ros::{
    RosCommandSubscriber, RosCommandSubscriberConfig, RosMotionGroupClient,
    RosMotionGroupClientConfig,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Error;

#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct RecorderConfig {
    // TOML format has a restriction that if a table itself contains tables,
    // all keys with non-table values must be emitted first.
    // Therefore, this field must be located at the start of the struct.
    /// Directory the trajectory files are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[cfg(feature = "ros")]
    #[serde(default)]
    pub command_subscriber_config: RosCommandSubscriberConfig,
    // A dummy field to catch that there is a config that requires the ros feature.
    #[cfg(not(feature = "ros"))]
    #[serde(default)]
    #[schemars(schema_with = "unimplemented_schema")]
    command_subscriber_config: Option<toml::Value>,

    #[cfg(feature = "ros")]
    #[serde(default = "default_right_arm_client_config")]
    pub right_arm_client_config: RosMotionGroupClientConfig,
    // A dummy field to catch that there is a config that requires the ros feature.
    #[cfg(not(feature = "ros"))]
    #[serde(default)]
    #[schemars(schema_with = "unimplemented_schema")]
    right_arm_client_config: Option<toml::Value>,

    #[cfg(feature = "ros")]
    #[serde(default = "default_left_arm_client_config")]
    pub left_arm_client_config: RosMotionGroupClientConfig,
    // A dummy field to catch that there is a config that requires the ros feature.
    #[cfg(not(feature = "ros"))]
    #[serde(default)]
    #[schemars(schema_with = "unimplemented_schema")]
    left_arm_client_config: Option<toml::Value>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("paths")
}

#[cfg(feature = "ros")]
fn default_arm_client_config(side: &str) -> RosMotionGroupClientConfig {
    let suffix = &side[..1];
    let mut joint_names: Vec<String> = (1..=7).map(|i| format!("joint_{i}_{suffix}")).collect();
    joint_names.push(format!("gripper_{suffix}_joint"));
    RosMotionGroupClientConfig {
        name: format!("{side}_arm"),
        joint_names,
        joint_state_topic: "joint_states".to_string(),
        base_frame_id: "base_link".to_string(),
        end_effector_frame_id: format!("gripper_{suffix}_base"),
        tf_retry_rate: 10.0,
        tf_max_retry: 10,
    }
}

#[cfg(feature = "ros")]
fn default_right_arm_client_config() -> RosMotionGroupClientConfig {
    default_arm_client_config("right")
}

#[cfg(feature = "ros")]
fn default_left_arm_client_config() -> RosMotionGroupClientConfig {
    default_arm_client_config("left")
}

// A dummy schema for config fields that require the ros feature.
#[cfg(not(feature = "ros"))]
fn unimplemented_schema(_gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
    schemars::schema::Schema::Bool(true)
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            #[cfg(feature = "ros")]
            command_subscriber_config: Default::default(),
            #[cfg(not(feature = "ros"))]
            command_subscriber_config: None,
            #[cfg(feature = "ros")]
            right_arm_client_config: default_right_arm_client_config(),
            #[cfg(not(feature = "ros"))]
            right_arm_client_config: None,
            #[cfg(feature = "ros")]
            left_arm_client_config: default_left_arm_client_config(),
            #[cfg(not(feature = "ros"))]
            left_arm_client_config: None,
        }
    }
}

impl RecorderConfig {
    /// Reads a config from `path`.
    pub fn try_new(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| Error::NoFile(path.to_owned(), e))?;
        Self::from_str(&s, path)
    }

    /// Parses a config from `s`; `path` appears in diagnostics only.
    pub fn from_str(s: &str, path: impl AsRef<Path>) -> Result<Self, Error> {
        let config: RecorderConfig = toml::from_str(s)
            .map_err(|e| Error::TomlParseFailure(path.as_ref().to_owned(), e))?;
        #[cfg(not(feature = "ros"))]
        config.check_no_ros_config(path.as_ref())?;
        Ok(config)
    }

    #[cfg(not(feature = "ros"))]
    fn check_no_ros_config(&self, path: &Path) -> Result<(), Error> {
        if self.command_subscriber_config.is_some()
            || self.right_arm_client_config.is_some()
            || self.left_arm_client_config.is_some()
        {
            return Err(Error::ConfigRequireRos(format!("{}", path.display())));
        }
        Ok(())
    }

    /// Builds the right- and left-arm clients, in that order.
    #[cfg(feature = "ros")]
    pub fn create_motion_group_clients(
        &self,
    ) -> (Arc<dyn MotionGroupClient>, Arc<dyn MotionGroupClient>) {
        (
            Arc::new(RosMotionGroupClient::new(
                self.right_arm_client_config.clone(),
            )),
            Arc::new(RosMotionGroupClient::new(
                self.left_arm_client_config.clone(),
            )),
        )
    }

    #[cfg(feature = "ros")]
    pub fn create_command_subscriber(&self) -> RosCommandSubscriber {
        RosCommandSubscriber::new(&self.command_subscriber_config)
    }
}
