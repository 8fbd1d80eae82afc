//! [`armci`] implementation using ROS1.

#![warn(rust_2018_idioms)]
#![allow(missing_debug_implementations)] // rosrust and tf_rosrust handles don't implement Debug

mod ros_command_subscriber;
mod ros_motion_group_client;
pub mod rosrust_utils;

// re-export
pub use rosrust::{init, is_ok, rate};

pub use crate::{ros_command_subscriber::*, ros_motion_group_client::*, rosrust_utils::*};
