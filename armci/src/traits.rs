mod motion_group_client;

pub use motion_group_client::*;
