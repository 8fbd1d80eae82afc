mod dummy_motion_group_client;

pub use dummy_motion_group_client::*;
