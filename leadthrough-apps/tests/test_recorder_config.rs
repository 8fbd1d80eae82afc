use leadthrough_apps::RecorderConfig;

#[test]
fn verify_sample_configs() {
    let files = vec![
        "config/dual_arm_recorder_config_for_ros.toml",
        "config/gripperless_recorder_config_for_ros.toml",
    ];
    for f in files {
        let result = RecorderConfig::try_new(f);
        if cfg!(not(feature = "ros")) {
            assert!(
                matches!(result, Err(leadthrough_apps::Error::ConfigRequireRos(..))),
                "{:?} {:?}",
                f,
                result
            );
        } else {
            assert!(result.is_ok(), "{:?} {:?}", f, result);
            let ser_result = toml::to_string(&result.unwrap());
            assert!(ser_result.is_ok(), "{:?} {:?}", f, ser_result);
        }
    }
}

#[test]
fn ser_default_config() {
    toml::to_string(&RecorderConfig::default()).unwrap();
}

#[cfg(feature = "ros")]
#[test]
fn default_config_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recorder_config.toml");
    std::fs::write(&path, toml::to_string(&RecorderConfig::default()).unwrap()).unwrap();
    let config = RecorderConfig::try_new(&path).unwrap();
    assert_eq!(config.right_arm_client_config.name, "right_arm");
    assert_eq!(config.command_subscriber_config.topic, "lead_through_commands");
}

#[cfg(feature = "ros")]
#[test]
fn gripperless_config_details() {
    let config = RecorderConfig::try_new("config/gripperless_recorder_config_for_ros.toml").unwrap();
    assert_eq!(config.command_subscriber_config.topic, "checkpoint_commands");
    assert_eq!(config.command_subscriber_config.queue_size, 1000);
    assert_eq!(config.right_arm_client_config.joint_names.len(), 7);
    assert_eq!(config.right_arm_client_config.tf_max_retry, 5);
}
