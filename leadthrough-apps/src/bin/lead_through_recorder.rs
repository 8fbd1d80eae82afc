use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use leadthrough::{ArmSelection, CheckpointRecorder, OutputKind, RecordOutcome};
use leadthrough_apps::utils::init_tracing;
use tracing::{debug, info, warn};

/// Records lead-through trajectory checkpoints sent over a ROS topic.
#[derive(Debug, Parser)]
#[command(name = env!("CARGO_BIN_NAME"))]
struct Args {
    /// Name of the trajectory file, without directory or extension.
    output_name: String,
    /// Arm selection recorded in the file header.
    #[arg(value_enum)]
    arm: ArmSelection,
    /// Which data to record per checkpoint.
    #[arg(value_enum)]
    output: OutputKind,
    /// Path to the setting file.
    #[arg(short, long)]
    config_path: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    debug!("ParsedArgs {:?}", args);

    let config_path = leadthrough_apps::utils::get_apps_recorder_config(args.config_path);
    let config = leadthrough_apps::utils::resolve_recorder_config(config_path.as_deref())?;

    let recorder = CheckpointRecorder::new(
        &config.output_dir,
        &args.output_name,
        args.arm,
        args.output,
    )?;
    for path in recorder.paths() {
        info!("Output file at: {}", path.display());
    }

    leadthrough_apps::utils::init("lead_through");
    let (right_arm, left_arm) = config.create_motion_group_clients();
    let commands = config.create_command_subscriber();

    info!(">--------------------");
    info!("Program ready to accept commands. Run the following command to store position.");
    info!(
        "Command: rostopic pub /{} std_msgs/String $position_name",
        config.command_subscriber_config.topic
    );
    info!(">--------------------");

    let rate = armci_ros::rate(100.0);
    while armci_ros::is_ok() {
        if let Some(label) = commands.take()? {
            let outcome = recorder.record(&label, right_arm.as_ref(), left_arm.as_ref())?;
            if outcome == RecordOutcome::Finished {
                info!("Final checkpoint stored; finishing.");
                return Ok(());
            }
        }
        rate.sleep();
    }

    warn!("The program was not terminated properly.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args() {
        let bin = env!("CARGO_BIN_NAME");
        assert!(Args::try_parse_from([bin, "traj1", "left", "joints"]).is_ok());
        assert!(Args::try_parse_from([bin, "traj1", "right", "pose"]).is_ok());
        assert!(Args::try_parse_from([
            bin,
            "traj1",
            "both",
            "both",
            "--config-path",
            "config.toml"
        ])
        .is_ok());
        assert!(Args::try_parse_from([bin]).is_err());
        assert!(Args::try_parse_from([bin, "traj1"]).is_err());
        assert!(Args::try_parse_from([bin, "traj1", "left"]).is_err());
        assert!(Args::try_parse_from([bin, "traj1", "up", "joints"]).is_err());
        assert!(Args::try_parse_from([bin, "traj1", "left", "everything"]).is_err());
    }
}
