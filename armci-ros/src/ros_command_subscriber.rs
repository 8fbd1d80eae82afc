use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::rosrust_utils::SubscriberHandler;

mod msg {
    rosrust::rosmsg_include!(std_msgs / String);
}

#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RosCommandSubscriberConfig {
    #[serde(default = "default_topic")]
    pub topic: String,
    #[serde(default = "default_queue_size")]
    pub queue_size: usize,
}

fn default_topic() -> String {
    "lead_through_commands".to_string()
}

fn default_queue_size() -> usize {
    1000
}

impl Default for RosCommandSubscriberConfig {
    fn default() -> Self {
        Self {
            topic: default_topic(),
            queue_size: default_queue_size(),
        }
    }
}

/// Receives checkpoint command labels published as `std_msgs/String`.
///
/// Only the latest unseen label is kept; a burst of labels between two polls
/// collapses to the last one.
pub struct RosCommandSubscriber {
    handler: SubscriberHandler<msg::std_msgs::String>,
}

impl RosCommandSubscriber {
    pub fn new(config: &RosCommandSubscriberConfig) -> Self {
        Self {
            handler: SubscriberHandler::new(&config.topic, config.queue_size),
        }
    }

    /// Takes the latest unseen command label, if any.
    pub fn take(&self) -> Result<Option<String>, armci::Error> {
        Ok(self.handler.take()?.map(|message| message.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RosCommandSubscriberConfig::default();
        assert_eq!(config.topic, "lead_through_commands");
        assert_eq!(config.queue_size, 1000);
    }

    #[test]
    fn parse_empty_config() {
        let config: RosCommandSubscriberConfig = toml::from_str("").unwrap();
        assert_eq!(config.topic, "lead_through_commands");
        assert_eq!(config.queue_size, 1000);
    }
}
