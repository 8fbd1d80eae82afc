use std::sync::{Arc, Mutex};

type MessageBuffer<T> = Arc<Mutex<Option<T>>>;

fn set_message_buffer<T>(buffer: &MessageBuffer<T>, message: T) {
    buffer.lock().unwrap().replace(message);
}

fn subscribe_with_message_buffer<T: rosrust::Message>(
    topic: &str,
    queue_size: usize,
) -> (MessageBuffer<T>, rosrust::Subscriber) {
    let buffer: MessageBuffer<T> = Arc::new(Mutex::new(None));
    let buffer_for_callback = buffer.clone();
    let subscriber = rosrust::subscribe(topic, queue_size, move |message: T| {
        set_message_buffer(&buffer_for_callback, message);
    })
    .unwrap();
    (buffer, subscriber)
}

/// Single-slot buffer holding the latest message of a subscription. The
/// rosrust callback thread writes it; the owning thread drains it with the
/// non-blocking [`take`](Self::take).
pub struct SubscriberHandler<T> {
    topic: String,
    buffer: MessageBuffer<T>,
    _subscriber: rosrust::Subscriber,
}

impl<T> SubscriberHandler<T>
where
    T: rosrust::Message,
{
    pub fn new(topic: &str, queue_size: usize) -> Self {
        let (buffer, _subscriber) = subscribe_with_message_buffer::<T>(topic, queue_size);
        Self {
            topic: topic.to_string(),
            buffer,
            _subscriber,
        }
    }

    /// Removes and returns the latest message, if one arrived since the
    /// previous `take`.
    pub fn take(&self) -> Result<Option<T>, armci::Error> {
        Ok(self
            .buffer
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to lock buffer for {} : {}", self.topic, e))?
            .take())
    }

    /// Returns a copy of the latest message without consuming it.
    pub fn get(&self) -> Result<Option<T>, armci::Error> {
        Ok(self
            .buffer
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to lock buffer for {} : {}", self.topic, e))?
            .clone())
    }

    /// Blocks until a first message has been observed on the topic.
    pub fn wait_message(&self, loop_millis: u64) {
        while rosrust::is_ok() && self.get().unwrap().is_none() {
            rosrust::ros_info!("Waiting {}", self.topic);
            std::thread::sleep(std::time::Duration::from_millis(loop_millis));
        }
    }
}
