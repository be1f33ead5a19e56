use campus_core::playback::{
    MediaEvent, MediaWidget, MediaWidgetFactory, PlaybackError, WidgetMount,
};
use dioxus::document::eval;
use dioxus::core::Task;
use dioxus::prelude::*;
use serde_json::Value;

use super::scripts::{destroy_script, mount_script};

/// Builds Plyr players inside the webview.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlyrFactory;

impl MediaWidgetFactory for PlyrFactory {
    fn construct(&self, mount: WidgetMount<'_>) -> Result<Box<dyn MediaWidget>, PlaybackError> {
        let script = mount_script(mount.element_id, mount.config)
            .map_err(|err| PlaybackError::Widget(err.to_string()))?;
        let mut channel = eval(&script);
        let events = mount.events;
        let element_id = mount.element_id.to_string();

        let listener = spawn({
            let element_id = element_id.clone();
            async move {
                loop {
                    let message = match channel.recv::<Value>().await {
                        Ok(message) => message,
                        Err(err) => {
                            tracing::warn!(player = %element_id, error = ?err, "player event channel closed");
                            break;
                        }
                    };
                    let Some(event) = decode_event(&element_id, message) else {
                        continue;
                    };
                    if events.unbounded_send(event).is_err() {
                        break;
                    }
                }
            }
        });

        tracing::debug!(player = %element_id, source = mount.source, "plyr mounted");
        Ok(Box::new(PlyrWidget {
            element_id,
            listener: Some(listener),
        }))
    }
}

/// Skips messages the controller cannot use; the player keeps reporting.
fn decode_event(element_id: &str, message: Value) -> Option<MediaEvent> {
    match serde_json::from_value(message) {
        Ok(event) => Some(event),
        Err(err) => {
            tracing::warn!(player = %element_id, error = %err, "undecodable player event");
            None
        }
    }
}

struct PlyrWidget {
    element_id: String,
    listener: Option<Task>,
}

impl MediaWidget for PlyrWidget {
    fn destroy(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.cancel();
        }
        let _ = eval(&destroy_script(&self.element_id));
        tracing::debug!(player = %self.element_id, "plyr destroyed");
    }
}
