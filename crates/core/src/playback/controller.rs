use futures_channel::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::config::PlayerConfig;
use super::event::{MediaEvent, PlaybackSignal};
use super::tracker::PlaybackState;
use super::PlaybackError;

pub type MediaEventSender = UnboundedSender<MediaEvent>;
pub type MediaEventReceiver = UnboundedReceiver<MediaEvent>;

/// A live widget instance (decoder session, DOM listeners, ...).
pub trait MediaWidget {
    /// Release everything the widget holds. Called exactly once.
    fn destroy(&mut self);
}

/// Everything a factory needs to bind one widget to one element.
pub struct WidgetMount<'a> {
    pub element_id: &'a str,
    pub source: &'a str,
    pub config: &'a PlayerConfig,
    /// The widget reports its native events here.
    pub events: MediaEventSender,
}

pub trait MediaWidgetFactory {
    /// # Errors
    ///
    /// Returns `PlaybackError::Widget` when the widget cannot be created.
    fn construct(&self, mount: WidgetMount<'_>) -> Result<Box<dyn MediaWidget>, PlaybackError>;
}

/// Owns one widget for the lifetime of one mount.
///
/// The widget is constructed in [`PlaybackController::mount`] and destroyed
/// in [`PlaybackController::unmount`] or on drop, whichever comes first.
pub struct PlaybackController {
    widget: Option<Box<dyn MediaWidget>>,
    state: PlaybackState,
    source: String,
}

impl PlaybackController {
    /// Construct the widget and return the stream of its native events.
    ///
    /// # Errors
    ///
    /// Returns `PlaybackError::EmptySource` for a blank source, or the
    /// factory's error. Nothing is left to destroy in either case.
    pub fn mount(
        factory: &dyn MediaWidgetFactory,
        element_id: &str,
        source: &str,
        config: &PlayerConfig,
    ) -> Result<(Self, MediaEventReceiver), PlaybackError> {
        if source.trim().is_empty() {
            return Err(PlaybackError::EmptySource);
        }

        let (events, receiver) = mpsc::unbounded();
        let widget = factory.construct(WidgetMount {
            element_id,
            source,
            config,
            events,
        })?;

        let controller = Self {
            widget: Some(widget),
            state: PlaybackState::default(),
            source: source.to_string(),
        };
        Ok((controller, receiver))
    }

    /// Translate a native event. Events arriving after unmount are dropped.
    pub fn handle(&mut self, event: MediaEvent) -> Option<PlaybackSignal> {
        if self.widget.is_none() {
            return None;
        }
        match event {
            MediaEvent::TimeUpdate { position, duration } => self
                .state
                .record_position(position, duration)
                .map(PlaybackSignal::Progress),
            MediaEvent::Seeked { position, duration } => self
                .state
                .record_seek(position, duration)
                .map(PlaybackSignal::Progress),
            MediaEvent::Ended => self.state.record_end().then_some(PlaybackSignal::Complete),
        }
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.widget.is_some()
    }

    /// Destroy the widget. Further calls do nothing.
    pub fn unmount(&mut self) {
        if let Some(mut widget) = self.widget.take() {
            widget.destroy();
        }
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        self.unmount();
    }
}
