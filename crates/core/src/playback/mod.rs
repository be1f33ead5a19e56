//! Playback progress and completion tracking for an embedded media widget.
//!
//! The widget itself (Plyr in the desktop build) is reached only through
//! [`MediaWidgetFactory`] and [`MediaWidget`]; everything here is plain state
//! so it can be driven from tests without a webview.

mod config;
mod controller;
mod event;
mod tracker;

pub use config::{Control, PlayerConfig, QualityOptions, SettingsMenu, SpeedOptions};
pub use controller::{
    MediaEventReceiver, MediaEventSender, MediaWidget, MediaWidgetFactory, PlaybackController,
    WidgetMount,
};
pub use event::{MediaEvent, PlaybackSignal};
pub use tracker::{PlaybackState, progress_fraction};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("media source cannot be empty")]
    EmptySource,

    #[error("player widget failed to start: {0}")]
    Widget(String),
}
