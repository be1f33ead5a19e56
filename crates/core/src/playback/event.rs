use serde::{Deserialize, Deserializer};

/// Raw events reported by the media widget.
///
/// Positions and durations are in seconds, as the media element reports them.
/// A `null` (how JSON carries `NaN` and `Infinity`) reads as `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaEvent {
    TimeUpdate {
        #[serde(deserialize_with = "seconds")]
        position: f64,
        #[serde(deserialize_with = "seconds")]
        duration: f64,
    },
    Seeked {
        #[serde(deserialize_with = "seconds")]
        position: f64,
        #[serde(deserialize_with = "seconds")]
        duration: f64,
    },
    Ended,
}

fn seconds<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// What the controller tells its owner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackSignal {
    /// Fraction of the media played, in `[0, 1]`.
    Progress(f64),
    /// End of media was reached for the first time in this mount.
    Complete,
}
