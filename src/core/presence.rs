//! Presence rotation schedule, derived from wall-clock time.

use serde::Deserialize;
use std::time::Duration;

/// How long each activity stays up.
pub const ROTATION_INTERVAL: Duration = Duration::from_secs(15);

/// Discord activity types the rotator can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// "Playing ..."
    Playing,
    /// "Watching ..."
    Watching,
    /// "Listening to ..."
    Listening,
    /// "Competing in ..."
    Competing,
}

/// One entry of the rotation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PresenceActivity {
    /// Activity type shown before the name
    pub kind: ActivityKind,
    /// Text shown as the activity
    pub name: String,
}

impl PresenceActivity {
    /// Builds an activity of `kind` named `name`.
    #[must_use]
    pub fn new(kind: ActivityKind, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }
}

/// Built-in rotation used when no config file overrides it.
#[must_use]
pub fn default_activities() -> Vec<PresenceActivity> {
    vec![
        PresenceActivity::new(ActivityKind::Playing, "Pterodactyl User Bot"),
        PresenceActivity::new(ActivityKind::Watching, "Pterodactyl users"),
        PresenceActivity::new(ActivityKind::Listening, "/usercreate"),
    ]
}

/// `floor(now / interval) mod len`, or `None` for an empty rotation.
#[must_use]
pub fn rotation_index(now_millis: i64, interval: Duration, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let interval_millis = i64::try_from(interval.as_millis()).ok()?.max(1);
    let slot = now_millis.div_euclid(interval_millis);
    let len = i64::try_from(len).ok()?;
    usize::try_from(slot.rem_euclid(len)).ok()
}

/// The activity that should be showing at `now_millis`.
#[must_use]
pub fn current_activity(
    activities: &[PresenceActivity],
    now_millis: i64,
) -> Option<&PresenceActivity> {
    rotation_index(now_millis, ROTATION_INTERVAL, activities.len()).and_then(|i| activities.get(i))
}
