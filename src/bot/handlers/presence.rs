//! Presence rotator.
//!
//! Purely cosmetic: cycles the bot's activity every [`ROTATION_INTERVAL`]. It shares
//! nothing with command handling.

use crate::core::presence::{ActivityKind, PresenceActivity, ROTATION_INTERVAL, current_activity};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Maps a configured activity onto serenity's activity type.
#[must_use]
pub fn to_activity_data(activity: &PresenceActivity) -> serenity::ActivityData {
    let name = activity.name.as_str();
    match activity.kind {
        ActivityKind::Playing => serenity::ActivityData::playing(name),
        ActivityKind::Watching => serenity::ActivityData::watching(name),
        ActivityKind::Listening => serenity::ActivityData::listening(name),
        ActivityKind::Competing => serenity::ActivityData::competing(name),
    }
}

fn rotate(ctx: &serenity::Context, activities: &[PresenceActivity]) {
    let now = chrono::Utc::now().timestamp_millis();
    let Some(activity) = current_activity(activities, now) else {
        return;
    };
    debug!(kind = ?activity.kind, name = %activity.name, "Rotating presence");
    ctx.set_presence(
        Some(to_activity_data(activity)),
        serenity::OnlineStatus::Online,
    );
}

/// Starts the rotator; the first update happens immediately.
pub fn spawn_presence_rotator(
    ctx: serenity::Context,
    activities: Arc<[PresenceActivity]>,
) -> JoinHandle<()> {
    if activities.is_empty() {
        warn!("No presence activities configured, rotator idle");
    }
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(ROTATION_INTERVAL);
        loop {
            ticker.tick().await;
            rotate(&ctx, &activities);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_mapping_keeps_name() {
        for kind in [
            ActivityKind::Playing,
            ActivityKind::Watching,
            ActivityKind::Listening,
            ActivityKind::Competing,
        ] {
            let data = to_activity_data(&PresenceActivity::new(kind, "/usercreate"));
            assert_eq!(data.name, "/usercreate");
        }
    }

    #[test]
    fn test_activity_kind_mapping() {
        let data = to_activity_data(&PresenceActivity::new(ActivityKind::Watching, "users"));
        assert_eq!(data.kind, serenity::ActivityType::Watching);
        let data = to_activity_data(&PresenceActivity::new(ActivityKind::Listening, "x"));
        assert_eq!(data.kind, serenity::ActivityType::Listening);
    }
}
