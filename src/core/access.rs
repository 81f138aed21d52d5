//! Access guard deciding where `/usercreate` may run.
//!
//! Empty allow-lists mean "no restriction". The guild list is checked before the
//! channel list.

use std::collections::HashSet;

/// Outcome of [`AccessPolicy::authorize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The invocation may proceed
    Allowed,
    /// The guild is not on a non-empty guild allow-list
    DeniedGuild,
    /// The channel is not on a non-empty channel allow-list
    DeniedChannel,
}

impl AccessDecision {
    /// User-facing text for a denial, `None` when allowed.
    #[must_use]
    pub const fn denial_message(self) -> Option<&'static str> {
        match self {
            Self::Allowed => None,
            Self::DeniedGuild => Some("This command is not available in this server."),
            Self::DeniedChannel => Some("This command is restricted in this channel."),
        }
    }
}

/// Guild and channel allow-lists, loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessPolicy {
    guilds: HashSet<u64>,
    channels: HashSet<u64>,
}

impl AccessPolicy {
    /// Builds a policy from the two allow-lists.
    #[must_use]
    pub fn new(guilds: HashSet<u64>, channels: HashSet<u64>) -> Self {
        Self { guilds, channels }
    }

    /// True when neither list restricts anything.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.guilds.is_empty() && self.channels.is_empty()
    }

    /// Decides whether an invocation from `guild_id`/`channel_id` may proceed.
    ///
    /// `guild_id` is `None` for direct messages, which never match a non-empty guild list.
    #[must_use]
    pub fn authorize(&self, guild_id: Option<u64>, channel_id: u64) -> AccessDecision {
        if !self.guilds.is_empty() && !guild_id.is_some_and(|id| self.guilds.contains(&id)) {
            return AccessDecision::DeniedGuild;
        }
        if !self.channels.is_empty() && !self.channels.contains(&channel_id) {
            return AccessDecision::DeniedChannel;
        }
        AccessDecision::Allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(guilds: &[u64], channels: &[u64]) -> AccessPolicy {
        AccessPolicy::new(
            guilds.iter().copied().collect(),
            channels.iter().copied().collect(),
        )
    }

    #[test]
    fn test_empty_lists_allow_everything() {
        let policy = AccessPolicy::default();
        for guild in [None, Some(0), Some(1), Some(u64::MAX)] {
            assert_eq!(policy.authorize(guild, 42), AccessDecision::Allowed);
        }
    }

    #[test]
    fn test_guild_list_allows_exactly_listed_guilds() {
        let policy = policy(&[10, 20], &[]);
        assert_eq!(policy.authorize(Some(10), 1), AccessDecision::Allowed);
        assert_eq!(policy.authorize(Some(20), 2), AccessDecision::Allowed);
        assert_eq!(policy.authorize(Some(30), 1), AccessDecision::DeniedGuild);
    }

    #[test]
    fn test_direct_messages_denied_by_guild_list() {
        let policy = policy(&[10], &[]);
        assert_eq!(policy.authorize(None, 1), AccessDecision::DeniedGuild);
    }

    #[test]
    fn test_channel_list_checked_after_guild() {
        let policy = policy(&[10], &[100]);
        assert_eq!(policy.authorize(Some(10), 100), AccessDecision::Allowed);
        assert_eq!(policy.authorize(Some(10), 200), AccessDecision::DeniedChannel);
        // Guild denial wins even when the channel is also wrong
        assert_eq!(policy.authorize(Some(99), 200), AccessDecision::DeniedGuild);
    }

    #[test]
    fn test_channel_list_alone() {
        let policy = policy(&[], &[100]);
        assert_eq!(policy.authorize(Some(5), 100), AccessDecision::Allowed);
        assert_eq!(policy.authorize(None, 101), AccessDecision::DeniedChannel);
    }

    #[test]
    fn test_denial_messages() {
        assert_eq!(AccessDecision::Allowed.denial_message(), None);
        assert_eq!(
            AccessDecision::DeniedGuild.denial_message(),
            Some("This command is not available in this server.")
        );
        assert_eq!(
            AccessDecision::DeniedChannel.denial_message(),
            Some("This command is restricted in this channel.")
        );
    }
}
