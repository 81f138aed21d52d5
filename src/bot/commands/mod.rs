//! Discord command implementations.

/// The `/usercreate` provisioning command
pub mod usercreate;

pub use usercreate::*;

use super::BotData;
use crate::errors::Error;

/// Every command the bot serves, shared by the bot and the registrar.
#[must_use]
pub fn all() -> Vec<poise::Command<BotData, Error>> {
    vec![usercreate()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usercreate_definition() {
        let commands = all();
        assert_eq!(commands.len(), 1);

        let command = &commands[0];
        assert_eq!(command.name, "usercreate");
        assert!(command.slash_action.is_some());

        let options: Vec<(&str, bool)> = command
            .parameters
            .iter()
            .map(|p| (p.name.as_str(), p.required))
            .collect();
        assert_eq!(
            options,
            vec![
                ("username", true),
                ("email", true),
                ("password", true),
                ("confirm_password", true),
                ("first", false),
                ("last", false),
            ]
        );
    }
}
