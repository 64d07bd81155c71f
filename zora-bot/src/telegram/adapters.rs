//! Converters from teloxide types to core types.

use bot_core::{Chat, Message, ToCoreMessage, ToCoreUser, User};

pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl ToCoreUser for TelegramUserWrapper<'_> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
        }
    }
}

pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl ToCoreMessage for TelegramMessageWrapper<'_> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or(User {
                    id: 0,
                    username: None,
                    first_name: None,
                }),
            chat: Chat::new(self.0.chat.id.0),
            text: self.0.text().unwrap_or("").to_string(),
            sent_at: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_wrapper_maps_identity() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: None,
            username: Some("tester".to_string()),
            language_code: None,
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let core = TelegramUserWrapper(&user).to_core();
        assert_eq!(core.id, 123);
        assert_eq!(core.username.as_deref(), Some("tester"));
        assert_eq!(core.first_name.as_deref(), Some("Test"));
    }
}
