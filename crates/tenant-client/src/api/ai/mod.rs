//! AI chat sessions

pub mod create_chat;
pub mod get_chat;
pub mod list_chats;
pub mod send_message;
