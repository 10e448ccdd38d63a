//! Chat session state

pub mod conversation;

pub use conversation::{Conversation, Message, Sender};
