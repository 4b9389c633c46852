//! State for the message-display subsystem.

use crate::mvi::State;

/// An in-product message eligible for display. `id` is the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub text: String,
}

/// Messages known to the session plus the one currently slotted for display.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessagingState {
    pub messages: Vec<Message>,
    pub message_to_show: Option<Message>,
}

impl State for MessagingState {}
