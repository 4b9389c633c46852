//! Actions for the message-display subsystem.

use crate::messaging::state::Message;
use crate::mvi::Action;

#[derive(Debug, Clone)]
pub enum MessagingAction {
    /// Replace the known message list wholesale.
    UpdateMessages(Vec<Message>),

    /// Slot a message for display.
    UpdateMessageToShow(Message),

    /// Clear the display slot after the UI has shown the message.
    ConsumeMessageToShow,

    /// User dismissed a message: drop it from the list and clear the display
    /// slot if it held that message.
    MessageDismissed(String),
}

impl Action for MessagingAction {}
