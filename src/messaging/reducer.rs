//! Reducer for the message-display subsystem.

use crate::mvi::Reducer;

use super::action::MessagingAction;
use super::state::MessagingState;

pub struct MessagingReducer;

impl Reducer for MessagingReducer {
    type State = MessagingState;
    type Action = MessagingAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            MessagingAction::UpdateMessages(messages) => MessagingState {
                messages,
                ..state
            },

            MessagingAction::UpdateMessageToShow(message) => MessagingState {
                message_to_show: Some(message),
                ..state
            },

            MessagingAction::ConsumeMessageToShow => MessagingState {
                message_to_show: None,
                ..state
            },

            MessagingAction::MessageDismissed(id) => {
                let message_to_show = state
                    .message_to_show
                    .filter(|message| message.id != id);
                let messages = state
                    .messages
                    .into_iter()
                    .filter(|message| message.id != id)
                    .collect();
                MessagingState {
                    messages,
                    message_to_show,
                }
            }
        }
    }
}
