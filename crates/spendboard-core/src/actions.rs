//! Interactive delete: confirm, call the backend, report failures

use crate::client::ExpenseApi;
use crate::http::Transport;
use spendboard_types::ExpenseId;

pub const DELETE_PROMPT: &str = "Delete this expense?";

/// Blocking user interaction (browser `confirm`/`alert`, terminal y/N)
pub trait Prompt {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined; nothing was sent
    Cancelled,
    Deleted,
    /// The backend call failed; the message was already shown via `alert`
    Failed(String),
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted)
    }
}

pub async fn delete_with_confirmation<T, P>(
    api: &ExpenseApi<T>,
    prompt: &P,
    id: ExpenseId,
) -> DeleteOutcome
where
    T: Transport,
    P: Prompt + ?Sized,
{
    if !prompt.confirm(DELETE_PROMPT) {
        return DeleteOutcome::Cancelled;
    }

    match api.delete_expense(id).await {
        Ok(()) => DeleteOutcome::Deleted,
        Err(e) => {
            let message = e.to_string();
            let message = if message.is_empty() {
                "Delete failed".to_string()
            } else {
                message
            };
            prompt.alert(&message);
            DeleteOutcome::Failed(message)
        }
    }
}
