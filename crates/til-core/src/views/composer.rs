//! Post composer state.
//!
//! Holds the input buffer across a `create_post` call. The buffer is only
//! cleared once the contract confirms the post; a failed call leaves it as
//! the user typed it.

use crate::contract::ContractClient;
use crate::error::TilResult;
use crate::types::Post;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostComposer {
    content: String,
    submitting: bool,
}

impl PostComposer {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Mark a submission as started and hand back the content to send.
    ///
    /// Returns `None` while another submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(self.content.clone())
    }

    /// Record the outcome of a submission and run `on_success` once if the
    /// contract accepted the post. Returns true on success.
    pub fn finish_submit<T>(&mut self, result: &TilResult<T>, on_success: impl FnOnce()) -> bool {
        self.submitting = false;
        match result {
            Ok(_) => {
                self.content.clear();
                on_success();
                true
            }
            Err(e) => {
                tracing::error!("Failed to create post: {}", e);
                false
            }
        }
    }

    /// Submit the current buffer through `contract`
    pub async fn submit(
        &mut self,
        contract: &dyn ContractClient,
        on_success: impl FnOnce(),
    ) -> Option<TilResult<Post>> {
        let content = self.begin_submit()?;
        let result = contract.create_post(&content).await;
        self.finish_submit(&result, on_success);
        Some(result)
    }
}
