//! # Handler chain
//!
//! Ordered dispatch table. All `before` hooks run in registration order (any `false` stops the
//! chain); then `handle` runs in order until one handler answers with `Stop` or `Reply`
//! (first match wins); then all `after` hooks run in reverse with the final response.
//! A message nobody answers ends as `Continue` and produces no reply.

use crate::core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[derive(Clone)]
struct Entry {
    name: &'static str,
    handler: Arc<dyn Handler>,
}

/// Chain of handlers: before (all) → handle (until Stop/Reply) → after (reverse).
#[derive(Clone, Default)]
pub struct HandlerChain {
    entries: Vec<Entry>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler; registration order is dispatch order.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        let name = handler.name();
        self.entries.push(Entry { name, handler });
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runs all before → handle until Stop/Reply → all after in reverse.
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        debug!(message_id = %message.id, "step: handler_chain started");

        for entry in self.entries.iter() {
            if !entry.handler.before(message).await? {
                info!(handler = %entry.name, "step: before returned false, chain stopped");
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut final_response = HandlerResponse::Continue;
        for entry in self.entries.iter() {
            let response = entry.handler.handle(message).await?;
            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    info!(handler = %entry.name, response = ?response, "step: message handled");
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => {}
            }
        }

        if final_response == HandlerResponse::Continue {
            debug!(message_content = %message.content, "step: no handler matched");
        }

        for entry in self.entries.iter().rev() {
            entry.handler.after(message, &final_response).await?;
        }

        debug!(message_id = %message.id, "step: handler_chain finished");
        Ok(final_response)
    }
}
