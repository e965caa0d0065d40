//! Command channel between the embedded application and the host
//!
//! Calls cross the embedder boundary as JSON strings. The dispatcher
//! decodes each call and routes it to the handler registered for its
//! channel name.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{DisplayError, Result};

/// Channel carrying display commands from the application layer.
pub const HIGH_REFRESH_RATE_CHANNEL: &str = "high_refresh_rate";

/// Command requesting the highest available refresh rate.
pub const SET_HIGH_REFRESH_RATE: &str = "setHighRefreshRate";

/// A named invocation received over a command channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommandCall {
    /// Command name.
    pub method: String,
    /// Argument payload. `setHighRefreshRate` takes none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<serde_json::Value>,
}

impl CommandCall {
    /// Call with no arguments.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: None,
        }
    }

    /// Decode a call from its JSON wire form.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| DisplayError::Codec(e.to_string()))
    }

    /// Encode this call to its JSON wire form.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| DisplayError::Codec(e.to_string()))
    }
}

/// Host reply to a command call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandReply {
    /// The command ran. `setHighRefreshRate` acknowledges with no
    /// payload.
    Success {
        /// Result payload, if the command produces one.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<serde_json::Value>,
    },
    /// No handler recognizes the requested command name.
    NotImplemented,
}

impl CommandReply {
    /// Empty success acknowledgment.
    pub fn ack() -> Self {
        Self::Success { payload: None }
    }

    /// Whether this reply reports success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Decode a reply from its JSON wire form.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| DisplayError::Codec(e.to_string()))
    }

    /// Encode this reply to its JSON wire form.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| DisplayError::Codec(e.to_string()))
    }
}

/// Handler invoked for every call on a registered channel.
pub type CommandHandler = Box<dyn Fn(&CommandCall) -> CommandReply + Send + Sync>;

/// Routes inbound command calls to per-channel handlers.
///
/// Dispatch is strictly sequential. The host hands over one call at a
/// time and reads the reply before the next, so handlers never observe
/// interleaved calls on the same dispatcher.
pub struct CommandDispatcher {
    handlers: FxHashMap<String, CommandHandler>,
}

impl CommandDispatcher {
    /// Dispatcher with no channels registered.
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// Register `handler` for `channel`, replacing any previous handler
    /// on that channel.
    pub fn register<F>(&mut self, channel: impl Into<String>, handler: F)
    where
        F: Fn(&CommandCall) -> CommandReply + Send + Sync + 'static,
    {
        self.handlers.insert(channel.into(), Box::new(handler));
    }

    /// Drop the handler for `channel`. Returns whether one was present.
    pub fn unregister(&mut self, channel: &str) -> bool {
        self.handlers.remove(channel).is_some()
    }

    /// Dispatch `call` to the handler registered for `channel`.
    ///
    /// A channel nobody registered behaves like a handler that knows no
    /// commands: the caller sees [`CommandReply::NotImplemented`].
    pub fn dispatch(&self, channel: &str, call: &CommandCall) -> CommandReply {
        match self.handlers.get(channel) {
            Some(handler) => handler(call),
            None => {
                tracing::debug!("No handler registered for channel '{}'", channel);
                CommandReply::NotImplemented
            }
        }
    }

    /// Decode `raw` as a call for `channel`, dispatch it, and encode the
    /// reply.
    pub fn dispatch_raw(&self, channel: &str, raw: &str) -> Result<String> {
        let call = CommandCall::from_json(raw)?;
        self.dispatch(channel, &call).to_json()
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
