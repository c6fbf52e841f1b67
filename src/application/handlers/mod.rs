//! Application handlers.

pub mod resolve_message;

pub use resolve_message::{
    Resolution, ResolveMessageCommand, ResolveMessageError, ResolveMessageHandler,
};
