//! Application layer - Commands and Handlers.
//!
//! Orchestrates the pure domain resolvers and coordinates the ports they
//! need (clock, active workout state, generative fallback).

pub mod handlers;

pub use handlers::{
    Resolution, ResolveMessageCommand, ResolveMessageError, ResolveMessageHandler,
};
