//! fitchat - Deterministic intent and slot resolution for a fitness chat assistant
//!
//! Turns a user message plus the active UI screen into a structured intent,
//! a clarification question, a disambiguation choice, a canned small-talk
//! reply, or a hand-off to a generative model.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
