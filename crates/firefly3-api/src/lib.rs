//! Async client for the Firefly III REST API.
//!
//! Covers the entity kinds managed declaratively by `firefly3-core`:
//! categories, rule groups, and rules (with their ordered triggers and
//! actions). The crate exposes:
//!
//! - **[`Client`]** — generic CRUD over any [`WireEntity`], speaking the
//!   `/api/v1/` JSON surface with bearer-token auth.
//! - **Wire model** ([`wire`]) — the `{data: {type, id, attributes}}`
//!   response envelope and the per-kind attribute structs ([`entities`]).
//!   Requests carry the bare attribute object; only responses are
//!   enveloped.
//! - **[`Error`]** — typed failure taxonomy with a distinguished
//!   [`Error::NotFound`] so callers can react to out-of-band deletion
//!   without string matching.

pub mod client;
pub mod entities;
pub mod error;
pub mod transport;
pub mod wire;

pub use client::Client;
pub use entities::{Category, Rule, RuleAction, RuleGroup, RuleTrigger};
pub use error::Error;
pub use transport::TransportConfig;
pub use wire::{Payload, Single, WireEntity};
