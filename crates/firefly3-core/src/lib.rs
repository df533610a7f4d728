//! Declarative resource reconciliation for Firefly III.
//!
//! This crate owns the design decisions of the workspace: the mapping
//! between a partially-unknown declarative model and the API's JSON
//! attributes, and the lifecycle that keeps persisted state in step
//! with the remote system.
//!
//! - **[`Value<T>`]** — tri-state field wrapper (known / null /
//!   unknown). `Unknown` survives until a remote response resolves it.
//! - **State records** ([`model`]) — desired/persisted state per
//!   entity kind, with ordered trigger/action lists on rules.
//! - **Converters** ([`convert`]) — state ↔ wire attributes, both
//!   directions lossless for known values.
//! - **Catalog** ([`catalog`]) — the fixed trigger/action keyword
//!   lists and pre-flight validation.
//! - **[`ResourceController`]** — generic create/read/update/delete/
//!   import over a [`ResourceKind`], one instantiation per entity kind
//!   via [`Provider`].
//!
//! The host runtime supplies desired state and persists whatever the
//! controller returns; the controller never writes partial records.

pub mod catalog;
pub mod controller;
pub mod convert;
pub mod error;
pub mod model;
pub mod value;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::{ACTION_TYPES, RULE_TRIGGER_MOMENTS, TRIGGER_TYPES, ValidationError};
pub use controller::{
    CategoryKind, Provider, ResourceController, ResourceKind, RuleGroupKind, RuleKind,
};
pub use convert::ConvertError;
pub use error::CoreError;
pub use firefly3_config::{ConfigError, ProviderConfig};
pub use model::{
    CategoryState, RuleActionState, RuleGroupState, RuleState, RuleTriggerState,
};
pub use value::Value;
