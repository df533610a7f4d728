// ── Resource lifecycle controller ──
//
// One generic controller drives create/read/update/delete/import for
// every entity kind; the per-kind pieces (conversions, validation, id
// plumbing) hang off the ResourceKind trait. Each operation is a
// single remote call wrapped by two conversions: it either fully
// succeeds (call succeeded, response decoded) or leaves state exactly
// as it was — except read's prune-on-404 policy, which is the point.
//
// The host orchestrator never runs two operations on the same entity
// concurrently, so the controller holds no locks; the only shared
// state is the immutable client configuration.

use std::marker::PhantomData;
use std::sync::Arc;

use secrecy::SecretString;
use tracing::{debug, warn};

use firefly3_api::{Client, TransportConfig, WireEntity};
use firefly3_config::ProviderConfig;

use crate::catalog::{ValidationError, validate_category, validate_rule, validate_rule_group};
use crate::convert::{
    ConvertError, category_from_wire, category_to_wire, rule_from_wire, rule_group_from_wire,
    rule_group_to_wire, rule_to_wire,
};
use crate::error::CoreError;
use crate::model::{CategoryState, RuleGroupState, RuleState};
use crate::value::Value;

// ── Per-kind capability seam ────────────────────────────────────────

/// Everything the generic controller needs to know about one entity
/// kind: its state and wire types, the conversions between them, the
/// pre-flight validation, and identifier access.
pub trait ResourceKind {
    /// Human-readable kind name for logs and error messages.
    const NAME: &'static str;

    type State: Send + Sync;
    type Wire: WireEntity + Send + Sync;

    fn validate(state: &Self::State) -> Result<(), ValidationError>;
    fn to_wire(state: &Self::State) -> Result<Self::Wire, ConvertError>;
    fn from_wire(wire: Self::Wire) -> Self::State;

    fn id(state: &Self::State) -> &Value<String>;
    fn set_id(state: &mut Self::State, id: String);
}

/// Marker for the category kind.
pub struct CategoryKind;

impl ResourceKind for CategoryKind {
    const NAME: &'static str = "category";

    type State = CategoryState;
    type Wire = firefly3_api::Category;

    fn validate(state: &Self::State) -> Result<(), ValidationError> {
        validate_category(state)
    }

    fn to_wire(state: &Self::State) -> Result<Self::Wire, ConvertError> {
        category_to_wire(state)
    }

    fn from_wire(wire: Self::Wire) -> Self::State {
        category_from_wire(wire)
    }

    fn id(state: &Self::State) -> &Value<String> {
        &state.id
    }

    fn set_id(state: &mut Self::State, id: String) {
        state.id = Value::Known(id);
    }
}

/// Marker for the rule-group kind.
pub struct RuleGroupKind;

impl ResourceKind for RuleGroupKind {
    const NAME: &'static str = "rule group";

    type State = RuleGroupState;
    type Wire = firefly3_api::RuleGroup;

    fn validate(state: &Self::State) -> Result<(), ValidationError> {
        validate_rule_group(state)
    }

    fn to_wire(state: &Self::State) -> Result<Self::Wire, ConvertError> {
        rule_group_to_wire(state)
    }

    fn from_wire(wire: Self::Wire) -> Self::State {
        rule_group_from_wire(wire)
    }

    fn id(state: &Self::State) -> &Value<String> {
        &state.id
    }

    fn set_id(state: &mut Self::State, id: String) {
        state.id = Value::Known(id);
    }
}

/// Marker for the rule kind.
pub struct RuleKind;

impl ResourceKind for RuleKind {
    const NAME: &'static str = "rule";

    type State = RuleState;
    type Wire = firefly3_api::Rule;

    fn validate(state: &Self::State) -> Result<(), ValidationError> {
        validate_rule(state)
    }

    fn to_wire(state: &Self::State) -> Result<Self::Wire, ConvertError> {
        rule_to_wire(state)
    }

    fn from_wire(wire: Self::Wire) -> Self::State {
        rule_from_wire(wire)
    }

    fn id(state: &Self::State) -> &Value<String> {
        &state.id
    }

    fn set_id(state: &mut Self::State, id: String) {
        state.id = Value::Known(id);
    }
}

// ── Controller ──────────────────────────────────────────────────────

/// Drives the remote lifecycle of one entity kind.
///
/// Every method returns the full replacement state record for the host
/// runtime to persist; the controller itself keeps nothing between
/// calls.
pub struct ResourceController<K: ResourceKind> {
    client: Arc<Client>,
    _kind: PhantomData<K>,
}

impl<K: ResourceKind> ResourceController<K> {
    pub fn new(client: Arc<Client>) -> Self {
        Self {
            client,
            _kind: PhantomData,
        }
    }

    /// Create the remote entity from desired state and return the
    /// materialized record (identifier and server-computed fields
    /// resolved).
    ///
    /// The desired state must not carry an identifier yet. If the
    /// remote call succeeds but the response fails to decode, the
    /// remote entity exists with no local record; the error carries
    /// the raw body so the orphan can be found.
    pub async fn create(&self, desired: &K::State) -> Result<K::State, CoreError> {
        if let Value::Known(id) = K::id(desired) {
            return Err(CoreError::IdentifierAlreadySet {
                kind: K::NAME,
                id: id.clone(),
            });
        }

        K::validate(desired)?;
        let wire = K::to_wire(desired)?;
        let created = self.client.create(&wire).await?;
        let state = K::from_wire(created);

        debug!(kind = K::NAME, "created resource");
        Ok(state)
    }

    /// Refresh state from the remote entity.
    ///
    /// Returns `Ok(None)` when the remote entity is gone: the record
    /// should be dropped from state so the next reconciliation can
    /// recreate it. That outcome is a warning, not a failure. Any
    /// other error aborts the read.
    pub async fn read(&self, current: &K::State) -> Result<Option<K::State>, CoreError> {
        let id = Self::known_id(current)?;

        match self.client.get::<K::Wire>(id).await {
            Ok(wire) => Ok(Some(K::from_wire(wire))),
            Err(e) if e.is_not_found() => {
                warn!(
                    kind = K::NAME,
                    id, "remote entity no longer exists; dropping it from state"
                );
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the remote entity with desired state (full-document
    /// replace) and return the refreshed record.
    ///
    /// The identifier never changes once assigned: whatever the wire
    /// response claims, the returned state keeps the prior id. A
    /// vanished remote entity is a hard failure here, unlike read.
    pub async fn update(&self, desired: &K::State) -> Result<K::State, CoreError> {
        let id = Self::known_id(desired)?.to_owned();

        K::validate(desired)?;
        let wire = K::to_wire(desired)?;
        let updated = self.client.update(&id, &wire).await?;
        let mut state = K::from_wire(updated);
        K::set_id(&mut state, id);

        debug!(kind = K::NAME, "updated resource");
        Ok(state)
    }

    /// Delete the remote entity. The host runtime removes the state
    /// record itself; there is nothing to return.
    pub async fn delete(&self, current: &K::State) -> Result<(), CoreError> {
        let id = Self::known_id(current)?;
        self.client.delete::<K::Wire>(id).await?;

        debug!(kind = K::NAME, id, "deleted resource");
        Ok(())
    }

    /// Materialize full state from an identifier supplied out-of-band,
    /// with no prior configuration to diff against.
    pub async fn import(&self, id: &str) -> Result<K::State, CoreError> {
        let wire = self.client.get::<K::Wire>(id).await?;
        let state = K::from_wire(wire);

        debug!(kind = K::NAME, id, "imported resource");
        Ok(state)
    }

    fn known_id(state: &K::State) -> Result<&str, CoreError> {
        match K::id(state) {
            Value::Known(id) => Ok(id),
            Value::Null | Value::Unknown => {
                Err(CoreError::MissingIdentifier { kind: K::NAME })
            }
        }
    }
}

// ── Provider ────────────────────────────────────────────────────────

/// Entry point tying one Firefly III instance to its three resource
/// controllers.
///
/// Endpoint and credential are fixed for the provider's lifetime; the
/// underlying client is shared by all controllers and safe for
/// concurrent operations on different entities.
pub struct Provider {
    client: Arc<Client>,
}

impl Provider {
    /// Connect-less construction: validates the endpoint URL and bakes
    /// the credential into default headers. No request is made.
    pub fn new(endpoint: &str, api_key: &SecretString) -> Result<Self, CoreError> {
        let client = Client::new(endpoint, api_key)?;
        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Construction from resolved configuration (explicit values with
    /// `FIREFLY3_*` environment fallback; see `firefly3-config`).
    pub fn from_config(config: &ProviderConfig) -> Result<Self, CoreError> {
        Self::new(config.endpoint.as_str(), &config.api_key)
    }

    /// Construction with explicit transport settings (timeouts).
    pub fn with_transport(
        endpoint: &str,
        api_key: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, CoreError> {
        let client = Client::with_transport(endpoint, api_key, transport)?;
        Ok(Self {
            client: Arc::new(client),
        })
    }

    pub fn categories(&self) -> ResourceController<CategoryKind> {
        ResourceController::new(Arc::clone(&self.client))
    }

    pub fn rule_groups(&self) -> ResourceController<RuleGroupKind> {
        ResourceController::new(Arc::clone(&self.client))
    }

    pub fn rules(&self) -> ResourceController<RuleKind> {
        ResourceController::new(Arc::clone(&self.client))
    }
}
