// Declarative state records, one per managed entity kind.
//
// These mirror the wire attribute structs but hold tri-state `Value`s,
// so a field the user never set stays distinguishable from one set to
// the zero value. Server timestamps stay out of the declarative model;
// they live on the wire structs only.

use crate::value::Value;

/// Desired/persisted state for a category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryState {
    /// Server-assigned, `Unknown` before first create.
    pub id: Value<String>,
    pub name: Value<String>,
    pub notes: Value<String>,
}

/// Desired/persisted state for a rule group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleGroupState {
    pub id: Value<String>,
    pub title: Value<String>,
    pub description: Value<String>,
    /// Server-computed when not set; groups with a lower order run first.
    pub order: Value<i32>,
    pub active: Value<bool>,
}

/// Desired/persisted state for a rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleState {
    pub id: Value<String>,
    pub title: Value<String>,
    pub description: Value<String>,
    pub rule_group_id: Value<String>,
    /// The moment the rule fires (see [`catalog::RULE_TRIGGER_MOMENTS`](crate::catalog::RULE_TRIGGER_MOMENTS)).
    pub trigger: Value<String>,
    pub active: Value<bool>,
    /// If strict, ALL triggers must match; otherwise one is enough.
    pub strict: Value<bool>,
    pub stop_processing: Value<bool>,
    /// Evaluation order is list order.
    pub triggers: Vec<RuleTriggerState>,
    /// Execution order is list order.
    pub actions: Vec<RuleActionState>,
}

/// One rule condition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleTriggerState {
    pub trigger_type: Value<String>,
    pub value: Value<String>,
    pub active: Value<bool>,
    /// Negates the condition ("description is NOT ...").
    pub prohibited: Value<bool>,
    pub stop_processing: Value<bool>,
}

/// One rule effect.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleActionState {
    pub action_type: Value<String>,
    pub value: Value<String>,
    pub active: Value<bool>,
    pub stop_processing: Value<bool>,
}
