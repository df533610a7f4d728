// ── State-to-wire conversions ──
//
// Bridges the tri-state declarative records into the concrete JSON
// attribute structs `firefly3_api` sends, and back. The wire side has
// no notion of absence for most fields, so `Null` becomes the type's
// zero value on the way out; `Unknown` must never reach a request body
// and is reported as a conversion error. Responses resolve everything
// to `Known` verbatim, nested collections at exactly the returned
// length and order.

use thiserror::Error;

use firefly3_api::{Category, Rule, RuleAction, RuleGroup, RuleTrigger};

use crate::model::{
    CategoryState, RuleActionState, RuleGroupState, RuleState, RuleTriggerState,
};
use crate::value::Value;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// An `Unknown` field reached a request body. Unknowns are resolved
    /// by remote responses, never by the converter.
    #[error("field `{field}` is still unknown and cannot be sent to the API")]
    Unresolved { field: String },
}

/// Flatten a tri-state value for a request body: `Null` becomes the
/// zero value (the API cannot express absence for these fields).
fn concrete<T: Clone + Default>(field: &str, value: &Value<T>) -> Result<T, ConvertError> {
    match value {
        Value::Known(v) => Ok(v.clone()),
        Value::Null => Ok(T::default()),
        Value::Unknown => Err(ConvertError::Unresolved {
            field: field.to_owned(),
        }),
    }
}

// ── Category ────────────────────────────────────────────────────────

pub fn category_to_wire(state: &CategoryState) -> Result<Category, ConvertError> {
    Ok(Category {
        id: None,
        created_at: None,
        updated_at: None,
        name: concrete("name", &state.name)?,
        notes: concrete("notes", &state.notes)?,
    })
}

pub fn category_from_wire(wire: Category) -> CategoryState {
    CategoryState {
        id: wire.id.into(),
        name: Value::Known(wire.name),
        notes: Value::Known(wire.notes),
    }
}

// ── Rule group ──────────────────────────────────────────────────────

pub fn rule_group_to_wire(state: &RuleGroupState) -> Result<RuleGroup, ConvertError> {
    // `order` is server-computed: unset (null or unknown) is omitted
    // from the body and filled in by the response.
    let order = match &state.order {
        Value::Known(v) => Some(*v),
        Value::Null | Value::Unknown => None,
    };

    Ok(RuleGroup {
        id: None,
        created_at: None,
        updated_at: None,
        title: concrete("title", &state.title)?,
        description: concrete("description", &state.description)?,
        order,
        active: concrete("active", &state.active)?,
    })
}

pub fn rule_group_from_wire(wire: RuleGroup) -> RuleGroupState {
    RuleGroupState {
        id: wire.id.into(),
        title: Value::Known(wire.title),
        description: Value::Known(wire.description),
        order: wire.order.into(),
        active: Value::Known(wire.active),
    }
}

// ── Rule ────────────────────────────────────────────────────────────

pub fn rule_to_wire(state: &RuleState) -> Result<Rule, ConvertError> {
    let mut triggers = Vec::with_capacity(state.triggers.len());
    for (i, t) in state.triggers.iter().enumerate() {
        triggers.push(RuleTrigger {
            id: None,
            created_at: None,
            updated_at: None,
            trigger_type: concrete(&format!("triggers[{i}].type"), &t.trigger_type)?,
            value: concrete(&format!("triggers[{i}].value"), &t.value)?,
            order: None,
            active: concrete(&format!("triggers[{i}].active"), &t.active)?,
            prohibited: concrete(&format!("triggers[{i}].prohibited"), &t.prohibited)?,
            stop_processing: concrete(
                &format!("triggers[{i}].stop_processing"),
                &t.stop_processing,
            )?,
        });
    }

    let mut actions = Vec::with_capacity(state.actions.len());
    for (i, a) in state.actions.iter().enumerate() {
        actions.push(RuleAction {
            id: None,
            created_at: None,
            updated_at: None,
            action_type: concrete(&format!("actions[{i}].type"), &a.action_type)?,
            value: concrete(&format!("actions[{i}].value"), &a.value)?,
            order: None,
            active: concrete(&format!("actions[{i}].active"), &a.active)?,
            stop_processing: concrete(
                &format!("actions[{i}].stop_processing"),
                &a.stop_processing,
            )?,
        });
    }

    Ok(Rule {
        id: None,
        created_at: None,
        updated_at: None,
        title: concrete("title", &state.title)?,
        description: concrete("description", &state.description)?,
        rule_group_id: concrete("rule_group_id", &state.rule_group_id)?,
        rule_group_title: None,
        order: None,
        trigger: concrete("trigger", &state.trigger)?,
        active: concrete("active", &state.active)?,
        strict: concrete("strict", &state.strict)?,
        stop_processing: concrete("stop_processing", &state.stop_processing)?,
        triggers,
        actions,
    })
}

pub fn rule_from_wire(wire: Rule) -> RuleState {
    let triggers = wire
        .triggers
        .into_iter()
        .map(|t| RuleTriggerState {
            trigger_type: Value::Known(t.trigger_type),
            value: Value::Known(t.value),
            active: Value::Known(t.active),
            prohibited: Value::Known(t.prohibited),
            stop_processing: Value::Known(t.stop_processing),
        })
        .collect();

    let actions = wire
        .actions
        .into_iter()
        .map(|a| RuleActionState {
            action_type: Value::Known(a.action_type),
            value: Value::Known(a.value),
            active: Value::Known(a.active),
            stop_processing: Value::Known(a.stop_processing),
        })
        .collect();

    RuleState {
        id: wire.id.into(),
        title: Value::Known(wire.title),
        description: Value::Known(wire.description),
        rule_group_id: Value::Known(wire.rule_group_id),
        trigger: Value::Known(wire.trigger),
        active: Value::Known(wire.active),
        strict: Value::Known(wire.strict),
        stop_processing: Value::Known(wire.stop_processing),
        triggers,
        actions,
    }
}
