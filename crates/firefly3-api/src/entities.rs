// Attribute structs for the three managed entity kinds.
//
// Field names and JSON renames mirror the Firefly III API exactly.
// `id`, `created_at`, and `updated_at` are server-assigned: they appear
// on responses and are never sent on write. Trigger and action lists
// are ordered — position is execution order and must survive every
// round trip untouched.

use serde::{Deserialize, Serialize};

use crate::wire::{WireEntity, null_as_default};

// ── Category ────────────────────────────────────────────────────────

/// A transaction category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
}

impl WireEntity for Category {
    const COLLECTION: &'static str = "categories";

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    // Firefly III HTML-escapes category free text on the way out.
    fn decode_entities(&mut self) {
        self.name = html_escape::decode_html_entities(&self.name).into_owned();
        self.notes = html_escape::decode_html_entities(&self.notes).into_owned();
    }
}

// ── Rule group ──────────────────────────────────────────────────────

/// A container for rules; `order` decides which group runs first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub title: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub description: String,
    /// Server-computed when omitted on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default)]
    pub active: bool,
}

impl WireEntity for RuleGroup {
    const COLLECTION: &'static str = "rule-groups";

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

// ── Rule ────────────────────────────────────────────────────────────

/// An automation rule with ordered triggers and actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub title: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub description: String,
    pub rule_group_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_group_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    /// When the rule fires (`store-journal` etc.).
    pub trigger: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub stop_processing: bool,
    #[serde(default)]
    pub triggers: Vec<RuleTrigger>,
    #[serde(default)]
    pub actions: Vec<RuleAction>,
}

/// One condition inside a rule. List position is evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTrigger {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(rename = "type")]
    pub trigger_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub prohibited: bool,
    #[serde(default)]
    pub stop_processing: bool,
}

/// One effect inside a rule. List position is execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub stop_processing: bool,
}

impl WireEntity for Rule {
    const COLLECTION: &'static str = "rules";

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn category_request_body_omits_server_fields() {
        let category = Category {
            id: None,
            created_at: None,
            updated_at: None,
            name: "Groceries".into(),
            notes: String::new(),
        };

        let body = serde_json::to_value(&category).expect("serializable");
        assert_eq!(body, serde_json::json!({"name": "Groceries", "notes": ""}));
    }

    #[test]
    fn decode_entities_is_idempotent() {
        let mut category = Category {
            id: None,
            created_at: None,
            updated_at: None,
            name: "Caf&eacute;".into(),
            notes: "R&amp;D".into(),
        };

        category.decode_entities();
        assert_eq!(category.name, "Café");
        assert_eq!(category.notes, "R&D");

        category.decode_entities();
        assert_eq!(category.name, "Café");
        assert_eq!(category.notes, "R&D");
    }

    #[test]
    fn rule_null_description_decodes_as_empty() {
        let raw = serde_json::json!({
            "title": "Tag coffee",
            "description": null,
            "rule_group_id": "1",
            "trigger": "store-journal",
            "active": true,
            "strict": true,
            "stop_processing": false,
            "triggers": [],
            "actions": []
        });

        let rule: Rule = serde_json::from_value(raw).expect("deserializable");
        assert_eq!(rule.description, "");
        assert_eq!(rule.order, None);
    }

    #[test]
    fn rule_trigger_order_is_positional() {
        let raw = serde_json::json!({
            "title": "Order check",
            "rule_group_id": "1",
            "trigger": "store-journal",
            "triggers": [
                {"type": "description_contains", "value": "a", "active": true,
                 "prohibited": false, "stop_processing": false},
                {"type": "amount_more", "value": "10", "active": true,
                 "prohibited": false, "stop_processing": false},
                {"type": "currency_is", "value": "EUR", "active": true,
                 "prohibited": false, "stop_processing": false}
            ],
            "actions": []
        });

        let rule: Rule = serde_json::from_value(raw).expect("deserializable");
        let kinds: Vec<&str> = rule
            .triggers
            .iter()
            .map(|t| t.trigger_type.as_str())
            .collect();
        assert_eq!(
            kinds,
            vec!["description_contains", "amount_more", "currency_is"]
        );
    }
}
