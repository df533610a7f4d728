// Fixed keyword catalogs for rule triggers and actions, plus the
// pre-flight validation that runs before any network call.
//
// The literal lists are the contract boundary with Firefly III's own
// validation: values outside them are rejected locally instead of
// producing an opaque 422 from the server. Keeping the wire fields as
// plain strings (rather than 150-variant enums) lets responses decode
// verbatim even if the server grows new keywords.

use thiserror::Error;

use crate::model::{CategoryState, RuleGroupState, RuleState};
use crate::value::Value;

/// Maximum length of a rule title, enforced server-side as well.
pub const RULE_TITLE_MAX_CHARS: usize = 100;

/// Moments at which a rule can fire.
///
/// The API documents `store-journal`, `update-journal`, and
/// `manual-activation`, but only `store-journal` is accepted here due
/// to a bug in the Firefly III API with the other two moments.
pub const RULE_TRIGGER_MOMENTS: &[&str] = &["store-journal"];

/// Trigger keywords accepted by the rule engine.
pub const TRIGGER_TYPES: &[&str] = &[
    // Transaction basics
    "transaction_type",
    "reconciled",
    "exists",
    "journal_id",
    "recurrence_id",
    // Description
    "description_starts",
    "description_ends",
    "description_contains",
    "description_is",
    // Notes
    "notes_starts",
    "notes_ends",
    "notes_contains",
    "notes_are",
    "no_notes",
    "any_notes",
    // Amount
    "amount_exactly",
    "amount_less",
    "amount_more",
    "foreign_amount_is",
    "foreign_amount_less",
    "foreign_amount_more",
    // Source account
    "source_account_starts",
    "source_account_ends",
    "source_account_is",
    "source_account_contains",
    "source_account_id",
    "source_account_nr_starts",
    "source_account_nr_ends",
    "source_account_nr_is",
    "source_account_nr_contains",
    "source_is_cash",
    // Destination account
    "destination_account_starts",
    "destination_account_ends",
    "destination_account_is",
    "destination_account_contains",
    "destination_account_id",
    "destination_account_nr_starts",
    "destination_account_nr_ends",
    "destination_account_nr_is",
    "destination_account_nr_contains",
    "destination_is_cash",
    // Either-side account
    "account_id",
    "account_is_cash",
    "account_nr_starts",
    "account_nr_ends",
    "account_nr_is",
    "account_nr_contains",
    // Legacy account aliases, still accepted by the API
    "from_account_starts",
    "from_account_ends",
    "from_account_is",
    "from_account_contains",
    "to_account_starts",
    "to_account_ends",
    "to_account_is",
    "to_account_contains",
    // Currency
    "currency_is",
    "foreign_currency_is",
    // Category
    "category_is",
    "category_contains",
    "category_starts",
    "category_ends",
    "has_any_category",
    "has_no_category",
    // Budget
    "budget_is",
    "budget_contains",
    "budget_starts",
    "budget_ends",
    "has_any_budget",
    "has_no_budget",
    // Bill
    "bill_is",
    "bill_contains",
    "bill_starts",
    "bill_ends",
    "has_any_bill",
    "has_no_bill",
    // Tag
    "tag_is",
    "tag_contains",
    "tag_starts",
    "tag_ends",
    "has_any_tag",
    "has_no_tag",
    // Attachments
    "has_attachments",
    "has_no_attachments",
    "attachment_name_is",
    "attachment_name_contains",
    "attachment_name_starts",
    "attachment_name_ends",
    "attachment_notes_are",
    "attachment_notes_contains",
    "attachment_notes_starts",
    "attachment_notes_ends",
    // Transaction date
    "date_on",
    "date_before",
    "date_after",
    // Interest date
    "interest_date_on",
    "interest_date_before",
    "interest_date_after",
    // Book date
    "book_date_on",
    "book_date_before",
    "book_date_after",
    // Process date
    "process_date_on",
    "process_date_before",
    "process_date_after",
    // Due date
    "due_date_on",
    "due_date_before",
    "due_date_after",
    // Payment date
    "payment_date_on",
    "payment_date_before",
    "payment_date_after",
    // Invoice date
    "invoice_date_on",
    "invoice_date_before",
    "invoice_date_after",
    // Created / updated timestamps
    "created_at_on",
    "created_at_before",
    "created_at_after",
    "updated_at_on",
    "updated_at_before",
    "updated_at_after",
    // External id
    "external_id_is",
    "external_id_contains",
    "external_id_starts",
    "external_id_ends",
    "any_external_id",
    "no_external_id",
    // Internal reference
    "internal_reference_is",
    "internal_reference_contains",
    "internal_reference_starts",
    "internal_reference_ends",
    // External URL
    "external_url_is",
    "external_url_contains",
    "external_url_starts",
    "external_url_ends",
    "any_external_url",
    "no_external_url",
];

/// Action keywords accepted by the rule engine.
pub const ACTION_TYPES: &[&str] = &[
    "set_category",
    "clear_category",
    "set_budget",
    "clear_budget",
    "add_tag",
    "remove_tag",
    "remove_all_tags",
    "set_description",
    "append_description",
    "prepend_description",
    "set_source_account",
    "set_destination_account",
    "switch_accounts",
    "convert_withdrawal",
    "convert_deposit",
    "convert_transfer",
    "delete_transaction",
    "set_notes",
    "append_notes",
    "prepend_notes",
    "clear_notes",
    "link_to_bill",
    "update_piggy",
];

// ── Validation ──────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{kind} `{field}` is required")]
    Missing { kind: &'static str, field: String },

    #[error("{kind} `{field}` must be at most {max} characters (got {len})")]
    TooLong {
        kind: &'static str,
        field: String,
        max: usize,
        len: usize,
    },

    #[error("{kind} `{field}` has unsupported value `{value}`")]
    NotInSet {
        kind: &'static str,
        field: String,
        value: String,
    },
}

/// A required string: must be set and non-empty. `Unknown` passes — it
/// is caught later by the converter if it survives to a request body.
fn require(kind: &'static str, field: &str, value: &Value<String>) -> Result<(), ValidationError> {
    match value {
        Value::Known(s) if s.is_empty() => Err(ValidationError::Missing {
            kind,
            field: field.to_owned(),
        }),
        Value::Null => Err(ValidationError::Missing {
            kind,
            field: field.to_owned(),
        }),
        _ => Ok(()),
    }
}

fn member_of(
    kind: &'static str,
    field: &str,
    value: &Value<String>,
    set: &[&str],
) -> Result<(), ValidationError> {
    if let Value::Known(s) = value {
        if !set.contains(&s.as_str()) {
            return Err(ValidationError::NotInSet {
                kind,
                field: field.to_owned(),
                value: s.clone(),
            });
        }
    }
    Ok(())
}

pub fn validate_category(state: &CategoryState) -> Result<(), ValidationError> {
    require("category", "name", &state.name)
}

pub fn validate_rule_group(state: &RuleGroupState) -> Result<(), ValidationError> {
    require("rule group", "title", &state.title)
}

pub fn validate_rule(state: &RuleState) -> Result<(), ValidationError> {
    require("rule", "title", &state.title)?;
    if let Value::Known(title) = &state.title {
        let len = title.chars().count();
        if len > RULE_TITLE_MAX_CHARS {
            return Err(ValidationError::TooLong {
                kind: "rule",
                field: "title".to_owned(),
                max: RULE_TITLE_MAX_CHARS,
                len,
            });
        }
    }

    require("rule", "rule_group_id", &state.rule_group_id)?;
    require("rule", "trigger", &state.trigger)?;
    member_of("rule", "trigger", &state.trigger, RULE_TRIGGER_MOMENTS)?;

    for (i, trigger) in state.triggers.iter().enumerate() {
        let field = format!("triggers[{i}].type");
        require("rule", &field, &trigger.trigger_type)?;
        member_of("rule", &field, &trigger.trigger_type, TRIGGER_TYPES)?;
    }

    for (i, action) in state.actions.iter().enumerate() {
        let field = format!("actions[{i}].type");
        require("rule", &field, &action.action_type)?;
        member_of("rule", &field, &action.action_type, ACTION_TYPES)?;
    }

    Ok(())
}
