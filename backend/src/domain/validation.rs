//! Declarative payload validation.
//!
//! Request shapes describe their constraints as a flat list of
//! [`FieldRules`]: the field's wire name, its decoded value and the rules it
//! must satisfy. [`RuleValidator`] interprets that list and collects every
//! violated field into one [`ValidationErrorReport`], so a payload with three
//! bad fields yields three entries in a single response.
//!
//! Within one field the rules run in declaration order and only the first
//! violation is reported.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::Error;

/// A single constraint applied to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Text must be non-empty, integers non-zero and flags present.
    Required,
    /// Minimum character count for text, minimum value for integers.
    Min(i64),
    /// Maximum character count for text, maximum value for integers.
    Max(i64),
    /// Text must be a syntactically valid email address.
    Email,
}

impl Rule {
    /// Tag reported to clients when the rule is violated.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Min(_) => "min",
            Self::Max(_) => "max",
            Self::Email => "email",
        }
    }

    fn holds(self, value: &FieldValue<'_>) -> bool {
        match (self, value) {
            (Self::Required, FieldValue::Text(text)) => !text.is_empty(),
            (Self::Required, FieldValue::Integer(number)) => *number != 0,
            (Self::Required, FieldValue::Flag(flag)) => flag.is_some(),
            (Self::Min(min), FieldValue::Text(text)) => char_count(text) >= min,
            (Self::Min(min), FieldValue::Integer(number)) => *number >= min,
            (Self::Max(max), FieldValue::Text(text)) => char_count(text) <= max,
            (Self::Max(max), FieldValue::Integer(number)) => *number <= max,
            (Self::Email, FieldValue::Text(text)) => email_regex().is_match(text),
            // Length, range and syntax rules say nothing about flags, and
            // email syntax says nothing about integers.
            (Self::Min(_) | Self::Max(_), FieldValue::Flag(_))
            | (Self::Email, FieldValue::Integer(_) | FieldValue::Flag(_)) => true,
        }
    }
}

fn char_count(text: &str) -> i64 {
    i64::try_from(text.chars().count()).unwrap_or(i64::MAX)
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Decoded value of a field, borrowed from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i64),
    Flag(Option<bool>),
}

/// One field of a payload together with the rules it must satisfy.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules<'a> {
    field: &'static str,
    value: FieldValue<'a>,
    rules: &'static [Rule],
}

impl<'a> FieldRules<'a> {
    /// Rules for a text field.
    pub const fn text(field: &'static str, value: &'a str, rules: &'static [Rule]) -> Self {
        Self {
            field,
            value: FieldValue::Text(value),
            rules,
        }
    }

    /// Rules for an integer field.
    pub const fn integer(field: &'static str, value: i64, rules: &'static [Rule]) -> Self {
        Self {
            field,
            value: FieldValue::Integer(value),
            rules,
        }
    }

    /// Rules for a boolean field that may be absent from the payload.
    pub const fn flag(field: &'static str, value: Option<bool>, rules: &'static [Rule]) -> Self {
        Self {
            field,
            value: FieldValue::Flag(value),
            rules,
        }
    }

    fn first_violation(&self) -> Option<Rule> {
        self.rules
            .iter()
            .copied()
            .find(|rule| !rule.holds(&self.value))
    }
}

/// Implemented by every request shape that can be validated.
pub trait Validate {
    /// The fields of this payload and their rules, keyed by wire name.
    fn field_rules(&self) -> Vec<FieldRules<'_>>;
}

/// Description of one rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidParam {
    message: String,
    tag: &'static str,
}

impl InvalidParam {
    fn for_rule(field: &str, rule: Rule) -> Self {
        Self {
            message: format!("The {field} {}", message_for(rule.tag())),
            tag: rule.tag(),
        }
    }

    /// Human-readable explanation.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Tag of the violated rule.
    pub fn tag(&self) -> &str {
        self.tag
    }
}

fn message_for(tag: &str) -> &'static str {
    match tag {
        "required" => "field is required",
        "min" => "value is too short",
        "email" => "field must be a valid email",
        _ => "invalid value",
    }
}

/// Every violated field of one payload, keyed by wire name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrorReport {
    fields: BTreeMap<String, InvalidParam>,
}

impl ValidationErrorReport {
    fn record(&mut self, field: &str, rule: Rule) {
        self.fields
            .insert(field.to_owned(), InvalidParam::for_rule(field, rule));
    }

    /// Entry for `field`, if it was rejected.
    pub fn get(&self, field: &str) -> Option<&InvalidParam> {
        self.fields.get(field)
    }

    /// Number of rejected fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no field was rejected.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Rejected fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &InvalidParam)> {
        self.fields
            .iter()
            .map(|(field, param)| (field.as_str(), param))
    }
}

/// Validation engine used by resource operations.
pub trait Validator: Send + Sync {
    /// Evaluate every rule of `payload`; `None` means the payload is valid.
    fn validate(&self, payload: &dyn Validate) -> Option<ValidationErrorReport>;

    /// Run [`Validator::validate`] and lift a report into a domain error.
    ///
    /// # Errors
    /// Returns a `validation-error` carrying the report when any rule fails.
    fn check(&self, payload: &dyn Validate) -> Result<(), Error> {
        match self.validate(payload) {
            Some(report) => Err(Error::validation(report)),
            None => Ok(()),
        }
    }
}

/// Interpreter for [`FieldRules`] lists.
///
/// # Examples
/// ```
/// use todo_api::domain::validation::{FieldRules, Rule, RuleValidator, Validate, Validator};
///
/// struct Probe<'a>(&'a str);
///
/// impl Validate for Probe<'_> {
///     fn field_rules(&self) -> Vec<FieldRules<'_>> {
///         vec![FieldRules::text("name", self.0, &[Rule::Required, Rule::Min(3)])]
///     }
/// }
///
/// let report = RuleValidator.validate(&Probe("ab")).expect("too short");
/// assert_eq!(report.get("name").map(|p| p.tag()), Some("min"));
/// assert!(RuleValidator.validate(&Probe("abc")).is_none());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleValidator;

impl Validator for RuleValidator {
    fn validate(&self, payload: &dyn Validate) -> Option<ValidationErrorReport> {
        let mut report = ValidationErrorReport::default();
        for field in payload.field_rules() {
            if let Some(rule) = field.first_violation() {
                report.record(field.field, rule);
            }
        }
        (!report.is_empty()).then_some(report)
    }
}
