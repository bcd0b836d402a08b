//! Form candidate validation
//!
//! Walks an entity's rule table over a raw JSON candidate and collects
//! one message per offending field. Values are never mutated and no
//! coercion is performed; fields the table does not declare are
//! ignored, matching the behavior of the registry API this crate feeds.

use regex::Regex;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::errors::{SchemaResult, ValidationError};
use super::types::{FieldDef, FieldRule};

/// Validation mode for a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Full form: required fields must be present.
    Create,
    /// Partial update: every field is optional, but a field that is
    /// present must still satisfy its rule.
    Update,
}

/// Validates a candidate against an entity's rule table.
///
/// Returns `Ok(())` when every present field satisfies its rule and -
/// in [`Mode::Create`] - every required field is present. On failure
/// the error carries, for each offending field, the first violated
/// rule's message; violations on one field never stack.
pub fn validate(rules: &[FieldDef], candidate: &Value, mode: Mode) -> SchemaResult<()> {
    let obj = match candidate.as_object() {
        Some(obj) => obj,
        None => return Err(ValidationError::not_an_object()),
    };

    let mut errors = BTreeMap::new();

    for def in rules {
        match obj.get(def.name) {
            None => {
                if def.required && mode == Mode::Create {
                    errors.insert(def.name.to_string(), "required".to_string());
                }
            }
            Some(Value::Null) => {
                // Explicit null is only acceptable on optional fields.
                if def.required {
                    errors.insert(def.name.to_string(), "required".to_string());
                }
            }
            Some(value) => {
                if let Err(message) = check_value(&def.rule, value) {
                    errors.insert(def.name.to_string(), message);
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(errors))
    }
}

/// Checks a present, non-null value against one rule. Returns the
/// message of the first violated constraint.
fn check_value(rule: &FieldRule, value: &Value) -> Result<(), String> {
    match rule {
        FieldRule::Text { min_len } => {
            let s = value.as_str().ok_or_else(|| "expected a string".to_string())?;
            if s.len() < *min_len {
                if *min_len == 1 {
                    return Err("must not be empty".to_string());
                }
                return Err(format!("minimum {} characters", min_len));
            }
            Ok(())
        }
        FieldRule::Email => {
            let s = value.as_str().ok_or_else(|| "expected a string".to_string())?;
            if !email_pattern().is_match(s) {
                return Err("invalid email address".to_string());
            }
            Ok(())
        }
        FieldRule::Decimal => {
            let s = value.as_str().ok_or_else(|| "expected a string".to_string())?;
            if !decimal_pattern().is_match(s) {
                return Err("decimal with up to 4 fractional digits required".to_string());
            }
            Ok(())
        }
        FieldRule::Date => {
            let s = value.as_str().ok_or_else(|| "expected a date string".to_string())?;
            if !date_parseable(s) {
                return Err("invalid date".to_string());
            }
            Ok(())
        }
        FieldRule::Integer { min } => {
            let n = as_whole_number(value).ok_or_else(|| "expected an integer".to_string())?;
            if let Some(min) = min {
                if n < *min {
                    return Err(format!("must be at least {}", min));
                }
            }
            Ok(())
        }
        FieldRule::Enum { variants } => {
            let matched = value.as_str().is_some_and(|s| variants.contains(&s));
            if !matched {
                return Err(format!("expected one of: {}", variants.join(", ")));
            }
            Ok(())
        }
        FieldRule::Bool => {
            if !value.is_boolean() {
                return Err("expected a boolean".to_string());
            }
            Ok(())
        }
    }
}

/// Accepts both exact JSON integers and float representations of whole
/// numbers ("5.0" on the wire is still the whole number 5).
fn as_whole_number(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    if let Some(f) = value.as_f64() {
        if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
            return Some(f as i64);
        }
    }
    None
}

/// Optional sign, integer part, optionally a dot and 1-4 fractional
/// digits. Matches DECIMAL(14,4) column semantics.
fn decimal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^-?\d+(\.\d{1,4})?$").expect("decimal pattern is valid"))
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
            .expect("email pattern is valid")
    })
}

/// Year or year-month prefixes of an ISO date ("2024", "2024-07").
fn partial_iso_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\d{4}(-(0[1-9]|1[0-2]))?$").expect("partial ISO pattern is valid")
    })
}

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Permissive textual date check. Any form the parser accepts passes,
/// the way the UI's text inputs have always behaved; callers wanting a
/// single canonical format must normalize upstream.
fn date_parseable(s: &str) -> bool {
    if DateTime::parse_from_rfc3339(s).is_ok() || DateTime::parse_from_rfc2822(s).is_ok() {
        return true;
    }
    if DATETIME_FORMATS
        .iter()
        .any(|fmt| NaiveDateTime::parse_from_str(s, fmt).is_ok())
    {
        return true;
    }
    if DATE_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(s, fmt).is_ok())
    {
        return true;
    }
    partial_iso_pattern().is_match(s)
}
