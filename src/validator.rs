//! Hand-written record validation.
//!
//! Every rule runs on every call, in declaration order, and each failing rule
//! appends exactly one violation. Nothing is short-circuited and nothing is
//! read except the record passed in.

use crate::email::is_valid_email;
use crate::record::Record;
use crate::violation::{Violation, ViolationKind};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const SECRET_MIN_CHARS: usize = 8;
pub const SECRET_MAX_CHARS: usize = 100;

/// Validate a record, returning one violation per failed rule.
///
/// An empty result means the record is valid. Order is always identifier,
/// name, age, secret, contact address.
pub fn validate(record: &Record) -> Vec<Violation> {
    let mut violations = Vec::new();

    if record.id == 0 {
        violations.push(Violation::new(
            ViolationKind::InvalidIdentifier,
            "id must be non-zero",
        ));
    }

    let name_len = record.name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&name_len) {
        violations.push(Violation::new(
            ViolationKind::InvalidName,
            format!(
                "name must be {}-{} characters, got {}",
                NAME_MIN_CHARS, NAME_MAX_CHARS, name_len
            ),
        ));
    }

    if record.age == 0 {
        violations.push(Violation::new(
            ViolationKind::InvalidAge,
            "age must be non-zero",
        ));
    }

    let secret_len = record.secret.chars().count();
    if secret_len < SECRET_MIN_CHARS || secret_len > SECRET_MAX_CHARS {
        violations.push(Violation::new(
            ViolationKind::InvalidSecret,
            format!(
                "password must be {}-{} characters, got {}",
                SECRET_MIN_CHARS, SECRET_MAX_CHARS, secret_len
            ),
        ));
    }

    if !is_valid_email(&record.email) {
        violations.push(Violation::new(
            ViolationKind::InvalidContactAddress,
            format!("email {:?} is not a valid address", record.email),
        ));
    }

    violations
}
