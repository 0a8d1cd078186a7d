//! Violation types produced by record validation.
//!
//! A failed rule is reported as data, never as an error: callers decide
//! pass/fail by checking whether the returned list is empty.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which rule a violation came from.
///
/// Variants are declared in the order the rules run, so sorting by kind
/// reproduces rule-declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    InvalidIdentifier,
    InvalidName,
    InvalidAge,
    InvalidSecret,
    InvalidContactAddress,
}

impl ViolationKind {
    /// All kinds in rule-declaration order.
    pub const ALL: [ViolationKind; 5] = [
        ViolationKind::InvalidIdentifier,
        ViolationKind::InvalidName,
        ViolationKind::InvalidAge,
        ViolationKind::InvalidSecret,
        ViolationKind::InvalidContactAddress,
    ];

    /// Wire name of the record field this rule checks.
    pub fn field(&self) -> &'static str {
        match self {
            ViolationKind::InvalidIdentifier => "id",
            ViolationKind::InvalidName => "name",
            ViolationKind::InvalidAge => "age",
            ViolationKind::InvalidSecret => "password",
            ViolationKind::InvalidContactAddress => "email",
        }
    }

    /// Inverse of [`ViolationKind::field`].
    pub fn from_field(field: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.field() == field)
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::InvalidIdentifier => write!(f, "invalid_identifier"),
            ViolationKind::InvalidName => write!(f, "invalid_name"),
            ViolationKind::InvalidAge => write!(f, "invalid_age"),
            ViolationKind::InvalidSecret => write!(f, "invalid_secret"),
            ViolationKind::InvalidContactAddress => write!(f, "invalid_contact_address"),
        }
    }
}

/// One failed rule: its kind plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Kinds of a violation list, in the order they were reported.
pub fn kinds(violations: &[Violation]) -> Vec<ViolationKind> {
    violations.iter().map(|v| v.kind).collect()
}
