//! Declarative validation rules for the auth forms

use super::errors::ErrorState;
use super::field::{AuxFlags, FieldName, FieldValues};
use once_cell::sync::Lazy;
use regex::Regex;

// Something before the @, a domain segment, a dot, and a tail; no whitespace
// or extra @ anywhere.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

// 3-3-4 digits, optional parentheses around the area code, optional
// space/dot/hyphen between groups.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?([0-9]{3})\)?[-. ]?([0-9]{3})[-. ]?([0-9]{4})$").expect("valid phone pattern")
});

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const TERMS_MESSAGE: &str = "You must accept the terms and conditions";

/// A single check applied to one field. The first failing check wins.
#[derive(Debug)]
pub enum Check {
    /// Non-empty after trimming whitespace
    Required(&'static str),
    /// Non-empty as typed; whitespace counts
    Present(&'static str),
    /// Whole value matches the pattern
    Pattern(&'static Lazy<Regex>, &'static str),
    /// At least this many characters
    MinLength(usize, &'static str),
    /// Equal to another field's current value
    Equals(FieldName, &'static str),
}

impl Check {
    fn evaluate(&self, value: &str, values: &FieldValues) -> Option<&'static str> {
        let passes = match self {
            Check::Required(_) => !value.trim().is_empty(),
            Check::Present(_) => !value.is_empty(),
            Check::Pattern(pattern, _) => pattern.is_match(value),
            Check::MinLength(min, _) => value.encode_utf16().count() >= *min,
            Check::Equals(other, _) => value == values.get(*other),
        };
        if passes {
            None
        } else {
            Some(self.message())
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Check::Required(m)
            | Check::Present(m)
            | Check::Pattern(_, m)
            | Check::MinLength(_, m)
            | Check::Equals(_, m) => m,
        }
    }
}

/// Ordered checks bound to one field
#[derive(Debug)]
pub struct FieldRule {
    pub field: FieldName,
    pub checks: &'static [Check],
}

impl FieldRule {
    fn evaluate(&self, values: &FieldValues) -> Option<&'static str> {
        let value = values.get(self.field);
        self.checks
            .iter()
            .find_map(|check| check.evaluate(value, values))
    }
}

/// Immutable rule table for one form kind
#[derive(Debug)]
pub struct ValidationRuleSet {
    pub rules: &'static [FieldRule],
    pub requires_terms: bool,
}

impl ValidationRuleSet {
    /// Run every rule against the snapshot and build a fresh error state.
    ///
    /// Pure: the same values and flags always produce the same result.
    pub fn validate(&self, values: &FieldValues, flags: &AuxFlags) -> ErrorState {
        let mut errors = ErrorState::new();
        for rule in self.rules {
            if let Some(message) = rule.evaluate(values) {
                errors.insert(rule.field, message);
            }
        }
        if self.requires_terms && !flags.terms_accepted {
            errors.set_terms(TERMS_MESSAGE);
        }
        errors
    }

    /// Whether a validation result allows submission
    pub fn is_valid(&self, errors: &ErrorState, flags: &AuxFlags) -> bool {
        errors.fields_clear() && (!self.requires_terms || flags.terms_accepted)
    }

    /// Fields this rule set checks
    pub fn validated_fields(&self) -> impl Iterator<Item = FieldName> {
        self.rules.iter().map(|r| r.field)
    }
}

static EMAIL_CHECKS: [Check; 2] = [
    Check::Required("Email is required"),
    Check::Pattern(&EMAIL_PATTERN, "Please enter a valid email address"),
];

/// Account registration
pub static REGISTER_RULES: ValidationRuleSet = ValidationRuleSet {
    rules: &[
        FieldRule {
            field: FieldName::FullName,
            checks: &[Check::Required("Full name is required")],
        },
        FieldRule {
            field: FieldName::Email,
            checks: &EMAIL_CHECKS,
        },
        FieldRule {
            field: FieldName::Phone,
            checks: &[
                Check::Required("Phone number is required"),
                Check::Pattern(&PHONE_PATTERN, "Please enter a valid phone number"),
            ],
        },
        FieldRule {
            field: FieldName::Password,
            checks: &[
                Check::Present("Password is required"),
                Check::MinLength(
                    MIN_PASSWORD_LENGTH,
                    "Password must be at least 8 characters",
                ),
            ],
        },
        FieldRule {
            field: FieldName::ConfirmPassword,
            checks: &[
                Check::Present("Please confirm your password"),
                Check::Equals(FieldName::Password, "Passwords do not match"),
            ],
        },
    ],
    requires_terms: true,
};

/// Sign-in
pub static LOGIN_RULES: ValidationRuleSet = ValidationRuleSet {
    rules: &[
        FieldRule {
            field: FieldName::Email,
            checks: &EMAIL_CHECKS,
        },
        FieldRule {
            field: FieldName::Password,
            checks: &[Check::Present("Password is required")],
        },
    ],
    requires_terms: false,
};

/// Password reset request
pub static RESET_RULES: ValidationRuleSet = ValidationRuleSet {
    rules: &[FieldRule {
        field: FieldName::Email,
        checks: &EMAIL_CHECKS,
    }],
    requires_terms: false,
};
