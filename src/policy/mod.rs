//! Password strength policy, applied at registration.
//!
//! Evaluation is a pure function of the candidate password, recomputed
//! on every call. Submission paths must call `evaluate` (or
//! `is_acceptable`) on the value being submitted rather than trusting
//! any earlier result — stale checklist state is how weak passwords
//! slip through.

/// Minimum password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// The special characters that satisfy `has_special_char`.
const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Per-criterion result of evaluating one candidate password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordCriteria {
    /// At least `MIN_PASSWORD_LEN` characters.
    pub min_length: bool,
    /// At least one uppercase letter (A-Z).
    pub has_upper_case: bool,
    /// At least one lowercase letter (a-z).
    pub has_lower_case: bool,
    /// At least one digit (0-9).
    pub has_digit: bool,
    /// At least one special character.
    pub has_special_char: bool,
}

impl PasswordCriteria {
    /// Overall verdict: all five criteria hold.
    pub fn is_strong(&self) -> bool {
        self.min_length
            && self.has_upper_case
            && self.has_lower_case
            && self.has_digit
            && self.has_special_char
    }

    /// Human-readable labels of the criteria that do not hold, for the
    /// registration checklist.
    pub fn unmet(&self) -> Vec<&'static str> {
        let mut unmet = Vec::new();
        if !self.min_length {
            unmet.push("at least 8 characters");
        }
        if !self.has_upper_case {
            unmet.push("at least one uppercase letter (A-Z)");
        }
        if !self.has_lower_case {
            unmet.push("at least one lowercase letter (a-z)");
        }
        if !self.has_digit {
            unmet.push("at least one digit (0-9)");
        }
        if !self.has_special_char {
            unmet.push("at least one special character (e.g. !@#$%)");
        }
        unmet
    }
}

/// Evaluate each criterion independently. Pure, total, deterministic.
pub fn evaluate(password: &str) -> PasswordCriteria {
    PasswordCriteria {
        min_length: password.chars().count() >= MIN_PASSWORD_LEN,
        has_upper_case: password.chars().any(|c| c.is_ascii_uppercase()),
        has_lower_case: password.chars().any(|c| c.is_ascii_lowercase()),
        has_digit: password.chars().any(|c| c.is_ascii_digit()),
        has_special_char: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
    }
}

/// Overall verdict for a candidate password.
pub fn is_acceptable(password: &str) -> bool {
    evaluate(password).is_strong()
}
