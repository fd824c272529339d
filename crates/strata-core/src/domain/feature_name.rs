//! Feature name value object.
//!
//! A [`FeatureName`] is the single piece of user input every generated path
//! and every rendered template depends on. It is validated once and its
//! casing variants are derived once, so that `todo`, `Todo` and `todos` stay
//! consistent across the dozen files a layer produces.
//!
//! | Input     | `lower`   | `upper_camel` | `plural`   |
//! |-----------|-----------|---------------|------------|
//! | `todo`    | `todo`    | `Todo`        | `todos`    |
//! | `Order`   | `order`   | `Order`       | `orders`   |
//! | `userProfile` | `userProfile` | `UserProfile` | `userProfiles` |
//! | `category`| `category`| `Category`    | `categorys`|
//!
//! Pluralization is a plain `+ "s"`. Generated filenames must stay stable
//! across runs, so irregular plurals are left alone.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::DomainError;

/// A validated feature identifier with its derived casing variants.
///
/// Invariant: the raw input matches `^[A-Za-z][A-Za-z0-9]*$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FeatureName {
    raw: String,
    lower: String,
    upper_camel: String,
    plural: String,
}

impl FeatureName {
    /// Validate `raw` and derive the casing variants.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidFeatureName`] if the input is empty,
    /// starts with anything other than an ASCII letter, or contains anything
    /// other than ASCII letters and digits.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        validate(raw)?;

        let lower = with_first(raw, char::to_ascii_lowercase);
        let upper_camel = with_first(raw, char::to_ascii_uppercase);
        let plural = format!("{lower}s");

        Ok(Self {
            raw: raw.to_owned(),
            lower,
            upper_camel,
            plural,
        })
    }

    /// The input exactly as the user typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// First character lowercased (`Order` → `order`).
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// First character uppercased (`todo` → `Todo`).
    pub fn upper_camel(&self) -> &str {
        &self.upper_camel
    }

    /// `lower` followed by a literal `s`.
    pub fn plural(&self) -> &str {
        &self.plural
    }
}

impl FromStr for FeatureName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lower)
    }
}

fn validate(raw: &str) -> Result<(), DomainError> {
    let invalid = |reason: String| DomainError::InvalidFeatureName {
        name: raw.to_owned(),
        reason,
    };

    let mut chars = raw.chars();
    let first = chars.next().ok_or_else(|| invalid("name is empty".into()))?;

    if first.is_ascii_digit() {
        return Err(invalid("name cannot start with a digit".into()));
    }
    if !first.is_ascii_alphabetic() {
        return Err(invalid(format!("name must start with a letter, found '{first}'")));
    }
    if let Some(bad) = chars.find(|c| !c.is_ascii_alphanumeric()) {
        return Err(invalid(format!(
            "only letters and digits are allowed, found '{}'",
            bad.escape_default()
        )));
    }

    Ok(())
}

fn with_first(s: &str, f: fn(&char) -> char) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(f(&first));
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_input_derives_variants() {
        let name = FeatureName::parse("todo").unwrap();
        assert_eq!(name.lower(), "todo");
        assert_eq!(name.upper_camel(), "Todo");
        assert_eq!(name.plural(), "todos");
        assert_eq!(name.raw(), "todo");
    }

    #[test]
    fn capitalised_input_is_lowered() {
        let name = FeatureName::parse("Order").unwrap();
        assert_eq!(name.lower(), "order");
        assert_eq!(name.upper_camel(), "Order");
        assert_eq!(name.plural(), "orders");
    }

    #[test]
    fn internal_casing_is_preserved() {
        let name = FeatureName::parse("userProfile").unwrap();
        assert_eq!(name.lower(), "userProfile");
        assert_eq!(name.upper_camel(), "UserProfile");

        let shouty = FeatureName::parse("HTTP2").unwrap();
        assert_eq!(shouty.lower(), "hTTP2");
        assert_eq!(shouty.upper_camel(), "HTTP2");
    }

    #[test]
    fn plural_is_naive() {
        assert_eq!(FeatureName::parse("category").unwrap().plural(), "categorys");
        assert_eq!(FeatureName::parse("bus").unwrap().plural(), "buss");
    }

    #[test]
    fn single_letter_is_valid() {
        let name = FeatureName::parse("X").unwrap();
        assert_eq!(name.lower(), "x");
        assert_eq!(name.upper_camel(), "X");
    }

    #[test]
    fn rejects_invalid_identifiers() {
        for raw in [
            "", " ", "7up", "_todo", "to_do", "to-do", "to do", " todo", "todo ", "todo!", "tödo",
            "@home",
        ] {
            let err = FeatureName::parse(raw).unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidFeatureName { .. }),
                "expected rejection for {raw:?}"
            );
        }
    }

    #[test]
    fn digit_start_reason_is_specific() {
        match FeatureName::parse("7up").unwrap_err() {
            DomainError::InvalidFeatureName { name, reason } => {
                assert_eq!(name, "7up");
                assert!(reason.contains("digit"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn normalizing_lower_is_a_fixed_point() {
        for raw in ["todo", "Order", "userProfile", "A1b2", "Z"] {
            let first = FeatureName::parse(raw).unwrap();
            let again = FeatureName::parse(first.lower()).unwrap();
            assert_eq!(again.lower(), first.lower());
            assert_eq!(again.upper_camel(), first.upper_camel());
            assert_eq!(again.plural(), first.plural());
        }
    }

    #[test]
    fn from_str_and_display() {
        let name: FeatureName = "Todo".parse().unwrap();
        assert_eq!(name.to_string(), "todo");
    }
}
