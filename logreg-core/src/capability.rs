//! # Capability Introspection
//!
//! Lets a component answer "do you have a member called `name`?" before a
//! caller selects behavior by name.

/// Member-name introspection.
///
/// Implementors list every member they expose, including `has_object`
/// itself and any extension registered at runtime.
///
/// ```
/// use logreg_core::{HasMember, LogisticRegression};
///
/// let lr = LogisticRegression::new();
/// assert!(lr.has_object("has_object"));
/// assert!(!lr.has_object("evens"));
/// ```
pub trait HasMember {
    /// Name of the type, used in diagnostics.
    fn type_name(&self) -> &'static str;

    /// Every member name visible on this object.
    fn members(&self) -> Vec<&str>;

    /// True iff a member's name exactly equals `name`.
    fn has_object(&self, name: &str) -> bool {
        self.members().iter().any(|member| *member == name)
    }
}

/// Member name of the introspection method, present on every implementor.
pub const HAS_OBJECT: &str = "has_object";

/// Members every implementor gets from this trait.
pub const INTROSPECTION_MEMBERS: [&str; 3] = [HAS_OBJECT, "members", "type_name"];

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        extra: Vec<String>,
    }

    impl HasMember for Probe {
        fn type_name(&self) -> &'static str {
            "Probe"
        }

        fn members(&self) -> Vec<&str> {
            let mut members = vec![HAS_OBJECT, "__dict__"];
            members.extend(self.extra.iter().map(String::as_str));
            members
        }
    }

    #[test]
    fn test_has_object_finds_itself() {
        let probe = Probe { extra: Vec::new() };
        assert!(probe.has_object("has_object"));
    }

    #[test]
    fn test_reserved_looking_names_resolve() {
        let probe = Probe { extra: Vec::new() };
        assert!(probe.has_object("__dict__"));
    }

    #[test]
    fn test_exact_match_only() {
        let probe = Probe {
            extra: vec!["odds".to_string()],
        };
        assert!(probe.has_object("odds"));
        assert!(!probe.has_object("Odds"));
        assert!(!probe.has_object("odd"));
        assert!(!probe.has_object(""));
    }
}
