//! Rule options.
//!
//! The defaults reproduce the classic behaviour of this ruleset; each
//! option can be overridden from a settings file.

use serde::{Deserialize, Serialize};

/// How the capture search avoids revisiting squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevisitPolicy {
    /// One visited set for the whole search: once any branch has entered a
    /// square, no later branch may enter it again.
    #[default]
    Search,
    /// Only squares on the current chain are blocked. Sibling branches
    /// explore independently.
    Path,
    /// Squares may be re-entered. A chain still never jumps the same piece
    /// twice, which is enough to guarantee termination.
    Captures,
}

/// Options that change how moves are judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Visited-square scope used by the capture search.
    pub revisit: RevisitPolicy,
    /// Whether kings may take a single non-capturing step backward.
    pub kings_step_backward: bool,
}

impl RuleSet {
    /// Rules with the given revisit policy and default everything else.
    pub fn with_revisit(revisit: RevisitPolicy) -> Self {
        Self {
            revisit,
            ..Self::default()
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            revisit: RevisitPolicy::Search,
            kings_step_backward: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let rules = RuleSet::default();
        assert_eq!(rules.revisit, RevisitPolicy::Search);
        assert!(rules.kings_step_backward);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let rules: RuleSet = toml::from_str(r#"revisit = "captures""#).unwrap();
        assert_eq!(rules.revisit, RevisitPolicy::Captures);
        assert!(rules.kings_step_backward);

        let rules: RuleSet = toml::from_str("kings_step_backward = false").unwrap();
        assert_eq!(rules.revisit, RevisitPolicy::Search);
        assert!(!rules.kings_step_backward);
    }
}
