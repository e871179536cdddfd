//! Game invariants - sanity checks that detect bugs.
//!
//! These should never trigger: the claim engine only moves ids between the
//! two sets and only accepts registered ids. A violation means a bug.

use crate::game::{GameSession, Team};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all session invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(session: &GameSession) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let claims = session.claims();

    // Disjointness
    for id in claims.claims(Team::A).iter() {
        if claims.claims(Team::B).contains(id) {
            violations.push(InvariantViolation {
                message: format!("Region {id:?} is claimed by both teams"),
            });
        }
    }

    // Claims only reference registered regions
    for team in Team::ALL {
        for id in claims.claims(team).iter() {
            if !session.registry().contains(id) {
                violations.push(InvariantViolation {
                    message: format!("{team} claims unregistered region {id:?}"),
                });
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{RegionRecord, RegionRegistry, ScoringConfig};

    #[test]
    fn test_fresh_session_has_no_violations() {
        let registry = RegionRegistry::load(vec![RegionRecord::new("X", 1, 1)]).unwrap();
        let session = GameSession::new(registry, ScoringConfig::default());
        assert!(check_invariants(&session).is_empty());
    }

    #[test]
    fn test_clicks_keep_invariants() {
        let registry = RegionRegistry::load(vec![
            RegionRecord::new("X", 1, 1),
            RegionRecord::new("Y", 2, 2),
        ])
        .unwrap();
        let mut session = GameSession::new(registry, ScoringConfig::default());

        for id in ["X", "Y", "X", "X", "Y", "X"] {
            session.on_region_clicked(id).unwrap();
            let violations = check_invariants(&session);
            assert!(violations.is_empty(), "{violations:?}");
        }
    }

    #[test]
    fn test_violation_display() {
        let violation = InvariantViolation {
            message: "Region \"X\" is claimed by both teams".to_string(),
        };
        assert!(violation.to_string().starts_with("Invariant violation"));
    }
}
