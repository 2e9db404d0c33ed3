use depwhy_core::DepCategory;
use log::debug;

use crate::types::{DependencyChain, Suggestion, SuggestionKind};

/// Derive removal advice purely from the shapes of the de-duplicated chains.
/// No I/O happens here.
pub fn synthesize_suggestions(target: &str, chains: &[DependencyChain]) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    let direct = chains.iter().any(DependencyChain::is_direct);
    let transitive = chains.iter().any(|c| c.modules.len() > 1);

    if direct && transitive {
        suggestions.push(Suggestion {
            kind: SuggestionKind::RedundantDirect,
            message: format!(
                "'{target}' would be installed transitively anyway; it can be removed from direct dependencies"
            ),
        });
    }

    if chains.iter().any(|c| c.category == DepCategory::Development) {
        suggestions.push(Suggestion {
            kind: SuggestionKind::DevOnly,
            message: format!(
                "at least one path to '{target}' comes from devDependencies and is not part of production installs"
            ),
        });
    }

    if chains.iter().any(|c| c.category == DepCategory::Peer) {
        suggestions.push(Suggestion {
            kind: SuggestionKind::PeerExpected,
            message: format!(
                "'{target}' is declared as a peer dependency somewhere; the declaring package expects the project to provide it"
            ),
        });
    }

    debug!("Synthesized {} suggestions for '{}'", suggestions.len(), target);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn chain(modules: &[&str], category: DepCategory) -> DependencyChain {
        DependencyChain {
            modules: modules.iter().map(|s| s.to_string()).collect(),
            category,
            declared_in: PathBuf::from("/project/package.json"),
        }
    }

    #[test]
    fn test_redundant_direct_flagged() {
        let chains = vec![
            chain(&["x"], DepCategory::Production),
            chain(&["y", "x"], DepCategory::Production),
        ];

        let suggestions = synthesize_suggestions("x", &chains);
        assert!(suggestions.iter().any(|s| s.kind == SuggestionKind::RedundantDirect));
        assert!(suggestions.iter().any(|s| s.message.contains("removed from direct dependencies")));
    }

    #[test]
    fn test_direct_only_not_flagged() {
        let chains = vec![chain(&["x"], DepCategory::Production)];
        let suggestions = synthesize_suggestions("x", &chains);
        assert!(!suggestions.iter().any(|s| s.kind == SuggestionKind::RedundantDirect));
    }

    #[test]
    fn test_dev_chain_flagged() {
        let chains = vec![chain(&["x"], DepCategory::Development)];
        let suggestions = synthesize_suggestions("x", &chains);
        assert!(suggestions.iter().any(|s| s.kind == SuggestionKind::DevOnly));
    }

    #[test]
    fn test_peer_chain_flagged() {
        let chains = vec![chain(&["host", "x"], DepCategory::Peer)];
        let suggestions = synthesize_suggestions("x", &chains);
        assert!(suggestions.iter().any(|s| s.kind == SuggestionKind::PeerExpected));
    }

    #[test]
    fn test_no_chains_no_suggestions() {
        assert!(synthesize_suggestions("x", &[]).is_empty());
    }
}
