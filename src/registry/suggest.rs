//! "Did you mean" suggestions for mistyped component names.

use strsim::jaro_winkler;

use super::Registry;
use crate::constants::{MAX_SUGGESTIONS, SUGGESTION_SIMILARITY_THRESHOLD};

impl Registry {
    /// Suggest registry names close to `input`.
    ///
    /// Substring matches (either direction, ignoring case) come first in
    /// registry order. Remaining slots are filled with names whose
    /// Jaro-Winkler similarity reaches the threshold, best first.
    #[must_use]
    pub fn suggest(&self, input: &str) -> Vec<String> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut suggestions: Vec<String> = self
            .names()
            .filter(|name| {
                let lower = name.to_lowercase();
                lower.contains(&needle) || needle.contains(&lower)
            })
            .map(str::to_string)
            .take(MAX_SUGGESTIONS)
            .collect();

        if suggestions.len() < MAX_SUGGESTIONS {
            let mut scored: Vec<(f64, &str)> = self
                .names()
                .filter(|name| !suggestions.iter().any(|s| s == name))
                .map(|name| (jaro_winkler(&needle, &name.to_lowercase()), name))
                .filter(|(score, _)| *score >= SUGGESTION_SIMILARITY_THRESHOLD)
                .collect();
            scored.sort_by(|a, b| b.0.total_cmp(&a.0));

            let remaining = MAX_SUGGESTIONS - suggestions.len();
            suggestions.extend(scored.into_iter().take(remaining).map(|(_, name)| name.to_string()));
        }

        suggestions
    }
}
