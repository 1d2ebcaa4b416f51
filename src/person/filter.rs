use serde::{Deserialize, Serialize};

use super::entity::Person;

/// Transient listing constraints, mapped one-to-one from query parameters.
/// An absent parameter stays `None`; it never collapses to a zero/false
/// default that would silently filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonFilter {
    pub name: Option<String>,
    pub likes_chocolate: Option<bool>,
    pub max_results: Option<usize>,
}

impl PersonFilter {
    /// True when no criterion was supplied at all. Checked before any store
    /// access; an empty filter is a client error, not a full listing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.likes_chocolate.is_none() && self.max_results.is_none()
    }

    /// Narrow `people` by each present criterion, in order: name match,
    /// flag match, then the result cap. The cap runs strictly last so it
    /// counts only entities that already passed the content filters.
    pub fn apply(&self, mut people: Vec<Person>) -> Vec<Person> {
        if let Some(name) = &self.name {
            people.retain(|p| &p.name == name);
        }
        if let Some(likes) = self.likes_chocolate {
            people.retain(|p| p.likes_chocolate == likes);
        }
        if let Some(max) = self.max_results {
            let max = self.effective_max(max);
            people.truncate(max);
        }
        people
    }

    fn effective_max(&self, requested: usize) -> usize {
        let config = crate::config::config();
        Self::clamp_to_cap(requested, config.filter.max_results, config.filter.debug_logging)
    }

    fn clamp_to_cap(requested: usize, cap: Option<usize>, log_when_capped: bool) -> usize {
        let cap = cap.unwrap_or(usize::MAX);
        if requested > cap {
            if log_when_capped {
                tracing::warn!(requested, cap, "maxResults exceeds configured cap, capping");
            }
            cap
        } else {
            requested
        }
    }
}
