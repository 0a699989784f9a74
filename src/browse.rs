//! Search gating and abandon-on-supersede tickets for catalog requests.

pub const MIN_QUERY_CHARS: usize = 2;

/// Trimmed query, or `None` when it is too short to send.
pub fn normalize_query(raw: &str) -> Option<String> {
    let query = raw.trim();
    if query.chars().count() < MIN_QUERY_CHARS {
        None
    } else {
        Some(query.to_string())
    }
}

/// Every request takes a ticket when it is issued and only applies its
/// result while that ticket is still the latest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestGeneration(u64);

impl RequestGeneration {
    pub fn begin(&mut self) -> u64 {
        self.0 = self.0.saturating_add(1);
        self.0
    }

    pub fn invalidate(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_queries_are_dropped() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("a"), None);
        assert_eq!(normalize_query("  b  "), None);
        assert_eq!(normalize_query(" ab "), Some("ab".to_string()));
        assert_eq!(normalize_query("é"), None);
        assert_eq!(normalize_query("éa"), Some("éa".to_string()));
    }

    #[test]
    fn only_latest_ticket_is_current() {
        let mut generation = RequestGeneration::default();
        let first = generation.begin();
        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));

        generation.invalidate();
        assert!(!generation.is_current(second));
    }

    #[test]
    fn each_input_event_issues_one_ticket() {
        let mut generation = RequestGeneration::default();
        let mut issued = Vec::new();
        for raw in ["d", "da", "daf", "daft"] {
            match normalize_query(raw) {
                Some(_) => issued.push(generation.begin()),
                None => generation.invalidate(),
            }
        }
        assert_eq!(issued.len(), 3);
        assert!(generation.is_current(*issued.last().unwrap()));
    }
}
