//! Query configuration for the route planner.

use crate::domain::Timestamp;

/// When a connecting flight may leave relative to the inbound arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoverRule {
    /// The connection may depart at the same minute the inbound lands.
    #[default]
    AtOrAfterArrival,

    /// The connection must depart strictly after the inbound lands.
    StrictlyAfterArrival,
}

impl LayoverRule {
    /// Returns true if a flight departing at `departure` can be caught after
    /// landing at `arrival`.
    pub fn allows(self, arrival: Timestamp, departure: Timestamp) -> bool {
        match self {
            LayoverRule::AtOrAfterArrival => departure >= arrival,
            LayoverRule::StrictlyAfterArrival => departure > arrival,
        }
    }

    /// Parse a rule name: `inclusive` or `strict`, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("inclusive") {
            Some(LayoverRule::AtOrAfterArrival)
        } else if s.eq_ignore_ascii_case("strict") {
            Some(LayoverRule::StrictlyAfterArrival)
        } else {
            None
        }
    }
}

/// Configuration parameters for route queries.
#[derive(Debug, Clone, Default)]
pub struct QueryConfig {
    /// Transfer rule for connectivity search.
    pub layover: LayoverRule,
}

impl QueryConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(layover: LayoverRule) -> Self {
        Self { layover }
    }
}
