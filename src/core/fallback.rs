//! Deterministic canned-answer engine used when the relay is unreachable.
//!
//! The rules are ordered data, not branching code: the first group with a
//! trigger substring present in the (lower-cased) message wins. Clients lean
//! on this as the availability guarantee, so the table and its order are a
//! fixed contract asserted by tests.

/// A single keyword rule: trigger substrings mapped to a canned answer.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub triggers: &'static [&'static str],
    pub answer: &'static str,
}

/// Ordered rule table. Earlier groups take precedence when a message matches
/// more than one.
pub const RULES: &[KeywordRule] = &[
    KeywordRule {
        triggers: &["schedule", "agenda"],
        answer: "Check out our interactive schedule at schedule.html or add the events to your Google Calendar! The reunion runs August 12-15, 2025.",
    },
    KeywordRule {
        triggers: &["accommodation", "room", "stay"],
        answer: "Accommodation is in student rooms with 4-5 single beds each. Check-in is after 12pm on August 12th at the Dining Hall Registration Desk.",
    },
    KeywordRule {
        triggers: &["transport", "shuttle", "airport"],
        answer: "Free shuttles available (register by June 28): 12pm Swartz Bay, 1pm YYJ Airport, 2pm Royal BC Museum. Contact alumni@pearsoncollege.ca to register.",
    },
    KeywordRule {
        triggers: &["cost", "price", "fee"],
        answer: "Single day rates: $151.20 off-site, $188.10 on-site. Child rates: $125.38 off-site, $159.62 on-site. Contact alumni@pearsoncollege.ca for registration.",
    },
    KeywordRule {
        triggers: &["kids", "children", "family"],
        answer: "Yes! Kids are welcome. We have a dedicated Kids Camp with activities. Check kids-camp.html for the full schedule.",
    },
    KeywordRule {
        triggers: &["weather", "clothes", "pack"],
        answer: "August in Victoria: 15-25\u{b0}C days, 10-15\u{b0}C evenings. Bring layers, rain gear, walking shoes, and something dressy for the gala dinner.",
    },
    KeywordRule {
        triggers: &["contact", "help", "phone"],
        answer: "Main contact: alumni@pearsoncollege.ca. For urgent matters: Phoebe Mason +1 778 769 3745, Ruba Elfurjani +1 778 401 1493. Join our WhatsApp group for live updates!",
    },
];

/// Answer returned when no keyword group matches.
pub const DEFAULT_ANSWER: &str = "I can help with questions about the reunion schedule, accommodation, transportation, costs, kids activities, weather, and contacts. For detailed information, check our FAQ section or contact alumni@pearsoncollege.ca.";

/// Map a free-text message to a canned answer.
///
/// Total and pure: always returns a non-empty answer, never performs I/O.
pub fn respond(message: &str) -> &'static str {
    let lower = message.to_lowercase();

    RULES
        .iter()
        .find(|rule| rule.triggers.iter().any(|t| lower.contains(t)))
        .map(|rule| rule.answer)
        .unwrap_or(DEFAULT_ANSWER)
}
