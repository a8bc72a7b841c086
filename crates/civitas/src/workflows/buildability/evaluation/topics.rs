use std::collections::BTreeSet;

use super::super::domain::TopicTag;

/// Trigger terms per topic. Matching is plain substring containment on the
/// lowercased message, so short terms such as `row` also fire inside longer words.
pub(crate) const TOPIC_RULES: &[(TopicTag, &[&str])] = &[
    (
        TopicTag::Zoning,
        &[
            "zoning",
            "zone",
            "residential",
            "commercial",
            "mixed",
            "industrial",
            "land use",
        ],
    ),
    (
        TopicTag::RightOfWaySetback,
        &["setback", "right of way", "row", "easement", "encroach"],
    ),
    (
        TopicTag::Drainage,
        &["drainage", "flood", "flooding", "water", "canal", "swamp"],
    ),
    (
        TopicTag::Approvals,
        &["permit", "approval", "planning permit", "ministry", "authority"],
    ),
    (
        TopicTag::TitleDocuments,
        &[
            "survey", "c of o", "coo", "excision", "gazette", "title", "deed", "registry",
        ],
    ),
    (
        TopicTag::CostRisk,
        &["budget", "cost", "money", "price", "agent", "seller"],
    ),
    (
        TopicTag::Urgency,
        &["urgent", "asap", "quick", "today", "tomorrow"],
    ),
    (
        TopicTag::UseCase,
        &[
            "school", "hospital", "church", "mosque", "shop", "market", "warehouse", "factory",
            "fuel",
        ],
    ),
];

/// Extract the topic tags raised by a free-text message.
pub fn infer_topics(message: Option<&str>) -> BTreeSet<TopicTag> {
    let text = message.unwrap_or_default().to_lowercase();
    if text.is_empty() {
        return BTreeSet::new();
    }

    TOPIC_RULES
        .iter()
        .filter(|(_, triggers)| triggers.iter().any(|term| text.contains(term)))
        .map(|(topic, _)| *topic)
        .collect()
}
