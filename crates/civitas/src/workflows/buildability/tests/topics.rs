use std::collections::BTreeSet;

use crate::workflows::buildability::domain::TopicTag;
use crate::workflows::buildability::evaluation::infer_topics;

fn topics(tags: &[TopicTag]) -> BTreeSet<TopicTag> {
    tags.iter().copied().collect()
}

#[test]
fn empty_or_absent_message_has_no_topics() {
    assert!(infer_topics(None).is_empty());
    assert!(infer_topics(Some("")).is_empty());
}

#[test]
fn matching_ignores_case() {
    assert_eq!(
        infer_topics(Some("FLOODING near the CANAL")),
        topics(&[TopicTag::Drainage])
    );
}

#[test]
fn one_message_can_raise_many_topics() {
    let found = infer_topics(Some(
        "Seller has no C of O, the plot floods and I need a permit asap for a warehouse",
    ));

    assert_eq!(
        found,
        topics(&[
            TopicTag::TitleDocuments,
            TopicTag::Drainage,
            TopicTag::Approvals,
            TopicTag::CostRisk,
            TopicTag::Urgency,
            TopicTag::UseCase,
        ])
    );
}

#[test]
fn multi_word_triggers_match() {
    assert!(infer_topics(Some("Is there a right of way here?"))
        .contains(&TopicTag::RightOfWaySetback));
    assert!(infer_topics(Some("What land use applies?")).contains(&TopicTag::Zoning));
}

#[test]
fn neutral_message_raises_nothing() {
    assert!(infer_topics(Some("Planning a family home with a garden on this plot")).is_empty());
}

#[test]
fn extraction_is_deterministic() {
    let message = Some("Worried about the title deed and drainage");
    assert_eq!(infer_topics(message), infer_topics(message));
}
