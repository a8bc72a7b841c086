use std::collections::BTreeSet;

use super::domain::{Intent, IntakeRecord, TopicTag, MIN_LANDMARK_CHARS};

const STOP_LOSS_STEP: &str =
    "Stop-loss step: pause new spend until ROW/setbacks/drainage constraints are cleared.";

const GENERIC_CHECKLIST: [&str; 5] = [
    "Anchor the exact location: address + area + landmark + closest major junction (or coordinates).",
    "Request and verify: survey plan, deed/title documents, seller identity/authority to sell.",
    "Screen for ROW/setback issues: road expansion history, canal/drainage corridors, powerline easements.",
    "Confirm planning designation for intended use; check if special permits apply.",
    "Only then: negotiate price, pay, and proceed to design/approvals in sequence.",
];

/// Focus labels in display order. Zoning has no dedicated focus area.
const FOCUS_AREAS: [(TopicTag, &str); 7] = [
    (TopicTag::TitleDocuments, "Title & documents"),
    (TopicTag::Approvals, "Approvals pathway"),
    (TopicTag::Drainage, "Drainage / flood exposure"),
    (TopicTag::RightOfWaySetback, "Setbacks / right-of-way"),
    (TopicTag::UseCase, "Use-case fit"),
    (TopicTag::CostRisk, "Cost & negotiation risk"),
    (TopicTag::Urgency, "Fast-track sequencing"),
];

pub fn highlights(intent: Intent) -> [&'static str; 2] {
    match intent {
        Intent::BuyLand => [
            "Verify title chain and survey authenticity before payment.",
            "Confirm planning designation and right-of-way constraints early.",
        ],
        Intent::StartBuilding => [
            "Validate approvals readiness before mobilization.",
            "Confirm setbacks, access, and drainage assumptions before design freeze.",
        ],
        Intent::AlreadyBuilding => [
            "Stop-loss check: confirm compliance risks before further spend.",
            "Resolve any right-of-way/setback conflicts immediately.",
        ],
        Intent::RiskCheck => [
            "Risk-first scan across approvals, constraints, and documentation.",
            "Identify unknowns to verify with evidence.",
        ],
    }
}

pub fn checklist(intent: Intent) -> Vec<&'static str> {
    let mut steps = Vec::with_capacity(GENERIC_CHECKLIST.len() + 1);
    if intent == Intent::AlreadyBuilding {
        steps.push(STOP_LOSS_STEP);
    }
    steps.extend(GENERIC_CHECKLIST);
    steps
}

pub fn tailored_focus(topics: &BTreeSet<TopicTag>) -> Vec<&'static str> {
    FOCUS_AREAS
        .iter()
        .filter(|(topic, _)| topics.contains(topic))
        .map(|(_, label)| *label)
        .collect()
}

/// Follow-up questions for whatever context the requester left out.
pub fn clarifying_questions(record: &IntakeRecord) -> Vec<&'static str> {
    let mut questions = Vec::new();

    if record.address_text().is_empty() {
        questions.push(
            "What is the street/estate/layout name (or closest known address) for this site?",
        );
    }
    if record.landmark_text().chars().count() < MIN_LANDMARK_CHARS {
        questions.push("What is the nearest major junction/landmark to anchor the exact location?");
    }
    if record.message_text().is_empty() {
        questions.push("What do you plan to build or use the land for (e.g., flats, shop, warehouse)?");
        questions.push("Do you have documents already (survey, deed, excision/gazette, C of O)?");
    }

    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const STREET_QUESTION: &str =
        "What is the street/estate/layout name (or closest known address) for this site?";
    const JUNCTION_QUESTION: &str =
        "What is the nearest major junction/landmark to anchor the exact location?";
    const USE_QUESTION: &str =
        "What do you plan to build or use the land for (e.g., flats, shop, warehouse)?";
    const DOCUMENTS_QUESTION: &str =
        "Do you have documents already (survey, deed, excision/gazette, C of O)?";

    fn site(address: Option<&str>, landmark: Option<&str>, message: Option<&str>) -> IntakeRecord {
        IntakeRecord {
            intent: Intent::StartBuilding,
            name: "Ada Obi".to_string(),
            email: "ada@example.com".to_string(),
            address: address.map(str::to_string),
            coordinates: None,
            area: "Ijede".to_string(),
            landmark: landmark.map(str::to_string),
            lcda: "Ikorodu".to_string(),
            message: message.map(str::to_string),
            timestamp: Utc
                .with_ymd_and_hms(2025, 3, 1, 9, 30, 0)
                .single()
                .expect("valid timestamp"),
        }
    }

    #[test]
    fn bare_record_asks_every_question_in_order() {
        assert_eq!(
            clarifying_questions(&site(None, None, None)),
            vec![
                STREET_QUESTION,
                JUNCTION_QUESTION,
                USE_QUESTION,
                DOCUMENTS_QUESTION
            ]
        );
    }

    #[test]
    fn short_address_is_enough_but_short_landmark_is_not() {
        let record = site(
            Some("Plot"),
            Some("X"),
            Some("Two-storey duplex for my family"),
        );
        assert!(!record.has_address());
        assert_eq!(clarifying_questions(&record), vec![JUNCTION_QUESTION]);
    }

    #[test]
    fn blank_message_asks_about_use_and_documents() {
        let record = site(Some("15 Example Close"), Some("Agric Bus Stop"), Some("   "));
        assert_eq!(
            clarifying_questions(&record),
            vec![USE_QUESTION, DOCUMENTS_QUESTION]
        );
    }

    #[test]
    fn stop_loss_leads_checklist_for_active_sites() {
        let steps = checklist(Intent::AlreadyBuilding);
        assert_eq!(steps.len(), 6);
        assert!(steps[0].starts_with("Stop-loss step"));

        for intent in [Intent::BuyLand, Intent::StartBuilding, Intent::RiskCheck] {
            assert_eq!(checklist(intent), GENERIC_CHECKLIST.to_vec());
        }
    }

    #[test]
    fn focus_follows_fixed_order() {
        let topics: BTreeSet<TopicTag> = [
            TopicTag::Urgency,
            TopicTag::Zoning,
            TopicTag::TitleDocuments,
            TopicTag::Drainage,
        ]
        .into_iter()
        .collect();

        assert_eq!(
            tailored_focus(&topics),
            vec![
                "Title & documents",
                "Drainage / flood exposure",
                "Fast-track sequencing"
            ]
        );
    }

    #[test]
    fn highlights_differ_per_intent() {
        let distinct: BTreeSet<&str> = Intent::ALL
            .iter()
            .flat_map(|intent| highlights(*intent))
            .collect();
        assert_eq!(distinct.len(), 8);
    }
}
