use std::collections::BTreeSet;

use super::super::domain::{IntakeRecord, Signal, SignalCategory, SignalStatus, TopicTag};

/// Derive the status for each advisory category, in display order.
pub fn build_signals(record: &IntakeRecord, topics: &BTreeSet<TopicTag>) -> Vec<Signal> {
    SignalCategory::ALL
        .iter()
        .map(|category| {
            let status = signal_status(*category, record, topics);
            let (rationale, action) = guidance_for(*category, status);
            Signal {
                category: *category,
                title: category.title().to_string(),
                status,
                rationale: rationale.to_string(),
                action: action.to_string(),
            }
        })
        .collect()
}

pub(crate) fn signal_status(
    category: SignalCategory,
    record: &IntakeRecord,
    topics: &BTreeSet<TopicTag>,
) -> SignalStatus {
    let raised = |topic: TopicTag| topics.contains(&topic);
    let risk_if = |topic: TopicTag| {
        if raised(topic) {
            SignalStatus::Risk
        } else {
            SignalStatus::Watch
        }
    };

    match category {
        SignalCategory::LocationClarity => {
            let address = record.has_address();
            let landmark = record.has_landmark();
            if record.has_coordinates() || (address && landmark) {
                SignalStatus::Good
            } else if address || landmark {
                SignalStatus::Watch
            } else {
                SignalStatus::Unknown
            }
        }
        SignalCategory::TitleAndDocuments => risk_if(TopicTag::TitleDocuments),
        SignalCategory::RightOfWayAndSetbacks => risk_if(TopicTag::RightOfWaySetback),
        SignalCategory::DrainageFloodExposure => risk_if(TopicTag::Drainage),
        SignalCategory::ApprovalsReadiness => {
            if record.intent.involves_construction() {
                risk_if(TopicTag::Approvals)
            } else {
                SignalStatus::Unknown
            }
        }
        SignalCategory::UseCaseFit => {
            if raised(TopicTag::UseCase) || record.has_detailed_message() {
                SignalStatus::Watch
            } else {
                SignalStatus::Unknown
            }
        }
    }
}

fn guidance_for(category: SignalCategory, status: SignalStatus) -> (&'static str, &'static str) {
    match category {
        SignalCategory::LocationClarity => match status {
            SignalStatus::Good => (
                "Enough anchors to reduce wrong-place risk.",
                "Proceed to verification checks using the same exact location details.",
            ),
            SignalStatus::Watch => (
                "Some anchors exist, but the location may still be ambiguous.",
                "Add street/address and the nearest major junction; optionally capture coordinates.",
            ),
            SignalStatus::Risk | SignalStatus::Unknown => (
                "Location is not anchored strongly enough to make confident checks.",
                "Add street/address and the nearest major junction; optionally capture coordinates.",
            ),
        },
        SignalCategory::TitleAndDocuments => (
            if status == SignalStatus::Risk {
                "Your message suggests document or title uncertainty, a common failure point."
            } else {
                "Document verification is mandatory before major spend."
            },
            "Request the survey plan and root of title. Verify survey authenticity and seller authority before payment or approvals.",
        ),
        SignalCategory::RightOfWayAndSetbacks => (
            if status == SignalStatus::Risk {
                "Setback or right-of-way issues can trigger demolition risk or approval failure."
            } else {
                "Right-of-way and setbacks are frequent hidden constraints, especially near major corridors."
            },
            "Check road expansion history and drainage or powerline easements, then confirm required setbacks before design freeze.",
        ),
        SignalCategory::DrainageFloodExposure => (
            if status == SignalStatus::Risk {
                "Drainage or flood indicators mentioned; these can raise foundation and infrastructure costs."
            } else {
                "Many areas have micro-flood pockets; treat this as a required early check."
            },
            "Ask for local flood history, inspect during or after rain, check drainage corridors and canals, and get a basic site assessment.",
        ),
        SignalCategory::ApprovalsReadiness => (
            match status {
                SignalStatus::Risk => {
                    "You referenced approvals, but their timing or order may still be wrong."
                }
                SignalStatus::Watch | SignalStatus::Good => {
                    "Approvals are likely needed; readiness depends on use-case and designation."
                }
                SignalStatus::Unknown => {
                    "Approvals only become relevant once title and constraints are clearer."
                }
            },
            "Confirm the planning designation for the intended use, then map required permits and sequence them after document verification.",
        ),
        SignalCategory::UseCaseFit => (
            if status == SignalStatus::Unknown {
                "No clear use-case stated; constraints depend heavily on what you want to build."
            } else {
                "Use-case affects zoning compatibility, parking needs, setbacks, and approvals."
            },
            "State the intended use (flats, shops, warehouse) and approximate scale (floors or units) to sharpen the brief.",
        ),
    }
}
