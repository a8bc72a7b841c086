use crate::infra::build_engine;
use civitas::config::AppConfig;
use civitas::error::AppError;
use civitas::telemetry;
use civitas::workflows::buildability::{
    BriefSource, BuildabilityReport, BuildabilityService, Coordinates, FileIntakeStore, Intent,
    IntakeForm, ReportAvailability,
};
use clap::Args;
use std::io;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// buy_land, start_building, already_building or risk_check
    #[arg(long, default_value = "buy_land")]
    pub(crate) intent: Intent,
    /// Full name of the requester
    #[arg(long)]
    pub(crate) name: String,
    /// Contact e-mail address
    #[arg(long)]
    pub(crate) email: String,
    /// Street, estate or layout name
    #[arg(long)]
    pub(crate) address: Option<String>,
    /// Neighbourhood or area
    #[arg(long)]
    pub(crate) area: String,
    /// Nearest major junction or landmark
    #[arg(long)]
    pub(crate) landmark: Option<String>,
    /// Local council development area, used for the district brief
    #[arg(long)]
    pub(crate) lcda: String,
    /// Latitude of the site
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the site
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub(crate) lng: Option<f64>,
    /// What you want to build and anything you are worried about
    #[arg(long)]
    pub(crate) message: Option<String>,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl CheckArgs {
    fn into_form(self) -> (IntakeForm, bool) {
        let coordinates = match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        };

        let form = IntakeForm {
            intent: self.intent,
            name: self.name,
            email: self.email,
            address: self.address,
            coordinates,
            area: self.area,
            landmark: self.landmark,
            lcda: self.lcda,
            message: self.message,
        };
        (form, self.json)
    }
}

fn file_service() -> Result<BuildabilityService<FileIntakeStore>, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let engine = build_engine(&config.knowledge)?;
    let store = Arc::new(FileIntakeStore::new(config.storage.dir));
    Ok(BuildabilityService::new(store, engine))
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let (form, json) = args.into_form();
    let service = file_service()?;

    service.submit(form)?;
    print_availability(&service.latest_report()?, json)
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let service = file_service()?;
    print_availability(&service.latest_report()?, args.json)
}

fn print_availability(availability: &ReportAvailability, json: bool) -> Result<(), AppError> {
    if json {
        let encoded = serde_json::to_string_pretty(availability)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        println!("{encoded}");
        return Ok(());
    }

    match availability {
        ReportAvailability::Ready { report } => print!("{}", render_report(report)),
        ReportAvailability::NoReport { message } => println!("{message}"),
    }
    Ok(())
}

pub(crate) fn render_report(report: &BuildabilityReport) -> String {
    let mut out = String::new();
    let mut line = |text: String| {
        out.push_str(&text);
        out.push('\n');
    };

    line(format!(
        "Buildability report: {} ({})",
        report.location.lcda, report.intent_label
    ));
    line(format!(
        "Score {}/100 | {} risk | {}",
        report.score, report.risk_label, report.score_band
    ));

    line(String::new());
    line("Signals".to_string());
    for signal in &report.signals {
        line(format!(
            "- [{}] {}: {}",
            signal.status.label(),
            signal.title,
            signal.rationale
        ));
        line(format!("    next: {}", signal.action));
    }

    line(String::new());
    line("Highlights".to_string());
    for highlight in &report.highlights {
        line(format!("- {highlight}"));
    }

    if !report.tailored_focus.is_empty() {
        line(format!("Focus areas: {}", report.tailored_focus.join(", ")));
    }

    line(String::new());
    match report.brief_source {
        BriefSource::District => line(format!("District brief: {}", report.location.lcda)),
        BriefSource::Fallback => line("District brief: general guidance".to_string()),
    }
    for note in report
        .brief
        .zoning_notes
        .iter()
        .chain(&report.brief.planning_signals)
        .chain(&report.brief.approvals_path)
    {
        line(format!("- {note}"));
    }
    line(format!("Common risks: {}", report.brief.common_risks.join("; ")));
    line(report.brief.confidence_note.clone());

    if !report.clarifying_questions.is_empty() {
        line(String::new());
        line("Clarifying questions".to_string());
        for question in &report.clarifying_questions {
            line(format!("- {question}"));
        }
    }

    line(String::new());
    line("Checklist".to_string());
    for (index, step) in report.checklist.iter().enumerate() {
        line(format!("{}. {step}", index + 1));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use civitas::config::KnowledgeConfig;
    use civitas::workflows::buildability::IntakeRecord;

    fn report_for(intent: Intent, lcda: &str) -> BuildabilityReport {
        let engine = build_engine(&KnowledgeConfig::default()).expect("seeded dataset loads");
        let record = IntakeRecord {
            intent,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            address: None,
            coordinates: None,
            area: "Ijede".to_string(),
            landmark: None,
            lcda: lcda.to_string(),
            message: None,
            timestamp: chrono::Utc::now(),
        };
        engine.evaluate(&record)
    }

    #[test]
    fn rendered_report_lists_every_section() {
        let text = render_report(&report_for(Intent::AlreadyBuilding, "Ikorodu"));

        assert!(text.starts_with("Buildability report: Ikorodu (Already building)"));
        assert!(text.contains("Score 57/100 | Medium risk | Proceed cautiously"));
        assert!(text.contains("[Unknown] Location clarity"));
        assert!(text.contains("District brief: Ikorodu"));
        assert!(text.contains("Clarifying questions"));
        assert!(text.contains("1. Stop-loss step"));
    }

    #[test]
    fn fallback_brief_is_labelled() {
        let text = render_report(&report_for(Intent::RiskCheck, "Badagry"));
        assert!(text.contains("District brief: general guidance"));
    }

    #[test]
    fn coordinates_need_both_axes() {
        let args = CheckArgs {
            intent: Intent::BuyLand,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            address: None,
            area: "Ijede".to_string(),
            landmark: None,
            lcda: "Ikorodu".to_string(),
            lat: Some(6.6),
            lng: Some(3.5),
            message: None,
            json: true,
        };

        let (form, json) = args.into_form();
        assert!(json);
        assert_eq!(form.coordinates, Some(Coordinates { lat: 6.6, lng: 3.5 }));
    }
}
