use chrono::{TimeZone, Utc};
use portfolio_core::{
    DeveloperTitle, PortfolioService, ProgressionConfig, Rank, RecordRepository, RecordSource,
};

const SKILLS: &str = "
Unreal Engine : [ FRONTEND, 50 ]
C/C++ : [ FRONTEND, 50 ]
Python : [ FRONTEND, 20 ]
ChatGPT : [ OTHERS, 30 ]
Gemini : [ OTHERS, 20 ]
Claude : [ OTHERS, 5 ]
Drone pilot : [ OTHERS, 60 ]
";

fn repository() -> RecordRepository {
    RecordRepository::load_all(&[
        RecordSource::new("drone.md", "---\ntitle: Drone\nstatus: Done\n---\nbody"),
        RecordSource::new("site.md", "---\ntitle: Site\nstatus: In Progress\n---\nbody"),
        RecordSource::new("arm.md", "---\ntitle: Arm\nstatus: Done\n---\nbody"),
    ])
}

#[test]
fn report_combines_records_skills_and_config() {
    let service = PortfolioService::new(ProgressionConfig::default());
    let now = Utc.with_ymd_and_hms(2025, 11, 14, 0, 0, 0).unwrap();
    let report = service.report_from_text(&repository(), SKILLS, now);

    assert_eq!(report.evaluated_at, now);
    assert_eq!(report.completed_records, 2);
    assert_eq!(report.skills.len(), 7);
    assert_eq!(report.skills_by_category["FRONTEND"].len(), 3);
    assert_eq!(report.skills_by_category["OTHERS"].len(), 4);
    assert_eq!(report.breakdown.project_score, 6.0);
    assert_eq!(report.level, report.breakdown.total);

    let drone = report
        .skills
        .iter()
        .find(|skill| skill.name == "Drone pilot")
        .expect("drone pilot skill");
    assert_eq!(drone.rank, Rank::A);

    // one career year (20) + ~3.06 study years (~6.12) + 6 project points + skills
    assert!(report.level > 32.0 && report.level < 33.0, "{}", report.level);
    assert_eq!(report.title, DeveloperTitle::MidLevelDev);
}

#[test]
fn report_is_deterministic_for_fixed_inputs() {
    let service = PortfolioService::new(ProgressionConfig::default());
    let now = Utc.with_ymd_and_hms(2026, 2, 1, 12, 30, 0).unwrap();
    let repo = repository();

    assert_eq!(
        service.report_from_text(&repo, SKILLS, now),
        service.report_from_text(&repo, SKILLS, now)
    );
}

#[test]
fn invalid_config_dates_report_intern_with_zero_level() {
    let config = ProgressionConfig {
        career_start_date: Some("yesterday".to_string()),
        ..ProgressionConfig::default()
    };
    let service = PortfolioService::new(config);
    let now = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();
    let report = service.report_from_text(&repository(), SKILLS, now);

    assert_eq!(report.level, 0.0);
    assert_eq!(report.title, DeveloperTitle::Intern);
    assert_eq!(report.skills.len(), 7);
}

#[test]
fn report_serializes_titles_and_ranks_as_labels() {
    let service = PortfolioService::new(ProgressionConfig::default());
    let now = Utc.with_ymd_and_hms(2024, 11, 14, 0, 0, 0).unwrap();
    let report =
        service.report_from_text(&RecordRepository::default(), "Python : [ FRONTEND, 20 ]", now);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["title"], "INTERN");
    assert_eq!(json["skills"][0]["rank"], "D");
    assert_eq!(json["skills_by_category"]["FRONTEND"][0]["name"], "Python");
    assert_eq!(json["completed_records"], 0);
}
