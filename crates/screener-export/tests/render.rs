use jiff::Timestamp;
use jiff::civil::DateTime;
use jiff::tz::TimeZone;

use screener_core::models::answer::AnswerSet;
use screener_core::models::language::Language;
use screener_core::models::question::QuestionId;
use screener_core::models::scale::ScaleLevel;
use screener_core::models::score::ScoreResult;
use screener_export::error::ExportError;
use screener_export::render::{SummaryContext, render_summary, render_template};
use screener_instruments::QuestionCatalog;
use screener_instruments::scoring::score_at;

fn scored(level: ScaleLevel) -> (ScoreResult, DateTime) {
    let timestamp: Timestamp = "2025-03-14T09:26:53Z".parse().unwrap();
    let result = score_at(&AnswerSet::uniform(QuestionId::all(), level), timestamp);
    let date = timestamp.to_zoned(TimeZone::UTC).datetime();
    (result, date)
}

#[test]
fn english_summary_shows_score_and_interpretation() {
    let catalog = QuestionCatalog::bundled().unwrap();
    let (result, date) = scored(ScaleLevel::Sometimes);

    let summary = render_summary(catalog.text(Language::English), &result, &date).unwrap();
    assert!(summary.starts_with("ADHD Screening Questionnaire (Parent Version)\n"));
    assert!(summary.contains("Total Score: 18"));
    assert!(summary.contains("Some ADHD-like traits present. Monitoring recommended."));
    assert!(summary.contains("2025-03-14 09:26:53"));
}

#[test]
fn summary_follows_the_selected_language() {
    let catalog = QuestionCatalog::bundled().unwrap();
    let (result, date) = scored(ScaleLevel::Never);

    let summary = render_summary(catalog.text(Language::Hindi), &result, &date).unwrap();
    assert!(summary.contains("कुल स्कोर: 0"));
    assert!(summary.contains("सामान्य व्यवहार (एडीएचडी के लक्षण नहीं)।"));
}

#[test]
fn custom_template_receives_band_key() {
    let catalog = QuestionCatalog::bundled().unwrap();
    let (result, date) = scored(ScaleLevel::VeryOften);
    let context = SummaryContext::new(catalog.text(Language::Punjabi), &result, &date);

    let rendered = render_template("brief.txt", "{{ band }}/{{ total }}", &context).unwrap();
    assert_eq!(rendered, "high/54");
}

#[test]
fn malformed_template_is_a_parse_error() {
    let catalog = QuestionCatalog::bundled().unwrap();
    let (result, date) = scored(ScaleLevel::Never);
    let context = SummaryContext::new(catalog.text(Language::English), &result, &date);

    let err = render_template("broken.txt", "{{ total", &context).unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}
