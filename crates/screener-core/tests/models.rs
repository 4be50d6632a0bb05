use screener_core::error::CoreError;
use screener_core::models::answer::AnswerSet;
use screener_core::models::language::Language;
use screener_core::models::question::{Group, QUESTION_COUNT, QuestionId};
use screener_core::models::scale::ScaleLevel;

fn id(group: Group, index: u8) -> QuestionId {
    QuestionId::new(group, index).unwrap()
}

#[test]
fn language_resolves_tags_and_native_names() {
    assert_eq!(Language::from_tag("en").unwrap(), Language::English);
    assert_eq!(Language::from_tag("HI").unwrap(), Language::Hindi);
    assert_eq!(Language::from_tag("ਪੰਜਾਬੀ").unwrap(), Language::Punjabi);
    assert_eq!(Language::from_tag("हिन्दी").unwrap(), Language::Hindi);
    assert_eq!("punjabi".parse::<Language>().unwrap(), Language::Punjabi);
}

#[test]
fn unknown_language_is_rejected() {
    match Language::from_tag("fr") {
        Err(CoreError::UnsupportedLanguage(tag)) => assert_eq!(tag, "fr"),
        other => panic!("expected UnsupportedLanguage, got {other:?}"),
    }
}

#[test]
fn question_ids_cover_both_groups_in_order() {
    let ids: Vec<_> = QuestionId::all().collect();
    assert_eq!(ids.len(), QUESTION_COUNT);
    assert_eq!(ids[0].to_string(), "Inattention 1");
    assert_eq!(ids[8].to_string(), "Inattention 9");
    assert_eq!(ids[9].to_string(), "Hyperactivity 1");
    assert_eq!(ids[17].to_string(), "Hyperactivity 9");

    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(sorted, ids);
}

#[test]
fn question_id_parses_column_names() {
    assert_eq!(
        "Hyperactivity 4".parse::<QuestionId>().unwrap(),
        id(Group::Hyperactivity, 4)
    );
    assert!("Hyperactivity 0".parse::<QuestionId>().is_err());
    assert!("Inattention 10".parse::<QuestionId>().is_err());
    assert!("Impulsivity 1".parse::<QuestionId>().is_err());
    assert!("Inattention".parse::<QuestionId>().is_err());
    assert!(QuestionId::new(Group::Inattention, 0).is_err());
}

#[test]
fn question_ids_built_from_fields_are_range_checked() {
    let stray = QuestionId {
        group: Group::Inattention,
        index: 12,
    };
    assert!(!stray.is_valid());
    assert!(
        !QuestionId {
            group: Group::Hyperactivity,
            index: 0,
        }
        .is_valid()
    );
    assert!(id(Group::Hyperactivity, 9).is_valid());
    assert!(QuestionId::all().all(|q| q.is_valid()));

    match QuestionId::new(Group::Inattention, 12) {
        Err(CoreError::InvalidQuestionId(name)) => assert_eq!(name, "Inattention 12"),
        other => panic!("expected InvalidQuestionId, got {other:?}"),
    }
}

#[test]
fn scale_levels_are_literal_scores() {
    let values: Vec<u8> = ScaleLevel::ALL.iter().map(|l| l.value()).collect();
    assert_eq!(values, vec![0, 1, 2, 3]);
    assert_eq!(ScaleLevel::try_from(2).unwrap(), ScaleLevel::Often);
    assert!(matches!(
        ScaleLevel::try_from(4),
        Err(CoreError::InvalidScaleValue(4))
    ));
}

#[test]
fn recording_twice_keeps_one_answer() {
    let mut answers = AnswerSet::new();
    let q = id(Group::Inattention, 3);
    assert_eq!(answers.record(q, ScaleLevel::Sometimes), None);
    assert_eq!(answers.record(q, ScaleLevel::VeryOften), Some(ScaleLevel::Sometimes));
    assert_eq!(answers.len(), 1);
    assert_eq!(answers.get(&q), Some(ScaleLevel::VeryOften));
}

#[test]
fn answer_set_serializes_as_column_keyed_object() {
    let mut answers = AnswerSet::new();
    answers.record(id(Group::Inattention, 1), ScaleLevel::Often);
    answers.record(id(Group::Hyperactivity, 9), ScaleLevel::Never);

    let json = serde_json::to_string(&answers).unwrap();
    assert_eq!(json, r#"{"Inattention 1":2,"Hyperactivity 9":0}"#);

    let back: AnswerSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, answers);
}

#[test]
fn answer_set_rejects_out_of_range_values() {
    let result = serde_json::from_str::<AnswerSet>(r#"{"Inattention 1":7}"#);
    assert!(result.is_err());
}
