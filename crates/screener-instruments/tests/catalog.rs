use screener_core::models::band::Band;
use screener_core::models::language::Language;
use screener_core::models::question::{Group, QUESTION_COUNT, QuestionId};
use screener_core::models::scale::ScaleLevel;
use screener_instruments::QuestionCatalog;
use screener_instruments::error::InstrumentError;

fn catalog() -> QuestionCatalog {
    QuestionCatalog::bundled().unwrap()
}

#[test]
fn bundled_catalog_loads() {
    let catalog = catalog();
    assert_eq!(catalog.id(), "adhd_parent");
    assert_eq!(catalog.name(), "ADHD Screening Questionnaire (Parent Version)");
    assert!(catalog.language_prompt().contains("भाषा चुनें"));
}

#[test]
fn every_language_has_the_same_question_keys() {
    let catalog = catalog();
    let expected = catalog.question_ids();
    assert_eq!(expected.len(), QUESTION_COUNT);

    for language in Language::ALL {
        let ids: Vec<QuestionId> = catalog
            .all_questions(language)
            .into_iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, expected, "{language}");
        for group in Group::ALL {
            assert_eq!(catalog.questions(language, group).len(), 9);
        }
    }
}

#[test]
fn catalog_membership_follows_question_id_range() {
    let catalog = catalog();
    assert!(catalog.question_ids().iter().all(|id| catalog.contains(id)));
    for index in [0, 10, 12] {
        let id = QuestionId {
            group: Group::Inattention,
            index,
        };
        assert!(!catalog.contains(&id), "{index}");
        assert!(catalog.prompt(Language::English, &id).is_none(), "{index}");
    }
}

#[test]
fn prompts_differ_only_in_text() {
    let catalog = catalog();
    let first = QuestionId::new(Group::Inattention, 1).unwrap();
    assert_eq!(
        catalog.prompt(Language::English, &first),
        Some("Makes careless mistakes or doesn’t pay close attention to details.")
    );
    assert_ne!(
        catalog.prompt(Language::Hindi, &first),
        catalog.prompt(Language::English, &first)
    );

    let last = catalog.questions(Language::Punjabi, Group::Hyperactivity);
    assert_eq!(last[8].prompt, "ਹੋਰਾਂ ਦੀ ਗੱਲ ਵਿਚਕਾਰ ਕੱਟ ਦਿੰਦਾ ਹੈ।");
}

#[test]
fn scale_has_four_ordered_levels() {
    let catalog = catalog();
    for language in Language::ALL {
        let options = catalog.scale_levels(language);
        let levels: Vec<ScaleLevel> = options.iter().map(|o| o.level).collect();
        assert_eq!(levels, ScaleLevel::ALL.to_vec());
    }
    let english = catalog.scale_levels(Language::English);
    assert_eq!(english[0].label, "0 — Never or Rarely");
    assert_eq!(english[3].label, "3 — Very Often");
    assert_eq!(catalog.scale_levels(Language::Hindi)[2].label, "2 — अक्सर");
}

#[test]
fn interpretation_text_is_localized() {
    let catalog = catalog();
    assert_eq!(
        catalog.interpretation(Language::English, Band::High),
        "High number of ADHD symptoms. Clinical evaluation recommended."
    );
    assert_eq!(catalog.text(Language::Punjabi).score_label, "ਕੁੱਲ ਸਕੋਰ");
    assert_eq!(
        catalog.text(Language::Hindi).group_heading(Group::Inattention),
        "ध्यान की कमी से संबंधित लक्षण"
    );
}

#[test]
fn string_lookups_reject_unsupported_languages() {
    let catalog = catalog();
    assert_eq!(
        catalog.questions_for_tag("hi", Group::Inattention).unwrap().len(),
        9
    );
    assert!(matches!(
        catalog.scale_levels_for_tag("de"),
        Err(InstrumentError::UnsupportedLanguage(tag)) if tag == "de"
    ));
}

fn bundle_without(language: &str) -> String {
    let mut value: serde_json::Value =
        serde_json::from_str(include_str!("../data/adhd_parent.json")).unwrap();
    value["languages"]
        .as_object_mut()
        .unwrap()
        .remove(language);
    value.to_string()
}

#[test]
fn bundle_missing_a_language_is_rejected() {
    let err = QuestionCatalog::from_json(&bundle_without("punjabi")).unwrap_err();
    assert!(matches!(err, InstrumentError::InvalidBundle(msg) if msg.contains("pa")));
}

#[test]
fn bundle_with_short_group_is_rejected() {
    let mut value: serde_json::Value =
        serde_json::from_str(include_str!("../data/adhd_parent.json")).unwrap();
    value["languages"]["hindi"]["questions"]["hyperactivity"]
        .as_array_mut()
        .unwrap()
        .pop();

    let err = QuestionCatalog::from_json(&value.to_string()).unwrap_err();
    assert!(matches!(err, InstrumentError::InvalidBundle(msg) if msg.contains("Hyperactivity")));
}

#[test]
fn bundle_with_extra_scale_label_is_rejected() {
    let mut value: serde_json::Value =
        serde_json::from_str(include_str!("../data/adhd_parent.json")).unwrap();
    value["languages"]["english"]["scale"]
        .as_array_mut()
        .unwrap()
        .push(serde_json::Value::String("4 — Always".to_string()));

    let err = QuestionCatalog::from_json(&value.to_string()).unwrap_err();
    assert!(matches!(err, InstrumentError::InvalidBundle(msg) if msg.contains("4 scale labels")));
}
