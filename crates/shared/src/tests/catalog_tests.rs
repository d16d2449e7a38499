use super::*;

static SAMPLE: [LanguageRecord; 4] = [
    language!(0, "Alpha", "alpha", "North", ["a"]),
    language!(1, "Beta", "beta", "South", []),
    language!(2, "Gamma", "gamma", "North", ["g", "g"]),
    language!(3, "Delta", "delta", "East", ["d"]),
];

#[test]
fn builtin_catalogue_has_22_records_with_unique_ids() {
    let store = TaxonomyStore::builtin();
    let languages = store.all_languages();
    assert_eq!(languages.len(), 22);

    let mut ids: Vec<u32> = languages.iter().map(|record| record.id.0).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 22);
}

#[test]
fn catalogue_keeps_definition_order() {
    let names: Vec<&str> = TaxonomyStore::builtin()
        .all_languages()
        .iter()
        .map(|record| record.name)
        .collect();
    assert_eq!(names.first(), Some(&"Arabic"));
    assert_eq!(names[12], "Portuguese");
    assert_eq!(names[13], "Pashto");
    assert_eq!(names.last(), Some(&"Urdu"));
}

#[test]
fn families_start_with_all_and_follow_first_occurrence() {
    let families = TaxonomyStore::builtin().families();
    assert_eq!(
        families,
        &[
            "All",
            "Afro-Asiatic",
            "Sino-Tibetan",
            "Indo-European",
            "Uralic",
            "Austronesian",
            "Japonic",
            "Koreanic",
            "Dravidian",
            "Kra-Dai",
            "Turkic",
        ]
    );
}

#[test]
fn families_have_no_duplicates() {
    let store = TaxonomyStore::new(&SAMPLE);
    assert_eq!(store.families(), &["All", "North", "South", "East"]);
}

#[test]
fn all_selection_returns_full_catalogue_in_order() {
    let store = TaxonomyStore::builtin();
    let visible = store.filter(&FamilySelection::All);
    assert_eq!(visible.len(), 22);
    assert!(visible
        .iter()
        .zip(store.all_languages())
        .all(|(shown, record)| shown.id == record.id));
}

#[test]
fn family_selection_keeps_only_matching_records_in_order() {
    let store = TaxonomyStore::builtin();
    for family in &store.families()[1..] {
        let selection = FamilySelection::parse(family);
        let visible = store.filter(&selection);
        let expected = store
            .all_languages()
            .iter()
            .filter(|record| record.family == *family)
            .count();
        assert_eq!(visible.len(), expected, "family {family}");
        assert!(visible.iter().all(|record| record.family == *family));
        assert!(visible.windows(2).all(|pair| pair[0].id < pair[1].id));
    }
}

#[test]
fn turkic_selection_yields_turkish_only() {
    let visible = TaxonomyStore::builtin().filter(&"Turkic".into());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Turkish");
}

#[test]
fn indo_european_is_the_largest_family() {
    let store = TaxonomyStore::builtin();
    assert_eq!(store.count_for_family(&"Indo-European".into()), 13);
    assert_eq!(store.count_for_family(&FamilySelection::All), 22);
}

#[test]
fn unknown_family_yields_empty_list() {
    let store = TaxonomyStore::builtin();
    assert!(store.filter(&"Klingon".into()).is_empty());
    assert!(store.filter(&"indo-european".into()).is_empty());
    assert!(filter_languages(&"".into(), &SAMPLE).is_empty());
}

#[test]
fn filter_works_on_arbitrary_record_slices() {
    let north: Vec<&str> = filter_languages(&"North".into(), &SAMPLE)
        .iter()
        .map(|record| record.name)
        .collect();
    assert_eq!(north, ["Alpha", "Gamma"]);
}

#[test]
fn selection_parses_sentinel_and_round_trips_label() {
    assert_eq!(FamilySelection::parse("All"), FamilySelection::All);
    assert_eq!(FamilySelection::default(), FamilySelection::All);
    assert_eq!(
        "Uralic".parse::<FamilySelection>(),
        Ok(FamilySelection::Family("Uralic".to_string()))
    );
    assert_eq!(FamilySelection::parse("Kra-Dai").to_string(), "Kra-Dai");
    assert_eq!(FamilySelection::All.label(), "All");
}

#[test]
fn resolves_predictions_including_service_spellings() {
    let store = TaxonomyStore::builtin();
    assert_eq!(store.resolve_prediction("French").map(|r| r.id), Some(LanguageId(5)));
    assert_eq!(store.resolve_prediction(" japanese ").map(|r| r.name), Some("Japanese"));
    assert_eq!(store.resolve_prediction("Portugese").map(|r| r.name), Some("Portuguese"));
    assert_eq!(store.resolve_prediction("pushto").map(|r| r.name), Some("Pashto"));
    assert!(store.resolve_prediction("unknown").is_none());
}

#[test]
fn finds_records_by_id() {
    let store = TaxonomyStore::builtin();
    assert_eq!(store.find_by_id(LanguageId(20)).map(|r| r.name), Some("Turkish"));
    assert!(store.find_by_id(LanguageId(22)).is_none());
}

#[test]
fn every_builtin_family_has_a_dedicated_color() {
    for family in &TaxonomyStore::builtin().families()[1..] {
        assert_ne!(card_color_for_family(family).fill.hue, Hue::Gray, "{family}");
        assert_ne!(badge_color_for_family(family).hue, Hue::Gray, "{family}");
    }
}

#[test]
fn color_lookups_fall_back_to_gray() {
    let card = card_color_for_family("Eskimo-Aleut");
    assert_eq!(card.fill.to_string(), "gray-100");
    assert_eq!(card.border.to_string(), "gray-300");
    assert_eq!(badge_color_for_family("").to_string(), "gray-500");
}

#[test]
fn color_tokens_render_tailwind_names_and_rgb() {
    let card = card_color_for_family("Indo-European");
    assert_eq!(card.fill.to_string(), "blue-100");
    assert_eq!(card.border.to_string(), "blue-300");
    let badge = badge_color_for_family("Turkic");
    assert_eq!(badge.to_string(), "amber-500");
    assert_eq!(badge.rgb(), [0xf5, 0x9e, 0x0b]);
}
