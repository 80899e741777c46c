// Edit menu scenarios on real poems

use wordcube_wasm::data::dictionary;
use wordcube_wasm::geometry::solved_sequence;
use wordcube_wasm::menu::{apply_menu_choice, compute_menu, gap_menu, word_menu, ClickTarget};
use wordcube_wasm::poem::derive_from_pictograms;
use wordcube_wasm::{FaceId, Menu, MenuMode, MenuOption, WordToken};

fn front_words() -> Vec<WordToken> {
    derive_from_pictograms(dictionary(), solved_sequence(FaceId::Front))
}

fn words_of(options: &[MenuOption]) -> Vec<String> {
    options.iter().map(|o| o.to_string()).collect()
}

#[test]
fn test_replace_menu_lists_other_meanings() {
    let words = front_words();
    let menu = word_menu(dictionary(), &words, solved_sequence(FaceId::Front), 3).unwrap();
    assert_eq!(menu.mode, MenuMode::Replace);
    assert_eq!(words_of(&menu.options), vec!["way", "road", "journey", "trip"]);
}

#[test]
fn test_replace_menu_skips_inserted_tokens_when_finding_pictogram() {
    let mut words = front_words();
    words.insert(2, WordToken::inserted("the"));
    words.insert(2, WordToken::line_break());
    // "path" is now at index 5 but still belongs to the fourth pictogram
    let menu = word_menu(dictionary(), &words, solved_sequence(FaceId::Front), 5).unwrap();
    assert_eq!(words_of(&menu.options), vec!["way", "road", "journey", "trip"]);
}

#[test]
fn test_replacement_keeps_primary_flag() {
    let mut words = front_words();
    let menu = word_menu(dictionary(), &words, solved_sequence(FaceId::Front), 3).unwrap();
    apply_menu_choice(&mut words, &menu, &MenuOption::Word("journey".to_string())).unwrap();
    assert_eq!(words[3], WordToken::primary("journey"));
    assert_eq!(words.len(), 8);
}

#[test]
fn test_inserted_connector_offers_other_connectors_and_delete() {
    let words = vec![WordToken::primary("who"), WordToken::inserted("The")];
    let menu = word_menu(dictionary(), &words, &[], 1).unwrap();
    assert_eq!(menu.mode, MenuMode::Inserted);
    assert_eq!(menu.options.len(), 24);
    assert!(!menu.options.contains(&MenuOption::Mortar("the".to_string())));
    assert_eq!(menu.options.last(), Some(&MenuOption::Delete));
}

#[test]
fn test_inserted_punctuation_swaps_in_place() {
    let mut words = vec![WordToken::primary("alone"), WordToken::inserted("?")];
    let menu = word_menu(dictionary(), &words, &[], 1).unwrap();
    assert_eq!(menu.options.len(), 5);
    apply_menu_choice(&mut words, &menu, &MenuOption::Punctuation("!".to_string())).unwrap();
    assert_eq!(words[1], WordToken::inserted("!"));
}

#[test]
fn test_gap_before_first_word_offers_connectors_only() {
    let words = front_words();
    let menu = compute_menu(dictionary(), &words, solved_sequence(FaceId::Front), ClickTarget::Gap(0))
        .unwrap()
        .unwrap();
    assert_eq!(menu.index, 0);
    assert!(menu.options.iter().all(|o| matches!(o, MenuOption::Mortar(_))));
    assert_eq!(menu.options.len(), 24);
}

#[test]
fn test_no_menu_after_final_punctuation() {
    let words = vec![WordToken::primary("alone"), WordToken::inserted(".")];
    assert_eq!(gap_menu(&words, 2).unwrap(), None);
}

#[test]
fn test_third_connector_is_not_offered() {
    let mut words = vec![WordToken::primary("sit"), WordToken::primary("sun")];
    for connector in ["in", "the"] {
        // gap just before "sun"
        let menu: Menu = gap_menu(&words, words.len() - 1).unwrap().unwrap();
        let option = MenuOption::Mortar(connector.to_string());
        assert!(menu.options.contains(&option));
        apply_menu_choice(&mut words, &menu, &option).unwrap();
    }
    assert_eq!(words.len(), 4);
    assert_eq!(words[1].text, "in");
    assert_eq!(words[2].text, "the");

    for gap in 1..=3 {
        let menu = gap_menu(&words, gap).unwrap().unwrap();
        assert!(!menu.options.iter().any(|o| matches!(o, MenuOption::Mortar(_))), "gap {}", gap);
    }
}
