// Poem derivation and reconstruction over the bundled dictionary and cube

use rand::rngs::StdRng;
use rand::SeedableRng;
use wordcube_wasm::data::{dictionary, public_poems};
use wordcube_wasm::geometry::{scramble, solved_cube, solved_sequence};
use wordcube_wasm::poem::{
    canonical_poem, canonical_poem_string, derive_from_pictograms, is_solved_sequence, poem_string_from_pictograms,
    reconstruct,
};
use wordcube_wasm::{flatten, FaceId, Orientation, Pictogram, PoemText, WordToken};

fn texts(words: &[WordToken]) -> Vec<&str> {
    words.iter().map(|w| w.text.as_str()).collect()
}

#[test]
fn test_derive_solved_front() {
    let words = derive_from_pictograms(dictionary(), solved_sequence(FaceId::Front));
    assert_eq!(
        texts(&words),
        vec!["who", "walks", "changing", "path", "life", "alone", "everyone", "no\u{00A0}one"]
    );
    assert!(words.iter().all(|w| !w.inserted));
}

#[test]
fn test_derive_rotated_pictogram_changes_word() {
    let seq = vec![
        Pictogram::new("walker", Orientation::Down),
        Pictogram::new("wave", Orientation::Down),
    ];
    assert_eq!(poem_string_from_pictograms(dictionary(), &seq), "stood sea");
}

#[test]
fn test_public_canonical_poems_match_canonical_tables() {
    for record in public_poems().iter().filter(|p| p.serial_number <= 6) {
        assert_eq!(record.displayed_text, canonical_poem_string(record.face), "{}", record.id);
        assert!(is_solved_sequence(record.face, &record.pictograms));
    }
}

#[test]
fn test_flat_derived_text_reconstructs_as_primaries() {
    let seq = solved_sequence(FaceId::Back);
    let text = poem_string_from_pictograms(dictionary(), seq);
    let words = reconstruct(dictionary(), seq, &PoemText::from(text.as_str()));
    assert_eq!(words, derive_from_pictograms(dictionary(), seq));
}

#[test]
fn test_scrambled_faces_derive_and_round_trip() {
    let cube = scramble(&solved_cube(), &mut StdRng::seed_from_u64(2024));
    for face in &cube.faces {
        let words = derive_from_pictograms(dictionary(), &face.sequence);
        assert_eq!(words.len(), 8);
        assert!(words.iter().all(|w| !w.inserted));

        let text = flatten(&words);
        let restored = reconstruct(dictionary(), &face.sequence, &PoemText::from(text.as_str()));
        assert_eq!(restored, words, "face {}", face.face);
    }
}

#[test]
fn test_reconstructing_canonical_text_loses_later_primaries() {
    // Tagging is positional: after the first line break every lookup is shifted.
    let text = canonical_poem_string(FaceId::Front);
    let words = reconstruct(dictionary(), solved_sequence(FaceId::Front), &PoemText::from(text.as_str()));

    assert_eq!(words.len(), canonical_poem(FaceId::Front).len());
    assert!(!words[0].inserted);
    assert!(!words[1].inserted);
    assert_eq!(words[2], WordToken::line_break());
    assert!(words[4..].iter().all(|w| w.inserted));
    assert_eq!(flatten(&words), text);
}

#[test]
fn test_structured_canonical_poem_survives_reconstruction() {
    let tokens = canonical_poem(FaceId::Right);
    let words = reconstruct(dictionary(), solved_sequence(FaceId::Right), &PoemText::Tokens(tokens.clone()));
    assert_eq!(words, tokens);
}

#[test]
fn test_token_json_forms() {
    let flat: PoemText = serde_json::from_str(r#""who walks""#).unwrap();
    assert_eq!(flat, PoemText::from("who walks"));

    let tokens: PoemText = serde_json::from_str(r#"[{"text":"who","inserted":false}]"#).unwrap();
    assert_eq!(tokens, PoemText::Tokens(vec![WordToken::primary("who")]));
}
