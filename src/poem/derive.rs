//! Poem derivation: pictogram sequence → word tokens
//!
//! A scrambled or rotated face reads as the primary meaning of each of its
//! pictograms in order. A face in its solved arrangement reads as its
//! hand-authored canonical poem instead.

use crate::models::word::{flatten, WordToken, LINE_BREAK};
use crate::models::{FaceId, Pictogram, PictogramDictionary};

/// Primary word for each pictogram, in order.
///
/// Missing entries become `[name-orientation]` placeholders; never fails.
pub fn derive_from_pictograms(dictionary: &PictogramDictionary, sequence: &[Pictogram]) -> Vec<WordToken> {
    sequence
        .iter()
        .map(|picto| match dictionary.primary(picto) {
            Some(primary) => WordToken::primary(primary),
            None => {
                log::warn!("No meaning for pictogram {}/{}", picto.name, picto.orientation);
                WordToken::primary(picto.placeholder())
            }
        })
        .collect()
}

/// Derived poem as flat display text
pub fn poem_string_from_pictograms(dictionary: &PictogramDictionary, sequence: &[Pictogram]) -> String {
    flatten(&derive_from_pictograms(dictionary, sequence))
}

// (text, inserted)
type CanonicalLine = &'static [(&'static str, bool)];

const BR: (&str, bool) = (LINE_BREAK, true);

const FRONT: CanonicalLine = &[
    ("who", false),
    ("walks", false),
    BR,
    ("the", true),
    ("changing", false),
    ("path", false),
    ("of", true),
    BR,
    ("life", false),
    ("alone", false),
    ("?", true),
    BR,
    ("everyone", false),
    ("…", true),
    ("no\u{00A0}one", false),
    (".", true),
];

const BACK: CanonicalLine = &[
    ("when", false),
    ("we", false),
    ("see", false),
    BR,
    ("each\u{00A0}other", false),
    ("clearly", false),
    (",", true),
    BR,
    ("our", false),
    ("hearts", false),
    ("break", false),
    (".", true),
];

const LEFT: CanonicalLine = &[
    ("how", false),
    ("everything", false),
    ("ends", false),
    BR,
    ("we", false),
    ("know", false),
    (",", true),
    BR,
    ("still", false),
    ("we", false),
    ("begin", false),
    (".", true),
];

const RIGHT: CanonicalLine = &[
    ("what", false),
    ("could\u{00A0}be", false),
    ("better", false),
    BR,
    ("than", true),
    ("to", true),
    ("sit", false),
    ("in", true),
    ("the", true),
    ("sun", false),
    BR,
    ("and", true),
    ("feel", false),
    ("the", true),
    ("soft", false),
    ("wind", false),
    ("?", true),
];

const TOP: CanonicalLine = &[
    ("why", false),
    ("am", true),
    ("I", false),
    ("afraid", false),
    BR,
    ("to", true),
    ("live", false),
    ("?", true),
    ("because", false),
    BR,
    ("I", false),
    ("am", true),
    ("afraid", false),
    ("to", true),
    ("die", false),
    (".", true),
];

const BOTTOM: CanonicalLine = &[
    ("where", false),
    ("they", false),
    ("stood", false),
    (",", true),
    BR,
    ("kissing", false),
    ("or", true),
    ("arguing", false),
    BR,
    ("on", true),
    ("the", true),
    ("shore", false),
    (",", true),
    BR,
    ("sea", false),
    ("puddles", false),
    (".", true),
];

fn canonical_table(face: FaceId) -> CanonicalLine {
    match face {
        FaceId::Front => FRONT,
        FaceId::Back => BACK,
        FaceId::Left => LEFT,
        FaceId::Right => RIGHT,
        FaceId::Top => TOP,
        FaceId::Bottom => BOTTOM,
    }
}

/// Hand-authored poem of a solved face
pub fn canonical_poem(face: FaceId) -> Vec<WordToken> {
    canonical_table(face)
        .iter()
        .map(|&(text, inserted)| WordToken {
            text: text.to_string(),
            inserted,
        })
        .collect()
}

/// Canonical poem as flat display text
pub fn canonical_poem_string(face: FaceId) -> String {
    flatten(&canonical_poem(face))
}

/// Order-sensitive (name, orientation) equality against the solved face
pub fn is_solved_sequence(face: FaceId, sequence: &[Pictogram]) -> bool {
    let solved = crate::geometry::solved_sequence(face);
    !solved.is_empty() && solved == sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dictionary;
    use crate::models::Orientation;

    #[test]
    fn test_derive_uses_first_primary() {
        let seq = vec![
            Pictogram::new("nape", Orientation::Up),
            Pictogram::new("group", Orientation::Down),
        ];
        let words = derive_from_pictograms(dictionary(), &seq);
        assert_eq!(words, vec![WordToken::primary("who"), WordToken::primary("no\u{00A0}one")]);
    }

    #[test]
    fn test_derive_placeholder_for_unknown() {
        let seq = vec![Pictogram::new("unicorn", Orientation::Left)];
        let words = derive_from_pictograms(dictionary(), &seq);
        assert_eq!(words, vec![WordToken::primary("[unicorn-left]")]);
    }

    #[test]
    fn test_canonical_primaries_match_solved_faces() {
        for face in FaceId::ALL {
            let primaries: Vec<String> = canonical_poem(face)
                .into_iter()
                .filter(|w| !w.inserted)
                .map(|w| w.text)
                .collect();
            let derived: Vec<String> = derive_from_pictograms(dictionary(), crate::geometry::solved_sequence(face))
                .into_iter()
                .map(|w| w.text)
                .collect();
            assert_eq!(primaries, derived, "face {}", face);
        }
    }

    #[test]
    fn test_is_solved_sequence_is_order_sensitive() {
        let mut seq = crate::geometry::solved_sequence(FaceId::Left).to_vec();
        assert!(is_solved_sequence(FaceId::Left, &seq));
        seq.swap(0, 1);
        assert!(!is_solved_sequence(FaceId::Left, &seq));
        assert!(!is_solved_sequence(FaceId::Right, crate::geometry::solved_sequence(FaceId::Left)));
    }

    #[test]
    fn test_canonical_front_string() {
        assert_eq!(
            canonical_poem_string(FaceId::Front),
            "who walks \\n the changing path of \\n life alone ? \\n everyone … no\u{00A0}one ."
        );
    }
}
