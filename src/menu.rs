//! Contextual edit menu
//!
//! Clicking a poem opens one of three menus:
//!
//! - `Replace`: on a primary word; offers the pictogram's other meanings
//! - `Inserted`: on an inserted token; offers same-kind alternatives and delete
//! - `Insert`: on a gap between tokens (including before the first and after
//!   the last); offers connectors, punctuation and line breaks subject to the
//!   adjacency rules in [`GAP_RULES`]
//!
//! Menus are plain values. Applying a choice edits the token list in place.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::MenuError;
use crate::models::word::{is_mortar, is_punctuation, WordToken, LINE_BREAK, MORTAR_WORDS, PUNCTUATION_MARKS};
use crate::models::{Pictogram, PictogramDictionary};

/// At most this many connector words may sit next to each other
pub const MAX_CONSECUTIVE_MORTARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuMode {
    Replace,
    Inserted,
    Insert,
}

/// Where the user clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "lowercase")]
pub enum ClickTarget {
    /// The token at this index
    Word(usize),
    /// The gap before the token at this index (`words.len()` = after the last)
    Gap(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "camelCase")]
pub enum MenuOption {
    /// Alternate meaning of a pictogram
    Word(String),
    Mortar(String),
    Punctuation(String),
    LineBreak,
    Delete,
}

impl MenuOption {
    /// Token text this option writes, `None` for delete
    pub fn value(&self) -> Option<&str> {
        match self {
            MenuOption::Word(w) | MenuOption::Mortar(w) | MenuOption::Punctuation(w) => Some(w),
            MenuOption::LineBreak => Some(LINE_BREAK),
            MenuOption::Delete => None,
        }
    }
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuOption::Word(w) | MenuOption::Mortar(w) | MenuOption::Punctuation(w) => write!(f, "{}", w),
            MenuOption::LineBreak => write!(f, "[line break]"),
            MenuOption::Delete => write!(f, "delete"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub mode: MenuMode,
    /// Token index the choice applies to (insert position for `Insert`)
    pub index: usize,
    pub options: Vec<MenuOption>,
}

impl Menu {
    /// Menus without options are not shown
    pub fn is_visible(&self) -> bool {
        !self.options.is_empty()
    }
}

/// Menu for a click, or `None` when the click does nothing
pub fn compute_menu(
    dictionary: &PictogramDictionary,
    words: &[WordToken],
    pictograms: &[Pictogram],
    target: ClickTarget,
) -> Result<Option<Menu>, MenuError> {
    match target {
        ClickTarget::Word(index) => word_menu(dictionary, words, pictograms, index).map(Some),
        ClickTarget::Gap(index) => gap_menu(words, index),
    }
}

/// Menu for a click on the token at `index`
pub fn word_menu(
    dictionary: &PictogramDictionary,
    words: &[WordToken],
    pictograms: &[Pictogram],
    index: usize,
) -> Result<Menu, MenuError> {
    let word = words.get(index).ok_or(MenuError::IndexOutOfRange { index, len: words.len() })?;

    if !word.inserted {
        return Ok(Menu {
            mode: MenuMode::Replace,
            index,
            options: alternate_words(dictionary, words, pictograms, index),
        });
    }

    let lower = word.text.to_lowercase();
    let mut options: Vec<MenuOption> = if word.is_line_break() {
        Vec::new()
    } else if is_mortar(&lower) {
        mortar_options().filter(|o| o.value() != Some(lower.as_str())).collect()
    } else if is_punctuation(&lower) {
        punctuation_options().filter(|o| o.value() != Some(lower.as_str())).collect()
    } else {
        Vec::new()
    };
    options.push(MenuOption::Delete);

    Ok(Menu {
        mode: MenuMode::Inserted,
        index,
        options,
    })
}

/// Every meaning of the pictogram behind the primary word at `index`, minus the word itself.
///
/// The pictogram is found by counting primary tokens before `index`.
fn alternate_words(
    dictionary: &PictogramDictionary,
    words: &[WordToken],
    pictograms: &[Pictogram],
    index: usize,
) -> Vec<MenuOption> {
    let current = match words.get(index) {
        Some(w) if !w.text.is_empty() => w.text.as_str(),
        _ => return Vec::new(),
    };

    let picto_index = words[..index].iter().filter(|w| !w.inserted).count();
    let Some(picto) = pictograms.get(picto_index) else {
        log::warn!("No pictogram at position {} for word '{}'", picto_index, current);
        return Vec::new();
    };

    dictionary
        .all_words(picto)
        .into_iter()
        .filter(|w| w != current)
        .map(MenuOption::Word)
        .collect()
}

fn mortar_options() -> impl Iterator<Item = MenuOption> {
    MORTAR_WORDS.iter().map(|w| MenuOption::Mortar(w.to_string()))
}

fn punctuation_options() -> impl Iterator<Item = MenuOption> {
    PUNCTUATION_MARKS.iter().map(|p| MenuOption::Punctuation(p.to_string()))
}

/// Option groups a gap menu is assembled from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionGroup {
    /// Connector words, empty once the connector cap is reached
    Mortars,
    Punctuation,
    LineBreak,
    Delete,
}

/// Classification of a token flanking a gap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbor {
    pub mortar: bool,
    pub punctuation: bool,
    pub inserted: bool,
    pub line_break: bool,
}

impl Neighbor {
    fn of(word: &WordToken) -> Self {
        let lower = word.text.to_lowercase();
        Self {
            mortar: is_mortar(&lower),
            punctuation: is_punctuation(&lower),
            inserted: word.inserted,
            line_break: word.inserted && word.text == LINE_BREAK,
        }
    }
}

/// What a gap rule can see
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapContext {
    pub index: usize,
    pub prev: Option<Neighbor>,
    pub next: Option<Neighbor>,
}

impl GapContext {
    fn prev_is(&self, f: impl Fn(&Neighbor) -> bool) -> bool {
        self.prev.as_ref().map_or(false, f)
    }

    fn next_is(&self, f: impl Fn(&Neighbor) -> bool) -> bool {
        self.next.as_ref().map_or(false, f)
    }
}

pub type GapRule = (&'static str, fn(&GapContext) -> bool, &'static [OptionGroup]);

fn at_start(c: &GapContext) -> bool {
    c.index == 0
}

fn between_plain_words(c: &GapContext) -> bool {
    !c.prev_is(|p| p.mortar) && !c.prev_is(|p| p.punctuation) && !c.prev_is(|p| p.inserted) && !c.next_is(|n| n.inserted)
}

fn before_punctuation(c: &GapContext) -> bool {
    c.next_is(|n| n.punctuation)
}

fn after_punctuation(c: &GapContext) -> bool {
    c.prev_is(|p| p.punctuation)
}

fn between_mortars(c: &GapContext) -> bool {
    c.prev_is(|p| p.mortar) && c.next_is(|n| n.mortar)
}

fn beside_mortar(c: &GapContext) -> bool {
    c.prev_is(|p| p.mortar) || c.next_is(|n| n.mortar)
}

fn at_end(c: &GapContext) -> bool {
    c.next.is_none() && !c.prev_is(|p| p.punctuation) && !c.prev_is(|p| p.mortar) && !c.prev_is(|p| p.inserted)
}

fn always(_: &GapContext) -> bool {
    true
}

use OptionGroup::{LineBreak as Br, Mortars as Mo, Punctuation as Pu};

/// Gap decision table, first matching guard wins
pub const GAP_RULES: &[GapRule] = &[
    ("at-start", at_start, &[Mo]),
    ("between-plain-words", between_plain_words, &[Mo, Pu, Br]),
    ("before-punctuation", before_punctuation, &[Mo, Br]),
    ("after-punctuation", after_punctuation, &[Mo, Br]),
    ("between-mortars", between_mortars, &[Pu, Br]),
    ("beside-mortar", beside_mortar, &[Pu, Br, Mo]),
    // unreachable behind between-plain-words, kept so the table reads whole
    ("at-end", at_end, &[Pu]),
    ("fallback", always, &[Mo, Pu, Br]),
];

/// Groups offered next to a line break, which is edited in place
const LINE_BREAK_GROUPS: &[OptionGroup] = &[
    OptionGroup::Mortars,
    OptionGroup::Punctuation,
    OptionGroup::LineBreak,
    OptionGroup::Delete,
];

/// Connector words counted outward from the gap in both directions
fn consecutive_mortars(words: &[WordToken], index: usize) -> usize {
    let before = words[..index].iter().rev().take_while(|w| w.is_mortar()).count();
    let after = words[index..].iter().take_while(|w| w.is_mortar()).count();
    before + after
}

fn expand(groups: &[OptionGroup], allow_mortars: bool) -> Vec<MenuOption> {
    let mut options = Vec::new();
    for group in groups {
        match group {
            OptionGroup::Mortars if allow_mortars => options.extend(mortar_options()),
            OptionGroup::Mortars => {}
            OptionGroup::Punctuation => options.extend(punctuation_options()),
            OptionGroup::LineBreak => options.push(MenuOption::LineBreak),
            OptionGroup::Delete => options.push(MenuOption::Delete),
        }
    }
    options
}

/// Menu for a click on the gap before `words[index]`.
///
/// Returns `None` for the gap after a trailing punctuation mark.
pub fn gap_menu(words: &[WordToken], index: usize) -> Result<Option<Menu>, MenuError> {
    if index > words.len() {
        return Err(MenuError::IndexOutOfRange { index, len: words.len() });
    }

    let context = GapContext {
        index,
        prev: index.checked_sub(1).and_then(|i| words.get(i)).map(Neighbor::of),
        next: words.get(index).map(Neighbor::of),
    };

    if context.next.is_none() && context.prev_is(|p| p.punctuation) {
        return Ok(None);
    }

    let allow_mortars = consecutive_mortars(words, index) < MAX_CONSECUTIVE_MORTARS;

    if context.prev_is(|p| p.line_break) || context.next_is(|n| n.line_break) {
        let target = if context.prev_is(|p| p.line_break) { index - 1 } else { index };
        return Ok(Some(Menu {
            mode: MenuMode::Insert,
            index: target,
            options: expand(LINE_BREAK_GROUPS, allow_mortars),
        }));
    }

    let (name, _, groups) = GAP_RULES
        .iter()
        .find(|(_, guard, _)| guard(&context))
        .unwrap_or(&GAP_RULES[GAP_RULES.len() - 1]);
    log::debug!("Gap {} matched rule '{}'", index, name);

    Ok(Some(Menu {
        mode: MenuMode::Insert,
        index,
        options: expand(groups, allow_mortars),
    }))
}

/// Apply `option` from `menu` to `words`
pub fn apply_menu_choice(words: &mut Vec<WordToken>, menu: &Menu, option: &MenuOption) -> Result<(), MenuError> {
    if !menu.options.contains(option) {
        return Err(MenuError::OptionNotOffered(option.to_string()));
    }

    let len = words.len();
    let out_of_range = MenuError::IndexOutOfRange { index: menu.index, len };

    match (menu.mode, option.value()) {
        (MenuMode::Insert, Some(value)) => {
            if menu.index > len {
                return Err(out_of_range);
            }
            words.insert(menu.index, WordToken::inserted(value));
        }
        (MenuMode::Insert | MenuMode::Inserted, None) => {
            if menu.index >= len {
                return Err(out_of_range);
            }
            words.remove(menu.index);
        }
        (MenuMode::Replace | MenuMode::Inserted, Some(value)) => {
            let word = words.get_mut(menu.index).ok_or(out_of_range)?;
            word.text = value.to_string();
        }
        (MenuMode::Replace, None) => return Err(MenuError::OptionNotOffered(option.to_string())),
    }
    Ok(())
}
