use std::sync::OnceLock;
use crate::models::Character;

const fn k(glyph: &'static str, romaji: &'static str) -> Character {
    Character::new(glyph, romaji)
}

/// Basic katakana in gojūon order, one slice per row
pub static KATAKANA_ROWS: &[&[Character]] = &[
    &[k("ア", "a"), k("イ", "i"), k("ウ", "u"), k("エ", "e"), k("オ", "o")],
    &[k("カ", "ka"), k("キ", "ki"), k("ク", "ku"), k("ケ", "ke"), k("コ", "ko")],
    &[k("サ", "sa"), k("シ", "shi"), k("ス", "su"), k("セ", "se"), k("ソ", "so")],
    &[k("タ", "ta"), k("チ", "chi"), k("ツ", "tsu"), k("テ", "te"), k("ト", "to")],
    &[k("ナ", "na"), k("ニ", "ni"), k("ヌ", "nu"), k("ネ", "ne"), k("ノ", "no")],
    &[k("ハ", "ha"), k("ヒ", "hi"), k("フ", "fu"), k("ヘ", "he"), k("ホ", "ho")],
    &[k("マ", "ma"), k("ミ", "mi"), k("ム", "mu"), k("メ", "me"), k("モ", "mo")],
    &[k("ヤ", "ya"), k("ユ", "yu"), k("ヨ", "yo")],
    &[k("ラ", "ra"), k("リ", "ri"), k("ル", "ru"), k("レ", "re"), k("ロ", "ro")],
    &[k("ワ", "wa"), k("ヲ", "wo"), k("ン", "n")],
];

pub const HIRAGANA_PENDING: &str = "Hiragana section coming soon...";

/// Flattened katakana table, built on first use
pub fn katakana() -> &'static [Character] {
    static TABLE: OnceLock<Vec<Character>> = OnceLock::new();
    TABLE.get_or_init(|| {
        KATAKANA_ROWS
            .iter()
            .flat_map(|row| row.iter().copied())
            .collect()
    })
}

pub fn katakana_rows() -> &'static [&'static [Character]] {
    KATAKANA_ROWS
}
