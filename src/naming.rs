//! Name normalization for fuzzy photo matching.
//!
//! Roster names and photo filenames are typed by different people at different
//! times. Both sides are reduced to a bare run of letters before comparison:
//!
//! - `"J. Smith"` → `"JSmith"`
//! - `"J_Smith_COT_2023.png"` → `"JSmithpng"`
//!
//! ## Letter Set
//!
//! A character survives cleaning when it is an ASCII letter, falls in the
//! Latin-1 accented ranges `À..=Ü` / `à..=ü`, or is a CJK unified ideograph
//! in `U+4E00..=U+9FA5`. The Latin-1 ranges are contiguous code point ranges,
//! so they also admit `×` and `÷`.
//!
//! ## The `COT` Token
//!
//! Photo exports tag files with a `COT` marker (`J_Smith_COT.png`). It is
//! removed as a whole word, case-insensitively, before letters are extracted.
//! Underscores are turned into hyphens first: an underscore is a word
//! character, so `Smith_COT` would otherwise have no word boundary before
//! `COT`. Word boundaries are ASCII-only, so any non-ASCII character counts as
//! a boundary.

/// Whether `c` belongs to the letter set kept by [`clean_person_name`].
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || ('\u{C0}'..='\u{DC}').contains(&c)
        || ('\u{E0}'..='\u{FC}').contains(&c)
        || ('\u{4E00}'..='\u{9FA5}').contains(&c)
}

/// Strip everything that is not a name letter.
///
/// - `"J. Smith"` → `"JSmith"`
/// - `"Zoë O'Neil-Brown"` → `"ZoëONeilBrown"`
/// - `"王 小明"` → `"王小明"`
/// - `"123"` → `""`
pub fn clean_person_name(name: &str) -> String {
    name.chars().filter(|c| is_name_char(*c)).collect()
}

/// Normalize a photo filename into the same letter space as [`clean_person_name`].
///
/// - `"J_Smith_COT_2023.png"` → `"JSmithpng"`
/// - `"cot-Lee.jpg"` → `"Leejpg"`
/// - `"Escott.png"` → `"Escottpng"` (`cot` inside a word is kept)
pub fn clean_file_token(filename: &str) -> String {
    let hyphenated = filename.replace('_', "-");
    let without_marker = strip_cot_tokens(&hyphenated);
    clean_person_name(&without_marker)
}

const COT_TOKEN: &[u8] = b"cot";

fn is_ascii_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Whether a standalone `COT` word starts at byte offset `at`.
fn cot_token_at(bytes: &[u8], at: usize) -> bool {
    let end = at + COT_TOKEN.len();
    end <= bytes.len()
        && bytes[at..end].eq_ignore_ascii_case(COT_TOKEN)
        && (at == 0 || !is_ascii_word_byte(bytes[at - 1]))
        && (end == bytes.len() || !is_ascii_word_byte(bytes[end]))
}

fn strip_cot_tokens(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut rest = s.char_indices();
    while let Some((at, c)) = rest.next() {
        if cot_token_at(bytes, at) {
            // Token is pure ASCII: skip the two remaining bytes/chars.
            rest.next();
            rest.next();
            continue;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_name_drops_punctuation_and_spaces() {
        assert_eq!(clean_person_name("J. Smith"), "JSmith");
    }

    #[test]
    fn person_name_keeps_accented_latin() {
        assert_eq!(clean_person_name("Zoë O'Neil-Brown"), "ZoëONeilBrown");
        assert_eq!(clean_person_name("ÉLODIE Müller"), "ÉLODIEMüller");
    }

    #[test]
    fn person_name_keeps_cjk() {
        assert_eq!(clean_person_name("王 小明 (Jack)"), "王小明Jack");
    }

    #[test]
    fn person_name_drops_letters_outside_the_set() {
        // ý (U+00FD) and Ł (U+0141) fall outside the Latin-1 ranges.
        assert_eq!(clean_person_name("Dvořý Łukasz"), "Dvoukasz");
    }

    #[test]
    fn person_name_digits_only_is_empty() {
        assert_eq!(clean_person_name("123-456"), "");
        assert_eq!(clean_person_name(""), "");
    }

    #[test]
    fn file_token_removes_cot_marker() {
        assert_eq!(clean_file_token("J_Smith_COT_2023.png"), "JSmithpng");
        assert_eq!(clean_file_token("JSmith_COT.png"), "JSmithpng");
    }

    #[test]
    fn file_token_cot_is_case_insensitive() {
        assert_eq!(clean_file_token("cot-Lee.jpg"), "Leejpg");
        assert_eq!(clean_file_token("Lee Cot.jpg"), "Leejpg");
    }

    #[test]
    fn file_token_keeps_cot_inside_words() {
        assert_eq!(clean_file_token("Escott.png"), "Escottpng");
        assert_eq!(clean_file_token("COTTON.png"), "COTTONpng");
    }

    #[test]
    fn file_token_cot_next_to_digits_is_kept() {
        // Digits are word characters, so there is no boundary.
        assert_eq!(clean_file_token("2023COT.png"), "COTpng");
    }

    #[test]
    fn file_token_cot_next_to_non_ascii_is_removed() {
        assert_eq!(clean_file_token("éCOT.png"), "épng");
    }

    #[test]
    fn file_token_repeated_markers() {
        assert_eq!(clean_file_token("COT_COT_Ann.png"), "Annpng");
        assert_eq!(clean_file_token("COTCOT.png"), "COTCOTpng");
    }

    #[test]
    fn file_token_without_marker() {
        assert_eq!(clean_file_token("ABrown.png"), "ABrownpng");
    }
}
