//! Conversion directives and build options.
//!
//! Naming convention: Hankaku is the halfwidth form, Zenkaku the fullwidth
//! form; Kana covers hiragana plus katakana in both widths.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single width/script conversion request.
///
/// Conversions are handed to [`Normalizer::new`](crate::Normalizer::new) as
/// an ordered list; when two conversions claim the same source text, the
/// earlier one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conversion {
    /// Halfwidth digits to fullwidth digits
    HankakuNumberToZenkaku,
    /// Fullwidth digits to halfwidth digits
    ZenkakuNumberToHankaku,
    /// Halfwidth katakana to fullwidth katakana
    HankakuKatakanaToZenkaku,
    /// Fullwidth katakana to halfwidth katakana
    ZenkakuKatakanaToHankaku,
    /// Katakana (fullwidth or halfwidth) to hiragana
    KatakanaToHiragana,
    /// Hiragana to fullwidth katakana
    HiraganaToZenkakuKatakana,
    /// Hiragana to halfwidth katakana
    HiraganaToHankakuKatakana,
    /// Any kana (hiragana, fullwidth or halfwidth katakana) to hiragana
    KanaToHiragana,
    /// Any kana to fullwidth katakana
    KanaToZenkakuKatakana,
    /// Any kana to halfwidth katakana
    KanaToHankakuKatakana,
    /// Letters (halfwidth or fullwidth) to fullwidth uppercase
    AlphabetToUpperZenkaku,
    /// Letters to halfwidth uppercase
    AlphabetToUpperHankaku,
    /// Letters to fullwidth lowercase
    AlphabetToLowerZenkaku,
    /// Letters to halfwidth lowercase
    AlphabetToLowerHankaku,
    /// Letters to fullwidth, preserving case
    AlphabetToZenkaku,
    /// Letters to halfwidth, preserving case
    AlphabetToHankaku,
    /// Halfwidth signs to fullwidth signs
    HankakuSignToZenkaku,
    /// Fullwidth signs to halfwidth signs
    ZenkakuSignToHankaku,
    /// Halfwidth space to fullwidth space
    HankakuSpaceToZenkaku,
    /// Fullwidth space to halfwidth space
    ZenkakuSpaceToHankaku,
}

impl Conversion {
    /// Every conversion, in catalogue order.
    pub const ALL: [Conversion; 20] = [
        Conversion::HankakuNumberToZenkaku,
        Conversion::ZenkakuNumberToHankaku,
        Conversion::HankakuKatakanaToZenkaku,
        Conversion::ZenkakuKatakanaToHankaku,
        Conversion::KatakanaToHiragana,
        Conversion::HiraganaToZenkakuKatakana,
        Conversion::HiraganaToHankakuKatakana,
        Conversion::KanaToHiragana,
        Conversion::KanaToZenkakuKatakana,
        Conversion::KanaToHankakuKatakana,
        Conversion::AlphabetToUpperZenkaku,
        Conversion::AlphabetToUpperHankaku,
        Conversion::AlphabetToLowerZenkaku,
        Conversion::AlphabetToLowerHankaku,
        Conversion::AlphabetToZenkaku,
        Conversion::AlphabetToHankaku,
        Conversion::HankakuSignToZenkaku,
        Conversion::ZenkakuSignToHankaku,
        Conversion::HankakuSpaceToZenkaku,
        Conversion::ZenkakuSpaceToHankaku,
    ];

    /// The snake_case name used by [`FromStr`], [`fmt::Display`], and serde.
    pub fn name(self) -> &'static str {
        match self {
            Conversion::HankakuNumberToZenkaku => "hankaku_number_to_zenkaku",
            Conversion::ZenkakuNumberToHankaku => "zenkaku_number_to_hankaku",
            Conversion::HankakuKatakanaToZenkaku => "hankaku_katakana_to_zenkaku",
            Conversion::ZenkakuKatakanaToHankaku => "zenkaku_katakana_to_hankaku",
            Conversion::KatakanaToHiragana => "katakana_to_hiragana",
            Conversion::HiraganaToZenkakuKatakana => "hiragana_to_zenkaku_katakana",
            Conversion::HiraganaToHankakuKatakana => "hiragana_to_hankaku_katakana",
            Conversion::KanaToHiragana => "kana_to_hiragana",
            Conversion::KanaToZenkakuKatakana => "kana_to_zenkaku_katakana",
            Conversion::KanaToHankakuKatakana => "kana_to_hankaku_katakana",
            Conversion::AlphabetToUpperZenkaku => "alphabet_to_upper_zenkaku",
            Conversion::AlphabetToUpperHankaku => "alphabet_to_upper_hankaku",
            Conversion::AlphabetToLowerZenkaku => "alphabet_to_lower_zenkaku",
            Conversion::AlphabetToLowerHankaku => "alphabet_to_lower_hankaku",
            Conversion::AlphabetToZenkaku => "alphabet_to_zenkaku",
            Conversion::AlphabetToHankaku => "alphabet_to_hankaku",
            Conversion::HankakuSignToZenkaku => "hankaku_sign_to_zenkaku",
            Conversion::ZenkakuSignToHankaku => "zenkaku_sign_to_hankaku",
            Conversion::HankakuSpaceToZenkaku => "hankaku_space_to_zenkaku",
            Conversion::ZenkakuSpaceToHankaku => "zenkaku_space_to_hankaku",
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized conversion name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown conversion: '{0}'")]
pub struct ParseConversionError(String);

impl FromStr for Conversion {
    type Err = ParseConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Conversion::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| ParseConversionError(s.to_string()))
    }
}

/// Flags applied to every conversion of one build call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Resolve kana targets to their dakuten-stripped column. No effect on
    /// non-kana conversions.
    #[serde(default)]
    pub remove_dakuten: bool,
    /// Delete characters whose target column is empty instead of passing
    /// them through unchanged.
    #[serde(default)]
    pub remove_no_mapping: bool,
}
