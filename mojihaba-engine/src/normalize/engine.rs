//! Normalizer construction and application.

use super::conversion::{Conversion, Options};
use super::tables::{
    KanaCol, LetterCol, Mapping, MissingPolicy, WidthCol, project_digits, project_kana,
    project_letters, project_signs, project_spaces,
};
use super::trie::TrieNode;

/// A built text normalizer.
///
/// Immutable once constructed; [`apply`](Normalizer::apply) allocates its
/// own output, so one instance can serve many callers concurrently.
#[derive(Debug)]
pub struct Normalizer {
    trie: TrieNode,
}

impl Normalizer {
    /// Build a normalizer from an ordered list of conversions.
    ///
    /// Each conversion is projected into substitution pairs in list order;
    /// when two pairs share a source pattern, the first one wins. A
    /// conversion list may repeat or contradict itself without error; the
    /// later entries simply lose the overlapping patterns.
    pub fn new(conversions: &[Conversion], options: Options) -> Self {
        let policy = if options.remove_no_mapping {
            MissingPolicy::Remove
        } else {
            MissingPolicy::Keep
        };
        // RemoveDakuten retargets kana projections onto the stripped columns.
        let kana_target = |col: KanaCol| {
            if options.remove_dakuten {
                col.base()
            } else {
                col
            }
        };

        let mut mappings: Vec<Mapping> = Vec::new();
        for &conversion in conversions {
            match conversion {
                Conversion::HankakuNumberToZenkaku => {
                    mappings.extend(project_digits(
                        WidthCol::Halfwidth,
                        WidthCol::Fullwidth,
                        policy,
                    ));
                }
                Conversion::ZenkakuNumberToHankaku => {
                    mappings.extend(project_digits(
                        WidthCol::Fullwidth,
                        WidthCol::Halfwidth,
                        policy,
                    ));
                }
                Conversion::HankakuKatakanaToZenkaku => {
                    mappings.extend(project_kana(
                        KanaCol::Halfwidth,
                        kana_target(KanaCol::Fullwidth),
                        policy,
                    ));
                }
                Conversion::ZenkakuKatakanaToHankaku => {
                    mappings.extend(project_kana(
                        KanaCol::Fullwidth,
                        kana_target(KanaCol::Halfwidth),
                        policy,
                    ));
                }
                Conversion::KatakanaToHiragana => {
                    mappings.extend(project_kana(
                        KanaCol::Halfwidth,
                        kana_target(KanaCol::Hiragana),
                        policy,
                    ));
                    mappings.extend(project_kana(
                        KanaCol::Fullwidth,
                        kana_target(KanaCol::Hiragana),
                        policy,
                    ));
                }
                Conversion::HiraganaToZenkakuKatakana => {
                    mappings.extend(project_kana(
                        KanaCol::Hiragana,
                        kana_target(KanaCol::Fullwidth),
                        policy,
                    ));
                }
                Conversion::HiraganaToHankakuKatakana => {
                    mappings.extend(project_kana(
                        KanaCol::Hiragana,
                        kana_target(KanaCol::Halfwidth),
                        policy,
                    ));
                }
                Conversion::KanaToHiragana => {
                    for source in [KanaCol::Halfwidth, KanaCol::Fullwidth, KanaCol::Hiragana] {
                        mappings.extend(project_kana(
                            source,
                            kana_target(KanaCol::Hiragana),
                            policy,
                        ));
                    }
                }
                Conversion::KanaToZenkakuKatakana => {
                    for source in [KanaCol::Halfwidth, KanaCol::Fullwidth, KanaCol::Hiragana] {
                        mappings.extend(project_kana(
                            source,
                            kana_target(KanaCol::Fullwidth),
                            policy,
                        ));
                    }
                }
                Conversion::KanaToHankakuKatakana => {
                    for source in [KanaCol::Halfwidth, KanaCol::Fullwidth, KanaCol::Hiragana] {
                        mappings.extend(project_kana(
                            source,
                            kana_target(KanaCol::Halfwidth),
                            policy,
                        ));
                    }
                }
                Conversion::AlphabetToUpperZenkaku => {
                    for source in [
                        LetterCol::HalfwidthLower,
                        LetterCol::HalfwidthUpper,
                        LetterCol::FullwidthLower,
                    ] {
                        mappings.extend(project_letters(
                            source,
                            LetterCol::FullwidthUpper,
                            policy,
                        ));
                    }
                }
                Conversion::AlphabetToUpperHankaku => {
                    for source in [
                        LetterCol::HalfwidthLower,
                        LetterCol::FullwidthLower,
                        LetterCol::FullwidthUpper,
                    ] {
                        mappings.extend(project_letters(
                            source,
                            LetterCol::HalfwidthUpper,
                            policy,
                        ));
                    }
                }
                Conversion::AlphabetToLowerZenkaku => {
                    for source in [
                        LetterCol::HalfwidthLower,
                        LetterCol::HalfwidthUpper,
                        LetterCol::FullwidthUpper,
                    ] {
                        mappings.extend(project_letters(
                            source,
                            LetterCol::FullwidthLower,
                            policy,
                        ));
                    }
                }
                Conversion::AlphabetToLowerHankaku => {
                    for source in [
                        LetterCol::HalfwidthUpper,
                        LetterCol::FullwidthLower,
                        LetterCol::FullwidthUpper,
                    ] {
                        mappings.extend(project_letters(
                            source,
                            LetterCol::HalfwidthLower,
                            policy,
                        ));
                    }
                }
                Conversion::AlphabetToZenkaku => {
                    mappings.extend(project_letters(
                        LetterCol::HalfwidthLower,
                        LetterCol::FullwidthLower,
                        policy,
                    ));
                    mappings.extend(project_letters(
                        LetterCol::HalfwidthUpper,
                        LetterCol::FullwidthUpper,
                        policy,
                    ));
                }
                Conversion::AlphabetToHankaku => {
                    mappings.extend(project_letters(
                        LetterCol::FullwidthLower,
                        LetterCol::HalfwidthLower,
                        policy,
                    ));
                    mappings.extend(project_letters(
                        LetterCol::FullwidthUpper,
                        LetterCol::HalfwidthUpper,
                        policy,
                    ));
                }
                Conversion::HankakuSignToZenkaku => {
                    mappings.extend(project_signs(
                        WidthCol::Halfwidth,
                        WidthCol::Fullwidth,
                        policy,
                    ));
                }
                Conversion::ZenkakuSignToHankaku => {
                    mappings.extend(project_signs(
                        WidthCol::Fullwidth,
                        WidthCol::Halfwidth,
                        policy,
                    ));
                }
                Conversion::HankakuSpaceToZenkaku => {
                    mappings.extend(project_spaces(
                        WidthCol::Halfwidth,
                        WidthCol::Fullwidth,
                        policy,
                    ));
                }
                Conversion::ZenkakuSpaceToHankaku => {
                    mappings.extend(project_spaces(
                        WidthCol::Fullwidth,
                        WidthCol::Halfwidth,
                        policy,
                    ));
                }
            }
        }

        let mut trie = TrieNode::new();
        let mut rules = 0usize;
        for mapping in &mappings {
            if trie.insert(mapping.from, mapping.to) {
                rules += 1;
            }
        }
        tracing::debug!(
            conversions = conversions.len(),
            projected = mappings.len(),
            rules,
            "built normalizer"
        );

        Self { trie }
    }

    /// Build a normalizer with default [`Options`].
    pub fn with_conversions(conversions: &[Conversion]) -> Self {
        Self::new(conversions, Options::default())
    }

    /// Normalize `input` in a single left-to-right scan.
    ///
    /// At each position the longest matching pattern is substituted and the
    /// scan advances past it; unmatched characters are copied through. This
    /// never fails.
    pub fn apply(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut pos = 0;

        while let Some(ch) = input[pos..].chars().next() {
            match self.trie.search_longest(&input[pos..]) {
                Some(found) => {
                    output.push_str(found.replacement);
                    pos += found.len;
                }
                None => {
                    output.push(ch);
                    pos += ch.len_utf8();
                }
            }
        }

        output
    }
}
