//! Character equivalence tables.
//!
//! One table per character class, one row per logical character, one field
//! per variant form. [`project_rows`] turns a (source column, target column)
//! request into substitution pairs. Row order is the tiebreak when two rows
//! yield the same source pattern: the earlier row wins downstream.

/// A substitution pair produced by projecting one table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Mapping {
    pub from: &'static str,
    pub to: &'static str,
}

/// How to resolve a row whose target column is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MissingPolicy {
    /// Map the source to itself, leaving the text unchanged.
    Keep,
    /// Map the source to the empty string, deleting it from the text.
    Remove,
}

fn project_rows<R: 'static>(
    rows: &'static [R],
    source: impl Fn(&'static R) -> &'static str,
    target: impl Fn(&'static R) -> &'static str,
    policy: MissingPolicy,
) -> impl Iterator<Item = Mapping> {
    rows.iter().filter_map(move |row| {
        let from = source(row);
        if from.is_empty() {
            return None;
        }
        let to = match (target(row), policy) {
            ("", MissingPolicy::Keep) => from,
            (to, _) => to,
        };
        Some(Mapping { from, to })
    })
}

/// One kana syllable across its width/script variants.
///
/// The `_base` fields hold the dakuten/handakuten-stripped form; for plain
/// syllables they repeat the first three fields. `hiragana` is empty for
/// ヷ and ヺ, which have no single-codepoint hiragana equivalent.
#[derive(Debug)]
pub(crate) struct KanaRow {
    halfwidth: &'static str,
    fullwidth: &'static str,
    hiragana: &'static str,
    halfwidth_base: &'static str,
    fullwidth_base: &'static str,
    hiragana_base: &'static str,
}

/// Column selector for [`KANA`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KanaCol {
    Halfwidth,
    Fullwidth,
    Hiragana,
    HalfwidthBase,
    FullwidthBase,
    HiraganaBase,
}

impl KanaCol {
    /// The dakuten-stripped counterpart of this column. Base columns map to
    /// themselves.
    pub(crate) fn base(self) -> KanaCol {
        match self {
            KanaCol::Halfwidth | KanaCol::HalfwidthBase => KanaCol::HalfwidthBase,
            KanaCol::Fullwidth | KanaCol::FullwidthBase => KanaCol::FullwidthBase,
            KanaCol::Hiragana | KanaCol::HiraganaBase => KanaCol::HiraganaBase,
        }
    }

    fn of(self, row: &KanaRow) -> &'static str {
        match self {
            KanaCol::Halfwidth => row.halfwidth,
            KanaCol::Fullwidth => row.fullwidth,
            KanaCol::Hiragana => row.hiragana,
            KanaCol::HalfwidthBase => row.halfwidth_base,
            KanaCol::FullwidthBase => row.fullwidth_base,
            KanaCol::HiraganaBase => row.hiragana_base,
        }
    }
}

/// Project the kana table onto one (source, target) column pair.
pub(crate) fn project_kana(
    from: KanaCol,
    to: KanaCol,
    policy: MissingPolicy,
) -> impl Iterator<Item = Mapping> {
    project_rows(KANA, move |row| from.of(row), move |row| to.of(row), policy)
}

/// One Latin letter across its case and width variants.
#[derive(Debug)]
pub(crate) struct LetterRow {
    halfwidth_lower: &'static str,
    halfwidth_upper: &'static str,
    fullwidth_lower: &'static str,
    fullwidth_upper: &'static str,
}

/// Column selector for [`LETTERS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LetterCol {
    HalfwidthLower,
    HalfwidthUpper,
    FullwidthLower,
    FullwidthUpper,
}

impl LetterCol {
    fn of(self, row: &LetterRow) -> &'static str {
        match self {
            LetterCol::HalfwidthLower => row.halfwidth_lower,
            LetterCol::HalfwidthUpper => row.halfwidth_upper,
            LetterCol::FullwidthLower => row.fullwidth_lower,
            LetterCol::FullwidthUpper => row.fullwidth_upper,
        }
    }
}

/// Project the letter table onto one (source, target) column pair.
pub(crate) fn project_letters(
    from: LetterCol,
    to: LetterCol,
    policy: MissingPolicy,
) -> impl Iterator<Item = Mapping> {
    project_rows(LETTERS, move |row| from.of(row), move |row| to.of(row), policy)
}

/// A halfwidth/fullwidth pair; row shape shared by the digit, sign, and
/// space tables.
#[derive(Debug)]
pub(crate) struct WidthRow {
    halfwidth: &'static str,
    fullwidth: &'static str,
}

/// Column selector for [`DIGITS`], [`SIGNS`], and [`SPACES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WidthCol {
    Halfwidth,
    Fullwidth,
}

impl WidthCol {
    fn of(self, row: &WidthRow) -> &'static str {
        match self {
            WidthCol::Halfwidth => row.halfwidth,
            WidthCol::Fullwidth => row.fullwidth,
        }
    }
}

/// Project the digit table onto one (source, target) column pair.
pub(crate) fn project_digits(
    from: WidthCol,
    to: WidthCol,
    policy: MissingPolicy,
) -> impl Iterator<Item = Mapping> {
    project_rows(DIGITS, move |row| from.of(row), move |row| to.of(row), policy)
}

/// Project the sign table onto one (source, target) column pair.
pub(crate) fn project_signs(
    from: WidthCol,
    to: WidthCol,
    policy: MissingPolicy,
) -> impl Iterator<Item = Mapping> {
    project_rows(SIGNS, move |row| from.of(row), move |row| to.of(row), policy)
}

/// Project the space table onto one (source, target) column pair.
pub(crate) fn project_spaces(
    from: WidthCol,
    to: WidthCol,
    policy: MissingPolicy,
) -> impl Iterator<Item = Mapping> {
    project_rows(SPACES, move |row| from.of(row), move |row| to.of(row), policy)
}

const fn kana(
    halfwidth: &'static str,
    fullwidth: &'static str,
    hiragana: &'static str,
    halfwidth_base: &'static str,
    fullwidth_base: &'static str,
    hiragana_base: &'static str,
) -> KanaRow {
    KanaRow {
        halfwidth,
        fullwidth,
        hiragana,
        halfwidth_base,
        fullwidth_base,
        hiragana_base,
    }
}

const fn letter(
    halfwidth_lower: &'static str,
    halfwidth_upper: &'static str,
    fullwidth_lower: &'static str,
    fullwidth_upper: &'static str,
) -> LetterRow {
    LetterRow {
        halfwidth_lower,
        halfwidth_upper,
        fullwidth_lower,
        fullwidth_upper,
    }
}

const fn pair(halfwidth: &'static str, fullwidth: &'static str) -> WidthRow {
    WidthRow {
        halfwidth,
        fullwidth,
    }
}

/// Kana equivalence rows: voiced syllables first, then plain syllables and
/// small kana. Halfwidth voiced forms are two-codepoint sequences (base kana
/// plus combining-style mark).
static KANA: &[KanaRow] = &[
    // Dakuten rows
    kana("ｶﾞ", "ガ", "が", "ｶ", "カ", "か"),
    kana("ｷﾞ", "ギ", "ぎ", "ｷ", "キ", "き"),
    kana("ｸﾞ", "グ", "ぐ", "ｸ", "ク", "く"),
    kana("ｹﾞ", "ゲ", "げ", "ｹ", "ケ", "け"),
    kana("ｺﾞ", "ゴ", "ご", "ｺ", "コ", "こ"),
    kana("ｻﾞ", "ザ", "ざ", "ｻ", "サ", "さ"),
    kana("ｼﾞ", "ジ", "じ", "ｼ", "シ", "し"),
    kana("ｽﾞ", "ズ", "ず", "ｽ", "ス", "す"),
    kana("ｾﾞ", "ゼ", "ぜ", "ｾ", "セ", "せ"),
    kana("ｿﾞ", "ゾ", "ぞ", "ｿ", "ソ", "そ"),
    kana("ﾀﾞ", "ダ", "だ", "ﾀ", "タ", "た"),
    kana("ﾁﾞ", "ヂ", "ぢ", "ﾁ", "チ", "ち"),
    kana("ﾂﾞ", "ヅ", "づ", "ﾂ", "ツ", "つ"),
    kana("ﾃﾞ", "デ", "で", "ﾃ", "テ", "て"),
    kana("ﾄﾞ", "ド", "ど", "ﾄ", "ト", "と"),
    kana("ﾊﾞ", "バ", "ば", "ﾊ", "ハ", "は"),
    kana("ﾋﾞ", "ビ", "び", "ﾋ", "ヒ", "ひ"),
    kana("ﾌﾞ", "ブ", "ぶ", "ﾌ", "フ", "ふ"),
    kana("ﾍﾞ", "ベ", "べ", "ﾍ", "へ", "へ"),
    kana("ﾎﾞ", "ボ", "ぼ", "ﾎ", "ホ", "ほ"),
    // Handakuten rows
    kana("ﾊﾟ", "パ", "ぱ", "ﾊ", "ハ", "は"),
    kana("ﾋﾟ", "ピ", "ぴ", "ﾋ", "ヒ", "ひ"),
    kana("ﾌﾟ", "プ", "ぷ", "ﾌ", "フ", "ふ"),
    kana("ﾍﾟ", "ペ", "ぺ", "ﾍ", "ヘ", "へ"),
    kana("ﾎﾟ", "ポ", "ぽ", "ﾎ", "ホ", "ほ"),
    // ヴ, plus the two voiced katakana with no hiragana equivalent
    kana("ｳﾞ", "ヴ", "ゔ", "ｳ", "ウ", "う"),
    kana("ﾜﾞ", "ヷ", "", "ﾜ", "ワ", "わ"),
    kana("ｦﾞ", "ヺ", "", "ｦ", "ヲ", "を"),
    // Plain rows
    kana("ｱ", "ア", "あ", "ｱ", "ア", "あ"),
    kana("ｲ", "イ", "い", "ｲ", "イ", "い"),
    kana("ｳ", "ウ", "う", "ｳ", "ウ", "う"),
    kana("ｴ", "エ", "え", "ｴ", "エ", "え"),
    kana("ｵ", "オ", "お", "ｵ", "オ", "お"),
    kana("ｶ", "カ", "か", "ｶ", "カ", "か"),
    kana("ｷ", "キ", "き", "ｷ", "キ", "き"),
    kana("ｸ", "ク", "く", "ｸ", "ク", "く"),
    kana("ｹ", "ケ", "け", "ｹ", "ケ", "け"),
    kana("ｺ", "コ", "こ", "ｺ", "コ", "こ"),
    kana("ｻ", "サ", "さ", "ｻ", "サ", "さ"),
    kana("ｼ", "シ", "し", "ｼ", "シ", "し"),
    kana("ｽ", "ス", "す", "ｽ", "ス", "す"),
    kana("ｾ", "セ", "せ", "ｾ", "セ", "せ"),
    kana("ｿ", "ソ", "そ", "ｿ", "ソ", "そ"),
    kana("ﾀ", "タ", "た", "ﾀ", "タ", "た"),
    kana("ﾁ", "チ", "ち", "ﾁ", "チ", "ち"),
    kana("ﾂ", "ツ", "つ", "ﾂ", "ツ", "つ"),
    kana("ﾃ", "テ", "て", "ﾃ", "テ", "て"),
    kana("ﾄ", "ト", "と", "ﾄ", "ト", "と"),
    kana("ﾅ", "ナ", "な", "ﾅ", "ナ", "な"),
    kana("ﾆ", "ニ", "に", "ﾆ", "ニ", "に"),
    kana("ﾇ", "ヌ", "ぬ", "ﾇ", "ヌ", "ぬ"),
    kana("ﾈ", "ネ", "ね", "ﾈ", "ネ", "ね"),
    kana("ﾉ", "ノ", "の", "ﾉ", "ノ", "の"),
    kana("ﾊ", "ハ", "は", "ﾊ", "ハ", "は"),
    kana("ﾋ", "ヒ", "ひ", "ﾋ", "ヒ", "ひ"),
    kana("ﾌ", "フ", "ふ", "ﾌ", "フ", "ふ"),
    kana("ﾍ", "ヘ", "へ", "ﾍ", "ヘ", "へ"),
    kana("ﾎ", "ホ", "ほ", "ﾎ", "ホ", "ほ"),
    kana("ﾏ", "マ", "ま", "ﾏ", "マ", "ま"),
    kana("ﾐ", "ミ", "み", "ﾐ", "ミ", "み"),
    kana("ﾑ", "ム", "む", "ﾑ", "ム", "む"),
    kana("ﾒ", "メ", "め", "ﾒ", "メ", "め"),
    kana("ﾓ", "モ", "も", "ﾓ", "モ", "も"),
    kana("ﾔ", "ヤ", "や", "ﾔ", "ヤ", "や"),
    kana("ﾕ", "ユ", "ゆ", "ﾕ", "ユ", "ゆ"),
    kana("ﾖ", "ヨ", "よ", "ﾖ", "ヨ", "よ"),
    kana("ﾗ", "ラ", "ら", "ﾗ", "ラ", "ら"),
    kana("ﾘ", "リ", "り", "ﾘ", "リ", "り"),
    kana("ﾙ", "ル", "る", "ﾙ", "ル", "る"),
    kana("ﾚ", "レ", "れ", "ﾚ", "レ", "れ"),
    kana("ﾛ", "ロ", "ろ", "ﾛ", "ロ", "ろ"),
    kana("ﾜ", "ワ", "わ", "ﾜ", "ワ", "わ"),
    kana("ｦ", "ヲ", "を", "ｦ", "ヲ", "を"),
    kana("ﾝ", "ン", "ん", "ﾝ", "ン", "ん"),
    // Small kana
    kana("ｧ", "ァ", "ぁ", "ｧ", "ァ", "ぁ"),
    kana("ｨ", "ィ", "ぃ", "ｨ", "ィ", "ぃ"),
    kana("ｩ", "ゥ", "ぅ", "ｩ", "ゥ", "ぅ"),
    kana("ｪ", "ェ", "ぇ", "ｪ", "ェ", "ぇ"),
    kana("ｫ", "ォ", "ぉ", "ｫ", "ォ", "ぉ"),
    kana("ｯ", "ッ", "っ", "ｯ", "ッ", "っ"),
    kana("ｬ", "ャ", "ゃ", "ｬ", "ャ", "ゃ"),
    kana("ｭ", "ュ", "ゅ", "ｭ", "ュ", "ゅ"),
    kana("ｮ", "ョ", "ょ", "ｮ", "ョ", "ょ"),
];

/// Latin letter rows, a through z.
static LETTERS: &[LetterRow] = &[
    letter("a", "A", "ａ", "Ａ"),
    letter("b", "B", "ｂ", "Ｂ"),
    letter("c", "C", "ｃ", "Ｃ"),
    letter("d", "D", "ｄ", "Ｄ"),
    letter("e", "E", "ｅ", "Ｅ"),
    letter("f", "F", "ｆ", "Ｆ"),
    letter("g", "G", "ｇ", "Ｇ"),
    letter("h", "H", "ｈ", "Ｈ"),
    letter("i", "I", "ｉ", "Ｉ"),
    letter("j", "J", "ｊ", "Ｊ"),
    letter("k", "K", "ｋ", "Ｋ"),
    letter("l", "L", "ｌ", "Ｌ"),
    letter("m", "M", "ｍ", "Ｍ"),
    letter("n", "N", "ｎ", "Ｎ"),
    letter("o", "O", "ｏ", "Ｏ"),
    letter("p", "P", "ｐ", "Ｐ"),
    letter("q", "Q", "ｑ", "Ｑ"),
    letter("r", "R", "ｒ", "Ｒ"),
    letter("s", "S", "ｓ", "Ｓ"),
    letter("t", "T", "ｔ", "Ｔ"),
    letter("u", "U", "ｕ", "Ｕ"),
    letter("v", "V", "ｖ", "Ｖ"),
    letter("w", "W", "ｗ", "Ｗ"),
    letter("x", "X", "ｘ", "Ｘ"),
    letter("y", "Y", "ｙ", "Ｙ"),
    letter("z", "Z", "ｚ", "Ｚ"),
];

/// Digit rows, 0 through 9.
static DIGITS: &[WidthRow] = &[
    pair("0", "０"),
    pair("1", "１"),
    pair("2", "２"),
    pair("3", "３"),
    pair("4", "４"),
    pair("5", "５"),
    pair("6", "６"),
    pair("7", "７"),
    pair("8", "８"),
    pair("9", "９"),
];

/// Sign rows. Several halfwidth signs have more than one fullwidth form
/// (and the ideographic full stop 。 shares a fullwidth target with `.`),
/// so some sources repeat across rows; the earlier row wins.
static SIGNS: &[WidthRow] = &[
    pair("!", "！"),
    pair("\"", "”"),
    pair("#", "＃"),
    pair("$", "＄"),
    pair("%", "％"),
    pair("&", "＆"),
    pair("'", "’"),
    pair("'", "‘"),
    pair("(", "（"),
    pair(")", "）"),
    pair("*", "＊"),
    pair("+", "＋"),
    pair(",", "，"),
    pair(",", "、"),
    pair("-", "－"),
    pair("-", "ー"),
    pair(".", "．"),
    pair("。", "．"),
    pair("/", "／"),
    pair("/", "・"),
    pair(":", "："),
    pair(";", "；"),
    pair("<", "＜"),
    pair("=", "＝"),
    pair(">", "＞"),
    pair("?", "？"),
    pair("@", "＠"),
    pair("[", "［"),
    pair("\\", "＼"),
    pair("\\", "￥"),
    pair("]", "］"),
    pair("^", "＾"),
    pair("_", "＿"),
    pair("`", "｀"),
    pair("{", "｛"),
    pair("|", "｜"),
    pair("}", "｝"),
    pair("~", "～"),
    pair("~", "￣"),
];

/// The single space row.
static SPACES: &[WidthRow] = &[
    pair(" ", "　"),
];
