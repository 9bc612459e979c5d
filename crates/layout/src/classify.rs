//! Character classes used by the Chinese spacing rules.

/// Punctuation that opens a quotation or bracket and hugs the character after it.
const OPENING_PUNCTUATION: &[char] = &['‘', '“', '（', '【', '《'];

/// Punctuation that closes a clause, quotation or bracket and hugs the character before it.
const CLOSING_PUNCTUATION: &[char] = &[
    '，', '。', '、', '；', '：', '？', '！', '’', '”', '）', '】', '》',
];

/// Ellipsis, dash and interpunct marks. They also hug the preceding character.
const MIDDLE_PUNCTUATION: &[char] = &['…', '.', '·', '—', '⸺'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    OpeningPunctuation,
    ClosingPunctuation,
    MiddlePunctuation,
    ChineseIdeograph,
    LatinOrAlnum,
    Other,
}

pub fn classify(c: char) -> CharClass {
    if is_opening(c) {
        CharClass::OpeningPunctuation
    } else if is_closing(c) {
        CharClass::ClosingPunctuation
    } else if MIDDLE_PUNCTUATION.contains(&c) {
        CharClass::MiddlePunctuation
    } else if is_ideograph(c) {
        CharClass::ChineseIdeograph
    } else if is_latin(c) {
        CharClass::LatinOrAlnum
    } else {
        CharClass::Other
    }
}

/// CJK Unified Ideographs block.
pub fn is_ideograph(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

pub fn is_opening(c: char) -> bool {
    OPENING_PUNCTUATION.contains(&c)
}

pub fn is_closing(c: char) -> bool {
    CLOSING_PUNCTUATION.contains(&c)
}

/// Closing or middle punctuation.
pub fn is_following(c: char) -> bool {
    is_closing(c) || MIDDLE_PUNCTUATION.contains(&c)
}

/// ASCII letters and digits, the space and ASCII brackets. A Chinese character next to
/// one of these gets a half-width gap.
pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '(' | '[' | '{' | '<' | ')' | ']' | '}' | '>')
}
