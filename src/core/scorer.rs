pub use crate::domain::model::Score;
use serde::Serialize;

/// 每個字元只會落入其中一類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CharClass {
    Japanese,
    HalfWidthKatakana,
    AsciiLetter,
    AsciiDigit,
    Punctuation,
    Emoji,
    /// 其餘可列印 ASCII，不加分也不扣分
    OtherAscii,
    Unrecognized,
}

impl CharClass {
    pub fn weight(self) -> Score {
        match self {
            CharClass::Japanese => 3,
            CharClass::HalfWidthKatakana => 2,
            CharClass::AsciiLetter => 2,
            CharClass::AsciiDigit => 1,
            CharClass::Punctuation => 1,
            CharClass::Emoji => 5,
            CharClass::OtherAscii => 0,
            CharClass::Unrecognized => -5,
        }
    }
}

const PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', '。', '、', '！', '？', '-', '+', '*', '/', '=', '(', ')', '[', ']', '{',
    '}', '<', '>', '@', '#', '$', '%', '^', '&', '~', '_',
];

fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

pub fn classify(c: char) -> CharClass {
    match c {
        '\u{3041}'..='\u{3093}'
        | '\u{30A1}'..='\u{30F6}'
        | '\u{30FC}'
        | '\u{4E00}'..='\u{9FAF}' => CharClass::Japanese,
        '\u{FF66}'..='\u{FF9F}' => CharClass::HalfWidthKatakana,
        'a'..='z' | 'A'..='Z' => CharClass::AsciiLetter,
        '0'..='9' => CharClass::AsciiDigit,
        c if PUNCTUATION.contains(&c) || is_space(c) => CharClass::Punctuation,
        '\u{1F300}'..='\u{1FAFF}' => CharClass::Emoji,
        '\u{20}'..='\u{7E}' => CharClass::OtherAscii,
        _ => CharClass::Unrecognized,
    }
}

/// 各類字元的數量
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub japanese: usize,
    pub half_width_katakana: usize,
    pub ascii_letters: usize,
    pub ascii_digits: usize,
    pub punctuation: usize,
    pub emoji: usize,
    pub other_ascii: usize,
    pub unrecognized: usize,
}

impl ScoreBreakdown {
    pub fn of(text: &str) -> Self {
        let mut breakdown = Self::default();
        for c in text.chars() {
            let slot = match classify(c) {
                CharClass::Japanese => &mut breakdown.japanese,
                CharClass::HalfWidthKatakana => &mut breakdown.half_width_katakana,
                CharClass::AsciiLetter => &mut breakdown.ascii_letters,
                CharClass::AsciiDigit => &mut breakdown.ascii_digits,
                CharClass::Punctuation => &mut breakdown.punctuation,
                CharClass::Emoji => &mut breakdown.emoji,
                CharClass::OtherAscii => &mut breakdown.other_ascii,
                CharClass::Unrecognized => &mut breakdown.unrecognized,
            };
            *slot += 1;
        }
        breakdown
    }

    pub fn total(&self) -> Score {
        [
            (self.japanese, CharClass::Japanese),
            (self.half_width_katakana, CharClass::HalfWidthKatakana),
            (self.ascii_letters, CharClass::AsciiLetter),
            (self.ascii_digits, CharClass::AsciiDigit),
            (self.punctuation, CharClass::Punctuation),
            (self.emoji, CharClass::Emoji),
            (self.other_ascii, CharClass::OtherAscii),
            (self.unrecognized, CharClass::Unrecognized),
        ]
        .iter()
        .map(|(count, class)| *count as Score * class.weight())
        .sum()
    }
}

/// 計算「像自然文字」的分數，可能為負數
pub fn score(text: &str) -> Score {
    text.chars().map(|c| classify(c).weight()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_japanese_text() {
        assert_eq!(score("こんにちは"), 15);
        assert_eq!(score("カタカナー"), 15);
        assert_eq!(score("漢字"), 6);
    }

    #[test]
    fn test_ascii_classes() {
        assert_eq!(score("abc"), 6);
        assert_eq!(score("123"), 3);
        assert_eq!(score("a b"), 5);
        // ':' 是可列印 ASCII 但不在符號表內
        assert_eq!(score(":;"), 0);
    }

    #[test]
    fn test_half_width_and_emoji() {
        assert_eq!(score("ｶﾀ"), 4);
        assert_eq!(score("😀"), 5);
        assert_eq!(score("。！"), 2);
    }

    #[test]
    fn test_unrecognized_characters_are_penalized() {
        assert_eq!(score("\u{0}"), -5);
        assert_eq!(score("\u{E000}\u{E001}"), -10);
        // 表外的 CJK 擴充區字元也扣分
        assert_eq!(score("\u{3400}"), -5);
        assert_eq!(score("a\u{7F}"), -3);
    }

    #[test]
    fn test_control_separators_count_as_whitespace() {
        assert_eq!(classify('\u{1C}'), CharClass::Punctuation);
        assert_eq!(classify('\t'), CharClass::Punctuation);
        assert_eq!(classify('\u{3000}'), CharClass::Punctuation);
    }

    #[test]
    fn test_breakdown_total_matches_score() {
        let text = "Hello, 世界! ｶﾅ 😀\u{1}:";
        let breakdown = ScoreBreakdown::of(text);
        assert_eq!(breakdown.ascii_letters, 5);
        assert_eq!(breakdown.japanese, 2);
        assert_eq!(breakdown.half_width_katakana, 2);
        assert_eq!(breakdown.emoji, 1);
        assert_eq!(breakdown.unrecognized, 1);
        assert_eq!(breakdown.other_ascii, 1);
        assert_eq!(breakdown.total(), score(text));
    }

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(score(""), 0);
    }
}
