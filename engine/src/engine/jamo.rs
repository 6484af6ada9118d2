// engine/src/engine/jamo.rs
#![forbid(unsafe_code)]

/// First code point of the precomposed Hangeul syllable block (U+AC00, '가').
pub const SYLLABLE_BASE: u32 = 0xAC00;

/// Number of precomposed syllables: 19 initials * 21 vowels * 28 finals.
pub const SYLLABLE_COUNT: u32 = 11_172;

const JONG_RADIX: u32 = 28;
const JUNG_RADIX: u32 = 21;

/// Initial consonants (choseong), in code-point order.
pub const CHO: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Medial vowels (jungseong), in code-point order.
pub const JUNG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ',
    'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Final consonants (jongseong) for radix digits 1..28; digit 0 means
/// "no final consonant" and has no table entry.
pub const JONG: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ',
    'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// The 14 plain consonants a grid cell can hold.
pub const GRID_CONSONANTS: [char; 14] = [
    'ㄱ', 'ㄴ', 'ㄷ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅅ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Phonetic components of one syllable character. Transient: produced per
/// character during word processing, never stored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Syllable {
    pub cho: char,
    pub jung: char,
    pub jong: Option<char>,
}

/// Split a precomposed syllable into (initial, vowel, optional final).
///
/// The offset from `SYLLABLE_BASE` is a mixed-radix number decoded
/// least-significant digit first: final (radix 28), vowel (radix 21),
/// initial (radix 19).
///
/// Returns `None` for any character outside the syllable block. That is the
/// sole failure mode and it is not an error: callers abort processing of the
/// current character.
pub fn decompose(ch: char) -> Option<Syllable> {
    let off = (ch as u32).checked_sub(SYLLABLE_BASE)?;
    if off >= SYLLABLE_COUNT {
        return None;
    }

    let jong_idx = (off % JONG_RADIX) as usize;
    let jung_idx = ((off / JONG_RADIX) % JUNG_RADIX) as usize;
    let cho_idx = (off / (JONG_RADIX * JUNG_RADIX)) as usize;

    Some(Syllable {
        cho: CHO[cho_idx],
        jung: JUNG[jung_idx],
        jong: if jong_idx == 0 {
            None
        } else {
            Some(JONG[jong_idx - 1])
        },
    })
}

/// Inverse of `decompose`: rebuild the syllable character from table indices.
/// `jong_idx` 0 means "no final". Returns `None` for out-of-range indices.
pub fn compose(cho_idx: usize, jung_idx: usize, jong_idx: usize) -> Option<char> {
    if cho_idx >= CHO.len() || jung_idx >= JUNG.len() || jong_idx > JONG.len() {
        return None;
    }
    let off =
        (cho_idx as u32) * JUNG_RADIX * JONG_RADIX + (jung_idx as u32) * JONG_RADIX + jong_idx as u32;
    char::from_u32(SYLLABLE_BASE + off)
}

/// Displacement driven by the medial vowel.
///
/// Simple vowels step 1 cell, the "doubled" diphthongs (ㅑ ㅕ ㅛ ㅠ) step 2,
/// ㅘ and ㅝ step 1 diagonally. Every other vowel has no directional
/// semantic and yields a zero vector.
pub fn vowel_delta(jung: char) -> (i32, i32) {
    match jung {
        'ㅏ' | 'ㅐ' => (1, 0),
        'ㅑ' => (2, 0),
        'ㅓ' | 'ㅔ' => (-1, 0),
        'ㅕ' => (-2, 0),
        'ㅗ' | 'ㅚ' => (0, -1),
        'ㅛ' => (0, -2),
        'ㅜ' | 'ㅟ' => (0, 1),
        'ㅠ' => (0, 2),
        'ㅘ' => (1, -1),
        'ㅝ' => (-1, 1),
        _ => (0, 0),
    }
}
