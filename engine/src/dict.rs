// engine/src/dict.rs
#![forbid(unsafe_code)]

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictError {
    #[error("failed to read dictionary file: {0}")]
    Io(#[from] std::io::Error),
    #[error("dictionary is not a JSON string array: {0}")]
    Json(#[from] serde_json::Error),
}

/// Default word list, shipped with the engine so play works without any
/// dictionary file. Entries shorter than MIN_WORD_CHARS are tolerated here;
/// the solver filters them, so they can never be offered as solutions.
const BUILTIN_WORDS: &[&str] = &[
    "물살", "북쪽", "학기", "과학", "물학", "수박", "학교", "바다", "축구", "사자", "기차",
    "하늘", "포도", "모자", "나무", "나비", "우유", "아이", "오이", "강물", "구름", "별빛",
    "달빛", "햇살", "바람", "소리", "노래", "그림", "편지", "친구", "사랑", "행복", "미소",
    "기쁨", "슬픔", "용기", "희망", "사과", "참외", "딸기", "수박", "포도", "귤", "오렌지",
    "바나나", "망고", "레몬", "라임", "키위", "자두", "복숭아", "앵두", "보리", "벼", "한국",
    "서울", "부산", "대구", "인천", "광주", "대전", "울산", "세종", "경기", "강원", "충북",
    "충남", "전북", "전남", "경북", "경남", "제주",
];

/// Ordered, immutable candidate-word list. Supplied once at startup and
/// treated as read-only; iteration order is the order solutions are reported
/// in.
#[derive(Clone, Debug)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    pub fn from_words(words: Vec<String>) -> Self {
        Self { words }
    }

    /// The built-in default list.
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Load a JSON string array — the `dict_build` output format.
    pub fn from_json_path(path: &Path) -> Result<Self, DictError> {
        let file = File::open(path)?;
        let words: Vec<String> = serde_json::from_reader(BufReader::new(file))?;
        Ok(Self { words })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
