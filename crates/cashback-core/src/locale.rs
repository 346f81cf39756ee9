//! Language-specific data used by the extraction pipeline.
//!
//! The algorithmic shape of the pipeline is language-agnostic; everything
//! that is actually Russian lives in a [`LocaleProfile`] so callers can swap
//! in another language without touching the pipeline itself. The shipped
//! default targets the Russian/Latin alphabet mix produced by OCR on
//! Russian bank-app screenshots.

use serde::{Deserialize, Serialize};

/// Swappable language tables for the extraction pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleProfile {
    /// Tokens dropped from category names: prepositions, conjunctions,
    /// currency/amount words and generic summary words.
    pub stopwords: Vec<String>,

    /// Filler words ("more detail" / "further") removed wherever they
    /// appear in a category name.
    pub detail_words: Vec<String>,

    /// Suffixes of comparative/adverbial noise words. A token ending in one
    /// of these is dropped. Heuristic, not morphology: a real category word
    /// with such an ending is lost too.
    pub noise_suffixes: Vec<String>,

    /// Connector words linking a percent to the category it applies to
    /// ("5% на АЗС", "5% для АЗС"). Each connector yields one surface
    /// pattern.
    pub connectors: Vec<String>,
}

impl Default for LocaleProfile {
    fn default() -> Self {
        Self::russian()
    }
}

impl LocaleProfile {
    /// The shipped Russian profile.
    pub fn russian() -> Self {
        Self {
            stopwords: RUSSIAN_STOPWORDS.iter().map(|s| s.to_string()).collect(),
            detail_words: vec!["подробнее".to_string(), "далее".to_string()],
            noise_suffixes: vec!["ее".to_string(), "ше".to_string(), "ще".to_string()],
            connectors: vec!["на".to_string(), "для".to_string()],
        }
    }
}

/// Stopwords removed from extracted category names.
const RUSSIAN_STOPWORDS: &[&str] = &[
    "подробнее",
    "далее",
    "еще",
    "больше",
    "всего",
    "итого",
    "сумма",
    "бонус",
    "кешбек",
    "накопления",
    "процент",
    "%",
    "руб",
    "рублей",
    "коп",
    "копеек",
    "до",
    "от",
    "с",
    "по",
    "на",
    "за",
    "в",
    "во",
    "к",
    "ко",
    "о",
    "об",
    "обо",
    "при",
    "про",
    "со",
    "из",
    "изо",
    "над",
    "под",
    "подо",
    "перед",
    "передо",
    "зао",
    "между",
    "среди",
    "через",
    "сквозь",
    "для",
    "ради",
    "благодаря",
    "согласно",
    "вопреки",
    "навстречу",
    "наподобие",
    "вроде",
    "вследствие",
    "ввиду",
    "вслед",
    "вместо",
    "кроме",
    "сверх",
    "около",
    "возле",
    "близ",
    "вдоль",
    "вокруг",
    "против",
    "напротив",
    "позади",
    "впереди",
    "сверху",
    "снизу",
    "внутри",
    "снаружи",
    "вне",
    "внутрь",
    "наружу",
    "вверх",
    "вниз",
    "вперед",
    "назад",
    "влево",
    "вправо",
    "налево",
    "направо",
    "туда",
    "сюда",
    "оттуда",
    "отсюда",
    "везде",
    "всюду",
    "нигде",
    "никуда",
    "никогда",
    "всегда",
    "иногда",
    "часто",
    "редко",
];
