//! Site locales and bilingual text
//!
//! Every translatable element carries an English and an Arabic variant. The
//! active [`Locale`] picks which one is displayed and drives the document's
//! text direction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing a locale code outside the supported set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("unsupported locale code '{0}'")]
    Unsupported(String),
}

/// Supported display languages
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn direction(&self) -> TextDirection {
        match self {
            Locale::Ar => TextDirection::Rtl,
            Locale::En => TextDirection::Ltr,
        }
    }

    /// Label shown on the language selector button
    pub fn selector_label(&self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Ar => "عربي",
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            other => Err(LocaleError::Unsupported(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Value of the document `dir` attribute
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// Owned text in both site languages
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub ar: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Ar => &self.ar,
        }
    }

    /// The variant for `locale`, or `None` when that variant is empty
    pub fn resolve(&self, locale: Locale) -> Option<&str> {
        Some(self.get(locale)).filter(|text| !text.is_empty())
    }

    /// Text to display for `locale`.
    ///
    /// An element whose variant is missing keeps showing the other language
    /// instead of going blank.
    pub fn display(&self, locale: Locale) -> &str {
        self.resolve(locale)
            .or_else(|| self.resolve(Locale::En))
            .or_else(|| self.resolve(Locale::Ar))
            .unwrap_or_default()
    }
}

/// Static UI phrase in both site languages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phrase {
    pub en: &'static str,
    pub ar: &'static str,
}

impl Phrase {
    pub const fn new(en: &'static str, ar: &'static str) -> Self {
        Self { en, ar }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Ar => self.ar,
        }
    }
}

pub mod phrases {
    use super::Phrase;

    pub const SUBSCRIBING: Phrase = Phrase::new("Subscribing...", "جارٍ الإرسال...");
    pub const CLOSE: Phrase = Phrase::new("Close", "إغلاق");
    pub const STORY_TITLE: Phrase = Phrase::new("The Junction Story", "قصة ذا جانكشن");
    pub const STORY_DESCRIPTION: Phrase = Phrase::new(
        "Discover how The Junction Dubai became a vibrant performing arts space made by performers for performers. A creative journey celebrating local and regional talent.",
        "اكتشف كيف أصبح ذا جانكشن دبي مساحة فنون أداء نابضة بالحياة صُنعت من قِبل الفنانين للفنانين. رحلة إبداعية تحتفل بالمواهب المحلية والإقليمية.",
    );
    pub const STORY_NOTICE: Phrase = Phrase::new(
        "🎬 Video Coming Soon - We're creating amazing content for you!",
        "🎬 الفيديو قريباً - نعمل على إنتاج محتوى رائع لك!",
    );
}

/// Active locale plus a counter of switches.
///
/// The counter lets a delayed follow-up (removing the transition class)
/// detect that a newer switch has happened since it was scheduled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocaleState {
    locale: Locale,
    switches: u64,
}

impl LocaleState {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            switches: 0,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switch locale and return the ticket of this switch
    pub fn switch_to(&mut self, locale: Locale) -> u64 {
        self.locale = locale;
        self.switches += 1;
        self.switches
    }

    /// Whether `ticket` belongs to the most recent switch
    pub fn is_latest(&self, ticket: u64) -> bool {
        self.switches == ticket
    }
}
