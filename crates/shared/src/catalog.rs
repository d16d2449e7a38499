//! Static language catalogue, the family list derived from it, and the
//! family filter used by the catalogue view.

use std::{convert::Infallible, fmt, str::FromStr, sync::OnceLock};

use serde::Serialize;

use crate::domain::LanguageId;

pub const ALL_FAMILIES: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageRecord {
    pub id: LanguageId,
    pub name: &'static str,
    pub native: &'static str,
    pub family: &'static str,
    pub characteristics: &'static [&'static str],
}

macro_rules! language {
    ($id:expr, $name:expr, $native:expr, $family:expr, [$($feature:expr),* $(,)?]) => {
        LanguageRecord {
            id: LanguageId($id),
            name: $name,
            native: $native,
            family: $family,
            characteristics: &[$($feature),*],
        }
    };
}

pub static LANGUAGES: [LanguageRecord; 22] = [
    language!(0, "Arabic", "العربية", "Afro-Asiatic", [
        "Arabic script",
        "Diglossia",
        "Root-and-pattern morphology",
    ]),
    language!(1, "Chinese", "中文", "Sino-Tibetan", [
        "Logographic script",
        "Tonal language",
        "Classifier system",
    ]),
    language!(2, "Dutch", "Nederlands", "Indo-European", [
        "Latin alphabet",
        "Grammatical gender (common/neuter)",
        "V2 word order in main clauses",
    ]),
    language!(3, "English", "English", "Indo-European", [
        "Latin alphabet",
        "Relatively fixed word order",
        "Analytic language",
    ]),
    language!(4, "Estonian", "eesti", "Uralic", [
        "Latin alphabet",
        "Agglutinative language",
        "No grammatical gender",
    ]),
    language!(5, "French", "français", "Indo-European", [
        "Latin alphabet",
        "Grammatical gender (masculine/feminine)",
        "Verb conjugations",
    ]),
    language!(6, "Hindi", "हिन्दी", "Indo-European", [
        "Devanagari script",
        "Agglutinative features",
        "Postpositions",
    ]),
    language!(7, "Indonesian", "Bahasa Indonesia", "Austronesian", [
        "Latin alphabet",
        "Relatively simple grammar",
        "Reduplication",
    ]),
    language!(8, "Japanese", "日本語", "Japonic", [
        "Three writing systems (kanji, hiragana, katakana)",
        "Agglutinative language",
        "Subject-object-verb word order",
    ]),
    language!(9, "Korean", "한국어", "Koreanic", [
        "Hangul script",
        "Agglutinative language",
        "Subject-object-verb word order",
    ]),
    language!(10, "Latin", "Latina", "Indo-European", [
        "Latin alphabet",
        "Highly inflected language",
        "Grammatical cases",
    ]),
    language!(11, "Persian", "فارسی", "Indo-European", [
        "Perso-Arabic script",
        "Analytic tendencies",
        "Postpositions",
    ]),
    language!(12, "Portuguese", "Português", "Indo-European", [
        "Latin alphabet",
        "Verb conjugations",
        "Grammatical gender (masculine/feminine)",
    ]),
    language!(13, "Pashto", "پښتو", "Indo-European", [
        "Perso-Arabic script",
        "Agglutinative features",
        "Complex verb system",
    ]),
    language!(14, "Romanian", "română", "Indo-European", [
        "Latin alphabet",
        "Grammatical gender (masculine/feminine/neuter)",
        "Verb conjugations",
    ]),
    language!(15, "Russian", "русский язык", "Indo-European", [
        "Cyrillic script",
        "Highly inflected language",
        "Grammatical gender (masculine/feminine/neuter)",
    ]),
    language!(16, "Spanish", "Español", "Indo-European", [
        "Latin alphabet",
        "Grammatical gender (masculine/feminine)",
        "Verb conjugations",
    ]),
    language!(17, "Swedish", "svenska", "Indo-European", [
        "Latin alphabet",
        "Grammatical gender (common/neuter)",
        "V2 word order",
    ]),
    language!(18, "Tamil", "தமிழ்", "Dravidian", [
        "Tamil script",
        "Agglutinative language",
        "Complex honorifics",
    ]),
    language!(19, "Thai", "ไทย", "Kra-Dai", [
        "Thai script",
        "Tonal system",
        "No spaces between words",
    ]),
    language!(20, "Turkish", "Türkçe", "Turkic", [
        "Latin alphabet",
        "Agglutinative language",
        "Vowel harmony",
    ]),
    language!(21, "Urdu", "اردو", "Indo-European", [
        "Perso-Arabic script",
        "Agglutinative features",
        "Postpositions",
    ]),
];

/// Labels the classification service has emitted that differ from the
/// catalogue's display names.
const PREDICTION_LABEL_ALIASES: &[(&str, &str)] =
    &[("Portugese", "Portuguese"), ("Pushto", "Pashto")];

/// Read-only view over a fixed catalogue plus its derived family list.
#[derive(Debug)]
pub struct TaxonomyStore {
    records: &'static [LanguageRecord],
    families: Vec<&'static str>,
}

impl TaxonomyStore {
    pub fn new(records: &'static [LanguageRecord]) -> Self {
        let mut families = vec![ALL_FAMILIES];
        for record in records {
            if !families[1..].contains(&record.family) {
                families.push(record.family);
            }
        }
        Self { records, families }
    }

    /// The built-in 22-language catalogue, initialised on first use.
    pub fn builtin() -> &'static TaxonomyStore {
        static STORE: OnceLock<TaxonomyStore> = OnceLock::new();
        STORE.get_or_init(|| TaxonomyStore::new(&LANGUAGES))
    }

    pub fn all_languages(&self) -> &'static [LanguageRecord] {
        self.records
    }

    /// `"All"` followed by each distinct family in first-occurrence order.
    pub fn families(&self) -> &[&'static str] {
        &self.families
    }

    pub fn find_by_id(&self, id: LanguageId) -> Option<&'static LanguageRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn filter(&self, selection: &FamilySelection) -> Vec<&'static LanguageRecord> {
        filter_languages(selection, self.records)
    }

    pub fn count_for_family(&self, selection: &FamilySelection) -> usize {
        self.records
            .iter()
            .filter(|record| selection.matches(record.family))
            .count()
    }

    /// Maps a label returned by the classification service onto a catalogue
    /// entry, ignoring ASCII case and surrounding whitespace.
    pub fn resolve_prediction(&self, label: &str) -> Option<&'static LanguageRecord> {
        let label = label.trim();
        let canonical = PREDICTION_LABEL_ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(label))
            .map(|(_, name)| *name)
            .unwrap_or(label);
        self.records
            .iter()
            .find(|record| record.name.eq_ignore_ascii_case(canonical))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FamilySelection {
    #[default]
    All,
    Family(String),
}

impl FamilySelection {
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_FAMILIES {
            Self::All
        } else {
            Self::Family(raw.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_FAMILIES,
            Self::Family(family) => family,
        }
    }

    pub fn matches(&self, family: &str) -> bool {
        match self {
            Self::All => true,
            Self::Family(selected) => selected == family,
        }
    }
}

impl FromStr for FamilySelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for FamilySelection {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for FamilySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Records visible under `selection`, in catalogue order. A family that no
/// record carries yields an empty list.
pub fn filter_languages<'a>(
    selection: &FamilySelection,
    records: &'a [LanguageRecord],
) -> Vec<&'a LanguageRecord> {
    records
        .iter()
        .filter(|record| selection.matches(record.family))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Hue {
    Blue,
    Green,
    Yellow,
    Purple,
    Pink,
    Orange,
    Cyan,
    Rose,
    Indigo,
    Amber,
    Gray,
}

impl Hue {
    fn name(self) -> &'static str {
        match self {
            Hue::Blue => "blue",
            Hue::Green => "green",
            Hue::Yellow => "yellow",
            Hue::Purple => "purple",
            Hue::Pink => "pink",
            Hue::Orange => "orange",
            Hue::Cyan => "cyan",
            Hue::Rose => "rose",
            Hue::Indigo => "indigo",
            Hue::Amber => "amber",
            Hue::Gray => "gray",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Shade {
    S100,
    S300,
    S500,
}

impl Shade {
    fn weight(self) -> u16 {
        match self {
            Shade::S100 => 100,
            Shade::S300 => 300,
            Shade::S500 => 500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorToken {
    pub hue: Hue,
    pub shade: Shade,
}

impl ColorToken {
    pub const fn new(hue: Hue, shade: Shade) -> Self {
        Self { hue, shade }
    }

    /// sRGB value of the token.
    pub fn rgb(self) -> [u8; 3] {
        let hex: u32 = match (self.hue, self.shade) {
            (Hue::Blue, Shade::S100) => 0xdbeafe,
            (Hue::Blue, Shade::S300) => 0x93c5fd,
            (Hue::Blue, Shade::S500) => 0x3b82f6,
            (Hue::Green, Shade::S100) => 0xdcfce7,
            (Hue::Green, Shade::S300) => 0x86efac,
            (Hue::Green, Shade::S500) => 0x22c55e,
            (Hue::Yellow, Shade::S100) => 0xfef9c3,
            (Hue::Yellow, Shade::S300) => 0xfde047,
            (Hue::Yellow, Shade::S500) => 0xeab308,
            (Hue::Purple, Shade::S100) => 0xf3e8ff,
            (Hue::Purple, Shade::S300) => 0xd8b4fe,
            (Hue::Purple, Shade::S500) => 0xa855f7,
            (Hue::Pink, Shade::S100) => 0xfce7f3,
            (Hue::Pink, Shade::S300) => 0xf9a8d4,
            (Hue::Pink, Shade::S500) => 0xec4899,
            (Hue::Orange, Shade::S100) => 0xffedd5,
            (Hue::Orange, Shade::S300) => 0xfdba74,
            (Hue::Orange, Shade::S500) => 0xf97316,
            (Hue::Cyan, Shade::S100) => 0xcffafe,
            (Hue::Cyan, Shade::S300) => 0x67e8f9,
            (Hue::Cyan, Shade::S500) => 0x06b6d4,
            (Hue::Rose, Shade::S100) => 0xffe4e6,
            (Hue::Rose, Shade::S300) => 0xfda4af,
            (Hue::Rose, Shade::S500) => 0xf43f5e,
            (Hue::Indigo, Shade::S100) => 0xe0e7ff,
            (Hue::Indigo, Shade::S300) => 0xa5b4fc,
            (Hue::Indigo, Shade::S500) => 0x6366f1,
            (Hue::Amber, Shade::S100) => 0xfef3c7,
            (Hue::Amber, Shade::S300) => 0xfcd34d,
            (Hue::Amber, Shade::S500) => 0xf59e0b,
            (Hue::Gray, Shade::S100) => 0xf3f4f6,
            (Hue::Gray, Shade::S300) => 0xd1d5db,
            (Hue::Gray, Shade::S500) => 0x6b7280,
        };
        [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8]
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.hue.name(), self.shade.weight())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardColor {
    pub fill: ColorToken,
    pub border: ColorToken,
}

fn family_hue(family: &str) -> Hue {
    match family {
        "Indo-European" => Hue::Blue,
        "Sino-Tibetan" => Hue::Green,
        "Afro-Asiatic" => Hue::Yellow,
        "Japonic" => Hue::Purple,
        "Koreanic" => Hue::Pink,
        "Kra-Dai" => Hue::Orange,
        "Uralic" => Hue::Cyan,
        "Austronesian" => Hue::Rose,
        "Dravidian" => Hue::Indigo,
        "Turkic" => Hue::Amber,
        _ => Hue::Gray,
    }
}

pub fn card_color_for_family(family: &str) -> CardColor {
    let hue = family_hue(family);
    CardColor {
        fill: ColorToken::new(hue, Shade::S100),
        border: ColorToken::new(hue, Shade::S300),
    }
}

pub fn badge_color_for_family(family: &str) -> ColorToken {
    ColorToken::new(family_hue(family), Shade::S500)
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
