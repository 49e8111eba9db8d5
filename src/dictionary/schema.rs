//! Typed shapes of the three dictionary endpoints.
//!
//! Every field is optional: the service omits keys and sends `null` freely, and
//! an absent field is treated the same as an empty one. Unknown keys are
//! ignored.

use serde::Deserialize;

/// One element of the `gts` lookup response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntry {
    pub madde: Option<String>,
    pub birlesikler: Option<String>,
    pub atasozu: Option<Vec<Idiom>>,
    #[serde(rename = "anlamlarListe")]
    pub anlamlar_liste: Option<Vec<Meaning>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Idiom {
    pub madde: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meaning {
    pub anlam: Option<String>,
    #[serde(rename = "ozelliklerListe")]
    pub ozellikler_liste: Option<Vec<Property>>,
    #[serde(rename = "orneklerListe")]
    pub ornekler_liste: Option<Vec<Example>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Property {
    pub tam_adi: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Example {
    pub ornek: Option<String>,
}

/// One element of the `yazim` spelling response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpellingRecord {
    pub seskod: Option<String>,
}

/// One element of the `oneri` suggestion response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Suggestion {
    pub madde: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl RawEntry {
    pub fn headword(&self) -> &str {
        self.madde.as_deref().unwrap_or_default()
    }

    pub fn compound_nouns(&self) -> Option<&str> {
        non_empty(&self.birlesikler)
    }

    pub fn idioms(&self) -> &[Idiom] {
        self.atasozu.as_deref().unwrap_or_default()
    }

    pub fn meanings(&self) -> &[Meaning] {
        self.anlamlar_liste.as_deref().unwrap_or_default()
    }
}

impl Idiom {
    pub fn headword(&self) -> Option<&str> {
        non_empty(&self.madde)
    }
}

impl Meaning {
    pub fn definition(&self) -> Option<&str> {
        non_empty(&self.anlam)
    }

    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.ozellikler_liste
            .iter()
            .flatten()
            .filter_map(|p| non_empty(&p.tam_adi))
    }

    pub fn examples(&self) -> impl Iterator<Item = &str> {
        self.ornekler_liste
            .iter()
            .flatten()
            .filter_map(|e| non_empty(&e.ornek))
    }
}

impl SpellingRecord {
    pub fn audio_code(&self) -> Option<&str> {
        non_empty(&self.seskod)
    }
}
