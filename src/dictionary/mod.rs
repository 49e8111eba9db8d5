pub mod entry;
pub mod schema;
pub mod views;

use crate::audio::{self, Player};
use crate::client::{endpoint, HttpTransport, Transport};
use crate::config::{Config, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use crate::error::{Result, TdkError};
use entry::NormalizedEntry;
use schema::{RawEntry, SpellingRecord, Suggestion};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// A dictionary query for a single word.
///
/// The lookup, pronunciation and suggestion responses are each fetched at most
/// once and cached on the query. A failed fetch caches nothing, so the next
/// call tries again.
pub struct WordQuery<T = HttpTransport> {
    word: String,
    base_url: String,
    user_agent: String,
    transport: T,
    semantic_data: Option<Vec<RawEntry>>,
    audio_links: Option<Vec<String>>,
    similar_words: Option<Vec<String>>,
}

impl WordQuery<HttpTransport> {
    pub fn new(word: impl Into<String>) -> Result<Self> {
        Ok(Self::with_transport(word, HttpTransport::new(None)?))
    }

    pub fn with_config(word: impl Into<String>, config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout())?;
        Ok(Self::with_transport(word, transport)
            .base_url(&config.base_url)
            .user_agent(&config.user_agent))
    }
}

impl<T: Transport> WordQuery<T> {
    pub fn with_transport(word: impl Into<String>, transport: T) -> Self {
        Self {
            word: word.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            transport,
            semantic_data: None,
            audio_links: None,
            similar_words: None,
        }
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Fetch `url` and parse the body as JSON. Returns `None` when the body is
    /// valid JSON but not an array, which is how the service says "unknown word".
    fn fetch_array<R: DeserializeOwned>(&self, url: &str) -> Result<Option<Vec<R>>> {
        let body = self.transport.get(url, &self.user_agent)?;
        let value: Value = serde_json::from_slice(&body).map_err(|e| TdkError::network(url, e))?;
        if !value.is_array() {
            log::debug!("{} returned a non-array payload", url);
            return Ok(None);
        }
        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| TdkError::network(url, e))
    }

    /// All raw lookup entries for the word, everything except audio.
    pub fn semantic_data(&mut self) -> Result<&[RawEntry]> {
        if self.semantic_data.is_none() {
            let url = endpoint(&self.base_url, "gts", "ara", &self.word);
            let entries = self
                .fetch_array(&url)?
                .ok_or_else(|| TdkError::WordNotFound(self.word.clone()))?;
            log::debug!("'{}' has {} lookup entries", self.word, entries.len());
            self.semantic_data = Some(entries);
        }
        Ok(self.semantic_data.as_deref().unwrap_or_default())
    }

    /// Pronunciation links, one per spelling record carrying an audio code.
    pub fn audio_links(&mut self) -> Result<&[String]> {
        if self.audio_links.is_none() {
            let url = endpoint(&self.base_url, "yazim", "ara", &self.word);
            let records: Vec<SpellingRecord> = self
                .fetch_array(&url)?
                .ok_or_else(|| TdkError::NoAudio(self.word.clone()))?;
            let base = self.base_url.trim_end_matches('/');
            let links = records
                .iter()
                .filter_map(SpellingRecord::audio_code)
                .map(|code| format!("{}/ses/{}.wav", base, code))
                .collect();
            self.audio_links = Some(links);
        }
        Ok(self.audio_links.as_deref().unwrap_or_default())
    }

    /// Similar words according to the dictionary, useful as suggestions after
    /// [`TdkError::WordNotFound`].
    pub fn similar_words(&mut self) -> Result<&[String]> {
        if self.similar_words.is_none() {
            let url = endpoint(&self.base_url, "oneri", "soz", &self.word);
            let suggestions: Vec<Suggestion> = self.fetch_array(&url)?.unwrap_or_default();
            let words = suggestions
                .into_iter()
                .map(|s| s.madde.unwrap_or_default())
                .collect();
            self.similar_words = Some(words);
        }
        Ok(self.similar_words.as_deref().unwrap_or_default())
    }

    pub fn compound_nouns(&mut self) -> Result<Vec<String>> {
        self.semantic_data().map(views::compound_nouns)
    }

    pub fn expressions(&mut self) -> Result<Vec<String>> {
        self.semantic_data().map(views::expressions)
    }

    pub fn meanings(&mut self) -> Result<Vec<String>> {
        self.semantic_data().map(views::meanings)
    }

    pub fn examples(&mut self) -> Result<Vec<String>> {
        self.semantic_data().map(views::examples)
    }

    /// Entries with their definitions, examples and properties.
    pub fn entries(&mut self) -> Result<Vec<NormalizedEntry>> {
        self.semantic_data().map(entry::normalize)
    }

    /// The textual data of the word laid out like a dictionary page.
    pub fn formatted(&mut self) -> Result<String> {
        self.entries().map(|entries| entry::format(&entries))
    }

    /// Download pronunciations into `dir` as `{prefix}{word}_{i}{ext}`.
    pub fn download_audio(&mut self, dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
        self.audio_links()?;
        let links = self.audio_links.as_deref().unwrap_or_default();
        audio::download_audio(
            &self.transport,
            &self.user_agent,
            &self.word,
            links,
            dir,
            prefix,
        )
    }

    /// Play every pronunciation with `player`, one after another.
    pub fn play_pronunciations(&mut self, player: &Player) -> Result<()> {
        self.audio_links()?;
        let links = self.audio_links.as_deref().unwrap_or_default();
        audio::play_links(&self.transport, &self.user_agent, links, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Serves canned bodies keyed by URL and records every request.
    #[derive(Default)]
    struct FakeTransport {
        responses: HashMap<String, String>,
        calls: RefCell<Vec<(String, String)>>,
    }

    impl FakeTransport {
        fn respond(mut self, url: &str, body: &str) -> Self {
            self.responses.insert(url.to_string(), body.to_string());
            self
        }

        fn calls(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl Transport for FakeTransport {
        fn get(&self, url: &str, user_agent: &str) -> Result<Vec<u8>> {
            self.calls
                .borrow_mut()
                .push((url.to_string(), user_agent.to_string()));
            self.responses
                .get(url)
                .map(|body| body.clone().into_bytes())
                .ok_or_else(|| TdkError::network(url, "connection refused"))
        }
    }

    const KAYMAK: &str = r#"[{
        "madde": "kaymak",
        "birlesikler": "kaymak altı, kaymaklı",
        "atasozu": [{"madde": "kaymağını yemek"}],
        "anlamlarListe": [
            {"anlam": "Sütün üstünde toplanan yağ",
             "ozelliklerListe": [{"tam_adi": "isim"}],
             "orneklerListe": [{"ornek": "Kaymaklı ekmek."}]}
        ]
    }]"#;

    const NOT_FOUND: &str = r#"{"error": "Sonuç bulunamadı"}"#;

    #[test]
    fn test_semantic_data_is_fetched_once() {
        let transport = FakeTransport::default()
            .respond("https://sozluk.gov.tr/gts?ara=kaymak", KAYMAK);
        let mut query = WordQuery::with_transport("kaymak", &transport);

        assert_eq!(query.semantic_data().unwrap().len(), 1);
        assert_eq!(query.semantic_data().unwrap()[0].headword(), "kaymak");
        assert_eq!(query.meanings().unwrap(), vec!["Sütün üstünde toplanan yağ"]);
        assert_eq!(query.compound_nouns().unwrap(), vec!["kaymak altı", "kaymaklı"]);
        assert_eq!(query.expressions().unwrap(), vec!["kaymağını yemek"]);
        assert_eq!(query.examples().unwrap(), vec!["Kaymaklı ekmek."]);
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn test_formatted() {
        let transport = FakeTransport::default()
            .respond("https://sozluk.gov.tr/gts?ara=kaymak", KAYMAK);
        let mut query = WordQuery::with_transport("kaymak", &transport);

        assert_eq!(
            query.formatted().unwrap(),
            "- kaymak \n 1. [isim] Sütün üstünde toplanan yağ\n\t\"Kaymaklı ekmek.\"\n"
        );
    }

    #[test]
    fn test_non_array_is_word_not_found() {
        let transport = FakeTransport::default()
            .respond("https://sozluk.gov.tr/gts?ara=", NOT_FOUND)
            .respond("https://sozluk.gov.tr/gts?ara=asdsfaf", "42");

        let mut empty = WordQuery::with_transport("", &transport);
        assert!(matches!(empty.semantic_data(), Err(TdkError::WordNotFound(w)) if w.is_empty()));
        assert!(matches!(empty.entries(), Err(TdkError::WordNotFound(_))));

        let mut unknown = WordQuery::with_transport("asdsfaf", &transport);
        assert!(matches!(unknown.meanings(), Err(TdkError::WordNotFound(_))));
    }

    #[test]
    fn test_unparseable_body_is_network_error() {
        let transport = FakeTransport::default()
            .respond("https://sozluk.gov.tr/gts?ara=kaymak", "<html>502</html>");
        let mut query = WordQuery::with_transport("kaymak", &transport);

        assert!(matches!(query.semantic_data(), Err(TdkError::Network { .. })));
    }

    #[test]
    fn test_transport_failure_is_not_cached() {
        let transport = FakeTransport::default();
        let mut query = WordQuery::with_transport("kaymak", &transport);

        assert!(matches!(query.semantic_data(), Err(TdkError::Network { .. })));
        assert!(matches!(query.semantic_data(), Err(TdkError::Network { .. })));
        assert_eq!(transport.calls(), 2);
    }

    #[test]
    fn test_audio_links() {
        let transport = FakeTransport::default().respond(
            "https://sozluk.gov.tr/yazim?ara=kaymak",
            r#"[{"seskod": "k0123"}, {"seskod": ""}, {"sozu": "kaymak"}, {"seskod": "k0124"}]"#,
        );
        let mut query = WordQuery::with_transport("kaymak", &transport);

        assert_eq!(
            query.audio_links().unwrap(),
            [
                "https://sozluk.gov.tr/ses/k0123.wav",
                "https://sozluk.gov.tr/ses/k0124.wav"
            ]
        );
        query.audio_links().unwrap();
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn test_empty_audio_array_is_cached_success() {
        let transport =
            FakeTransport::default().respond("https://sozluk.gov.tr/yazim?ara=pehpehlemek", "[]");
        let mut query = WordQuery::with_transport("pehpehlemek", &transport);

        assert!(query.audio_links().unwrap().is_empty());
        assert!(query.audio_links().unwrap().is_empty());
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn test_non_array_audio_is_no_audio() {
        let transport = FakeTransport::default()
            .respond("https://sozluk.gov.tr/yazim?ara=asdsfaf", NOT_FOUND);
        let mut query = WordQuery::with_transport("asdsfaf", &transport);

        assert!(matches!(query.audio_links(), Err(TdkError::NoAudio(_))));
    }

    #[test]
    fn test_similar_words() {
        let transport = FakeTransport::default()
            .respond(
                "https://sozluk.gov.tr/oneri?soz=kaymk",
                r#"[{"madde": "kaymak"}, {"madde": "kaymaz"}, {}]"#,
            )
            .respond("https://sozluk.gov.tr/oneri?soz=zzz", NOT_FOUND);

        let mut query = WordQuery::with_transport("kaymk", &transport);
        assert_eq!(query.similar_words().unwrap(), ["kaymak", "kaymaz", ""]);
        query.similar_words().unwrap();
        assert_eq!(transport.calls(), 1);

        let mut nothing = WordQuery::with_transport("zzz", &transport);
        assert!(nothing.similar_words().unwrap().is_empty());
    }

    #[test]
    fn test_user_agent_and_base_url_overrides() {
        let transport =
            FakeTransport::default().respond("http://localhost:8080/gts?ara=s%C3%BCrmek", "[]");
        let mut query = WordQuery::with_transport("sürmek", &transport)
            .base_url("http://localhost:8080/")
            .user_agent("tdk-test/1.0");

        assert!(query.entries().unwrap().is_empty());
        assert_eq!(transport.calls.borrow()[0].1, "tdk-test/1.0");
    }

    #[test]
    fn test_download_audio_names_files() {
        let dir = tempfile::tempdir().unwrap();
        let transport = FakeTransport::default()
            .respond(
                "https://sozluk.gov.tr/yazim?ara=kaymak",
                r#"[{"seskod": "k1"}, {"seskod": "k2"}, {"seskod": "k3"}]"#,
            )
            .respond("https://sozluk.gov.tr/ses/k1.wav", "one")
            .respond("https://sozluk.gov.tr/ses/k2.wav", "two")
            .respond("https://sozluk.gov.tr/ses/k3.wav", "three");
        let mut query = WordQuery::with_transport("kaymak", &transport);

        let paths = query.download_audio(dir.path(), "tr_").unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["tr_kaymak_1.wav", "tr_kaymak_2.wav", "tr_kaymak_3.wav"]);
        assert_eq!(std::fs::read_to_string(&paths[2]).unwrap(), "three");
        assert_eq!(transport.calls(), 4);
    }

    #[test]
    fn test_audio_links_network_failures() {
        let transport = FakeTransport::default()
            .respond("https://sozluk.gov.tr/yazim?ara=bozuk", "<html>");

        let mut unreachable = WordQuery::with_transport("kaymak", &transport);
        assert!(matches!(unreachable.audio_links(), Err(TdkError::Network { .. })));
        assert!(matches!(unreachable.audio_links(), Err(TdkError::Network { .. })));

        let mut garbled = WordQuery::with_transport("bozuk", &transport);
        assert!(matches!(garbled.audio_links(), Err(TdkError::Network { .. })));
        assert!(matches!(garbled.audio_links(), Err(TdkError::Network { .. })));

        // Nothing is cached after a failure, so every call hits the transport.
        assert_eq!(transport.calls(), 4);
    }

    #[test]
    fn test_similar_words_network_failures() {
        let transport = FakeTransport::default()
            .respond("https://sozluk.gov.tr/oneri?soz=bozuk", "<html>");

        let mut unreachable = WordQuery::with_transport("kaymk", &transport);
        assert!(matches!(unreachable.similar_words(), Err(TdkError::Network { .. })));
        assert!(matches!(unreachable.similar_words(), Err(TdkError::Network { .. })));

        let mut garbled = WordQuery::with_transport("bozuk", &transport);
        assert!(matches!(garbled.similar_words(), Err(TdkError::Network { .. })));
        assert!(matches!(garbled.similar_words(), Err(TdkError::Network { .. })));

        assert_eq!(transport.calls(), 4);
    }

    #[test]
    fn test_download_audio_link_fetch_failure() {
        let dir = tempfile::tempdir().unwrap();
        let transport = FakeTransport::default();
        let mut query = WordQuery::with_transport("kaymak", &transport);

        let err = query.download_audio(dir.path(), "").unwrap_err();
        assert!(matches!(err, TdkError::Network { .. }));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn test_new_uses_default_service() {
        let query = WordQuery::new("kaymak").unwrap();
        assert_eq!(query.word(), "kaymak");
        assert_eq!(query.base_url, DEFAULT_BASE_URL);
        assert_eq!(query.user_agent, DEFAULT_USER_AGENT);
    }
}
