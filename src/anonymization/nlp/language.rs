//! Stopword-profile language identification
//!
//! Each profile is a set of high-frequency function words. The profile with
//! the most hits among the lowercased words of the input wins; ties go to the
//! profile listed first. The detector never fails: text without any hits is
//! reported as [`UNDETERMINED`] and rejected downstream like any other
//! unsupported code.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Code returned when no profile matches
pub const UNDETERMINED: &str = "und";

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}+").expect("word pattern should compile"));

const ENGLISH: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "an", "in", "that", "have", "has", "had", "i", "it",
    "for", "not", "on", "with", "he", "as", "you", "do", "does", "at", "this", "but", "his", "by",
    "from", "they", "we", "say", "her", "she", "or", "will", "my", "one", "all", "would",
    "there", "their", "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me",
    "when", "make", "can", "like", "just", "him", "know", "is", "are", "was", "were", "been",
    "hello", "please", "call", "calling", "number", "phone", "your", "our", "these", "those",
];

const NORWEGIAN: &[&str] = &[
    "og", "i", "jeg", "det", "at", "en", "et", "den", "til", "er", "som", "på", "de", "med",
    "han", "av", "ikke", "der", "så", "var", "meg", "seg", "men", "ett", "har", "om", "vi",
    "min", "mitt", "ha", "hadde", "hun", "nå", "over", "da", "ved", "fra", "du", "ut", "sin",
    "dem", "oss", "opp", "man", "kan", "hans", "hvor", "eller", "hva", "skal", "selv", "her",
    "alle", "vil", "bli", "ble", "blitt", "kunne", "inn", "når", "være", "kom", "noen", "noe",
    "ville", "dere", "deres", "kun", "ja", "etter", "ned", "skulle", "denne", "for", "deg",
    "sine", "sitt", "mot", "å", "hvorfor", "dette", "disse", "uten", "hvordan", "ingen", "din",
    "ditt", "blir", "samme", "hvilken", "hvilke", "mellom", "vår", "hver", "hvem", "hvis",
    "både", "bare", "enn", "fordi", "før", "mange", "også", "slik", "vært", "begge", "siden",
    "eg", "ein", "eit", "ho", "kva", "kvar", "kven", "korleis", "ikkje", "hei", "takk",
];

const DANISH: &[&str] = &[
    "og", "i", "jeg", "det", "at", "en", "den", "til", "er", "som", "på", "de", "med", "han",
    "af", "for", "ikke", "der", "var", "mig", "sig", "men", "et", "har", "om", "vi", "min",
    "havde", "ham", "hun", "nu", "over", "da", "fra", "du", "ud", "sin", "dem", "os", "op",
    "man", "hans", "hvor", "eller", "hvad", "skal", "selv", "her", "alle", "vil", "blev",
    "kunne", "ind", "når", "være", "dog", "noget", "ville", "jo", "deres", "efter", "ned",
    "skulle", "denne", "end", "dette", "mit", "også", "under", "have", "dig", "anden", "hende",
    "mine", "alt", "meget", "sit", "sine", "vor", "mod", "disse", "hvis", "din", "nogle",
    "hos", "blive", "mange", "ad", "bliver", "hendes", "været", "thi", "jer", "sådan",
];

const SWEDISH: &[&str] = &[
    "och", "det", "att", "i", "en", "jag", "hon", "som", "han", "på", "den", "med", "var",
    "sig", "för", "så", "till", "är", "men", "ett", "om", "hade", "de", "av", "icke", "inte",
    "mig", "du", "henne", "då", "sin", "nu", "har", "under", "honom", "skulle", "mycket",
    "när", "ingen", "mitt", "vid", "ut", "efter", "upp", "vi", "dem", "vara", "vad", "över",
    "än", "dig", "kan", "sina", "här", "ha", "mot", "alla", "eller", "allt", "detta", "denna",
    "kunde", "någon", "något", "min", "vår", "hur", "vem", "vilken", "hej", "tack",
];

const GERMAN: &[&str] = &[
    "der", "die", "und", "in", "den", "von", "zu", "das", "mit", "sich", "des", "auf", "für",
    "ist", "im", "dem", "nicht", "ein", "eine", "als", "auch", "es", "an", "werden", "aus",
    "er", "hat", "dass", "sie", "nach", "wird", "bei", "einer", "um", "am", "sind", "noch",
    "wie", "einem", "über", "einen", "so", "zum", "war", "haben", "nur", "oder", "aber",
    "vor", "zur", "bis", "mehr", "durch", "man", "ich", "du", "wir", "ihr", "hallo", "bitte",
];

const DUTCH: &[&str] = &[
    "de", "en", "van", "ik", "te", "dat", "die", "in", "een", "hij", "het", "niet", "zijn",
    "is", "was", "op", "aan", "met", "als", "voor", "had", "er", "maar", "om", "hem", "dan",
    "zou", "of", "wat", "mijn", "men", "dit", "zo", "door", "over", "ze", "zich", "bij", "ook",
    "tot", "je", "mij", "uit", "der", "daar", "haar", "naar", "heb", "hoe", "heeft", "hebben",
    "deze", "u", "want", "nog", "zal", "me", "zij", "nu", "ge", "geen", "omdat", "iets", "worden",
];

const SPANISH: &[&str] = &[
    "de", "la", "que", "el", "en", "y", "a", "los", "del", "se", "las", "por", "un", "para",
    "con", "no", "una", "su", "al", "lo", "como", "más", "pero", "sus", "le", "ya", "o",
    "este", "esta", "esto", "es", "sí", "porque", "muy", "sin", "sobre", "también", "me",
    "hasta", "hay", "donde", "quien", "desde", "todo", "nos", "durante", "todos", "uno", "les",
    "ni", "contra", "otros", "ese", "eso", "ante", "ellos", "e", "mi", "soy", "hola", "gracias",
];

const FRENCH: &[&str] = &[
    "le", "la", "les", "de", "des", "du", "un", "une", "et", "est", "en", "que", "qui", "dans",
    "pour", "pas", "sur", "au", "aux", "avec", "ce", "cette", "il", "elle", "nous", "vous",
    "ils", "elles", "je", "tu", "ne", "se", "son", "sa", "ses", "mais", "ou", "où", "donc",
    "car", "par", "plus", "sont", "été", "être", "avoir", "mon", "ma", "mes", "leur", "bonjour",
    "merci", "voici", "ceci",
];

/// A language and its stopword set
#[derive(Debug, Clone)]
struct LanguageProfile {
    code: &'static str,
    stopwords: HashSet<&'static str>,
}

impl LanguageProfile {
    fn new(code: &'static str, words: &[&'static str]) -> Self {
        Self {
            code,
            stopwords: words.iter().copied().collect(),
        }
    }
}

/// Statistical language identifier
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    profiles: Vec<LanguageProfile>,
}

impl LanguageDetector {
    /// Create a detector with the built-in profiles
    pub fn new() -> Self {
        let profiles = vec![
            LanguageProfile::new("en", ENGLISH),
            LanguageProfile::new("no", NORWEGIAN),
            LanguageProfile::new("da", DANISH),
            LanguageProfile::new("sv", SWEDISH),
            LanguageProfile::new("de", GERMAN),
            LanguageProfile::new("nl", DUTCH),
            LanguageProfile::new("es", SPANISH),
            LanguageProfile::new("fr", FRENCH),
        ];
        Self { profiles }
    }

    /// Codes this detector can return, besides [`UNDETERMINED`]
    pub fn known_languages(&self) -> Vec<&'static str> {
        self.profiles.iter().map(|p| p.code).collect()
    }

    /// Classify the language of `text`, returning a two-letter code
    ///
    /// Text without a single stopword hit has no two-letter answer and yields
    /// the three-letter [`UNDETERMINED`] code instead, which no caller treats
    /// as a supported language.
    pub fn detect_language(&self, text: &str) -> String {
        let words: Vec<String> = WORD
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect();

        let mut best: Option<(&'static str, usize)> = None;
        for profile in &self.profiles {
            let hits = words
                .iter()
                .filter(|w| profile.stopwords.contains(w.as_str()))
                .count();
            if hits > 0 && best.map_or(true, |(_, top)| hits > top) {
                best = Some((profile.code, hits));
            }
        }

        let code = best.map_or(UNDETERMINED, |(code, _)| code);
        tracing::debug!(language = code, words = words.len(), "Detected language");
        code.to_string()
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}
