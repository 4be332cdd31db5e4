//! Fixed lexicons and patterns backing the urgency signals.
//!
//! Everything here is process-wide, immutable configuration: the Spanish
//! keyword lists, the technical-term list, the tag vocabularies, the time
//! regexes, and the reference phrases for historical similarity. Matchers are
//! compiled once into `LazyLock` statics and shared read-only across all
//! classification calls.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use regex::Regex;

/// Keywords that strongly suggest an outage or a blocked user (+3 each).
pub const HIGH_KEYWORDS: &[&str] = &[
    "no funciona",
    "caído",
    "crítico",
    "urgente",
    "emergencia",
    "parado",
    "bloqueado",
    "error grave",
    "no inicia",
    "caída",
    "inaccesible",
    "prioritario",
    "inmediato",
    "urgentemente",
    "asap",
    "rápido",
];

/// Keywords for ordinary problems and help requests (+1.5 each).
pub const MEDIUM_KEYWORDS: &[&str] = &[
    "lento",
    "problema",
    "error",
    "falla",
    "no puedo",
    "dificultad",
    "incidente",
    "consultar",
    "pregunta",
    "ayuda",
    "soporte",
    "molesto",
    "incomodo",
    "difícil",
    "complicado",
];

/// Keywords that signal a non-urgent inquiry (-1 each).
pub const LOW_KEYWORDS: &[&str] = &[
    "consulta",
    "pregunta",
    "información",
    "sugerencia",
    "mejora",
    "futuro",
    "próximo",
    "cuando",
    "duda",
    "curiosidad",
    "opcional",
    "cuando pueda",
    "sin prisa",
];

/// Technical terms that nudge urgency upward (+0.5 each).
pub const TECHNICAL_TERMS: &[&str] = &[
    "servidor",
    "base de datos",
    "red",
    "wifi",
    "internet",
    "conexión",
    "sistema",
    "aplicación",
    "plataforma",
    "login",
    "acceso",
    "impresora",
    "proyector",
    "notebook",
    "equipo",
    "dispositivo",
];

/// Tag vocabulary worth +3 per tag.
pub const URGENT_TAGS: &[&str] = &["urgente", "critico", "bloqueante", "prioritario"];

/// Tag vocabulary worth +1.5 per tag.
pub const MEDIUM_TAGS: &[&str] = &["problema", "error", "falla"];

/// Canonical phrasing of historically urgent tickets, used only as
/// similarity references.
pub const HISTORICAL_URGENT: &[&str] = &[
    "no funciona el sistema no puedo trabajar",
    "error crítico servidor caído",
    "urgencia inmediata bloqueado completamente",
    "problema grave impresora no imprime urgente",
];

/// Point weights of the keyword bands, in lexicon concatenation order.
const HIGH_POINTS: f64 = 3.0;
const MEDIUM_POINTS: f64 = 1.5;
const LOW_POINTS: f64 = -1.0;
const TECHNICAL_POINTS: f64 = 0.5;

/// Multi-pattern substring matcher over all four keyword lists.
///
/// Matching is deliberately substring-based, not token-boundary-aware: a
/// keyword counts if it appears anywhere in the haystack, even inside a
/// longer unrelated word. That mirrors the triage heuristic this engine
/// reproduces and is a known source of false positives.
pub struct KeywordMatcher
{
    automaton: AhoCorasick,
    weights: Vec<f64>,
}

impl KeywordMatcher
{
    fn build() -> Self
    {
        let mut patterns: Vec<&str> = Vec::new();
        let mut weights: Vec<f64> = Vec::new();

        for (list, points) in [
            (HIGH_KEYWORDS, HIGH_POINTS),
            (MEDIUM_KEYWORDS, MEDIUM_POINTS),
            (LOW_KEYWORDS, LOW_POINTS),
            (TECHNICAL_TERMS, TECHNICAL_POINTS),
        ]
        {
            patterns.extend_from_slice(list);
            weights.extend(std::iter::repeat_n(points, list.len()));
        }

        let automaton = AhoCorasick::new(&patterns).expect("keyword lexicon compiles");

        Self { automaton, weights }
    }

    /// Sum the weights of every distinct keyword present in `haystack`.
    ///
    /// Each lexicon entry counts at most once no matter how often it occurs.
    /// Overlapping search is required: "urgentemente" must also surface the
    /// embedded "urgente", and "consultar" the embedded "consulta".
    pub fn score(
        &self,
        haystack: &str,
    ) -> f64
    {
        let mut seen = vec![false; self.weights.len()];

        for hit in self
            .automaton
            .find_overlapping_iter(haystack)
        {
            seen[hit.pattern().as_usize()] = true;
        }

        seen.iter()
            .zip(&self.weights)
            .filter(|(present, _)| **present)
            .map(|(_, points)| points)
            .sum()
    }
}

/// Shared keyword matcher, compiled on first use.
pub static KEYWORD_MATCHER: LazyLock<KeywordMatcher> = LazyLock::new(KeywordMatcher::build);

/// Prolonged-outage time expressions. Each matching pattern adds its own +2;
/// matches are cumulative across patterns, never deduplicated.
pub static TIME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(\d+)\s*(horas?|hrs?)\s*(sin|sin poder)",
        r"(?i)desde\s*(ayer|esta mañana|hoy temprano)",
        r"(?i)todo el día",
        r"(?i)varios días",
        r"(?i)desde hace",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("time pattern compiles"))
    .collect()
});
