//! Free-text classification of lead hints and style tags.
//!
//! Hints and tags are free text (English words or the Chinese UI labels).
//! They are classified into closed enums here, once, so the preset resolver
//! can dispatch with exhaustive matches.

use std::sync::OnceLock;

use gamebgm_spec::SynthParameters;
use regex::Regex;
use serde::Serialize;

/// Instrument family named by a lead hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadHint {
    Guitar,
    Strings,
    Woodwind,
    Brass,
    Synth,
}

/// Ordered rules; the first match wins.
const LEAD_HINT_RULES: [(LeadHint, &str); 5] = [
    (LeadHint::Guitar, r"(?i)電吉他|guitar"),
    (LeadHint::Strings, r"(?i)弦樂|strings?|violin|cello"),
    (LeadHint::Woodwind, r"(?i)木管|flute|woodwind|clarinet|oboe"),
    (LeadHint::Brass, r"(?i)銅管|brass|trumpet|horn|trombone"),
    (LeadHint::Synth, r"(?i)合成|synth"),
];

static LEAD_HINT_REGEXES: OnceLock<Vec<(LeadHint, Regex)>> = OnceLock::new();

fn lead_hint_regexes() -> &'static [(LeadHint, Regex)] {
    LEAD_HINT_REGEXES.get_or_init(|| {
        LEAD_HINT_RULES
            .iter()
            .map(|(hint, pattern)| (*hint, Regex::new(pattern).expect("invalid regex pattern")))
            .collect()
    })
}

impl LeadHint {
    /// Classifies a free-text hint. Returns `None` when nothing matches.
    pub fn classify(text: &str) -> Option<Self> {
        lead_hint_regexes()
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(hint, _)| *hint)
    }
}

/// Style flags derived from style tags and the prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StyleFlags {
    pub chiptune: bool,
    pub cinematic: bool,
    pub electronic: bool,
    pub ambient: bool,
    pub rock: bool,
    pub folk: bool,
}

struct StylePatterns {
    chiptune: Regex,
    cinematic: Regex,
    electronic: Regex,
    ambient: Regex,
    rock: Regex,
    folk: Regex,
}

static STYLE_PATTERNS: OnceLock<StylePatterns> = OnceLock::new();

fn style_patterns() -> &'static StylePatterns {
    STYLE_PATTERNS.get_or_init(|| {
        let re = |pattern: &str| Regex::new(pattern).expect("invalid regex pattern");
        StylePatterns {
            chiptune: re(r"(?i)8-?bit|chiptune"),
            cinematic: re(r"(?i)cinematic|orchestral|交響|電影感"),
            electronic: re(r"(?i)synth|electronic|合成器電子"),
            ambient: re(r"(?i)ambient|氛圍"),
            rock: re(r"(?i)rock|metal"),
            folk: re(r"(?i)oriental|celtic|japan|民族"),
        }
    })
}

impl StyleFlags {
    /// Derives flags from any number of text sources. A flag is set when any
    /// source matches its pattern.
    pub fn from_texts<'a, I>(texts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let patterns = style_patterns();
        let mut flags = Self::default();
        for text in texts {
            if text.is_empty() {
                continue;
            }
            flags.chiptune |= patterns.chiptune.is_match(text);
            flags.cinematic |= patterns.cinematic.is_match(text);
            flags.electronic |= patterns.electronic.is_match(text);
            flags.ambient |= patterns.ambient.is_match(text);
            flags.rock |= patterns.rock.is_match(text);
            flags.folk |= patterns.folk.is_match(text);
        }
        flags
    }

    /// Flags for a parameter set: every style tag plus the prompt.
    pub fn from_params(params: &SynthParameters) -> Self {
        Self::from_texts(
            params
                .style_tags
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(params.prompt.as_str())),
        )
    }

    /// True when no flag is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
