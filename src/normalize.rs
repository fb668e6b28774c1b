//! Ingredient normalization: map one free-text ingredient line to zero or
//! more canonical vocabulary tokens, asking the operator when nothing matches.

use crate::engine::Resolver;
use crate::error::*;
use crate::services::vocab::Vocabulary;
use crate::types::Resolution;

/// Words that mark a whole line as equipment or section noise rather than an
/// ingredient. One hit anywhere in the line discards it.
pub const SKIP_WORDS: &[&str] = &[
    "assembly",
    "equipment",
    "filling",
    "mortar",
    "ricer",
    "info",
    "topping",
    "springform",
    "thermometer",
    "canning",
    "mill",
    "cheesecloth",
    "skewers",
    "equipment:",
    "diameter",
    "pressure",
    "foil",
    "plastic",
    "info:",
    "mandoline",
    "9\"-diameter",
    "pans",
    "fryer",
    "heatproof",
];

/// Full lines that are section headers, not ingredients. Matched against the
/// whole canonicalized line only, so "sauce" alone is rejected while
/// "soy sauce" still goes through word matching.
pub const EXACT_SKIP_LINES: &[&str] = &[
    "marinade",
    "soup",
    "meatballs",
    "stir-fry",
    "sauce",
    "ingredients",
    "salad",
    "aioli",
    "cutter",
    "",
    "crust",
    "dressing",
    "vegetables",
];

/// Canonicalize a raw ingredient line: commas stripped, lowercased, a few
/// accented vowels folded to ASCII and the typographic apostrophe flattened.
pub fn canonicalize(raw: &str) -> String {
    raw.replace(',', "")
        .to_lowercase()
        .replace('è', "e")
        .replace('ñ', "n")
        .replace('’', "'")
}

/// Resolve one raw ingredient line against the vocabulary.
///
/// Lines hitting the skip sets resolve to nothing. Lines containing known
/// vocabulary words resolve to those words, in first-occurrence order,
/// without prompting. Anything else goes to the resolver; tokens it supplies
/// are added to the vocabulary before being returned, so the next occurrence
/// resolves silently.
pub fn normalize(
    raw: &str,
    vocab: &mut Vocabulary,
    resolver: &mut dyn Resolver,
) -> Result<Vec<String>> {
    let line = canonicalize(raw);
    let words: Vec<&str> = line.split_whitespace().collect();

    if words.iter().any(|w| SKIP_WORDS.contains(w)) {
        return Ok(Vec::new());
    }
    if EXACT_SKIP_LINES.contains(&line.as_str()) {
        return Ok(Vec::new());
    }

    let mut known = Vec::new();
    for w in &words {
        if vocab.contains(w) && !known.iter().any(|k| k == w) {
            known.push((*w).to_string());
        }
    }
    if !known.is_empty() {
        return Ok(known);
    }

    let supplied = match resolver.resolve(&line)? {
        Resolution::Skip => return Ok(Vec::new()),
        Resolution::One(token) => vec![token],
        Resolution::Many(tokens) => tokens,
    };
    let supplied: Vec<String> = supplied
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    for token in &supplied {
        vocab.insert(token);
    }
    Ok(supplied)
}
