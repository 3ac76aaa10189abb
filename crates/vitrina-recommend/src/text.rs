//! Text folding and keyword tag extraction.
//!
//! All matching in this crate runs over folded text: lowercased, with
//! accents removed. Community members type queries with and without
//! accents interchangeably ("cafe" / "café"), so folding both sides is
//! what makes the index usable.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase and strip accents from a string.
///
/// Decomposes to NFKD and drops combining marks, so "Relajación" folds
/// to "relajacion" and "Café" to "cafe".
pub fn fold_text(text: &str) -> String {
    text.to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Split folded text into index tokens.
///
/// Tokens are maximal alphanumeric runs of at least two characters;
/// single letters and punctuation carry no signal for this corpus.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

/// Keyword groups for tag extraction, checked in order.
///
/// Each entry is a tag name and the patterns that imply it. Patterns
/// are matched as substrings of the folded text, so multi-word phrases
/// like "corte de cabello" work without tokenization. Group names
/// double as the emitted tags and stay kebab-safe (single lowercase
/// words).
static KEYWORD_GROUPS: &[(&str, &[&str])] = &[
    (
        "barberia",
        &[
            "barberia",
            "peluqueria",
            "corte de cabello",
            "cabello",
            "corte de pelo",
            "pelo",
            "barba",
            "fade",
            "taper",
        ],
    ),
    (
        "cafe",
        &[
            "cafe", "wifi", "postres", "trabajar", "tranquilo", "taza", "barista",
        ],
    ),
    (
        "restaurante",
        &["restaurante", "cocina", "comida", "menu", "chef"],
    ),
    (
        "tacos",
        &["tacos", "pastor", "bistec", "gringas", "campesina"],
    ),
    ("sushi", &["sushi", "rolls", "ramen", "japonesa"]),
    (
        "saludable",
        &["saludable", "vegano", "ensalada", "proteina", "light", "bowl"],
    ),
    (
        "spa",
        &["spa", "masaje", "relajacion", "facial", "aromaterapia"],
    ),
    (
        "reparacion",
        &[
            "reparacion",
            "reparar",
            "celular",
            "laptop",
            "diagnostico",
            "garantia",
        ],
    ),
    (
        "gym",
        &[
            "gym",
            "gimnasio",
            "pesas",
            "entrenamiento",
            "fuerza",
            "24 horas",
        ],
    ),
    ("farmacia", &["farmacia", "urgencia", "medicamento"]),
    (
        "entretenimiento",
        &["cine", "karaoke", "boliche", "entretenimiento", "diversion"],
    ),
    ("panaderia", &["pan", "panaderia", "pan dulce", "horno"]),
    ("postres", &["postre", "helado", "malteada", "dulce"]),
    (
        "libreria",
        &["libreria", "libro", "papeleria", "estudio", "leer"],
    ),
    (
        "servicios",
        &["servicio", "lavanderia", "para llevar", "express"],
    ),
    (
        "barato",
        &["barato", "economico", "accesible", "promo", "descuento"],
    ),
    ("cita", &["cita", "romantico", "pareja"]),
    ("tranquilo", &["tranquilo", "calmado", "relajado"]),
    ("rapido", &["rapido", "expres", "agil"]),
];

/// Derive content tags from free text.
///
/// Folds the text, then emits each group's tag when any of its
/// patterns occurs as a substring. The first hit settles a group, so
/// the result holds each tag at most once, in table order.
pub fn extract_tags(text: &str) -> Vec<String> {
    let folded = fold_text(text);
    let mut tags = Vec::new();

    for (tag, patterns) in KEYWORD_GROUPS {
        if patterns.iter().any(|pattern| folded.contains(pattern)) {
            tags.push((*tag).to_string());
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_lowercases_and_strips_accents() {
        assert_eq!(fold_text("Café"), "cafe");
        assert_eq!(fold_text("Relajación"), "relajacion");
        assert_eq!(fold_text("NIÑOS"), "ninos");
        assert_eq!(fold_text("sin acentos"), "sin acentos");
    }

    #[test]
    fn test_fold_preserves_punctuation_and_digits() {
        assert_eq!(fold_text("Abierto 24/7!"), "abierto 24/7!");
    }

    #[test]
    fn test_tokenize_splits_on_non_alphanumeric() {
        assert_eq!(
            tokenize("tacos al pastor, baratos!"),
            ["tacos", "al", "pastor", "baratos"]
        );
    }

    #[test]
    fn test_tokenize_drops_single_characters() {
        assert_eq!(tokenize("a y o de 24"), ["de", "24"]);
    }

    #[test]
    fn test_tokenize_empty_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("...!?").is_empty());
    }

    #[test]
    fn test_extract_tags_matches_accented_input() {
        let tags = extract_tags("Masajes de relajación y tratamientos faciales");
        assert_eq!(tags, ["spa"]);
    }

    #[test]
    fn test_extract_tags_multiple_groups_in_table_order() {
        let tags = extract_tags("Café con wifi, postres caseros y ambiente tranquilo");
        // "postres" and "tranquilo" are patterns of the cafe group and
        // also group names of their own.
        assert_eq!(tags, ["cafe", "postres", "tranquilo"]);
    }

    #[test]
    fn test_extract_tags_first_pattern_settles_the_group() {
        // Two barberia patterns in one text still emit the tag once.
        let tags = extract_tags("Corte de cabello y arreglo de barba");
        assert_eq!(tags, ["barberia"]);
    }

    #[test]
    fn test_extract_tags_matches_multiword_patterns() {
        let tags = extract_tags("Gimnasio abierto 24 horas con pesas");
        assert_eq!(tags, ["gym"]);
    }

    #[test]
    fn test_extract_tags_no_match() {
        assert!(extract_tags("Clases de astronomía").is_empty());
        assert!(extract_tags("").is_empty());
    }

    #[test]
    fn test_keyword_groups_have_unique_kebab_safe_names() {
        let mut seen = std::collections::HashSet::new();
        for (tag, patterns) in KEYWORD_GROUPS {
            assert!(seen.insert(*tag), "Duplicate group name {}", tag);
            assert!(!tag.contains(' '), "Group name {} contains a space", tag);
            assert!(!patterns.is_empty());
        }
    }
}
