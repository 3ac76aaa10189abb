/// End-to-end recommendation flow: raw collaborator records are
/// normalized into the canonical catalog, indexed, and queried the way
/// the directory's suggestion box does.
///
/// The fixture mirrors real submissions: accented Spanish prose,
/// optional tags, and uneven field quality.
use serde_json::json;

use vitrina_core::defaults::RECOMMEND_TOP_K;
use vitrina_core::normalize_all;
use vitrina_recommend::Recommender;

const PLACEHOLDER_IMAGE: &str = "https://cdn.example/placeholder.png";

fn build_recommender() -> Recommender {
    let raw = vec![
        json!({
            "id": 1,
            "business_name": "Sushi Nami",
            "category": "Alimentos",
            "description": "Rolls clásicos y combos accesibles. Ambiente tranquilo, ideal para una cita informal."
        }),
        json!({
            "id": 2,
            "business_name": "Barbería Norte",
            "category": "Servicios",
            "description": "Corte de cabello y arreglo de barba, con perfiles fade y taper. Precios económicos.",
            "tags": ["barbería"]
        }),
        json!({
            "id": 3,
            "business_name": "Café Nube",
            "category": "Alimentos",
            "description": "Café de especialidad con wifi, postres caseros y mesas cómodas. Perfecto para trabajar."
        }),
        json!({
            "id": 4,
            "business_name": "Spa Zen",
            "category": "Bienestar",
            "description": "Masajes relajantes y faciales. Planes de pareja en un ambiente muy tranquilo."
        }),
        json!({
            "id": 5,
            "business_name": "TechFix",
            "category": "Servicios",
            "description": "Reparación de celulares y laptops con diagnóstico rápido y garantía."
        }),
    ];

    let catalog = normalize_all(&raw, PLACEHOLDER_IMAGE);
    Recommender::new(&catalog)
}

#[test]
fn test_query_in_spanish_finds_the_right_listing() {
    let recommender = build_recommender();

    let results = recommender.recommend("quiero sushi accesible para una cita", RECOMMEND_TOP_K);
    assert_eq!(results.len(), RECOMMEND_TOP_K);
    assert_eq!(results[0].listing_id, "1");
    assert!(results[0].score > results[1].score);
}

#[test]
fn test_results_explain_the_match_through_tags() {
    let recommender = build_recommender();

    let results = recommender.recommend("busco masajes de relajación en pareja", 1);
    assert_eq!(results[0].listing_id, "4");
    assert!(results[0].matched_tags.contains(&"spa".to_string()));
    assert!(results[0].matched_tags.contains(&"cita".to_string()));
}

#[test]
fn test_accent_insensitive_matching() {
    let recommender = build_recommender();

    let with_accents = recommender.recommend("reparación de celulares con garantía", 1);
    let without_accents = recommender.recommend("reparacion de celulares con garantia", 1);

    assert_eq!(with_accents[0].listing_id, "5");
    assert_eq!(without_accents[0].listing_id, "5");
    assert_eq!(with_accents[0].score, without_accents[0].score);
}

#[test]
fn test_related_listings_share_the_seed_vocabulary() {
    let recommender = build_recommender();

    // Suggestions for the barbershop come from the listings sharing
    // its service vocabulary, never the barbershop itself.
    let results = recommender.recommend_for("2", 2).unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.listing_id != "2"));
}

#[test]
fn test_unknown_seed_listing_is_reported() {
    let recommender = build_recommender();

    let err = recommender.recommend_for("404", 3).unwrap_err();
    assert!(err.to_string().contains("404"));
}

#[test]
fn test_normalized_fallbacks_do_not_break_indexing() {
    // Records with missing fields index under their fallback values.
    let raw = vec![
        json!({"id": 9, "description": "Postres y pan dulce de horno."}),
        json!({"id": 10, "business_name": "Libros Lupita", "category": "Papelería",
               "description": "Libros y papelería para estudio."}),
    ];
    let catalog = normalize_all(&raw, PLACEHOLDER_IMAGE);
    let recommender = Recommender::new(&catalog);

    let results = recommender.recommend("pan dulce", 1);
    assert_eq!(results[0].listing_id, "9");
    assert_eq!(results[0].title, "Untitled");
    assert!(results[0]
        .matched_tags
        .iter()
        .any(|t| t == "panaderia" || t == "postres"));
}
