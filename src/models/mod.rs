//! PokéAPI Response Models
//!
//! Serde mappings for the subset of PokéAPI fields the Pokédex shows.
//! Fields PokéAPI may omit or null out fall back to their defaults.

use serde::Deserialize;

// == Named Resource ==
/// A `{ "name": ... }` object; PokéAPI nests these everywhere.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

// == Pokemon ==
/// A Pokémon as returned by `GET /pokemon/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub name: String,
    #[serde(default)]
    pub base_experience: i32,
    #[serde(default)]
    pub height: i32,
    #[serde(default)]
    pub weight: i32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

/// One base stat, e.g. "hp" or "attack".
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: i32,
    pub stat: NamedResource,
}

/// One type slot, e.g. "normal" or "flying".
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

// == Location Areas ==
/// One page of `GET /location-area/`, with pagination cursors.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    #[serde(default)]
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<LocationAreaRef>,
}

/// Name and canonical URL of one location area.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaRef {
    pub name: String,
    pub url: String,
}

// == Area Encounters ==
/// The encounter list of `GET /location-area/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AreaEncounters {
    #[serde(default)]
    pub pokemon_encounters: Vec<Encounter>,
}

/// One possible encounter in an area.
#[derive(Debug, Clone, Deserialize)]
pub struct Encounter {
    pub pokemon: NamedResource,
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_deserializes() {
        let json = r#"{
            "name": "pidgey",
            "base_experience": 50,
            "height": 3,
            "weight": 18,
            "stats": [
                {"base_stat": 40, "stat": {"name": "hp"}},
                {"base_stat": 45, "stat": {"name": "attack"}}
            ],
            "types": [
                {"type": {"name": "normal"}},
                {"type": {"name": "flying"}}
            ]
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.name, "pidgey");
        assert_eq!(pokemon.base_experience, 50);
        assert_eq!(pokemon.stats.len(), 2);
        assert_eq!(pokemon.stats[0].stat.name, "hp");
        assert_eq!(pokemon.types[1].kind.name, "flying");
    }

    #[test]
    fn test_pokemon_tolerates_missing_fields() {
        let pokemon: Pokemon = serde_json::from_str(r#"{"name": "ditto"}"#).unwrap();
        assert_eq!(pokemon.name, "ditto");
        assert_eq!(pokemon.base_experience, 0);
        assert!(pokemon.stats.is_empty());
        assert!(pokemon.types.is_empty());
    }

    #[test]
    fn test_location_area_page_deserializes() {
        let json = r#"{
            "count": 1054,
            "next": "https://pokeapi.co/api/v2/location-area/?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"}
            ]
        }"#;

        let page: LocationAreaPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 1054);
        assert!(page.next.is_some());
        assert_eq!(page.previous, None);
        assert_eq!(page.results[0].name, "canalave-city-area");
    }

    #[test]
    fn test_area_encounters_deserializes() {
        let json = r#"{
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool"}},
                {"pokemon": {"name": "magikarp"}}
            ]
        }"#;

        let area: AreaEncounters = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = area
            .pokemon_encounters
            .iter()
            .map(|e| e.pokemon.name.as_str())
            .collect();
        assert_eq!(names, vec!["tentacool", "magikarp"]);
    }

    #[test]
    fn test_area_encounters_empty() {
        let area: AreaEncounters = serde_json::from_str("{}").unwrap();
        assert!(area.pokemon_encounters.is_empty());
    }
}
