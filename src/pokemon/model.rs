//! Pokemon record and type definitions.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// == Storage Layout ==
/// Prefix shared by every record key: `pokemon:<type>:<id>`.
pub const KEY_PREFIX: &str = "pokemon";

/// Builds the scan pattern matching every record of one type.
pub fn key_pattern(pokemon_type: PokemonType) -> String {
    format!("{}:{}:*", KEY_PREFIX, pokemon_type)
}

// == Pokemon Record ==
/// A single Pokemon as stored in, and served from, the key-value store.
///
/// No validation is applied. Decoding is lenient: a missing or `null` field
/// takes its zero value, unknown fields are ignored, and capitalized field
/// names are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pokemon {
    #[serde(alias = "Name", alias = "NAME", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(
        rename = "type",
        alias = "Type",
        alias = "TYPE",
        deserialize_with = "null_as_default"
    )]
    pub pokemon_type: String,
    #[serde(alias = "Xp", alias = "XP", deserialize_with = "null_as_default")]
    pub xp: i64,
    #[serde(alias = "Power", alias = "POWER", deserialize_with = "null_as_default")]
    pub power: String,
    #[serde(alias = "Level", alias = "LEVEL", deserialize_with = "null_as_default")]
    pub level: i64,
}

/// Reads a field that may be `null`, falling back to the type's zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// == Pokemon Type ==
/// The types exposed by the API, one route each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PokemonType {
    Water,
    Electric,
    Grass,
    Legendary,
    Fire,
}

impl PokemonType {
    /// Every supported type, in route registration order.
    pub const ALL: [PokemonType; 5] = [
        PokemonType::Water,
        PokemonType::Electric,
        PokemonType::Grass,
        PokemonType::Legendary,
        PokemonType::Fire,
    ];

    /// Name used both in store keys and in the `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            PokemonType::Water => "water",
            PokemonType::Electric => "electric",
            PokemonType::Grass => "grass",
            PokemonType::Legendary => "legendary",
            PokemonType::Fire => "fire",
        }
    }

    /// HTTP path bound to this type.
    pub fn route(self) -> &'static str {
        match self {
            PokemonType::Water => "/water",
            PokemonType::Electric => "/electric",
            PokemonType::Grass => "/grass",
            PokemonType::Legendary => "/legendary",
            PokemonType::Fire => "/fire",
        }
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_pattern() {
        assert_eq!(key_pattern(PokemonType::Water), "pokemon:water:*");
        assert_eq!(key_pattern(PokemonType::Legendary), "pokemon:legendary:*");
    }

    #[test]
    fn test_routes_match_type_names() {
        for pokemon_type in PokemonType::ALL {
            assert_eq!(pokemon_type.route(), format!("/{}", pokemon_type));
        }
    }

    #[test]
    fn test_pokemon_deserialize() {
        let json = r#"{"name":"Squirtle","type":"water","xp":10,"power":"low","level":5}"#;
        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.name, "Squirtle");
        assert_eq!(pokemon.pokemon_type, "water");
        assert_eq!(pokemon.xp, 10);
        assert_eq!(pokemon.power, "low");
        assert_eq!(pokemon.level, 5);
    }

    #[test]
    fn test_pokemon_serialize_uses_type_field() {
        let pokemon = Pokemon {
            name: "Pikachu".to_string(),
            pokemon_type: "electric".to_string(),
            xp: 55,
            power: "medium".to_string(),
            level: 12,
        };
        let value = serde_json::to_value(&pokemon).unwrap();
        assert_eq!(value["type"], "electric");
        assert!(value.get("pokemon_type").is_none());
    }

    #[test]
    fn test_pokemon_ignores_unknown_fields() {
        let json = r#"{"name":"Mew","type":"legendary","xp":1,"power":"psychic","level":1,"shiny":true}"#;
        assert!(serde_json::from_str::<Pokemon>(json).is_ok());
    }

    #[test]
    fn test_pokemon_missing_field_is_zero() {
        let json = r#"{"name":"Mew","type":"legendary","xp":1,"power":"psychic"}"#;
        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.level, 0);
        assert_eq!(pokemon.name, "Mew");

        let empty: Pokemon = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Pokemon::default());
    }

    #[test]
    fn test_pokemon_null_field_is_zero() {
        let json = r#"{"name":null,"type":"water","xp":null,"power":"low","level":3}"#;
        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.name, "");
        assert_eq!(pokemon.xp, 0);
        assert_eq!(pokemon.level, 3);
    }

    #[test]
    fn test_pokemon_capitalized_fields() {
        let json = r#"{"Name":"Onix","Type":"grass","XP":7,"Power":"low","Level":9}"#;
        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.name, "Onix");
        assert_eq!(pokemon.pokemon_type, "grass");
        assert_eq!(pokemon.xp, 7);
        assert_eq!(pokemon.level, 9);
    }

    #[test]
    fn test_pokemon_wrong_field_type_fails() {
        let json = r#"{"name":"Mew","type":"legendary","xp":"lots","power":"psychic","level":1}"#;
        assert!(serde_json::from_str::<Pokemon>(json).is_err());
    }
}
