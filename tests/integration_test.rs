use anyhow::Result;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

use poke_scout::aggregator::aggregate;
use poke_scout::catalog::list_candidate_names;
use poke_scout::error::ScoutError;
use poke_scout::export::export_to_file;
use poke_scout::types::{BatchOutcome, CatalogApi, RawApiData};

/// Fixture API serving a two-entry catalog, with pikachu's encounter list
/// deliberately empty.
struct FixtureApi {
    pokemon: HashMap<String, Value>,
    encounters: HashMap<i64, Value>,
}

impl FixtureApi {
    fn new() -> Self {
        let mut pokemon = HashMap::new();
        pokemon.insert(
            "pikachu".to_string(),
            json!({
                "name": "pikachu",
                "id": 25,
                "height": 4,
                "weight": 60,
                "base_experience": 112,
                "types": [{"slot": 1, "type": {"name": "electric"}}]
            }),
        );
        pokemon.insert(
            "bulbasaur".to_string(),
            json!({
                "name": "bulbasaur",
                "id": 1,
                "height": 7,
                "weight": 69,
                "base_experience": 64,
                "types": [
                    {"slot": 1, "type": {"name": "grass"}},
                    {"slot": 2, "type": {"name": "poison"}}
                ]
            }),
        );

        let mut encounters = HashMap::new();
        encounters.insert(25, json!([]));
        encounters.insert(
            1,
            json!([
                {"location_area": {"name": "cerulean-city-area"}},
                {"location_area": {"name": "pallet-town-area"}}
            ]),
        );

        Self { pokemon, encounters }
    }
}

#[async_trait::async_trait]
impl CatalogApi for FixtureApi {
    async fn list_pokemon(&self, _limit: u32) -> poke_scout::error::Result<RawApiData> {
        Ok(json!({
            "results": [
                {"name": "pikachu"},
                {"name": "bulbasaur"}
            ]
        }))
    }

    async fn fetch_pokemon(&self, name: &str) -> poke_scout::error::Result<RawApiData> {
        self.pokemon
            .get(name)
            .cloned()
            .ok_or(ScoutError::Status { code: 404 })
    }

    async fn fetch_encounters(&self, id: i64) -> poke_scout::error::Result<RawApiData> {
        Ok(self.encounters.get(&id).cloned().unwrap_or(json!([])))
    }
}

#[tokio::test]
async fn test_scout_and_export_flow() -> Result<()> {
    let api = FixtureApi::new();

    // Catalog listing feeds the selection surface
    let names = list_candidate_names(&api, 2000).await;
    assert_eq!(names, vec!["pikachu", "bulbasaur"]);

    // Resolve a clean batch
    let outcome = aggregate(
        &api,
        &["pikachu".to_string(), "bulbasaur".to_string()],
    )
    .await;

    let table = match outcome {
        BatchOutcome::Success(table) => table,
        other => panic!("expected success table, got {:?}", other),
    };
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[0].name, "pikachu");
    assert_eq!(table.rows[0].location, "Unknown");
    assert_eq!(table.rows[1].types, "grass, poison");
    assert_eq!(table.rows[1].location, "cerulean-city-area, pallet-town-area");

    // Export the table and read the file back
    let temp_dir = tempdir()?;
    let output_dir = temp_dir.path().to_str().unwrap();
    let path = export_to_file(&table.rows, output_dir)?;

    let content = fs::read_to_string(&path)?;
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "name,id,height,weight,base_experience,types,location"
    );
    assert_eq!(lines.next().unwrap(), "pikachu,25,4,60,112,electric,Unknown");
    assert_eq!(
        lines.next().unwrap(),
        "bulbasaur,1,7,69,64,\"grass, poison\",\"cerulean-city-area, pallet-town-area\""
    );

    Ok(())
}

#[tokio::test]
async fn test_unresolvable_name_collapses_batch() -> Result<()> {
    let api = FixtureApi::new();

    let outcome = aggregate(
        &api,
        &["pikachu".to_string(), "not-a-real-pokemon".to_string()],
    )
    .await;

    match outcome {
        BatchOutcome::ErrorReport { names } => {
            assert_eq!(names, vec!["not-a-real-pokemon"]);
        }
        other => panic!("expected error report, got {:?}", other),
    }

    Ok(())
}
