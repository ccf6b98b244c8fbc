use crate::constants::UNKNOWN_LOCATION;
use crate::error::{Result, ScoutError};
use crate::types::{CatalogApi, RawApiData, Resolution, ResolutionError, ResolvedRecord};
use tracing::{debug, instrument, warn};

/// Resolves one identifier to a record via two dependent lookups.
///
/// The base lookup is hard: any failure there (non-success status, transport
/// error, missing field) turns the whole record into a `ResolutionError`.
/// The encounter lookup is soft: its failures only degrade the `location`
/// field to an error string, and the record still counts as resolved.
#[instrument(skip(api))]
pub async fn resolve(api: &dyn CatalogApi, identifier: &str) -> Resolution {
    match resolve_record(api, identifier).await {
        Ok(record) => {
            debug!("Resolved {} (id {})", record.name, record.id);
            Resolution::Resolved(record)
        }
        Err(e) => {
            warn!("Failed to resolve '{}': {}", identifier, e);
            Resolution::Failed(ResolutionError {
                name: identifier.to_string(),
                reason: base_failure_reason(e),
            })
        }
    }
}

async fn resolve_record(api: &dyn CatalogApi, identifier: &str) -> Result<ResolvedRecord> {
    let data = api.fetch_pokemon(&identifier.to_lowercase()).await?;

    let name = data["name"]
        .as_str()
        .ok_or_else(|| ScoutError::MissingField("name not found".into()))?
        .to_string();
    let id = data["id"]
        .as_i64()
        .ok_or_else(|| ScoutError::MissingField("id not found".into()))?;
    let height = data["height"]
        .as_i64()
        .ok_or_else(|| ScoutError::MissingField("height not found".into()))?;
    let weight = data["weight"]
        .as_i64()
        .ok_or_else(|| ScoutError::MissingField("weight not found".into()))?;
    let base_experience = data["base_experience"]
        .as_i64()
        .ok_or_else(|| ScoutError::MissingField("base_experience not found".into()))?;
    let types = data["types"]
        .as_array()
        .ok_or_else(|| ScoutError::MissingField("types not found".into()))?
        .iter()
        .filter_map(|slot| slot["type"]["name"].as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let location = fetch_location(api, id).await;

    Ok(ResolvedRecord {
        name,
        id,
        height,
        weight,
        base_experience,
        types,
        location,
    })
}

/// Status failures on the base lookup get the catalog's "not found" wording;
/// everything else carries its own error text.
fn base_failure_reason(err: ScoutError) -> String {
    match err {
        ScoutError::Status { code } => format!("Data not found (status code {code})"),
        other => other.to_string(),
    }
}

/// Second-stage lookup; never fails, only degrades the location string.
async fn fetch_location(api: &dyn CatalogApi, id: i64) -> String {
    match api.fetch_encounters(id).await {
        Ok(payload) => join_location_areas(&payload),
        Err(ScoutError::Status { code }) => {
            format!("Error retrieving location (status code {code})")
        }
        Err(e) => format!("Exception occurred fetching location: {e}"),
    }
}

fn join_location_areas(payload: &RawApiData) -> String {
    let names: Vec<&str> = payload
        .as_array()
        .map(|encounters| {
            encounters
                .iter()
                .filter_map(|encounter| encounter["location_area"]["name"].as_str())
                .collect()
        })
        .unwrap_or_default();

    if names.is_empty() {
        UNKNOWN_LOCATION.to_string()
    } else {
        names.join(", ")
    }
}
