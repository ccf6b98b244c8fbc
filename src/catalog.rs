use crate::types::CatalogApi;
use tracing::{info, instrument, warn};

/// Fetches candidate Pokémon names with one bounded listing call.
///
/// Never fails to the caller: any status or transport problem is logged and
/// an empty list returned, leaving the selection surface unpopulated. Names
/// come back in response order; callers sort for display if they want to.
#[instrument(skip(api))]
pub async fn list_candidate_names(api: &dyn CatalogApi, limit: u32) -> Vec<String> {
    match api.list_pokemon(limit).await {
        Ok(data) => {
            let names: Vec<String> = data["results"]
                .as_array()
                .map(|results| {
                    results
                        .iter()
                        .filter_map(|entry| entry["name"].as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default();
            info!("Fetched {} candidate names from catalog", names.len());
            names
        }
        Err(e) => {
            warn!("Error retrieving Pokémon list from API: {}", e);
            Vec::new()
        }
    }
}
