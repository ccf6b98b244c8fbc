use crate::constants::MAX_SELECTION;
use crate::resolver::resolve;
use crate::types::{BatchOutcome, CatalogApi, Resolution, SuccessTable};
use tracing::{debug, info, instrument, warn};

/// Runs the resolver over a batch of identifiers and classifies the outcome.
///
/// Blank entries are dropped and at most the first five survivors are
/// considered. Resolution is strictly sequential in request order, with
/// duplicates resolving independently. One hard failure anywhere collapses
/// the whole batch into an `ErrorReport`; successes from that batch are
/// logged for diagnostics but not returned.
#[instrument(skip(api, identifiers), fields(requested = identifiers.len()))]
pub async fn aggregate(api: &dyn CatalogApi, identifiers: &[String]) -> BatchOutcome {
    let selected: Vec<&str> = identifiers
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    if selected.len() > MAX_SELECTION {
        warn!(
            "Dropping {} identifiers beyond the limit of {}",
            selected.len() - MAX_SELECTION,
            MAX_SELECTION
        );
    }
    let selected = &selected[..selected.len().min(MAX_SELECTION)];

    if selected.is_empty() {
        info!("No identifiers selected, nothing to scout");
        return BatchOutcome::NoSelection;
    }

    let mut rows = Vec::with_capacity(selected.len());
    let mut failing_names = Vec::new();

    for identifier in selected {
        match resolve(api, identifier).await {
            Resolution::Resolved(record) => rows.push(record),
            Resolution::Failed(err) => {
                warn!("'{}' failed to resolve: {}", err.name, err.reason);
                failing_names.push(err.name);
            }
        }
    }

    if !failing_names.is_empty() {
        // All-or-nothing per batch: one failure discards the siblings too.
        for discarded in &rows {
            debug!("Discarding resolved '{}' from failed batch", discarded.name);
        }
        info!(
            "Batch failed: {}/{} identifiers unresolvable",
            failing_names.len(),
            selected.len()
        );
        return BatchOutcome::ErrorReport {
            names: failing_names,
        };
    }

    info!("Batch resolved cleanly with {} rows", rows.len());
    BatchOutcome::Success(SuccessTable { rows })
}

/// Consolidated single-message rendering of a failed batch.
pub fn error_report_message(names: &[String]) -> String {
    format!(
        "Error: The following Pokémon were not found or had an error: {}",
        names.join(", ")
    )
}
