use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Raw payload as returned from the PokéAPI, before field extraction.
pub type RawApiData = serde_json::Value;

/// The three remote operations the scouting pipeline is built on.
///
/// Implementations must surface non-success HTTP statuses as
/// `ScoutError::Status` so callers can tell them apart from transport
/// failures; the resolver formats different messages for each.
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync {
    /// One bounded listing call: `GET /pokemon?limit={limit}`.
    async fn list_pokemon(&self, limit: u32) -> Result<RawApiData>;

    /// Base attributes for one Pokémon: `GET /pokemon/{name}`.
    async fn fetch_pokemon(&self, name: &str) -> Result<RawApiData>;

    /// Encounter list keyed by the numeric id: `GET /pokemon/{id}/encounters`.
    async fn fetch_encounters(&self, id: i64) -> Result<RawApiData>;
}

/// A fully resolved Pokémon, one row of the scouting table.
///
/// `location` may hold a degraded error string when the encounter lookup
/// failed; that still counts as resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRecord {
    pub name: String,
    pub id: i64,
    pub height: i64,
    pub weight: i64,
    pub base_experience: i64,
    pub types: String,
    pub location: String,
}

/// Produced in place of a record when the base lookup fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionError {
    pub name: String,
    pub reason: String,
}

/// Outcome of resolving a single identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(ResolvedRecord),
    Failed(ResolutionError),
}

impl Resolution {
    pub fn is_failed(&self) -> bool {
        matches!(self, Resolution::Failed(_))
    }
}

/// Uniform table of resolved rows, ready for rendering or CSV export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessTable {
    pub rows: Vec<ResolvedRecord>,
}

impl SuccessTable {
    /// Fixed column set, in export order.
    pub const COLUMNS: [&'static str; 7] = [
        "name",
        "id",
        "height",
        "weight",
        "base_experience",
        "types",
        "location",
    ];

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Outcome of one scouting run over a batch of identifiers.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    /// No usable identifiers were supplied.
    NoSelection,
    /// At least one identifier failed its base lookup; `names` lists the
    /// failing identifiers in request order.
    ErrorReport { names: Vec<String> },
    /// Every identifier resolved; rows are in request order.
    Success(SuccessTable),
}
