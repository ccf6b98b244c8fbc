/// Public PokéAPI base URL; overridable via config or POKE_SCOUT_BASE_URL.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Listing limit large enough to cover the full national dex in one call.
pub const DEFAULT_LIST_LIMIT: u32 = 2000;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Upper bound on how many Pokémon one scouting run will look up.
pub const MAX_SELECTION: usize = 5;

/// Location value reported when a Pokémon has no known encounters.
pub const UNKNOWN_LOCATION: &str = "Unknown";
