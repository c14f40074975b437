// =============================================================================
// COMPLAINT LIFECYCLE
// =============================================================================

/// Prefix for public complaint tracking identifiers
pub const TRACKING_ID_PREFIX: &str = "C-";

/// Digits of entropy appended after the time component of a tracking id
pub const TRACKING_ID_RANDOM_DIGITS: usize = 4;

/// How many times identifier generation is retried on a store collision
/// before the filing request fails as exhausted
pub const MAX_ID_ATTEMPTS: u32 = 5;

/// Details text for the first history entry of every complaint
pub const INITIAL_HISTORY_DETAILS: &str = "Initial complaint filed by the citizen.";
