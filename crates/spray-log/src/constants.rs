/// Token count that triggers an automatic batch flush.
pub const DEFAULT_FLUSH_THRESHOLD: usize = 50;

/// Pause before the first replayed batch and after each batch, in milliseconds.
pub const DEFAULT_BATCH_DELAY_MS: u64 = 200;

/// Field separator in the token wire format.
pub const TOKEN_DELIMITER: char = '_';

/// Number of fields in a well-formed token.
pub const TOKEN_FIELD_COUNT: usize = 5;

/// Spray radius range exposed by the toolbar slider.
pub const MIN_SPRAY_RADIUS: u32 = 5;
pub const MAX_SPRAY_RADIUS: u32 = 100;

/// Spray density range exposed by the toolbar slider.
pub const MIN_SPRAY_DENSITY: u32 = 10;
pub const MAX_SPRAY_DENSITY: u32 = 100;
