// src/constants.rs
//! Named constants for the wire format and the decoder's operating limits.

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

/// Field carrying the discriminator tag on every property object.
pub const TYPE_FIELD: &str = "type";

/// Key reported in errors when a single property is decoded on its own,
/// outside any named map (e.g. via `serde_json::from_value::<PageProperty>`).
pub const ANONYMOUS_ENTRY_KEY: &str = "<property>";

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Entry count at which a single decode call materializes entries on the
/// rayon pool instead of the calling thread.
///
/// Typical Notion schemas hold a few dozen properties; below this size the
/// hand-off to the pool costs more than the per-entry work.
pub const PARALLEL_DECODE_THRESHOLD: usize = 64;

// ---------------------------------------------------------------------------
// CLI output
// ---------------------------------------------------------------------------

/// Maximum characters of a property's plain text shown in the summary view.
pub const SUMMARY_VALUE_PREVIEW_LENGTH: usize = 60;
