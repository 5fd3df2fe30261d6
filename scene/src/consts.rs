//! Shared defaults for the scene crate.

// ── Camera ──────────────────────────────────────────────────────

/// Smallest zoom factor a default camera accepts.
pub const DEFAULT_MIN_ZOOM: f64 = 0.1;

/// Largest zoom factor a default camera accepts.
pub const DEFAULT_MAX_ZOOM: f64 = 5.0;

// ── History ─────────────────────────────────────────────────────

/// Undo depth used when no explicit capacity is configured.
pub const DEFAULT_MAX_STATES: usize = 50;

// ── Tilemaps ────────────────────────────────────────────────────

/// Default tile cell width and height in world units.
pub const DEFAULT_TILE_SIZE: u32 = 32;

/// Tileset name used when a tile doesn't name one.
pub const DEFAULT_TILESET: &str = "default";

// ── Document defaults ───────────────────────────────────────────

pub const DEFAULT_SCENE_NAME: &str = "Untitled Scene";
pub const DEFAULT_LAYER_NAME: &str = "Unnamed Layer";
pub const DEFAULT_ENTITY_NAME: &str = "Unnamed Entity";
pub const DEFAULT_TILEMAP_NAME: &str = "Unnamed Tilemap";

/// Indentation used when writing scene files.
pub const DOCUMENT_INDENT: &[u8] = b"    ";
