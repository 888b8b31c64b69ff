/// Front-end tuning constants for the Canvas2D map and its DOM chrome.
///
/// Layout and emphasis values live in `sonic_core`; these only concern how
/// the browser surface draws and wires them.
// DOM element ids
pub const CANVAS_ID: &str = "sonic-canvas";
pub const TRACK_LIST_ID: &str = "track-list";
pub const NOTICE_ID: &str = "notice";

// Notice visibility (milliseconds)
pub const NOTICE_DURATION_MS: i32 = 2500;

// Marker drawing
pub const MARKER_RADIUS_WORLD: f32 = 0.9; // world-space radius at emphasis scale 1.0
pub const MARKER_MIN_PX: f32 = 3.0;
pub const GLOW_BLUR_PX: f32 = 24.0; // shadow blur at emissive 1.0

// Connection lines
pub const LINE_WIDTH_PX: f32 = 1.0;
pub const LINE_EMPHASIS_WIDTH_PX: f32 = 2.0;

// Tooltip
pub const TOOLTIP_OFFSET_PX: f32 = 18.0;
pub const TOOLTIP_PADDING_PX: f32 = 8.0;
pub const TOOLTIP_LINE_PX: f32 = 15.0;
pub const TOOLTIP_FONT: &str = "bold 12px sans-serif";
pub const TOOLTIP_SUB_FONT: &str = "10px monospace";

// Colors
pub const BACKGROUND_CSS: &str = "#050507";
pub const TOOLTIP_BG_CSS: &str = "rgba(0,0,0,0.8)";
pub const TOOLTIP_TEXT_CSS: &str = "#ffffff";
pub const TOOLTIP_SCORE_CSS: &str = "#22d3ee";

// Picking
pub const SEED_PICK_MULTIPLIER: f32 = 1.5; // seed marker is larger than matches
