//! Spacing constants for consistent layout throughout the application.
//!
//! All spacing values are in pixels (f32) and follow a consistent scale.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Medium radius - cards, list rows
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Large radius - modals, dialogs, toasts
pub const BORDER_RADIUS_LG: f32 = 8.0;

// =============================================================================
// COMPONENT SIZES
// =============================================================================

/// Modal width - medium (Add/Delete dialogs)
pub const MODAL_WIDTH_MD: f32 = 480.0;

/// Maximum width of the quiz card
pub const QUIZ_CARD_WIDTH: f32 = 560.0;
