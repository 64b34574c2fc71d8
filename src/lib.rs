//! Highlighter setup for slide decks.
//!
//! The host presentation framework calls [`shiki_setup`] once during its
//! build, keeps the returned [`HighlighterConfig`] for the session, and runs
//! the transformer chain around every highlighted code block:
//! [`HighlighterConfig::preprocess`] before the highlighter sees the source,
//! [`HighlighterConfig::postprocess`] over the markup it emits.

pub mod nuclear;
pub mod setup;
pub mod theme;
pub mod transform;

pub use setup::{HighlighterConfig, shiki_setup};
pub use theme::{AppearanceMode, ThemeSelection, UnknownMode};
pub use transform::{HighlightOptions, Transformer};
