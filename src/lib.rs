#![warn(rust_2018_idioms)]

//! # Indic shaper
//!
//! The complex-script core of an OpenType shaper for the Indic scripts
//! (Devanagari, Bengali, Gurmukhi, Gujarati, Oriya, Tamil, Telugu, Kannada,
//! Malayalam, and Sinhala).
//!
//! The shaper classifies each character, splits the text into syllables,
//! reorders each consonant syllable into visual order, and marks which
//! glyphs take part in each GSUB feature. Lookup application is left to the
//! caller through the [`gsub::GsubApplier`] trait.
//!
//! ```
//! use indic_shaper::buffer::Buffer;
//! use indic_shaper::error::ShapingError;
//! use indic_shaper::gsub::{FeatureInfo, GsubApplier, LayoutFace};
//! use indic_shaper::shape::{shape, SegmentProperties, TextDirection};
//! use indic_shaper::tag;
//!
//! struct Face;
//!
//! impl LayoutFace for Face {
//!     fn has_script(&self, script_tag: u32) -> bool {
//!         script_tag == tag::DEV2
//!     }
//!
//!     fn has_feature(&self, _script_tag: u32, _feature_tag: u32) -> bool {
//!         true
//!     }
//! }
//!
//! struct Lookups;
//!
//! impl GsubApplier for Lookups {
//!     fn apply_feature(
//!         &mut self,
//!         _feature: &FeatureInfo,
//!         _buffer: &mut Buffer,
//!     ) -> Result<(), ShapingError> {
//!         Ok(())
//!     }
//! }
//!
//! let props = SegmentProperties {
//!     script: tag::DEVA,
//!     language: None,
//!     direction: TextDirection::LeftToRight,
//! };
//! // RA HALANT KA: the reph moves after the base consonant.
//! let buffer = shape(&Face, &mut Lookups, &props, "\u{0930}\u{094D}\u{0915}")?;
//! let order: String = buffer.codepoints().collect();
//! assert_eq!("\u{0915}\u{0930}\u{094D}", order);
//! # Ok::<(), ShapingError>(())
//! ```

pub mod buffer;
pub mod error;
pub mod gsub;
pub mod map;
pub mod normalize;
pub mod scripts;
pub mod shape;
pub mod tag;
