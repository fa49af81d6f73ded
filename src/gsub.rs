//! Glyph substitution (`gsub`) interface.
//!
//! Lookup application is the job of the caller's layout engine. This module
//! defines the feature masks the shaper attaches to glyphs and the traits the
//! engine implements so the shaper can drive it.

use bitflags::bitflags;

use crate::buffer::Buffer;
use crate::error::ShapingError;
use crate::tag;

bitflags! {
    /// One bit per GSUB feature known to the shaper.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FeatureMask: u32 {
        const LOCL = 1 << 0;
        const CCMP = 1 << 1;
        const NUKT = 1 << 2;
        const AKHN = 1 << 3;
        const RPHF = 1 << 4;
        const RKRF = 1 << 5;
        const PREF = 1 << 6;
        const BLWF = 1 << 7;
        const HALF = 1 << 8;
        const VATU = 1 << 9;
        const PSTF = 1 << 10;
        const CJCT = 1 << 11;
        const PRES = 1 << 12;
        const ABVS = 1 << 13;
        const BLWS = 1 << 14;
        const PSTS = 1 << 15;
        const HALN = 1 << 16;
        const DIST = 1 << 17;
        const ABVM = 1 << 18;
        const BLWM = 1 << 19;
    }
}

impl Default for FeatureMask {
    fn default() -> Self {
        FeatureMask::empty()
    }
}

impl FeatureMask {
    /// Returns the mask bit reserved for `feature_tag`, or `None` if the
    /// feature is not one the shaper knows about.
    pub fn from_tag(feature_tag: u32) -> Option<FeatureMask> {
        let mask = match feature_tag {
            tag::LOCL => FeatureMask::LOCL,
            tag::CCMP => FeatureMask::CCMP,
            tag::NUKT => FeatureMask::NUKT,
            tag::AKHN => FeatureMask::AKHN,
            tag::RPHF => FeatureMask::RPHF,
            tag::RKRF => FeatureMask::RKRF,
            tag::PREF => FeatureMask::PREF,
            tag::BLWF => FeatureMask::BLWF,
            tag::HALF => FeatureMask::HALF,
            tag::VATU => FeatureMask::VATU,
            tag::PSTF => FeatureMask::PSTF,
            tag::CJCT => FeatureMask::CJCT,
            tag::PRES => FeatureMask::PRES,
            tag::ABVS => FeatureMask::ABVS,
            tag::BLWS => FeatureMask::BLWS,
            tag::PSTS => FeatureMask::PSTS,
            tag::HALN => FeatureMask::HALN,
            tag::DIST => FeatureMask::DIST,
            tag::ABVM => FeatureMask::ABVM,
            tag::BLWM => FeatureMask::BLWM,
            _ => return None,
        };
        Some(mask)
    }
}

/// A feature resolved against a font, ready to be applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureInfo {
    pub feature_tag: u32,
    /// Glyphs take part in the feature iff their mask intersects this one.
    pub mask: FeatureMask,
    pub global: bool,
}

impl FeatureInfo {
    pub fn applies_to(&self, glyph_mask: FeatureMask) -> bool {
        glyph_mask.intersects(self.mask)
    }
}

/// The parts of a font's layout tables the shaper needs to plan a run.
pub trait LayoutFace {
    /// Does the GSUB table declare `script_tag`?
    fn has_script(&self, script_tag: u32) -> bool;

    /// Does the GSUB table implement `feature_tag` for `script_tag`?
    fn has_feature(&self, script_tag: u32, feature_tag: u32) -> bool;
}

/// Applies the lookups of a single GSUB feature to a buffer.
///
/// Implementations must only touch glyphs for which
/// [`FeatureInfo::applies_to`] holds.
pub trait GsubApplier {
    fn apply_feature(
        &mut self,
        feature: &FeatureInfo,
        buffer: &mut Buffer,
    ) -> Result<(), ShapingError>;
}
