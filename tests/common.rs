#![allow(dead_code)]

use indic_shaper::buffer::{Buffer, BufferVars};
use indic_shaper::error::ShapingError;
use indic_shaper::gsub::{FeatureInfo, GsubApplier, LayoutFace};
use indic_shaper::shape::{self, SegmentProperties, TextDirection};
use indic_shaper::tag;

/// A font declaring `scripts`, each supporting every feature in `features`.
pub struct FakeFace {
    pub scripts: Vec<u32>,
    pub features: Vec<u32>,
}

impl FakeFace {
    /// A `dev2` font with all of the Indic features.
    pub fn devanagari() -> FakeFace {
        FakeFace {
            scripts: vec![tag::DEV2, tag::DEVA],
            features: vec![
                tag::LOCL,
                tag::CCMP,
                tag::NUKT,
                tag::AKHN,
                tag::RPHF,
                tag::RKRF,
                tag::PREF,
                tag::BLWF,
                tag::HALF,
                tag::VATU,
                tag::PSTF,
                tag::CJCT,
                tag::PRES,
                tag::ABVS,
                tag::BLWS,
                tag::PSTS,
                tag::HALN,
                tag::DIST,
                tag::ABVM,
                tag::BLWM,
            ],
        }
    }

    pub fn without_feature(mut self, feature_tag: u32) -> FakeFace {
        self.features.retain(|&t| t != feature_tag);
        self
    }
}

impl LayoutFace for FakeFace {
    fn has_script(&self, script_tag: u32) -> bool {
        self.scripts.contains(&script_tag)
    }

    fn has_feature(&self, script_tag: u32, feature_tag: u32) -> bool {
        self.has_script(script_tag) && self.features.contains(&feature_tag)
    }
}

/// One call to [`GsubApplier::apply_feature`].
#[derive(Debug)]
pub struct Applied {
    pub feature_tag: u32,
    /// The characters the feature would touch, in buffer order.
    pub targets: Vec<char>,
    pub vars: BufferVars,
}

/// Applies nothing; records what each feature would have been applied to.
#[derive(Default)]
pub struct RecordingApplier {
    pub applied: Vec<Applied>,
}

impl RecordingApplier {
    pub fn feature_tags(&self) -> Vec<u32> {
        self.applied.iter().map(|a| a.feature_tag).collect()
    }

    pub fn get(&self, feature_tag: u32) -> Option<&Applied> {
        self.applied.iter().find(|a| a.feature_tag == feature_tag)
    }

    pub fn targets(&self, feature_tag: u32) -> Vec<char> {
        self.get(feature_tag)
            .map(|a| a.targets.clone())
            .unwrap_or_default()
    }
}

impl GsubApplier for RecordingApplier {
    fn apply_feature(
        &mut self,
        feature: &FeatureInfo,
        buffer: &mut Buffer,
    ) -> Result<(), ShapingError> {
        let targets = buffer
            .info
            .iter()
            .filter(|info| feature.applies_to(info.mask))
            .map(|info| info.codepoint)
            .collect();
        self.applied.push(Applied {
            feature_tag: feature.feature_tag,
            targets,
            vars: buffer.allocated_vars(),
        });
        Ok(())
    }
}

pub fn props(script: u32) -> SegmentProperties {
    SegmentProperties {
        script,
        language: None,
        direction: TextDirection::LeftToRight,
    }
}

/// Shapes Devanagari `text` against `face`.
pub fn shape_deva(face: &FakeFace, text: &str) -> (Buffer, RecordingApplier) {
    let mut gsub = RecordingApplier::default();
    let buffer = shape::shape(face, &mut gsub, &props(tag::DEVA), text).expect("shaping failed");
    (buffer, gsub)
}
