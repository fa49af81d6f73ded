pub mod indic;
mod syllable;

use crate::buffer::Buffer;
use crate::error::ShapingError;
use crate::gsub::LayoutFace;
use crate::map::{FeatureMap, FeatureMapBuilder};
use crate::normalize::NormalizationMode;
use crate::shape::SegmentProperties;
use crate::tag;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScriptType {
    Default,
    Indic,
}

impl From<u32> for ScriptType {
    fn from(script_tag: u32) -> Self {
        match script_tag {
            tag::LATN => ScriptType::Default,
            tag::CYRL => ScriptType::Default,
            tag::GREK => ScriptType::Default,
            tag::DEVA => ScriptType::Indic,
            tag::BENG => ScriptType::Indic,
            tag::GURU => ScriptType::Indic,
            tag::GUJR => ScriptType::Indic,
            tag::ORYA => ScriptType::Indic,
            tag::TAML => ScriptType::Indic,
            tag::TELU => ScriptType::Indic,
            tag::KNDA => ScriptType::Indic,
            tag::MLYM => ScriptType::Indic,
            tag::SINH => ScriptType::Indic,
            _ => ScriptType::Default,
        }
    }
}

/// The hooks a complex shaper exposes to the driver.
pub trait ComplexShaper {
    /// Appends the shaper's features and pauses, in application order.
    fn collect_features(&self, builder: &mut FeatureMapBuilder, props: &SegmentProperties);

    fn normalization_preference(&self) -> NormalizationMode;

    /// Runs once per buffer after normalization and before any feature.
    fn setup_masks(
        &self,
        map: &FeatureMap,
        buffer: &mut Buffer,
        face: &dyn LayoutFace,
    ) -> Result<(), ShapingError>;
}

/// OpenType script tags to look for in a font, most preferred first.
pub fn script_tag_candidates(script_tag: u32) -> Vec<u32> {
    match ScriptType::from(script_tag) {
        ScriptType::Indic => match indic::indic2_tag(script_tag) {
            Some(indic2_tag) => vec![indic2_tag, script_tag],
            None => vec![script_tag],
        },
        ScriptType::Default => vec![script_tag],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_type() {
        assert_eq!(ScriptType::Indic, ScriptType::from(tag::DEVA));
        assert_eq!(ScriptType::Indic, ScriptType::from(tag::SINH));
        assert_eq!(ScriptType::Default, ScriptType::from(tag::LATN));
        assert_eq!(ScriptType::Default, ScriptType::from(tag::DEV2));
    }

    #[test]
    fn test_script_tag_candidates() {
        assert_eq!(vec![tag::DEV2, tag::DEVA], script_tag_candidates(tag::DEVA));
        assert_eq!(vec![tag::MLM2, tag::MLYM], script_tag_candidates(tag::MLYM));
        assert_eq!(vec![tag::SINH], script_tag_candidates(tag::SINH));
        assert_eq!(vec![tag::LATN], script_tag_candidates(tag::LATN));
    }
}
