//! Driving a complex shaper over a run of text.

use crate::buffer::Buffer;
use crate::error::{ComplexScriptError, ShapingError};
use crate::gsub::{GsubApplier, LayoutFace};
use crate::map::FeatureMapBuilder;
use crate::normalize::normalize;
use crate::scripts::indic::IndicShaper;
use crate::scripts::{ComplexShaper, ScriptType};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

/// Properties shared by every character of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentProperties {
    /// The Indic1 (v1) OpenType script tag of the run, e.g. `deva`.
    pub script: u32,
    pub language: Option<u32>,
    pub direction: TextDirection,
}

/// Shapes `text` with the complex shaper for `props.script`.
///
/// Features are handed to `gsub` stage by stage, with the shaper's pause
/// callbacks run in between. The returned buffer holds the reordered glyph
/// slots with their feature masks.
pub fn shape(
    face: &dyn LayoutFace,
    gsub: &mut dyn GsubApplier,
    props: &SegmentProperties,
    text: &str,
) -> Result<Buffer, ShapingError> {
    let shaper: &dyn ComplexShaper = match ScriptType::from(props.script) {
        ScriptType::Indic => &IndicShaper,
        ScriptType::Default => {
            return Err(ComplexScriptError::UnsupportedScript(props.script).into())
        }
    };

    let mut buffer = Buffer::from_text(text);
    if buffer.is_empty() {
        return Ok(buffer);
    }

    let mut builder = FeatureMapBuilder::new(props);
    shaper.collect_features(&mut builder, props);
    let map = builder.compile(face);

    normalize(&mut buffer, shaper.normalization_preference());
    buffer.reset_masks(map.global_mask());
    shaper.setup_masks(&map, &mut buffer, face)?;

    for stage in map.stages() {
        for feature in &stage.features {
            gsub.apply_feature(feature, &mut buffer)?;
        }
        if let Some(pause) = stage.pause {
            pause(&map, face, &mut buffer)?;
        }
    }

    Ok(buffer)
}
