//! Feature planning: which GSUB features run, in what order, and where the
//! shaper gets to pause between them.

use log::debug;
use rustc_hash::FxHashMap;

use crate::buffer::Buffer;
use crate::error::ShapingError;
use crate::gsub::{FeatureInfo, FeatureMask, LayoutFace};
use crate::scripts;
use crate::shape::SegmentProperties;
use crate::tag::DisplayTag;

/// Callback run by the driver between two groups of features.
pub type PauseFunc = fn(&FeatureMap, &dyn LayoutFace, &mut Buffer) -> Result<(), ShapingError>;

#[derive(Clone, Copy)]
struct FeatureRequest {
    feature_tag: u32,
    global: bool,
    stage: usize,
}

/// Collects feature requests and pauses from a complex shaper.
pub struct FeatureMapBuilder {
    script_tags: Vec<u32>,
    features: Vec<FeatureRequest>,
    pauses: Vec<Option<PauseFunc>>,
}

/// A group of features applied together, followed by an optional pause.
pub struct Stage {
    pub features: Vec<FeatureInfo>,
    pub pause: Option<PauseFunc>,
}

/// The compiled result of a [`FeatureMapBuilder`].
pub struct FeatureMap {
    chosen_script: u32,
    masks: FxHashMap<u32, FeatureMask>,
    global_mask: FeatureMask,
    stages: Vec<Stage>,
}

impl FeatureMapBuilder {
    pub fn new(props: &SegmentProperties) -> FeatureMapBuilder {
        FeatureMapBuilder {
            script_tags: scripts::script_tag_candidates(props.script),
            features: Vec::new(),
            pauses: Vec::new(),
        }
    }

    /// Requests `feature_tag` in the current stage.
    pub fn add_bool_feature(&mut self, feature_tag: u32, global: bool) {
        self.features.push(FeatureRequest {
            feature_tag,
            global,
            stage: self.pauses.len(),
        });
    }

    /// Closes the current stage. `pause` runs after its features.
    pub fn add_gsub_pause(&mut self, pause: Option<PauseFunc>) {
        self.pauses.push(pause);
    }

    pub fn compile(&self, face: &dyn LayoutFace) -> FeatureMap {
        let chosen_script = self
            .script_tags
            .iter()
            .copied()
            .find(|&script_tag| face.has_script(script_tag))
            .or_else(|| self.script_tags.last().copied())
            .unwrap_or(crate::tag::DFLT);
        debug!("chosen script '{}'", DisplayTag(chosen_script));

        // Merge duplicate requests: global if any request was, earliest stage wins.
        let mut merged: Vec<FeatureRequest> = Vec::with_capacity(self.features.len());
        let mut seen: FxHashMap<u32, usize> = FxHashMap::default();
        for request in &self.features {
            match seen.get(&request.feature_tag) {
                Some(&index) => merged[index].global |= request.global,
                None => {
                    seen.insert(request.feature_tag, merged.len());
                    merged.push(*request);
                }
            }
        }

        let mut stages: Vec<Stage> = self
            .pauses
            .iter()
            .map(|&pause| Stage {
                features: Vec::new(),
                pause,
            })
            .collect();
        stages.push(Stage {
            features: Vec::new(),
            pause: None,
        });

        let mut masks = FxHashMap::default();
        let mut global_mask = FeatureMask::empty();
        for request in merged {
            let mask = match FeatureMask::from_tag(request.feature_tag) {
                Some(mask) => mask,
                None => {
                    debug!(
                        "ignoring feature '{}' with no mask bit",
                        DisplayTag(request.feature_tag)
                    );
                    continue;
                }
            };
            if !face.has_feature(chosen_script, request.feature_tag) {
                continue;
            }

            masks.insert(request.feature_tag, mask);
            if request.global {
                global_mask |= mask;
            }
            stages[request.stage].features.push(FeatureInfo {
                feature_tag: request.feature_tag,
                mask,
                global: request.global,
            });
        }

        FeatureMap {
            chosen_script,
            masks,
            global_mask,
            stages,
        }
    }
}

impl FeatureMap {
    /// The OpenType script tag selected from the font.
    pub fn chosen_script(&self) -> u32 {
        self.chosen_script
    }

    /// The mask bit of an enabled feature; empty if the font lacks it.
    pub fn get_1_mask(&self, feature_tag: u32) -> FeatureMask {
        self.masks
            .get(&feature_tag)
            .copied()
            .unwrap_or(FeatureMask::empty())
    }

    /// Union of the masks of all enabled global features.
    pub fn global_mask(&self) -> FeatureMask {
        self.global_mask
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }
}
