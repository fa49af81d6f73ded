//! Implementation of font shaping for Indic scripts

pub(crate) mod table;

use log::{debug, trace};

use crate::buffer::{Buffer, BufferVars, GlyphInfo};
use crate::error::ShapingError;
use crate::gsub::{FeatureMask, LayoutFace};
use crate::map::{FeatureMap, FeatureMapBuilder};
use crate::normalize::NormalizationMode;
use crate::shape::SegmentProperties;
use crate::tag;

use super::syllable::*;
use super::ComplexShaper;

/// Syllables longer than this are left unsorted.
const MAX_SORTED_SYLLABLE_LEN: usize = 20;

const INDIC_VARS: BufferVars = BufferVars::INDIC_CATEGORY.union(BufferVars::INDIC_POSITION);

/// Shaping category of a character. Only the segmenter and reorderer look
/// at it; it never changes once assigned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Category {
    Other = 0,
    C = 1,
    Ra = 2,
    V = 3,
    N = 4,
    H = 5,
    Zwnj = 6,
    Zwj = 7,
    M = 8,
    SM = 9,
    VD = 10,
    A = 11,
    Nbsp = 12,
}

impl Category {
    fn from_u8(value: u8) -> Category {
        match value {
            1 => Category::C,
            2 => Category::Ra,
            3 => Category::V,
            4 => Category::N,
            5 => Category::H,
            6 => Category::Zwnj,
            7 => Category::Zwj,
            8 => Category::M,
            9 => Category::SM,
            10 => Category::VD,
            11 => Category::A,
            12 => Category::Nbsp,
            _ => Category::Other,
        }
    }
}

/// Where a character ends up relative to the base consonant. Syllables are
/// sorted on this value, so the declaration order matters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Position {
    PreC = 0,
    BaseC = 1,
    AboveC = 2,
    BelowC = 3,
    PostC = 4,
    PreM = 5,
    AboveM = 6,
    BelowM = 7,
    PostM = 8,
    Smvd = 9,
    Reph = 10,
    End = 11,
}

impl Position {
    fn from_u8(value: u8) -> Position {
        match value {
            0 => Position::PreC,
            1 => Position::BaseC,
            2 => Position::AboveC,
            3 => Position::BelowC,
            4 => Position::PostC,
            5 => Position::PreM,
            6 => Position::AboveM,
            7 => Position::BelowM,
            8 => Position::PostM,
            9 => Position::Smvd,
            10 => Position::Reph,
            _ => Position::End,
        }
    }
}

// The category lives in the low nibble of the shaper variable, the position
// in the high nibble.
impl GlyphInfo {
    pub fn indic_category(&self) -> Category {
        Category::from_u8(self.shaper_var & 0x0F)
    }

    pub fn set_indic_category(&mut self, category: Category) {
        self.shaper_var = (self.shaper_var & 0xF0) | category as u8;
    }

    pub fn indic_position(&self) -> Position {
        Position::from_u8(self.shaper_var >> 4)
    }

    pub fn set_indic_position(&mut self, position: Position) {
        self.shaper_var = (self.shaper_var & 0x0F) | ((position as u8) << 4);
    }
}

const BASIC_FEATURE_COUNT: usize = 10;

#[derive(Copy, Clone, Debug, PartialEq)]
enum BasicFeature {
    Nukt,
    Akhn,
    Rphf,
    Rkrf,
    Pref,
    Blwf,
    Half,
    Vatu,
    Pstf,
    Cjct,
}

impl BasicFeature {
    const ALL: [BasicFeature; BASIC_FEATURE_COUNT] = [
        BasicFeature::Nukt,
        BasicFeature::Akhn,
        BasicFeature::Rphf,
        BasicFeature::Rkrf,
        BasicFeature::Pref,
        BasicFeature::Blwf,
        BasicFeature::Half,
        BasicFeature::Vatu,
        BasicFeature::Pstf,
        BasicFeature::Cjct,
    ];

    fn tag(self) -> u32 {
        match self {
            BasicFeature::Nukt => tag::NUKT,
            BasicFeature::Akhn => tag::AKHN,
            BasicFeature::Rphf => tag::RPHF,
            BasicFeature::Rkrf => tag::RKRF,
            BasicFeature::Pref => tag::PREF,
            BasicFeature::Blwf => tag::BLWF,
            BasicFeature::Half => tag::HALF,
            BasicFeature::Vatu => tag::VATU,
            BasicFeature::Pstf => tag::PSTF,
            BasicFeature::Cjct => tag::CJCT,
        }
    }

    // Returns `true` if feature applies to the entire glyph buffer.
    fn is_global(self) -> bool {
        match self {
            BasicFeature::Nukt => true,
            BasicFeature::Akhn => false,
            BasicFeature::Rphf => false,
            BasicFeature::Rkrf => true,
            BasicFeature::Pref => false,
            BasicFeature::Blwf => false,
            BasicFeature::Half => false,
            BasicFeature::Vatu => true,
            BasicFeature::Pstf => false,
            BasicFeature::Cjct => false,
        }
    }
}

/// Presentation features, applied to every glyph after final reordering.
const OTHER_FEATURES: [u32; 8] = [
    tag::PRES,
    tag::ABVS,
    tag::BLWS,
    tag::PSTS,
    tag::HALN,
    tag::DIST,
    tag::ABVM,
    tag::BLWM,
];

/// Mask bits of the basic features, as enabled by the font.
struct IndicMasks([FeatureMask; BASIC_FEATURE_COUNT]);

impl IndicMasks {
    fn new(map: &FeatureMap) -> IndicMasks {
        let mut masks = [FeatureMask::empty(); BASIC_FEATURE_COUNT];
        for feature in BasicFeature::ALL {
            masks[feature as usize] = map.get_1_mask(feature.tag());
        }
        IndicMasks(masks)
    }

    fn get(&self, feature: BasicFeature) -> FeatureMask {
        self.0[feature as usize]
    }
}

/// Maps an Indic1 script tag to its Indic2 counterpart. Sinhala has none.
pub fn indic2_tag(indic1_tag: u32) -> Option<u32> {
    match indic1_tag {
        tag::DEVA => Some(tag::DEV2),
        tag::BENG => Some(tag::BNG2),
        tag::GURU => Some(tag::GUR2),
        tag::GUJR => Some(tag::GJR2),
        tag::ORYA => Some(tag::ORY2),
        tag::TAML => Some(tag::TML2),
        tag::TELU => Some(tag::TEL2),
        tag::KNDA => Some(tag::KND2),
        tag::MLYM => Some(tag::MLM2),
        _ => None,
    }
}

/// Shaper for the Indic scripts with a Devanagari-like structure.
pub struct IndicShaper;

impl ComplexShaper for IndicShaper {
    fn collect_features(&self, builder: &mut FeatureMapBuilder, _props: &SegmentProperties) {
        builder.add_bool_feature(tag::LOCL, true);
        // Decompositions in `ccmp` have to happen before reordering.
        builder.add_bool_feature(tag::CCMP, true);

        builder.add_gsub_pause(Some(initial_reordering));
        for feature in BasicFeature::ALL {
            builder.add_bool_feature(feature.tag(), feature.is_global());
            builder.add_gsub_pause(None);
        }
        builder.add_gsub_pause(Some(final_reordering));

        for feature_tag in OTHER_FEATURES {
            builder.add_bool_feature(feature_tag, true);
            builder.add_gsub_pause(None);
        }
    }

    fn normalization_preference(&self) -> NormalizationMode {
        NormalizationMode::Decomposed
    }

    fn setup_masks(
        &self,
        _map: &FeatureMap,
        buffer: &mut Buffer,
        _face: &dyn LayoutFace,
    ) -> Result<(), ShapingError> {
        buffer.allocate_var(INDIC_VARS)?;
        buffer.info.iter_mut().for_each(set_indic_properties);
        Ok(())
    }
}

fn set_indic_properties(info: &mut GlyphInfo) {
    let ch = info.codepoint;
    let (mut category, mut position) = table::indic_categories(ch);

    if category == Category::C {
        position = table::consonant_position(ch);
        if table::is_ra(ch) {
            category = Category::Ra;
        }
    } else if category == Category::SM || category == Category::VD {
        position = Position::Smvd;
    } else if ch == '\u{200C}' {
        category = Category::Zwnj;
    } else if ch == '\u{200D}' {
        category = Category::Zwj;
    }

    // Devanagari Stress Sign Udatta
    if ch == '\u{0952}' {
        category = Category::A;
        position = Position::Smvd;
    }

    info.set_indic_category(category);
    info.set_indic_position(position);
}

/////////////////////////////////////////////////////////////////////////////
// Syllable state machine
/////////////////////////////////////////////////////////////////////////////

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SyllableKind {
    Consonant,
    Vowel,
    Standalone,
    NonIndic,
}

/// A run of glyphs `start..end` reordered as a unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Syllable {
    pub start: usize,
    pub end: usize,
    pub kind: SyllableKind,
}

impl SyllableChar for GlyphInfo {
    type Class = Category;

    fn class(&self) -> Category {
        self.indic_category()
    }
}

fn consonant(c: Category) -> bool {
    c == Category::C || c == Category::Ra
}

fn ra(c: Category) -> bool {
    c == Category::Ra
}

fn vowel(c: Category) -> bool {
    c == Category::V
}

fn nukta(c: Category) -> bool {
    c == Category::N
}

fn halant(c: Category) -> bool {
    c == Category::H
}

fn zwj(c: Category) -> bool {
    c == Category::Zwj
}

fn joiner(c: Category) -> bool {
    c == Category::Zwj || c == Category::Zwnj
}

fn matra(c: Category) -> bool {
    c == Category::M
}

fn syllable_modifier(c: Category) -> bool {
    c == Category::SM
}

fn vedic_sign(c: Category) -> bool {
    c == Category::VD
}

fn stress_mark(c: Category) -> bool {
    c == Category::A
}

fn placeholder(c: Category) -> bool {
    c == Category::Nbsp
}

// (C | Ra)
fn match_c(cs: &[GlyphInfo]) -> Option<usize> {
    match_one(consonant)(cs)
}

// (ZWJ | ZWNJ)
fn match_z(cs: &[GlyphInfo]) -> Option<usize> {
    match_one(joiner)(cs)
}

// Ra H
fn match_reph(cs: &[GlyphInfo]) -> Option<usize> {
    match_seq(match_one(ra), match_one(halant))(cs)
}

// H z?
fn match_halant_z(cs: &[GlyphInfo]) -> Option<usize> {
    match_seq(match_one(halant), match_optional(match_z))(cs)
}

// c N? (z H | H z?)
fn match_half_consonant(cs: &[GlyphInfo]) -> Option<usize> {
    match_seq(
        match_c,
        match_seq(
            match_optional(match_one(nukta)),
            match_either(match_seq(match_z, match_one(halant)), match_halant_z),
        ),
    )(cs)
}

// M N? H?
fn match_matra_group(cs: &[GlyphInfo]) -> Option<usize> {
    match_seq(
        match_one(matra),
        match_seq(
            match_optional(match_one(nukta)),
            match_optional(match_one(halant)),
        ),
    )(cs)
}

// SM? (VD VD?)?
fn match_syllable_tail(cs: &[GlyphInfo]) -> Option<usize> {
    match_seq(
        match_optional(match_one(syllable_modifier)),
        match_optional(match_seq(
            match_one(vedic_sign),
            match_optional(match_one(vedic_sign)),
        )),
    )(cs)
}

// matra_group* syllable_tail
fn match_matras_and_tail(cs: &[GlyphInfo]) -> Option<usize> {
    match_repeat_then(match_matra_group, match_syllable_tail)(cs)
}

// c N? A? (H z? | matra_group*)? syllable_tail
fn match_main_consonant(cs: &[GlyphInfo]) -> Option<usize> {
    match_seq(
        match_c,
        match_seq(
            match_optional(match_one(nukta)),
            match_seq(
                match_optional(match_one(stress_mark)),
                match_either(
                    match_seq(match_halant_z, match_syllable_tail),
                    match_matras_and_tail,
                ),
            ),
        ),
    )(cs)
}

// (c N? (z H | H z?))* c N? A? (H z? | matra_group*)? syllable_tail
fn match_consonant_syllable(cs: &[GlyphInfo]) -> Option<usize> {
    match_repeat_then(match_half_consonant, match_main_consonant)(cs)
}

// (Ra H)? V N? (z H c | ZWJ c)? matra_group* syllable_tail
fn match_vowel_syllable(cs: &[GlyphInfo]) -> Option<usize> {
    match_optional_seq(
        match_reph,
        match_seq(
            match_one(vowel),
            match_seq(
                match_optional(match_one(nukta)),
                match_optional_seq(
                    match_either(
                        match_seq(match_z, match_seq(match_one(halant), match_c)),
                        match_seq(match_one(zwj), match_c),
                    ),
                    match_matras_and_tail,
                ),
            ),
        ),
    )(cs)
}

// (Ra H)? NBSP N? (z? H c)? matra_group* syllable_tail
fn match_standalone_syllable(cs: &[GlyphInfo]) -> Option<usize> {
    match_optional_seq(
        match_reph,
        match_seq(
            match_one(placeholder),
            match_seq(
                match_optional(match_one(nukta)),
                match_optional_seq(
                    match_optional_seq(match_z, match_seq(match_one(halant), match_c)),
                    match_matras_and_tail,
                ),
            ),
        ),
    )(cs)
}

fn match_syllable(cs: &[GlyphInfo]) -> Option<(usize, SyllableKind)> {
    let consonant = (match_consonant_syllable(cs), SyllableKind::Consonant);
    let vowel = (match_vowel_syllable(cs), SyllableKind::Vowel);
    let standalone = (match_standalone_syllable(cs), SyllableKind::Standalone);

    // The longest match wins. In the event of a tie, precedence is
    // consonant > vowel > standalone
    let syllables = &mut [consonant, vowel, standalone];
    syllables.sort_by(|(len1, _), (len2, _)| len2.cmp(len1));

    match syllables[0] {
        (Some(len), kind) => Some((len, kind)),
        (None, _) => None,
    }
}

/// Partitions classified glyphs into syllables. Glyphs that do not start an
/// Indic syllable become single-glyph non-Indic syllables.
pub fn find_syllables(info: &[GlyphInfo]) -> Vec<Syllable> {
    let mut syllables = Vec::new();
    let mut start = 0;
    while start < info.len() {
        let (len, kind) =
            match_syllable(&info[start..]).unwrap_or((1, SyllableKind::NonIndic));
        let end = start + len;
        trace!("{:?} syllable at {}..{}", kind, start, end);
        syllables.push(Syllable { start, end, kind });
        start = end;
    }
    syllables
}

/////////////////////////////////////////////////////////////////////////////
// Reordering
/////////////////////////////////////////////////////////////////////////////

fn initial_reordering(
    map: &FeatureMap,
    _face: &dyn LayoutFace,
    buffer: &mut Buffer,
) -> Result<(), ShapingError> {
    buffer.assert_var(INDIC_VARS)?;

    let masks = IndicMasks::new(map);
    // Old-spec script tags (`deva` rather than `dev2`) expect the halant
    // after the last post-base consonant.
    let old_spec = (map.chosen_script() & 0xFF) as u8 != b'2';

    for syllable in find_syllables(&buffer.info) {
        let info = &mut buffer.info[syllable.start..syllable.end];
        match syllable.kind {
            SyllableKind::Consonant => reorder_consonant_syllable(info, &masks, old_spec),
            // Vowel and standalone syllables are not reordered yet.
            SyllableKind::Vowel | SyllableKind::Standalone | SyllableKind::NonIndic => {}
        }
    }

    Ok(())
}

fn final_reordering(
    _map: &FeatureMap,
    _face: &dyn LayoutFace,
    buffer: &mut Buffer,
) -> Result<(), ShapingError> {
    // TODO: move the reph and pre-base reordering consonants to their
    // final positions.
    buffer.deallocate_var(INDIC_VARS)?;
    Ok(())
}

/// Reorders a consonant syllable and marks its glyphs for the basic
/// features.
fn reorder_consonant_syllable(info: &mut [GlyphInfo], masks: &IndicMasks, old_spec: bool) {
    let len = info.len();

    // If the syllable starts with Ra + Halant (in a script that has Reph)
    // and has more than one consonant, Ra is excluded from candidates for
    // base consonants.
    let has_reph = !masks.get(BasicFeature::Rphf).is_empty()
        && len >= 3
        && ra(info[0].indic_category())
        && halant(info[1].indic_category());

    let mut base = find_base_consonant(info, has_reph);
    trace!("base consonant at {} of {}", base, len);

    for glyph in &mut info[..base] {
        glyph.set_indic_position(Position::PreC);
    }
    info[base].set_indic_position(Position::BaseC);

    if has_reph && !joiner(info[2].indic_category()) {
        info[0].set_indic_position(Position::Reph);
        info[0].mask |= masks.get(BasicFeature::Rphf);
    }

    if old_spec {
        move_old_spec_halant(info, base);
    }

    // Attach ZWJ, ZWNJ, nukta, and halant to the previous glyph so that
    // they move with it.
    for i in 1..len {
        if matches!(
            info[i].indic_category(),
            Category::Zwnj | Category::Zwj | Category::N | Category::H
        ) {
            let position = info[i - 1].indic_position();
            info[i].set_indic_position(position);
        }
    }

    if len <= MAX_SORTED_SYLLABLE_LEN {
        base = sort_by_position(info, base);
    } else {
        // HarfBuzz neither sorts nor masks these. They are still masked
        // here, relative to the unsorted base.
        debug!("not sorting syllable of {} glyphs", len);
    }

    let pre_base = masks.get(BasicFeature::Half)
        | masks.get(BasicFeature::Akhn)
        | masks.get(BasicFeature::Cjct);
    for glyph in &mut info[..base] {
        glyph.mask |= pre_base;
    }
    info[base].mask |= masks.get(BasicFeature::Akhn) | masks.get(BasicFeature::Cjct);
    let post_base = masks.get(BasicFeature::Blwf)
        | masks.get(BasicFeature::Pstf)
        | masks.get(BasicFeature::Cjct);
    for glyph in &mut info[base + 1..] {
        glyph.mask |= post_base;
    }

    // A ZWNJ stops the glyphs before it, back to the nearest consonant,
    // from taking half forms. Joiners leave `cjct` alone.
    let half = masks.get(BasicFeature::Half);
    for i in 1..len {
        if info[i].indic_category() == Category::Zwnj {
            let mut j = i;
            loop {
                j -= 1;
                info[j].mask.remove(half);
                if j == 0 || consonant(info[j].indic_category()) {
                    break;
                }
            }
        }
    }
}

/// Scans backwards for a consonant without a below-base or post-base form.
/// Failing that, the earliest such consonant scanned is the base.
fn find_base_consonant(info: &[GlyphInfo], has_reph: bool) -> usize {
    let limit = if has_reph { 2 } else { 0 };
    let mut base = None;
    for i in (limit..info.len()).rev() {
        let category = info[i].indic_category();
        if consonant(category) {
            base = Some(i);
            match info[i].indic_position() {
                Position::BelowC | Position::PostC => {}
                _ => break,
            }
        } else if joiner(category) {
            break;
        }
    }
    base.unwrap_or(0)
}

/// Moves the first post-base halant to after the last consonant.
fn move_old_spec_halant(info: &mut [GlyphInfo], base: usize) {
    let len = info.len();
    let halant_index = match (base + 1..len).find(|&i| halant(info[i].indic_category())) {
        Some(index) => index,
        None => return,
    };
    let last_consonant = (halant_index + 1..len)
        .rev()
        .find(|&i| consonant(info[i].indic_category()));
    if let Some(last_consonant) = last_consonant {
        move_element(info, halant_index, last_consonant);
    }
}

/// Stable sort by position. Returns the new index of the glyph at `base`.
fn sort_by_position(info: &mut [GlyphInfo], base: usize) -> usize {
    let mut order: Vec<usize> = (0..info.len()).collect();
    order.sort_by_key(|&i| info[i].indic_position());
    let sorted: Vec<GlyphInfo> = order.iter().map(|&i| info[i]).collect();
    info.copy_from_slice(&sorted);
    order.iter().position(|&i| i == base).unwrap_or(base)
}

fn move_element<T>(slice: &mut [T], from: usize, to: usize) {
    if from < to {
        slice[from..=to].rotate_left(1);
    } else {
        slice[to..=from].rotate_right(1);
    }
}
