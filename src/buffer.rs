//! The glyph buffer shaped in place by the shaper.

use bitflags::bitflags;

use crate::error::ComplexScriptError;
use crate::gsub::FeatureMask;

bitflags! {
    /// Per-glyph shaper variables that must be allocated before use.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BufferVars: u8 {
        const INDIC_CATEGORY = 1 << 0;
        const INDIC_POSITION = 1 << 1;
    }
}

/// One slot of the buffer. Starts out as a code point; the layout engine
/// fills in `glyph_index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphInfo {
    pub codepoint: char,
    pub cluster: u32,
    pub glyph_index: Option<u16>,
    pub mask: FeatureMask,
    // Scratch space for complex shapers. Accessors live with the shaper
    // that owns the variable.
    pub(crate) shaper_var: u8,
}

impl GlyphInfo {
    pub fn new(codepoint: char, cluster: u32) -> GlyphInfo {
        GlyphInfo {
            codepoint,
            cluster,
            glyph_index: None,
            mask: FeatureMask::empty(),
            shaper_var: 0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Buffer {
    pub info: Vec<GlyphInfo>,
    allocated_vars: u8,
}

impl Buffer {
    pub fn new() -> Buffer {
        Buffer::default()
    }

    /// Creates a buffer with one slot per `char` of `text`. Each slot's
    /// cluster is the index of its `char`.
    pub fn from_text(text: &str) -> Buffer {
        Buffer::from_chars(text.chars())
    }

    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Buffer {
        let info = chars
            .into_iter()
            .zip(0u32..)
            .map(|(ch, cluster)| GlyphInfo::new(ch, cluster))
            .collect();
        Buffer {
            info,
            allocated_vars: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.info.len()
    }

    pub fn is_empty(&self) -> bool {
        self.info.is_empty()
    }

    pub fn codepoints(&self) -> impl Iterator<Item = char> + '_ {
        self.info.iter().map(|info| info.codepoint)
    }

    /// Overwrites the mask of every glyph.
    pub fn reset_masks(&mut self, mask: FeatureMask) {
        self.info.iter_mut().for_each(|info| info.mask = mask);
    }

    pub fn allocated_vars(&self) -> BufferVars {
        BufferVars::from_bits_truncate(self.allocated_vars)
    }

    pub fn allocate_var(&mut self, vars: BufferVars) -> Result<(), ComplexScriptError> {
        let live = self.allocated_vars() & vars;
        if !live.is_empty() {
            return Err(ComplexScriptError::VarAlreadyAllocated(live));
        }
        self.allocated_vars |= vars.bits();
        Ok(())
    }

    pub fn deallocate_var(&mut self, vars: BufferVars) -> Result<(), ComplexScriptError> {
        self.assert_var(vars)?;
        self.allocated_vars &= !vars.bits();
        Ok(())
    }

    /// Checks that all of `vars` are currently allocated.
    pub fn assert_var(&self, vars: BufferVars) -> Result<(), ComplexScriptError> {
        let missing = vars - self.allocated_vars();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ComplexScriptError::VarNotAllocated(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_assigns_clusters() {
        let buffer = Buffer::from_text("\u{0915}\u{094D}\u{0937}");
        let clusters: Vec<u32> = buffer.info.iter().map(|info| info.cluster).collect();

        assert_eq!(vec![0, 1, 2], clusters);
        assert_eq!(
            vec!['\u{0915}', '\u{094D}', '\u{0937}'],
            buffer.codepoints().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_reset_masks() {
        let mut buffer = Buffer::from_text("ab");
        buffer.reset_masks(FeatureMask::CCMP | FeatureMask::LOCL);

        assert!(buffer
            .info
            .iter()
            .all(|info| info.mask == FeatureMask::CCMP | FeatureMask::LOCL));
    }

    mod vars {
        use super::*;

        #[test]
        fn test_allocate_and_release() {
            let mut buffer = Buffer::new();
            let vars = BufferVars::INDIC_CATEGORY | BufferVars::INDIC_POSITION;

            assert_eq!(Ok(()), buffer.allocate_var(vars));
            assert_eq!(Ok(()), buffer.assert_var(BufferVars::INDIC_POSITION));
            assert_eq!(Ok(()), buffer.deallocate_var(vars));
            assert_eq!(BufferVars::empty(), buffer.allocated_vars());
        }

        #[test]
        fn test_double_allocation() {
            let mut buffer = Buffer::new();
            buffer.allocate_var(BufferVars::INDIC_CATEGORY).unwrap();

            assert_eq!(
                Err(ComplexScriptError::VarAlreadyAllocated(
                    BufferVars::INDIC_CATEGORY
                )),
                buffer.allocate_var(BufferVars::INDIC_CATEGORY | BufferVars::INDIC_POSITION)
            );
        }

        #[test]
        fn test_release_without_allocation() {
            let mut buffer = Buffer::new();
            buffer.allocate_var(BufferVars::INDIC_CATEGORY).unwrap();

            assert_eq!(
                Err(ComplexScriptError::VarNotAllocated(
                    BufferVars::INDIC_POSITION
                )),
                buffer.deallocate_var(BufferVars::INDIC_CATEGORY | BufferVars::INDIC_POSITION)
            );
        }
    }
}
