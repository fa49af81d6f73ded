//! Unicode normalization ahead of shaping.
//!
//! Indic shaping wants the decomposed form: split matras and nukta
//! consonants have to be taken apart before each part can be classified
//! and reordered on its own.

use crate::buffer::{Buffer, GlyphInfo};
use crate::scripts::indic::table::indic_categories;
use crate::scripts::indic::Category;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NormalizationMode {
    None,
    Decomposed,
}

pub fn normalize(buffer: &mut Buffer, mode: NormalizationMode) {
    match mode {
        NormalizationMode::None => {}
        NormalizationMode::Decomposed => {
            decompose(buffer);
            reorder_marks(buffer);
        }
    }
}

fn decompose(buffer: &mut Buffer) {
    let mut i = 0;
    while i < buffer.info.len() {
        let parts = decomposition(buffer.info[i].codepoint);
        if parts.is_empty() {
            i += 1;
            continue;
        }
        // The parts keep the cluster and mask of the original character.
        let glyph = buffer.info[i];
        let replacement = parts.iter().map(|&ch| GlyphInfo {
            codepoint: ch,
            ..glyph
        });
        buffer.info.splice(i..=i, replacement);
        i += parts.len();
    }
}

#[rustfmt::skip]
fn decomposition(ch: char) -> &'static [char] {
    match ch {
        // Devanagari
        '\u{0929}' => &['\u{0928}', '\u{093C}'],
        '\u{0931}' => &['\u{0930}', '\u{093C}'],
        '\u{0934}' => &['\u{0933}', '\u{093C}'],
        '\u{0958}' => &['\u{0915}', '\u{093C}'],
        '\u{0959}' => &['\u{0916}', '\u{093C}'],
        '\u{095A}' => &['\u{0917}', '\u{093C}'],
        '\u{095B}' => &['\u{091C}', '\u{093C}'],
        '\u{095C}' => &['\u{0921}', '\u{093C}'],
        '\u{095D}' => &['\u{0922}', '\u{093C}'],
        '\u{095E}' => &['\u{092B}', '\u{093C}'],
        '\u{095F}' => &['\u{092F}', '\u{093C}'],
        // Bengali
        '\u{09CB}' => &['\u{09C7}', '\u{09BE}'],
        '\u{09CC}' => &['\u{09C7}', '\u{09D7}'],
        '\u{09DC}' => &['\u{09A1}', '\u{09BC}'],
        '\u{09DD}' => &['\u{09A2}', '\u{09BC}'],
        '\u{09DF}' => &['\u{09AF}', '\u{09BC}'],
        // Gurmukhi
        '\u{0A33}' => &['\u{0A32}', '\u{0A3C}'],
        '\u{0A36}' => &['\u{0A38}', '\u{0A3C}'],
        '\u{0A59}' => &['\u{0A16}', '\u{0A3C}'],
        '\u{0A5A}' => &['\u{0A17}', '\u{0A3C}'],
        '\u{0A5B}' => &['\u{0A1C}', '\u{0A3C}'],
        '\u{0A5E}' => &['\u{0A2B}', '\u{0A3C}'],
        // Oriya
        '\u{0B48}' => &['\u{0B47}', '\u{0B56}'],
        '\u{0B4B}' => &['\u{0B47}', '\u{0B3E}'],
        '\u{0B4C}' => &['\u{0B47}', '\u{0B57}'],
        '\u{0B5C}' => &['\u{0B21}', '\u{0B3C}'],
        '\u{0B5D}' => &['\u{0B22}', '\u{0B3C}'],
        // Tamil
        '\u{0BCA}' => &['\u{0BC6}', '\u{0BBE}'],
        '\u{0BCB}' => &['\u{0BC7}', '\u{0BBE}'],
        '\u{0BCC}' => &['\u{0BC6}', '\u{0BD7}'],
        // Telugu
        '\u{0C48}' => &['\u{0C46}', '\u{0C56}'],
        // Kannada
        '\u{0CC0}' => &['\u{0CBF}', '\u{0CD5}'],
        '\u{0CC7}' => &['\u{0CC6}', '\u{0CD5}'],
        '\u{0CC8}' => &['\u{0CC6}', '\u{0CD6}'],
        '\u{0CCA}' => &['\u{0CC6}', '\u{0CC2}'],
        '\u{0CCB}' => &['\u{0CC6}', '\u{0CC2}', '\u{0CD5}'],
        // Malayalam
        '\u{0D4A}' => &['\u{0D46}', '\u{0D3E}'],
        '\u{0D4B}' => &['\u{0D47}', '\u{0D3E}'],
        '\u{0D4C}' => &['\u{0D46}', '\u{0D57}'],
        // Sinhala
        '\u{0DDA}' => &['\u{0DD9}', '\u{0DCA}'],
        '\u{0DDC}' => &['\u{0DD9}', '\u{0DCF}'],
        '\u{0DDD}' => &['\u{0DD9}', '\u{0DCF}', '\u{0DCA}'],
        '\u{0DDE}' => &['\u{0DD9}', '\u{0DDF}'],
        _ => &[],
    }
}

// Nukta < halant < vedic sign
fn mark_rank(ch: char) -> Option<u8> {
    match indic_categories(ch).0 {
        Category::N => Some(0),
        Category::H => Some(1),
        Category::VD | Category::A => Some(2),
        _ => None,
    }
}

/// Puts each run of adjacent nukta, halant and vedic marks in canonical
/// order.
fn reorder_marks(buffer: &mut Buffer) {
    let info = &mut buffer.info;
    let mut start = 0;
    while start < info.len() {
        if mark_rank(info[start].codepoint).is_none() {
            start += 1;
            continue;
        }
        let run_len = info[start..]
            .iter()
            .take_while(|glyph| mark_rank(glyph.codepoint).is_some())
            .count();
        let end = start + run_len;
        info[start..end].sort_by_key(|glyph| mark_rank(glyph.codepoint));
        start = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gsub::FeatureMask;

    fn normalized(text: &str) -> Buffer {
        let mut buffer = Buffer::from_text(text);
        normalize(&mut buffer, NormalizationMode::Decomposed);
        buffer
    }

    mod decompose {
        use super::*;

        #[test]
        fn test_two_part_matra() {
            // KA O
            let buffer = normalized("\u{0995}\u{09CB}");

            assert_eq!(
                vec!['\u{0995}', '\u{09C7}', '\u{09BE}'],
                buffer.codepoints().collect::<Vec<_>>()
            );
            let clusters: Vec<u32> = buffer.info.iter().map(|info| info.cluster).collect();
            assert_eq!(vec![0, 1, 1], clusters);
        }

        #[test]
        fn test_three_part_matra() {
            let buffer = normalized("\u{0C95}\u{0CCB}");

            assert_eq!(
                vec!['\u{0C95}', '\u{0CC6}', '\u{0CC2}', '\u{0CD5}'],
                buffer.codepoints().collect::<Vec<_>>()
            );
        }

        #[test]
        fn test_nukta_consonant() {
            let buffer = normalized("\u{0958}\u{093F}");

            assert_eq!(
                vec!['\u{0915}', '\u{093C}', '\u{093F}'],
                buffer.codepoints().collect::<Vec<_>>()
            );
        }

        #[test]
        fn test_parts_keep_mask() {
            let mut buffer = Buffer::from_text("\u{0DDD}");
            buffer.reset_masks(FeatureMask::CCMP);
            normalize(&mut buffer, NormalizationMode::Decomposed);

            assert_eq!(3, buffer.len());
            assert!(buffer.info.iter().all(|info| info.mask == FeatureMask::CCMP));
        }
    }

    mod reorder_marks {
        use super::*;

        #[test]
        fn test_nukta_before_halant() {
            let buffer = normalized("\u{0915}\u{094D}\u{093C}");

            assert_eq!(
                vec!['\u{0915}', '\u{093C}', '\u{094D}'],
                buffer.codepoints().collect::<Vec<_>>()
            );
        }

        #[test]
        fn test_vedic_sign_last() {
            let buffer = normalized("\u{0915}\u{0951}\u{094D}\u{093C}");

            assert_eq!(
                vec!['\u{0915}', '\u{093C}', '\u{094D}', '\u{0951}'],
                buffer.codepoints().collect::<Vec<_>>()
            );
        }

        #[test]
        fn test_runs_are_separate() {
            // HALANT ZWNJ NUKTA is not one run.
            let buffer = normalized("\u{094D}\u{200C}\u{093C}");

            assert_eq!(
                vec!['\u{094D}', '\u{200C}', '\u{093C}'],
                buffer.codepoints().collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn test_none_leaves_buffer_alone() {
        let mut buffer = Buffer::from_text("\u{09CB}\u{094D}\u{093C}");
        normalize(&mut buffer, NormalizationMode::None);

        assert_eq!(
            vec!['\u{09CB}', '\u{094D}', '\u{093C}'],
            buffer.codepoints().collect::<Vec<_>>()
        );
    }
}
