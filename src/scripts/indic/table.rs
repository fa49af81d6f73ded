//! Character tables for the Indic shaper.
//!
//! All tables are sorted by code point and looked up by binary search.

use std::cmp::Ordering;

use super::Category::{self, *};
use super::Position::{self, *};

const fn pack(category: Category, position: Position) -> u8 {
    (category as u8) | ((position as u8) << 4)
}

/// Raw category (low nibble) and position (high nibble) of every
/// classified character, as inclusive ranges. Unlisted characters are
/// `Other` with position `End`.
#[rustfmt::skip]
static INDIC_TABLE: &[(u32, u32, u8)] = &[
    (0x00A0, 0x00A0, pack(Nbsp, BaseC)), // No-break space
    (0x00B2, 0x00B3, pack(SM, Smvd)), // Superscript Two (used in Tamil)..Superscript Three (used in Tamil)
    (0x0900, 0x0903, pack(SM, Smvd)), // Inverted Candrabindu..Visarga
    (0x0904, 0x0914, pack(V, BaseC)), // Short A..Au
    (0x0915, 0x0939, pack(C, BaseC)), // Ka..Ha
    (0x093A, 0x093A, pack(M, AboveM)), // Sign Oe
    (0x093B, 0x093B, pack(M, PostM)), // Sign Ooe
    (0x093C, 0x093C, pack(N, End)), // Nukta
    (0x093E, 0x093E, pack(M, PostM)), // Sign Aa
    (0x093F, 0x093F, pack(M, PreM)), // Sign I
    (0x0940, 0x0940, pack(M, PostM)), // Sign Ii
    (0x0941, 0x0944, pack(M, BelowM)), // Sign U..Sign Vocalic Rr
    (0x0945, 0x0948, pack(M, AboveM)), // Sign Candra E..Sign Ai
    (0x0949, 0x094C, pack(M, PostM)), // Sign Candra O..Sign Au
    (0x094D, 0x094D, pack(H, End)), // Virama
    (0x094E, 0x094E, pack(M, PreM)), // Sign Prishthamatra E
    (0x094F, 0x094F, pack(M, PostM)), // Sign Aw
    (0x0951, 0x0952, pack(VD, Smvd)), // Udatta..Anudatta
    (0x0955, 0x0955, pack(M, AboveM)), // Sign Candra Long E
    (0x0956, 0x0957, pack(M, BelowM)), // Sign Ue..Sign Uue
    (0x0958, 0x095F, pack(C, BaseC)), // Qa..Yya
    (0x0960, 0x0961, pack(V, BaseC)), // Vocalic Rr..Vocalic Ll
    (0x0962, 0x0963, pack(M, BelowM)), // Sign Vocalic L..Sign Vocalic Ll
    (0x0972, 0x0977, pack(V, BaseC)), // Candra Aa..Uue
    (0x0978, 0x0980, pack(C, BaseC)), // Marwari Dda..Anji
    (0x0981, 0x0983, pack(SM, Smvd)), // Candrabindu..Visarga
    (0x0985, 0x098C, pack(V, BaseC)), // A..Vocalic L
    (0x098F, 0x0990, pack(V, BaseC)), // E..Ai
    (0x0993, 0x0994, pack(V, BaseC)), // O..Au
    (0x0995, 0x09A8, pack(C, BaseC)), // Ka..Na
    (0x09AA, 0x09B0, pack(C, BaseC)), // Pa..Ra
    (0x09B2, 0x09B2, pack(C, BaseC)), // La
    (0x09B6, 0x09B9, pack(C, BaseC)), // Sha..Ha
    (0x09BC, 0x09BC, pack(N, End)), // Nukta
    (0x09BE, 0x09BE, pack(M, PostM)), // Sign Aa
    (0x09BF, 0x09BF, pack(M, PreM)), // Sign I
    (0x09C0, 0x09C0, pack(M, PostM)), // Sign Ii
    (0x09C1, 0x09C4, pack(M, BelowM)), // Sign U..Sign Vocalic Rr
    (0x09C7, 0x09C8, pack(M, PreM)), // Sign E..Sign Ai
    (0x09CB, 0x09CC, pack(M, PreM)), // Sign O..Sign Au
    (0x09CD, 0x09CD, pack(H, End)), // Virama
    (0x09CE, 0x09CE, pack(C, BaseC)), // Khanda Ta
    (0x09D7, 0x09D7, pack(M, PostM)), // Au Length Mark
    (0x09DC, 0x09DD, pack(C, BaseC)), // Rra..Rha
    (0x09DF, 0x09DF, pack(C, BaseC)), // Yya
    (0x09E0, 0x09E1, pack(V, BaseC)), // Vocalic Rr..Vocalic Ll
    (0x09E2, 0x09E3, pack(M, BelowM)), // Sign Vocalic L..Sign Vocalic Ll
    (0x09F0, 0x09F1, pack(C, BaseC)), // Assamese Ra..Assamese Wa
    (0x09FE, 0x09FE, pack(SM, Smvd)), // Sandhi Mark
    (0x0A01, 0x0A03, pack(SM, Smvd)), // Adak Bindi..Visarga
    (0x0A05, 0x0A0A, pack(V, BaseC)), // A..Uu
    (0x0A0F, 0x0A10, pack(V, BaseC)), // Ee..Ai
    (0x0A13, 0x0A14, pack(V, BaseC)), // Oo..Au
    (0x0A15, 0x0A28, pack(C, BaseC)), // Ka..Na
    (0x0A2A, 0x0A30, pack(C, BaseC)), // Pa..Ra
    (0x0A32, 0x0A33, pack(C, BaseC)), // La..Lla
    (0x0A35, 0x0A36, pack(C, BaseC)), // Va..Sha
    (0x0A38, 0x0A39, pack(C, BaseC)), // Sa..Ha
    (0x0A3C, 0x0A3C, pack(N, End)), // Nukta
    (0x0A3E, 0x0A3E, pack(M, PostM)), // Sign Aa
    (0x0A3F, 0x0A3F, pack(M, PreM)), // Sign I
    (0x0A40, 0x0A40, pack(M, PostM)), // Sign Ii
    (0x0A41, 0x0A42, pack(M, BelowM)), // Sign U..Sign Uu
    (0x0A47, 0x0A48, pack(M, AboveM)), // Sign Ee..Sign Ai
    (0x0A4B, 0x0A4C, pack(M, AboveM)), // Sign Oo..Sign Au
    (0x0A4D, 0x0A4D, pack(H, End)), // Virama
    (0x0A51, 0x0A51, pack(VD, Smvd)), // Udaat
    (0x0A59, 0x0A5C, pack(C, BaseC)), // Khha..Rra
    (0x0A5E, 0x0A5E, pack(C, BaseC)), // Fa
    (0x0A70, 0x0A71, pack(SM, Smvd)), // Tippi..Addak
    (0x0A72, 0x0A73, pack(C, BaseC)), // Iri..Ura
    (0x0A75, 0x0A75, pack(C, BaseC)), // Yakash
    (0x0A81, 0x0A83, pack(SM, Smvd)), // Candrabindu..Visarga
    (0x0A85, 0x0A8D, pack(V, BaseC)), // A..Candra E
    (0x0A8F, 0x0A91, pack(V, BaseC)), // E..Candra O
    (0x0A93, 0x0A94, pack(V, BaseC)), // O..Au
    (0x0A95, 0x0AA8, pack(C, BaseC)), // Ka..Na
    (0x0AAA, 0x0AB0, pack(C, BaseC)), // Pa..Ra
    (0x0AB2, 0x0AB3, pack(C, BaseC)), // La..Lla
    (0x0AB5, 0x0AB9, pack(C, BaseC)), // Va..Ha
    (0x0ABC, 0x0ABC, pack(N, End)), // Nukta
    (0x0ABE, 0x0ABE, pack(M, PostM)), // Sign Aa
    (0x0ABF, 0x0ABF, pack(M, PreM)), // Sign I
    (0x0AC0, 0x0AC0, pack(M, PostM)), // Sign Ii
    (0x0AC1, 0x0AC4, pack(M, BelowM)), // Sign U..Sign Vocalic Rr
    (0x0AC5, 0x0AC5, pack(M, AboveM)), // Sign Candra E
    (0x0AC7, 0x0AC8, pack(M, AboveM)), // Sign E..Sign Ai
    (0x0AC9, 0x0AC9, pack(M, PostM)), // Sign Candra O
    (0x0ACB, 0x0ACC, pack(M, PostM)), // Sign O..Sign Au
    (0x0ACD, 0x0ACD, pack(H, End)), // Virama
    (0x0AE0, 0x0AE1, pack(V, BaseC)), // Vocalic Rr..Vocalic Ll
    (0x0AE2, 0x0AE3, pack(M, BelowM)), // Sign Vocalic L..Sign Vocalic Ll
    (0x0AF9, 0x0AF9, pack(C, BaseC)), // Zha
    (0x0AFA, 0x0AFC, pack(VD, Smvd)), // Sukun..Maddah
    (0x0AFD, 0x0AFF, pack(N, End)), // Three-Dot Nukta Above..Two-Circle Nukta Above
    (0x0B01, 0x0B03, pack(SM, Smvd)), // Candrabindu..Visarga
    (0x0B05, 0x0B0C, pack(V, BaseC)), // A..Vocalic L
    (0x0B0F, 0x0B10, pack(V, BaseC)), // E..Ai
    (0x0B13, 0x0B14, pack(V, BaseC)), // O..Au
    (0x0B15, 0x0B28, pack(C, BaseC)), // Ka..Na
    (0x0B2A, 0x0B30, pack(C, BaseC)), // Pa..Ra
    (0x0B32, 0x0B33, pack(C, BaseC)), // La..Lla
    (0x0B35, 0x0B39, pack(C, BaseC)), // Va..Ha
    (0x0B3C, 0x0B3C, pack(N, End)), // Nukta
    (0x0B3E, 0x0B3E, pack(M, PostM)), // Sign Aa
    (0x0B3F, 0x0B3F, pack(M, AboveM)), // Sign I
    (0x0B40, 0x0B40, pack(M, PostM)), // Sign Ii
    (0x0B41, 0x0B44, pack(M, BelowM)), // Sign U..Sign Vocalic Rr
    (0x0B47, 0x0B48, pack(M, PreM)), // Sign E..Sign Ai
    (0x0B4B, 0x0B4C, pack(M, PreM)), // Sign O..Sign Au
    (0x0B4D, 0x0B4D, pack(H, End)), // Virama
    (0x0B56, 0x0B56, pack(M, AboveM)), // Ai Length Mark
    (0x0B57, 0x0B57, pack(M, PostM)), // Au Length Mark
    (0x0B5C, 0x0B5D, pack(C, BaseC)), // Rra..Rha
    (0x0B5F, 0x0B5F, pack(C, BaseC)), // Yya
    (0x0B60, 0x0B61, pack(V, BaseC)), // Vocalic Rr..Vocalic Ll
    (0x0B62, 0x0B63, pack(M, BelowM)), // Sign Vocalic L..Sign Vocalic Ll
    (0x0B71, 0x0B71, pack(C, BaseC)), // Wa
    (0x0B82, 0x0B82, pack(SM, Smvd)), // Anusvara
    (0x0B85, 0x0B8A, pack(V, BaseC)), // A..Uu
    (0x0B8E, 0x0B90, pack(V, BaseC)), // E..Ai
    (0x0B92, 0x0B94, pack(V, BaseC)), // O..Au
    (0x0B95, 0x0B95, pack(C, BaseC)), // Ka
    (0x0B99, 0x0B9A, pack(C, BaseC)), // Nga..Ca
    (0x0B9C, 0x0B9C, pack(C, BaseC)), // Ja
    (0x0B9E, 0x0B9F, pack(C, BaseC)), // Nya..Tta
    (0x0BA3, 0x0BA4, pack(C, BaseC)), // Nna..Ta
    (0x0BA8, 0x0BAA, pack(C, BaseC)), // Na..Pa
    (0x0BAE, 0x0BB9, pack(C, BaseC)), // Ma..Ha
    (0x0BBE, 0x0BBF, pack(M, PostM)), // Sign Aa..Sign I
    (0x0BC0, 0x0BC0, pack(M, AboveM)), // Sign Ii
    (0x0BC1, 0x0BC2, pack(M, PostM)), // Sign U..Sign Uu
    (0x0BC6, 0x0BC8, pack(M, PreM)), // Sign E..Sign Ai
    (0x0BCA, 0x0BCC, pack(M, PreM)), // Sign O..Sign Au
    (0x0BCD, 0x0BCD, pack(H, End)), // Virama
    (0x0BD7, 0x0BD7, pack(M, PostM)), // Au Length Mark
    (0x0C00, 0x0C04, pack(SM, Smvd)), // Combining Candrabindu Above..Combining Anusvara Above
    (0x0C05, 0x0C0C, pack(V, BaseC)), // A..Vocalic L
    (0x0C0E, 0x0C10, pack(V, BaseC)), // E..Ai
    (0x0C12, 0x0C14, pack(V, BaseC)), // O..Au
    (0x0C15, 0x0C28, pack(C, BaseC)), // Ka..Na
    (0x0C2A, 0x0C39, pack(C, BaseC)), // Pa..Ha
    (0x0C3E, 0x0C40, pack(M, AboveM)), // Sign Aa..Sign Ii
    (0x0C41, 0x0C44, pack(M, PostM)), // Sign U..Sign Vocalic Rr
    (0x0C46, 0x0C48, pack(M, AboveM)), // Sign E..Sign Ai
    (0x0C4A, 0x0C4C, pack(M, AboveM)), // Sign O..Sign Au
    (0x0C4D, 0x0C4D, pack(H, End)), // Virama
    (0x0C55, 0x0C55, pack(M, AboveM)), // Length Mark
    (0x0C56, 0x0C56, pack(M, BelowM)), // Ai Length Mark
    (0x0C58, 0x0C5A, pack(C, BaseC)), // Tsa..Rrra
    (0x0C60, 0x0C61, pack(V, BaseC)), // Vocalic Rr..Vocalic Ll
    (0x0C62, 0x0C63, pack(M, BelowM)), // Sign Vocalic L..Sign Vocalic Ll
    (0x0C81, 0x0C83, pack(SM, Smvd)), // Candrabindu..Visarga
    (0x0C85, 0x0C8C, pack(V, BaseC)), // A..Vocalic L
    (0x0C8E, 0x0C90, pack(V, BaseC)), // E..Ai
    (0x0C92, 0x0C94, pack(V, BaseC)), // O..Au
    (0x0C95, 0x0CA8, pack(C, BaseC)), // Ka..Na
    (0x0CAA, 0x0CB3, pack(C, BaseC)), // Pa..Lla
    (0x0CB5, 0x0CB9, pack(C, BaseC)), // Va..Ha
    (0x0CBC, 0x0CBC, pack(N, End)), // Nukta
    (0x0CBE, 0x0CBE, pack(M, PostM)), // Sign Aa
    (0x0CBF, 0x0CBF, pack(M, AboveM)), // Sign I
    (0x0CC0, 0x0CC4, pack(M, PostM)), // Sign Ii..Sign Vocalic Rr
    (0x0CC6, 0x0CC6, pack(M, AboveM)), // Sign E
    (0x0CC7, 0x0CC8, pack(M, PostM)), // Sign Ee..Sign Ai
    (0x0CCA, 0x0CCB, pack(M, PostM)), // Sign O..Sign Oo
    (0x0CCC, 0x0CCC, pack(M, AboveM)), // Sign Au
    (0x0CCD, 0x0CCD, pack(H, End)), // Virama
    (0x0CD5, 0x0CD6, pack(M, PostM)), // Length Mark..Ai Length Mark
    (0x0CDE, 0x0CDE, pack(C, BaseC)), // Fa
    (0x0CE0, 0x0CE1, pack(V, BaseC)), // Vocalic Rr..Vocalic Ll
    (0x0CE2, 0x0CE3, pack(M, BelowM)), // Sign Vocalic L..Sign Vocalic Ll
    (0x0CF1, 0x0CF2, pack(C, BaseC)), // Jihvamuliya..Upadhmaniya
    (0x0D00, 0x0D03, pack(SM, Smvd)), // Combining Anusvara Above..Visarga
    (0x0D05, 0x0D0C, pack(V, BaseC)), // A..Vocalic L
    (0x0D0E, 0x0D10, pack(V, BaseC)), // E..Ai
    (0x0D12, 0x0D14, pack(V, BaseC)), // O..Au
    (0x0D15, 0x0D3A, pack(C, BaseC)), // Ka..Ttta
    (0x0D3B, 0x0D3C, pack(M, AboveM)), // Vertical Bar Virama..Circular Virama
    (0x0D3E, 0x0D42, pack(M, PostM)), // Sign Aa..Sign Uu
    (0x0D43, 0x0D44, pack(M, BelowM)), // Sign Vocalic R..Sign Vocalic Rr
    (0x0D46, 0x0D48, pack(M, PreM)), // Sign E..Sign Ai
    (0x0D4A, 0x0D4C, pack(M, PreM)), // Sign O..Sign Au
    (0x0D4D, 0x0D4D, pack(H, End)), // Virama
    (0x0D54, 0x0D56, pack(C, BaseC)), // Chillu M..Chillu Lll
    (0x0D57, 0x0D57, pack(M, PostM)), // Au Length Mark
    (0x0D5F, 0x0D61, pack(V, BaseC)), // Archaic Ii..Vocalic Ll
    (0x0D62, 0x0D63, pack(M, BelowM)), // Sign Vocalic L..Sign Vocalic Ll
    (0x0D7A, 0x0D7F, pack(C, BaseC)), // Chillu Nn..Chillu K
    (0x0D82, 0x0D83, pack(SM, Smvd)), // Anusvara..Visarga
    (0x0D85, 0x0D96, pack(V, BaseC)), // A..Au
    (0x0D9A, 0x0DB1, pack(C, BaseC)), // Ka..Na
    (0x0DB3, 0x0DBB, pack(C, BaseC)), // Nda..Ra
    (0x0DBD, 0x0DBD, pack(C, BaseC)), // La
    (0x0DC0, 0x0DC6, pack(C, BaseC)), // Va..Fa
    (0x0DCA, 0x0DCA, pack(H, End)), // Virama
    (0x0DCF, 0x0DD1, pack(M, PostM)), // Sign Aa..Sign Aae
    (0x0DD2, 0x0DD3, pack(M, AboveM)), // Sign I..Sign Ii
    (0x0DD4, 0x0DD4, pack(M, BelowM)), // Sign U
    (0x0DD6, 0x0DD6, pack(M, BelowM)), // Sign Uu
    (0x0DD8, 0x0DD8, pack(M, PostM)), // Sign Vocalic R
    (0x0DD9, 0x0DDE, pack(M, PreM)), // Sign E..Sign Au
    (0x0DDF, 0x0DDF, pack(M, PostM)), // Sign Vocalic L
    (0x0DF2, 0x0DF3, pack(M, PostM)), // Sign Vocalic Rr..Sign Vocalic Ll
    (0x1CD0, 0x1CD2, pack(VD, Smvd)), // Tone Karshana..Tone Prenkha
    (0x1CD4, 0x1CE1, pack(VD, Smvd)), // Tone Midline Svarita..Tone Atharavedic Independent Svarita
    (0x1CF2, 0x1CF3, pack(SM, Smvd)), // Sign Ardhavisarga..Sign Rotated Ardhavisarga
    (0x1CF4, 0x1CF4, pack(VD, Smvd)), // Tone Candra Above
    (0x1CF5, 0x1CF6, pack(C, BaseC)), // Sign Jihvamuliya..Sign Upadhmaniya
    (0x1CF8, 0x1CF9, pack(VD, Smvd)), // Tone Ring Above..Tone Double Ring Above
    (0x200C, 0x200C, pack(Zwnj, End)), // Zero-width non-joiner
    (0x200D, 0x200D, pack(Zwj, End)), // Zero-width joiner
    (0x2074, 0x2074, pack(SM, Smvd)), // Superscript Four (used in Tamil)
    (0x2082, 0x2084, pack(SM, Smvd)), // Subscript Two (used in Tamil)..Subscript Four (used in Tamil)
    (0x25CC, 0x25CC, pack(Nbsp, BaseC)), // Dotted circle
    (0xA8E0, 0xA8F1, pack(VD, Smvd)), // Combining Zero..Combining Avagraha
    (0xA8F2, 0xA8F3, pack(SM, Smvd)), // Spacing Candrabindu..Candrabindu Virama
    (0xA8FE, 0xA8FE, pack(V, BaseC)), // Ay
    (0xA8FF, 0xA8FF, pack(M, AboveM)), // Sign Ay
];

/// The Ra of each script. Ra is a consonant that can form a reph.
static RA_CHARS: &[u32] = &[
    0x0930, // Devanagari
    0x09B0, // Bengali
    0x09F0, // Bengali, Assamese
    0x0A30, // Gurmukhi
    0x0AB0, // Gujarati
    0x0B30, // Oriya
    0x0BB0, // Tamil
    0x0C30, // Telugu
    0x0CB0, // Kannada
    0x0D30, // Malayalam
    0x0DBB, // Sinhala
];

/// Consonants that do not take the base position, as inclusive ranges.
#[rustfmt::skip]
static CONSONANT_POSITIONS: &[(u32, u32, Position)] = &[
    (0x0930, 0x0930, BelowC), // Devanagari Ra
    (0x09AC, 0x09AC, BelowC), // Bengali Ba
    (0x09AF, 0x09AF, PostC),  // Bengali Ya
    (0x09B0, 0x09B0, BelowC), // Bengali Ra
    (0x09F0, 0x09F0, BelowC), // Assamese Ra
    (0x0A2F, 0x0A2F, PostC),  // Gurmukhi Ya
    (0x0A30, 0x0A30, BelowC), // Gurmukhi Ra
    (0x0A35, 0x0A35, BelowC), // Gurmukhi Va
    (0x0A39, 0x0A39, BelowC), // Gurmukhi Ha
    (0x0A75, 0x0A75, BelowC), // Gurmukhi Yakash
    (0x0AB0, 0x0AB0, BelowC), // Gujarati Ra
    (0x0B24, 0x0B24, BelowC), // Oriya Ta
    (0x0B28, 0x0B28, BelowC), // Oriya Na
    (0x0B2C, 0x0B2E, BelowC), // Oriya Ba..Ma
    (0x0B2F, 0x0B2F, PostC),  // Oriya Ya
    (0x0B30, 0x0B30, BelowC), // Oriya Ra
    (0x0B32, 0x0B33, BelowC), // Oriya La..Lla
    (0x0B5F, 0x0B5F, PostC),  // Oriya Yya
    (0x0B71, 0x0B71, BelowC), // Oriya Wa
    (0x0C15, 0x0C39, BelowC), // Telugu Ka..Ha
    (0x0C95, 0x0CB9, BelowC), // Kannada Ka..Ha
    (0x0D24, 0x0D24, BelowC), // Malayalam Ta
    (0x0D28, 0x0D28, BelowC), // Malayalam Na
    (0x0D2F, 0x0D2F, PostC),  // Malayalam Ya
    (0x0D30, 0x0D30, PostC),  // Malayalam Ra
    (0x0D32, 0x0D33, BelowC), // Malayalam La..Lla
    (0x0D35, 0x0D35, PostC),  // Malayalam Va
];

fn range_ordering(ch: u32, first: u32, last: u32) -> Ordering {
    if last < ch {
        Ordering::Less
    } else if first > ch {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Looks up the raw category and position of `ch`.
pub fn indic_categories(ch: char) -> (Category, Position) {
    let ch = u32::from(ch);
    match INDIC_TABLE.binary_search_by(|&(first, last, _)| range_ordering(ch, first, last)) {
        Ok(index) => {
            let packed = INDIC_TABLE[index].2;
            (Category::from_u8(packed & 0x0F), Position::from_u8(packed >> 4))
        }
        Err(_) => (Other, End),
    }
}

/// The position a consonant takes before base selection.
pub fn consonant_position(ch: char) -> Position {
    let ch = u32::from(ch);
    match CONSONANT_POSITIONS.binary_search_by(|&(first, last, _)| range_ordering(ch, first, last))
    {
        Ok(index) => CONSONANT_POSITIONS[index].2,
        Err(_) => BaseC,
    }
}

pub fn is_ra(ch: char) -> bool {
    RA_CHARS.binary_search(&u32::from(ch)).is_ok()
}
