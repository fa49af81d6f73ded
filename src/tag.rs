//! OpenType tags used by the Indic shaper.

use std::fmt;

/// Generate a 4-byte OpenType tag from byte string
///
/// Example:
///
/// ```
/// use indic_shaper::tag;
///
/// assert_eq!(tag!(b"half"), 0x68616C66);
/// ```
#[macro_export]
macro_rules! tag {
    ($w:expr) => {
        $crate::tag::tag(*$w)
    };
}

#[derive(PartialEq, Eq, Clone, Copy)]
pub struct DisplayTag(pub u32);

#[doc(hidden)]
pub const fn tag(chars: [u8; 4]) -> u32 {
    ((chars[3] as u32) << 0)
        | ((chars[2] as u32) << 8)
        | ((chars[1] as u32) << 16)
        | ((chars[0] as u32) << 24)
}

impl fmt::Display for DisplayTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.0;
        let mut s = String::with_capacity(4);
        s.push(char::from((tag >> 24) as u8));
        s.push(char::from(((tag >> 16) & 255) as u8));
        s.push(char::from(((tag >> 8) & 255) as u8));
        s.push(char::from((tag & 255) as u8));
        if s.chars().any(|c| !c.is_ascii() || c.is_ascii_control()) {
            write!(f, "0x{:08x}", tag)
        } else {
            s.fmt(f)
        }
    }
}

impl fmt::Debug for DisplayTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_string().fmt(f)
    }
}

// Features
pub const ABVM: u32 = tag!(b"abvm");
pub const ABVS: u32 = tag!(b"abvs");
pub const AKHN: u32 = tag!(b"akhn");
pub const BLWF: u32 = tag!(b"blwf");
pub const BLWM: u32 = tag!(b"blwm");
pub const BLWS: u32 = tag!(b"blws");
pub const CCMP: u32 = tag!(b"ccmp");
pub const CJCT: u32 = tag!(b"cjct");
pub const DIST: u32 = tag!(b"dist");
pub const HALF: u32 = tag!(b"half");
pub const HALN: u32 = tag!(b"haln");
pub const LOCL: u32 = tag!(b"locl");
pub const NUKT: u32 = tag!(b"nukt");
pub const PREF: u32 = tag!(b"pref");
pub const PRES: u32 = tag!(b"pres");
pub const PSTF: u32 = tag!(b"pstf");
pub const PSTS: u32 = tag!(b"psts");
pub const RKRF: u32 = tag!(b"rkrf");
pub const RPHF: u32 = tag!(b"rphf");
pub const VATU: u32 = tag!(b"vatu");

// Scripts
pub const BENG: u32 = tag!(b"beng");
pub const BNG2: u32 = tag!(b"bng2");
pub const CYRL: u32 = tag!(b"cyrl");
pub const DEV2: u32 = tag!(b"dev2");
pub const DEVA: u32 = tag!(b"deva");
pub const DFLT: u32 = tag!(b"DFLT");
pub const GJR2: u32 = tag!(b"gjr2");
pub const GREK: u32 = tag!(b"grek");
pub const GUJR: u32 = tag!(b"gujr");
pub const GUR2: u32 = tag!(b"gur2");
pub const GURU: u32 = tag!(b"guru");
pub const KND2: u32 = tag!(b"knd2");
pub const KNDA: u32 = tag!(b"knda");
pub const LATN: u32 = tag!(b"latn");
pub const MLM2: u32 = tag!(b"mlm2");
pub const MLYM: u32 = tag!(b"mlym");
pub const ORY2: u32 = tag!(b"ory2");
pub const ORYA: u32 = tag!(b"orya");
pub const SINH: u32 = tag!(b"sinh");
pub const TAML: u32 = tag!(b"taml");
pub const TEL2: u32 = tag!(b"tel2");
pub const TELU: u32 = tag!(b"telu");
pub const TML2: u32 = tag!(b"tml2");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_tag() {
        assert_eq!(DisplayTag(RPHF).to_string(), "rphf");
        assert_eq!(DisplayTag(0x00000001).to_string(), "0x00000001");
    }
}
