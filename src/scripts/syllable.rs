//! Parser combinators for recognising syllables.
//!
//! Every matcher takes the remaining input and returns the length of the
//! longest prefix it accepts, or `None`.

use std::cmp;

pub trait SyllableChar {
    type Class: Copy;

    fn class(&self) -> Self::Class;
}

pub fn match_one<T: SyllableChar>(
    f: impl Fn(T::Class) -> bool,
) -> impl Fn(&[T]) -> Option<usize> {
    move |cs: &[T]| match cs.first() {
        Some(c) if f(c.class()) => Some(1),
        _ => None,
    }
}

pub fn match_optional<T: SyllableChar>(
    f: impl Fn(&[T]) -> Option<usize>,
) -> impl Fn(&[T]) -> Option<usize> {
    move |cs: &[T]| f(cs).or(Some(0))
}

/// `f? g`
pub fn match_optional_seq<T: SyllableChar>(
    f: impl Fn(&[T]) -> Option<usize>,
    g: impl Fn(&[T]) -> Option<usize>,
) -> impl Fn(&[T]) -> Option<usize> {
    move |cs: &[T]| match_either(&g, match_seq(&f, &g))(cs)
}

/// `f* g`, trying every repeat count of `f`.
pub fn match_repeat_then<T: SyllableChar>(
    f: impl Fn(&[T]) -> Option<usize>,
    g: impl Fn(&[T]) -> Option<usize>,
) -> impl Fn(&[T]) -> Option<usize> {
    move |cs: &[T]| {
        let mut best = None;
        let mut consumed = 0;
        loop {
            let rest = &cs[consumed..];
            best = cmp::max(best, g(rest).map(|n| consumed + n));
            match f(rest) {
                Some(n) if n > 0 => consumed += n,
                _ => return best,
            }
        }
    }
}

pub fn match_seq<T: SyllableChar>(
    f1: impl Fn(&[T]) -> Option<usize>,
    f2: impl Fn(&[T]) -> Option<usize>,
) -> impl Fn(&[T]) -> Option<usize> {
    move |cs: &[T]| {
        let n1 = f1(cs)?;
        let n2 = f2(&cs[n1..])?;
        Some(n1 + n2)
    }
}

pub fn match_either<T: SyllableChar>(
    f1: impl Fn(&[T]) -> Option<usize>,
    f2: impl Fn(&[T]) -> Option<usize>,
) -> impl Fn(&[T]) -> Option<usize> {
    move |cs: &[T]| {
        let n1 = f1(cs);
        let n2 = f2(cs);
        cmp::max(n1, n2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl SyllableChar for char {
        type Class = char;

        fn class(&self) -> char {
            *self
        }
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn a(c: char) -> bool {
        c == 'a'
    }

    fn b(c: char) -> bool {
        c == 'b'
    }

    #[test]
    fn test_optional_seq() {
        fn m(cs: &[char]) -> Option<usize> {
            match_optional_seq(match_one(a), match_one(b))(cs)
        }

        assert_eq!(Some(2), m(&chars("abb")));
        assert_eq!(Some(1), m(&chars("bb")));
        assert_eq!(None, m(&chars("aa")));
    }

    #[test]
    fn test_either_prefers_longest() {
        fn m(cs: &[char]) -> Option<usize> {
            match_either(match_one(a), match_seq(match_one(a), match_one(b)))(cs)
        }

        assert_eq!(Some(2), m(&chars("ab")));
        assert_eq!(Some(1), m(&chars("aa")));
    }

    mod repeat_then {
        use super::*;

        #[test]
        fn test_unbounded() {
            fn m(cs: &[char]) -> Option<usize> {
                match_repeat_then(match_one(a), match_one(b))(cs)
            }

            assert_eq!(Some(1), m(&chars("b")));
            assert_eq!(Some(26), m(&chars(&format!("{}b", "a".repeat(25)))));
            assert_eq!(None, m(&chars("aaa")));
        }

        #[test]
        fn test_backtracks_into_tail() {
            // (ab)* a
            fn m(cs: &[char]) -> Option<usize> {
                match_repeat_then(match_seq(match_one(a), match_one(b)), match_one(a))(cs)
            }

            assert_eq!(Some(5), m(&chars("ababa")));
            assert_eq!(Some(3), m(&chars("abab")));
        }
    }
}
