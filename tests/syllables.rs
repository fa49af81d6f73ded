//! Cross-checks the syllable recognizer against the syllable grammar written
//! as regular expressions over one-letter category codes.

mod common;

use indic_shaper::buffer::Buffer;
use indic_shaper::map::FeatureMapBuilder;
use indic_shaper::scripts::indic::{find_syllables, Category, IndicShaper, SyllableKind};
use indic_shaper::scripts::ComplexShaper;
use indic_shaper::tag;
use regex::Regex;

use crate::common::{props, FakeFace};

// One representative Devanagari character per category.
const ALPHABET: &[char] = &[
    '\u{0915}', // C
    '\u{0915}', // C
    '\u{0930}', // Ra
    '\u{0905}', // V
    '\u{093C}', // N
    '\u{094D}', // H
    '\u{094D}', // H
    '\u{200C}', // ZWNJ
    '\u{200D}', // ZWJ
    '\u{093F}', // M
    '\u{0902}', // SM
    '\u{0951}', // VD
    '\u{0952}', // A
    '\u{00A0}', // NBSP
    'x',        // Other
];

fn letter(category: Category) -> char {
    match category {
        Category::Other => 'o',
        Category::C => 'C',
        Category::Ra => 'R',
        Category::V => 'V',
        Category::N => 'N',
        Category::H => 'H',
        Category::Zwnj => 'n',
        Category::Zwj => 'j',
        Category::M => 'M',
        Category::SM => 'S',
        Category::VD => 'D',
        Category::A => 'A',
        Category::Nbsp => 'B',
    }
}

struct Grammar {
    forms: Vec<(SyllableKind, Regex)>,
}

impl Grammar {
    fn new() -> Grammar {
        let matras_and_tail = "(?:MN?H?)*S?(?:DD?)?";
        let consonant = format!(
            "^(?:[CR]N?(?:[nj]H|H[nj]?))*[CR]N?A?(?:H[nj]?S?(?:DD?)?|{})$",
            matras_and_tail
        );
        let vowel = format!("^(?:RH)?VN?(?:[nj]H[CR]|j[CR])?{}$", matras_and_tail);
        let standalone = format!("^(?:RH)?BN?(?:[nj]?H[CR])?{}$", matras_and_tail);

        // In order of precedence.
        let forms = vec![
            (SyllableKind::Consonant, Regex::new(&consonant).unwrap()),
            (SyllableKind::Vowel, Regex::new(&vowel).unwrap()),
            (SyllableKind::Standalone, Regex::new(&standalone).unwrap()),
        ];
        Grammar { forms }
    }

    fn matches(&self, letters: &str) -> Option<SyllableKind> {
        self.forms
            .iter()
            .find(|(_, re)| re.is_match(letters))
            .map(|(kind, _)| *kind)
    }

    /// The longest syllable at the start of `letters`.
    fn longest(&self, letters: &str) -> (usize, SyllableKind) {
        (1..=letters.len())
            .rev()
            .find_map(|len| self.matches(&letters[..len]).map(|kind| (len, kind)))
            .unwrap_or((1, SyllableKind::NonIndic))
    }
}

fn classified(cs: &[char]) -> Buffer {
    let face = FakeFace::devanagari();
    let mut builder = FeatureMapBuilder::new(&props(tag::DEVA));
    IndicShaper.collect_features(&mut builder, &props(tag::DEVA));
    let map = builder.compile(&face);

    let mut buffer = Buffer::from_chars(cs.iter().copied());
    IndicShaper.setup_masks(&map, &mut buffer, &face).unwrap();
    buffer
}

fn check(grammar: &Grammar, cs: &[char]) {
    let buffer = classified(cs);
    let letters: String = buffer
        .info
        .iter()
        .map(|info| letter(info.indic_category()))
        .collect();

    let mut start = 0;
    for syllable in find_syllables(&buffer.info) {
        assert_eq!(start, syllable.start, "gap before syllable in {}", letters);
        let (len, kind) = grammar.longest(&letters[start..]);
        assert_eq!(
            (start + len, kind),
            (syllable.end, syllable.kind),
            "syllable at {} of {}",
            start,
            letters
        );
        start = syllable.end;
    }
    assert_eq!(letters.len(), start);
}

// xorshift
struct Rng(u32);

impl Rng {
    fn next(&mut self) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }

    fn below(&mut self, n: usize) -> usize {
        self.next() as usize % n
    }
}

#[test]
fn test_known_syllables() {
    let grammar = Grammar::new();
    let cases: &[&str] = &[
        "\u{0915}\u{094D}\u{0937}",
        "\u{0930}\u{094D}\u{0915}\u{094D}\u{0937}\u{093F}\u{0902}",
        "\u{0915}\u{200C}\u{094D}\u{0937}",
        "\u{0915}\u{094D}\u{200D}",
        "\u{0905}\u{0902}\u{0951}\u{0951}",
        "\u{0930}\u{094D}\u{0905}\u{200D}\u{0915}",
        "\u{00A0}\u{093C}\u{094D}\u{0915}\u{093F}",
        "\u{094D}\u{094D}x\u{200C}",
        "\u{0915}\u{093C}\u{0952}\u{094D}\u{200C}",
    ];
    for case in cases {
        let cs: Vec<char> = case.chars().collect();
        check(&grammar, &cs);
    }
}

#[test]
fn test_random_runs() {
    let grammar = Grammar::new();
    let mut rng = Rng(0x1234_5678);
    for _ in 0..2000 {
        let len = 1 + rng.below(12);
        let cs: Vec<char> = (0..len)
            .map(|_| ALPHABET[rng.below(ALPHABET.len())])
            .collect();
        check(&grammar, &cs);
    }
}

#[test]
fn test_segmentation_is_stable() {
    let buffer = classified(&[
        '\u{0930}', '\u{094D}', '\u{0915}', '\u{093F}', 'x', '\u{0905}', '\u{200D}', '\u{0915}',
    ]);
    let first = find_syllables(&buffer.info);

    assert_eq!(first, find_syllables(&buffer.info));
    assert_eq!(
        vec![
            SyllableKind::Consonant,
            SyllableKind::NonIndic,
            SyllableKind::Vowel
        ],
        first.iter().map(|s| s.kind).collect::<Vec<_>>()
    );
}
