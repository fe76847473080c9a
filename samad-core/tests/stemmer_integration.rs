use rand::{rngs::StdRng, Rng, SeedableRng};
use samad_core::{
    negate, normalize, stem, stem_dialect, strip_suffix, AffixTables, BucketedAffixSet, Mode,
    SamadStemmer, Stemmer, StemmerConfig, MIN_STEM_LEN,
};

fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Random strings over the Arabic letter block, hamza through yaa.
fn random_words(seed: u64, count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(0..=10);
            (0..len)
                .map(|_| char::from_u32(rng.gen_range(0x0621..=0x064A)).unwrap())
                .collect()
        })
        .collect()
}

#[test]
fn strips_article_and_taa_marbuta() {
    // ال + غرف + ة
    assert_eq!(stem("الغرفة"), "غرف");
    assert_eq!(stem_dialect("الغرفة"), "غرف");
    assert_eq!(stem("الطالبات"), "طالب");
    assert_eq!(stem("المعلمون"), "معلم");
}

#[test]
fn word_without_affixes_is_unchanged() {
    assert_eq!(stem("مدرس"), "مدرس");
    assert_eq!(stem_dialect("مدرس"), "مدرس");
}

#[test]
fn normalizes_before_stemming() {
    assert_eq!(stem("مستشفى"), "مستشف");
    assert_eq!(stem("أولادهم"), "ولاد");
    assert_eq!(stem_dialect("أولادهم"), "ولاد");
}

#[test]
fn negated_dialect_verbs_keep_the_marker() {
    for (word, expected) in [
        ("ماشربتش", "مشرب"),
        ("مابغيتش", "مبغي"),
        ("ماعنديش", "معند"),
        ("وماكيخدمش", "مخدم"),
    ] {
        assert_eq!(stem_dialect(word), expected, "{word}");
        assert_eq!(stem_dialect(word), format!("\u{0645}{}", negate(word)));
    }
}

#[test]
fn negation_branch_is_only_reached_when_the_verb_prefix_missed() {
    // The negation result is compared against the dialect verb-prefix strip,
    // which is always the unshortened word by the time negation runs. So a
    // shortening negation strip always wins and carries the marker.
    let tables = AffixTables::global();
    for word in ["ماشربتش", "مابغيتش", "ماعنديش", "وماكيخدمش"] {
        let verb = samad_core::strip_prefix(word, tables.dialect_verb_prefixes());
        assert_eq!(verb, word);
        assert!(char_len(&negate(word)) < char_len(verb));
        assert!(stem_dialect(word).starts_with('\u{0645}'));
    }
}

#[test]
fn negation_is_ignored_in_standard_mode() {
    assert_eq!(stem("وماكيخدمش"), "ماكيخدمش");
    assert_eq!(negate("مدرس"), "مدرس");
}

#[test]
fn modes_may_diverge() {
    assert_eq!(stem("كانقرا"), "انقر");
    assert_eq!(stem_dialect("كانقرا"), "قرا");
}

#[test]
fn longest_suffix_wins_over_its_last_letter() {
    let suffixes = BucketedAffixSet::new(["ا", "هما"]);
    assert_eq!(strip_suffix("كتابهما", &suffixes), "كتاب");
    assert!(AffixTables::global().noun_suffixes().contains("هما"));
    assert!(AffixTables::global().noun_suffixes().contains("ا"));
    assert_eq!(strip_suffix("كتابهما", AffixTables::global().noun_suffixes()), "كتاب");
}

#[test]
fn stems_never_drop_below_three_letters() {
    for word in random_words(7, 5_000) {
        let len = char_len(&word);
        for stemmed in [stem(&word), stem_dialect(&word)] {
            if len >= MIN_STEM_LEN {
                assert!(char_len(&stemmed) >= MIN_STEM_LEN, "{word} -> {stemmed}");
            }
            assert!(char_len(&stemmed) <= len, "{word} -> {stemmed}");
        }
    }
}

#[test]
fn short_words_only_get_normalized() {
    for word in random_words(11, 5_000) {
        if char_len(&word) <= MIN_STEM_LEN {
            assert_eq!(stem(&word), normalize(&word));
            assert_eq!(stem_dialect(&word), normalize(&word));
        }
    }
}

#[test]
fn normalization_is_idempotent() {
    for word in random_words(13, 2_000) {
        let once = normalize(&word);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn stemming_is_total_on_odd_input() {
    for word in ["", " ", "a", "hello", "١٢٣", "🙂🙂🙂🙂", "ال", "كتاب كتاب"] {
        let _ = stem(word);
        let _ = stem_dialect(word);
    }
    assert_eq!(stem(""), "");
    assert_eq!(stem_dialect("hello"), "hello");
}

#[test]
fn stem_all_preserves_order() {
    let words: Vec<String> = ["الغرفة", "سيكتبون", "مدرس", "وكتابه"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    let stemmer = SamadStemmer::from_config(&StemmerConfig::standard());
    assert_eq!(stemmer.stem_all(&words), vec!["غرف", "كتب", "مدرس", "كتاب"]);

    let dialect = SamadStemmer::new(Mode::Dialect);
    let expected: Vec<String> = words.iter().map(|w| stem_dialect(w)).collect();
    assert_eq!(dialect.stem_all(&words), expected);
}

#[test]
fn shared_tables_work_across_threads() {
    let words = random_words(17, 400);
    let expected: Vec<String> = words.iter().map(|w| stem_dialect(w)).collect();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| words.iter().map(|w| stem_dialect(w)).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
