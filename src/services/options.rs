use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use log::debug;
use crate::models::{Character, QuizCard};

/// Size of a full option set: four distractors plus the answer
pub const OPTION_COUNT: usize = 5;
const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// How distractors are picked for a flashcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizStrategy {
    /// Uniform pick from everything but the answer
    Simple,
    /// One pick per phonetic group before falling back to uniform picks
    Balanced,
}

impl FromStr for QuizStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(QuizStrategy::Simple),
            "balanced" => Ok(QuizStrategy::Balanced),
            other => Err(format!("Unknown quiz strategy '{}'", other)),
        }
    }
}

impl fmt::Display for QuizStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizStrategy::Simple => write!(f, "simple"),
            QuizStrategy::Balanced => write!(f, "balanced"),
        }
    }
}

/// Phonetic bucket of a reading, keyed on its final letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneticGroup {
    A,
    I,
    U,
    E,
    O,
    Other,
}

impl PhoneticGroup {
    /// Bucket draw order
    pub const ALL: [PhoneticGroup; 6] = [
        PhoneticGroup::A,
        PhoneticGroup::I,
        PhoneticGroup::U,
        PhoneticGroup::E,
        PhoneticGroup::O,
        PhoneticGroup::Other,
    ];

    pub fn of(romaji: &str) -> Self {
        match romaji.chars().last().map(|c| c.to_ascii_lowercase()) {
            Some('a') => PhoneticGroup::A,
            Some('i') => PhoneticGroup::I,
            Some('u') => PhoneticGroup::U,
            Some('e') => PhoneticGroup::E,
            Some('o') => PhoneticGroup::O,
            _ => PhoneticGroup::Other,
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Build the answer choices for `correct` out of `table`.
///
/// The answer is present exactly once and no two options share a reading.
/// Tables with fewer than five distinct readings yield every one of them.
pub fn generate_options<R: Rng + ?Sized>(
    table: &[Character],
    correct: Character,
    strategy: QuizStrategy,
    rng: &mut R,
) -> Vec<Character> {
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(correct.romaji);
    let pool: Vec<Character> = table
        .iter()
        .filter(|c| seen.insert(c.romaji))
        .copied()
        .collect();

    let mut options = match strategy {
        QuizStrategy::Simple => simple_distractors(pool, rng),
        QuizStrategy::Balanced => balanced_distractors(pool, rng),
    };

    options.push(correct);
    options.shuffle(rng);
    options
}

fn simple_distractors<R: Rng + ?Sized>(mut pool: Vec<Character>, rng: &mut R) -> Vec<Character> {
    pool.shuffle(rng);
    pool.truncate(DISTRACTOR_COUNT);
    pool
}

fn balanced_distractors<R: Rng + ?Sized>(pool: Vec<Character>, rng: &mut R) -> Vec<Character> {
    let mut buckets: [Vec<Character>; 6] = Default::default();
    for c in pool {
        buckets[PhoneticGroup::of(c.romaji).slot()].push(c);
    }

    let mut picked = Vec::with_capacity(DISTRACTOR_COUNT);
    for group in PhoneticGroup::ALL {
        if picked.len() == DISTRACTOR_COUNT {
            break;
        }
        let bucket = &mut buckets[group.slot()];
        if bucket.is_empty() {
            continue;
        }
        let i = rng.gen_range(0..bucket.len());
        picked.push(bucket.swap_remove(i));
    }

    if picked.len() < DISTRACTOR_COUNT {
        debug!("Only {} phonetic groups populated, topping up", picked.len());
        let mut unused: Vec<Character> = buckets.into_iter().flatten().collect();
        unused.shuffle(rng);
        let missing = DISTRACTOR_COUNT - picked.len();
        picked.extend(unused.into_iter().take(missing));
    }

    picked
}

/// Pick the next card position, never repeating `current` when the table
/// has more than one entry.
pub fn next_index<R: Rng + ?Sized>(len: usize, current: Option<usize>, rng: &mut R) -> Option<usize> {
    match (len, current) {
        (0, _) => None,
        (1, _) => Some(0),
        (_, Some(current)) if current < len => {
            let i = rng.gen_range(0..len - 1);
            Some(if i >= current { i + 1 } else { i })
        }
        _ => Some(rng.gen_range(0..len)),
    }
}

/// Advance to a fresh card with newly generated options
pub fn deal_card<R: Rng + ?Sized>(
    table: &[Character],
    current: Option<usize>,
    strategy: QuizStrategy,
    rng: &mut R,
) -> Option<QuizCard> {
    let index = next_index(table.len(), current, rng)?;
    let character = table[index];
    let options = generate_options(table, character, strategy, rng);
    Some(QuizCard {
        index,
        character,
        options,
        strategy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use crate::services::kana::katakana;

    fn assert_valid(options: &[Character], correct: Character) {
        assert_eq!(options.iter().filter(|c| **c == correct).count(), 1);
        let readings: HashSet<&str> = options.iter().map(|c| c.romaji).collect();
        assert_eq!(readings.len(), options.len(), "duplicate reading in {:?}", options);
    }

    #[test]
    fn test_full_table_yields_five_options() {
        let mut rng = StdRng::seed_from_u64(7);
        for strategy in [QuizStrategy::Simple, QuizStrategy::Balanced] {
            for &correct in katakana() {
                let options = generate_options(katakana(), correct, strategy, &mut rng);
                assert_eq!(options.len(), OPTION_COUNT);
                assert_valid(&options, correct);
            }
        }
    }

    #[test]
    fn test_small_tables_use_every_entry() {
        let mut rng = StdRng::seed_from_u64(11);
        for n in 1..=5 {
            let table = &katakana()[..n];
            for strategy in [QuizStrategy::Simple, QuizStrategy::Balanced] {
                for &correct in table {
                    let options = generate_options(table, correct, strategy, &mut rng);
                    assert_eq!(options.len(), n);
                    assert_valid(&options, correct);
                }
            }
        }
    }

    #[test]
    fn test_duplicate_readings_in_table_are_collapsed() {
        let table = [
            Character::new("ア", "a"),
            Character::new("ァ", "a"),
            Character::new("イ", "i"),
            Character::new("ィ", "i"),
            Character::new("ウ", "u"),
        ];
        let mut rng = StdRng::seed_from_u64(3);
        for strategy in [QuizStrategy::Simple, QuizStrategy::Balanced] {
            let options = generate_options(&table, table[0], strategy, &mut rng);
            assert_eq!(options.len(), 3);
            assert_valid(&options, table[0]);
        }
    }

    #[test]
    fn test_balanced_draws_one_per_group_first() {
        let mut rng = StdRng::seed_from_u64(42);
        let correct = Character::new("ン", "n");
        for _ in 0..200 {
            let options = generate_options(katakana(), correct, QuizStrategy::Balanced, &mut rng);
            let groups: Vec<PhoneticGroup> = options
                .iter()
                .filter(|c| **c != correct)
                .map(|c| PhoneticGroup::of(c.romaji))
                .collect();
            for group in [PhoneticGroup::A, PhoneticGroup::I, PhoneticGroup::U, PhoneticGroup::E] {
                assert_eq!(groups.iter().filter(|g| **g == group).count(), 1);
            }
        }
    }

    #[test]
    fn test_balanced_tops_up_sparse_buckets() {
        let table = [
            Character::new("カ", "ka"),
            Character::new("サ", "sa"),
            Character::new("タ", "ta"),
            Character::new("ナ", "na"),
            Character::new("ハ", "ha"),
            Character::new("キ", "ki"),
        ];
        let mut rng = StdRng::seed_from_u64(5);
        let options = generate_options(&table, table[5], QuizStrategy::Balanced, &mut rng);
        assert_eq!(options.len(), OPTION_COUNT);
        assert_valid(&options, table[5]);
    }

    #[test]
    fn test_phonetic_group_of() {
        assert_eq!(PhoneticGroup::of("ka"), PhoneticGroup::A);
        assert_eq!(PhoneticGroup::of("shi"), PhoneticGroup::I);
        assert_eq!(PhoneticGroup::of("tsu"), PhoneticGroup::U);
        assert_eq!(PhoneticGroup::of("re"), PhoneticGroup::E);
        assert_eq!(PhoneticGroup::of("wo"), PhoneticGroup::O);
        assert_eq!(PhoneticGroup::of("n"), PhoneticGroup::Other);
        assert_eq!(PhoneticGroup::of(""), PhoneticGroup::Other);
    }

    #[test]
    fn test_final_shuffle_is_roughly_uniform() {
        let table = &katakana()[..3];
        let mut rng = StdRng::seed_from_u64(2024);
        let trials = 6000;
        for strategy in [QuizStrategy::Simple, QuizStrategy::Balanced] {
            let mut counts: HashMap<Vec<&str>, usize> = HashMap::new();
            for _ in 0..trials {
                let options = generate_options(table, table[0], strategy, &mut rng);
                let order = options.iter().map(|c| c.romaji).collect();
                *counts.entry(order).or_insert(0) += 1;
            }
            assert_eq!(counts.len(), 6);
            let expected = trials / 6;
            for (order, &count) in &counts {
                assert!(
                    count.abs_diff(expected) < expected / 5,
                    "{:?} appeared {} times, expected about {}",
                    order, count, expected
                );
            }
        }
    }

    #[test]
    fn test_next_index_never_repeats() {
        let mut rng = StdRng::seed_from_u64(9);
        for current in 0..10 {
            for _ in 0..50 {
                let next = next_index(10, Some(current), &mut rng).unwrap();
                assert_ne!(next, current);
                assert!(next < 10);
            }
        }
    }

    #[test]
    fn test_next_index_edge_sizes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(next_index(0, None, &mut rng), None);
        assert_eq!(next_index(1, Some(0), &mut rng), Some(0));
        assert_eq!(next_index(2, Some(0), &mut rng), Some(1));
        assert!(next_index(4, Some(99), &mut rng).unwrap() < 4);
    }

    #[test]
    fn test_deal_card_regenerates_options() {
        let mut rng = StdRng::seed_from_u64(77);
        let card = deal_card(katakana(), Some(0), QuizStrategy::Simple, &mut rng).unwrap();
        assert_ne!(card.index, 0);
        assert_eq!(card.character, katakana()[card.index]);
        assert_valid(&card.options, card.character);
        assert!(deal_card(&[], None, QuizStrategy::Simple, &mut rng).is_none());
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("simple".parse::<QuizStrategy>(), Ok(QuizStrategy::Simple));
        assert_eq!(" Balanced ".parse::<QuizStrategy>(), Ok(QuizStrategy::Balanced));
        assert!("weighted".parse::<QuizStrategy>().is_err());
    }
}
