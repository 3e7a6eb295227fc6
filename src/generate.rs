//! Synthetic dataset generation
//!
//! Produces plausible book rows for demos and tests without an input
//! file. The randomness source is injected so generation is
//! reproducible under a seeded rng.

use rand::Rng;

use crate::dataset::{Dataset, Row, RowId, DISPLAY_COLUMNS};

/// Default batch size for a generated dataset
pub const DEFAULT_ROW_COUNT: usize = 10_000;

/// Published year range, inclusive
const YEAR_MIN: u32 = 1950;
const YEAR_MAX: u32 = 2023;

const TITLE_WORDS: &[&str] = &[
    "The", "Dark", "Silent", "Golden", "Secret", "Lost", "Hidden", "Ancient", "Forgotten", "Last",
    "First", "Shadow", "Light", "Blood", "Fire", "Water", "Storm", "Night", "Day", "Dream", "Hope",
    "Love", "Death", "Life", "Heart", "Soul", "Mind", "Time", "World", "Journey", "Quest",
    "Kingdom", "Empire", "City", "Forest", "Mountain", "Ocean", "River", "Star", "Moon", "Sun",
];

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Michael", "Sarah", "David", "Lisa", "Robert", "Emily", "James", "Mary",
    "Christopher", "Jessica", "William", "Ashley", "Daniel", "Amanda", "Matthew", "Jennifer",
    "Anthony", "Michelle",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin",
];

const GENRES: &[&str] = &[
    "Fiction",
    "Non-Fiction",
    "Science Fiction",
    "Fantasy",
    "Mystery",
    "Romance",
    "Thriller",
    "Biography",
    "History",
    "Self-Help",
];

/// Generate `count` book rows from the injected randomness source.
///
/// Ids are sequential from 1 and every row starts unmodified. Pure
/// given the rng; the same seed yields the same dataset.
pub fn generate<R: Rng>(rng: &mut R, count: usize) -> Dataset {
    let columns = DISPLAY_COLUMNS.iter().map(|c| c.to_string()).collect();
    let rows = (0..count)
        .map(|index| {
            Row::new(
                RowId(index as u64 + 1),
                vec![title(rng), author(rng), genre(rng), year(rng), isbn(rng)],
            )
        })
        .collect();

    Dataset::new(columns, rows)
}

/// 1-4 vocabulary words joined with spaces
fn title<R: Rng>(rng: &mut R) -> String {
    let count = rng.gen_range(1..=4);
    let words: Vec<&str> = (0..count).map(|_| pick(rng, TITLE_WORDS)).collect();
    words.join(" ")
}

fn author<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

fn genre<R: Rng>(rng: &mut R) -> String {
    pick(rng, GENRES).to_string()
}

fn year<R: Rng>(rng: &mut R) -> String {
    rng.gen_range(YEAR_MIN..=YEAR_MAX).to_string()
}

/// Dash-separated digit groups; not a validly checksummed ISBN
fn isbn<R: Rng>(rng: &mut R) -> String {
    format!(
        "978-{}-{}-{}-{}",
        rng.gen_range(0..10),
        rng.gen_range(100..1000),
        rng.gen_range(10_000..100_000),
        rng.gen_range(0..10),
    )
}

fn pick<'a, R: Rng>(rng: &mut R, items: &'a [&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}
