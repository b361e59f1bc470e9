use anyhow::{Context, Result};
use serde::Serialize;

/// One output row; field names are the catalogue headers.
#[derive(Serialize)]
struct Row {
    #[serde(rename = "Book id")]
    id: usize,
    #[serde(rename = "Book Title")]
    title: String,
    #[serde(rename = "Author(s)")]
    author: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Publication Date")]
    publication_date: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Language")]
    language: String,
    #[serde(rename = "Publisher")]
    publisher: String,
    #[serde(rename = "Pages")]
    pages: String,
    #[serde(rename = "Book title_URL")]
    book_url: String,
    #[serde(rename = "Author_URL")]
    author_url: String,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }

    /// True with probability `percent`/100.
    fn chance(&mut self, percent: usize) -> bool {
        self.below(100) < percent
    }
}

const TITLE_WORDS: [&str; 12] = [
    "Maha", "Prasthanam", "Veyi", "Padagalu", "Kavitha", "Charitra", "Andhra", "Kathalu",
    "Ramayana", "Bharatam", "Vemana", "Padyalu",
];
const AUTHORS: [&str; 6] = [
    "Sri Sri", "Viswanatha Satyanarayana", "Gurajada Apparao", "Chalam", "Unknown", "Tripuraneni",
];
const CATEGORIES: [&str; 6] = ["Poetry", "History", "Novel", "Drama", "Biography", "unknown"];
const LANGUAGES: [&str; 4] = ["Telugu", "Telugu", "English", "Sanskrit"];
const PUBLISHERS: [&str; 5] = ["Visalandhra", "Emesco", "Navodaya", "Andhra Patrika", "nan"];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "sample_catalogue.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating output file")?;

    let n_rows = 250;
    for id in 0..n_rows {
        let title = format!("{} {}", rng.pick(&TITLE_WORDS), rng.pick(&TITLE_WORDS));
        let year = 1890 + rng.below(130);

        // Mix in the messy cases a real catalogue has: missing years that
        // only exist as a publication date, sentinels, and absent links.
        let (year_cell, date_cell) = match rng.below(10) {
            0 => ("unknown".to_string(), format!("{year}")),
            1 => (String::new(), String::new()),
            2 => (format!("{year}.0"), String::new()),
            _ => (year.to_string(), String::new()),
        };
        let book_url = if rng.chance(40) {
            format!("https://archive.org/details/book_{id}")
        } else if rng.chance(10) {
            "see catalogue card".to_string()
        } else {
            String::new()
        };
        let author = rng.pick(&AUTHORS).to_string();
        let author_url = if author != "Unknown" && rng.chance(50) {
            format!("https://te.wikipedia.org/wiki/{}", author.replace(' ', "_"))
        } else {
            String::new()
        };

        writer
            .serialize(Row {
                id,
                title: if rng.chance(3) { "nan".to_string() } else { title },
                author,
                year: year_cell,
                publication_date: date_cell,
                category: rng.pick(&CATEGORIES).to_string(),
                language: rng.pick(&LANGUAGES).to_string(),
                publisher: rng.pick(&PUBLISHERS).to_string(),
                pages: (40 + rng.below(800)).to_string(),
                book_url,
                author_url,
            })
            .with_context(|| format!("writing row {id}"))?;
    }
    writer.flush().context("flushing output file")?;

    println!("Wrote {n_rows} books to {output_path}");
    Ok(())
}
