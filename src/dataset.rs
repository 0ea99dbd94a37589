//! The large (~5MB) benchmark dataset.
//!
//! Generated deterministically from a seed, or loaded from a JSON file written
//! by `codec-latency-bench generate-dataset`.
//!
//! # File Format
//!
//! ```text
//! {
//!   "people": [
//!     { "id": 0, "guid": "…", "is_active": true, "balance": 1234.56, "age": 31,
//!       "name": "…", "email": "…", "company": "…", "latitude": 12.5,
//!       "longitude": -45.25, "tags": ["…"], "friends": [{ "id": 1, "name": "…" }] },
//!     …
//!   ]
//! }
//! ```
//!
//! Roughly 420 bytes of JSON per person, so the default record count lands
//! near 5MB.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{BenchError, Result};

/// Record count that serializes to roughly 5MB of JSON.
pub const DEFAULT_RECORDS: usize = 12_000;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Alan", "Edsger", "Barbara", "Ken", "Dennis", "Margaret", "Linus", "Radia",
    "Frances", "John", "Donald", "Leslie", "Niklaus", "Tony",
];
const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Thompson", "Ritchie", "Hamilton",
    "Torvalds", "Perlman", "Allen", "Backus", "Knuth", "Lamport", "Wirth", "Hoare",
];
const COMPANIES: &[&str] = &[
    "ZENTRIX", "OPTICOM", "QUILCH", "ISOLOGIA", "GEEKWAGON", "COMTRAIL", "EXOSPACE", "ACRODANCE",
];
const TAGS: &[&str] = &[
    "consequat", "laboris", "deserunt", "proident", "officia", "nostrud", "tempor", "magna",
    "veniam", "cillum", "aliqua", "mollit",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: u32,
    pub guid: String,
    pub is_active: bool,
    pub balance: f64,
    pub age: u32,
    pub name: String,
    pub email: String,
    pub company: String,
    pub latitude: f64,
    pub longitude: f64,
    pub tags: Vec<String>,
    pub friends: Vec<Friend>,
}

/// Nested array-of-objects structure used by the large variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LargeDataset {
    pub people: Vec<Person>,
}

/// Configuration for dataset generation.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Number of people to generate.
    pub count: usize,
    /// Random seed for deterministic generation.
    pub seed: u64,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_RECORDS,
            seed: 42,
        }
    }
}

/// Summary of a dataset file on disk.
#[derive(Debug, Clone)]
pub struct DatasetMeta {
    pub records: usize,
    pub file_bytes: u64,
    pub sha256: String,
}

fn per_record_seed(master_seed: u64, index: usize) -> u64 {
    master_seed
        .wrapping_add(index as u64)
        .wrapping_mul(0x517cc1b727220a95)
}

fn pick<'a>(rng: &mut ChaCha8Rng, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

fn full_name(rng: &mut ChaCha8Rng) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

/// Two-decimal value, so the textual format never has to carry long mantissas.
fn cents(rng: &mut ChaCha8Rng, lo: i64, hi: i64) -> f64 {
    rng.gen_range(lo..hi) as f64 / 100.0
}

fn guid(rng: &mut ChaCha8Rng) -> String {
    let a: u32 = rng.gen();
    let b: u16 = rng.gen();
    let c: u16 = rng.gen();
    let d: u16 = rng.gen();
    let e: u64 = rng.gen::<u64>() & 0xffff_ffff_ffff;
    format!("{a:08x}-{b:04x}-{c:04x}-{d:04x}-{e:012x}")
}

fn generate_person(rng: &mut ChaCha8Rng, id: usize, count: usize) -> Person {
    let name = full_name(rng);
    let company = pick(rng, COMPANIES).to_string();
    let email = format!(
        "{}@{}.com",
        name.to_ascii_lowercase().replace(' ', "."),
        company.to_ascii_lowercase()
    );

    let tag_count = rng.gen_range(3..=6);
    let tags = (0..tag_count).map(|_| pick(rng, TAGS).to_string()).collect();

    let friend_count = rng.gen_range(2..=4);
    let friends = (0..friend_count)
        .map(|_| Friend {
            id: rng.gen_range(0..count.max(1)) as u32,
            name: full_name(rng),
        })
        .collect();

    Person {
        id: id as u32,
        guid: guid(rng),
        is_active: rng.gen_bool(0.5),
        balance: cents(rng, 100_000, 400_000),
        age: rng.gen_range(20..=70),
        name,
        email,
        company,
        latitude: cents(rng, -9_000, 9_000),
        longitude: cents(rng, -18_000, 18_000),
        tags,
        friends,
    }
}

/// Generate a dataset deterministically.
///
/// Records are generated in parallel from index-derived seeds, so the output
/// does not depend on the thread count.
pub fn generate_dataset(config: &GenerateConfig) -> LargeDataset {
    let count = config.count;
    let seed = config.seed;

    let people = (0..count)
        .into_par_iter()
        .map(|i| {
            let mut rng = ChaCha8Rng::seed_from_u64(per_record_seed(seed, i));
            generate_person(&mut rng, i, count)
        })
        .collect();

    LargeDataset { people }
}

/// File name used by `generate-dataset`: `people_12k_seed42.json`.
pub fn dataset_file_name(config: &GenerateConfig) -> String {
    format!("people_{}_seed{}.json", format_count(config.count), config.seed)
}

/// Format a record count as a short suffix (10k, 1m, …).
pub fn format_count(count: usize) -> String {
    match count {
        n if n >= 1_000_000 && n % 1_000_000 == 0 => format!("{}m", n / 1_000_000),
        n if n >= 1_000 && n % 1_000 == 0 => format!("{}k", n / 1_000),
        n => n.to_string(),
    }
}

/// Write a dataset to a JSON file.
pub fn write_dataset<P: AsRef<Path>>(path: P, dataset: &LargeDataset) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::with_capacity(64 * 1024, file);
    serde_json::to_writer(&mut writer, dataset)?;
    writer.flush()?;
    Ok(())
}

/// Load a dataset from a JSON file.
///
/// A missing or unreadable file is reported as [`BenchError::FixtureUnavailable`].
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<LargeDataset> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| BenchError::FixtureUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::with_capacity(64 * 1024, file);
    let dataset = serde_json::from_reader(reader)?;
    tracing::debug!(path = %path.display(), "loaded large dataset");
    Ok(dataset)
}

fn hex32(d: [u8; 32]) -> String {
    d.iter().map(|b| format!("{b:02x}")).collect()
}

/// Read a dataset file and summarize it.
pub fn read_dataset_meta<P: AsRef<Path>>(path: P) -> Result<DatasetMeta> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| BenchError::FixtureUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset: LargeDataset = serde_json::from_slice(&bytes)?;

    Ok(DatasetMeta {
        records: dataset.people.len(),
        file_bytes: bytes.len() as u64,
        sha256: hex32(Sha256::digest(&bytes).into()),
    })
}

/// Where the large variants get their dataset from.
#[derive(Debug, Clone)]
pub enum LargeSource {
    Generated(GenerateConfig),
    File(PathBuf),
}

impl LargeSource {
    pub fn load(&self) -> Result<LargeDataset> {
        match self {
            LargeSource::Generated(cfg) => Ok(generate_dataset(cfg)),
            LargeSource::File(path) => load_dataset(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_generate_deterministic() {
        let config = GenerateConfig {
            count: 200,
            seed: 42,
        };

        let a = generate_dataset(&config);
        let b = generate_dataset(&config);
        assert_eq!(a.people.len(), 200);
        assert_eq!(a, b);

        let other = generate_dataset(&GenerateConfig { count: 200, seed: 43 });
        assert_ne!(a, other);
    }

    #[test]
    fn test_ids_follow_index() {
        let ds = generate_dataset(&GenerateConfig { count: 50, seed: 7 });
        for (i, p) in ds.people.iter().enumerate() {
            assert_eq!(p.id as usize, i);
            assert!((3..=6).contains(&p.tags.len()));
            assert!((2..=4).contains(&p.friends.len()));
            assert!(p.friends.iter().all(|f| (f.id as usize) < 50));
        }
    }

    #[test]
    fn test_write_and_load() {
        let config = GenerateConfig { count: 75, seed: 123 };
        let ds = generate_dataset(&config);

        let dir = tempdir().unwrap();
        let path = dir.path().join(dataset_file_name(&config));
        write_dataset(&path, &ds).unwrap();

        let loaded = load_dataset(&path).unwrap();
        assert_eq!(loaded, ds);

        let meta = read_dataset_meta(&path).unwrap();
        assert_eq!(meta.records, 75);
        assert_eq!(meta.file_bytes, fs::metadata(&path).unwrap().len());
        assert_eq!(meta.sha256.len(), 64);
    }

    #[test]
    fn test_default_size_is_about_five_megabytes() {
        let ds = generate_dataset(&GenerateConfig::default());
        let bytes = serde_json::to_vec(&ds).unwrap().len();
        assert!((4_000_000..7_000_000).contains(&bytes), "{bytes} bytes");
    }

    #[test]
    fn test_missing_file_is_fixture_unavailable() {
        let dir = tempdir().unwrap();
        let err = load_dataset(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, BenchError::FixtureUnavailable { .. }));
    }

    #[test]
    fn test_file_names() {
        let cfg = GenerateConfig { count: 12_000, seed: 42 };
        assert_eq!(dataset_file_name(&cfg), "people_12k_seed42.json");
        assert_eq!(format_count(2_000_000), "2m");
        assert_eq!(format_count(1_500), "1500");
    }
}
