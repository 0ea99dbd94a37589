//! Deterministic benchmark inputs.
//!
//! A [`FixtureSource`] hands out the record for iteration `i` and knows how to
//! check a decoded value against it without rebuilding the expected record.

use std::borrow::Cow;
use std::fmt::Display;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::dataset::LargeDataset;

/// String value shared by every constant-mode small record.
pub const SMALL_FOO: &str = "bar";

/// The small benchmark record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmallRecord {
    pub foo: String,
    pub foo_number: i32,
}

/// How the string field of small records is generated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SmallFixtureMode {
    /// `foo` is always `"bar"`.
    #[default]
    Constant,
    /// `foo` is `"bar{i}"`, defeating any encoder-side string caching.
    Varying,
}

/// A single field that decoded differently from what was encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl Mismatch {
    fn new(field: impl Into<String>, expected: impl Display, actual: impl Display) -> Self {
        Self {
            field: field.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

/// Produces the fixture for iteration `i` and validates decoded values.
pub trait FixtureSource<T: Clone> {
    fn fixture(&self, i: usize) -> Cow<'_, T>;

    /// Compare every measured field of `actual` with fixture `i`.
    fn check(&self, i: usize, actual: &T) -> Vec<Mismatch>;
}

fn iteration_number(i: usize) -> i32 {
    i32::try_from(i).unwrap_or(i32::MAX)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SmallFixtures {
    pub mode: SmallFixtureMode,
}

impl SmallFixtures {
    pub fn new(mode: SmallFixtureMode) -> Self {
        Self { mode }
    }

    pub fn record(&self, i: usize) -> SmallRecord {
        let foo = match self.mode {
            SmallFixtureMode::Constant => SMALL_FOO.to_string(),
            SmallFixtureMode::Varying => format!("{SMALL_FOO}{i}"),
        };
        SmallRecord {
            foo,
            foo_number: iteration_number(i),
        }
    }

    fn foo_matches(&self, i: usize, foo: &str) -> bool {
        match self.mode {
            SmallFixtureMode::Constant => foo == SMALL_FOO,
            // Compared in place so validation does not allocate per iteration.
            SmallFixtureMode::Varying => foo.strip_prefix(SMALL_FOO).is_some_and(|rest| {
                rest.bytes().all(|b| b.is_ascii_digit())
                    && (rest == "0" || !rest.starts_with('0'))
                    && rest.parse::<usize>() == Ok(i)
            }),
        }
    }
}

impl FixtureSource<SmallRecord> for SmallFixtures {
    fn fixture(&self, i: usize) -> Cow<'_, SmallRecord> {
        Cow::Owned(self.record(i))
    }

    fn check(&self, i: usize, actual: &SmallRecord) -> Vec<Mismatch> {
        let mut out = Vec::new();
        if !self.foo_matches(i, &actual.foo) {
            out.push(Mismatch::new("foo", self.record(i).foo, &actual.foo));
        }
        let expected = iteration_number(i);
        if actual.foo_number != expected {
            out.push(Mismatch::new("foo_number", expected, actual.foo_number));
        }
        out
    }
}

/// The large dataset is the same borrowed structure on every call.
impl FixtureSource<LargeDataset> for LargeDataset {
    fn fixture(&self, _i: usize) -> Cow<'_, LargeDataset> {
        Cow::Borrowed(self)
    }

    fn check(&self, _i: usize, actual: &LargeDataset) -> Vec<Mismatch> {
        if self.people.len() != actual.people.len() {
            return vec![Mismatch::new(
                "people.len",
                self.people.len(),
                actual.people.len(),
            )];
        }

        // Report the first differing record only; a broken codec would
        // otherwise flood the log with thousands of entries.
        self.people
            .iter()
            .zip(&actual.people)
            .enumerate()
            .find(|(_, (want, got))| want != got)
            .map(|(idx, (want, got))| {
                vec![Mismatch::new(
                    format!("people[{idx}]"),
                    format!("{want:?}"),
                    format!("{got:?}"),
                )]
            })
            .unwrap_or_default()
    }
}
