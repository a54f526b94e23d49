//! Patient record with an insertion-ordered test map.
//!
//! Output order and failure interleaving are both observable, so the tests
//! are kept in a `Vec` with a `HashMap` index for name lookup rather than in a
//! sorted or hashed map alone.

use std::collections::HashMap;

use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::test_result::TestResult;

/// Insertion-ordered mapping of test name to [`TestResult`].
#[derive(Debug, Clone, Default)]
pub struct TestResults {
    /// Maps test name -> position in `entries`
    index: HashMap<String, usize>,
    entries: Vec<(String, TestResult)>,
}

impl TestResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a result, returning the previous one for the same name.
    ///
    /// A repeated name replaces the value in place and keeps the position of
    /// the first occurrence.
    pub fn insert(&mut self, name: impl Into<String>, result: TestResult) -> Option<TestResult> {
        let name = name.into();
        if let Some(&position) = self.index.get(&name) {
            return Some(std::mem::replace(&mut self.entries[position].1, result));
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, result));
        None
    }

    pub fn get(&self, name: &str) -> Option<&TestResult> {
        self.index.get(name).map(|&position| &self.entries[position].1)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut TestResult> {
        self.index
            .get(name)
            .map(|&position| &mut self.entries[position].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TestResult)> {
        self.entries
            .iter()
            .map(|(name, result)| (name.as_str(), result))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<N: Into<String>> FromIterator<(N, TestResult)> for TestResults {
    fn from_iter<I: IntoIterator<Item = (N, TestResult)>>(iter: I) -> Self {
        let mut results = Self::new();
        for (name, result) in iter {
            results.insert(name, result);
        }
        results
    }
}

#[derive(Serialize)]
struct NamedTest<'a> {
    name: &'a str,
    #[serde(flatten)]
    result: &'a TestResult,
}

impl Serialize for TestResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for (name, result) in &self.entries {
            seq.serialize_element(&NamedTest { name, result })?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for TestResults {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct OwnedNamedTest {
            name: String,
            #[serde(flatten)]
            result: TestResult,
        }

        let tests = Vec::<OwnedNamedTest>::deserialize(deserializer)?;
        Ok(tests
            .into_iter()
            .map(|test| (test.name, test.result))
            .collect())
    }
}

/// A named patient and their laboratory results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientRecord {
    pub name: String,
    pub tests: TestResults,
}

impl PatientRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tests: TestResults::new(),
        }
    }

    /// Builder-style insert, mainly for tests and fixtures.
    #[must_use]
    pub fn with_test(mut self, name: impl Into<String>, value: f64) -> Self {
        self.tests.insert(name, TestResult::new(value));
        self
    }

    /// Look up the measured value of a test.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownTest`] when the record has no such test.
    pub fn value_of(&self, name: &str) -> Result<f64> {
        self.tests
            .get(name)
            .map(|result| result.value)
            .ok_or_else(|| ModelError::UnknownTest {
                name: name.to_string(),
            })
    }

    /// Append a failure annotation to the named test.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownTest`] when the record has no such test.
    pub fn annotate(&mut self, name: &str, annotation: impl Into<String>) -> Result<()> {
        let result = self
            .tests
            .get_mut(name)
            .ok_or_else(|| ModelError::UnknownTest {
                name: name.to_string(),
            })?;
        result.push_failure(annotation);
        Ok(())
    }

    /// Number of tests with at least one failure annotation.
    pub fn failing_test_count(&self) -> usize {
        self.tests
            .iter()
            .filter(|(_, result)| result.has_failures())
            .count()
    }
}
