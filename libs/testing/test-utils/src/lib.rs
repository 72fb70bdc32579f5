//! Shared helpers for integration tests.
//!
//! - `TestDatabase`: a migrated Postgres container (feature: "postgres")
//! - `TestDataBuilder`: reproducible, letters-only test data
//! - `assertions`: small helpers with readable failure messages
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! # async fn setup() {
//! let db = TestDatabase::new().await;
//! let builder = TestDataBuilder::from_test_name("create_user");
//! let name = builder.name("Anna");
//! # drop((db, name));
//! # }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Produces deterministic test data from a seed, so a failing test replays
/// with the same values.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed the builder from the test's name.
    ///
    /// Two runs of the same test see the same data; two different tests
    /// see different data.
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("create_user");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher};

        Self::new(BuildHasherDefault::<DefaultHasher>::default().hash_one(name))
    }

    /// Generate a unique name containing only letters and hyphens.
    ///
    /// The seed digits are mapped onto letters so the result stays valid for
    /// fields that reject digits.
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(210);
    /// assert_eq!(builder.name("Anna"), "Anna-cba");
    /// ```
    pub fn name(&self, prefix: &str) -> String {
        let tail: String = self
            .seed
            .to_string()
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|digit| char::from(b'a' + digit as u8))
            .collect();

        format!("{prefix}-{tail}")
    }
}

pub mod assertions {
    /// Compare two row ids, naming the comparison in the failure message.
    pub fn assert_id_eq(actual: i64, expected: i64, context: &str) {
        assert_eq!(
            actual, expected,
            "{context}: expected id {expected}, got {actual}"
        );
    }

    /// Unwrap an `Option`, panicking with the given context when it is `None`.
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{context}: expected Some, got None"))
    }
}
