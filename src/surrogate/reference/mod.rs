//! Reference lists of candidate surrogate values
//!
//! Lists are loaded once per process (see [`loader`]) and shared read-only by
//! every worker. Sampling is uniform with replacement.

pub mod loader;

use crate::domain::{Result, SurrogateError};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub use loader::load_reference_lists;

/// English month names, used for `Month (only)` placeholders
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Named candidate list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Addresses,
    LastNames,
    MaleFirstNames,
    FemaleFirstNames,
    /// Female first names followed by male first names
    AllFirstNames,
    PhoneNumbers,
    Companies,
    Countries,
    Emails,
    Holidays,
    Hospitals,
    Locations,
    Months,
    Ssn,
    States,
    Colleges,
    WardsUnits,
    Websites,
}

impl ListKind {
    /// Every list, in load order
    pub const ALL: [ListKind; 18] = [
        ListKind::Addresses,
        ListKind::LastNames,
        ListKind::MaleFirstNames,
        ListKind::FemaleFirstNames,
        ListKind::AllFirstNames,
        ListKind::PhoneNumbers,
        ListKind::Companies,
        ListKind::Countries,
        ListKind::Emails,
        ListKind::Holidays,
        ListKind::Hospitals,
        ListKind::Locations,
        ListKind::Months,
        ListKind::Ssn,
        ListKind::States,
        ListKind::Colleges,
        ListKind::WardsUnits,
        ListKind::Websites,
    ];

    /// Stable snake_case name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Addresses => "addresses",
            Self::LastNames => "last_names",
            Self::MaleFirstNames => "first_names_male",
            Self::FemaleFirstNames => "first_names_female",
            Self::AllFirstNames => "all_first_names",
            Self::PhoneNumbers => "phone_numbers",
            Self::Companies => "companies",
            Self::Countries => "countries",
            Self::Emails => "emails",
            Self::Holidays => "holidays",
            Self::Hospitals => "hospitals",
            Self::Locations => "locations",
            Self::Months => "months",
            Self::Ssn => "ssn",
            Self::States => "states",
            Self::Colleges => "colleges",
            Self::WardsUnits => "wards_units",
            Self::Websites => "websites",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable set of reference lists
#[derive(Debug, Clone, Default)]
pub struct ReferenceLists {
    lists: HashMap<ListKind, Vec<String>>,
}

impl ReferenceLists {
    /// Create an empty set; every sample fails until lists are inserted
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from explicit lists, deriving `AllFirstNames` and `Months`
    /// when they are not supplied
    pub fn from_lists<I, S>(lists: I) -> Self
    where
        I: IntoIterator<Item = (ListKind, Vec<S>)>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for (kind, values) in lists {
            set.insert(kind, values.into_iter().map(Into::into).collect());
        }
        set.derive_combined();
        set
    }

    /// Replace one list
    pub fn insert(&mut self, kind: ListKind, values: Vec<String>) {
        self.lists.insert(kind, values);
    }

    /// Fill the derived lists that depend on loaded ones
    pub(crate) fn derive_combined(&mut self) {
        if !self.lists.contains_key(&ListKind::AllFirstNames) {
            let mut all = self.get(ListKind::FemaleFirstNames).to_vec();
            all.extend_from_slice(self.get(ListKind::MaleFirstNames));
            self.lists.insert(ListKind::AllFirstNames, all);
        }
        self.lists.entry(ListKind::Months).or_insert_with(|| {
            MONTH_NAMES.iter().map(|m| m.to_string()).collect()
        });
    }

    /// Candidates of one list (empty slice when absent)
    pub fn get(&self, kind: ListKind) -> &[String] {
        self.lists.get(&kind).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Number of candidates in one list
    pub fn len(&self, kind: ListKind) -> usize {
        self.get(kind).len()
    }

    /// Lists that hold no candidates
    pub fn empty_lists(&self) -> Vec<ListKind> {
        ListKind::ALL
            .iter()
            .copied()
            .filter(|kind| self.get(*kind).is_empty())
            .collect()
    }

    /// Uniform pick with replacement
    ///
    /// # Errors
    ///
    /// Returns [`SurrogateError::EmptyReferenceList`] when the list holds no
    /// candidates.
    pub fn pick<R: Rng + ?Sized>(&self, kind: ListKind, rng: &mut R) -> Result<&str> {
        self.get(kind)
            .choose(rng)
            .map(|s| s.as_str())
            .ok_or(SurrogateError::EmptyReferenceList(kind))
    }
}
