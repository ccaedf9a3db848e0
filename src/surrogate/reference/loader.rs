//! Reference list loading from the lists directory
//!
//! Every file listed in [`LIST_SOURCES`] must be present; a missing file
//! aborts the run before any document is touched.

use super::{ListKind, ReferenceLists};
use crate::domain::{Result, SurrogateError};
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::OnceLock;

/// How a list file is laid out on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    /// One value per line
    Plain,
    /// 1990 US census layout: `NAME  freq  cumfreq  rank`
    Census,
    /// One value per line, deduplicated and sorted
    SortedUnique,
}

/// A list and the file it is read from, relative to the lists directory
#[derive(Debug, Clone, Copy)]
pub struct ListSource {
    pub kind: ListKind,
    pub relative_path: &'static str,
    pub format: ListFormat,
}

/// Files read from the lists directory
pub const LIST_SOURCES: [ListSource; 16] = [
    ListSource {
        kind: ListKind::Addresses,
        relative_path: "www.randomlists.com/addresses_random.lst",
        format: ListFormat::Plain,
    },
    ListSource {
        kind: ListKind::LastNames,
        relative_path: "1990_US_CENSUS/dist.all.last",
        format: ListFormat::Census,
    },
    ListSource {
        kind: ListKind::MaleFirstNames,
        relative_path: "1990_US_CENSUS/dist.male.first",
        format: ListFormat::Census,
    },
    ListSource {
        kind: ListKind::FemaleFirstNames,
        relative_path: "1990_US_CENSUS/dist.female.first",
        format: ListFormat::Census,
    },
    ListSource {
        kind: ListKind::PhoneNumbers,
        relative_path: "generatedata.com/phone_numbers_random.lst",
        format: ListFormat::Plain,
    },
    ListSource {
        kind: ListKind::Companies,
        relative_path: "generatedata.com/companies_random.lst",
        format: ListFormat::Plain,
    },
    ListSource {
        kind: ListKind::Countries,
        relative_path: "www.countries-list.info/countries.lst",
        format: ListFormat::Plain,
    },
    ListSource {
        kind: ListKind::Emails,
        relative_path: "generatedata.com/emails_random.lst",
        format: ListFormat::Plain,
    },
    ListSource {
        kind: ListKind::Holidays,
        relative_path: "misc/holidays.lst",
        format: ListFormat::SortedUnique,
    },
    ListSource {
        kind: ListKind::Hospitals,
        relative_path: "data.medicare.gov/hospitals.lst",
        format: ListFormat::Plain,
    },
    ListSource {
        kind: ListKind::Locations,
        relative_path: "generatedata.com/locations_random.lst",
        format: ListFormat::Plain,
    },
    ListSource {
        kind: ListKind::Ssn,
        relative_path: "generatedata.com/social_security_numbers_random.lst",
        format: ListFormat::Plain,
    },
    ListSource {
        kind: ListKind::States,
        relative_path: "misc/US_states.lst",
        format: ListFormat::Plain,
    },
    ListSource {
        kind: ListKind::Colleges,
        relative_path: "talk.collegeconfidential.com/colleges.lst",
        format: ListFormat::Plain,
    },
    ListSource {
        kind: ListKind::WardsUnits,
        relative_path: "misc/hospital_wards_units.lst",
        format: ListFormat::Plain,
    },
    ListSource {
        kind: ListKind::Websites,
        relative_path: "generatedata.com/websites_random.lst",
        format: ListFormat::Plain,
    },
];

/// Number of entries shown when a loaded list is logged
const PREVIEW_LEN: usize = 3;

fn census_line() -> Result<&'static Regex> {
    static CENSUS_LINE: OnceLock<Regex> = OnceLock::new();
    if let Some(re) = CENSUS_LINE.get() {
        return Ok(re);
    }
    let re = Regex::new(r"^(.*?)\s+\d+\.\d+\s+\d+\.\d+\s+\d+\s*$")?;
    Ok(CENSUS_LINE.get_or_init(|| re))
}

/// Load every reference list from `lists_dir`
///
/// # Errors
///
/// Returns [`SurrogateError::ReferenceData`] if the directory or any list file
/// is missing or unreadable.
pub fn load_reference_lists(lists_dir: impl AsRef<Path>) -> Result<ReferenceLists> {
    let lists_dir = lists_dir.as_ref();

    if !lists_dir.is_dir() {
        return Err(SurrogateError::ReferenceData(format!(
            "Lists directory not found: {}",
            lists_dir.display()
        )));
    }

    let mut lists = ReferenceLists::new();

    for source in LIST_SOURCES.iter() {
        let path = lists_dir.join(source.relative_path);
        let content = std::fs::read_to_string(&path).map_err(|e| {
            SurrogateError::ReferenceData(format!(
                "Failed to read {} list from {}: {}",
                source.kind,
                path.display(),
                e
            ))
        })?;

        let values = parse_list(&content, source.format)?;
        log_loaded(source.kind, &values);
        lists.insert(source.kind, values);
    }

    lists.derive_combined();
    log_loaded(
        ListKind::AllFirstNames,
        lists.get(ListKind::AllFirstNames),
    );

    let empty = lists.empty_lists();
    if !empty.is_empty() {
        tracing::warn!(
            lists = ?empty.iter().map(|k| k.name()).collect::<Vec<_>>(),
            "Some reference lists are empty; placeholders that need them will fail their document"
        );
    }

    Ok(lists)
}

/// Parse list content according to its on-disk format
pub fn parse_list(content: &str, format: ListFormat) -> Result<Vec<String>> {
    match format {
        ListFormat::Plain => Ok(parse_plain(content)),
        ListFormat::Census => parse_census(content),
        ListFormat::SortedUnique => Ok(parse_plain(content)
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()),
    }
}

fn parse_plain(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_census(content: &str) -> Result<Vec<String>> {
    let re = census_line()?;
    Ok(content
        .lines()
        .filter_map(|line| re.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
        .collect())
}

fn log_loaded(kind: ListKind, values: &[String]) {
    let preview: Vec<&str> = values.iter().take(PREVIEW_LEN).map(String::as_str).collect();
    tracing::info!(
        list = %kind,
        count = values.len(),
        first = ?preview,
        "Loaded reference list"
    );
}
