//! Shared fixtures for integration tests

#![allow(dead_code)]

use phi_surrogates::config::PhiSurrogatesConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Reference list files and their contents, in the on-disk layout
pub const LIST_FILES: &[(&str, &str)] = &[
    (
        "www.randomlists.com/addresses_random.lst",
        "12 Oak Street\n480 Pine Avenue\n\n77 Elm Road   \n",
    ),
    (
        "1990_US_CENSUS/dist.all.last",
        "SMITH          1.006  1.006      1\nJOHNSON        0.810  1.816      2\nWILLIAMS       0.699  2.515      3\n",
    ),
    (
        "1990_US_CENSUS/dist.male.first",
        "JAMES          3.318  3.318      1\nJOHN           3.271  6.589      2\n",
    ),
    (
        "1990_US_CENSUS/dist.female.first",
        "MARY           2.629  2.629      1\nPATRICIA       1.073  3.702      2\n",
    ),
    (
        "generatedata.com/phone_numbers_random.lst",
        "(555) 010-2000\n(555) 010-3000\n",
    ),
    ("generatedata.com/companies_random.lst", "Acme Corp\nGlobex\n"),
    ("www.countries-list.info/countries.lst", "Canada\nPeru\n"),
    (
        "generatedata.com/emails_random.lst",
        "a.person@example.com\nb.person@example.org\n",
    ),
    ("misc/holidays.lst", "Thanksgiving\nEaster\nThanksgiving\n"),
    (
        "data.medicare.gov/hospitals.lst",
        "Mercy General\nCounty Medical Center\nRiverside Hospital\nSt. Luke Clinic\n",
    ),
    (
        "generatedata.com/locations_random.lst",
        "Springfield\nLakeview\n",
    ),
    (
        "generatedata.com/social_security_numbers_random.lst",
        "900-12-3456\n900-65-4321\n",
    ),
    ("misc/US_states.lst", "Ohio\nVermont\n"),
    (
        "talk.collegeconfidential.com/colleges.lst",
        "Hill College\nValley University\n",
    ),
    ("misc/hospital_wards_units.lst", "Cardiology\nWard 4B\n"),
    (
        "generatedata.com/websites_random.lst",
        "http://example.com\nhttp://example.org\n",
    ),
];

/// Write every reference list under `dir`
pub fn write_reference_lists(dir: &Path) {
    for (relative, content) in LIST_FILES {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

/// Write `documents` (relative path, bytes) under `dir`
pub fn write_corpus(dir: &Path, documents: &[(&str, &[u8])]) {
    for (relative, content) in documents {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

/// Layout of one test run inside a temporary directory
pub struct Workspace {
    pub lists: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Workspace {
    pub fn new(root: &Path) -> Self {
        let workspace = Self {
            lists: root.join("lists"),
            input: root.join("corpus"),
            output: root.join("corpus-surrogates"),
        };
        write_reference_lists(&workspace.lists);
        fs::create_dir_all(&workspace.input).unwrap();
        workspace
    }

    pub fn config(&self) -> PhiSurrogatesConfig {
        let mut config = PhiSurrogatesConfig::default();
        config.reference.lists_dir = self.lists.clone();
        config.replace.input_dir = Some(self.input.clone());
        config.replace.output_dir = Some(self.output.clone());
        config.replace.workers = 3;
        config.replace.progress_interval = 2;
        config
    }
}

/// Hospital names in the fixture list
pub fn hospitals() -> Vec<&'static str> {
    vec![
        "Mercy General",
        "County Medical Center",
        "Riverside Hospital",
        "St. Luke Clinic",
    ]
}
