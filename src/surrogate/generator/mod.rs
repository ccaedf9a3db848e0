//! Surrogate value generation
//!
//! Each category maps to one [`GenerationPolicy`]. Generation only reads the
//! reference lists and draws from the caller's random generator.

pub mod dates;

use crate::domain::Result;
use crate::surrogate::classifier::{Category, Classification};
use crate::surrogate::reference::{ListKind, ReferenceLists};
use dates::DateLayout;
use rand::seq::SliceRandom;
use rand::Rng;

/// Courtesy titles used for `Name Prefix` placeholders
pub const NAME_PREFIXES: [&str; 6] = ["Ms", "Miss", "Mrs", "Mr", "Dr", "Prof"];

/// How the surrogate of a category is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPolicy {
    /// Uniform pick from a reference list
    Pick(ListKind),
    /// Integer in `lo..=hi`
    Numeric { lo: u32, hi: u32 },
    /// Three identifiers joined with `-`
    Serial,
    /// First letter of a first name followed by first letter of a last name
    Initials,
    /// `"{first} {last}"`
    FullName,
    /// `PO BOX n`
    PoBox,
    Date(DateLayout),
    /// Trailing digits of a year
    YearDigits,
    DateRange,
    NamePrefix,
    /// Embedded literal passed through
    Literal,
    /// Always the empty string
    Empty,
}

const IDENTIFIER: GenerationPolicy = GenerationPolicy::Numeric { lo: 1, hi: 10_000 };

impl GenerationPolicy {
    pub fn for_category(category: Category) -> Self {
        use GenerationPolicy::*;

        match category {
            Category::AgeOver90 => Numeric { lo: 90, hi: 100 },
            Category::ApartmentAddress | Category::StreetAddress => Pick(ListKind::Addresses),
            Category::AttendingInfo => FullName,
            Category::CcContactInfo
            | Category::MdNumber
            | Category::PagerNumber
            | Category::ProviderNumber
            | Category::TelephoneFax
            | Category::HospitalUnitNumber => Pick(ListKind::PhoneNumbers),
            Category::ClipNumber
            | Category::DictatorInfo
            | Category::JobNumber
            | Category::MedicalRecordNumber
            | Category::NumericIdentifier
            | Category::UnitNumber => IDENTIFIER,
            Category::Company => Pick(ListKind::Companies),
            Category::Country => Pick(ListKind::Countries),
            Category::DateRange => DateRange,
            Category::DoctorFirstName
            | Category::FirstName
            | Category::KnownFirstName
            | Category::MaleFirstName => Pick(ListKind::AllFirstNames),
            Category::FemaleFirstName => Pick(ListKind::FemaleFirstNames),
            Category::DoctorLastName
            | Category::KnownLastName
            | Category::LastName
            | Category::Name => Pick(ListKind::LastNames),
            Category::Email => Pick(ListKind::Emails),
            Category::Holiday => Pick(ListKind::Holidays),
            Category::Hospital => Pick(ListKind::Hospitals),
            Category::Initials | Category::NameInitial => Initials,
            Category::Location => Pick(ListKind::Locations),
            Category::MonthOnly => Pick(ListKind::Months),
            Category::MonthDay => Date(DateLayout::DAY),
            Category::MonthSlashDay => Date(DateLayout::MONTH_SLASH_DAY),
            Category::MonthSlashYear => Date(DateLayout::MONTH_SLASH_YEAR),
            Category::MonthSlashDaySlashYear => Date(DateLayout::MONTH_SLASH_DAY_SLASH_YEAR),
            Category::YearMonthDay => Date(DateLayout::YEAR_SLASH_MONTH_SLASH_DAY),
            Category::YearMonth => Date(DateLayout::YEAR_SLASH_MONTH),
            Category::MonthDayYear => Date(DateLayout::MONTH_DAY_YEAR),
            Category::MonthYear => Date(DateLayout::MONTH_YEAR),
            Category::DayMonth => Date(DateLayout::DAY_MONTH),
            Category::DayMonthYear => Date(DateLayout::DAY_MONTH_YEAR),
            Category::SerialNumber => Serial,
            Category::SocialSecurityNumber => Pick(ListKind::Ssn),
            Category::State => Pick(ListKind::States),
            Category::YearDigits => YearDigits,
            Category::NamePrefix => NamePrefix,
            Category::PoBox => PoBox,
            Category::Zipcode => Numeric { lo: 1, hi: 99_999 },
            Category::College => Pick(ListKind::Colleges),
            Category::HospitalWardName | Category::HospitalUnitName | Category::Wardname => {
                Pick(ListKind::WardsUnits)
            }
            Category::Url => Pick(ListKind::Websites),
            Category::IsoDateLiteral
            | Category::MonthNameLiteral
            | Category::DashSlashLiteral
            | Category::SlashLiteral
            | Category::DashLiteral
            | Category::LeadingDashSlashLiteral
            | Category::TripleDashLiteral
            | Category::NumberLiteral => Literal,
            Category::Blank | Category::Fallback => Empty,
        }
    }
}

/// Produce a surrogate for a classified placeholder
///
/// # Errors
///
/// Returns [`crate::domain::SurrogateError::EmptyReferenceList`] when the
/// category samples from a list that holds no candidates.
pub fn generate<R: Rng + ?Sized>(
    classification: &Classification,
    lists: &ReferenceLists,
    rng: &mut R,
) -> Result<String> {
    let value = match GenerationPolicy::for_category(classification.category) {
        GenerationPolicy::Pick(kind) => lists.pick(kind, rng)?.to_string(),
        GenerationPolicy::Numeric { lo, hi } => rng.gen_range(lo..=hi).to_string(),
        GenerationPolicy::Serial => (0..3)
            .map(|_| rng.gen_range(1..=10_000u32).to_string())
            .collect::<Vec<_>>()
            .join("-"),
        GenerationPolicy::Initials => {
            let first = lists.pick(ListKind::AllFirstNames, rng)?;
            let last = lists.pick(ListKind::LastNames, rng)?;
            first.chars().take(1).chain(last.chars().take(1)).collect()
        }
        GenerationPolicy::FullName => {
            let first = lists.pick(ListKind::AllFirstNames, rng)?;
            let last = lists.pick(ListKind::LastNames, rng)?;
            format!("{first} {last}")
        }
        GenerationPolicy::PoBox => format!("PO BOX {}", rng.gen_range(1..=1000u32)),
        GenerationPolicy::Date(layout) => layout.sample(rng),
        GenerationPolicy::YearDigits => {
            dates::sample_year_digits(classification.digit_count.unwrap_or(4), rng)
        }
        GenerationPolicy::DateRange => dates::DateRange::sample(rng).to_string(),
        GenerationPolicy::NamePrefix => NAME_PREFIXES
            .choose(rng)
            .map(|p| p.to_string())
            .unwrap_or_default(),
        GenerationPolicy::Literal => classification.literal.clone().unwrap_or_default(),
        GenerationPolicy::Empty => String::new(),
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SurrogateError;
    use crate::surrogate::classifier::PlaceholderForm;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn lists() -> ReferenceLists {
        ReferenceLists::from_lists([
            (ListKind::FemaleFirstNames, vec!["MARY"]),
            (ListKind::MaleFirstNames, vec!["JAMES"]),
            (ListKind::LastNames, vec!["SMITH"]),
            (ListKind::Hospitals, vec!["General Hospital"]),
            (ListKind::PhoneNumbers, vec!["(555) 010-0199"]),
        ])
    }

    fn classified(category: Category) -> Classification {
        Classification {
            category,
            form: PlaceholderForm::Numbered,
            literal: None,
            digit_count: None,
        }
    }

    fn numeric(value: &str) -> u32 {
        value.parse().unwrap()
    }

    #[test]
    fn test_age_over_90_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let v = generate(&classified(Category::AgeOver90), &lists(), &mut rng).unwrap();
            assert!((90..=100).contains(&numeric(&v)));
        }
    }

    #[test]
    fn test_identifier_and_zipcode_ranges() {
        let lists = lists();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..500 {
            let id = generate(&classified(Category::MedicalRecordNumber), &lists, &mut rng).unwrap();
            assert!((1..=10_000).contains(&numeric(&id)));

            let zip = generate(&classified(Category::Zipcode), &lists, &mut rng).unwrap();
            assert!((1..=99_999).contains(&numeric(&zip)));
        }
    }

    #[test]
    fn test_serial_number_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let v = generate(&classified(Category::SerialNumber), &lists(), &mut rng).unwrap();
        let parts: Vec<&str> = v.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| (1..=10_000).contains(&numeric(p))));
    }

    #[test]
    fn test_names() {
        let lists = lists();
        let mut rng = StdRng::seed_from_u64(4);

        let attending = generate(&classified(Category::AttendingInfo), &lists, &mut rng).unwrap();
        assert!(attending == "MARY SMITH" || attending == "JAMES SMITH");

        let initials = generate(&classified(Category::NameInitial), &lists, &mut rng).unwrap();
        assert!(initials == "MS" || initials == "JS");

        let female = generate(&classified(Category::FemaleFirstName), &lists, &mut rng).unwrap();
        assert_eq!(female, "MARY");

        let last = generate(&classified(Category::Name), &lists, &mut rng).unwrap();
        assert_eq!(last, "SMITH");
    }

    #[test]
    fn test_po_box_and_prefix() {
        let mut rng = StdRng::seed_from_u64(5);
        let po = generate(&classified(Category::PoBox), &lists(), &mut rng).unwrap();
        let n = po.strip_prefix("PO BOX ").unwrap();
        assert!((1..=1000).contains(&numeric(n)));

        let prefix = generate(&classified(Category::NamePrefix), &lists(), &mut rng).unwrap();
        assert!(NAME_PREFIXES.contains(&prefix.as_str()));
    }

    #[test]
    fn test_literal_passthrough() {
        let mut rng = StdRng::seed_from_u64(6);
        let c = Classification {
            category: Category::IsoDateLiteral,
            form: PlaceholderForm::Literal,
            literal: Some("2150-3-5".to_string()),
            digit_count: None,
        };
        assert_eq!(generate(&c, &lists(), &mut rng).unwrap(), "2150-3-5");
    }

    #[test]
    fn test_blank_and_fallback_are_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            generate(&classified(Category::Blank), &lists(), &mut rng).unwrap(),
            ""
        );
        assert_eq!(
            generate(&Classification::fallback(), &lists(), &mut rng).unwrap(),
            ""
        );
    }

    #[test]
    fn test_empty_list_fails() {
        let mut rng = StdRng::seed_from_u64(8);
        let err = generate(&classified(Category::Country), &lists(), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            SurrogateError::EmptyReferenceList(ListKind::Countries)
        ));
    }

    #[test]
    fn test_month_only_uses_month_names() {
        let mut rng = StdRng::seed_from_u64(9);
        let month = generate(&classified(Category::MonthOnly), &lists(), &mut rng).unwrap();
        assert!(crate::surrogate::reference::MONTH_NAMES.contains(&month.as_str()));
    }

    #[test]
    fn test_year_digits_defaults_to_four() {
        let mut rng = StdRng::seed_from_u64(10);
        let year = generate(&classified(Category::YearDigits), &lists(), &mut rng).unwrap();
        assert_eq!(year.len(), 4);
    }
}
