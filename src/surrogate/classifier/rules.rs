//! Ordered placeholder rule registry
//!
//! Rules are evaluated in table order and the first match wins. Every rule is
//! anchored at the start of the span. Labelled categories expand into a
//! numbered recognizer (`[**Label 12**]`) followed by a bare one
//! (`[**Label **]`). Joined labels carry their own separator, so the suffix
//! follows the label directly (`[**Street Address11**]`,
//! `[**Street Address(2) 11**]`).

use super::{Category, Classification, PlaceholderClassifier, PlaceholderForm};
use crate::domain::Result;
use regex::{Captures, Regex, RegexSet};

/// How parameters are pulled out of a matched span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extractor {
    None,
    /// Named group `literal` is passed through as is
    Literal,
    /// Groups `a` and `b` joined as `a/b`
    JoinSlash,
    /// Groups `a` and `b` joined as `a-b`
    JoinDash,
    /// Named group `digits` holds a digit count
    DigitCount,
}

#[derive(Debug, Clone, Copy)]
enum RuleSpec {
    /// Category label, expanded into numbered and bare forms
    Labelled(Category, &'static str, Extractor),
    /// Label that ends with its own separator, expanded the same way
    Joined(Category, &'static str),
    /// Full pattern carrying a literal
    Literal(Category, &'static str, Extractor),
    /// Full pattern resolving to nothing
    Blank(&'static str),
}

const fn labelled(category: Category, label: &'static str) -> RuleSpec {
    RuleSpec::Labelled(category, label, Extractor::None)
}

const fn joined(category: Category, label: &'static str) -> RuleSpec {
    RuleSpec::Joined(category, label)
}

/// Evaluation order of every recognizer
const RULE_TABLE: &[RuleSpec] = &[
    labelled(Category::AgeOver90, r"Age over 90"),
    joined(Category::ApartmentAddress, r"Apartment Address\(\d+\) "),
    labelled(Category::AttendingInfo, r"Attending Info"),
    labelled(Category::CcContactInfo, r"CC Contact Info"),
    labelled(Category::ClipNumber, r"Clip Number \(Radiology\)"),
    labelled(Category::Company, r"Company"),
    labelled(Category::Country, r"Country"),
    labelled(Category::DateRange, r"Date [rR]ange(?: \(\d+\))?"),
    labelled(Category::DictatorInfo, r"Dictator Info"),
    labelled(Category::DoctorFirstName, r"Doctor First Name"),
    labelled(Category::DoctorLastName, r"Doctor Last Name(?: \(ambig\))?"),
    labelled(Category::Email, r"E-mail address"),
    labelled(Category::FemaleFirstName, r"Female First Name \([^\[]+\)"),
    labelled(Category::FirstName, r"First Name\d*(?: \([^\[]+\))?"),
    labelled(Category::Holiday, r"Holiday"),
    labelled(Category::Hospital, r"Hospital\d*"),
    labelled(Category::Initials, r"Initials? \(NamePattern\d+\)"),
    labelled(Category::JobNumber, r"Job Number"),
    labelled(Category::KnownFirstName, r"Known firstname"),
    labelled(Category::KnownLastName, r"Known lastname"),
    labelled(Category::LastName, r"Last Name(?: [^\[]+)?"),
    labelled(Category::Location, r"Location(?: [^\[]+)?"),
    joined(Category::MdNumber, r"MD Number(?:\(\d+\) )?"),
    labelled(Category::MaleFirstName, r"Male First Name(?: \([^\[]+\))?"),
    labelled(
        Category::MedicalRecordNumber,
        r"Medical Record Number(?: \([^\[]+\))?",
    ),
    labelled(Category::MonthOnly, r"Month \(only\)"),
    labelled(Category::MonthDay, r"Month Day"),
    labelled(Category::MonthSlashDay, r"Month/Day(?: \(?\d+\)?)?"),
    labelled(Category::MonthSlashYear, r"Month/Year(?: \(?\d+\)?)?"),
    labelled(Category::MonthSlashDaySlashYear, r"Month/Day/Year"),
    labelled(Category::Name, r"Name\d*(?: \([^\[]+\))?"),
    labelled(Category::NameInitial, r"Name Initial(?: \([^\[]*\))?"),
    labelled(Category::NumericIdentifier, r"Numeric Identifier"),
    labelled(Category::PagerNumber, r"Pager number"),
    labelled(Category::ProviderNumber, r"Provider Number"),
    labelled(Category::SerialNumber, r"Serial Number"),
    labelled(Category::SocialSecurityNumber, r"Social Security Number"),
    labelled(Category::State, r"State"),
    joined(Category::StreetAddress, r"Street Address(?:\(\d+\) )?"),
    labelled(Category::TelephoneFax, r"Telephone/Fax(?: \(\d+\))?"),
    labelled(Category::UnitNumber, r"Unit Number"),
    RuleSpec::Literal(
        Category::IsoDateLiteral,
        r"^\[\*\*(?P<literal>\d{4}-\d{1,2}-\d{1,2})\*\*\]",
        Extractor::Literal,
    ),
    RuleSpec::Labelled(
        Category::YearDigits,
        r"Year \((?P<digits>\d+)\)? digits\)",
        Extractor::DigitCount,
    ),
    labelled(Category::YearMonthDay, r"Year/Month/Day"),
    RuleSpec::Literal(
        Category::MonthNameLiteral,
        r"^\[\*\*(?P<literal>(?:January|February|March|April|May|June|July|August|September|October|November|December) \d+)\*\*\]",
        Extractor::Literal,
    ),
    labelled(Category::NamePrefix, r"Name Prefix \(Prefixes\)"),
    labelled(Category::PoBox, r"PO Box"),
    labelled(Category::YearMonth, r"Year/Month"),
    labelled(Category::MonthDayYear, r"Month Day Year(?: \(\d+\))?"),
    labelled(Category::MonthYear, r"Month Year"),
    labelled(Category::DayMonth, r"Day Month"),
    labelled(Category::DayMonthYear, r"Day Month Year(?: \(\d+\))?"),
    labelled(Category::Zipcode, r"State/Zipcode"),
    labelled(Category::HospitalUnitNumber, r"Hospital Unit Number"),
    labelled(Category::College, r"University/College"),
    labelled(Category::HospitalWardName, r"Hospital Ward Name"),
    labelled(Category::HospitalUnitName, r"Hospital Unit Name"),
    labelled(Category::Wardname, r"Wardname"),
    labelled(Category::Url, r"URL"),
    RuleSpec::Blank(r"^\[\*\* \d+\*\*\]"),
    RuleSpec::Blank(r"^\[\*\*\s\*\*\]"),
    RuleSpec::Literal(
        Category::DashSlashLiteral,
        r"^\[\*\*(?P<a>\d+)-/(?P<b>\d+)\*\*\]",
        Extractor::JoinSlash,
    ),
    RuleSpec::Literal(
        Category::SlashLiteral,
        r"^\[\*\*(?P<a>\d+)/(?P<b>\d+)\*\*\]",
        Extractor::JoinSlash,
    ),
    RuleSpec::Literal(
        Category::DashLiteral,
        r"^\[\*\*(?P<a>\d+)-(?P<b>\d+)\*\*\]",
        Extractor::JoinDash,
    ),
    RuleSpec::Literal(
        Category::LeadingDashSlashLiteral,
        r"^\[\*\*-(?P<a>\d+)/(?P<b>\d+)\*\*\]",
        Extractor::JoinSlash,
    ),
    RuleSpec::Literal(
        Category::TripleDashLiteral,
        r"^\[\*\*(?P<literal>\d+-\d+-\d+)\*\*\]",
        Extractor::Literal,
    ),
    RuleSpec::Literal(
        Category::NumberLiteral,
        r"^\[\*\*(?P<literal>\d+)\*\*\]",
        Extractor::Literal,
    ),
];

/// One compiled recognizer
#[derive(Debug, Clone)]
pub struct Rule {
    pub category: Category,
    pub form: PlaceholderForm,
    regex: Regex,
    extractor: Extractor,
}

impl Rule {
    fn extract(&self, caps: &Captures<'_>) -> Classification {
        let group = |name: &str| caps.name(name).map(|m| m.as_str());

        let (literal, digit_count) = match self.extractor {
            Extractor::None => (None, None),
            Extractor::Literal => (group("literal").map(str::to_string), None),
            Extractor::JoinSlash => (
                group("a").zip(group("b")).map(|(a, b)| format!("{a}/{b}")),
                None,
            ),
            Extractor::JoinDash => (
                group("a").zip(group("b")).map(|(a, b)| format!("{a}-{b}")),
                None,
            ),
            Extractor::DigitCount => (None, group("digits").and_then(|d| d.parse().ok())),
        };

        Classification {
            category: self.category,
            form: self.form,
            literal,
            digit_count,
        }
    }
}

/// Ordered, compiled rule cascade
///
/// A [`RegexSet`] over every recognizer finds the lowest-index match in one
/// pass; that rule's own regex then extracts parameters.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
    set: RegexSet,
}

impl RuleRegistry {
    /// Compile the built-in rule table
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::SurrogateError::Pattern`] if a recognizer fails
    /// to compile.
    pub fn builtin() -> Result<Self> {
        let mut rules = Vec::with_capacity(RULE_TABLE.len() * 2);

        for spec in RULE_TABLE {
            match *spec {
                RuleSpec::Labelled(category, label, extractor) => {
                    rules.push(Rule {
                        category,
                        form: PlaceholderForm::Numbered,
                        regex: Regex::new(&format!(r"^\[\*\*{label} \d+\*\*\]"))?,
                        extractor,
                    });
                    rules.push(Rule {
                        category,
                        form: PlaceholderForm::Bare,
                        regex: Regex::new(&format!(r"^\[\*\*{label} \*\*\]"))?,
                        extractor,
                    });
                }
                RuleSpec::Joined(category, label) => {
                    rules.push(Rule {
                        category,
                        form: PlaceholderForm::Numbered,
                        regex: Regex::new(&format!(r"^\[\*\*{label}\d+\*\*\]"))?,
                        extractor: Extractor::None,
                    });
                    rules.push(Rule {
                        category,
                        form: PlaceholderForm::Bare,
                        regex: Regex::new(&format!(r"^\[\*\*{label}\*\*\]"))?,
                        extractor: Extractor::None,
                    });
                }
                RuleSpec::Literal(category, pattern, extractor) => rules.push(Rule {
                    category,
                    form: PlaceholderForm::Literal,
                    regex: Regex::new(pattern)?,
                    extractor,
                }),
                RuleSpec::Blank(pattern) => rules.push(Rule {
                    category: Category::Blank,
                    form: PlaceholderForm::Blank,
                    regex: Regex::new(pattern)?,
                    extractor: Extractor::None,
                }),
            }
        }

        let set = RegexSet::new(rules.iter().map(|r| r.regex.as_str()))?;

        tracing::debug!(rules = rules.len(), "Compiled placeholder rule registry");

        Ok(Self { rules, set })
    }

    /// All compiled recognizers in evaluation order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// First rule matching `raw`, if any
    pub fn first_match(&self, raw: &str) -> Option<&Rule> {
        self.set
            .matches(raw)
            .iter()
            .next()
            .map(|idx| &self.rules[idx])
    }
}

impl PlaceholderClassifier for RuleRegistry {
    fn classify(&self, raw: &str) -> Classification {
        self.first_match(raw)
            .and_then(|rule| rule.regex.captures(raw).map(|caps| rule.extract(&caps)))
            .unwrap_or_else(Classification::fallback)
    }
}
