//! Demographic record: personally significant dates keyed by field.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Named category of a personally significant date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DemographicField {
    DobSelf,
    DobSpouse,
    Anniversary,
    ChildDob,
    PetDob,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown demographic field: {0}")]
pub struct UnknownFieldError(pub String);

impl DemographicField {
    /// Every recognized field, in declaration order.
    pub const ALL: [DemographicField; 5] = [
        DemographicField::DobSelf,
        DemographicField::DobSpouse,
        DemographicField::Anniversary,
        DemographicField::ChildDob,
        DemographicField::PetDob,
    ];

    /// Key used in input mappings, e.g. `dob_self`.
    pub fn key(&self) -> &'static str {
        match self {
            DemographicField::DobSelf => "dob_self",
            DemographicField::DobSpouse => "dob_spouse",
            DemographicField::Anniversary => "anniversary",
            DemographicField::ChildDob => "child_dob",
            DemographicField::PetDob => "pet_dob",
        }
    }

    pub fn reason_tag(&self) -> &'static str {
        match self {
            DemographicField::DobSelf => "DEMOGRAPHIC_DOB_SELF",
            DemographicField::DobSpouse => "DEMOGRAPHIC_DOB_SPOUSE",
            DemographicField::Anniversary => "DEMOGRAPHIC_ANNIVERSARY",
            DemographicField::ChildDob => "DEMOGRAPHIC_CHILD_DOB",
            DemographicField::PetDob => "DEMOGRAPHIC_PET_DOB",
        }
    }
}

impl fmt::Display for DemographicField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DemographicField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DemographicField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

/// Optional `YYYY-MM-DD` date per demographic field.
///
/// Values are stored as given; parsing happens during evaluation so that a
/// malformed date only silences its own field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(from = "HashMap<String, Option<String>>")
)]
pub struct Demographics {
    dates: BTreeMap<DemographicField, String>,
}

impl Demographics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Demographics::set`].
    pub fn with(mut self, field: DemographicField, date: impl Into<String>) -> Self {
        self.set(field, Some(date.into()));
        self
    }

    /// Sets or clears the date for `field`. Empty strings clear it.
    pub fn set(&mut self, field: DemographicField, date: Option<String>) {
        match date.filter(|d| !d.is_empty()) {
            Some(date) => {
                self.dates.insert(field, date);
            }
            None => {
                self.dates.remove(&field);
            }
        }
    }

    /// Sets a date by its mapping key.
    ///
    /// Returns `false` and leaves the record untouched when the key is not a
    /// recognized field.
    pub fn insert_key(&mut self, key: &str, date: Option<&str>) -> bool {
        match key.parse::<DemographicField>() {
            Ok(field) => {
                self.set(field, date.map(str::to_string));
                true
            }
            Err(_) => false,
        }
    }

    pub fn date(&self, field: DemographicField) -> Option<&str> {
        self.dates.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, Option<&'a str>)> for Demographics {
    fn from_iter<I: IntoIterator<Item = (&'a str, Option<&'a str>)>>(iter: I) -> Self {
        let mut demographics = Demographics::new();
        for (key, date) in iter {
            demographics.insert_key(key, date);
        }
        demographics
    }
}

impl From<HashMap<String, Option<String>>> for Demographics {
    fn from(map: HashMap<String, Option<String>>) -> Self {
        map.iter()
            .map(|(key, date)| (key.as_str(), date.as_deref()))
            .collect()
    }
}
