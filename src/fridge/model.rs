use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date pattern used for every date that goes in or out of the store.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Section {
    Freezer,
    Meat,
    Cooling,
    Crisper,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Freezer,
        Section::Meat,
        Section::Cooling,
        Section::Crisper,
    ];

    /// Canonical name, as written to the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Freezer => "FREEZER",
            Section::Meat => "MEAT",
            Section::Cooling => "COOLING",
            Section::Crisper => "CRISPER",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown section `{}` (expected one of FREEZER, MEAT, COOLING, CRISPER)",
            self.0
        )
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == upper)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// A catalogue entry. Items are only ever created by seeding the store.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub can_expire: bool,
}

impl Item {
    pub fn new(name: impl Into<String>, can_expire: bool) -> Self {
        Self {
            name: name.into(),
            can_expire,
        }
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Grocery {
    pub id: i64,
    pub item: Item,
    pub purchase_date: NaiveDate,
    pub quantity: i64,
    pub section: Section,
}

impl Grocery {
    pub fn item_name(&self) -> &str {
        &self.item.name
    }

    pub fn days_ago(&self, today: NaiveDate) -> i64 {
        days_between(self.purchase_date, today)
    }

    pub fn days_ago_label(&self, today: NaiveDate) -> String {
        days_ago_label(self.days_ago(today))
    }
}

impl PartialEq for Grocery {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// A grocery row as it sits in the store: the item is only a name reference
/// and has not been resolved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroceryRecord {
    pub id: i64,
    pub item_name: String,
    pub purchase_date: NaiveDate,
    pub quantity: i64,
    pub section: Section,
}

impl GroceryRecord {
    pub fn resolve(self, item: Item) -> Grocery {
        Grocery {
            id: self.id,
            item,
            purchase_date: self.purchase_date,
            quantity: self.quantity,
            section: self.section,
        }
    }
}

/// Everything needed to insert a grocery; the id comes from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGrocery {
    pub item_name: String,
    pub purchase_date: NaiveDate,
    pub quantity: i64,
    pub section: Section,
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
}

/// Whole calendar days between two dates, never negative.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days().abs()
}

pub fn days_ago_label(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        n => format!("{} days ago", n),
    }
}
