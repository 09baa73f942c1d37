//! Domain data structures for weekdays, categories, and garbage types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Days of the week used to key collection schedules.
///
/// The wire form is the English day name (`"Monday"`); the canonical
/// order is Monday first with Sunday last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    /// 月曜日
    Monday,
    /// 火曜日
    Tuesday,
    /// 水曜日
    Wednesday,
    /// 木曜日
    Thursday,
    /// 金曜日
    Friday,
    /// 土曜日
    Saturday,
    /// 日曜日
    Sunday,
}

impl Weekday {
    /// All seven days in canonical Monday-first order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Position in the canonical Monday-first order (Monday = 0, Sunday = 6).
    ///
    /// Calendar APIs commonly number Sunday 0; schedule display wants it
    /// last, so Sunday maps to 6 here.
    #[must_use]
    pub fn days_from_monday(self) -> usize {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
            Weekday::Saturday => 5,
            Weekday::Sunday => 6,
        }
    }

    /// English name as used on the wire.
    #[must_use]
    pub fn name_en(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Localized Japanese label.
    #[must_use]
    pub fn name_ja(self) -> &'static str {
        match self {
            Weekday::Monday => "月曜日",
            Weekday::Tuesday => "火曜日",
            Weekday::Wednesday => "水曜日",
            Weekday::Thursday => "木曜日",
            Weekday::Friday => "金曜日",
            Weekday::Saturday => "土曜日",
            Weekday::Sunday => "日曜日",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.name_en())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
/// The given string is not one of the seven English day names.
#[error("Unknown weekday: {0}")]
pub struct ParseWeekdayError(pub String);

impl FromStr for Weekday {
    type Err = ParseWeekdayError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.name_en() == value)
            .ok_or_else(|| ParseWeekdayError(value.to_owned()))
    }
}

/// Join Japanese day labels with the middle dot, preserving input order.
#[must_use]
pub fn format_days_ja(days: &[Weekday]) -> String {
    days.iter()
        .map(|day| day.name_ja())
        .collect::<Vec<_>>()
        .join("・")
}

/// Accept the `date` field as either one weekday string or an array of them.
///
/// Older records store a single day; newer ones store an array. This is
/// the only place that coercion happens, every consumer sees `Vec<Weekday>`.
///
/// # Errors
///
/// Fails when the value is neither a weekday string nor an array of them.
pub fn deserialize_days<'de, D>(deserializer: D) -> Result<Vec<Weekday>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(Weekday),
        Many(Vec<Weekday>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(day) => vec![day],
        OneOrMany::Many(days) => days,
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A named class of garbage with its collection days and method.
pub struct GarbageCategory {
    /// Unique identifier.
    pub id: i64,
    /// Display name, e.g. 燃えるゴミ.
    pub category: String,
    /// Collection days. Serialized under `date` for wire compatibility.
    #[serde(rename = "date", deserialize_with = "deserialize_days")]
    pub days: Vec<Weekday>,
    /// How to put the garbage out.
    #[serde(default)]
    pub method: String,
    /// Exceptional collection dates outside the weekly rhythm.
    #[serde(default)]
    pub special_days: Vec<String>,
    /// Free-text notes.
    #[serde(default)]
    pub notion: String,
    /// Item names collected under this category. Empty in list views.
    #[serde(default)]
    pub garbage_types: Vec<GarbageType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A specific item name mapped to exactly one category.
pub struct GarbageType {
    /// Unique identifier.
    pub id: i64,
    /// Item name, e.g. 新聞紙.
    pub name: String,
    /// Identifier of the owning category.
    pub category_id: i64,
    /// Denormalized category name, populated only in search results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// One reverse-lookup hit: an item together with its owning category.
pub struct SearchResult {
    /// The matched item.
    pub garbage_type: GarbageType,
    /// The category it belongs to, including schedule details.
    pub category: GarbageCategory,
}
