use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Short date style used on the results page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateStyle {
    /// `7/1/2024`
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    /// `01/07/2024`
    #[serde(rename = "en-GB")]
    EnGb,
    /// `01.07.2024`
    #[serde(rename = "de-DE")]
    DeDe,
    /// `2024-07-01`
    #[serde(rename = "iso")]
    Iso,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            DateStyle::EnUs => "%-m/%-d/%Y",
            DateStyle::EnGb => "%d/%m/%Y",
            DateStyle::DeDe => "%d.%m.%Y",
            DateStyle::Iso => "%Y-%m-%d",
        }
    }

    pub fn format(self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }

    pub fn tag(self) -> &'static str {
        match self {
            DateStyle::EnUs => "en-US",
            DateStyle::EnGb => "en-GB",
            DateStyle::DeDe => "de-DE",
            DateStyle::Iso => "iso",
        }
    }
}

impl fmt::Display for DateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DateStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "en-us" => Ok(DateStyle::EnUs),
            "en-gb" => Ok(DateStyle::EnGb),
            "de-de" | "de" => Ok(DateStyle::DeDe),
            "iso" => Ok(DateStyle::Iso),
            other => Err(format!("unknown date style: {}", other)),
        }
    }
}
