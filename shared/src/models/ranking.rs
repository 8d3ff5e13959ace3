//! Ranking Model (出勤排行)

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of members highlighted on the check-in board
pub const HIGHLIGHT_SLOTS: usize = 7;

/// Ranking window - 统计的日期范围
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankingWindow {
    /// 全部
    #[default]
    #[serde(rename = "all")]
    All,
    /// 最近 7 天
    #[serde(rename = "7days")]
    Last7Days,
    /// 最近 30 天
    #[serde(rename = "30days")]
    Last30Days,
}

impl RankingWindow {
    /// Wire name of the window
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Last7Days => "7days",
            Self::Last30Days => "30days",
        }
    }

    /// Inclusive lower bound relative to `today`; `None` counts every record.
    pub fn lower_bound(&self, today: NaiveDate) -> Option<NaiveDate> {
        let days = match self {
            Self::All => return None,
            Self::Last7Days => 7,
            Self::Last30Days => 30,
        };
        today.checked_sub_days(Days::new(days))
    }
}

impl fmt::Display for RankingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankingWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "7days" => Ok(Self::Last7Days),
            "30days" => Ok(Self::Last30Days),
            other => Err(format!("unknown ranking window: {other}")),
        }
    }
}

/// One ranked member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// 1-based rank
    pub rank: usize,
    pub member_id: i64,
    pub name: String,
    pub count: usize,
}

/// Ranking result for a window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingResponse {
    pub window: RankingWindow,
    /// Inclusive lower bound (YYYY-MM-DD), absent for `all`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    pub entries: Vec<RankingEntry>,
}

/// Highlight slot of a top member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightEntry {
    pub member_id: i64,
    /// 0-based position in the all-time top list
    pub slot: u8,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn lower_bound_per_window() {
        let today = date("2024-03-10");
        assert_eq!(RankingWindow::All.lower_bound(today), None);
        assert_eq!(
            RankingWindow::Last7Days.lower_bound(today),
            Some(date("2024-03-03"))
        );
        assert_eq!(
            RankingWindow::Last30Days.lower_bound(today),
            Some(date("2024-02-09"))
        );
    }

    #[test]
    fn wire_names() {
        assert_eq!("7days".parse::<RankingWindow>(), Ok(RankingWindow::Last7Days));
        assert!("week".parse::<RankingWindow>().is_err());
        assert_eq!(
            serde_json::to_string(&RankingWindow::Last30Days).unwrap(),
            "\"30days\""
        );
        let w: RankingWindow = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(w, RankingWindow::All);
    }
}
