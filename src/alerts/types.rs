use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::format::format_relative;
use crate::models::{parse_labeled, ParseLabelError};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Match,
    Message,
    Sale,
    Offer,
    Warning,
    System,
}

impl AlertKind {
    pub const ALL: [AlertKind; 6] = [
        AlertKind::Match,
        AlertKind::Message,
        AlertKind::Sale,
        AlertKind::Offer,
        AlertKind::Warning,
        AlertKind::System,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AlertKind::Match => "match",
            AlertKind::Message => "message",
            AlertKind::Sale => "sale",
            AlertKind::Offer => "offer",
            AlertKind::Warning => "warning",
            AlertKind::System => "system",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AlertKind {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_labeled("alert kind", s, &AlertKind::ALL, |k| [k.key(), k.key(), k.key()])
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    #[default]
    Unread,
    Read,
    Archived,
}

/// Extra context attached to an alert
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlertData {
    pub listing_id: Option<String>,
    pub user_id: Option<String>,
    pub amount: Option<u64>,
    /// 0-100
    pub match_score: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alert {
    pub id: String,
    pub kind: AlertKind,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub status: AlertStatus,
    #[serde(default)]
    pub data: Option<AlertData>,
}

impl Alert {
    pub fn new(
        id: impl Into<String>,
        kind: AlertKind,
        title: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            description: String::new(),
            timestamp,
            status: AlertStatus::Unread,
            data: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: AlertStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_data(mut self, data: Option<AlertData>) -> Self {
        self.data = data;
        self
    }

    /// "5m ago" style age relative to `now`
    pub fn age(&self, now: DateTime<Utc>) -> String {
        format_relative(self.timestamp, now)
    }
}
