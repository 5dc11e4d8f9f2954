//! Dashboard alert inbox.

mod types;

pub use types::{Alert, AlertData, AlertKind, AlertStatus};

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::error::{MarketError, Result};

#[derive(Debug, Clone, Default)]
pub struct AlertInbox {
    alerts: Vec<Alert>,
}

impl AlertInbox {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self { alerts }
    }

    /// Inbox pre-filled with sample activity, dated relative to `now`
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let minutes = |m: i64| now - Duration::minutes(m);
        let data = |listing: Option<&str>, user: Option<&str>, amount: Option<u64>, score: Option<u8>| {
            Some(AlertData {
                listing_id: listing.map(str::to_string),
                user_id: user.map(str::to_string),
                amount,
                match_score: score,
            })
        };

        Self::new(vec![
            Alert::new("1", AlertKind::Match, "🎯 Pair Match Found!", minutes(30))
                .with_description("Sarah Johnson has the matching Right AirPod Pro for your Left AirPod Pro listing")
                .with_data(data(Some("123"), Some("user_456"), None, Some(95))),
            Alert::new("2", AlertKind::Offer, "💰 New Offer Received", minutes(120))
                .with_description("Michael Chen offered ₦22,000 for your Wooden Dining Table (10% below asking)")
                .with_data(data(Some("456"), Some("user_789"), Some(22_000), None)),
            Alert::new("3", AlertKind::Message, "💬 New Message", minutes(180))
                .with_description("Amara Okeke: \"Can we trade for my silver bracelet?\"")
                .with_status(AlertStatus::Read)
                .with_data(data(Some("789"), Some("user_012"), None, None)),
            Alert::new("4", AlertKind::Sale, "✅ Item Sold!", minutes(360))
                .with_description("Your Vintage Camera Lens has been sold to David Smith for ₦35,000")
                .with_status(AlertStatus::Read)
                .with_data(data(Some("012"), Some("user_345"), Some(35_000), None)),
            Alert::new("5", AlertKind::Warning, "⚠️ Listing Expiring Soon", minutes(720))
                .with_description("Your \"Single Gold Earring\" listing will expire in 2 days. Renew to keep it active.")
                .with_status(AlertStatus::Read)
                .with_data(data(Some("345"), None, None, None)),
            Alert::new("6", AlertKind::System, "📢 New Feature: Smart Matching", minutes(1440))
                .with_description("Smart matching to find pairs for your items is coming soon.")
                .with_status(AlertStatus::Read),
        ])
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn unread_count(&self) -> usize {
        self.alerts
            .iter()
            .filter(|alert| alert.status == AlertStatus::Unread)
            .count()
    }

    /// Alerts of one kind, or all of them when `kind` is `None`
    pub fn filtered(&self, kind: Option<AlertKind>) -> Vec<&Alert> {
        self.alerts
            .iter()
            .filter(|alert| kind.map_or(true, |k| alert.kind == k))
            .collect()
    }

    pub fn mark_read(&mut self, id: &str) -> Result<()> {
        self.find_mut(id)?.status = AlertStatus::Read;
        Ok(())
    }

    pub fn mark_all_read(&mut self) {
        for alert in &mut self.alerts {
            alert.status = AlertStatus::Read;
        }
        debug!(count = self.alerts.len(), "Marked all alerts read");
    }

    pub fn archive(&mut self, id: &str) -> Result<()> {
        self.find_mut(id)?.status = AlertStatus::Archived;
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> Result<Alert> {
        let index = self
            .alerts
            .iter()
            .position(|alert| alert.id == id)
            .ok_or_else(|| MarketError::AlertNotFound(id.to_string()))?;
        Ok(self.alerts.remove(index))
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Alert> {
        self.alerts
            .iter_mut()
            .find(|alert| alert.id == id)
            .ok_or_else(|| MarketError::AlertNotFound(id.to_string()))
    }
}
