use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// A `Reminder` is a one-time notification scheduled for delivery at
/// `remind_at` through the channel given by `method`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    /// The instant at which the reminder is due, in millis since the epoch.
    /// Composed from a calendar date and a wall-clock time, see `crate::date`
    pub remind_at: i64,
    pub message: String,
    pub method: ReminderMethod,
    pub contact_info: String,
    /// Owned by the delivery worker after creation, see `ReminderStatus`
    pub status: ReminderStatus,
    pub created: i64,
    /// Incremented by the storage layer on every successful save. A save
    /// presenting a stale version is rejected
    pub version: i64,
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// The channel a `Reminder` is delivered through. Decides which shape the
/// contact info of the reminder must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReminderMethod {
    #[serde(rename = "SMS")]
    Sms,
    Email,
}

impl Display for ReminderMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sms => write!(f, "SMS"),
            Self::Email => write!(f, "Email"),
        }
    }
}

impl FromStr for ReminderMethod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "SMS" => Ok(Self::Sms),
            "Email" => Ok(Self::Email),
            _ => Err(anyhow::Error::msg(s.to_string())),
        }
    }
}

/// Delivery state of a `Reminder`.
///
/// Every reminder starts out `Pending`. The delivery worker owns the
/// transition to one of the two terminal states and records it through
/// the reminder repository, nothing else moves a reminder out of `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderStatus {
    Pending,
    Sent,
    Failed,
}

impl ReminderStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl Display for ReminderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Sent => write!(f, "sent"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

impl FromStr for ReminderStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "pending" => Ok(Self::Pending),
            "sent" => Ok(Self::Sent),
            "failed" => Ok(Self::Failed),
            _ => Err(anyhow::Error::msg(s.to_string())),
        }
    }
}
