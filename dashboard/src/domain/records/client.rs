//! Client records.

use serde::Serialize;
use uuid::Uuid;

use super::super::{Email, ScaledDecimal};

/// A client company with positions to fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Unique record identity.
    pub id: Uuid,
    /// Company name.
    pub client_name: String,
    /// Single point of contact.
    pub spoc: Option<String>,
    /// Contact email address.
    pub contact_email: Option<Email>,
    /// Average revenue per unit, two fractional digits.
    pub arpu: Option<ScaledDecimal>,
    /// Position the client is hiring for.
    pub position: Option<String>,
    /// Count of unfilled positions.
    pub number_of_positions: Option<u32>,
    /// Free-text notes.
    pub additional_information: Option<String>,
}

impl Client {
    /// Whether the client still has unfilled positions.
    ///
    /// # Examples
    /// ```
    /// use dashboard::domain::Client;
    /// use uuid::Uuid;
    ///
    /// let client = Client {
    ///     id: Uuid::nil(),
    ///     client_name: "Acme".to_owned(),
    ///     spoc: None,
    ///     contact_email: None,
    ///     arpu: None,
    ///     position: None,
    ///     number_of_positions: Some(3),
    ///     additional_information: None,
    /// };
    /// assert!(client.has_open_positions());
    /// ```
    pub fn has_open_positions(&self) -> bool {
        self.number_of_positions.is_some_and(|count| count > 0)
    }
}
