// 👤 BankClient Entity - Identity record of a bank customer
//
// A client is alive until a death date is recorded.
// The client ID is checked once here and never again.

use serde::Serialize;

use crate::entities::date::Date;
use crate::entities::name::Name;
use crate::error::Result;
use crate::validation::validate_identifier;

pub const MIN_CLIENT_ID_LENGTH: usize = 6;
pub const MAX_CLIENT_ID_LENGTH: usize = 7;

const ALIVE_STATUS: &str = "alive";
const DECEASED_STATUS: &str = "not alive";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankClient {
    name: Name,
    birth_date: Date,
    death_date: Option<Date>,
    signup_date: Date,
    client_id: String,
}

impl BankClient {
    pub fn new(
        name: Name,
        birth_date: Date,
        death_date: Option<Date>,
        signup_date: Date,
        client_id: impl Into<String>,
    ) -> Result<Self> {
        let client_id = client_id.into();
        validate_identifier(
            &client_id,
            "Client ID",
            MIN_CLIENT_ID_LENGTH,
            MAX_CLIENT_ID_LENGTH,
        )?;

        Ok(BankClient {
            name,
            birth_date,
            death_date,
            signup_date,
            client_id,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn birth_date(&self) -> Date {
        self.birth_date
    }

    pub fn death_date(&self) -> Option<Date> {
        self.death_date
    }

    pub fn signup_date(&self) -> Date {
        self.signup_date
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn is_alive(&self) -> bool {
        self.death_date.is_none()
    }

    /// One-line summary of the client
    ///
    /// Example: "Albert Einstein client #abc123 (not alive) joined the bank on monday, january 1,1900"
    ///
    /// Day and year are joined without a space; consumers match on this exact text.
    pub fn details(&self) -> String {
        let status = if self.is_alive() {
            ALIVE_STATUS
        } else {
            DECEASED_STATUS
        };

        format!(
            "{} client #{} ({}) joined the bank on {}, {} {},{}",
            self.name.full_name(),
            self.client_id,
            status,
            self.signup_date.day_of_the_week().to_lowercase(),
            self.signup_date.month_name().to_lowercase(),
            self.signup_date.day(),
            self.signup_date.year()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn einstein() -> BankClient {
        BankClient::new(
            Name::new("Albert", "Einstein").unwrap(),
            Date::new(1879, 3, 14).unwrap(),
            Some(Date::new(1955, 4, 18).unwrap()),
            Date::new(1900, 1, 1).unwrap(),
            "abc123",
        )
        .unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = einstein();
        assert_eq!(client.client_id(), "abc123");
        assert_eq!(client.name().full_name(), "Albert Einstein");
        assert_eq!(client.birth_date(), Date::new(1879, 3, 14).unwrap());
        assert_eq!(client.signup_date(), Date::new(1900, 1, 1).unwrap());
        assert!(!client.is_alive());
    }

    #[test]
    fn test_details_deceased() {
        assert_eq!(
            einstein().details(),
            "Albert Einstein client #abc123 (not alive) joined the bank on monday, january 1,1900"
        );
    }

    #[test]
    fn test_details_alive() {
        let client = BankClient::new(
            Name::new("Jackie", "Chan").unwrap(),
            Date::new(1954, 4, 7).unwrap(),
            None,
            Date::new(1980, 10, 1).unwrap(),
            "chan789",
        )
        .unwrap();

        assert!(client.is_alive());
        assert_eq!(client.death_date(), None);
        assert_eq!(
            client.details(),
            "Jackie Chan client #chan789 (alive) joined the bank on wednesday, october 1,1980"
        );
    }

    #[test]
    fn test_client_id_length() {
        let make = |id: &str| {
            BankClient::new(
                Name::new("Nelson", "Mandela").unwrap(),
                Date::new(1918, 7, 18).unwrap(),
                None,
                Date::new(1994, 5, 10).unwrap(),
                id,
            )
        };

        assert!(make("12345").is_err());
        assert!(make("123456").is_ok());
        assert!(make("1234567").is_ok());
        assert!(make("12345678").is_err());

        let err = make("1234").unwrap_err();
        assert_eq!(err.message(), "Client ID must be 6 or 7 characters");
    }

    #[test]
    fn test_client_id_blank() {
        let err = BankClient::new(
            Name::new("Nelson", "Mandela").unwrap(),
            Date::new(1918, 7, 18).unwrap(),
            None,
            Date::new(1994, 5, 10).unwrap(),
            "       ",
        )
        .unwrap_err();
        assert_eq!(err.message(), "Client ID cannot be null or blank");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(einstein()).unwrap();
        assert_eq!(json["client_id"], "abc123");
        assert_eq!(json["name"]["last_name"], "Einstein");
        assert_eq!(json["death_date"]["year"], 1955);
    }
}
