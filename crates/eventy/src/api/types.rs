//! Wire types for the Eventy platform API.
//!
//! The server is loose about some field shapes: `location` arrives either as
//! an object with an `address` or as a bare string, and `price` as a number
//! or a string. The deserializers here absorb both.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub data: LoginData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Error envelope the API uses for non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventsResponse {
    pub events: Vec<EventSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FavoritesResponse {
    pub data: Vec<EventSummary>,
}

/// Response body of a successful create. Only logged; success is decided by
/// the HTTP status.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventResponse {
    #[serde(default)]
    pub event: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: String,
    #[serde(default = "default_price", deserialize_with = "price_as_string")]
    pub price: String,
    #[serde(default, deserialize_with = "location_address")]
    pub location: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl EventSummary {
    /// True when attending requires no payment.
    pub fn is_free(&self) -> bool {
        matches!(self.price.trim().parse::<f64>(), Ok(v) if v == 0.0)
    }
}

fn default_price() -> String {
    "0".to_string()
}

fn price_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => default_price(),
    })
}

fn location_address<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Object(map) => map
            .get("address")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_parses() {
        let body = r#"{
            "data": {
                "accessToken": "abc123",
                "user": {"_id": "u1", "name": "Nour", "email": "nour@example.com", "role": "user"}
            }
        }"#;
        let parsed: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.access_token, "abc123");
        assert_eq!(parsed.data.user.id, "u1");
        assert_eq!(parsed.data.user.name.as_deref(), Some("Nour"));
    }

    #[test]
    fn test_error_body_tolerates_missing_message() {
        let parsed: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(parsed.message.is_none());
        let parsed: ErrorBody =
            serde_json::from_str(r#"{"message": "Event name already used"}"#).unwrap();
        assert_eq!(parsed.message.as_deref(), Some("Event name already used"));
    }

    #[test]
    fn test_event_location_as_object_or_string() {
        let body = r#"{"events": [
            {"_id": "e1", "name": "A", "location": {"address": "Cairo", "latitude": 30.0, "longitude": 31.2}},
            {"_id": "e2", "name": "B", "location": "Alexandria"},
            {"_id": "e3", "name": "C"}
        ]}"#;
        let parsed: EventsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.events[0].location.as_deref(), Some("Cairo"));
        assert_eq!(parsed.events[1].location.as_deref(), Some("Alexandria"));
        assert_eq!(parsed.events[2].location, None);
    }

    #[test]
    fn test_event_price_as_number_or_string() {
        let body = r#"{"data": [
            {"_id": "e1", "name": "A", "price": 0},
            {"_id": "e2", "name": "B", "price": "250"},
            {"_id": "e3", "name": "C", "price": 99.5}
        ]}"#;
        let parsed: FavoritesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data[0].price, "0");
        assert!(parsed.data[0].is_free());
        assert_eq!(parsed.data[1].price, "250");
        assert!(!parsed.data[1].is_free());
        assert_eq!(parsed.data[2].price, "99.5");
    }

    #[test]
    fn test_create_response_event_optional() {
        let parsed: CreateEventResponse =
            serde_json::from_str(r#"{"event": {"_id": "e9", "name": "New"}}"#).unwrap();
        assert!(parsed.event.is_some());
        let parsed: CreateEventResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.event.is_none());
    }
}
