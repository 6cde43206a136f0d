//! Wire models shared with the backend API.

mod auth;
mod envelope;
mod order;
mod user;

pub use auth::{LoginRequest, LoginResponse};
pub use envelope::{ListEnvelope, OrderEnvelope};
pub use order::{Order, OrderItem, OrderStatus};
pub use user::User;

use serde::{Deserialize, Deserializer};

/// Helper to deserialize id as either string or integer
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// Helper to deserialize a monetary amount sent either as a JSON number or
/// as a decimal string (`"12.50"`).
pub(crate) fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(value) => Ok(value),
        Amount::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid amount: {:?}", text))),
    }
}

/// Helper to deserialize a display-only string where `null` means empty.
pub(crate) fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Helper to deserialize a quantity sent either as a JSON integer or as a
/// string (`"3"`).
pub(crate) fn deserialize_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Quantity {
        Number(u32),
        Text(String),
    }

    match Quantity::deserialize(deserializer)? {
        Quantity::Number(value) => Ok(value),
        Quantity::Text(text) => text
            .trim()
            .parse::<u32>()
            .map_err(|_| serde::de::Error::custom(format!("invalid quantity: {:?}", text))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct TextHolder {
        #[serde(default, deserialize_with = "deserialize_text")]
        text: String,
    }

    #[derive(Deserialize)]
    struct QuantityHolder {
        #[serde(deserialize_with = "deserialize_quantity")]
        quantity: u32,
    }

    #[derive(Deserialize)]
    struct IdHolder {
        #[serde(deserialize_with = "deserialize_id")]
        id: String,
    }

    #[derive(Deserialize)]
    struct AmountHolder {
        #[serde(deserialize_with = "deserialize_amount")]
        amount: f64,
    }

    #[test]
    fn test_deserialize_id_accepts_string_and_integer() {
        let s: IdHolder = serde_json::from_str(r#"{"id": "ord-1"}"#).unwrap();
        assert_eq!(s.id, "ord-1");

        let n: IdHolder = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(n.id, "42");
    }

    #[test]
    fn test_deserialize_id_rejects_objects() {
        let result: Result<IdHolder, _> = serde_json::from_str(r#"{"id": {"x": 1}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_amount_number_and_string() {
        let n: AmountHolder = serde_json::from_str(r#"{"amount": 12.5}"#).unwrap();
        assert_eq!(n.amount, 12.5);

        let s: AmountHolder = serde_json::from_str(r#"{"amount": " 19.99 "}"#).unwrap();
        assert_eq!(s.amount, 19.99);
    }

    #[test]
    fn test_deserialize_amount_rejects_garbage() {
        let result: Result<AmountHolder, _> = serde_json::from_str(r#"{"amount": "abc"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_text_null_missing_and_value() {
        let null: TextHolder = serde_json::from_str(r#"{"text": null}"#).unwrap();
        assert_eq!(null.text, "");

        let missing: TextHolder = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.text, "");

        let value: TextHolder = serde_json::from_str(r#"{"text": "BLT-M8"}"#).unwrap();
        assert_eq!(value.text, "BLT-M8");
    }

    #[test]
    fn test_deserialize_quantity_number_and_string() {
        let n: QuantityHolder = serde_json::from_str(r#"{"quantity": 3}"#).unwrap();
        assert_eq!(n.quantity, 3);

        let s: QuantityHolder = serde_json::from_str(r#"{"quantity": " 2 "}"#).unwrap();
        assert_eq!(s.quantity, 2);
    }

    #[test]
    fn test_deserialize_quantity_rejects_negative_and_garbage() {
        for body in [r#"{"quantity": -1}"#, r#"{"quantity": "two"}"#, r#"{"quantity": 1.5}"#] {
            let result: Result<QuantityHolder, _> = serde_json::from_str(body);
            assert!(result.is_err(), "{}", body);
        }
    }
}
