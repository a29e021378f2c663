//! Equipment model

use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Equipment inventory record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Equipment type (free text, e.g. "Laptop", "Smart kartica")
    #[serde(rename = "type")]
    pub equipment_type: String,
    #[serde(default)]
    pub serial_number: String,
    /// Number of units, never negative
    #[serde(default)]
    pub quantity: i64,
    /// Unit price, never negative
    #[serde(default)]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

/// Create equipment request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipment {
    #[serde(rename = "type")]
    #[validate(
        required(message = "Equipment type is required"),
        length(min = 1, message = "Equipment type must not be empty")
    )]
    pub equipment_type: Option<String>,
    pub serial_number: Option<String>,
    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    pub quantity: Option<i64>,
    #[validate(
        range(min = 0.0, message = "Price must not be negative"),
        custom(function = "validate_price")
    )]
    pub price: Option<f64>,
}

impl CreateEquipment {
    /// Build the record to insert, filling in defaults for omitted fields.
    pub fn into_record(self, now: DateTime) -> Equipment {
        Equipment {
            id: None,
            equipment_type: self.equipment_type.unwrap_or_default(),
            serial_number: self.serial_number.unwrap_or_default(),
            quantity: self.quantity.unwrap_or(0),
            price: self.price.unwrap_or(0.0),
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

/// Update equipment request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEquipment {
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Equipment type must not be empty"))]
    pub equipment_type: Option<String>,
    pub serial_number: Option<String>,
    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    pub quantity: Option<i64>,
    #[validate(
        range(min = 0.0, message = "Price must not be negative"),
        custom(function = "validate_price")
    )]
    pub price: Option<f64>,
}

impl UpdateEquipment {
    /// `$set` body touching only the supplied fields plus `updatedAt`.
    pub fn to_set_document(&self, now: DateTime) -> Document {
        let mut set = doc! { "updatedAt": now };

        macro_rules! set_field {
            ($field:expr, $name:expr) => {
                if let Some(ref value) = $field {
                    set.insert($name, value.clone());
                }
            };
        }

        set_field!(self.equipment_type, "type");
        set_field!(self.serial_number, "serialNumber");
        set_field!(self.quantity, "quantity");
        set_field!(self.price, "price");

        set
    }
}

/// `range` lets NaN through, so finiteness is checked separately
fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() {
        let mut error = ValidationError::new("price");
        error.message = Some("Price must be a finite number".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_omitted_fields() {
        let data: CreateEquipment = serde_json::from_str(r#"{"type": "Laptop"}"#).unwrap();
        assert!(data.validate().is_ok());

        let now = DateTime::now();
        let record = data.into_record(now);

        assert_eq!(record.equipment_type, "Laptop");
        assert_eq!(record.serial_number, "");
        assert_eq!(record.quantity, 0);
        assert_eq!(record.price, 0.0);
        assert_eq!(record.created_at, Some(now));
        assert_eq!(record.updated_at, Some(now));
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let data = CreateEquipment {
            equipment_type: Some("Monitor".to_string()),
            quantity: Some(-1),
            ..Default::default()
        };
        let errors = data.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quantity"));
    }

    #[test]
    fn test_negative_price_rejected() {
        let data = CreateEquipment {
            equipment_type: Some("Monitor".to_string()),
            price: Some(-0.01),
            ..Default::default()
        };
        let errors = data.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn test_non_finite_price_rejected() {
        for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let data = CreateEquipment {
                equipment_type: Some("Monitor".to_string()),
                price: Some(price),
                ..Default::default()
            };
            let errors = data.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("price"), "{} accepted", price);

            let update = UpdateEquipment {
                price: Some(price),
                ..Default::default()
            };
            assert!(update.validate().is_err(), "{} accepted on update", price);
        }
    }

    #[test]
    fn test_missing_type_rejected() {
        let data: CreateEquipment =
            serde_json::from_str(r#"{"serialNumber": "SN-1", "quantity": 2}"#).unwrap();
        let errors = data.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("equipment_type"));
    }

    #[test]
    fn test_empty_type_rejected() {
        let data = CreateEquipment {
            equipment_type: Some(String::new()),
            ..Default::default()
        };
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_zero_values_accepted() {
        let data = CreateEquipment {
            equipment_type: Some("Cable".to_string()),
            quantity: Some(0),
            price: Some(0.0),
            ..Default::default()
        };
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_stored_field_names() {
        let record = CreateEquipment {
            equipment_type: Some("Router".to_string()),
            serial_number: Some("RT-100".to_string()),
            quantity: Some(3),
            price: Some(49.9),
        }
        .into_record(DateTime::now());

        let document = mongodb::bson::to_document(&record).unwrap();
        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("type").unwrap(), "Router");
        assert_eq!(document.get_str("serialNumber").unwrap(), "RT-100");
        assert_eq!(document.get_i64("quantity").unwrap(), 3);
        assert!(document.contains_key("createdAt"));
        assert!(document.contains_key("updatedAt"));
    }

    #[test]
    fn test_update_sets_only_supplied_fields() {
        let now = DateTime::now();
        let data = UpdateEquipment {
            quantity: Some(7),
            ..Default::default()
        };

        let set = data.to_set_document(now);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get_i64("quantity").unwrap(), 7);
        assert_eq!(set.get_datetime("updatedAt").unwrap(), &now);
    }

    #[test]
    fn test_update_rejects_negative_price() {
        let data = UpdateEquipment {
            price: Some(-5.0),
            ..Default::default()
        };
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_update_rejects_empty_type() {
        let data = UpdateEquipment {
            equipment_type: Some(String::new()),
            ..Default::default()
        };
        let errors = data.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("equipment_type"));
    }
}
