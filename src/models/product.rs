// src/models/product.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The catalog's sole entity: a flat product record.
///
/// Every field is optional. `id` stays `None` until the first successful save,
/// at which point storage assigns it; the other four fields carry no constraint
/// at all (empty strings, zero, and negative values are all legal). Unset fields
/// serialize as JSON `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
  pub id: Option<i64>,
  pub name: Option<String>,
  pub description: Option<String>,
  pub price: Option<f64>,
  pub quantity: Option<i32>,
}

impl Product {
  /// A fresh, entirely unset product. Identical to `Product::default()`,
  /// kept as a named constructor for readability at call sites.
  pub fn new() -> Self {
    Self::default()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_product_has_every_field_unset() {
    let p = Product::new();
    assert_eq!(p.id, None);
    assert_eq!(p.name, None);
    assert_eq!(p.description, None);
    assert_eq!(p.price, None);
    assert_eq!(p.quantity, None);
  }

  #[test]
  fn fields_hold_exactly_what_was_set() {
    let mut p = Product::new();
    p.name = Some("Laptop".to_string());
    p.description = Some(String::new()); // empty string is a value, not absence
    p.price = Some(-0.01);
    p.quantity = Some(-5);

    assert_eq!(p.name.as_deref(), Some("Laptop"));
    assert_eq!(p.description.as_deref(), Some(""));
    assert_eq!(p.price, Some(-0.01));
    assert_eq!(p.quantity, Some(-5));

    // Setting a field back to absent is always allowed.
    p.name = None;
    assert_eq!(p.name, None);
  }

  #[test]
  fn fields_hold_extreme_numeric_bounds() {
    let mut p = Product::new();
    p.id = Some(i64::MAX);
    p.price = Some(f64::MAX);
    p.quantity = Some(i32::MIN);

    assert_eq!(p.id, Some(i64::MAX));
    assert_eq!(p.price, Some(f64::MAX));
    assert_eq!(p.quantity, Some(i32::MIN));
  }

  #[test]
  fn unset_fields_serialize_as_null() {
    let mut p = Product::new();
    p.name = Some("Mouse".to_string());
    p.price = Some(0.0);

    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["id"], serde_json::Value::Null);
    assert_eq!(json["name"], "Mouse");
    assert_eq!(json["description"], serde_json::Value::Null);
    assert_eq!(json["price"], 0.0);
    assert_eq!(json["quantity"], serde_json::Value::Null);
  }
}
