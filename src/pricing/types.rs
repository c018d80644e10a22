use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A priced catalog item as returned by the price-list endpoint.
///
/// Every field is kept as the text the back office sent; prices are never
/// parsed. Fields are private so a `Product` can only come from decoding a
/// response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "Codigo", default, deserialize_with = "lenient_string")]
    code: String,
    #[serde(rename = "Nombre", default, deserialize_with = "lenient_string")]
    name: String,
    #[serde(rename = "PrecioVenta", default, deserialize_with = "lenient_string")]
    sell_price: String,
    #[serde(rename = "RutaFoto1", default, deserialize_with = "lenient_string")]
    photo_path_1: String,
    #[serde(rename = "RutaFoto2", default, deserialize_with = "lenient_string")]
    photo_path_2: String,
    #[serde(rename = "RutaFoto3", default, deserialize_with = "lenient_string")]
    photo_path_3: String,
    #[serde(rename = "PrecioXMayor", default, deserialize_with = "lenient_string")]
    wholesale_price: String,
    #[serde(rename = "CantidadXMayor", default, deserialize_with = "lenient_string")]
    wholesale_min_qty: String,
}

impl Product {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_price(&self) -> &str {
        &self.sell_price
    }

    pub fn wholesale_price(&self) -> &str {
        &self.wholesale_price
    }

    pub fn wholesale_min_qty(&self) -> &str {
        &self.wholesale_min_qty
    }

    /// True when the product carries a bulk price and its minimum quantity.
    pub fn has_wholesale(&self) -> bool {
        let blank = |value: &str| value.trim().is_empty() || value.trim() == "0";
        !blank(&self.wholesale_price) && !blank(&self.wholesale_min_qty)
    }
}

/// Accepts strings, numbers, booleans and null; the back office is not
/// consistent about quoting numeric columns.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a scalar value, found {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_endpoint_field_names() {
        let product: Product = serde_json::from_value(json!({
            "Codigo": "7801234567890",
            "Nombre": "Leche 1L",
            "PrecioVenta": "1200",
            "RutaFoto1": "fotos/leche.jpg",
            "RutaFoto2": "",
            "RutaFoto3": "",
            "PrecioXMayor": "1100",
            "CantidadXMayor": "12"
        }))
        .unwrap();

        assert_eq!(product.code(), "7801234567890");
        assert_eq!(product.name(), "Leche 1L");
        assert_eq!(product.sell_price(), "1200");
        let echoed = serde_json::to_value(&product).unwrap();
        assert_eq!(echoed["RutaFoto1"], "fotos/leche.jpg");
        assert_eq!(echoed["CantidadXMayor"], "12");
        assert!(product.has_wholesale());
    }

    #[test]
    fn numbers_and_nulls_become_text() {
        let product: Product = serde_json::from_value(json!({
            "Codigo": 7801234567890u64,
            "Nombre": "Pan",
            "PrecioVenta": 990,
            "RutaFoto1": null,
            "PrecioXMayor": null
        }))
        .unwrap();

        assert_eq!(product.code(), "7801234567890");
        assert_eq!(product.sell_price(), "990");
        assert_eq!(serde_json::to_value(&product).unwrap()["RutaFoto1"], "");
        assert_eq!(product.wholesale_min_qty(), "");
        assert!(!product.has_wholesale());
    }

    #[test]
    fn nested_values_are_rejected() {
        let result: Result<Product, _> =
            serde_json::from_value(json!({ "Codigo": "1", "Nombre": { "es": "Pan" } }));
        assert!(result.is_err());
    }

    #[test]
    fn zero_wholesale_quantity_is_not_a_bulk_price() {
        let product: Product = serde_json::from_value(json!({
            "Codigo": "1",
            "PrecioXMayor": "900",
            "CantidadXMayor": "0"
        }))
        .unwrap();
        assert!(!product.has_wholesale());
    }
}
