use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Price as sent by the backend
#[derive(Debug, Clone, PartialEq)]
pub enum Price {
    /// Numeric price, shown with two decimals
    Number(f64),
    /// Anything else the backend put in the field, shown verbatim
    Raw(String),
}

impl Price {
    /// Build a price from a JSON value. `null` means no price.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Number(n) => Some(match n.as_f64() {
                Some(amount) => Price::Number(amount),
                None => Price::Raw(n.to_string()),
            }),
            Value::String(s) => Some(Price::Raw(s)),
            other => Some(Price::Raw(other.to_string())),
        }
    }

    /// Amount text without currency symbol
    pub fn display(&self) -> String {
        match self {
            Price::Number(amount) => format!("{:.2}", amount),
            Price::Raw(raw) => raw.clone(),
        }
    }
}

/// One catalog entry. Every field is optional; the backend is not trusted
/// to send a complete record, and fields with an unexpected JSON type are
/// treated as missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Product {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub image_url: Option<String>,
}

impl Product {
    /// Decode one element of the catalog array. Never fails: a non-object
    /// element yields a product with no fields.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut fields) = value else {
            return Self::default();
        };

        Self {
            title: take_string(&mut fields, "title"),
            description: take_string(&mut fields, "description"),
            price: fields.remove("price").and_then(Price::from_value),
            image_url: take_string(&mut fields, "image_url"),
        }
    }

    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Image to show, `None` when the card should fall back to the placeholder
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Price label as rendered on the card, e.g. `$9.50`
    pub fn price_label(&self) -> String {
        let amount = self.price.as_ref().map(Price::display).unwrap_or_default();
        format!("${}", amount)
    }
}

impl<'de> Deserialize<'de> for Product {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Product::from_value)
    }
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}
