use crate::machine::inventory::Entry;
use crate::types::{event::Event, Coin, Product, ProductName};
use serde::{Deserialize, Serialize};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("bad row kind: {kind}")]
    BadRowKind { kind: String },
    #[error("missing value for {kind} row")]
    MissingValue { kind: String },
    #[error("invalid value {value} for {kind} row")]
    InvalidValue { kind: String, value: i64 },
    #[error("missing count for stock row")]
    MissingCount,
    #[error("invalid count {count} for stock row")]
    InvalidCount { count: i64 },
}

#[derive(Debug, Deserialize)]
pub struct InputRow {
    // type is a rust keyword, so rename here (better than r#... everywhere)
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub value: Option<i64>,
    pub count: Option<i64>,
}

/// A validated scenario row: either seeds the inventory or drives the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Stock { product: Product, count: u32 },
    Event(Event),
}

impl TryFrom<InputRow> for Row {
    type Error = Error;
    fn try_from(other: InputRow) -> Result<Self, Error> {
        let InputRow {
            kind,
            name,
            value,
            count,
        } = other;
        match kind.as_str() {
            "stock" => {
                let value = positive_value(&kind, value)?;
                let count = count.ok_or(Error::MissingCount)?;
                if !(0..=i64::from(u32::MAX)).contains(&count) {
                    return Err(Error::InvalidCount { count });
                }
                Ok(Self::Stock {
                    product: Product {
                        name: ProductName(name),
                        value,
                    },
                    count: count as u32,
                })
            }
            "coin" => {
                let value = positive_value(&kind, value)?;
                Ok(Self::Event(Event::InsertCoin(Coin { name, value })))
            }
            "select" => Ok(Self::Event(Event::SelectProduct(ProductName(name)))),
            _ => Err(Error::BadRowKind { kind }),
        }
    }
}

// Coin values and product prices must be positive integers.
fn positive_value(kind: &str, value: Option<i64>) -> Result<u32, Error> {
    let value = value.ok_or_else(|| Error::MissingValue {
        kind: kind.to_owned(),
    })?;
    if !(1..=i64::from(u32::MAX)).contains(&value) {
        return Err(Error::InvalidValue {
            kind: kind.to_owned(),
            value,
        });
    }
    Ok(value as u32)
}

#[derive(Debug, Serialize)]
pub struct OutputRow {
    pub product: String,
    pub price: u32,
    pub remaining: u32,
}

impl From<&Entry> for OutputRow {
    fn from(other: &Entry) -> Self {
        Self {
            product: other.product.name.0.clone(),
            price: other.product.value,
            remaining: other.count,
        }
    }
}
