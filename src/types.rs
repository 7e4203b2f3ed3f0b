pub mod event {
    use crate::types::{Coin, ProductName};

    /// One external stimulus applied to a machine.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Event {
        InsertCoin(Coin),
        SelectProduct(ProductName),
    }
}

/// Inventory key. Products are selected by name, at most one entry per name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductName(pub String);

impl From<&str> for ProductName {
    fn from(other: &str) -> Self {
        Self(other.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coin {
    pub name: String,
    // Value in the smallest currency unit. Positive, validated at the input
    // boundary.
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: ProductName,
    // Price in the smallest currency unit. Positive, validated at the input
    // boundary.
    pub value: u32,
}
