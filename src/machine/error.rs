use crate::types::ProductName;

use thiserror::Error;

/// Everything here is caller-recoverable: the machine never catches or retries,
/// and the active state is unchanged on any failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no credit: insert a coin before selecting a product")]
    NoCredit,
    #[error("insufficient credit: {name:?} costs {price}, credit is {credit}")]
    InsufficientCredit {
        name: ProductName,
        price: u32,
        credit: u32,
    },
    #[error("out of stock: {name:?}")]
    OutOfStock { name: ProductName },
    #[error("machine is out of stock")]
    MachineOutOfStock,
}
