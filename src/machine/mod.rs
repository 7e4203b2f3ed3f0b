use crate::types::{event::Event, Coin, Product, ProductName};

pub mod error;
pub mod inventory;
pub mod state;

use error::Error;
use inventory::Inventory;
use state::State;

/// The vending machine context: sole owner of credit and inventory.
///
/// Every external operation is dispatched through the active [`State`], and
/// state behavior touches credit/inventory only through this type's accounting
/// methods. The only operation that transitions out of
/// [`State::TransactionStarted`] is a successful dispense; every failure leaves
/// the active state unchanged.
#[derive(Debug, Clone)]
pub struct Machine {
    credit: u32,
    inventory: Inventory,
    state: State,
}

impl Machine {
    /// Construct a machine over a seeded inventory snapshot, in the initial
    /// ready state with no credit.
    pub fn new(inventory: Inventory) -> Self {
        Self {
            credit: 0,
            inventory,
            state: State::default(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Credit accumulated since the last successful dispense or reset.
    pub fn credit(&self) -> u32 {
        self.credit
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }

    pub fn has_stock_of(&self, name: &ProductName) -> bool {
        self.inventory.has_stock_of(name)
    }

    /// Machine-wide: true iff every product's count is zero.
    pub fn is_out_of_stock(&self) -> bool {
        self.inventory.is_exhausted()
    }

    /// Apply one driver event, dispatching to the named operation. A dispensed
    /// product is returned so drivers can report it.
    pub fn apply(&mut self, event: Event) -> Result<Option<Product>, Error> {
        match event {
            Event::InsertCoin(coin) => {
                self.insert_coin(&coin)?;
                Ok(None)
            }
            Event::SelectProduct(name) => self.select_product(&name).map(Some),
        }
    }

    pub fn insert_coin(&mut self, coin: &Coin) -> Result<(), Error> {
        match self.state {
            State::InitialReady => {
                self.add_credit(coin.value);
                self.transition_to(State::TransactionStarted);
                Ok(())
            }
            // Self-loop: credit accumulates, no transition.
            State::TransactionStarted => {
                self.add_credit(coin.value);
                Ok(())
            }
            State::OutOfStock => Err(Error::MachineOutOfStock),
        }
    }

    pub fn select_product(&mut self, name: &ProductName) -> Result<Product, Error> {
        match self.state {
            State::InitialReady => Err(Error::NoCredit),
            State::TransactionStarted => {
                // Failures propagate to the caller with no transition.
                let product = self.dispense(name)?;
                if self.is_out_of_stock() {
                    self.transition_to(State::OutOfStock);
                } else {
                    self.transition_to(State::InitialReady);
                }
                Ok(product)
            }
            State::OutOfStock => Err(Error::MachineOutOfStock),
        }
    }

    fn add_credit(&mut self, amount: u32) {
        self.credit = self.credit.saturating_add(amount);
    }

    fn reset_credit(&mut self) {
        self.credit = 0;
    }

    /// Exchange the accumulated credit for one unit of the named product.
    ///
    /// An exact match succeeds: the credit check is `credit < price`, not
    /// `credit <= price`. Overpayment is consumed, not returned.
    fn dispense(&mut self, name: &ProductName) -> Result<Product, Error> {
        // Selection is by name, so a product with no entry has no price to
        // compare against and fails the stock check immediately.
        let price = self
            .inventory
            .price_of(name)
            .ok_or_else(|| Error::OutOfStock { name: name.clone() })?;
        if self.credit < price {
            return Err(Error::InsufficientCredit {
                name: name.clone(),
                price,
                credit: self.credit,
            });
        }
        let product = self
            .inventory
            .take_one(name)
            .ok_or_else(|| Error::OutOfStock { name: name.clone() })?;
        self.reset_credit();
        Ok(product)
    }

    fn transition_to(&mut self, next: State) {
        log::debug!("state transition: {} -> {}", self.state.name(), next.name());
        self.state = next;
    }
}
