//! Custom actions for the Product actor.
//!
//! Stock never changes through `update`; every change goes through one of these
//! actions, alone or inside an atomic batch.

/// Custom actions for Product entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Adds stock (purchase receiving, customer returns, finished production).
    Receive(u32),
    /// Removes stock.
    ///
    /// # Errors
    /// Fails with `InsufficientStock` if the amount exceeds the stock on hand.
    Consume(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductActionResult {
    /// Current stock level.
    CheckStock(u32),
    /// Stock level after receiving.
    Receive(u32),
    /// Stock level after consuming.
    Consume(u32),
}

impl ProductActionResult {
    /// Stock level reported by any variant.
    pub fn level(self) -> u32 {
        match self {
            ProductActionResult::CheckStock(level)
            | ProductActionResult::Receive(level)
            | ProductActionResult::Consume(level) => level,
        }
    }
}
