//! Cart summary
//!
//! Renders the cart and its quote as a text table.

use std::io;

use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::CartState,
    pricing::{Pricing, Quote},
};

/// Errors rendering a summary.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Writing to the output failed.
    #[error("failed to write summary: {0}")]
    Io(#[from] io::Error),
}

/// The cart lines with their priced breakdown.
#[derive(Debug, Clone, Copy)]
pub struct CartSummary<'a> {
    cart: &'a CartState,
    quote: Quote,
    currency: &'static Currency,
}

impl<'a> CartSummary<'a> {
    /// Price `cart` under `pricing`.
    pub fn new(cart: &'a CartState, pricing: &Pricing) -> Self {
        Self {
            cart,
            quote: pricing.quote(cart.total_amount()),
            currency: pricing.currency(),
        }
    }

    /// The breakdown shown under the table
    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    /// Write the table and totals.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::Io`] if `out` cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["Item", "Qty", "Price", "Amount"]);

        for item in self.cart.items() {
            builder.push_record([
                item.name.clone(),
                item.quantity.to_string(),
                self.money(item.price),
                self.money(item.line_total()),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..), Alignment::right());
        table.modify(Rows::first(), Alignment::center());

        writeln!(out, "{table}")?;

        let lines = [
            ("Subtotal", self.money(self.quote.subtotal)),
            ("Delivery Fee", self.money(self.quote.delivery_fee)),
            ("Tax", self.money(self.quote.tax)),
            ("Total", self.money(self.quote.total)),
        ];

        let label_width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        let value_width = lines.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

        for (label, value) in lines {
            writeln!(out, "{label:>label_width$}  {value:>value_width$}")?;
        }

        Ok(())
    }

    fn money(&self, amount: rust_decimal::Decimal) -> String {
        Money::from_decimal(amount, self.currency).to_string()
    }
}
