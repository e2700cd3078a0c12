//! Pricing
//!
//! One function turns a cart subtotal into the full breakdown. The cart summary
//! and the order payload both call [`Pricing::quote`], so what the customer sees
//! is what they are charged.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Flat delivery fee charged on every order, in whole currency units.
pub const DEFAULT_DELIVERY_FEE: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Tax rate applied to the subtotal (5%).
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Errors building a [`Pricing`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Currency code is not an ISO 4217 code known to `rusty_money`.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Delivery fee below zero.
    #[error("delivery fee must not be negative: {0}")]
    NegativeDeliveryFee(Decimal),

    /// Tax rate outside `0..=1`.
    #[error("tax rate must be between 0 and 1: {0}")]
    TaxRateOutOfRange(Decimal),
}

/// Delivery fee, tax rate and display currency.
#[derive(Debug, Clone, Copy)]
pub struct Pricing {
    delivery_fee: Decimal,
    tax_rate: Decimal,
    currency: &'static Currency,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            delivery_fee: DEFAULT_DELIVERY_FEE,
            tax_rate: DEFAULT_TAX_RATE,
            currency: iso::INR,
        }
    }
}

impl Pricing {
    /// Create a pricing policy.
    ///
    /// `tax_rate` is a fraction, so `0.05` means 5%.
    ///
    /// # Errors
    ///
    /// - [`PricingError::NegativeDeliveryFee`]: the fee is below zero.
    /// - [`PricingError::TaxRateOutOfRange`]: the rate is not within `0..=1`.
    pub fn new(
        delivery_fee: Decimal,
        tax_rate: Decimal,
        currency: &'static Currency,
    ) -> Result<Self, PricingError> {
        if delivery_fee < Decimal::ZERO {
            return Err(PricingError::NegativeDeliveryFee(delivery_fee));
        }

        if tax_rate < Decimal::ZERO || tax_rate > Decimal::ONE {
            return Err(PricingError::TaxRateOutOfRange(tax_rate));
        }

        Ok(Self {
            delivery_fee,
            tax_rate,
            currency,
        })
    }

    /// Look up a currency by its ISO 4217 code.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::UnknownCurrency`] for unrecognised codes.
    pub fn currency_from_code(code: &str) -> Result<&'static Currency, PricingError> {
        iso::find(&code.to_ascii_uppercase())
            .ok_or_else(|| PricingError::UnknownCurrency(code.to_string()))
    }

    /// Flat delivery fee
    pub fn delivery_fee(&self) -> Decimal {
        self.delivery_fee
    }

    /// Tax rate as a percentage
    pub fn tax_rate(&self) -> Percentage {
        Percentage::from(self.tax_rate)
    }

    /// Display currency
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Tax on `subtotal`, rounded half-up to whole currency units.
    pub fn tax_on(&self, subtotal: Decimal) -> Decimal {
        (self.tax_rate() * subtotal)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Price a subtotal.
    ///
    /// The delivery fee applies even to an empty subtotal; checkout refuses
    /// empty carts before a quote is ever submitted.
    pub fn quote(&self, subtotal: Decimal) -> Quote {
        let tax = self.tax_on(subtotal);

        Quote {
            subtotal,
            delivery_fee: self.delivery_fee,
            tax,
            total: subtotal + self.delivery_fee + tax,
        }
    }

    /// Wrap an amount for display in this policy's currency.
    pub fn money(&self, amount: Decimal) -> Money<'static, Currency> {
        Money::from_decimal(amount, self.currency)
    }
}

/// Priced breakdown of a subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Sum of price × quantity over all lines
    pub subtotal: Decimal,

    /// Flat delivery fee
    pub delivery_fee: Decimal,

    /// Rounded tax on the subtotal
    pub tax: Decimal,

    /// `subtotal + delivery_fee + tax`
    pub total: Decimal,
}
