//! Utility functions to assist in calculating oracle prices with decimals client-side.

use rust_decimal::{
    dec,
    Decimal,
};

use crate::OraclePrice;

/// `value * 10^pow`, or `None` if the result doesn't fit in a [`Decimal`].
pub fn decimal_pow10_i16(value: Decimal, pow: i16) -> Option<Decimal> {
    const TEN: Decimal = dec!(10);
    let is_negative = pow.is_negative();
    (0..pow.unsigned_abs())
        .try_fold(value, |acc, _| {
            if is_negative {
                acc.checked_div(TEN)
            } else {
                acc.checked_mul(TEN)
            }
        })
        .map(|d| d.normalize())
}

impl OraclePrice {
    /// The aggregate price scaled by its exponent, i.e. `price * 10^exponent`. `None` when a large
    /// positive exponent overflows.
    pub fn to_decimal(&self) -> Option<Decimal> {
        // The exponent is range checked when the account is decoded, so the cast is lossless.
        decimal_pow10_i16(Decimal::from(self.price), self.exponent as i16)
    }

    /// The confidence interval scaled the same way as the price.
    pub fn confidence_to_decimal(&self) -> Option<Decimal> {
        decimal_pow10_i16(Decimal::from(self.confidence), self.exponent as i16)
    }
}
