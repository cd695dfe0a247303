/// Decimal precision for monetary amounts (currency minor units).
pub const MONEY_DECIMAL_PRECISION: u32 = 2;
