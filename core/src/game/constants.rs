pub(crate) const DEFAULT_STARTING_MONEY: u32 = 10;
pub(crate) const DEFAULT_BACKPACK_LIMIT: usize = 7;
pub(crate) const DEFAULT_WINNING_PASSPORT_COUNT: usize = 4;
pub(crate) const DEFAULT_CAPTURE_PROBABILITY: f64 = 0.3;
pub(crate) const DEFAULT_LEMONADE_MIN: u32 = 10;
pub(crate) const DEFAULT_LEMONADE_MAX: u32 = 70;
pub(crate) const PERMIT_FEE_NUMERATOR: u32 = 3;
pub(crate) const PERMIT_FEE_DENOMINATOR: u32 = 2;
