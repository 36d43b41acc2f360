use serde::{Deserialize, Serialize};

use super::{PERMIT_FEE_DENOMINATOR, PERMIT_FEE_NUMERATOR};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryDefinition {
    pub name: String,
    pub visa_fee: u32,
    pub passport_fee: u32,
}

/// A destination with fixed document fees. Built once at setup and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub name: String,
    pub visa_fee: u32,
    pub passport_fee: u32,
}

impl Country {
    pub fn new(name: impl Into<String>, visa_fee: u32, passport_fee: u32) -> Self {
        Self {
            name: name.into(),
            visa_fee,
            passport_fee,
        }
    }

    /// Residence permits cost one and a half visa fees, rounded down.
    pub fn permit_fee(&self) -> u32 {
        let fee = u64::from(self.visa_fee) * u64::from(PERMIT_FEE_NUMERATOR)
            / u64::from(PERMIT_FEE_DENOMINATOR);
        u32::try_from(fee).unwrap_or(u32::MAX)
    }

    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

impl From<CountryDefinition> for Country {
    fn from(definition: CountryDefinition) -> Self {
        Self::new(
            definition.name.trim(),
            definition.visa_fee,
            definition.passport_fee,
        )
    }
}
