use crate::base_types::{Fee, Hours, SlotSize};

/// Tariff of the facility. The first `flat_rate_hours` are covered by `flat_rate`, every further
/// hour is charged with the hourly rate of the slot size. Every full block of `block_hours` is
/// charged with `block_rate` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeSchedule {
    pub flat_rate: Fee,
    pub flat_rate_hours: Hours,
    pub hourly_rates: ConfigHourlyRates,
    pub block_hours: Hours,
    pub block_rate: Fee,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigHourlyRates {
    pub small: Fee,
    pub medium: Fee,
    pub large: Fee,
}

impl FeeSchedule {
    pub fn hourly_rate(&self, size: SlotSize) -> Fee {
        match size {
            SlotSize::Small => self.hourly_rates.small,
            SlotSize::Medium => self.hourly_rates.medium,
            SlotSize::Large => self.hourly_rates.large,
        }
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        FeeSchedule {
            flat_rate: 40,
            flat_rate_hours: 3,
            hourly_rates: ConfigHourlyRates {
                small: 20,
                medium: 60,
                large: 100,
            },
            block_hours: 24,
            block_rate: 5000,
        }
    }
}
