use crate::content::PricingPlan;

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

/// Billing period selected in the pricing section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PricingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl PricingPeriod {
    /// The other period.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Monthly => Self::Yearly,
            Self::Yearly => Self::Monthly,
        }
    }

    /// Displayed per-month price for `plan` under this period, in RM.
    ///
    /// Returns `None` for custom-priced plans (price 0), which render a
    /// "Custom" label instead of a number.
    #[must_use]
    pub fn monthly_price(self, plan: &PricingPlan) -> Option<u32> {
        let price = match self {
            Self::Monthly => plan.monthly_price,
            Self::Yearly => plan.yearly_price,
        };
        (price > 0).then_some(price)
    }
}
