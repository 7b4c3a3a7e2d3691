pub mod monthly;
pub mod profile;

pub use monthly::{owned_monthly, rented_monthly, OwnedMonthly, RentedMonthly};
pub use profile::{OperatingProfile, ProfileError, WEEKS_PER_MONTH};
