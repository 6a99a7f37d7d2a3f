//! Location to rent lookup.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{HubError, HubResult};
use crate::models::Location;

/// Typical monthly rent (SGD) for each canned location.
pub const LOCATION_RENTS: [(Location, u32); 3] = [
    (Location::NewEstate, 1800),
    (Location::MatureEstate, 2500),
    (Location::Cbd, 4000),
];

/// Rent used for [`Location::Custom`] when the user supplies none.
pub const DEFAULT_CUSTOM_RENT: u32 = 2500;

/// Resolves the monthly rent for a location.
///
/// Canned locations always use their table value and ignore `custom_rent`.
/// [`Location::Custom`] uses `custom_rent`, falling back to [`DEFAULT_CUSTOM_RENT`].
///
/// # Errors
///
/// Returns `InvalidInput` if a custom rent is negative.
///
/// # Examples
///
/// ```
/// use hawker_hub::estimator::rent_for_location;
/// use hawker_hub::models::Location;
/// use rust_decimal::Decimal;
///
/// let rent = rent_for_location(Location::Cbd, None).unwrap();
/// assert_eq!(rent, Decimal::from(4000));
///
/// let rent = rent_for_location(Location::Custom, Some(Decimal::from(3100))).unwrap();
/// assert_eq!(rent, Decimal::from(3100));
/// ```
pub fn rent_for_location(location: Location, custom_rent: Option<Decimal>) -> HubResult<Decimal> {
    if location == Location::Custom {
        let rent = custom_rent.unwrap_or_else(|| Decimal::from(DEFAULT_CUSTOM_RENT));
        if rent.is_sign_negative() && !rent.is_zero() {
            return Err(HubError::InvalidInput {
                field: "custom_rent".to_string(),
                message: format!("must not be negative, got {}", rent),
            });
        }
        return Ok(rent);
    }

    if custom_rent.is_some() {
        debug!(?location, "Ignoring custom rent for canned location");
    }

    LOCATION_RENTS
        .iter()
        .find(|(candidate, _)| *candidate == location)
        .map(|(_, rent)| Decimal::from(*rent))
        .ok_or_else(|| HubError::InvalidInput {
            field: "location".to_string(),
            message: format!("no rent configured for {:?}", location),
        })
}
