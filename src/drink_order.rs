//! Data model of a customized drink order

use crate::constants::{MAX_ADD_ON_LEVEL, MIN_ADD_ON_LEVEL};
use crate::errors::DrinkOrderError;

/// Base recipes a customer can pick on the kiosk. The numeric codes are the
/// ones the kiosk screens send and must stay stable across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DrinkKind {
    NoDrink = 0,
    ImmunityBoost = 1,
    DailyVitamins = 2,
    RumFlavor = 3,
    PinaColada = 4,
    PineappleFlavor = 5,
    OrangeFlavor = 6,
    Cbd = 7,
    EnergyBoost = 8,
    OriginalEnergyDrink = 9,
}

impl DrinkKind {
    pub const ALL: [DrinkKind; 10] = [
        DrinkKind::NoDrink,
        DrinkKind::ImmunityBoost,
        DrinkKind::DailyVitamins,
        DrinkKind::RumFlavor,
        DrinkKind::PinaColada,
        DrinkKind::PineappleFlavor,
        DrinkKind::OrangeFlavor,
        DrinkKind::Cbd,
        DrinkKind::EnergyBoost,
        DrinkKind::OriginalEnergyDrink,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for DrinkKind {
    type Error = DrinkOrderError;

    fn try_from(code: u8) -> Result<DrinkKind, DrinkOrderError> {
        match code {
            0 => Ok(DrinkKind::NoDrink),
            1 => Ok(DrinkKind::ImmunityBoost),
            2 => Ok(DrinkKind::DailyVitamins),
            3 => Ok(DrinkKind::RumFlavor),
            4 => Ok(DrinkKind::PinaColada),
            5 => Ok(DrinkKind::PineappleFlavor),
            6 => Ok(DrinkKind::OrangeFlavor),
            7 => Ok(DrinkKind::Cbd),
            8 => Ok(DrinkKind::EnergyBoost),
            9 => Ok(DrinkKind::OriginalEnergyDrink),
            _ => Err(DrinkOrderError::UnknownDrinkKind(code)),
        }
    }
}

/// Flavoring added on top of the base drink. Independent of [`DrinkKind`],
/// the codes are not interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FlavorAddOn {
    None = 0,
    Rum = 1,
    PinaColada = 2,
    Pineapple = 3,
    Orange = 4,
}

impl TryFrom<u8> for FlavorAddOn {
    type Error = DrinkOrderError;

    fn try_from(code: u8) -> Result<FlavorAddOn, DrinkOrderError> {
        match code {
            0 => Ok(FlavorAddOn::None),
            1 => Ok(FlavorAddOn::Rum),
            2 => Ok(FlavorAddOn::PinaColada),
            3 => Ok(FlavorAddOn::Pineapple),
            4 => Ok(FlavorAddOn::Orange),
            _ => Err(DrinkOrderError::UnknownFlavorAddOn(code)),
        }
    }
}

/// Health additive mixed into the base liquid. Independent of [`DrinkKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HealthAdditive {
    None = 0,
    ImmunityBoost = 1,
    DailyVitamins = 2,
    Cbd = 3,
    EnergyBoost = 4,
}

impl TryFrom<u8> for HealthAdditive {
    type Error = DrinkOrderError;

    fn try_from(code: u8) -> Result<HealthAdditive, DrinkOrderError> {
        match code {
            0 => Ok(HealthAdditive::None),
            1 => Ok(HealthAdditive::ImmunityBoost),
            2 => Ok(HealthAdditive::DailyVitamins),
            3 => Ok(HealthAdditive::Cbd),
            4 => Ok(HealthAdditive::EnergyBoost),
            _ => Err(DrinkOrderError::UnknownHealthAdditive(code)),
        }
    }
}

/// Reference to the image the laser brands onto the coconut shell.
/// Size and format limits are checked by the branding subsystem, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandingArt(String);

impl BrandingArt {
    pub fn new<S: Into<String>>(asset: S) -> BrandingArt {
        BrandingArt(asset.into())
    }

    pub fn asset(&self) -> &str {
        &self.0
    }
}

/// One customized drink as entered on the kiosk. Validated on construction
/// and immutable afterwards, downstream dispensing only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct DrinkOrder {
    drink_kind: DrinkKind,
    flavor_add_on: FlavorAddOn,
    flavor_level: u8,
    health_additive: HealthAdditive,
    health_level: u8,
    branding_art: BrandingArt,
}

impl DrinkOrder {
    pub fn new(
        drink_kind: DrinkKind,
        flavor_add_on: FlavorAddOn,
        flavor_level: u8,
        health_additive: HealthAdditive,
        health_level: u8,
        branding_art: BrandingArt,
    ) -> Result<DrinkOrder, DrinkOrderError> {
        validate_level(flavor_level)?;
        validate_level(health_level)?;
        Ok(DrinkOrder {
            drink_kind,
            flavor_add_on,
            flavor_level,
            health_additive,
            health_level,
            branding_art,
        })
    }

    /// Builds an order from the raw numeric codes the kiosk screens send.
    pub fn from_codes(
        drink_code: u8,
        flavor_code: u8,
        flavor_level: u8,
        additive_code: u8,
        health_level: u8,
        branding_art: BrandingArt,
    ) -> Result<DrinkOrder, DrinkOrderError> {
        DrinkOrder::new(
            DrinkKind::try_from(drink_code)?,
            FlavorAddOn::try_from(flavor_code)?,
            flavor_level,
            HealthAdditive::try_from(additive_code)?,
            health_level,
            branding_art,
        )
    }

    pub fn drink_kind(&self) -> DrinkKind {
        self.drink_kind
    }

    /// Product identity of the flavoring being added to the base drink
    pub fn flavor_kind(&self) -> FlavorAddOn {
        self.flavor_add_on
    }

    /// Product identity of the health additive being added to the base liquid
    pub fn health_additive_kind(&self) -> HealthAdditive {
        self.health_additive
    }

    /// Asset to brand onto the coconut, opaque to the dispensing logic
    pub fn branding_art_ref(&self) -> &BrandingArt {
        &self.branding_art
    }

    pub fn flavor_level(&self) -> u8 {
        self.flavor_level
    }

    pub fn health_additive_level(&self) -> u8 {
        self.health_level
    }
}

fn validate_level(level: u8) -> Result<(), DrinkOrderError> {
    if !(MIN_ADD_ON_LEVEL..=MAX_ADD_ON_LEVEL).contains(&level) {
        return Err(DrinkOrderError::InvalidAddOnLevel(level));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_art() -> BrandingArt {
        BrandingArt::new("cafe-logo.png")
    }

    #[test]
    fn should_keep_the_construction_values_unchanged() {
        let order = DrinkOrder::new(
            DrinkKind::PinaColada,
            FlavorAddOn::Pineapple,
            3,
            HealthAdditive::DailyVitamins,
            1,
            some_art(),
        )
        .unwrap();

        assert_eq!(DrinkKind::PinaColada, order.drink_kind());
        assert_eq!(FlavorAddOn::Pineapple, order.flavor_kind());
        assert_eq!(3, order.flavor_level());
        assert_eq!(HealthAdditive::DailyVitamins, order.health_additive_kind());
        assert_eq!(1, order.health_additive_level());
        assert_eq!("cafe-logo.png", order.branding_art_ref().asset());
    }

    #[test]
    fn should_reject_a_flavor_level_above_the_maximum() {
        let result = DrinkOrder::new(
            DrinkKind::OrangeFlavor,
            FlavorAddOn::Orange,
            6,
            HealthAdditive::None,
            0,
            some_art(),
        );
        assert_eq!(Err(DrinkOrderError::InvalidAddOnLevel(6)), result);
    }

    #[test]
    fn should_reject_a_health_level_above_the_maximum() {
        let result = DrinkOrder::new(
            DrinkKind::EnergyBoost,
            FlavorAddOn::None,
            0,
            HealthAdditive::EnergyBoost,
            7,
            some_art(),
        );
        assert_eq!(Err(DrinkOrderError::InvalidAddOnLevel(7)), result);
    }

    #[test]
    fn should_accept_the_extreme_levels() {
        let order = DrinkOrder::new(
            DrinkKind::RumFlavor,
            FlavorAddOn::Rum,
            0,
            HealthAdditive::ImmunityBoost,
            5,
            some_art(),
        );
        assert_eq!(true, order.is_ok());
    }

    #[test]
    fn should_map_every_drink_code_back_to_its_kind() {
        for kind in DrinkKind::ALL {
            assert_eq!(Ok(kind), DrinkKind::try_from(kind.code()));
        }
    }

    #[test]
    fn should_reject_a_drink_code_outside_the_enumeration() {
        assert_eq!(
            Err(DrinkOrderError::UnknownDrinkKind(10)),
            DrinkKind::try_from(10)
        );
    }

    #[test]
    fn should_build_an_order_from_raw_kiosk_codes() {
        let order = DrinkOrder::from_codes(4, 2, 3, 1, 2, some_art()).unwrap();
        assert_eq!(DrinkKind::PinaColada, order.drink_kind());
        assert_eq!(FlavorAddOn::PinaColada, order.flavor_kind());
        assert_eq!(HealthAdditive::ImmunityBoost, order.health_additive_kind());
    }

    #[test]
    fn should_reject_raw_codes_outside_the_add_on_enumerations() {
        assert_eq!(
            Err(DrinkOrderError::UnknownFlavorAddOn(9)),
            DrinkOrder::from_codes(1, 9, 1, 0, 0, some_art())
        );
        assert_eq!(
            Err(DrinkOrderError::UnknownHealthAdditive(8)),
            DrinkOrder::from_codes(1, 0, 1, 8, 0, some_art())
        );
    }
}
