//! Conversions between add-on levels, volumes, and pump run times

use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::constants::MAX_ADD_ON_LEVEL;
use crate::drink_order::{DrinkKind, DrinkOrder};
use crate::errors::DrinkOrderError;

/// One pump of the 202-000N family, as listed in the unit's registry file
#[derive(Deserialize, Debug)]
struct PumpEntry {
    part_number: String,
    seconds_per_ml: f64,
}

#[derive(Deserialize)]
struct PumpRegistry {
    pumps: Vec<PumpEntry>,
}

/// Target volume and run time for both add-on lines of one order, the values
/// the actuator driver needs per pump activation.
#[derive(Debug, PartialEq)]
pub struct DispensePlan {
    pub flavor_volume_ml: f64,
    pub flavor_run_time_s: f64,
    pub additive_volume_ml: f64,
    pub additive_run_time_s: f64,
}

/// Read-only conversion factors of one physical unit. Built once at startup,
/// every enumerated drink kind gets exactly one mL-per-unit entry.
pub struct FactorTable {
    ml_per_unit: HashMap<DrinkKind, f64>,
    seconds_per_ml: HashMap<String, f64>,
}

impl FactorTable {
    /// Table with the pumps installed in a stock unit
    pub fn new() -> FactorTable {
        FactorTable::with_pumps(default_pumps())
    }

    /// Table with the pumps listed in `path`, for units with a different
    /// pump loadout. An unreadable registry is a startup error, the unit
    /// must not fall back to rates it does not have.
    pub fn from_pump_registry<P: AsRef<Path>>(path: P) -> Result<FactorTable, DrinkOrderError> {
        let pumps = read_pump_registry(path)
            .map_err(|error| DrinkOrderError::PumpRegistryError(error.to_string()))?;
        Ok(FactorTable::with_pumps(
            pumps
                .into_iter()
                .map(|pump| (pump.part_number, pump.seconds_per_ml))
                .collect(),
        ))
    }

    fn with_pumps(pumps: Vec<(String, f64)>) -> FactorTable {
        let mut ml_per_unit = HashMap::new();
        for kind in DrinkKind::ALL {
            ml_per_unit.insert(kind, ml_per_unit_of(kind));
        }

        let mut seconds_per_ml = HashMap::new();
        for (part_number, rate) in pumps {
            seconds_per_ml.insert(part_number, rate);
        }

        FactorTable {
            ml_per_unit,
            seconds_per_ml,
        }
    }

    /// Maps an add-on level to the volume the pumps must dispense. Each
    /// fluid has a different strength per mL, so the factor depends on the
    /// drink kind.
    pub fn level_to_volume(&self, level: u8, kind: DrinkKind) -> Result<f64, DrinkOrderError> {
        if level > MAX_ADD_ON_LEVEL {
            return Err(DrinkOrderError::InvalidAddOnLevel(level));
        }
        let factor = self
            .ml_per_unit
            .get(&kind)
            .ok_or(DrinkOrderError::UnknownDrinkKind(kind.code()))?;
        Ok(f64::from(level) * factor)
    }

    /// Maps a requested volume to the seconds the given pump must stay on.
    /// Thick fluids flow slower through the pump, so the run time is
    /// stretched by the viscosity factor to still land on the requested
    /// volume within the ±2 mL dispensing tolerance.
    pub fn volume_to_pump_run_time(
        &self,
        volume_ml: f64,
        pump_part_number: &str,
        kind: DrinkKind,
    ) -> Result<f64, DrinkOrderError> {
        let rate = self
            .seconds_per_ml
            .get(pump_part_number)
            .ok_or_else(|| DrinkOrderError::UnknownPumpPartNumber(pump_part_number.to_string()))?;
        Ok(volume_ml * rate * viscosity_factor(kind))
    }

    /// Computes both add-on lines of an order for the actuator driver
    pub fn dispense_plan(
        &self,
        order: &DrinkOrder,
        pump_part_number: &str,
    ) -> Result<DispensePlan, DrinkOrderError> {
        let kind = order.drink_kind();
        let flavor_volume_ml = self.level_to_volume(order.flavor_level(), kind)?;
        let additive_volume_ml = self.level_to_volume(order.health_additive_level(), kind)?;
        let plan = DispensePlan {
            flavor_volume_ml,
            flavor_run_time_s: self.volume_to_pump_run_time(
                flavor_volume_ml,
                pump_part_number,
                kind,
            )?,
            additive_volume_ml,
            additive_run_time_s: self.volume_to_pump_run_time(
                additive_volume_ml,
                pump_part_number,
                kind,
            )?,
        };
        debug!("[ORDER] {:?} on pump {} -> {:?}", kind, pump_part_number, plan);
        Ok(plan)
    }

    pub fn registered_pumps(&self) -> usize {
        self.seconds_per_ml.len()
    }
}

/// Milliliters dispensed per add-on level unit of each recipe
fn ml_per_unit_of(kind: DrinkKind) -> f64 {
    match kind {
        DrinkKind::NoDrink => 0.0,
        DrinkKind::ImmunityBoost => 15.0,
        DrinkKind::DailyVitamins => 13.3,
        DrinkKind::RumFlavor => 12.0,
        DrinkKind::PinaColada => 19.0,
        DrinkKind::PineappleFlavor => 3.0,
        DrinkKind::OrangeFlavor => 9.0,
        DrinkKind::Cbd => 2.5,
        DrinkKind::EnergyBoost => 10.0,
        DrinkKind::OriginalEnergyDrink => 8.0,
    }
}

/// Run-time multiplier for fluids too viscous to flow at the pump's
/// nominal rate
fn viscosity_factor(kind: DrinkKind) -> f64 {
    match kind {
        DrinkKind::PinaColada => 1.75,
        _ => 1.0,
    }
}

fn default_pumps() -> Vec<(String, f64)> {
    vec![
        ("202-0006-A".to_string(), 2.2),
        ("202-0007-A".to_string(), 1.6),
    ]
}

fn read_pump_registry<P: AsRef<Path>>(path: P) -> Result<Vec<PumpEntry>, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let registry: PumpRegistry = serde_json::from_reader(reader)?;
    Ok(registry.pumps)
}
