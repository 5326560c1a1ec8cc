/***************************************/
/*        3rd party libraries          */
/***************************************/
use rand::Rng;
use std::fmt;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::GeneratorConfig;
use crate::generator::NameCursor;

/// Floor every person is assumed to start from.
pub const START_FLOOR: u8 = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("{0} must be positive")]
    NotPositive(&'static str),
}

/**
 * One person's itinerary for the simulator.
 *
 * Written as `<name> <start> <floor> <delay> <floor> <delay> ...`: wait `start`
 * ticks, then for each trip go to `floor` and work there for `delay` ticks.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripSchedule {
    pub name: String,
    pub start: u32,
    pub trips: Vec<(u8, u32)>,
}

impl TripSchedule {
    pub fn random<R: Rng>(name: String, config: &GeneratorConfig, rng: &mut R) -> TripSchedule {
        let start = rng.gen_range(1..=config.delay_max);

        let mut floor = START_FLOOR;
        let mut trips = Vec::with_capacity(config.trips as usize);
        for _ in 0..config.trips {
            // Draw from the max_floor floors other than the current one.
            let pick = rng.gen_range(0..config.max_floor);
            floor = if pick >= floor { pick + 1 } else { pick };
            let delay = rng.gen_range(1..=config.delay_max);
            trips.push((floor, delay));
        }

        TripSchedule { name, start, trips }
    }
}

impl fmt::Display for TripSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.start)?;
        for (floor, delay) in self.trips.iter() {
            write!(f, " {} {}", floor, delay)?;
        }
        Ok(())
    }
}

/***************************************/
/*             Public API              */
/***************************************/

/// Draws `config.people` schedules, taking names from `names`.
pub fn generate<R: Rng>(
    config: &GeneratorConfig,
    names: &mut NameCursor,
    rng: &mut R,
) -> Result<Vec<TripSchedule>, GeneratorError> {
    if config.people == 0 {
        return Err(GeneratorError::NotPositive("people"));
    }
    if config.trips == 0 {
        return Err(GeneratorError::NotPositive("trips"));
    }
    if config.delay_max == 0 {
        return Err(GeneratorError::NotPositive("delaymax"));
    }
    if config.max_floor < START_FLOOR {
        return Err(GeneratorError::NotPositive("max_floor"));
    }

    log::debug!(
        "generating {} people with {} trips each (delay up to {})",
        config.people,
        config.trips,
        config.delay_max
    );

    let schedules = names
        .by_ref()
        .take(config.people as usize)
        .map(|name| TripSchedule::random(name, config, rng))
        .collect();
    Ok(schedules)
}
