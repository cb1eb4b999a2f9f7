//! Drives every workload through the timer and collects a [`Report`].

use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::report::{Measurement, Report, Suite};
use squarecheck_core::growth::{append_to_list, concat_tuple};
use squarecheck_core::samples::{mirrored_sample, small_sample};
use squarecheck_core::{time_call, MoonTable, Strategy};
use strum::IntoEnumIterator;
use tracing::{debug, info};

/// Run both checkers on both samples, then the growth workloads, then
/// sort the moon table.
pub fn run(config: &BenchConfig) -> Result<Report, BenchError> {
    config.validate()?;
    let mut measurements = Vec::new();

    let small = small_sample();
    let large = mirrored_sample(config.large_size);

    for (suite, values, reps) in [
        (Suite::SmallList, &small, config.small_reps),
        (Suite::LargeList, &large, config.large_reps),
    ] {
        info!(%suite, len = values.len(), reps, "timing checkers");
        for strategy in Strategy::iter() {
            measurements.push(measure_checker(suite, strategy, values, reps)?);
        }
    }

    info!(
        size = config.growth_size,
        reps = config.growth_reps,
        "timing growth workloads"
    );
    let growth: [(&str, fn(usize) -> usize); 2] = [
        ("appending numbers to list", append_to_list),
        ("creating new tuple", concat_tuple),
    ];
    for (name, workload) in growth {
        let avg_secs = time_call(&config.growth_size, |&n| workload(n), config.growth_reps)?;
        debug!(label = name, avg_secs, "measured");
        measurements.push(Measurement {
            name: name.to_string(),
            suite: Suite::Growth,
            input_len: config.growth_size,
            iterations: config.growth_reps,
            avg_secs,
            holds: None,
        });
    }

    let mut moons = MoonTable::solar_system();
    moons.sort_by_moons_desc();

    Ok(Report {
        measurements,
        moons,
    })
}

fn measure_checker(
    suite: Suite,
    strategy: Strategy,
    values: &[i64],
    reps: u32,
) -> Result<Measurement, BenchError> {
    let avg_secs = time_call(values, |v| strategy.check(v), reps)?;
    let holds = strategy.check(values);
    debug!(%suite, %strategy, avg_secs, holds, "measured");

    let list = match suite {
        Suite::SmallList => "small list",
        Suite::LargeList => "large list",
        Suite::Growth => "growth input",
    };
    Ok(Measurement {
        name: format!("{} checker on {}", strategy, list),
        suite,
        input_len: values.len(),
        iterations: reps,
        avg_secs,
        holds: Some(holds),
    })
}
