use anyhow::{Result, bail};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use log::{error, info};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;

use dealbase::{DEAL_CODEC, Partition};

/// Round-trip `samples` random deals and `samples` random indices through the
/// codec. Sample `i` draws from a generator seeded with `seed + i`, so a
/// failing sample can be replayed on its own.
pub(crate) fn run_verify(samples: u64, seed: u64) -> Result<()> {
    info!("verifying {samples} samples starting at seed {seed}");
    let bar = ProgressBar::new(samples);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} {per_sec} eta {eta}") {
        bar.set_style(style);
    }

    let failures = (0..samples)
        .into_par_iter()
        .progress_with(bar.clone())
        .filter(|&sample| !sample_roundtrips(seed.wrapping_add(sample)))
        .count();
    bar.finish();

    if failures > 0 {
        bail!("{failures} of {samples} samples failed to round-trip");
    }
    println!("{samples} deals and {samples} indices round-tripped");
    Ok(())
}

fn sample_roundtrips(seed: u64) -> bool {
    let mut rng = StdRng::seed_from_u64(seed);

    let partition = Partition::random(&mut rng);
    let decoded = DEAL_CODEC
        .encode_partition(&partition)
        .and_then(|index| DEAL_CODEC.decode(index));
    match decoded {
        Ok(decoded) if decoded == partition => {}
        Ok(decoded) => {
            error!("seed {seed}: deal decoded to a different deal:\n{decoded}");
            return false;
        }
        Err(err) => {
            error!("seed {seed}: deal failed to round-trip: {err}");
            return false;
        }
    }

    let index = rng.gen_range(0..DEAL_CODEC.total_deals());
    match DEAL_CODEC
        .decode(index)
        .and_then(|partition| DEAL_CODEC.encode_partition(&partition))
    {
        Ok(reencoded) if reencoded == index => true,
        Ok(reencoded) => {
            error!("seed {seed}: index {index} re-encoded to {reencoded}");
            false
        }
        Err(err) => {
            error!("seed {seed}: index {index} failed to round-trip: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_roundtrip() {
        assert!((0..50).all(sample_roundtrips));
    }
}
