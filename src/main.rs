use std::env;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use rand::Rng;
use ringslot_utils::math::num::{approx_eq, clamp};
use ringslot_utils::{Angle, BoundedSlotCollection, CollectionConfig, SparseCollection};
use tracing_subscriber::EnvFilter;

const DEFAULT_CAPACITY: usize = 8;
const DEFAULT_READINGS: usize = 20;

#[derive(Debug)]
struct Reading {
    taken_at: DateTime<Utc>,
    heading: Angle,
    strength: f64,
}

fn env_usize(key: &str, default: usize) -> usize {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|err| {
            tracing::warn!(key, raw = %raw, %err, default, "invalid value, using default");
            default
        }),
        Err(_) => default,
    }
}

fn main() -> ringslot_utils::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let capacity = env_usize("RINGSLOT_CAPACITY", DEFAULT_CAPACITY);
    let readings = env_usize("RINGSLOT_READINGS", DEFAULT_READINGS);

    let mut history: BoundedSlotCollection<Rc<Reading>> = CollectionConfig::new(capacity).build()?;
    let mut rng = rand::rng();

    for _ in 0..readings {
        let reading = Rc::new(Reading {
            taken_at: Utc::now(),
            heading: Angle::from_degrees(rng.random_range(0.0..360.0)),
            strength: clamp(rng.random_range(-0.2..1.2), 0.0, 1.0),
        });
        history.add(reading)?;
    }

    tracing::info!(
        kept = history.len(),
        capacity = history.capacity(),
        occupancy = history.occupancy(),
        "history filled"
    );

    for (index, reading) in history.iter().enumerate() {
        println!(
            "{index:>3}  {}  heading {:>8.2}°  strength {:.2}",
            reading.taken_at.format("%H:%M:%S%.3f"),
            reading.heading.normalized().degrees(),
            reading.strength,
        );
    }

    // drop the weakest reading by identity
    if let Some(weakest) = history.iter().min_by(|a, b| a.strength.total_cmp(&b.strength)).cloned() {
        let removed = history.remove(&weakest)?;
        tracing::info!(removed, strength = weakest.strength, "dropped weakest reading");
    }

    let spread = history
        .iter()
        .flat_map(|a| history.iter().map(move |b| a.heading.distance_to(b.heading)))
        .fold(Angle::ZERO, Angle::max);

    if approx_eq(spread.radians(), 0.0, 1e-12) {
        println!("all headings agree");
    } else {
        println!("widest heading spread: {spread}");
    }

    Ok(())
}
