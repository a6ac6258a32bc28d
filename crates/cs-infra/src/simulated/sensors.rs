use std::sync::Mutex;

use cs_core::capture::{DistanceStatus, LightStatus, SensorReading};
use cs_core::ports::SensorSamplerPort;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LOWER_SPLIT: f64 = 0.3;
const UPPER_SPLIT: f64 = 0.7;
const DETECTION_THRESHOLD: f64 = 0.2;

/// Placeholder for frame analysis: three independent uniform draws per sample.
pub struct RandomSensorSampler {
    rng: Mutex<StdRng>,
}

impl RandomSensorSampler {
    /// A fixed `seed` makes the sequence reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl SensorSamplerPort for RandomSensorSampler {
    fn sample(&self) -> SensorReading {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        SensorReading {
            distance: classify_distance(rng.random()),
            light: classify_light(rng.random()),
            subject_detected: detect_subject(rng.random()),
        }
    }
}

fn classify_distance(draw: f64) -> DistanceStatus {
    if draw < LOWER_SPLIT {
        DistanceStatus::TooClose
    } else if draw < UPPER_SPLIT {
        DistanceStatus::Good
    } else {
        DistanceStatus::TooFar
    }
}

fn classify_light(draw: f64) -> LightStatus {
    if draw < LOWER_SPLIT {
        LightStatus::TooDark
    } else if draw < UPPER_SPLIT {
        LightStatus::Good
    } else {
        LightStatus::TooBright
    }
}

fn detect_subject(draw: f64) -> bool {
    draw > DETECTION_THRESHOLD
}
