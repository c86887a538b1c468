use crate::dlog;
use crate::error::WorkoutError;
use crate::types::{WorkoutKind, WorkoutSummary};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Fields every discipline records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutSample {
    /// Steps or strokes.
    pub action: u64,
    /// Hours, strictly positive.
    pub duration: f64,
    /// Kilograms, strictly positive.
    pub weight: f64,
}

impl WorkoutSample {
    pub fn new(action: u64, duration: f64, weight: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            action,
            duration: divisor("duration", duration)?,
            weight: positive("weight", weight)?,
        })
    }
}

/// Shared formulas over the per-discipline ones.
///
/// `spent_calories` has no default: every discipline must say how it burns
/// energy. `LEN_STEP` is the distance in metres covered by one action.
pub trait Training {
    const KIND: WorkoutKind;
    const LEN_STEP: f64 = 0.65;

    fn sample(&self) -> &WorkoutSample;

    fn spent_calories(&self) -> f64;

    /// Distance in km.
    fn distance(&self) -> f64 {
        self.sample().action as f64 * Self::LEN_STEP / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.sample().duration
    }

    fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            kind: Self::KIND,
            duration: self.sample().duration,
            distance: self.distance(),
            mean_speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    sample: WorkoutSample,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: u64, duration: f64, weight: f64) -> Result<Self, WorkoutError> {
        finite_figures(
            Self {
                sample: WorkoutSample::new(action, duration, weight)?,
            },
            weight_overflow,
        )
    }
}

impl Training for Running {
    const KIND: WorkoutKind = WorkoutKind::Running;

    fn sample(&self) -> &WorkoutSample {
        &self.sample
    }

    fn spent_calories(&self) -> f64 {
        let s = &self.sample;
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * s.weight
            / M_IN_KM
            * s.duration
            * MIN_IN_H
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    sample: WorkoutSample,
    /// Centimetres.
    height: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(action: u64, duration: f64, weight: f64, height: f64) -> Result<Self, WorkoutError> {
        finite_figures(
            Self {
                sample: WorkoutSample::new(action, duration, weight)?,
                height: divisor("height", height)?,
            },
            |_| WorkoutError::DivisionPrecondition {
                field: "height",
                value: height,
            },
        )
    }

    pub const fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    const KIND: WorkoutKind = WorkoutKind::SportsWalking;

    fn sample(&self) -> &WorkoutSample {
        &self.sample
    }

    /// The speed-over-height term is floor-divided, so it only kicks in once
    /// the squared speed reaches the walker's height.
    fn spent_calories(&self) -> f64 {
        let s = &self.sample;
        let speed = self.mean_speed();
        (Self::CALORIES_WEIGHT_MULTIPLIER * s.weight
            + floor_div(speed * speed, self.height)
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * s.weight)
            * s.duration
            * MIN_IN_H
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    sample: WorkoutSample,
    /// Metres.
    pool_length: f64,
    pool_laps: u64,
}

impl Swimming {
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u64,
        duration: f64,
        weight: f64,
        pool_length: f64,
        pool_laps: u64,
    ) -> Result<Self, WorkoutError> {
        finite_figures(
            Self {
                sample: WorkoutSample::new(action, duration, weight)?,
                pool_length: positive("pool_length", pool_length)?,
                pool_laps,
            },
            weight_overflow,
        )
    }

    pub const fn pool_length(&self) -> f64 {
        self.pool_length
    }

    pub const fn pool_laps(&self) -> u64 {
        self.pool_laps
    }
}

impl Training for Swimming {
    const KIND: WorkoutKind = WorkoutKind::Swimming;
    const LEN_STEP: f64 = 1.68;

    fn sample(&self) -> &WorkoutSample {
        &self.sample
    }

    /// Derived from pool laps, not strokes.
    fn mean_speed(&self) -> f64 {
        self.pool_length * self.pool_laps as f64 / M_IN_KM / self.sample.duration
    }

    fn spent_calories(&self) -> f64 {
        let s = &self.sample;
        (self.mean_speed() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * s.weight
            * s.duration
    }
}

/// A constructed workout of any supported kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

macro_rules! forward {
    ($self:ident, $w:ident => $e:expr) => {
        match $self {
            Self::Running($w) => $e,
            Self::SportsWalking($w) => $e,
            Self::Swimming($w) => $e,
        }
    };
}

impl Workout {
    pub const fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running(_) => Running::KIND,
            Self::SportsWalking(_) => SportsWalking::KIND,
            Self::Swimming(_) => Swimming::KIND,
        }
    }

    pub fn sample(&self) -> &WorkoutSample {
        forward!(self, w => w.sample())
    }

    pub fn distance(&self) -> f64 {
        forward!(self, w => w.distance())
    }

    pub fn mean_speed(&self) -> f64 {
        forward!(self, w => w.mean_speed())
    }

    pub fn spent_calories(&self) -> f64 {
        forward!(self, w => w.spent_calories())
    }

    pub fn summary(&self) -> WorkoutSummary {
        let s = forward!(self, w => w.summary());
        dlog!(
            "summary kind={} distance={} mean_speed={} calories={}",
            s.kind,
            s.distance,
            s.mean_speed,
            s.calories
        );
        s
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Self::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Self::SportsWalking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Self::Swimming(w)
    }
}

/// Float floor division: the quotient of the remainder-adjusted numerator,
/// rounded down. Matches `x // y` for floats rather than `(x / y).floor()`,
/// which can round up across an integer boundary.
pub fn floor_div(x: f64, y: f64) -> f64 {
    let rem = x % y;
    let mut div = (x - rem) / y;
    if rem != 0.0 && (y < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidValue {
            field,
            value,
            reason: "must be a finite number",
        })
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if finite(field, value)? > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidValue {
            field,
            value,
            reason: "must be positive",
        })
    }
}

/// Reject workouts whose figures overflow even though every field is in
/// range, e.g. a subnormal duration turning the mean speed into infinity.
fn finite_figures<T: Training>(
    workout: T,
    calories_overflow: impl FnOnce(&WorkoutSample) -> WorkoutError,
) -> Result<T, WorkoutError> {
    let s = workout.summary();
    if !(s.distance.is_finite() && s.mean_speed.is_finite()) {
        return Err(WorkoutError::DivisionPrecondition {
            field: "duration",
            value: s.duration,
        });
    }
    if !s.calories.is_finite() {
        return Err(calories_overflow(workout.sample()));
    }
    Ok(workout)
}

fn weight_overflow(sample: &WorkoutSample) -> WorkoutError {
    WorkoutError::InvalidValue {
        field: "weight",
        value: sample.weight,
        reason: "overflows the calorie count",
    }
}

fn divisor(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if finite(field, value)? == 0.0 {
        return Err(WorkoutError::DivisionPrecondition { field, value });
    }
    positive(field, value)
}
