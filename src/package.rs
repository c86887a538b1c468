use crate::error::WorkoutError;
use crate::training::{Running, SportsWalking, Swimming, Workout};
use crate::types::WorkoutKind;
use std::fmt;
use std::str::FromStr;

/// Build the workout described by a raw tracker package.
///
/// `data` is applied positionally: action, duration, weight, then `height`
/// for `WLK` or `pool_length, pool_laps` for `SWM`.
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    code.parse::<WorkoutKind>()?.build(data)
}

impl WorkoutKind {
    pub fn build(self, data: &[f64]) -> Result<Workout, WorkoutError> {
        if data.len() != self.arity() {
            return Err(WorkoutError::ArityMismatch {
                kind: self,
                expected: self.arity(),
                got: data.len(),
            });
        }

        let action = whole_number("action", data[0])?;
        let (duration, weight) = (data[1], data[2]);

        let workout = match self {
            Self::Running => Running::new(action, duration, weight)?.into(),
            Self::SportsWalking => SportsWalking::new(action, duration, weight, data[3])?.into(),
            Self::Swimming => {
                let pool_laps = whole_number("pool_laps", data[4])?;
                Swimming::new(action, duration, weight, data[3], pool_laps)?.into()
            }
        };
        Ok(workout)
    }
}

/// Largest count an `f64` still represents exactly.
const MAX_EXACT_COUNT: f64 = 9_007_199_254_740_992.0;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_number(field: &'static str, value: f64) -> Result<u64, WorkoutError> {
    let reason = if !value.is_finite() {
        "must be a finite number"
    } else if value < 0.0 {
        "must not be negative"
    } else if value.fract() != 0.0 {
        "must be a whole number"
    } else if value > MAX_EXACT_COUNT {
        "is too large"
    } else {
        return Ok(value as u64);
    };
    Err(WorkoutError::InvalidValue {
        field,
        value,
        reason,
    })
}

/// A package as received: the code is kept raw and only checked when the
/// package is built, so a bad code fails that package alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }

    pub fn build(&self) -> Result<Workout, WorkoutError> {
        read_package(&self.code, &self.data)
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)?;
        for (i, v) in self.data.iter().enumerate() {
            let sep = if i == 0 { ':' } else { ',' };
            write!(f, "{sep}{v}")?;
        }
        Ok(())
    }
}

/// Accepts `CODE:v1,v2,...` or `CODE v1 v2 ...`. Comma-separated values may
/// be padded with whitespace, but every position must hold a value.
impl FromStr for Package {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_package(s).map_err(|reason| WorkoutError::MalformedPackage {
            input: s.to_string(),
            reason,
        })
    }
}

fn parse_package(s: &str) -> Result<Package, String> {
    let s = s.trim();
    let (code, rest) = s
        .split_once(|c: char| c == ':' || c.is_whitespace())
        .unwrap_or((s, ""));
    if code.is_empty() {
        return Err("missing workout code".to_string());
    }

    let rest = rest.trim();
    let tokens: Vec<&str> = if rest.is_empty() {
        Vec::new()
    } else if rest.contains(',') {
        rest.split(',').map(str::trim).collect()
    } else {
        rest.split_whitespace().collect()
    };

    let data = tokens
        .into_iter()
        .enumerate()
        .map(|(i, t)| {
            if t.is_empty() {
                return Err(format!("empty value at position {}", i + 1));
            }
            t.parse::<f64>()
                .map_err(|e| format!("value {t:?} is not a number: {e}"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Package::new(code, data))
}

/// Parse a package listing, one package per line. Blank lines and `#`
/// comments are skipped.
pub fn parse_packages(text: &str) -> Result<Vec<Package>, WorkoutError> {
    let mut out = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.split_once('#').map_or(raw, |(head, _)| head).trim();
        if line.is_empty() {
            continue;
        }
        let pkg = parse_package(line).map_err(|reason| WorkoutError::Parse {
            line: i + 1,
            reason,
        })?;
        out.push(pkg);
    }
    Ok(out)
}

/// The packages processed when none are given.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}
