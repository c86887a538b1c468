use crate::error::WorkoutError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The three supported disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WorkoutKind {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutKind {
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Three-letter code used by the tracker packages.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Label shown in the summary message.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
        }
    }

    /// Number of positional values a package of this kind carries.
    pub const fn arity(self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    /// Codes are matched exactly; `run` or ` RUN` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.code() == s)
            .ok_or_else(|| WorkoutError::InvalidWorkoutCode {
                code: s.to_string(),
            })
    }
}

/// Computed figures for one workout. Distance in km, speed in km/h,
/// duration in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkoutSummary {
    pub kind: WorkoutKind,
    pub duration: f64,
    pub distance: f64,
    pub mean_speed: f64,
    pub calories: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_codes() {
        assert_eq!("SWM".parse::<WorkoutKind>().unwrap(), WorkoutKind::Swimming);
        assert_eq!("RUN".parse::<WorkoutKind>().unwrap(), WorkoutKind::Running);
        assert_eq!(
            "WLK".parse::<WorkoutKind>().unwrap(),
            WorkoutKind::SportsWalking
        );
    }

    #[test]
    fn code_match_is_exact_and_case_sensitive() {
        for raw in ["run", "Run", " RUN", "RUN ", "XYZ", "", "RUNS"] {
            let err = raw.parse::<WorkoutKind>().unwrap_err();
            assert!(
                matches!(&err, WorkoutError::InvalidWorkoutCode { code } if code == raw),
                "{raw:?} -> {err:?}"
            );
        }
    }

    #[test]
    fn codes_round_trip_and_names_match_labels() {
        for kind in WorkoutKind::ALL {
            assert_eq!(kind.code().parse::<WorkoutKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!(WorkoutKind::SportsWalking.name(), "SportsWalking");
    }

    #[test]
    fn summary_serializes_kind_as_label() {
        let s = WorkoutSummary {
            kind: WorkoutKind::Running,
            duration: 1.0,
            distance: 9.75,
            mean_speed: 9.75,
            calories: 797.805,
        };
        let v = serde_json::to_value(s).unwrap();
        assert_eq!(v["kind"], "Running");
        assert_eq!(v["distance"], 9.75);
        assert_eq!(v["mean_speed"], 9.75);
    }
}
