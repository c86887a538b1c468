use fitstat::package::sample_packages;
use fitstat::{InfoMessage, WorkoutError, WorkoutKind, read_package};
use std::process::Command;

const REFERENCE: [&str; 3] = [
    "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 1.210 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
    "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805.",
    "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
];

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fitstat"))
}

#[test]
fn sample_packages_render_reference_messages() {
    let lines: Vec<String> = sample_packages()
        .iter()
        .map(|p| InfoMessage::from(p.build().unwrap().summary()).get_message())
        .collect();
    assert_eq!(lines, REFERENCE);
}

#[test]
fn swimming_scenario_figures() {
    let s = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])
        .unwrap()
        .summary();
    assert_eq!(s.kind, WorkoutKind::Swimming);
    assert!((s.distance - 1.2096).abs() < 1e-12);
    assert!((s.mean_speed - 1.0).abs() < 1e-12);
    assert!((s.calories - 336.0).abs() < 1e-9);
}

#[test]
fn running_and_walking_scenario_figures() {
    let run = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap().summary();
    assert!((run.distance - 9.75).abs() < 1e-12);
    assert!((run.mean_speed - 9.75).abs() < 1e-12);
    assert!((run.calories - 797.805).abs() < 1e-9);

    let wlk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0])
        .unwrap()
        .summary();
    assert!((wlk.distance - 5.85).abs() < 1e-12);
    assert!((wlk.mean_speed - 5.85).abs() < 1e-12);
    assert!((wlk.calories - 157.5).abs() < 1e-9);
}

#[test]
fn unknown_code_is_rejected() {
    assert_eq!(
        read_package("XYZ", &[1.0, 2.0, 3.0]).unwrap_err(),
        WorkoutError::InvalidWorkoutCode {
            code: "XYZ".to_string()
        }
    );
}

#[test]
fn binary_prints_samples_in_order() {
    let out = bin().arg("-q").output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), REFERENCE);
}

#[test]
fn binary_fails_on_unknown_code_and_names_it() {
    let out = bin().args(["RUN:15000,1,75", "XYZ:1,1,1"]).output().unwrap();
    assert!(!out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), [REFERENCE[1]]);
    assert!(String::from_utf8(out.stderr).unwrap().contains("XYZ"));
}

#[test]
fn keep_going_processes_the_remaining_packages() {
    let out = bin()
        .args(["-k", "XYZ:1,1,1", "RUN:15000,0,75", "WLK:9000,1,75,180"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), [REFERENCE[2]]);
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("2 of 3 packages failed"));
}

#[test]
fn json_output_carries_all_fields() {
    let out = bin()
        .args(["--format", "json", "RUN:15000,1,75"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["kind"], "Running");
    assert_eq!(v["duration"], 1.0);
    assert!((v["calories"].as_f64().unwrap() - 797.805).abs() < 1e-9);
}

#[test]
fn subnormal_duration_package_fails_instead_of_printing_nan() {
    let out = bin().arg("WLK:9000,1e-310,75,180").output().unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("duration"), "{stderr}");

    assert!(matches!(
        read_package("WLK", &[9000.0, 1e-310, 75.0, 180.0]),
        Err(WorkoutError::DivisionPrecondition {
            field: "duration",
            ..
        })
    ));
}

#[test]
fn package_with_empty_field_is_a_usage_error() {
    let out = bin().arg("WLK:9000,,1,75,180").output().unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("empty value at position 2"), "{stderr}");
}
