use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
  Command::new(env!("CARGO_BIN_EXE_suggest_codec"))
    .args(args)
    .output()
    .expect("failed to run suggest_codec")
}

fn stdout(output: &Output) -> &str {
  std::str::from_utf8(&output.stdout).unwrap()
}

#[test]
fn monotonic_datetime() {
  let output = run(&["--data_type", "DateTime", "--is_monotonic", "true"]);
  assert!(output.status.success());
  assert_eq!(stdout(&output), "CODEC(DoubleDelta, ZSTD(1))\n");
  assert!(output.stderr.is_empty());
}

#[test]
fn monotonic_defaults_to_false() {
  let output = run(&["--data_type", "DateTime"]);
  assert!(output.status.success());
  assert_eq!(stdout(&output), "CODEC(Delta, ZSTD(1))\n");
}

#[test]
fn unknown_type_and_flag() {
  let output = run(&["--data_type", "UUID", "--is_monotonic", "sometimes"]);
  assert!(output.status.success());
  assert_eq!(stdout(&output), "CODEC(ZSTD(1))\n");
}

#[test]
fn negative_number_flag_is_false() {
  let output = run(&["--data_type", "UInt64", "--is_monotonic", "-1"]);
  assert!(output.status.success());
  assert_eq!(stdout(&output), "CODEC(ZSTD(1))\n");
}

#[test]
fn missing_data_type_fails() {
  let output = run(&["--is_monotonic", "true"]);
  assert!(!output.status.success());
  assert!(output.stdout.is_empty());
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("--data_type"), "{}", stderr);
}

#[test]
fn debug_logs_stay_off_stdout() {
  let output = run(&["--data_type", "Float64", "--log-level", "debug"]);
  assert!(output.status.success());
  assert_eq!(stdout(&output), "CODEC(Gorilla, ZSTD(1))\n");
  assert!(!output.stderr.is_empty());
}
