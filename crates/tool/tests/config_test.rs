use rstest::rstest;
use schedule_bag_core::codec::AbsentPolicy;
use schedule_bag_tool::config::ToolConfig;
use std::{collections::HashMap, path::PathBuf};
use tracing::Level;

fn load(vars: &[(&str, &str)]) -> eyre::Result<ToolConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ToolConfig::from_vars(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = load(&[]).expect("Empty environment should load");

    assert_eq!(config.absent_policy, AbsentPolicy::Omit);
    assert!(!config.strict_fields);
    assert_eq!(config.codegen_out, None);
    assert_eq!(config.log_level, Level::INFO);
}

#[test]
fn test_all_values_set() {
    let config = load(&[
        ("BAG_ABSENT_POLICY", "null"),
        ("BAG_STRICT_FIELDS", "true"),
        ("BAG_CODEGEN_OUT", "out/schedulePreferenceAssignmentBag.d.ts"),
        ("LOG_LEVEL", "debug"),
    ])
    .expect("Valid environment should load");

    assert_eq!(config.absent_policy, AbsentPolicy::EmitNull);
    assert!(config.strict_fields);
    assert_eq!(
        config.codegen_out,
        Some(PathBuf::from("out/schedulePreferenceAssignmentBag.d.ts"))
    );
    assert_eq!(config.log_level, Level::DEBUG);

    let options = config.codec_options();
    assert_eq!(options.absent_policy, AbsentPolicy::EmitNull);
    assert!(options.strict_fields);
}

#[rstest]
#[case("BAG_ABSENT_POLICY", "skip")]
#[case("BAG_ABSENT_POLICY", "NULL")]
#[case("BAG_STRICT_FIELDS", "yes")]
fn test_invalid_values(#[case] key: &str, #[case] value: &str) {
    let err = load(&[(key, value)]).unwrap_err();

    assert!(err.to_string().contains(key));
}

#[rstest]
#[case("0", false)]
#[case("false", false)]
#[case("1", true)]
fn test_strict_fields_values(#[case] value: &str, #[case] expected: bool) {
    let config = load(&[("BAG_STRICT_FIELDS", value)]).unwrap();

    assert_eq!(config.strict_fields, expected);
}

#[test]
fn test_unknown_log_level_falls_back_to_info() {
    let config = load(&[("LOG_LEVEL", "verbose")]).unwrap();

    assert_eq!(config.log_level, Level::INFO);
}

#[test]
fn test_blank_codegen_out_means_stdout() {
    let config = load(&[("BAG_CODEGEN_OUT", "  ")]).unwrap();

    assert_eq!(config.codegen_out, None);
}
