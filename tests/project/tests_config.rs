//! Configuration tests.

use lexis::ide::AnalysisHost;
use lexis::project::IndexConfig;
use rstest::rstest;

#[rstest]
#[case("rs", true)]
#[case("RS", true)]
#[case("java", true)]
#[case("md", false)]
#[case("", false)]
fn test_default_extensions(#[case] ext: &str, #[case] accepted: bool) {
    assert_eq!(IndexConfig::default().accepts_extension(ext), accepted);
}

#[test]
fn test_partial_json_config_keeps_defaults() {
    let config: IndexConfig = serde_json::from_str(r#"{"workspaceSymbolLimit": 2}"#).unwrap();
    assert_eq!(config.workspace_symbol_limit, 2);
    assert_eq!(config.max_file_size, IndexConfig::default().max_file_size);
}

#[test]
fn test_symbol_limit_applies_to_search() {
    let config = IndexConfig {
        workspace_symbol_limit: 2,
        ..IndexConfig::default()
    };
    let mut host = AnalysisHost::with_config(config);
    host.index_text("file:///a.rs", "fn a1() {}\nfn a2() {}\nfn a3() {}\n");

    assert_eq!(host.analysis().workspace_symbols("a").len(), 2);
}
