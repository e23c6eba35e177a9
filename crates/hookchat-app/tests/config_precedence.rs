use clap::Parser;
use hookchat::{AppConfig, Cli};
use pretty_assertions::assert_eq;

// Environment variables are process-wide, so every env-dependent check
// lives in this single test.
#[test]
fn test_env_url_sits_between_cli_flag_and_config_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "webhook_url = \"http://file/hook\"\n").unwrap();
    let config_arg = path.to_str().unwrap();

    std::env::remove_var("HOOKCHAT_CONFIG");
    std::env::set_var("HOOKCHAT_WEBHOOK_URL", "http://env/hook");

    let cli = Cli::try_parse_from(["hookchat", "--config", config_arg]).unwrap();
    let config = AppConfig::resolve(&cli, temp.path().to_path_buf()).unwrap();
    assert_eq!(config.webhook_url, "http://env/hook");

    let cli = Cli::try_parse_from([
        "hookchat",
        "--config",
        config_arg,
        "--webhook-url",
        "http://cli/hook",
    ])
    .unwrap();
    let config = AppConfig::resolve(&cli, temp.path().to_path_buf()).unwrap();
    assert_eq!(config.webhook_url, "http://cli/hook");

    std::env::remove_var("HOOKCHAT_WEBHOOK_URL");

    let cli = Cli::try_parse_from(["hookchat", "--config", config_arg]).unwrap();
    let config = AppConfig::resolve(&cli, temp.path().to_path_buf()).unwrap();
    assert_eq!(config.webhook_url, "http://file/hook");
}
