//! Integration tests for evaluating settings by dotted path.
//!
//! Exercises plain and nested lookups, lazy settings that derive their value
//! from siblings, missing-setting reporting, and typed decoding of layered
//! settings loaded from TOML and JSON text.
#![cfg(feature = "toml")]

use anyhow::{Result, anyhow, ensure};
use lazy_settings::{
    SettingValue, Settings, SettingsError, evaluate_setting, evaluate_setting_as, merge_objects,
};
use rstest::{fixture, rstest};
use serde::Deserialize;

#[fixture]
fn layered() -> Result<Settings> {
    let defaults = Settings::from_toml_str(
        r#"
        name = "registry"

        [server]
        host = "0.0.0.0"
        port = 8080

        [[mirrors]]
        host = "eu.example.com"

        [[mirrors]]
        host = "us.example.com"
        "#,
    )?;
    let environment = Settings::from_json_str(r#"{"server": {"port": 9090}}"#)?;
    let derived = Settings::new().with(
        "server",
        Settings::new().with(
            "address",
            SettingValue::try_lazy(|settings: &Settings| {
                let host: String = settings.evaluate_as("server.host")?;
                let port: u16 = settings.evaluate_as("server.port")?;
                Ok(format!("{host}:{port}"))
            }),
        ),
    );
    Ok(merge_objects([defaults, environment, derived]))
}

#[rstest]
#[case::top_level("name", "registry")]
#[case::nested("server.host", "0.0.0.0")]
#[case::array_index("mirrors[1].host", "us.example.com")]
#[case::numeric_segment("mirrors.0.host", "eu.example.com")]
#[case::lazy("server.address", "0.0.0.0:9090")]
fn evaluates_layered_settings(
    layered: Result<Settings>,
    #[case] property: &str,
    #[case] expected: &str,
) -> Result<()> {
    let settings = layered?;
    let value = evaluate_setting(Some(&settings), property)?;
    ensure!(
        value.as_str() == Some(expected),
        "{property}: expected {expected}, got {value:?}"
    );
    Ok(())
}

#[derive(Debug, Deserialize)]
struct Server {
    host: String,
    port: u16,
}

#[rstest]
fn decodes_sections_into_structs(layered: Result<Settings>) -> Result<()> {
    let settings = layered?;
    let mut plain = settings.clone();
    if let Some(server) = plain
        .get_mut("server")
        .and_then(SettingValue::as_mapping_mut)
    {
        server.remove("address");
    }
    let server: Server = evaluate_setting_as(Some(&plain), "server")?;
    ensure!(server.host == "0.0.0.0", "unexpected host {}", server.host);
    ensure!(server.port == 9090, "unexpected port {}", server.port);
    Ok(())
}

#[rstest]
#[case::missing_path("missing.path")]
#[case::missing_leaf("server.missing")]
#[case::through_scalar("name.first")]
fn reports_missing_settings_with_their_path(
    layered: Result<Settings>,
    #[case] property: &str,
) -> Result<()> {
    let settings = layered?;
    let err = evaluate_setting(Some(&settings), property)
        .err()
        .ok_or_else(|| anyhow!("{property} should be missing"))?;
    ensure!(
        matches!(&*err, SettingsError::NotFound { .. }),
        "unexpected error {err:?}"
    );
    ensure!(
        err.to_string().contains(property),
        "message {err} should mention {property}"
    );
    Ok(())
}

#[rstest]
fn absent_settings_behave_like_an_empty_mapping() -> Result<()> {
    let err = evaluate_setting(None, "foo")
        .err()
        .ok_or_else(|| anyhow!("nothing can be found in absent settings"))?;
    ensure!(err.is_not_found(), "unexpected error {err:?}");
    Ok(())
}

#[rstest]
fn explicit_null_counts_as_missing() -> Result<()> {
    let settings = Settings::from_json_str(r#"{"foo": null}"#)?;
    let err = evaluate_setting(Some(&settings), "foo")
        .err()
        .ok_or_else(|| anyhow!("null must be reported as missing"))?;
    ensure!(err.to_string() == "Setting not found: foo", "unexpected message {err}");
    Ok(())
}

#[rstest]
fn lazy_errors_name_the_missing_dependency() -> Result<()> {
    let settings = Settings::new().with(
        "url",
        SettingValue::try_lazy(|settings: &Settings| {
            let host: String = settings.evaluate_as("host")?;
            Ok(format!("https://{host}"))
        }),
    );
    let err = evaluate_setting(Some(&settings), "url")
        .err()
        .ok_or_else(|| anyhow!("host is not configured"))?;
    ensure!(
        err.property() == Some("host"),
        "expected the dependency to be reported, got {err:?}"
    );
    Ok(())
}
