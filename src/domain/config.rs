//! Scenario file models and script assembly.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, Expectation, Invocation, Scenario, ScenarioScript};

/// Default scenario file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "wfsmoke.toml";

/// CLI under test when nothing else is configured.
pub const DEFAULT_PROGRAM: &str = "wfcli";

/// Endpoint with nothing listening, used by the built-in failure scenario.
pub const DEFAULT_UNREACHABLE_URL: &str = "http://127.0.0.1:1337";

/// Cluster endpoint passed to the CLI through `--url`.
///
/// Validated on construction but kept verbatim, so `http://host:1337` is not
/// normalized to `http://host:1337/` on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Endpoint(String);

impl Endpoint {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let raw = raw.trim();
        Url::parse(raw)?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Endpoint {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Endpoint::parse(&value)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Contents of a `wfsmoke.toml` scenario file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SmokeConfig {
    /// Settings for the CLI under test.
    #[serde(default)]
    pub cli: CliSettings,
    /// Scenarios in execution order. Empty means the built-in script.
    #[serde(default)]
    pub scenarios: Vec<ScenarioConfig>,
}

/// Settings for the CLI under test.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliSettings {
    /// Program name or path.
    #[serde(default = "default_program")]
    pub program: String,
    /// Cluster endpoint forwarded to every invocation.
    #[serde(default)]
    pub url: Option<Endpoint>,
    /// Per-invocation timeout in seconds. Absent means wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Capture child output instead of streaming it.
    #[serde(default = "default_true")]
    pub capture: bool,
}

impl Default for CliSettings {
    fn default() -> Self {
        Self { program: default_program(), url: None, timeout_secs: None, capture: default_true() }
    }
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

fn default_true() -> bool {
    true
}

/// One `[[scenarios]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    pub name: String,
    /// Arguments after the program name.
    #[serde(default)]
    pub args: Vec<String>,
    /// Endpoint override for this scenario only.
    #[serde(default)]
    pub url: Option<Endpoint>,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub expect: Option<Expectation>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Command-line values layered over the scenario file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub program: Option<String>,
    pub url: Option<Endpoint>,
    pub unreachable_url: Option<Endpoint>,
    pub timeout_secs: Option<u64>,
}

impl SmokeConfig {
    pub fn from_toml(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }

    /// Resolve this configuration into an executable script.
    pub fn into_script(self, overrides: &ConfigOverrides) -> Result<ScenarioScript, AppError> {
        let SmokeConfig { mut cli, scenarios } = self;
        if let Some(program) = &overrides.program {
            cli.program = program.clone();
        }
        if let Some(url) = &overrides.url {
            cli.url = Some(url.clone());
        }
        if overrides.timeout_secs.is_some() {
            cli.timeout_secs = overrides.timeout_secs;
        }

        let scenarios = if scenarios.is_empty() {
            builtin_scenarios(overrides)
        } else {
            scenarios
        };

        let scenarios = scenarios
            .into_iter()
            .map(|scenario| build_scenario(&cli, scenario))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ScenarioScript::new(scenarios).with_capture(cli.capture))
    }
}

/// The cluster health check and its negative control.
fn builtin_scenarios(overrides: &ConfigOverrides) -> Vec<ScenarioConfig> {
    let unreachable = overrides
        .unreachable_url
        .clone()
        .unwrap_or_else(|| Endpoint(DEFAULT_UNREACHABLE_URL.to_string()));

    vec![
        ScenarioConfig {
            name: "cluster status".to_string(),
            args: vec!["status".to_string()],
            url: None,
            strict: true,
            expect: None,
            timeout_secs: None,
        },
        ScenarioConfig {
            name: "unreachable cluster".to_string(),
            args: vec!["status".to_string()],
            url: Some(unreachable),
            strict: false,
            expect: Some(Expectation::Failure),
            timeout_secs: None,
        },
    ]
}

fn build_scenario(cli: &CliSettings, config: ScenarioConfig) -> Result<Scenario, AppError> {
    let ScenarioConfig { name, args, url, strict, expect, timeout_secs } = config;

    if name.trim().is_empty() {
        return Err(AppError::config_error("Scenario name must not be empty"));
    }

    let mut argv = vec![cli.program.clone()];
    if let Some(url) = url.as_ref().or(cli.url.as_ref()) {
        argv.push("--url".to_string());
        argv.push(url.to_string());
    }
    argv.extend(args);
    let invocation = Invocation::new(argv)?;

    let timeout_secs = timeout_secs.or(cli.timeout_secs);
    if timeout_secs == Some(0) {
        return Err(AppError::config_error(format!(
            "Scenario '{}' timeout_secs must be at least 1",
            name
        )));
    }
    let timeout = timeout_secs.map(Duration::from_secs);

    let scenario = match (strict, expect) {
        (true, None) => Scenario::strict(name, invocation),
        (false, Some(expectation)) => Scenario::expecting(name, invocation, expectation),
        (true, Some(_)) => {
            return Err(AppError::config_error(format!(
                "Scenario '{}' is strict and cannot also declare `expect`",
                name
            )));
        }
        (false, None) => {
            return Err(AppError::config_error(format!(
                "Scenario '{}' must either be strict or declare `expect`",
                name
            )));
        }
    };

    Ok(scenario.with_timeout(timeout))
}
