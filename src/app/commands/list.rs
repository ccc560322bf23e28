use crate::domain::ScenarioScript;

/// Render the scenario plan, one line per scenario.
pub fn render(script: &ScenarioScript) -> Vec<String> {
    script
        .scenarios()
        .iter()
        .enumerate()
        .map(|(index, scenario)| {
            let timeout = scenario
                .timeout
                .map(|t| format!(" [timeout {}s]", t.as_secs()))
                .unwrap_or_default();
            format!(
                "{}. {} ({}){}: {}",
                index + 1,
                scenario.name,
                scenario.check,
                timeout,
                scenario.invocation
            )
        })
        .collect()
}
