mod lists_builtin_scenarios_contract;
mod rejects_invalid_url_contract;
