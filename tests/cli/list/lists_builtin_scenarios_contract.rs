use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn list_shows_builtin_scenarios_without_running_them() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. cluster status (strict): wfcli status"))
        .stdout(predicate::str::contains(
            "2. unreachable cluster (expect failure): wfcli --url http://127.0.0.1:1337 status",
        ));

    assert!(ctx.wfcli_calls().is_empty());
}

#[test]
fn list_alias_and_timeout_flag() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["ls", "--timeout-secs", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(strict) [timeout 15s]: wfcli status"));
}
