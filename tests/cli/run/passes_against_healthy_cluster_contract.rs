use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn run_passes_against_healthy_cluster() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ cluster status"))
        .stdout(predicate::str::contains("✅ unreachable cluster"))
        .stdout(predicate::str::contains("Smoke run passed: 2 scenario(s)"));

    assert_eq!(ctx.wfcli_calls(), vec!["status", "--url http://127.0.0.1:1337 status"]);
}
