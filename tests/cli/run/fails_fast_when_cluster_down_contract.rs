use crate::harness::{ClusterBehavior, TestContext};
use predicates::prelude::*;

#[test]
fn run_fails_fast_when_cluster_down() {
    let ctx = TestContext::with_cluster(ClusterBehavior::Down);

    ctx.cli()
        .arg("run")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("❌ cluster status"))
        .stderr(predicate::str::contains(
            "Smoke test failed: Strict invocation `wfcli status` exited with code 1: cluster unavailable",
        ));

    assert_eq!(ctx.wfcli_calls(), vec!["status"]);
}
