use crate::harness::{ClusterBehavior, TestContext};
use predicates::prelude::*;

#[test]
fn run_rejects_unexpected_success_against_unreachable_endpoint() {
    let ctx = TestContext::with_cluster(ClusterBehavior::IgnoresUrl);

    ctx.cli()
        .arg("run")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("✅ cluster status"))
        .stdout(predicate::str::contains("❌ unreachable cluster"))
        .stderr(predicate::str::contains(
            "Smoke test failed: Assertion failed: `wfcli --url http://127.0.0.1:1337 status` should have failed, but exited with code 0",
        ));
}
