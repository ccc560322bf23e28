use crate::harness::{ClusterBehavior, TestContext};

#[test]
fn repeated_runs_produce_same_outcome() {
    let healthy = TestContext::new();
    let first = healthy.cli().arg("run").output().expect("Failed to run wfsmoke");
    let second = healthy.cli().arg("run").output().expect("Failed to run wfsmoke");
    assert!(first.status.success());
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);

    let broken = TestContext::with_cluster(ClusterBehavior::IgnoresUrl);
    let first = broken.cli().arg("run").output().expect("Failed to run wfsmoke");
    let second = broken.cli().arg("run").output().expect("Failed to run wfsmoke");
    assert_eq!(first.status.code(), Some(1));
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stderr, second.stderr);
}
