use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn list_rejects_invalid_cluster_url() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["list", "--url", "not a url"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid url"));
}

#[test]
fn list_rejects_invalid_url_in_config_file() {
    let ctx = TestContext::new();
    ctx.write_config("wfsmoke.toml", "[cli]\nurl = \"not a url\"\n");

    ctx.cli()
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid scenario file"));
}

#[test]
fn list_rejects_zero_timeout_in_config_file() {
    let ctx = TestContext::new();
    ctx.write_config(
        "wfsmoke.toml",
        "[[scenarios]]\nname = \"status\"\nargs = [\"status\"]\nstrict = true\ntimeout_secs = 0\n",
    );

    ctx.cli()
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Scenario 'status' timeout_secs must be at least 1"));
}
