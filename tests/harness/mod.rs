#![allow(dead_code, unused_imports)]

pub(crate) mod fake_wfcli;

pub(crate) use fake_wfcli::ClusterBehavior;
pub(crate) use test_context::TestContext;
