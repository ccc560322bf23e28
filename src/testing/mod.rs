
pub use fake_runner::{FakeCommandRunner, FakeReply};
