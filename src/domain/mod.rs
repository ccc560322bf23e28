pub mod config;
pub mod error;
pub mod execution_result;
pub mod invocation;
pub mod scenario;

pub use config::{ConfigOverrides, Endpoint, SmokeConfig};
pub use error::AppError;
pub use execution_result::ExecutionResult;
pub use invocation::Invocation;
pub use scenario::{Check, Expectation, Scenario, ScenarioScript, ScriptState};
