pub mod cli;
pub mod report;
pub mod run;
pub mod telemetry;
