// Domain layer - Records, chart configurations and derived statistics
pub mod chart;
pub mod dashboard;
pub mod employee;
pub mod statistics;
