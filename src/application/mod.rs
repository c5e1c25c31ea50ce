// Application layer - Use cases over the domain
pub mod chart_builder;
pub mod dashboard_service;
pub mod employee_source;
