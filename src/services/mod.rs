pub mod dashboard_config;
pub mod dashboard_report;
pub mod kpi_engine;
pub mod kpi_plot;
pub mod sample_generator;
pub mod session;
