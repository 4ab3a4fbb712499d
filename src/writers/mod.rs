pub mod dashboard_writer;

pub use dashboard_writer::DashboardWriter;
