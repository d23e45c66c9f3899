mod dashboard_data_port;

pub use dashboard_data_port::DashboardDataPort;
