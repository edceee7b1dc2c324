pub mod chart;
pub mod number_format;
pub mod site_config;
pub mod storage;
