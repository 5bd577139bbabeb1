pub mod agronomy;
pub mod forecast;
pub mod models;
pub mod report_templates;
