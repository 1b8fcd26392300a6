pub mod contact_form;
pub mod metric_row;
pub mod navigation;
pub mod performance_monitor;
