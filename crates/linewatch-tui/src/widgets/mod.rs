pub mod form;
pub mod gauges;
pub mod sub_tabs;
