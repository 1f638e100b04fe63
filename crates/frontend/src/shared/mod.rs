pub mod api_utils;
pub mod client_log;
pub mod components;
pub mod icons;
pub mod site;
