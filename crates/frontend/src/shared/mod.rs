pub mod api_utils;
pub mod browser;
pub mod icons;
