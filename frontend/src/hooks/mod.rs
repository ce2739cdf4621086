pub mod use_holidays;
pub mod use_month_navigation;
