pub mod add_holiday_modal;
pub mod calendar_view;
pub mod error_banner;
