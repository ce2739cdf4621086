use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::date_utils::{current_year_month, shift_month};

/// The year/month pair currently on screen. No day component, so month
/// paging can never overflow a shorter month.
#[derive(Clone, Copy, PartialEq)]
pub struct MonthAnchor {
    pub year: i32,
    pub month: u32,
}

pub struct UseMonthNavigationResult {
    pub anchor: MonthAnchor,
    pub actions: UseMonthNavigationActions,
}

#[derive(Clone)]
pub struct UseMonthNavigationActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
}

#[hook]
pub fn use_month_navigation() -> UseMonthNavigationResult {
    let anchor = use_state(|| {
        let (year, month) = current_year_month();
        MonthAnchor { year, month }
    });

    let prev_month = {
        use_callback(anchor.clone(), move |_: MouseEvent, anchor| {
            let (year, month) = shift_month(anchor.year, anchor.month, -1);
            anchor.set(MonthAnchor { year, month });
        })
    };

    let next_month = {
        use_callback(anchor.clone(), move |_: MouseEvent, anchor| {
            let (year, month) = shift_month(anchor.year, anchor.month, 1);
            anchor.set(MonthAnchor { year, month });
        })
    };

    UseMonthNavigationResult {
        anchor: *anchor,
        actions: UseMonthNavigationActions {
            prev_month,
            next_month,
        },
    }
}
