use shared::Holiday;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "use_holidays";

/// Local mirror of the server-side holiday collection.
///
/// Arrival-ordered: fetch replaces the whole `Vec`, create appends,
/// delete filters. Never re-sorted.
#[derive(Clone, PartialEq)]
pub struct HolidaysState {
    pub holidays: Vec<Holiday>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseHolidaysResult {
    pub state: HolidaysState,
    pub actions: UseHolidaysActions,
}

#[derive(Clone)]
pub struct UseHolidaysActions {
    /// Re-fetch the collection from the server
    pub refresh: Callback<()>,
    /// Delete a holiday by id, then drop it from the local collection
    pub remove: Callback<String>,
    /// Append a server-returned record to the local collection
    pub append: Callback<Holiday>,
    /// Dismiss the current error banner
    pub clear_error: Callback<()>,
}

/// The collection with the matching record filtered out. Ids are unique
/// server-side, so at most one record goes; no match leaves the
/// collection as it was.
fn without_id(holidays: &[Holiday], id: &str) -> Vec<Holiday> {
    holidays.iter().filter(|h| h.id != id).cloned().collect()
}

/// The collection with the server-returned record appended, preserving
/// arrival order.
fn with_appended(mut holidays: Vec<Holiday>, holiday: Holiday) -> Vec<Holiday> {
    holidays.push(holiday);
    holidays
}

#[hook]
pub fn use_holidays(api_client: &ApiClient) -> UseHolidaysResult {
    let holidays = use_state(Vec::<Holiday>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    let refresh = {
        let api_client = api_client.clone();
        let holidays = holidays.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let holidays = holidays.clone();
            let loading = loading.clone();
            let error = error.clone();

            error.set(None);
            spawn_local(async move {
                match api_client.get_holidays().await {
                    Ok(data) => {
                        Logger::debug_with_component(
                            COMPONENT,
                            &format!("Fetched {} holidays", data.len()),
                        );
                        holidays.set(data);
                    }
                    Err(e) => {
                        // Prior collection stays untouched on failure
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Failed to fetch holidays: {}", e),
                        );
                        error.set(Some(format!("Failed to load holidays: {}", e)));
                    }
                }
                loading.set(false);
            });
        })
    };

    let remove = {
        let api_client = api_client.clone();
        let error = error.clone();

        use_callback(holidays.clone(), move |id: String, holidays| {
            let api_client = api_client.clone();
            let holidays = holidays.clone();
            let error = error.clone();

            error.set(None);
            spawn_local(async move {
                match api_client.delete_holiday(&id).await {
                    Ok(()) => {
                        Logger::info_with_component(
                            COMPONENT,
                            &format!("Removed holiday {}", id),
                        );
                        holidays.set(without_id(&holidays, &id));
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Failed to remove holiday {}: {}", id, e),
                        );
                        error.set(Some(format!("Failed to remove holiday: {}", e)));
                    }
                }
            });
        })
    };

    let append = {
        use_callback(holidays.clone(), move |holiday: Holiday, holidays| {
            holidays.set(with_appended((**holidays).clone(), holiday));
        })
    };

    let clear_error = {
        let error = error.clone();
        use_callback((), move |_, _| {
            error.set(None);
        })
    };

    let state = HolidaysState {
        holidays: (*holidays).clone(),
        loading: *loading,
        error: (*error).clone(),
    };

    let actions = UseHolidaysActions {
        refresh,
        remove,
        append,
        clear_error,
    };

    UseHolidaysResult { state, actions }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday(id: &str, date: &str, title: &str) -> Holiday {
        Holiday {
            id: id.to_string(),
            date: date.to_string(),
            title: title.to_string(),
        }
    }

    fn sample_collection() -> Vec<Holiday> {
        vec![
            holiday("a1", "2025-12-25T00:00:00Z", "Christmas"),
            holiday("b2", "2026-01-01", "New Year"),
            holiday("c3", "2026-07-04", "Independence Day"),
        ]
    }

    #[test]
    fn test_without_id_removes_exactly_the_matching_record() {
        let remaining = without_id(&sample_collection(), "b2");

        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|h| h.id != "b2"));
        // Arrival order of the survivors is untouched
        assert_eq!(remaining[0].id, "a1");
        assert_eq!(remaining[1].id, "c3");
    }

    #[test]
    fn test_without_id_with_unknown_id_leaves_collection_unchanged() {
        let before = sample_collection();
        let after = without_id(&before, "does-not-exist");
        assert_eq!(after, before);
    }

    #[test]
    fn test_with_appended_adds_exactly_one_record_at_the_end() {
        let before = sample_collection();
        let created = holiday("d4", "2026-10-31", "Halloween");

        let after = with_appended(before.clone(), created.clone());

        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after[..before.len()], before[..]);
        let appended = after.last().unwrap();
        assert_eq!(appended.title, "Halloween");
        assert_eq!(appended.date, "2026-10-31");
    }

    #[test]
    fn test_with_appended_on_empty_collection() {
        let created = holiday("a1", "2025-12-25", "Christmas");
        let after = with_appended(Vec::new(), created);
        assert_eq!(after.len(), 1);
    }
}
