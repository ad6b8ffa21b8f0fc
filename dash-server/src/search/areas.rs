//! Area dropdown options

use std::collections::BTreeSet;

use shared::models::AreaOption;

use super::filter::ALL_AREAS;

/// Label shown for the synthetic "every area" option
pub const ALL_AREAS_LABEL: &str = "All Areas";

/// Dropdown options: `all` first, then the distinct labels in sorted order
pub fn area_options<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<AreaOption> {
    let distinct: BTreeSet<&str> = labels.into_iter().collect();

    std::iter::once(AreaOption {
        value: ALL_AREAS.to_string(),
        label: ALL_AREAS_LABEL.to_string(),
    })
    .chain(distinct.into_iter().map(|area| AreaOption {
        value: area.to_string(),
        label: area.to_string(),
    }))
    .collect()
}
