// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Group activities by calendar day for list rendering.

use crate::models::Activity;
use crate::time_utils::{date_key, parse_activity_date};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// All activities that start on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "client-app/src/app/models/generated/")
)]
pub struct DateGroup {
    /// `YYYY-MM-DD`
    pub date: String,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GroupingError {
    #[error("Activity {id} has an invalid date: {date:?}")]
    InvalidDate { id: uuid::Uuid, date: String },
}

/// Sort activities by start time and split them into per-day groups.
///
/// Groups come out in chronological order and each group is sorted by
/// timestamp. Equal timestamps keep their input order. A single unparseable
/// date fails the whole projection.
pub fn group_by_date<I>(activities: I) -> Result<Vec<DateGroup>, GroupingError>
where
    I: IntoIterator<Item = Activity>,
{
    let mut dated = activities
        .into_iter()
        .map(|activity| match parse_activity_date(&activity.date) {
            Some(when) => Ok((when, activity)),
            None => Err(GroupingError::InvalidDate {
                id: activity.id,
                date: activity.date.clone(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    dated.sort_by_key(|(when, _)| *when);

    let mut groups: Vec<DateGroup> = Vec::new();
    for (when, activity) in dated {
        let key = date_key(when);
        match groups.last_mut() {
            Some(group) if group.date == key => group.activities.push(activity),
            _ => groups.push(DateGroup {
                date: key,
                activities: vec![activity],
            }),
        }
    }

    Ok(groups)
}
