// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client side of the activities API: remote facade, cache store and the
//! date-grouped projection used for list rendering.

pub mod api;
pub mod grouping;
pub mod store;

pub use api::{ActivitiesApi, HttpActivitiesApi};
pub use grouping::{group_by_date, DateGroup, GroupingError};
pub use store::{ActivityStore, StoreState};
