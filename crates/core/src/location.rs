//! Grouping of venues by their `(city, state)` location.

/// One distinct location and the items found there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationGroup<T> {
    pub city: String,
    pub state: String,
    pub items: Vec<T>,
}

/// Group `items` by the `(city, state)` pair `location_of` returns.
///
/// Groups appear in the order their location is first seen, and items keep
/// their input order within a group, so the output is deterministic for a
/// deterministic input. Matching is exact (case-sensitive).
pub fn group_by_location<T, I, F>(items: I, location_of: F) -> Vec<LocationGroup<T>>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> (&str, &str),
{
    let mut groups: Vec<LocationGroup<T>> = Vec::new();
    for item in items {
        let (city, state) = location_of(&item);
        let existing = groups
            .iter()
            .position(|g| g.city == city && g.state == state);
        match existing {
            Some(idx) => groups[idx].items.push(item),
            None => groups.push(LocationGroup {
                city: city.to_string(),
                state: state.to_string(),
                items: vec![item],
            }),
        }
    }
    groups
}
