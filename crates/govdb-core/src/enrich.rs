// crates/govdb-core/src/enrich.rs
use crate::model::{City, Government};
use std::collections::HashMap;

/// Attaches to every city the governorate its `government_id` points at.
///
/// Returns new records in the same order as `cities`; the inputs are only
/// borrowed. Cities with a dangling `government_id` come back with
/// `government: None`.
///
/// If several governorates share an id, the first one in `governments`
/// wins.
///
/// # Example
///
/// ```
/// use govdb_core::{enrich, City, Government};
///
/// let governments = vec![Government { id: 1, name_ar: "A".into(), name_en: "Cairo".into() }];
/// let cities = vec![City {
///     id: 10,
///     name_ar: "x".into(),
///     name_en: "y".into(),
///     government_id: 1,
///     government: None,
/// }];
///
/// let out = enrich(&cities, &governments);
/// assert_eq!(out[0].government().map(|g| g.name_en()), Some("Cairo"));
/// ```
pub fn enrich(cities: &[City], governments: &[Government]) -> Vec<City> {
    let by_id = index_by_id(governments);

    cities
        .iter()
        .map(|city| city.with_government(by_id.get(&city.government_id).map(|&g| g.clone())))
        .collect()
}

/// `id -> governorate` lookup table, first occurrence wins.
pub fn index_by_id(governments: &[Government]) -> HashMap<i32, &Government> {
    let mut by_id = HashMap::with_capacity(governments.len());
    for g in governments {
        by_id.entry(g.id).or_insert(g);
    }
    by_id
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gov(id: i32, en: &str) -> Government {
        Government {
            id,
            name_ar: format!("{en}-ar"),
            name_en: en.to_owned(),
        }
    }

    fn city(id: i32, government_id: i32) -> City {
        City {
            id,
            name_ar: format!("c{id}-ar"),
            name_en: format!("c{id}"),
            government_id,
            government: None,
        }
    }

    #[test]
    fn matched_and_dangling_references() {
        let governments = vec![gov(1, "Cairo")];
        let cities = vec![city(10, 1), city(11, 99)];

        let out = enrich(&cities, &governments);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].government(), Some(&governments[0]));
        assert!(out[1].government().is_none());
        assert_eq!(out[1].government_id, 99);
    }

    #[test]
    fn preserves_length_and_order() {
        let governments = vec![gov(1, "Cairo"), gov(2, "Giza"), gov(3, "Alexandria")];
        let cities: Vec<City> = (0..50).map(|i| city(100 - i, (i % 4) + 1)).collect();

        let out = enrich(&cities, &governments);

        assert_eq!(out.len(), cities.len());
        let ids_in: Vec<i32> = cities.iter().map(|c| c.id).collect();
        let ids_out: Vec<i32> = out.iter().map(|c| c.id).collect();
        assert_eq!(ids_in, ids_out);
        for c in &out {
            match c.government_id {
                4 => assert!(c.government.is_none()),
                id => assert_eq!(c.government().map(|g| g.id), Some(id)),
            }
        }
    }

    #[test]
    fn inputs_are_left_untouched() {
        let governments = vec![gov(1, "Cairo"), gov(2, "Giza")];
        let cities = vec![city(10, 1), city(11, 2), city(12, 7)];
        let governments_before = governments.clone();
        let cities_before = cities.clone();

        let _ = enrich(&cities, &governments);

        assert_eq!(governments, governments_before);
        assert_eq!(cities, cities_before);
        assert!(cities.iter().all(|c| c.government.is_none()));
    }

    #[test]
    fn empty_inputs() {
        assert!(enrich(&[], &[gov(1, "Cairo")]).is_empty());

        let out = enrich(&[city(1, 1), city(2, 2)], &[]);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|c| c.government.is_none()));
    }

    #[test]
    fn duplicate_ids_first_wins() {
        let governments = vec![gov(1, "First"), gov(1, "Second")];
        let out = enrich(&[city(10, 1)], &governments);
        assert_eq!(out[0].government().map(|g| g.name_en()), Some("First"));
    }
}
