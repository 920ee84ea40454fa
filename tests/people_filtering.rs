//! End-to-end scenarios: a raw filter map from a server, a small domain
//! model, and the full build → select → apply → serialize cycle.

use serde_json::json;
use sift::{
    accessor, filters_from_raw, Filter, FilterError, FilterKey, FilterOps, Filterable, Filtered,
    RawFilterMap, SerializeScope, ValueAccessor,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Gender {
    Male,
    Female,
}

impl Gender {
    fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: String,
    age: i64,
    gender: Gender,
}

impl Person {
    fn new(name: &str, age: i64, gender: Gender) -> Self {
        Self {
            name: name.to_string(),
            age,
            gender,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PersonField {
    Age,
    Gender,
}

impl FilterKey for PersonField {
    const ALL: &'static [Self] = &[Self::Age, Self::Gender];

    fn raw(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Gender => "gender",
        }
    }
}

impl Filterable for Person {
    fn accessor_for(field: &str) -> Option<ValueAccessor<Self>> {
        match PersonField::from_name(field)? {
            PersonField::Age => Some(accessor(|p: &Person| p.age)),
            PersonField::Gender => Some(accessor(|p: &Person| p.gender.as_str())),
        }
    }
}

fn server_filters() -> RawFilterMap {
    serde_json::from_value(json!({
        "age": [10, 11, 12],
        "gender": ["male", "female"],
    }))
    .unwrap()
}

fn people() -> Vec<Person> {
    vec![
        Person::new("Ana", 10, Gender::Female),
        Person::new("Ben", 11, Gender::Male),
        Person::new("Cleo", 11, Gender::Female),
        Person::new("Dan", 12, Gender::Male),
    ]
}

#[test]
fn raw_map_yields_one_filter_per_recognized_field() {
    let filters = filters_from_raw::<Person>(&server_filters());
    assert_eq!(filters.len(), 2);
    assert_eq!(filters.lookup("age").unwrap().values().len(), 3);
    assert_eq!(filters.lookup("gender").unwrap().values().len(), 2);
}

#[test]
fn toggling_age_selects_exactly_the_eleven_year_olds() {
    let mut filters = filters_from_raw::<Person>(&server_filters());
    let mut age = filters.lookup("age").unwrap().clone();
    age.toggle(&11.into()).unwrap();
    filters.update(age).unwrap();

    let matching = people().filtered(&filters);
    assert_eq!(
        matching,
        vec![
            Person::new("Ben", 11, Gender::Male),
            Person::new("Cleo", 11, Gender::Female),
        ]
    );
}

#[test]
fn combined_filters_intersect() {
    let mut filters = filters_from_raw::<Person>(&server_filters());
    let mut age = filters.lookup("age").unwrap().clone();
    age.toggle(&11.into()).unwrap();
    filters.update(age).unwrap();
    let mut gender = filters.lookup("gender").unwrap().clone();
    gender.toggle(&"female".into()).unwrap();
    filters.update(gender).unwrap();

    let matching = people().filtered(&filters);
    assert_eq!(matching, vec![Person::new("Cleo", 11, Gender::Female)]);
}

#[test]
fn gender_matching_is_case_insensitive() {
    // A server sending "Female" still matches a domain value rendered "female".
    let raw: RawFilterMap =
        serde_json::from_value(json!({ "gender": ["Female"] })).unwrap();
    let mut filters = filters_from_raw::<Person>(&raw);
    let mut gender = filters.lookup("gender").unwrap().clone();
    gender.toggle(&"Female".into()).unwrap();
    filters.update(gender).unwrap();

    let matching = people().filtered(&filters);
    assert!(matching.iter().all(|p| p.gender == Gender::Female));
    assert_eq!(matching.len(), 2);
}

#[test]
fn empty_filter_collection_returns_everyone_in_order() {
    let all = people();
    assert_eq!(all.filtered(&[]), all);
}

#[test]
fn unconstrained_filters_return_everyone() {
    let filters = filters_from_raw::<Person>(&server_filters());
    assert_eq!(people().filtered(&filters), people());
}

#[test]
fn unknown_fields_from_the_server_are_ignored() {
    let raw: RawFilterMap = serde_json::from_value(json!({
        "age": [10, 11, 12],
        "shoe_size": [42, 43],
    }))
    .unwrap();
    let filters = filters_from_raw::<Person>(&raw);
    assert_eq!(filters.len(), 1);
    assert_eq!(filters[0].raw_key(), "age");
}

#[test]
fn round_trip_preserves_recognized_fields_and_values() {
    let raw = server_filters();
    let filters = filters_from_raw::<Person>(&raw);
    assert_eq!(filters.serialize(SerializeScope::All), raw);
}

#[test]
fn active_selection_serializes_for_transmission() {
    let mut filters = filters_from_raw::<Person>(&server_filters());
    let mut age = filters.lookup("age").unwrap().clone();
    age.toggle(&10.into()).unwrap();
    age.toggle(&11.into()).unwrap();
    filters.update(age).unwrap();

    let raw = filters.serialize(SerializeScope::ActiveOnly);
    assert_eq!(raw["age"], vec![json!(10), json!(11)]);
    assert!(raw["gender"].is_empty());
}

#[test]
fn selecting_a_value_the_server_never_offered_is_rejected() {
    let mut filters = filters_from_raw::<Person>(&server_filters());
    let mut age = filters.lookup("age").unwrap().clone();
    let err = age.toggle(&99.into()).unwrap_err();
    assert!(matches!(err, FilterError::UndefinedValue { .. }));
    assert!(age.active_values().is_empty());
}

#[test]
fn updating_with_an_unknown_filter_is_rejected() {
    let mut filters = filters_from_raw::<Person>(&server_filters());
    let stray: Filter<Person> =
        Filter::new("shoe_size", accessor(|p: &Person| p.age), vec![42.into()]);
    assert_eq!(
        filters.update(stray).unwrap_err(),
        FilterError::FilterNotFound("shoe_size".into())
    );
}
