use integration_tests::people::{Address, Person};
use safecall_core::{of, prepare, AbsentError, Extract, Prepared};

fn springfield_resident() -> Person {
    Person::at(Address::new("123 Main St", "Springfield"))
}

fn city_of() -> Prepared<Person, String> {
    prepare::<Person>()
        .step(|p| p.address)
        .step_map(|a| a.city)
}

#[test]
fn single_shot_chain_reaches_the_city() {
    let city = of(springfield_resident())
        .step(|p| p.address)
        .step_map(|a| a.city)
        .into_option();

    assert_eq!(city, Some("Springfield".to_string()));
}

#[test]
fn single_shot_chain_stops_at_a_missing_address() {
    let chain = of(Person::of_no_fixed_abode())
        .step(|p| p.address)
        .step_map(|a| a.city);

    assert_eq!(chain.get(), None);
    assert_eq!(chain.get_or("Unknown".to_string()), "Unknown");
}

#[test]
fn prepared_chain_reaches_the_city() {
    let result = city_of().on(springfield_resident());
    assert_eq!(result.get(), Some(&"Springfield".to_string()));
}

#[test]
fn prepared_chain_handles_a_missing_address() {
    let chain = city_of();
    let person = Person::of_no_fixed_abode();

    assert_eq!(chain.on(person.clone()).get(), None);
    assert_eq!(
        chain.on(person.clone()).get_or("Unknown".to_string()),
        "Unknown"
    );
    assert_eq!(chain.on(person).into_option(), None);
}

#[test]
fn prepared_chain_handles_an_absent_person() {
    let result = city_of().on(None);
    assert_eq!(result.into_option(), None);
}

#[test]
fn absence_becomes_a_typed_error_on_require() {
    assert_eq!(city_of().on(None).require(), Err(AbsentError));
    assert_eq!(
        city_of().on(springfield_resident()).require(),
        Ok("Springfield".to_string())
    );
}

#[test]
fn mapping_with_defaults_over_an_address_book() {
    let people = vec![springfield_resident(), Person::of_no_fixed_abode()];

    let cities: Vec<String> = people
        .into_iter()
        .map(Some)
        .map(city_of().as_fn_or("Unknown".to_string()))
        .collect();

    assert_eq!(
        cities,
        vec!["Springfield".to_string(), "Unknown".to_string()]
    );
}

#[test]
fn filtering_out_unknown_cities() {
    let people = vec![
        springfield_resident(),
        Person::at(Address::new("456 Secondary St", "Los Angeles")),
        Person::of_no_fixed_abode(),
    ];

    let cities: Vec<String> = people.into_iter().filter_map(city_of().as_fn()).collect();

    assert_eq!(
        cities,
        vec!["Springfield".to_string(), "Los Angeles".to_string()]
    );
}

#[test]
fn optional_results_over_an_address_book() {
    let people = vec![springfield_resident(), Person::of_no_fixed_abode()];

    let cities: Vec<Option<String>> = people
        .into_iter()
        .map(Some)
        .map(city_of().as_opt_fn())
        .collect();

    assert_eq!(cities, vec![Some("Springfield".to_string()), None]);
}

#[test]
fn one_prepared_chain_is_shared_across_threads() {
    let chain = city_of();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let chain = &chain;
                scope.spawn(move || chain.on(springfield_resident()).into_option())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some("Springfield".to_string()));
        }
    });
}
