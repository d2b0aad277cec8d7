use balance_core::{
    core::{CategoryManager, PersonManager},
    domain::Colour,
};

fn book_with_jeff() -> PersonManager {
    let mut people = PersonManager::new();
    people.add_person_by_name("Jeff");

    let jeff = people.person_by_name_mut("Jeff").expect("person");
    jeff.create_account("JeffsAccount");
    jeff.account_by_name_mut("JeffsAccount")
        .expect("account")
        .add_income("Salary", 3000.0, "1");
    people.touch();
    people
}

#[test]
fn first_revision_flow_prints_account_and_date() {
    let people = book_with_jeff();

    let account = people
        .person_by_name("Jeff")
        .and_then(|person| person.account_by_name("JeffsAccount"))
        .expect("account");

    // Resolve each income's back-reference the way the UI labels rows.
    let rows: Vec<(String, String)> = account
        .incomes()
        .iter()
        .map(|income| {
            let owner = people
                .people()
                .iter()
                .flat_map(|person| person.accounts().iter())
                .find(|candidate| candidate.id == income.account_id)
                .expect("income back-reference resolves");
            (owner.name.clone(), income.date.clone())
        })
        .collect();

    assert_eq!(rows, vec![("JeffsAccount".to_string(), "1".to_string())]);
}

#[test]
fn one_category_is_shared_by_many_bills() {
    let mut people = book_with_jeff();
    let mut categories = CategoryManager::new();
    let utilities = categories.add_category_by_name("Utilities", Colour::new(0, 128, 255));

    let account = people
        .person_by_name_mut("Jeff")
        .and_then(|person| person.account_by_name_mut("JeffsAccount"))
        .expect("account");
    let electric = account.add_bill("Electric", 95.0, "14", utilities);
    account.add_bill("Water", 40.0, "14", utilities);

    account.remove_bill(electric).expect("bill present");

    // The category outlives the removed bill and is still referenced.
    assert!(categories.category(utilities).is_some());
    assert_eq!(account.bills()[0].category_id(), Some(utilities));
}

#[test]
fn transfers_can_cross_people() {
    let mut people = PersonManager::new();
    people.add_person_by_name("Jeff");
    people.add_person_by_name("Clinton");

    let jeff_account = people
        .person_by_name_mut("Jeff")
        .expect("person")
        .create_account("JeffsAccount");
    let clinton_account = people
        .person_by_name_mut("Clinton")
        .expect("person")
        .create_account("ClintonsAccount");

    people
        .person_by_name_mut("Jeff")
        .and_then(|person| person.account_mut(jeff_account))
        .expect("account")
        .add_transfer_out("Rent share", 400.0, "1", clinton_account);
    people
        .person_by_name_mut("Clinton")
        .and_then(|person| person.account_mut(clinton_account))
        .expect("account")
        .add_transfer_in("Rent share", 400.0, "1", jeff_account);

    let outgoing = &people
        .person_by_name("Jeff")
        .and_then(|person| person.account(jeff_account))
        .expect("account")
        .transfers_out()[0];
    assert_eq!(outgoing.target_account_id(), Some(clinton_account));

    let incoming = &people
        .person_by_name("Clinton")
        .and_then(|person| person.account(clinton_account))
        .expect("account")
        .transfers_in()[0];
    assert_eq!(incoming.source_account_id(), Some(jeff_account));
}

#[test]
fn removal_does_not_cascade() {
    let mut people = PersonManager::new();
    people.add_person_by_name("Jeff");
    people.add_person_by_name("Clinton");

    let jeff_account = people
        .person_by_name_mut("Jeff")
        .expect("person")
        .create_account("JeffsAccount");
    let clinton_account = people
        .person_by_name_mut("Clinton")
        .expect("person")
        .create_account("ClintonsAccount");

    people
        .person_by_name_mut("Clinton")
        .and_then(|person| person.account_mut(clinton_account))
        .expect("account")
        .add_transfer_in("Seed money", 100.0, "1", jeff_account);

    let jeff_id = people.person_by_name("Jeff").expect("person").id;
    let removed = people.remove_person(jeff_id).expect("jeff present");

    // The removed person's account went with them, but the transfer still
    // carries the now-dangling source id.
    assert_eq!(removed.accounts()[0].owner_id, jeff_id);
    let incoming = &people
        .person_by_name("Clinton")
        .and_then(|person| person.account(clinton_account))
        .expect("account")
        .transfers_in()[0];
    assert_eq!(incoming.source_account_id(), Some(jeff_account));
}

#[test]
fn book_serializes_with_entity_names() {
    let people = book_with_jeff();
    let json = serde_json::to_string(&people).expect("serialize");
    assert!(json.contains("\"JeffsAccount\""));
    assert!(json.contains("\"Salary\""));
}
