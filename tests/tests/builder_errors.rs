use tests::{models, DbTest};

#[derive(Debug, Default, rowcast::Model)]
#[table = "people"]
struct Person {
    #[column("_id")]
    #[key]
    #[auto]
    id: i64,

    #[column]
    name: String,

    #[column]
    age: i32,
}

fn stored(test: &DbTest, name: &str) -> Person {
    let mut person = Person {
        id: 0,
        name: name.to_string(),
        age: 30,
    };
    test.db
        .insert::<Person>()
        .values([&mut person])
        .run()
        .unwrap();
    person
}

#[test]
fn placeholder_mismatch_fails_before_reaching_storage() {
    let test = DbTest::setup(models!(Person));
    let log = test.log();
    log.clear();

    let err = test
        .db
        .select::<Person>()
        .filter("age = ? AND name = ?", [30])
        .unwrap_err();
    assert!(err.is_invalid_query());

    let err = test
        .db
        .delete::<Person>()
        .filter("age > 18", ["extra"])
        .unwrap_err();
    assert!(err.is_invalid_query());

    assert!(log.is_empty());
}

#[test]
fn empty_in_lists_are_rejected() {
    let test = DbTest::setup(models!(Person));

    let err = test
        .db
        .select::<Person>()
        .filter_in("age", Vec::<i32>::new())
        .unwrap_err();
    assert!(err.is_invalid_query());

    let err = test
        .db
        .update::<Person>()
        .or_filter_not_in("name", Vec::<String>::new())
        .unwrap_err();
    assert!(err.is_invalid_query());
}

#[test]
fn writes_need_values() {
    let test = DbTest::setup(models!(Person));

    let err = test.db.insert::<Person>().run().unwrap_err();
    assert!(err.is_invalid_query());

    let err = test.db.update::<Person>().run().unwrap_err();
    assert!(err.is_invalid_query());
}

#[test]
fn identified_update_with_a_filter_is_ambiguous() {
    let test = DbTest::setup(models!(Person));
    let mut person = stored(&test, "Ann");

    let log = test.log();
    log.clear();

    let err = test
        .db
        .update::<Person>()
        .filter("age > ?", [10])
        .unwrap()
        .values([&mut person])
        .run()
        .unwrap_err();

    assert!(err.is_invalid_query());
    assert_eq!(log.count(|op| op.is_update()), 0);
}

#[test]
fn identified_delete_with_a_filter_is_ambiguous() {
    let test = DbTest::setup(models!(Person));
    let mut person = stored(&test, "Ann");

    let err = test
        .db
        .delete::<Person>()
        .filter("age > ?", [10])
        .unwrap()
        .values([&mut person])
        .run()
        .unwrap_err();

    assert!(err.is_invalid_query());
    assert_eq!(test.db.select::<Person>().all().unwrap().len(), 1);
}

#[test]
fn deleting_unsaved_rows_is_rejected() {
    let test = DbTest::setup(models!(Person));
    stored(&test, "Ann");

    let mut unsaved = Person::default();
    let err = test
        .db
        .delete::<Person>()
        .values([&mut unsaved])
        .run()
        .unwrap_err();

    assert!(err.is_invalid_query());
    assert_eq!(test.db.select::<Person>().all().unwrap().len(), 1);
}
