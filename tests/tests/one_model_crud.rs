use pretty_assertions::assert_eq;
use rowcast_core::{driver::Operation, stmt::Value};
use tests::{models, DbTest};

#[derive(Debug, Default, Clone, PartialEq, rowcast::Model)]
#[table = "people"]
struct Person {
    #[column("_id")]
    #[key]
    #[auto]
    id: i64,

    #[column(not_null)]
    name: String,

    #[column]
    age: i32,
}

fn person(name: &str, age: i32) -> Person {
    Person {
        id: 0,
        name: name.to_string(),
        age,
    }
}

fn insert_all(test: &DbTest, people: &mut [Person]) -> Vec<i64> {
    test.db
        .insert::<Person>()
        .values(people.iter_mut())
        .run()
        .unwrap()
}

fn names(people: &[Person]) -> Vec<&str> {
    people.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn insert_writes_back_generated_identifiers() {
    let test = DbTest::setup(models!(Person));
    let mut people = vec![person("Ann", 31), person("Bob", 27)];

    let ids = insert_all(&test, &mut people);

    assert_eq!(ids, [1, 2]);
    assert_eq!(people[0].id, 1);
    assert_eq!(people[1].id, 2);
}

#[test]
fn read_back_is_value_equal() {
    let test = DbTest::setup(models!(Person));
    let mut people = vec![person("Ann", 31)];
    insert_all(&test, &mut people);

    let read = test
        .db
        .select::<Person>()
        .filter("_id = ?", [people[0].id])
        .unwrap()
        .first()
        .unwrap();

    assert_eq!(read.as_ref(), Some(&people[0]));
}

#[test]
fn chained_filters_with_sort() {
    let test = DbTest::setup(models!(Person));
    let mut people = vec![
        person("Zed", 30),
        person("Amy", 19),
        person("Max", 42),
        person("Kim", 50),
        person("Tom", 12),
    ];
    insert_all(&test, &mut people);

    let found = test
        .db
        .select::<Person>()
        .filter("age >= 19", ())
        .unwrap()
        .filter("age <= 42", ())
        .unwrap()
        .sort("name")
        .all()
        .unwrap();

    assert_eq!(names(&found), ["Amy", "Max", "Zed"]);
}

#[test]
fn filter_in_keeps_natural_order() {
    let test = DbTest::setup(models!(Person));
    let mut people = vec![
        person("a", 10),
        person("b", 42),
        person("c", 55),
        person("d", 70),
        person("e", 18),
        person("f", 33),
    ];
    insert_all(&test, &mut people);

    let found = test
        .db
        .select::<Person>()
        .filter_in("age", [70, 42])
        .unwrap()
        .all()
        .unwrap();

    assert_eq!(names(&found), ["b", "d"]);

    let rest = test
        .db
        .select::<Person>()
        .filter_not_in("age", [70, 42, 10])
        .unwrap()
        .all()
        .unwrap();

    assert_eq!(names(&rest), ["c", "e", "f"]);
}

#[test]
fn or_filters_widen_the_match() {
    let test = DbTest::setup(models!(Person));
    let mut people = vec![person("Ann", 31), person("Bob", 27), person("Cat", 64)];
    insert_all(&test, &mut people);

    let found = test
        .db
        .select::<Person>()
        .filter("name = ?", ["Ann"])
        .unwrap()
        .or_filter("age > ?", [60])
        .unwrap()
        .or_filter_in("name", ["Nobody"])
        .unwrap()
        .all()
        .unwrap();

    assert_eq!(names(&found), ["Ann", "Cat"]);
}

#[test]
fn cleared_filter_matches_everything() {
    let test = DbTest::setup(models!(Person));
    let mut people = vec![person("Ann", 31), person("Bob", 27)];
    insert_all(&test, &mut people);

    let found = test
        .db
        .select::<Person>()
        .filter("age > ?", [100])
        .unwrap()
        .clear_filter()
        .sort_desc(["age"])
        .clear_sort()
        .sort_asc(["name"])
        .all()
        .unwrap();

    assert_eq!(names(&found), ["Ann", "Bob"]);
}

#[test]
fn existence_predicates() {
    let test = DbTest::setup(models!(Person));
    assert!(test.db.select::<Person>().none().unwrap());
    assert_eq!(test.db.select::<Person>().first().unwrap(), None);

    let mut people = vec![person("Ann", 31), person("Bob", 27)];
    insert_all(&test, &mut people);

    assert!(test.db.select::<Person>().any().unwrap());
    assert!(test
        .db
        .select::<Person>()
        .any_match(|p| p.age < 30)
        .unwrap());
    assert!(test
        .db
        .select::<Person>()
        .none_match(|p| p.age > 40)
        .unwrap());
    assert!(!test
        .db
        .select::<Person>()
        .filter("name = ?", ["Bob"])
        .unwrap()
        .none()
        .unwrap());
}

#[test]
fn sort_terms_compose_and_limit_caps() {
    let test = DbTest::setup(models!(Person));
    let mut people = vec![
        person("Bob", 30),
        person("Ann", 30),
        person("Cat", 20),
        person("Dan", 40),
    ];
    insert_all(&test, &mut people);

    let found = test
        .db
        .select::<Person>()
        .sort_desc(["age"])
        .sort_asc(["name"])
        .limit(3)
        .all()
        .unwrap();

    assert_eq!(names(&found), ["Dan", "Ann", "Bob"]);
}

#[test]
fn at_position_follows_sort() {
    let test = DbTest::setup(models!(Person));
    let mut people = vec![person("Old", 80), person("Young", 8), person("Mid", 40)];
    insert_all(&test, &mut people);

    let second = test
        .db
        .select::<Person>()
        .sort_asc(["age"])
        .at_position(1)
        .unwrap()
        .first()
        .unwrap()
        .unwrap();
    assert_eq!(second.name, "Mid");

    let err = test
        .db
        .select::<Person>()
        .filter("age > ?", [50])
        .unwrap()
        .at_position(1)
        .unwrap_err();
    assert!(err.is_invalid_query());
}

#[test]
fn at_position_narrows_or_filters_to_one_row() {
    let test = DbTest::setup(models!(Person));
    let mut people = vec![person("A", 1), person("B", 1), person("C", 2)];
    insert_all(&test, &mut people);

    let picked = test
        .db
        .select::<Person>()
        .filter("age = ?", [1])
        .unwrap()
        .or_filter("age = ?", [2])
        .unwrap()
        .sort("name")
        .at_position(2)
        .unwrap()
        .all()
        .unwrap();

    assert_eq!(names(&picked), ["C"]);
}

#[test]
fn insert_projection_writes_only_named_columns() {
    let test = DbTest::setup(models!(Person));
    let mut ann = person("Ann", 31);

    test.db
        .insert::<Person>()
        .projection(["name"])
        .values([&mut ann])
        .run()
        .unwrap();
    assert_eq!(ann.id, 1);

    let rows = test.raw_rows("people", &["name", "age"], None);
    let row = rows.row(0).unwrap();
    assert_eq!(row.get_by_name("name"), Some(&Value::from("Ann")));
    assert!(row.get_by_name("age").unwrap().is_null());
}

#[test]
fn projection_reads_only_named_columns() {
    let test = DbTest::setup(models!(Person));
    let mut people = vec![person("Ann", 31)];
    insert_all(&test, &mut people);

    let read = test
        .db
        .select::<Person>()
        .projection(["_id", "name"])
        .first()
        .unwrap()
        .unwrap();

    assert_eq!(read.id, 1);
    assert_eq!(read.name, "Ann");
    assert_eq!(read.age, 0);
}

#[test]
fn update_by_identifier() {
    let test = DbTest::setup(models!(Person));
    let mut people = vec![person("Ann", 31), person("Bob", 27)];
    insert_all(&test, &mut people);

    people[1].age = 28;
    let count = test
        .db
        .update::<Person>()
        .values([&mut people[1]])
        .run()
        .unwrap();
    assert_eq!(count, 1);

    let all = test.db.select::<Person>().all().unwrap();
    assert_eq!(all, people);
}

#[test]
fn update_by_filter_applies_last_row() {
    let test = DbTest::setup(models!(Person));
    let mut people = vec![person("Ann", 31), person("Bob", 67), person("Cat", 72)];
    insert_all(&test, &mut people);

    let mut retired = person("ignored", 65);
    let count = test
        .db
        .update::<Person>()
        .filter("age > ?", [65])
        .unwrap()
        .projection(["age"])
        .values([&mut retired])
        .run()
        .unwrap();
    assert_eq!(count, 2);

    let all = test.db.select::<Person>().sort_asc(["_id"]).all().unwrap();
    assert_eq!(names(&all), ["Ann", "Bob", "Cat"]);
    assert_eq!(
        all.iter().map(|p| p.age).collect::<Vec<_>>(),
        [31, 65, 65]
    );
}

#[test]
fn delete_by_filter_and_by_rows() {
    let test = DbTest::setup(models!(Person));
    let mut people = vec![
        person("Ann", 31),
        person("Bob", 27),
        person("Cat", 72),
        person("Dan", 5),
    ];
    insert_all(&test, &mut people);

    let removed = test
        .db
        .delete::<Person>()
        .filter("age < ?", [18])
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(removed, 1);

    let (ann, rest) = people.split_first_mut().unwrap();
    let removed = test
        .db
        .delete::<Person>()
        .values([ann, &mut rest[0]])
        .run()
        .unwrap();
    assert_eq!(removed, 2);

    let left = test.db.select::<Person>().all().unwrap();
    assert_eq!(names(&left), ["Cat"]);
}

#[test]
fn unassigned_identifier_is_left_out_of_the_write() {
    let test = DbTest::setup(models!(Person));
    let log = test.log();
    log.clear();

    let mut fresh = person("Ann", 31);
    fresh.id = -3;
    insert_all(&test, std::slice::from_mut(&mut fresh));

    let Some(Operation::Insert(op)) = log.pop() else {
        panic!("expected an insert");
    };
    assert_eq!(op.values.columns().collect::<Vec<_>>(), ["name", "age"]);
}

#[test]
fn assigned_identifier_replaces_the_stored_row() {
    let test = DbTest::setup(models!(Person));
    let mut people = vec![person("Ann", 31)];
    insert_all(&test, &mut people);

    let log = test.log();
    log.clear();

    let mut replacement = person("Anne", 32);
    replacement.id = people[0].id;
    let ids = insert_all(&test, std::slice::from_mut(&mut replacement));
    assert_eq!(ids, [people[0].id]);

    let Some(Operation::Insert(op)) = log.pop() else {
        panic!("expected an insert");
    };
    assert!(op.values.contains("_id"));

    let all = test.db.select::<Person>().all().unwrap();
    assert_eq!(all, [replacement]);
}
