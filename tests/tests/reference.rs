use pretty_assertions::assert_eq;
use rowcast::Model;
use rowcast_core::stmt::Value;
use tests::{models, DbTest};

#[derive(Debug, Default, Clone, PartialEq, rowcast::Model)]
#[table = "spouses"]
struct Spouse {
    #[column("_id")]
    #[key]
    #[auto]
    id: i64,

    #[column]
    name: String,
}

#[derive(Debug, Default, PartialEq, rowcast::Model)]
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

    #[reference(table = "spouses", column = "spouse")]
    spouse: Option<Spouse>,
}

#[derive(Debug, Default, rowcast::Model)]
struct Nameless {
    #[column]
    label: String,
}

#[derive(Debug, Default, rowcast::Model)]
#[table = "tags"]
struct Tagged {
    #[column("_id")]
    #[key]
    #[auto]
    id: i64,

    #[reference(table = "nameless")]
    nameless: Option<Nameless>,
}

fn person(name: &str, spouse: Option<&str>) -> Person {
    Person {
        id: 0,
        name: name.to_string(),
        age: 40,
        spouse: spouse.map(|name| Spouse {
            id: 0,
            name: name.to_string(),
        }),
    }
}

fn stored_link(test: &DbTest, person_id: i64) -> Value {
    let rows = test.raw_rows("people", &["spouse"], Some(("_id", person_id)));
    rows.row(0).unwrap().get(0).unwrap().clone()
}

#[test]
fn reference_column_is_an_integer() {
    let ddl = Person::fields().schema().ddl().unwrap();
    assert_eq!(
        ddl,
        "_id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT, age INTEGER, spouse INTEGER"
    );
}

#[test]
fn insert_writes_the_referenced_row_first() {
    let test = DbTest::setup(models!(Person, Spouse));
    let mut aidan = person("Aidan", Some("Natalie"));

    test.db
        .insert::<Person>()
        .values([&mut aidan])
        .run()
        .unwrap();

    let spouse_id = aidan.spouse.as_ref().unwrap().id;
    assert!(spouse_id > 0);
    assert_eq!(stored_link(&test, aidan.id), Value::Integer(spouse_id));

    let read = test.db.select::<Person>().first().unwrap().unwrap();
    assert_eq!(read, aidan);
}

#[test]
fn missing_reference_stores_null() {
    let test = DbTest::setup(models!(Person, Spouse));
    let mut single = person("Waverly", None);

    test.db
        .insert::<Person>()
        .values([&mut single])
        .run()
        .unwrap();

    assert!(stored_link(&test, single.id).is_null());

    let read = test.db.select::<Person>().first().unwrap().unwrap();
    assert_eq!(read.spouse, None);
    assert!(test.db.select::<Spouse>().none().unwrap());
}

#[test]
fn update_replaces_the_referenced_row() {
    let test = DbTest::setup(models!(Person, Spouse));
    let mut aidan = person("Aidan", Some("Natalie"));
    test.db
        .insert::<Person>()
        .values([&mut aidan])
        .run()
        .unwrap();

    aidan.spouse.as_mut().unwrap().name = "Nat".to_string();
    test.db
        .update::<Person>()
        .values([&mut aidan])
        .run()
        .unwrap();

    let spouses = test.db.select::<Spouse>().all().unwrap();
    assert_eq!(spouses.len(), 1);
    assert_eq!(spouses[0].name, "Nat");

    aidan.spouse = None;
    test.db
        .update::<Person>()
        .values([&mut aidan])
        .run()
        .unwrap();
    assert!(stored_link(&test, aidan.id).is_null());
}

#[test]
fn dangling_reference_reads_as_none() {
    let test = DbTest::setup(models!(Person, Spouse));
    let mut aidan = person("Aidan", Some("Natalie"));
    test.db
        .insert::<Person>()
        .values([&mut aidan])
        .run()
        .unwrap();

    test.db.delete::<Spouse>().run().unwrap();

    let read = test.db.select::<Person>().first().unwrap().unwrap();
    assert_eq!(read.name, "Aidan");
    assert_eq!(read.spouse, None);
}

#[test]
fn referenced_model_needs_an_identifier() {
    let test = DbTest::setup(models!(Tagged));
    let mut tagged = Tagged {
        id: 0,
        nameless: Some(Nameless {
            label: "x".to_string(),
        }),
    };

    let err = test
        .db
        .insert::<Tagged>()
        .values([&mut tagged])
        .run()
        .unwrap_err();
    assert!(err.is_invalid_declaration());
}
