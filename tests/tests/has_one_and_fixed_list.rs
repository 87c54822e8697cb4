use pretty_assertions::assert_eq;
use tests::{models, DbTest};

#[derive(Debug, Default, rowcast::Model)]
#[table = "owners"]
struct Owner {
    #[column("_id")]
    #[key]
    #[auto]
    id: i64,

    #[column]
    name: String,

    #[has_one(table = "pets", foreign_column = "owner_id")]
    pet: Option<Pet>,

    #[has_many(table = "toys", foreign_column = "owner_id")]
    toys: Vec<Toy>,
}

#[derive(Debug, Default, Clone, PartialEq, rowcast::Model)]
#[table = "pets"]
struct Pet {
    #[column("_id")]
    #[key]
    #[auto]
    id: i64,

    #[column]
    owner_id: i64,

    #[column]
    species: String,
}

#[derive(Debug, Default, Clone, PartialEq, rowcast::Model)]
struct Toy {
    #[column("_id")]
    #[key]
    #[auto]
    id: i64,

    #[column]
    owner_id: i64,

    #[column]
    label: String,
}

fn toy(label: &str) -> Toy {
    Toy {
        label: label.to_string(),
        ..Toy::default()
    }
}

#[test]
fn scalar_and_list_members_load_eagerly() {
    let test = DbTest::setup(models!(Owner, Pet, Toy));

    let mut owner = Owner {
        id: 0,
        name: "Ann".to_string(),
        pet: Some(Pet {
            species: "cat".to_string(),
            ..Pet::default()
        }),
        toys: vec![toy("ball"), toy("rope")],
    };
    test.db
        .insert::<Owner>()
        .values([&mut owner])
        .run()
        .unwrap();

    let log = test.log();
    log.clear();

    let read = test.db.select::<Owner>().first().unwrap().unwrap();
    assert_eq!(log.queries_on("pets"), 1);
    assert_eq!(log.queries_on("toys"), 1);

    assert_eq!(read.pet.as_ref().map(|p| p.species.as_str()), Some("cat"));
    assert_eq!(read.pet.as_ref().map(|p| p.owner_id), Some(owner.id));
    assert_eq!(read.toys, owner.toys);
}

#[test]
fn missing_children_resolve_to_empty_shapes() {
    let test = DbTest::setup(models!(Owner, Pet, Toy));

    let mut owner = Owner {
        name: "Bob".to_string(),
        ..Owner::default()
    };
    test.db
        .insert::<Owner>()
        .values([&mut owner])
        .run()
        .unwrap();

    let read = test.db.select::<Owner>().first().unwrap().unwrap();
    assert_eq!(read.pet, None);
    assert!(read.toys.is_empty());
}

#[test]
fn emptied_members_delete_their_children() {
    let test = DbTest::setup(models!(Owner, Pet, Toy));

    let mut owner = Owner {
        id: 0,
        name: "Cat".to_string(),
        pet: Some(Pet::default()),
        toys: vec![toy("ball")],
    };
    test.db
        .insert::<Owner>()
        .values([&mut owner])
        .run()
        .unwrap();

    owner.pet = None;
    owner.toys.clear();
    test.db
        .update::<Owner>()
        .values([&mut owner])
        .run()
        .unwrap();

    assert!(test.raw_rows("pets", &["_id"], None).is_empty());
    assert!(test.raw_rows("toys", &["_id"], None).is_empty());
}

#[test]
fn default_table_name_is_used_for_unnamed_models() {
    let test = DbTest::setup(models!(Toy));

    let mut ball = toy("ball");
    test.db.insert::<Toy>().values([&mut ball]).run().unwrap();

    let rows = test.raw_rows("toys", &["label"], None);
    assert_eq!(rows.len(), 1);
}

#[test]
fn rows_read_without_identifier_skip_relationships() {
    let test = DbTest::setup(models!(Owner, Pet, Toy));

    // A stray child stored under a zero parent identifier
    let mut stray = Toy {
        owner_id: 0,
        label: "lost".to_string(),
        ..Toy::default()
    };
    test.db.insert::<Toy>().values([&mut stray]).run().unwrap();

    let mut owner = Owner {
        id: 0,
        name: "Ann".to_string(),
        pet: None,
        toys: vec![toy("ball")],
    };
    test.db
        .insert::<Owner>()
        .values([&mut owner])
        .run()
        .unwrap();

    let log = test.log();
    log.clear();

    let read = test
        .db
        .select::<Owner>()
        .projection(["name"])
        .first()
        .unwrap()
        .unwrap();

    assert_eq!(read.name, "Ann");
    assert_eq!(read.id, 0);
    assert!(read.pet.is_none());
    assert!(read.toys.is_empty());
    assert_eq!(log.queries_on("pets"), 0);
    assert_eq!(log.queries_on("toys"), 0);
}
