use pretty_assertions::assert_eq;
use rowcast::Model;
use rowcast_core::driver::Operation;
use tests::{models, DbTest};

#[derive(Debug, Default, rowcast::Model)]
#[table = "notes"]
struct Note {
    #[column("_id")]
    #[key]
    #[auto]
    id: i64,

    #[column("body", not_null)]
    body: String,

    #[column]
    stars: Option<f64>,

    #[has_many(table = "tags", foreign_column = "note_id")]
    tags: Vec<Tag>,

    scratch: Vec<String>,
}

#[derive(Debug, Default, rowcast::Model)]
#[table = "tags"]
struct Tag {
    #[column("_id")]
    #[key]
    #[auto]
    id: i64,

    #[column]
    note_id: i64,

    #[column]
    label: String,
}

#[derive(Debug, Default, rowcast::Model)]
#[table = "orphans"]
struct Orphan {
    #[column]
    name: String,

    #[has_many(table = "tags", foreign_column = "note_id")]
    tags: Vec<Tag>,
}

#[derive(Debug, Default, rowcast::Model)]
#[table = "text_ids"]
struct TextId {
    #[column("_id")]
    #[key]
    #[auto]
    id: String,
}

#[derive(Debug, Default, rowcast::Model)]
#[table = "manual_ids"]
struct ManualId {
    #[column("_id")]
    #[key]
    id: i64,
}

#[test]
fn schema_lists_columns_in_declaration_order() {
    let schema = Note::fields().schema();

    assert_eq!(
        schema.ddl().unwrap(),
        "_id INTEGER PRIMARY KEY AUTOINCREMENT, body TEXT NOT NULL, stars REAL"
    );
    assert_eq!(schema.columns.len(), 3);
    assert_eq!(schema.relations.len(), 1);
    assert_eq!(schema.relations[0].member, "tags");
    assert_eq!(schema.relations[0].shape, rowcast::schema::Shape::FixedList);
}

#[test]
fn identifier_accessor_is_resolved() {
    let fields = Note::fields();
    assert_eq!(fields.id().map(|f| f.member), Some("id"));
    assert!(Orphan::fields().id().is_none());
}

#[test]
fn registration_creates_tables_eagerly() {
    let test = DbTest::setup(models!(Note, Tag));
    let log = test.log();
    assert_eq!(log.creates(), 2);

    let Some(Operation::CreateTable(op)) = log.pop() else {
        panic!("expected a create table");
    };
    assert_eq!(op.table, "notes");

    test.db.select::<Note>().all().unwrap();
    assert_eq!(log.creates(), 1);
}

#[test]
fn unregistered_models_create_their_table_on_first_use() {
    let test = DbTest::setup(models!());
    let log = test.log();
    assert!(log.is_empty());

    test.db.select::<Tag>().all().unwrap();
    test.db.select::<Tag>().all().unwrap();
    assert_eq!(log.creates(), 1);
}

#[test]
fn relationships_require_an_identifier() {
    let err = DbTest::try_setup(models!(Orphan)).err().unwrap();
    assert!(err.is_invalid_declaration());
    assert_eq!(
        err.to_string(),
        "invalid declaration: `Orphan` declares relationships but has no `_id` identifier column"
    );
}

#[test]
fn identifier_must_be_an_auto_incrementing_integer() {
    let err = DbTest::try_setup(models!(TextId)).err().unwrap();
    assert!(err.is_invalid_declaration());

    let err = DbTest::try_setup(models!(ManualId)).err().unwrap();
    assert!(err.is_invalid_declaration());
}

#[test]
fn dropped_tables_come_back_empty() {
    let test = DbTest::setup(models!(Tag));

    let mut tag = Tag {
        label: "urgent".to_string(),
        ..Tag::default()
    };
    test.db.insert::<Tag>().values([&mut tag]).run().unwrap();
    assert_eq!(test.db.select::<Tag>().all().unwrap().len(), 1);

    test.db.drop_table::<Tag>().unwrap();
    assert!(test.db.select::<Tag>().all().unwrap().is_empty());
}
