use pretty_assertions::assert_eq;
use rowcast::Db;
use rowcast_core::{
    driver::{Driver, Operation, Response, ResultSet},
    stmt::{Target, Value},
    Result,
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default, PartialEq, rowcast::Model)]
#[table = "items"]
struct Item {
    #[column("_id")]
    #[key]
    #[auto]
    id: i64,

    #[column]
    name: String,
}

/// Answers every operation with canned data, the way a remote content
/// endpoint would.
#[derive(Debug, Default)]
struct MockEndpoint {
    ops: Arc<Mutex<Vec<Operation>>>,
}

impl Driver for MockEndpoint {
    fn exec(&self, op: Operation) -> Result<Response> {
        let response = match &op {
            Operation::Query(_) => {
                let mut rows = ResultSet::new(vec!["_id".to_string(), "name".to_string()]);
                rows.push(vec![Value::Integer(7), Value::from("remote")])?;
                Response::values(rows)
            }
            Operation::Insert(_) => Response::inserted_id(100),
            Operation::Update(_) | Operation::Delete(_) => Response::count(1),
            Operation::CreateTable(_) | Operation::DropTable(_) => Response::empty(),
        };

        self.ops.lock().unwrap().push(op);
        Ok(response)
    }
}

fn setup() -> (Db, Arc<Mutex<Vec<Operation>>>) {
    let driver = MockEndpoint::default();
    let ops = driver.ops.clone();
    let db = Db::builder().build(driver).unwrap();
    (db, ops)
}

fn endpoint() -> Target {
    Target::endpoint("content://com.example.items/items").unwrap()
}

#[test]
fn endpoint_targets_never_create_tables() {
    let (db, ops) = setup();

    let items = db.select_from::<Item>(endpoint()).all().unwrap();
    assert_eq!(
        items,
        [Item {
            id: 7,
            name: "remote".to_string(),
        }]
    );

    let mut item = Item {
        id: 0,
        name: "new".to_string(),
    };
    let ids = db
        .insert_into::<Item>(endpoint())
        .values([&mut item])
        .run()
        .unwrap();
    assert_eq!(ids, [100]);
    assert_eq!(item.id, 100);

    let count = db
        .update_in::<Item>(endpoint())
        .values([&mut item])
        .run()
        .unwrap();
    assert_eq!(count, 1);

    let count = db
        .delete_from::<Item>(endpoint())
        .filter("name = ?", ["new"])
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(count, 1);

    let ops = ops.lock().unwrap();
    assert_eq!(
        ops.iter().map(Operation::name).collect::<Vec<_>>(),
        ["query", "insert", "update", "delete"]
    );
    assert!(ops.iter().all(|op| op.target().is_endpoint()));
}

#[test]
fn table_targets_create_their_table_once() {
    let (db, ops) = setup();

    db.select::<Item>().all().unwrap();
    db.select_from::<Item>("items").first().unwrap();

    let ops = ops.lock().unwrap();
    assert_eq!(
        ops.iter().map(Operation::name).collect::<Vec<_>>(),
        ["create_table", "query", "query"]
    );
}

#[test]
fn malformed_endpoints_are_rejected() {
    let err = Target::endpoint("not an address").unwrap_err();
    assert!(err.is_invalid_connection_url());
}
