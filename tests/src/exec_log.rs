use crate::logging_driver::DriverOp;
use rowcast_core::driver::Operation;
use std::sync::{Arc, Mutex};

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Count operations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| predicate(&op.operation))
            .count()
    }

    /// Number of reads addressed to `table`
    pub fn queries_on(&self, table: &str) -> usize {
        self.count(|op| op.is_query() && op.target().as_table() == Some(table))
    }

    pub fn inserts_on(&self, table: &str) -> usize {
        self.count(|op| op.is_insert() && op.target().as_table() == Some(table))
    }

    pub fn deletes_on(&self, table: &str) -> usize {
        self.count(|op| op.is_delete() && op.target().as_table() == Some(table))
    }

    pub fn creates(&self) -> usize {
        self.count(|op| matches!(op, Operation::CreateTable(_)))
    }

    /// Clear the log
    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }

    /// Remove and return the first operation from the log
    pub fn pop(&self) -> Option<Operation> {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            None
        } else {
            Some(ops.remove(0).operation)
        }
    }
}
