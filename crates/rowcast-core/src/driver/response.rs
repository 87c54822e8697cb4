use crate::{stmt::Value, Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Identifier generated for an inserted row
    InsertedId(i64),

    /// Rows returned by a query
    Values(ResultSet),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn inserted_id(id: i64) -> Self {
        Self {
            rows: Rows::InsertedId(id),
        }
    }

    pub fn values(values: ResultSet) -> Self {
        Self {
            rows: Rows::Values(values),
        }
    }

    pub fn empty() -> Self {
        Self::count(0)
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_values(&self) -> bool {
        matches!(self, Self::Values(_))
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Rows::Count(count) => Ok(count),
            other => Err(unexpected("a row count", &other)),
        }
    }

    pub fn into_inserted_id(self) -> Result<i64> {
        match self {
            Rows::InsertedId(id) => Ok(id),
            other => Err(unexpected("an inserted identifier", &other)),
        }
    }

    pub fn into_values(self) -> Result<ResultSet> {
        match self {
            Rows::Values(values) => Ok(values),
            other => Err(unexpected("a result set", &other)),
        }
    }
}

fn unexpected(expected: &str, got: &Rows) -> Error {
    let got = match got {
        Rows::Count(_) => "a row count",
        Rows::InsertedId(_) => "an inserted identifier",
        Rows::Values(_) => "a result set",
    };
    crate::err!("driver returned {got} where {expected} was expected")
}

/// Rows returned by a query, in the order the store produced them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

/// One row of a [`ResultSet`].
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'a [String],
    values: &'a [Value],
}

impl ResultSet {
    pub fn new(columns: Vec<String>) -> ResultSet {
        ResultSet {
            columns,
            rows: vec![],
        }
    }

    /// Appends a row. The row must have one cell per column.
    pub fn push(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.columns.len() {
            crate::bail!(
                "row has {} cells but the result set has {} columns",
                row.len(),
                self.columns.len()
            );
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|values| Row {
            columns: &self.columns,
            values,
        })
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Row<'_>> + '_ {
        self.rows.iter().map(|values| Row {
            columns: &self.columns,
            values,
        })
    }
}

impl<'a> Row<'a> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn column_name(&self, index: usize) -> Option<&'a str> {
        self.columns.get(index).map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&'a Value> {
        self.values.get(index)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&'a Value> {
        let index = self.columns.iter().position(|column| column == name)?;
        self.values.get(index)
    }

    pub fn is_null(&self, index: usize) -> bool {
        self.get(index).map_or(true, Value::is_null)
    }

    /// `(column name, cell)` pairs in result order.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = (&'a str, &'a Value)> + 'a {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}
