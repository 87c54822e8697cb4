use super::Value;
use crate::{Error, Result};

/// An accumulated `WHERE` expression with positional `?` placeholders and the
/// arguments bound to them.
///
/// Every mutation checks that the clause being appended carries exactly as
/// many placeholders as arguments, so the expression and argument list never
/// drift apart.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    expr: String,
    args: Vec<Value>,
}

/// Connective used when appending a clause to a non-empty filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Join {
    And,
    Or,
}

impl Join {
    fn as_sql(self) -> &'static str {
        match self {
            Join::And => " AND ",
            Join::Or => " OR ",
        }
    }
}

impl Filter {
    pub fn new() -> Filter {
        Filter::default()
    }

    /// Filter matching a single column against one value: `column = ?`.
    pub fn eq(column: &str, value: impl Into<Value>) -> Filter {
        Filter {
            expr: format!("{column} = ?"),
            args: vec![value.into()],
        }
    }

    /// Appends `expr` joined with `AND`.
    pub fn and(&mut self, expr: &str, args: Vec<Value>) -> Result<()> {
        self.push(Join::And, expr, args)
    }

    /// Appends `expr` joined with `OR`.
    pub fn or(&mut self, expr: &str, args: Vec<Value>) -> Result<()> {
        self.push(Join::Or, expr, args)
    }

    pub fn push(&mut self, join: Join, expr: &str, args: Vec<Value>) -> Result<()> {
        let placeholders = count_placeholders(expr);
        if placeholders != args.len() {
            return Err(Error::invalid_query(format!(
                "`{expr}` has {placeholders} placeholder(s) but {} argument(s) were given",
                args.len()
            )));
        }

        if !self.expr.is_empty() {
            self.expr.push_str(join.as_sql());
        }
        self.expr.push_str(expr);
        self.args.extend(args);
        Ok(())
    }

    /// Appends `column IN (?, ...)`, or `NOT IN` when `negated`, sized to `args`.
    pub fn push_in(
        &mut self,
        join: Join,
        column: &str,
        negated: bool,
        args: Vec<Value>,
    ) -> Result<()> {
        if args.is_empty() {
            return Err(Error::invalid_query(format!(
                "an IN list for `{column}` needs at least one argument"
            )));
        }

        let op = if negated { "NOT IN" } else { "IN" };
        let expr = format!("{column} {op} {}", placeholder_list(args.len()));
        self.push(join, &expr, args)
    }

    pub fn is_empty(&self) -> bool {
        self.expr.is_empty()
    }

    pub fn clear(&mut self) {
        self.expr.clear();
        self.args.clear();
    }

    pub fn expr(&self) -> &str {
        &self.expr
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.expr, self.args)
    }
}

fn count_placeholders(expr: &str) -> usize {
    expr.bytes().filter(|b| *b == b'?').count()
}

/// `(?, ?, ?)` for `n` arguments.
fn placeholder_list(n: usize) -> String {
    let mut out = String::with_capacity(n * 3 + 1);
    out.push('(');
    for i in 0..n {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('?');
    }
    out.push(')');
    out
}
