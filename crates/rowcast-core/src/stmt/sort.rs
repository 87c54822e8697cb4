/// Ordered list of `ORDER BY` terms.
///
/// Terms compose: each call appends after the ones already present.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Sort {
    terms: Vec<String>,
}

impl Sort {
    pub fn new() -> Sort {
        Sort::default()
    }

    /// Appends a raw term such as `name` or `age DESC`.
    pub fn push(&mut self, term: impl Into<String>) {
        self.terms.push(term.into());
    }

    pub fn push_asc<I, S>(&mut self, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.push_directed(columns, "ASC");
    }

    pub fn push_desc<I, S>(&mut self, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.push_directed(columns, "DESC");
    }

    fn push_directed<I, S>(&mut self, columns: I, direction: &str)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for column in columns {
            self.terms.push(format!("{} {direction}", column.as_ref()));
        }
    }

    pub fn clear(&mut self) {
        self.terms.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Terms joined by `, `, ready for an `ORDER BY` clause.
    pub fn to_sql(&self) -> String {
        self.terms.join(", ")
    }
}
