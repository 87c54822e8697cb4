/// Links a column to a single row of another table. The column holds that
/// row's `_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    /// Member of the owning model that holds the referenced row
    pub member: &'static str,

    /// Table the referenced row lives in
    pub table: &'static str,

    /// Column of the owning table holding the referenced identifier
    pub column: &'static str,
}
