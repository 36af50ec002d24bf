#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTableStmt {
    pub name: String,
    /// User columns, without the implicit `id`.
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterTableStmt {
    pub table: String,
    pub action: AlterAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlterAction {
    Add(String),
    Drop(String),
}
