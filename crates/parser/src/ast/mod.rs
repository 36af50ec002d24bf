pub mod ddl;
pub mod dml;

pub use self::{ddl::*, dml::*};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Use { database: String },
    CreateDatabase { name: String },
    CreateTable(CreateTableStmt),
    DropDatabase { name: String },
    DropTable { name: String },
    AlterTable(AlterTableStmt),
    Insert(InsertStmt),
    Select(SelectStmt),
    Update(UpdateStmt),
    Delete(DeleteStmt),
    Join(JoinStmt),
}

impl Statement {
    /// The leading command word, for logging.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Use { .. } => "USE",
            Self::CreateDatabase { .. } | Self::CreateTable(_) => "CREATE",
            Self::DropDatabase { .. } | Self::DropTable { .. } => "DROP",
            Self::AlterTable(_) => "ALTER",
            Self::Insert(_) => "INSERT",
            Self::Select(_) => "SELECT",
            Self::Update(_) => "UPDATE",
            Self::Delete(_) => "DELETE",
            Self::Join(_) => "JOIN",
        }
    }
}
