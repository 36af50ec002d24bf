use def::{Condition, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct InsertStmt {
    pub table: String,
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectStmt {
    pub table: String,
    pub projection: Projection,
    pub condition: Option<Condition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    All,
    Columns(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStmt {
    pub table: String,
    pub assignments: Vec<Assignment>,
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStmt {
    pub table: String,
    pub condition: Condition,
}

/// `JOIN left.table AND right.table ON left.attribute AND right.attribute`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinStmt {
    pub left: JoinSide,
    pub right: JoinSide,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinSide {
    pub table: String,
    pub attribute: String,
}
