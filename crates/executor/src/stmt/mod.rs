mod ddl;
mod delete;
mod insert;
mod query;
mod update;
