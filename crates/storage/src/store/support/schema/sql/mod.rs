#![forbid(unsafe_code)]

mod content;
mod core;
mod indexes;
mod pragmas;
mod relations;

pub(super) fn full_schema_sql() -> String {
    let mut sql = String::new();
    sql.push_str(pragmas::SQL);
    sql.push_str(core::SQL);
    sql.push_str(content::SQL);
    sql.push_str(relations::SQL);
    sql.push_str(indexes::SQL);
    sql
}
