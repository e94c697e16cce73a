mod common;

use arbor::ast::{self, JoinSource, SelectCore};
use arbor::{SelectManager, Table, TreeManager};
use pretty_assertions::assert_eq;

#[test]
fn from_table_quotes_the_relation() {
    let sql = SelectManager::new()
        .from(Table::new("users"))
        .to_sql(&common::engine());
    assert_eq!(sql, "SELECT FROM \"users\"");
}

#[test]
fn from_string_is_taken_as_raw_sql() {
    let sql = SelectManager::new().from("users").to_sql(&common::engine());
    assert_eq!(sql, "SELECT FROM users");
}

#[test]
fn fresh_manager_compiles_the_empty_source() {
    let sql = SelectManager::new().to_sql(&common::engine());
    assert_eq!(sql, "SELECT FROM ");
}

#[test]
fn select_without_source_has_no_trailing_space() {
    let mut manager = SelectManager::new();
    manager.ast.cores[0].source = None;
    assert_eq!(manager.to_sql(&common::engine()), "SELECT");
}

#[test]
fn repeated_from_overwrites_the_left_side() {
    let sql = SelectManager::new()
        .from(Table::new("users"))
        .from(Table::new("admins"))
        .to_sql(&common::engine());
    assert_eq!(sql, "SELECT FROM \"admins\"");
}

#[test]
fn offset_is_last_write_wins() {
    let sql = SelectManager::new()
        .from(Table::new("users"))
        .offset(3)
        .offset(5)
        .to_sql(&common::engine());
    assert_eq!(sql, "SELECT FROM \"users\" OFFSET 5");
}

#[test]
fn skip_is_an_alias_for_offset() {
    let engine = common::engine();
    let skipped = SelectManager::new()
        .from(Table::new("users"))
        .skip(42)
        .to_sql(&engine);
    let offset = SelectManager::new()
        .from(Table::new("users"))
        .offset(42)
        .to_sql(&engine);
    assert_eq!(skipped, offset);
}

#[test]
fn joins_accumulate_in_call_order() {
    let first = ast::create_join_on("addresses", "addresses.user_id = users.id").unwrap();
    let second = ast::create_join_on("photos", "photos.user_id = users.id").unwrap();

    let sql = SelectManager::new()
        .from(Table::new("users"))
        .from(first)
        .from(second)
        .to_sql(&common::engine());
    assert_eq!(
        sql,
        "SELECT FROM \"users\" INNER JOIN addresses ON addresses.user_id = users.id \
         INNER JOIN photos ON photos.user_id = users.id"
    );
}

#[test]
fn join_without_left_side_has_no_leading_separator() {
    let join = ast::create_string_join("users CROSS JOIN cities").unwrap();
    let sql = SelectManager::new().from(join).to_sql(&common::engine());
    assert_eq!(sql, "SELECT FROM users CROSS JOIN cities");
}

#[test]
fn outer_join_kinds_carry_their_keywords() {
    let join = ast::create_join_of(
        arbor::JoinKind::FullOuter,
        "photos",
        Some(arbor::Node::from("photos.user_id = users.id")),
    )
    .unwrap();

    let sql = SelectManager::new()
        .from(Table::new("users"))
        .from(join)
        .to_sql(&common::engine());
    assert_eq!(
        sql,
        "SELECT FROM \"users\" FULL OUTER JOIN photos ON photos.user_id = users.id"
    );
}

#[test]
fn clauses_appear_in_grammar_order() {
    let sql = SelectManager::new()
        .project("id")
        .project("name")
        .from(Table::new("users"))
        .filter("age > 18")
        .filter("active = 1")
        .group("role")
        .having("COUNT(*) > 1")
        .order("name ASC")
        .order("id DESC")
        .to_sql(&common::engine());
    assert_eq!(
        sql,
        "SELECT id, name FROM \"users\" WHERE age > 18 AND active = 1 \
         GROUP BY role HAVING COUNT(*) > 1 ORDER BY name ASC, id DESC"
    );
}

#[test]
fn distinct_is_emitted_between_select_and_projections() {
    let sql = SelectManager::new()
        .project("id")
        .distinct()
        .from(Table::new("users"))
        .to_sql(&common::engine());
    assert_eq!(sql, "SELECT DISTINCT id FROM \"users\"");
}

#[test]
fn statement_options_follow_the_order_clause() {
    let sql = SelectManager::new()
        .from(Table::new("users"))
        .order("id")
        .take(10)
        .skip(5)
        .lock("FOR UPDATE")
        .to_sql(&common::engine());
    assert_eq!(
        sql,
        "SELECT FROM \"users\" ORDER BY id LIMIT 10 OFFSET 5 FOR UPDATE"
    );
}

#[test]
fn with_prefix_precedes_the_first_core() {
    let sql = SelectManager::new()
        .with("t AS (SELECT 1)")
        .from(Table::new("users"))
        .to_sql(&common::engine());
    assert_eq!(sql, "WITH t AS (SELECT 1) SELECT FROM \"users\"");
}

#[test]
fn top_and_windows_compile_inside_the_core() {
    let mut manager = SelectManager::new().from(Table::new("users"));
    manager.ast.cores[0].top = Some(ast::Top::new(1));
    manager.ast.cores[0]
        .windows
        .push(arbor::Node::from("w AS (ORDER BY id)"));

    assert_eq!(
        manager.to_sql(&common::engine()),
        "SELECT TOP 1 FROM \"users\" WINDOW w AS (ORDER BY id)"
    );
}

#[test]
fn cores_concatenate_without_separator() {
    let mut manager = SelectManager::new().from(Table::new("users"));

    let mut second = SelectCore::new();
    second.source = Some(JoinSource::new(Table::new("admins")));
    manager.ast.cores.push(second);

    assert_eq!(
        manager.to_sql(&common::engine()),
        "SELECT FROM \"users\"SELECT FROM \"admins\""
    );
}

#[test]
fn compilation_is_deterministic_over_an_unmutated_tree() {
    let manager = SelectManager::new()
        .project("id")
        .from(Table::new("users"))
        .order("id");

    let engine = common::engine();
    let first = manager.to_sql(&engine);
    let second = manager.to_sql(&engine);
    assert_eq!(first, second);

    // A second engine over the same quoting rules agrees byte for byte.
    assert_eq!(first, manager.to_sql(&common::engine()));
}
