mod common;

use arbor::ast::On;
use arbor::{JoinKind, Node, Table, TreeManager};
use arbor::{SelectManager, Visitor};
use pretty_assertions::assert_eq;

#[test]
fn create_string_join_nodes() {
    let relation = Table::new("users");
    let join = relation.create_string_join("foo").unwrap();

    assert_eq!(join.kind, JoinKind::StringJoin);
    assert_eq!(*join.left, Node::from("foo"));
    assert_eq!(join.right, None);
}

#[test]
fn create_inner_join_nodes() {
    let relation = Table::new("users");
    let join = relation.create_join_on("foo", "bar").unwrap();

    assert_eq!(join.kind, JoinKind::Inner);
    assert_eq!(*join.left, Node::from("foo"));
    assert_eq!(join.right, Some(Box::new(Node::On(On::new("bar")))));
}

#[test]
fn create_join_nodes_with_a_full_outer_kind() {
    let relation = Table::new("users");
    let join = relation
        .create_join_of(JoinKind::FullOuter, "foo", Some(Node::from("bar")))
        .unwrap();

    assert_eq!(join.kind, JoinKind::FullOuter);
    assert_eq!(*join.left, Node::from("foo"));
    assert_eq!(join.right, Some(Box::new(Node::On(On::new("bar")))));
}

#[test]
fn create_join_nodes_with_an_outer_kind() {
    let relation = Table::new("users");
    let join = relation
        .create_join_of(JoinKind::Outer, "foo", Some(Node::from("bar")))
        .unwrap();

    assert_eq!(join.kind, JoinKind::Outer);
}

#[test]
fn create_join_nodes_with_a_right_outer_kind() {
    let relation = Table::new("users");
    let join = relation
        .create_join_of(JoinKind::RightOuter, "foo", Some(Node::from("bar")))
        .unwrap();

    assert_eq!(join.kind, JoinKind::RightOuter);
}

#[test]
fn refused_join_is_distinct_from_an_unconstrained_one() {
    let relation = Table::new("users");

    let refused = relation.create_join_of(JoinKind::StringJoin, "foo", Some(Node::from("bar")));
    assert_eq!(refused, None);

    let unconstrained = relation.create_join("foo");
    assert!(matches!(unconstrained, Some(ref join) if join.right.is_none()));
}

#[test]
fn self_aliased_table_compiles_to_the_bare_name() {
    let sql = SelectManager::new()
        .from(Table::with_alias("users", "users"))
        .to_sql(&common::engine());
    assert_eq!(sql, "SELECT FROM \"users\"");
}

#[test]
fn aliased_table_compiles_name_then_alias() {
    let engine = common::engine();
    let node = Node::from(Table::with_alias("users", "people"));
    let collector = engine.visitor().accept(&node);
    assert_eq!(collector.into_value(), "\"users\" \"people\"");
}
