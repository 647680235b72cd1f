//! Generated statements executed against an in-memory SQLite store.

use crate::{
    fixtures::{Category, Owner, Reward, RewardLimits, RewardLookup, RewardQuery},
    utils::{execute, open, query_ids},
};
use rusqlite::Connection;
use sqlgen::query::{ast::filter::Joiner, generator::QueryGenerator};
use tracing_test::traced_test;

fn category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        ..Default::default()
    }
}

fn reward(id: &str, cost: i64, enabled: bool) -> Reward {
    Reward {
        id: id.to_string(),
        broadcaster_id: "b1".to_string(),
        title: format!("Reward {id}"),
        cost,
        enabled,
        ..Default::default()
    }
}

fn seed_rewards(conn: &Connection) {
    let generator = QueryGenerator::default();
    for r in [
        reward("r1", 100, true),
        reward("r2", 0, false),
        reward("r3", 100, false),
    ] {
        let stmt = generator.build_insert("rewards", "id", &r, false).unwrap();
        execute(conn, &stmt).unwrap();
    }
}

fn name_of(conn: &Connection, id: &str) -> String {
    conn.query_row(
        "select category_name from categories where id = ?1",
        [id],
        |row| row.get(0),
    )
    .unwrap()
}

#[traced_test]
#[test]
fn test_insert_then_filter() {
    let conn = open().unwrap();
    let generator = QueryGenerator::default();

    for c in [category("1", "Chess"), category("2", "Just Chatting")] {
        let stmt = generator.build_insert("categories", "", &c, false).unwrap();
        assert_eq!(execute(&conn, &stmt).unwrap(), 1);
    }

    let stmt = generator.build_filter(
        "select id from categories",
        &category("", "Chess"),
        Joiner::And,
    );
    assert_eq!(query_ids(&conn, &stmt).unwrap(), vec!["1"]);
    assert!(logs_contain("Generated filter"));
}

#[test]
fn test_empty_filter_returns_everything() {
    let conn = open().unwrap();
    seed_rewards(&conn);

    let stmt = QueryGenerator::default().build_filter(
        "select id from rewards order by id",
        &RewardQuery::default(),
        Joiner::And,
    );
    assert_eq!(stmt.sql, "select id from rewards order by id");
    assert_eq!(query_ids(&conn, &stmt).unwrap(), vec!["r1", "r2", "r3"]);
}

#[test]
fn test_upsert_overwrites_existing_row() {
    let conn = open().unwrap();
    let generator = QueryGenerator::default();

    let stmt = generator
        .build_insert("categories", "id", &category("1", "Chess"), true)
        .unwrap();
    execute(&conn, &stmt).unwrap();

    let stmt = generator
        .build_insert("categories", "id", &category("1", "Chess960"), true)
        .unwrap();
    execute(&conn, &stmt).unwrap();

    assert_eq!(name_of(&conn, "1"), "Chess960");
}

#[test]
fn test_plain_insert_conflicts() {
    let conn = open().unwrap();
    let generator = QueryGenerator::default();

    let stmt = generator
        .build_insert("categories", "id", &category("1", "Chess"), false)
        .unwrap();
    execute(&conn, &stmt).unwrap();
    assert!(execute(&conn, &stmt).is_err());
}

#[test]
fn test_option_filter_matches_explicit_false() {
    let conn = open().unwrap();
    seed_rewards(&conn);
    let generator = QueryGenerator::default();

    let disabled = RewardQuery {
        enabled: Some(false),
        ..Default::default()
    };
    let stmt = generator.build_filter("select id from rewards", &disabled, Joiner::And);
    assert_eq!(stmt.sql, "select id from rewards where is_enabled = :enabled");
    let mut ids = query_ids(&conn, &stmt).unwrap();
    ids.sort();
    assert_eq!(ids, vec!["r2", "r3"]);
}

#[test]
fn test_or_filter() {
    let conn = open().unwrap();
    seed_rewards(&conn);

    let criteria = RewardQuery {
        enabled: Some(true),
        cost: 0,
        paused: None,
    };
    let stmt = QueryGenerator::default().build_filter("select id from rewards", &criteria, Joiner::Or);
    assert_eq!(query_ids(&conn, &stmt).unwrap(), vec!["r1"]);

    let criteria = RewardQuery {
        enabled: Some(true),
        cost: 100,
        paused: None,
    };
    let stmt = QueryGenerator::default().build_filter("select id from rewards", &criteria, Joiner::Or);
    let mut ids = query_ids(&conn, &stmt).unwrap();
    ids.sort();
    assert_eq!(ids, vec!["r1", "r3"]);
}

#[test]
fn test_join_filter_uses_qualified_column() {
    let conn = open().unwrap();
    seed_rewards(&conn);
    conn.execute_batch("insert into users (id, display_name) values ('b1', 'ann')")
        .unwrap();

    let criteria = Reward {
        broadcaster_name: "ann".into(),
        cost: 100,
        ..Default::default()
    };
    let stmt = QueryGenerator::default().build_filter(
        "select r.id from rewards r join users u on u.id = r.broadcaster_id",
        &criteria,
        Joiner::And,
    );
    assert!(stmt.sql.ends_with("where cost = :cost and u.display_name = :broadcaster_name"));

    let mut ids = query_ids(&conn, &stmt).unwrap();
    ids.sort();
    assert_eq!(ids, vec!["r1", "r3"]);
}

#[test]
fn test_group_filter_binds_its_own_value() {
    let conn = open().unwrap();
    seed_rewards(&conn);

    let lookup = RewardLookup {
        id: "r1".into(),
        owner: Owner { id: "b1".into() },
    };
    let stmt = QueryGenerator::default().build_filter("select id from rewards", &lookup, Joiner::And);
    assert_eq!(
        stmt.sql,
        "select id from rewards where id = :id and broadcaster_id = :id_2"
    );
    assert_eq!(query_ids(&conn, &stmt).unwrap(), vec!["r1"]);

    let lookup = RewardLookup {
        id: "r1".into(),
        owner: Owner { id: "b2".into() },
    };
    let stmt = QueryGenerator::default().build_filter("select id from rewards", &lookup, Joiner::And);
    assert!(query_ids(&conn, &stmt).unwrap().is_empty());
}

#[test]
fn test_partial_update_keeps_other_columns() {
    let conn = open().unwrap();
    seed_rewards(&conn);

    let patch = Reward {
        id: "r1".into(),
        title: "Hydrate".into(),
        limits: RewardLimits {
            max_per_stream: Some(3),
        },
        ..Default::default()
    };
    let stmt = QueryGenerator::default()
        .build_update("rewards", &["id"], &patch)
        .unwrap();
    assert_eq!(
        stmt.sql,
        "update rewards set id=:id, title=:title, max_per_stream=:max_per_stream where id=:id"
    );
    assert_eq!(execute(&conn, &stmt).unwrap(), 1);

    let (title, cost, max): (String, i64, Option<i64>) = conn
        .query_row(
            "select title, cost, max_per_stream from rewards where id = 'r1'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .unwrap();
    assert_eq!(title, "Hydrate");
    assert_eq!(cost, 100);
    assert_eq!(max, Some(3));
}

#[test]
fn test_forced_column_can_be_cleared() {
    let conn = open().unwrap();
    let generator = QueryGenerator::default();

    let mut r = reward("r9", 50, true);
    r.limits.max_per_stream = Some(5);
    execute(&conn, &generator.build_insert("rewards", "id", &r, false).unwrap()).unwrap();

    let patch = Reward {
        id: "r9".into(),
        ..Default::default()
    };
    let stmt = generator.build_update("rewards", &["id"], &patch).unwrap();
    execute(&conn, &stmt).unwrap();

    let max: Option<i64> = conn
        .query_row("select max_per_stream from rewards where id = 'r9'", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(max, None);
}
