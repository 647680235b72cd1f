//! Cursor paging over a real table.

use crate::{
    fixtures::Category,
    utils::{execute, open, query_ids},
};
use model::pagination::settings::PageSettings;
use rusqlite::Connection;
use sqlgen::{
    pagination::{
        directive::{PageDirective, Paginator},
        page::Page,
        request::PageRequest,
    },
    query::{ast::filter::Joiner, generator::QueryGenerator, renderer::Statement},
};

fn seeded(rows: usize) -> Connection {
    let conn = open().unwrap();
    let generator = QueryGenerator::default();
    for i in 0..rows {
        let category = Category {
            id: format!("{i:03}"),
            name: format!("Game {i}"),
            ..Default::default()
        };
        let stmt = generator
            .build_insert("categories", "id", &category, false)
            .unwrap();
        execute(&conn, &stmt).unwrap();
    }
    conn
}

fn fetch(conn: &Connection, request: &PageRequest) -> (Page<String>, PageDirective) {
    let directive = Paginator::new(PageSettings::new(20, 100)).directive(request);
    let stmt = Statement {
        sql: "select id from categories order by id".to_string(),
        binds: vec![],
    }
    .paginate(&directive);

    let rows = if directive.is_suppressed() {
        Vec::new()
    } else {
        query_ids(conn, &stmt).unwrap()
    };
    (Page::from_rows(rows, &directive), directive)
}

#[test]
fn test_exact_page_offers_cursor() {
    let conn = seeded(20);
    let (page, _) = fetch(&conn, &PageRequest::first(20));

    assert_eq!(page.data.len(), 20);
    assert!(page.pagination.cursor.is_some());
}

#[test]
fn test_short_page_offers_no_cursor() {
    let conn = seeded(18);
    let (page, _) = fetch(&conn, &PageRequest::first(20));

    assert_eq!(page.data.len(), 18);
    assert_eq!(page.pagination.cursor, None);
}

#[test]
fn test_walks_forward_and_back() {
    let conn = seeded(45);

    let (first, _) = fetch(&conn, &PageRequest::first(20));
    assert_eq!(first.data.first().map(String::as_str), Some("000"));
    let cursor = first.pagination.cursor.unwrap();

    let (second, directive) = fetch(&conn, &PageRequest::first(20).after(cursor));
    assert_eq!(directive.offset, Some(20));
    assert_eq!(second.data.first().map(String::as_str), Some("020"));
    let cursor = second.pagination.cursor.unwrap();

    let (third, _) = fetch(&conn, &PageRequest::first(20).after(cursor.clone()));
    assert_eq!(third.data.len(), 5);
    assert_eq!(third.data.last().map(String::as_str), Some("044"));
    assert_eq!(third.pagination.cursor, None);

    let (back, directive) = fetch(&conn, &PageRequest::first(20).before(cursor));
    assert_eq!(directive.offset, Some(0));
    assert_eq!(back.data, first.data);
}

#[test]
fn test_before_first_page_is_suppressed() {
    let conn = seeded(45);

    let (first, _) = fetch(&conn, &PageRequest::first(20));
    let cursor = first.pagination.cursor.unwrap();

    let (page, directive) = fetch(&conn, &PageRequest::first(20).before(cursor));
    assert!(directive.is_suppressed());
    assert!(page.data.is_empty());
    assert_eq!(page.pagination.cursor, None);
}

#[test]
fn test_filtered_and_paged() {
    let conn = seeded(30);
    let directive = Paginator::default().directive(&PageRequest::first(1));

    let criteria = Category {
        name: "Game 7".into(),
        ..Default::default()
    };
    let stmt = QueryGenerator::default()
        .build_filter("select id from categories", &criteria, Joiner::And)
        .paginate(&directive);

    assert_eq!(
        stmt.sql,
        "select id from categories where category_name = :name LIMIT 1 OFFSET 0"
    );
    assert_eq!(query_ids(&conn, &stmt).unwrap(), vec!["007"]);
}
