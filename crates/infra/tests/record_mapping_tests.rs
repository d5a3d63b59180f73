use std::collections::HashMap;

use infra::models::{CommonTeammateRow, PlayerRow, TeammateRow};
use neo4rs::{BoltList, BoltNull, BoltType, Row};

fn record(fields: &[&str], values: Vec<BoltType>) -> Row {
    let fields: Vec<BoltType> = fields.iter().map(|f| BoltType::from(*f)).collect();
    Row::new(BoltList::from(fields), BoltList::from(values))
}

fn non_text_histories() -> Vec<(&'static str, BoltType)> {
    vec![
        ("null", BoltType::Null(BoltNull)),
        ("integer", BoltType::from(42_i64)),
        ("boolean", BoltType::from(true)),
        ("list", BoltType::from(vec!["ClubX", "2019/20"])),
        (
            "map",
            BoltType::from(HashMap::from([("ClubX".to_string(), 2019_i64)])),
        ),
    ]
}

#[test]
fn test_player_record() {
    let row = record(&["name"], vec![BoltType::from("Alice")]);

    assert_eq!(
        row.to::<PlayerRow>().unwrap(),
        PlayerRow {
            name: "Alice".to_string()
        }
    );
}

#[test]
fn test_teammate_record_keeps_history_text() {
    let row = record(
        &["teammate", "history"],
        vec![
            BoltType::from("Bob"),
            BoltType::from(r#"{"ClubX": ["2019/20"]}"#),
        ],
    );

    assert_eq!(
        row.to::<TeammateRow>().unwrap(),
        TeammateRow {
            teammate: "Bob".to_string(),
            history: Some(r#"{"ClubX": ["2019/20"]}"#.to_string()),
        }
    );
}

#[test]
fn test_non_text_history_reads_as_absent() {
    for (kind, history) in non_text_histories() {
        let row = record(
            &["teammate", "history"],
            vec![BoltType::from("Bob"), history],
        );

        let mapped = row.to::<TeammateRow>();

        assert!(mapped.is_ok(), "{kind} history should not fail: {mapped:?}");
        assert_eq!(mapped.unwrap().history, None, "{kind} history");
    }
}

#[test]
fn test_non_text_history_reads_as_absent_for_common_teammates() {
    for (kind, history) in non_text_histories() {
        let row = record(
            &["teammate", "with_player", "history"],
            vec![BoltType::from("Carol"), BoltType::from("Dan"), history],
        );

        let mapped = row.to::<CommonTeammateRow>();

        assert!(mapped.is_ok(), "{kind} history should not fail: {mapped:?}");
        assert_eq!(
            mapped.unwrap(),
            CommonTeammateRow {
                teammate: "Carol".to_string(),
                with_player: "Dan".to_string(),
                history: None,
            }
        );
    }
}

#[test]
fn test_missing_history_column_reads_as_absent() {
    let row = record(&["teammate"], vec![BoltType::from("Bob")]);

    assert_eq!(row.to::<TeammateRow>().unwrap().history, None);
}

#[test]
fn test_missing_teammate_is_an_error() {
    let row = record(
        &["history"],
        vec![BoltType::from(r#"{"ClubX": ["2019/20"]}"#)],
    );

    assert!(row.to::<TeammateRow>().is_err());
}

#[test]
fn test_non_text_teammate_is_an_error() {
    let row = record(
        &["teammate", "with_player", "history"],
        vec![
            BoltType::from(7_i64),
            BoltType::from("Dan"),
            BoltType::Null(BoltNull),
        ],
    );

    assert!(row.to::<CommonTeammateRow>().is_err());
}
