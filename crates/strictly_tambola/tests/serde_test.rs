//! Tests for reading and writing claims in external formats.

use strictly_tambola::{Cell, Claim, GameType, Reason, Ticket, Verdict};

#[test]
fn test_ticket_from_toml_with_markers() {
    let text = r#"
        game_type = "top_line"
        announced = [1, 2, 3, 4, 5]
        ticket = [
          [1, "-", 2, "-", 3, "-", 4, "-", 5],
          [6, 0, 7, 0, 8, 0, 9, 0, 10],
          [11, "-", 12, "-", 13, "-", 14, "-", 15],
        ]
    "#;

    let claim: Claim = toml::from_str(text).expect("claim should parse");
    assert_eq!(claim.game_type(), GameType::TopLine);
    assert_eq!(claim.ticket().rows()[0][1], Cell::Blank);
    assert_eq!(claim.ticket().rows()[1][1], Cell::Blank);
    assert_eq!(claim.evaluate(), Verdict::Accepted);
}

#[test]
fn test_malformed_ticket_fails_to_deserialize() {
    let text = r#"[[1, 2, 3], [4, 5, 6], [7, 8, 9]]"#;
    let err = serde_json::from_str::<Ticket>(text).expect_err("3x3 grid is not a ticket");
    assert!(err.to_string().contains("must have exactly 9 cells"));
}

#[test]
fn test_unknown_marker_fails_to_deserialize() {
    let text = r#"[["x", 0, 0, 0, 0, 0, 0, 0, 0]]"#;
    assert!(serde_json::from_str::<Vec<Vec<Cell>>>(text).is_err());
}

#[test]
fn test_ticket_serializes_blanks_as_zero() {
    let ticket = Ticket::from_numbers([[1, 0, 0, 0, 0, 0, 0, 0, 90]; 3]);
    let json = serde_json::to_string(&ticket).expect("ticket should serialize");
    assert!(json.starts_with("[[1,0,0,0,0,0,0,0,90]"));
}

#[test]
fn test_game_type_uses_tags() {
    let json = serde_json::to_string(&GameType::EarlyFive).expect("serialize");
    assert_eq!(json, r#""early_five""#);
    assert!(serde_json::from_str::<GameType>(r#""corners""#).is_err());
}

#[test]
fn test_reason_is_tagged() {
    let json = serde_json::to_string(&Reason::PatternIncomplete { missing: 3 }).expect("serialize");
    assert_eq!(json, r#"{"kind":"pattern_incomplete","missing":3}"#);
}
