// Integration tests (native) for the host bridge wire format and the
// high-score parsing fallback. The transport itself is browser-only; the
// JSON shapes and defaults are checked here.

use hungrymod_karma::game::bridge::{HostEvent, HostRequest, decode};
use hungrymod_karma::game::ledger::parse_score;

#[test]
fn outbound_requests_use_the_host_tag_names() {
    assert_eq!(
        serde_json::to_string(&HostRequest::WebViewReady).unwrap(),
        r#"{"type":"webViewReady"}"#
    );
    assert_eq!(
        serde_json::to_string(&HostRequest::GetHighScore).unwrap(),
        r#"{"type":"getHighScore"}"#
    );
    assert_eq!(
        serde_json::to_string(&HostRequest::SaveHighScore { score: 420 }).unwrap(),
        r#"{"type":"saveHighScore","score":420}"#
    );
}

#[test]
fn high_score_data_decodes() {
    let event = decode(r#"{"type":"highScoreData","highScore":1234}"#).unwrap();
    assert_eq!(event, HostEvent::HighScoreData { high_score: 1234 });
}

#[test]
fn initial_data_decodes() {
    let event = decode(r#"{"type":"initialData","username":"u/mod","gameReady":true}"#).unwrap();
    assert_eq!(
        event,
        HostEvent::InitialData {
            username: "u/mod".to_string(),
            game_ready: true,
        }
    );
}

#[test]
fn unknown_and_malformed_messages_decode_to_none() {
    assert!(decode(r#"{"type":"somethingElse"}"#).is_none());
    assert!(decode("not json at all").is_none());
    assert!(decode(r#"{"highScore":5}"#).is_none());
    // Wrong payload shape for a known tag is also ignored.
    assert!(decode(r#"{"type":"highScoreData","highScore":"many"}"#).is_none());
}

#[test]
fn stored_scores_parse_with_a_zero_fallback() {
    assert_eq!(parse_score("123"), 123);
    assert_eq!(parse_score(" 42 "), 42);
    assert_eq!(parse_score(""), 0);
    assert_eq!(parse_score("not-a-number"), 0);
    assert_eq!(parse_score("12.5"), 0);
}
