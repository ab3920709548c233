use cyoa_api::{GameId, MatchType, SearchResultEntry};
use cyoa_present::{present_results, Badge, ResultsView, SnippetSegment};

fn entry(title: &str, score: f64, match_type: MatchType, snippet: Option<&str>) -> SearchResultEntry {
    SearchResultEntry {
        id: GameId::Text(title.to_ascii_lowercase()),
        title: title.into(),
        url: format!("/g/{}", title.to_ascii_lowercase()),
        score,
        match_type,
        snippet: snippet.map(str::to_string),
    }
}

#[test]
fn single_text_match_has_badge_score_and_no_snippet() {
    let view = present_results(
        &[SearchResultEntry {
            id: GameId::Int(1),
            title: "Foo".into(),
            url: "/g/1".into(),
            score: 87.0,
            match_type: MatchType::Text,
            snippet: None,
        }],
        "fts",
    );
    let records = view.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Foo");
    assert_eq!(records[0].url, "/g/1");
    assert_eq!(records[0].badge.label(), "Text Match");
    assert_eq!(records[0].score_label, "87%");
    assert!(records[0].snippet.is_none());
    assert_eq!(view.message(), None);
}

#[test]
fn empty_results_signal_empty_state_with_mode() {
    let view = present_results(&[], "semantic");
    assert!(view.is_empty());
    assert_eq!(view, ResultsView::Empty { mode_used: "semantic".into() });
    assert_eq!(view.message().as_deref(), Some("No results found in semantic mode."));
}

#[test]
fn summary_match_gets_ai_badge_and_snippet() {
    let view = present_results(
        &[entry("Dragon", 91.0, MatchType::Summary, Some("Fly.\nBurn.\nRest."))],
        "mixed",
    );
    let rec = &view.records()[0];
    assert_eq!(rec.badge, Badge::AiMatch);
    assert_eq!(rec.badge.label(), "AI Match");
    let snippet = rec.snippet.as_ref().expect("snippet block");
    assert_eq!(snippet.line_breaks(), 2);
    assert!(!snippet.expanded);
    assert_eq!(snippet.segments[0], SnippetSegment::Text("Fly.".into()));
    assert_eq!(snippet.segments[1], SnippetSegment::LineBreak);
}

#[test]
fn text_match_never_shows_snippet_even_if_backend_sent_one() {
    let view = present_results(&[entry("Quest", 50.0, MatchType::Text, Some("has\nsummary"))], "mixed");
    assert!(view.records()[0].snippet.is_none());
}

#[test]
fn summary_match_without_snippet_shows_none() {
    let view = present_results(
        &[
            entry("A", 10.0, MatchType::Summary, None),
            entry("B", 20.0, MatchType::Summary, Some("   ")),
        ],
        "summary",
    );
    assert!(view.records().iter().all(|r| r.snippet.is_none()));
    assert!(view.records().iter().all(|r| r.badge == Badge::AiMatch));
}

#[test]
fn line_break_count_matches_newlines() {
    for text in ["one", "a\nb", "\n\nx\n", "x\r\ny\r\nz", "trailing\n"] {
        let view = present_results(&[entry("T", 1.0, MatchType::Summary, Some(text))], "mixed");
        let snippet = view.records()[0].snippet.as_ref().unwrap();
        assert_eq!(snippet.line_breaks(), text.matches('\n').count(), "text: {text:?}");
        assert!(!snippet
            .segments
            .iter()
            .any(|s| matches!(s, SnippetSegment::Text(t) if t.contains('\r') || t.contains('\n'))));
    }
}

#[test]
fn scores_pass_through_unchanged_and_order_is_kept() {
    let input = [
        entry("Low", 12.345, MatchType::Text, None),
        entry("High", 100.0, MatchType::Text, None),
        entry("Over", 125.0, MatchType::Summary, Some("s")),
    ];
    let view = present_results(&input, "mixed");
    let scores: Vec<f64> = view.records().iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![12.345, 100.0, 125.0]);
    let labels: Vec<&str> = view.records().iter().map(|r| r.score_label.as_str()).collect();
    assert_eq!(labels, vec!["12.345%", "100%", "125%"]);
    assert_eq!(view.records()[0].title, "Low");
}

#[test]
fn snippet_toggle_is_owned_by_the_view() {
    let mut view = present_results(&[entry("T", 1.0, MatchType::Summary, Some("s"))], "mixed");
    if let ResultsView::Matches { records, .. } = &mut view {
        let snippet = records[0].snippet.as_mut().unwrap();
        snippet.toggle();
        assert!(snippet.expanded);
        snippet.toggle();
        assert!(!snippet.expanded);
    } else {
        panic!("expected matches");
    }
}

#[test]
fn view_serializes_with_state_tag() {
    let v = serde_json::to_value(present_results(&[], "text")).unwrap();
    assert_eq!(v["state"], "empty");
    assert_eq!(v["mode_used"], "text");

    let v = serde_json::to_value(present_results(&[entry("A", 5.0, MatchType::Text, None)], "text")).unwrap();
    assert_eq!(v["state"], "matches");
    assert_eq!(v["records"][0]["score_label"], "5%");
    assert!(v["records"][0].get("snippet").is_none());
}

#[test]
fn badge_serializes_as_its_display_label() {
    let results = [
        entry("A", 90.0, MatchType::Summary, Some("s")),
        entry("B", 80.0, MatchType::Text, None),
    ];
    let v = serde_json::to_value(present_results(&results, "mixed")).unwrap();
    assert_eq!(v["records"][0]["badge"], "AI Match");
    assert_eq!(v["records"][1]["badge"], "Text Match");
}
