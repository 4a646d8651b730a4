//! Edge-case tests: malformed, boundary, and unusual inputs.

use chatlens::prelude::*;

#[test]
fn empty_document_yields_empty_everything() {
    let messages = ChatParser::new().parse_str("");
    assert!(messages.is_empty());

    let analyzer = Analyzer::new();
    assert_eq!(
        analyzer.fetch_stats(&Scope::Overall, &messages),
        ChatStats::default()
    );
    assert!(analyzer.most_busy_users(&messages).top.is_empty());
    assert!(analyzer.word_frequency(&Scope::Overall, &messages).top.is_empty());
    assert!(analyzer.emoji_frequency(&Scope::Overall, &messages).is_empty());
    assert!(analyzer.monthly_timeline(&Scope::Overall, &messages).is_empty());
    assert!(analyzer.daily_timeline(&Scope::Overall, &messages).is_empty());
    assert!(analyzer.week_activity(&Scope::Overall, &messages).is_empty());

    let heatmap = analyzer.activity_heatmap(&Scope::Overall, &messages);
    assert_eq!(heatmap.rows.len(), 7);
    assert!(heatmap.periods.is_empty());
}

#[test]
fn non_matching_document_yields_empty_sequence() {
    let messages = ChatParser::new().parse_str("just some prose\nwith no timestamps at all\n");
    assert!(messages.is_empty());
}

#[test]
fn unknown_scope_user_returns_empty_results() {
    let messages = ChatParser::new().parse_str("12/08/23, 9:00 pm - Alice: hi");
    let analyzer = Analyzer::new();
    let scope = Scope::user("NotInChat");

    assert_eq!(analyzer.fetch_stats(&scope, &messages), ChatStats::default());
    assert!(analyzer.monthly_timeline(&scope, &messages).is_empty());
    assert!(analyzer.emoji_frequency(&scope, &messages).is_empty());
}

#[test]
fn invalid_calendar_date_is_dropped_not_fatal() {
    // 30/02 does not exist; the rest of the export still parses.
    let input = "30/02/23, 9:00 pm - Alice: impossible\n12/08/23, 9:01 pm - Bob: fine";
    let messages = ChatParser::new().parse_str(input);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].user, "Bob");
}

#[test]
fn continuation_before_any_entry_is_dropped() {
    let input = "orphan line\n12/08/23, 9:00 pm - Alice: hi\ntail line";
    let messages = ChatParser::new().parse_str(input);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].message, "hi\ntail line");
}

#[test]
fn blank_lines_are_skipped() {
    let input = "12/08/23, 9:00 pm - Alice: hi\n\n   \n12/08/23, 9:01 pm - Bob: yo";
    let messages = ChatParser::new().parse_str(input);
    assert_eq!(messages.len(), 2);
}

#[test]
fn midnight_and_pre_midnight_periods() {
    let input = "12/08/23, 12:05 am - Alice: past midnight\n12/08/23, 11:55 pm - Alice: almost midnight";
    let messages = ChatParser::new().parse_str(input);
    assert_eq!(messages[0].hour, 0);
    assert_eq!(messages[0].period, "0-1");
    assert_eq!(messages[1].hour, 23);
    assert_eq!(messages[1].period, "23-0");
}

#[test]
fn noon_and_midnight_twelve_hour_clock() {
    let messages = ChatParser::new()
        .parse_str("12/08/23, 12:00 pm - Alice: noon\n12/08/23, 12:00 am - Bob: midnight");
    assert_eq!(messages[0].hour, 12);
    assert_eq!(messages[1].hour, 0);
}

#[test]
fn uppercase_am_pm_accepted() {
    let messages = ChatParser::new().parse_str("12/08/23, 9:00 PM - Alice: shouting time");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].hour, 21);
}

#[test]
fn notification_without_colon_gets_sentinel_user() {
    let messages = ChatParser::new()
        .parse_str("12/08/23, 9:00 pm - Messages and calls are end-to-end encrypted");
    assert_eq!(messages[0].user, GROUP_NOTIFICATION);
    assert!(messages[0].is_notification());
}

#[test]
fn media_placeholder_survives_as_user_message() {
    let messages = ChatParser::new().parse_str("12/08/23, 9:00 pm - Alice: <Media omitted>");
    assert_eq!(messages[0].user, "Alice");
    assert!(messages[0].is_media());
    assert_eq!(messages[0].message, MEDIA_OMITTED);
}

#[test]
fn unicode_senders_and_bodies() {
    let messages = ChatParser::new()
        .parse_str("12/08/23, 9:00 pm - Мария: Привет мир\n12/08/23, 9:01 pm - 李华: 你好");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].user, "Мария");
    assert_eq!(messages[1].message, "你好");
}

#[test]
fn word_frequency_ties_keep_first_occurrence() {
    let messages = ChatParser::new()
        .parse_str("12/08/23, 9:00 pm - A: zebra apple\n12/08/23, 9:01 pm - A: zebra apple");
    let analyzer = Analyzer::with_config(AnalyzerConfig::new().with_stop_words(Vec::<String>::new()));
    let wf = analyzer.word_frequency(&Scope::Overall, &messages);
    assert_eq!(wf.top[0].token, "zebra");
    assert_eq!(wf.top[1].token, "apple");
    assert_eq!(wf.top[0].count, 2);
}

#[test]
fn message_count_never_exceeds_physical_lines() {
    let input = "12/08/23, 9:00 pm - A: one\nwrapped\n12/08/23, 9:01 pm - B: two\n\ngarbage";
    let lines = input.lines().count();
    let messages = ChatParser::new().parse_str(input);
    assert!(messages.len() <= lines);
}

#[test]
fn single_notification_only_chat() {
    let messages =
        ChatParser::new().parse_str("12/08/23, 9:00 pm - Bob joined using this group's invite link");
    let users = user_list(&messages);
    // Only the sentinel posted, so the selector holds just "Overall".
    assert_eq!(users, ["Overall"]);

    let busy = Analyzer::new().most_busy_users(&messages);
    assert_eq!(busy.top.len(), 1);
    assert_eq!(busy.top[0].user, GROUP_NOTIFICATION);
}
