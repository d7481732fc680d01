//! End-to-end formatting scenarios.

use chrono::NaiveDate;
use todofmt::format;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn fmt(today: &str, input: &str) -> String {
    format(day(today), input).unwrap()
}

#[test]
fn test_completed_entry_moves_to_logged() {
    assert_eq!(
        fmt("2022-01-02", "# Inbox\n\nx 2022-01-01 2021-12-01 buy milk\n"),
        "# Logged\n\nx 2022-01-01 2021-12-01 buy milk\n"
    );
}

#[test]
fn test_headerless_entry_lands_in_inbox() {
    assert_eq!(
        fmt("2022-01-01", "due:tomorrow call dentist\n"),
        "# Inbox\n\n  2022-01-01 due:2022-01-02 call dentist\n"
    );
}

#[test]
fn test_mixed_document() {
    let input = "\
call mom due:tomorrow
(A) fix bike s:today

# Projects

  2021-11-01 write report +work @desk
           | outline first

  2021-11-02 plan trip move:someday
x 2021-12-30 2021-12-01 pay rent

# Next

  2021-10-01 read book
";
    let expected = "\
# Inbox

  2022-01-01 call mom due:2022-01-02

# Today

  (A) 2022-01-01 fix bike

# Next

  2021-10-01 read book

# Projects

  2021-11-01 write report +work @desk
           | outline first

# Someday

  2021-11-02 plan trip

# Logged

x 2021-12-30 2021-12-01 pay rent
";
    let once = fmt("2022-01-01", input);
    assert_eq!(once, expected);
    assert_eq!(fmt("2022-01-01", &once), once);
}

#[test]
fn test_scheduled_entries_sorted_and_normalized() {
    let input = "\
# Scheduled

  2021-12-01 dentist s:2022-02-01
  2021-12-01 taxes s:fri
  2021-12-01 gym sched:nextmon
  2021-12-01 party s:t
";
    let expected = "\
# Today

  2021-12-01 party

# Scheduled

  2021-12-01 taxes s:2022-01-07
  2021-12-01 gym sched:2022-01-10
  2021-12-01 dentist s:2022-02-01
";
    assert_eq!(fmt("2022-01-01", input), expected);
}

#[test]
fn test_overdue_entry_keeps_due_tag() {
    assert_eq!(
        fmt("2022-01-01", "# Work\n\n  2021-12-01 file taxes due:2021-12-31\n"),
        "# Today\n\n  2021-12-01 file taxes due:2021-12-31\n"
    );
}

#[test]
fn test_today_wins_over_move_and_drops_it() {
    let once = fmt("2022-01-01", "# Inbox\n\n  s:today move:next\n");
    assert_eq!(once, "# Today\n\n  2022-01-01\n");
    assert_eq!(fmt("2022-01-01", &once), once);
}

#[test]
fn test_manual_move_is_case_insensitive() {
    assert_eq!(
        fmt("2022-01-01", "# Inbox\n\n  2021-12-01 water plants move:NEXT\n"),
        "# Next\n\n  2021-12-01 water plants\n"
    );
}

#[test]
fn test_unknown_sections_cluster_before_someday() {
    let input = "\
# Work

  2021-12-01 w

# Someday

  2021-12-01 s

# Errands

  2021-12-01 e

# Inbox

  2021-12-01 i
";
    let expected = "\
# Inbox

  2021-12-01 i

# Work

  2021-12-01 w

# Errands

  2021-12-01 e

# Someday

  2021-12-01 s
";
    assert_eq!(fmt("2022-01-01", input), expected);
}

#[test]
fn test_blank_blocks_collapse() {
    let input = "\
# Work

  2021-12-01 a

  2021-12-01 b move:someday



  2021-12-01 c
";
    let expected = "\
# Work

  2021-12-01 a

  2021-12-01 c

# Someday

  2021-12-01 b
";
    assert_eq!(fmt("2022-01-01", input), expected);
}

#[test]
fn test_logbook_splits_one_week_per_pass() {
    let input = "\
# Logged

x 2022-01-03 2022-01-01 a
x 2022-01-11 2022-01-01 b
x 2021-12-28 2021-12-01 c

x 2021-11-01 2021-10-01 old
";
    let first = fmt("2022-01-12", input);
    assert_eq!(
        first,
        "\
# Logged

x 2022-01-11 2022-01-01 b
x 2022-01-03 2022-01-01 a

x 2021-12-28 2021-12-01 c

x 2021-11-01 2021-10-01 old
"
    );

    let second = fmt("2022-01-12", &first);
    assert_eq!(
        second,
        "\
# Logged

x 2022-01-11 2022-01-01 b

x 2022-01-03 2022-01-01 a

x 2021-12-28 2021-12-01 c

x 2021-11-01 2021-10-01 old
"
    );
    assert_eq!(fmt("2022-01-12", &second), second);
}

#[test]
fn test_notes_travel_with_entry() {
    let input = "\
  2021-12-01 book flights s:waiting
           | compare prices due:never
           |
";
    let expected = "\
# Waiting

  2021-12-01 book flights
           | compare prices due:never
           |
";
    assert_eq!(fmt("2022-01-01", input), expected);
}

#[test]
fn test_parse_errors_are_rejected() {
    let today = day("2022-01-01");
    for input in ["# Inbox", "# Inbox +x\n", "#\n", "  2021-12-01 +\n"] {
        let err = format(today, input).unwrap_err();
        assert!(err.is_parse(), "{input:?} gave {err}");
    }
}
