use super::*;
use crate::model::{FileStatus, RevisionId};
use std::path::PathBuf;

const TRUNK_LOG: &str = "\
RCS file: /cvsroot/proj/main.c,v
Working file: main.c
head: 1.9
branch:
locks: strict
access list:
keyword substitution: kv
total revisions: 3;\tselected revisions: 3
description:
----------------------------
revision 1.3
date: 2021/03/04 10:11:12;  author: jon;  state: Exp;  lines: +2 -1;
Fix overflow in the tokenizer
----------------------------
revision 1.2
date: 2021/02/01 09:00:00;  author: amy;  state: Exp;  lines: +10 -0;
branches:  1.2.2;
Add tokenizer

Covers identifiers and numbers only.
----------------------------
revision 1.1
date: 2021/01/15 08:30:00;  author: jon;  state: Exp;
Initial revision
=============================================================================
";

fn rev(id: &str) -> RevisionId {
    RevisionId::new(id)
}

#[test]
fn test_parse_log_head_and_count() {
    let log = Parser::parse_log(TRUNK_LOG, None);
    assert_eq!(log.head, rev("1.9"));
    assert_eq!(log.entries.len(), 3);
    let ids: Vec<&str> = log.entries.iter().map(|e| e.revision_id.as_str()).collect();
    assert_eq!(ids, vec!["1.3", "1.2", "1.1"]);
}

#[test]
fn test_parse_log_metadata() {
    let log = Parser::parse_log(TRUNK_LOG, None);
    let first = &log.entries[0];
    assert_eq!(first.author, "jon");
    assert_eq!(first.date, "2021/03/04");
    assert_eq!(first.short_message, "Fix overflow in the tokenizer  ");
    assert_eq!(first.full_message, "Fix overflow in the tokenizer\n");
    assert!(!first.is_head_marker);
}

#[test]
fn test_parse_log_skips_branches_line() {
    let log = Parser::parse_log(TRUNK_LOG, None);
    let second = &log.entries[1];
    assert_eq!(second.author, "amy");
    assert_eq!(second.short_message, "Add tokenizer    ");
    assert_eq!(
        second.full_message,
        "Add tokenizer\n\nCovers identifiers and numbers only.\n"
    );
}

#[test]
fn test_parse_log_drops_branches_lines_inside_message() {
    let output = "head: 1.4\n\
                  ----------------------------\n\
                  revision 1.4\n\
                  date: 2021/04/01 08:30:00;  author: jon;  state: Exp;\n\
                  first line\n\
                  merged branches: a and b\n\
                  third\n\
                  =============================================================================\n";
    let log = Parser::parse_log(output, None);
    assert_eq!(log.entries[0].short_message, "first line  third  ");
    assert_eq!(log.entries[0].full_message, "first line\nthird\n");
}

#[test]
fn test_parse_log_marks_active_revision() {
    let log = Parser::parse_log(TRUNK_LOG, Some(&rev("1.2")));
    let active: Vec<bool> = log.entries.iter().map(|e| e.is_active_revision).collect();
    assert_eq!(active, vec![false, true, false]);
}

#[test]
fn test_parse_log_short_message_keeps_two_lines() {
    let output = "head: 1.1\n\
                  ----------------------------\n\
                  revision 1.1\n\
                  date: 2021/01/15 08:30:00;  author: jon;  state: Exp;\n\
                  one   \n\
                  two\n\
                  three\n\
                  four\n\
                  five\n\
                  =============================================================================\n";
    let log = Parser::parse_log(output, None);
    assert_eq!(log.entries[0].short_message, "one  two  ");
    assert_eq!(
        log.entries[0].full_message,
        "one   \ntwo\nthree\nfour\nfive\n"
    );
}

#[test]
fn test_parse_log_empty_input() {
    let log = Parser::parse_log("", None);
    assert!(log.head.is_empty());
    assert!(log.entries.is_empty());
}

#[test]
fn test_parse_log_header_only() {
    let log = Parser::parse_log("RCS file: a,v\nhead: 1.4\n====\n", None);
    assert_eq!(log.head, rev("1.4"));
    assert!(log.entries.is_empty());
}

#[test]
fn test_parse_log_record_without_metadata() {
    let output = "head: 1.2\n\
                  ----------------------------\n\
                  revision 1.2\n\
                  just a message\n\
                  ----------------------------\n\
                  revision 1.1\n\
                  date: 2021/01/15 08:30:00;  author: jon;  state: Exp;\n\
                  Initial revision\n\
                  ====================\n";
    let log = Parser::parse_log(output, None);
    assert_eq!(log.entries.len(), 2);
    assert_eq!(log.entries[0].revision_id, rev("1.2"));
    assert_eq!(log.entries[0].author, "");
    assert_eq!(log.entries[0].date, "");
    assert_eq!(log.entries[0].short_message, "just a message  ");
    assert_eq!(log.entries[1].author, "jon");
}

#[test]
fn test_parse_log_record_without_message() {
    let output = "head: 1.1\n\
                  ----------------------------\n\
                  revision 1.1\n\
                  date: 2021/01/15 08:30:00;  author: jon;  state: Exp;\n\
                  =========\n";
    let log = Parser::parse_log(output, None);
    assert_eq!(log.entries.len(), 1);
    assert_eq!(log.entries[0].short_message, "");
    assert_eq!(log.entries[0].full_message, "");
}

#[test]
fn test_parse_log_crlf_line_endings() {
    let output = TRUNK_LOG.replace('\n', "\r\n");
    let log = Parser::parse_log(&output, None);
    assert_eq!(log.head, rev("1.9"));
    assert_eq!(log.entries.len(), 3);
    assert_eq!(log.entries[0].full_message, "Fix overflow in the tokenizer\n");
}

#[test]
fn test_parse_log_longer_dash_rule() {
    let output = TRUNK_LOG.replace("----------------------------", "----------------------------------------");
    let log = Parser::parse_log(&output, None);
    assert_eq!(log.entries.len(), 3);
}

#[test]
fn test_parse_log_short_dash_rule_is_not_a_boundary() {
    let output = TRUNK_LOG.replace("----------------------------", "-----");
    let log = Parser::parse_log(&output, None);
    assert!(log.entries.is_empty());
    assert_eq!(log.head, rev("1.9"));
}

#[test]
fn test_parse_log_locked_revision_line() {
    let output = "head: 1.2\n\
                  ----------------------------\n\
                  revision 1.2\tlocked by: jon;\n\
                  date: 2021/01/15 08:30:00;  author: jon;  state: Exp;\n\
                  msg\n\
                  ==========\n";
    let log = Parser::parse_log(output, Some(&rev("1.2")));
    assert_eq!(log.entries[0].revision_id, rev("1.2"));
    assert!(log.entries[0].is_active_revision);
}

#[test]
fn test_parse_log_is_deterministic() {
    let first = Parser::parse_log(TRUNK_LOG, Some(&rev("1.3")));
    let second = Parser::parse_log(TRUNK_LOG, Some(&rev("1.3")));
    assert_eq!(first, second);
}

#[test]
fn test_parse_log_ignores_text_after_terminator() {
    let output = format!(
        "{}\nRCS file: other.c,v\nhead: 4.4\n----------------------------\nrevision 4.4\n",
        TRUNK_LOG
    );
    let log = Parser::parse_log(&output, None);
    assert_eq!(log.entries.len(), 3);
    assert_eq!(log.head, rev("1.9"));
}

#[test]
fn test_parse_head_revision_absent() {
    assert!(Parser::parse_head_revision("RCS file: a,v\nbranch:\n").is_empty());
}

#[test]
fn test_unquote() {
    assert_eq!(unquote("`src/a.c'"), "src/a.c");
    assert_eq!(unquote("'src/a.c'"), "src/a.c");
    assert_eq!(unquote("src/a.c"), "src/a.c");
}

// -----------------------------------------------------------------------------
// cvs -n -q update
// -----------------------------------------------------------------------------

#[test]
fn test_parse_update_line_codes() {
    let cases = [
        ("M src/main.c", FileStatus::Modified),
        ("? notes.txt", FileStatus::Untracked),
        ("A new.c", FileStatus::Added),
        ("R old.c", FileStatus::Removed),
        ("C merged.c", FileStatus::Conflict),
        ("U incoming.c", FileStatus::Checkout),
        ("P patched.c", FileStatus::Patch),
    ];
    for (line, expected) in cases {
        let resource = Parser::parse_update_line(line).unwrap();
        assert_eq!(resource.status, expected, "line: {}", line);
        assert!(!resource.is_folder);
    }
}

#[test]
fn test_parse_update_unknown_code_continues() {
    let output = "M a.c\nZ weird.c\n? b.txt\n";
    let resources = Parser::parse_update(output);
    assert_eq!(resources.len(), 3);
    assert_eq!(resources[1].path, PathBuf::from("weird.c"));
    assert_eq!(resources[1].status, FileStatus::Unknown);
    assert_eq!(resources[2].status, FileStatus::Untracked);
}

#[test]
fn test_parse_update_messages() {
    let output = "cvs update: warning: `gone.c' was lost\n\
                  U gone.c\n\
                  cvs update: `dropped.c' is no longer in the repository\n\
                  cvs update: New directory `docs' -- ignored\n\
                  cvs update: Updating lib\n";
    let resources = Parser::parse_update(output);
    assert_eq!(resources.len(), 4);
    assert_eq!(resources[0].path, PathBuf::from("gone.c"));
    assert_eq!(resources[0].status, FileStatus::Deleted);
    assert_eq!(resources[2].status, FileStatus::RemovedFromRepo);
    assert_eq!(resources[2].path, PathBuf::from("dropped.c"));
    assert_eq!(resources[3].path, PathBuf::from("docs"));
    assert_eq!(resources[3].status, FileStatus::Directory);
    assert!(resources[3].is_folder);
}

#[test]
fn test_parse_update_unquoted_messages() {
    let output = "cvs update: warning: gone.c was lost\n\
                  cvs update: dropped.c is no longer in the repository\n";
    let resources = Parser::parse_update(output);
    assert_eq!(resources[0].path, PathBuf::from("gone.c"));
    assert_eq!(resources[1].path, PathBuf::from("dropped.c"));
}

#[test]
fn test_parse_update_line_rejects_noise() {
    assert!(Parser::parse_update_line("").is_none());
    assert!(Parser::parse_update_line("M").is_none());
    assert!(Parser::parse_update_line("M ").is_none());
    assert!(Parser::parse_update_line("RCS file: /cvsroot/a.c,v").is_none());
    assert!(Parser::parse_update_line(" M a.c").is_none());
}

#[test]
fn test_parse_update_path_with_spaces() {
    let resource = Parser::parse_update_line("M docs/read me.txt").unwrap();
    assert_eq!(resource.path, PathBuf::from("docs/read me.txt"));
}

// -----------------------------------------------------------------------------
// cvs status
// -----------------------------------------------------------------------------

const STATUS_OUTPUT: &str = "\
cvs status: Examining .
===================================================================
File: main.c           \tStatus: Locally Modified

   Working revision:\t1.3\tThu Mar  4 10:11:12 2021
   Repository revision:\t1.3\t/cvsroot/proj/main.c,v
   Commit Identifier:\tabc
   Sticky Tag:\t\t(none)

===================================================================
File: new.c            \tStatus: Locally Added

   Working revision:\tNew file!
   Repository revision:\tNo revision control file

cvs status: Examining lib
===================================================================
File: util.c           \tStatus: Needs Merge

   Working revision:\t1.3.2.1\tThu Mar  4 10:11:12 2021
   Repository revision:\t1.3.2.2\t/cvsroot/proj/lib/util.c,v

===================================================================
File: no file gone.c   \tStatus: Needs Checkout

   Working revision:\t1.4
   Repository revision:\t1.4\t/cvsroot/proj/lib/gone.c,v

===================================================================
File: old.c            \tStatus: Locally Removed

   Working revision:\t-1.2\tThu Mar  4 10:11:12 2021
   Repository revision:\t1.2\t/cvsroot/proj/lib/old.c,v
";

#[test]
fn test_parse_status_records() {
    let resources = Parser::parse_status(STATUS_OUTPUT);
    let summary: Vec<(PathBuf, FileStatus)> = resources
        .iter()
        .map(|r| (r.path.clone(), r.status))
        .collect();
    assert_eq!(
        summary,
        vec![
            (PathBuf::from("main.c"), FileStatus::Modified),
            (PathBuf::from("new.c"), FileStatus::Added),
            (PathBuf::from("lib/util.c"), FileStatus::Merge),
            (PathBuf::from("lib/gone.c"), FileStatus::Deleted),
            (PathBuf::from("lib/old.c"), FileStatus::Removed),
        ]
    );
}

#[test]
fn test_parse_status_revisions() {
    let resources = Parser::parse_status(STATUS_OUTPUT);
    assert_eq!(resources[0].working_revision, Some(rev("1.3")));
    assert_eq!(resources[0].repository_revision, Some(rev("1.3")));

    // New file has no revisions yet
    assert_eq!(resources[1].working_revision, None);
    assert_eq!(resources[1].repository_revision, None);

    assert_eq!(resources[2].working_revision, Some(rev("1.3.2.1")));
    assert_eq!(resources[2].repository_revision, Some(rev("1.3.2.2")));

    // Locally removed shows a negated working revision
    assert_eq!(resources[4].working_revision, Some(rev("1.2")));
}

#[test]
fn test_parse_status_unknown_text() {
    let output = "File: odd.c   Status: Something New\n   Working revision:\t1.1\n";
    let resources = Parser::parse_status(output);
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].status, FileStatus::Unknown);
    assert_eq!(resources[0].working_revision, Some(rev("1.1")));
}

#[test]
fn test_parse_status_revision_without_record_is_ignored() {
    let resources = Parser::parse_status("   Working revision:\t1.1\n");
    assert!(resources.is_empty());
}

#[test]
fn test_parse_status_up_to_date() {
    let output = "File: a.c   \tStatus: Up-to-date\n\n   Working revision:\t1.7\n   Repository revision:\t1.7\t/cvsroot/a.c,v\n";
    let resources = Parser::parse_status(output);
    assert_eq!(resources[0].status, FileStatus::UpToDate);
    assert_eq!(resources[0].repository_revision, Some(rev("1.7")));
}
