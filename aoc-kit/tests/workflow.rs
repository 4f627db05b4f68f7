//! End-to-end tests of the workflow facade against a mock AoC server

use aoc_kit::{
    AocClient, AocError, AocKit, BrowserOpener, FixedClock, KitError, SolveError,
    StaticCredentials, SubmitOptions, SubmitOutcome, Template,
};
use chrono::NaiveDate;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::TempDir;

const SESSION: &str = "53616c7465645f5f";

fn december_7_2023() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2023, 12, 7).unwrap())
}

fn kit_for(server: &mockito::Server) -> AocKit {
    kit_with_credentials(server, StaticCredentials::new(SESSION))
}

fn kit_with_credentials(server: &mockito::Server, credentials: StaticCredentials) -> AocKit {
    let client = AocClient::builder()
        .base_url(server.url())
        .unwrap()
        .build()
        .unwrap();

    AocKit::builder()
        .client(client)
        .clock(december_7_2023())
        .credentials(credentials)
        .browser(RecordingBrowser::default())
        .build()
        .unwrap()
}

/// Remembers every URL instead of launching anything
#[derive(Clone, Default)]
struct RecordingBrowser(Rc<RefCell<Vec<String>>>);

impl BrowserOpener for RecordingBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        self.0.borrow_mut().push(url.to_string());
        Ok(())
    }
}

struct BrokenBrowser;

impl BrowserOpener for BrokenBrowser {
    fn open(&self, _url: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::NotFound, "no browser"))
    }
}

// ---------------------------------------------------------------------------
// open
// ---------------------------------------------------------------------------

#[test]
fn test_open_day_defaults_to_today() {
    let server = mockito::Server::new();
    let browser = RecordingBrowser::default();
    let kit = AocKit::builder()
        .client(AocClient::builder().base_url(server.url()).unwrap().build().unwrap())
        .clock(december_7_2023())
        .browser(browser.clone())
        .build()
        .unwrap();

    let url = kit.open_day(None, None).unwrap();

    assert_eq!(url.path(), "/2023/day/7");
    assert_eq!(*browser.0.borrow(), vec![url.to_string()]);
}

#[test]
fn test_open_day_browser_failure() {
    let kit = AocKit::builder()
        .clock(december_7_2023())
        .browser(BrokenBrowser)
        .build()
        .unwrap();

    match kit.open_day(Some(5), Some(2022)) {
        Err(KitError::Browser { url, .. }) => {
            assert_eq!(url, "https://adventofcode.com/2022/day/5");
        }
        other => panic!("Expected KitError::Browser, got {:?}", other),
    }
}

// ---------------------------------------------------------------------------
// fetch / save
// ---------------------------------------------------------------------------

#[test]
fn test_fetch_returns_body_unchanged() {
    let mut server = mockito::Server::new();
    let body = "  1721\n979\n\n366  \n";
    let mock = server
        .mock("GET", "/2023/day/7/input")
        .match_header("cookie", format!("session={}", SESSION).as_str())
        .with_status(200)
        .with_body(body)
        .expect(1)
        .create();

    let input = kit_for(&server).fetch_day_input(None, None).unwrap();

    mock.assert();
    assert_eq!(input, body);
}

#[test]
fn test_fetch_not_found() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", "/2023/day/25/input").with_status(404).create();

    let result = kit_for(&server).fetch_day_input(Some(25), None);

    assert!(matches!(
        result,
        Err(KitError::Http(AocError::NotFound { year: 2023, day: 25 }))
    ));
}

#[test]
fn test_fetch_server_error_carries_status() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", "/2022/day/5/input").with_status(500).create();

    match kit_for(&server).fetch_day_input(Some(5), Some(2022)) {
        Err(KitError::Http(AocError::Server { status })) => assert_eq!(status.as_u16(), 500),
        other => panic!("Expected Server error, got {:?}", other),
    }
}

#[test]
fn test_fetch_without_session_never_hits_network() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", mockito::Matcher::Any).expect(0).create();

    let kit = kit_with_credentials(&server, StaticCredentials::absent());
    let result = kit.fetch_day_input(None, None);

    assert!(matches!(result, Err(KitError::MissingCredential { .. })));
    mock.assert();
}

#[test]
fn test_save_writes_input_file() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/2023/day/7/input")
        .with_status(200)
        .with_body("abc\n")
        .create();
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("2023").join("seven");

    let written = kit_for(&server).save_day_input(Some(dir.as_path()), None, None).unwrap();

    assert_eq!(written, dir.join("input.txt"));
    assert_eq!(fs::read_to_string(&written).unwrap(), "abc\n");
}

#[test]
fn test_save_failure_leaves_no_directory() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", "/2023/day/7/input").with_status(404).create();
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("day-7");

    let result = kit_for(&server).save_day_input(Some(dir.as_path()), None, None);

    assert!(result.is_err());
    assert!(!dir.exists());
}

// ---------------------------------------------------------------------------
// scaffold
// ---------------------------------------------------------------------------

#[test]
fn test_scaffold_substitutes_placeholders() {
    let server = mockito::Server::new();
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("solutions").join("day-3");

    let written = kit_for(&server)
        .scaffold_day(Some(dir.as_path()), Some(2), Some(3), Some(2021))
        .unwrap();

    assert_eq!(written, dir.join("main.rs"));
    let text = fs::read_to_string(&written).unwrap();
    assert!(text.contains("const PART: u8 = 2;"));
    assert!(text.contains("const DAY: u8 = 3;"));
    assert!(text.contains("const YEAR: u16 = 2021;"));
    assert!(!text.contains("{part}"));
    assert!(!text.contains("{day}"));
    assert!(!text.contains("{year}"));
}

#[test]
fn test_scaffold_custom_template_and_overwrite() {
    let server = mockito::Server::new();
    let temp = TempDir::new().unwrap();
    let template_path = temp.path().join("tmpl.txt");
    fs::write(&template_path, "year={year} day={day} part={part}\n").unwrap();
    let target = temp.path().join("day07.rs");
    fs::write(&target, "old contents").unwrap();

    let client = AocClient::builder().base_url(server.url()).unwrap().build().unwrap();
    let kit = AocKit::builder()
        .client(client)
        .clock(december_7_2023())
        .template(Template::from_file(&template_path).unwrap())
        .build()
        .unwrap();

    // Part 7 is not a part; it falls back to 1
    let written = kit.scaffold_day(Some(target.as_path()), Some(7), None, None).unwrap();

    assert_eq!(written, target);
    assert_eq!(fs::read_to_string(&target).unwrap(), "year=2023 day=7 part=1\n");
}

#[test]
fn test_scaffold_surfaces_directory_error() {
    let server = mockito::Server::new();
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not-a-dir");
    fs::write(&blocker, "").unwrap();

    let result = kit_for(&server).scaffold_day(Some(blocker.join("day-1").as_path()), None, None, None);

    assert!(matches!(result, Err(KitError::Filesystem { .. })));
}

// ---------------------------------------------------------------------------
// test / submit
// ---------------------------------------------------------------------------

/// Solver answering 10 for the test file and 1234 for anything else,
/// recording every path it was given
fn spy(calls: &RefCell<Vec<PathBuf>>, test_path: PathBuf) -> impl FnMut(&Path) -> Result<i64, SolveError> + '_ {
    move |path: &Path| {
        calls.borrow_mut().push(path.to_path_buf());
        Ok(if path == test_path { 10 } else { 1234 })
    }
}

#[test]
fn test_run_test_through_kit() {
    let server = mockito::Server::new();
    let calls = RefCell::new(Vec::new());
    let mut solver = spy(&calls, PathBuf::from("test.txt"));
    let kit = kit_for(&server);

    assert!(kit.run_test(&mut solver, Some(10), Path::new("test.txt"), false).unwrap());
    assert!(!kit.run_test(&mut solver, Some(11), Path::new("test.txt"), false).unwrap());
    assert!(!kit.run_test(&mut solver, None, Path::new("test.txt"), false).unwrap());
    assert_eq!(calls.borrow().len(), 2);
}

#[test]
fn test_failed_test_aborts_before_real_input() {
    let mut server = mockito::Server::new();
    let post = server.mock("POST", mockito::Matcher::Any).expect(0).create();
    let calls = RefCell::new(Vec::new());
    let mut solver = spy(&calls, PathBuf::from("test.txt"));

    let options = SubmitOptions::new(1)
        .test_expected(Some(99))
        .verbose(false);
    let outcome = kit_for(&server).submit(&mut solver, &options).unwrap();

    assert_eq!(outcome, SubmitOutcome::Aborted);
    assert!(!outcome.succeeded());
    assert_eq!(*calls.borrow(), vec![PathBuf::from("test.txt")]);
    post.assert();
}

#[test]
fn test_missing_expectation_aborts_without_solving() {
    let mut server = mockito::Server::new();
    let post = server.mock("POST", mockito::Matcher::Any).expect(0).create();
    let calls = RefCell::new(Vec::new());
    let mut solver = spy(&calls, PathBuf::from("test.txt"));

    let options = SubmitOptions::new(2).verbose(false);
    let outcome = kit_for(&server).submit(&mut solver, &options).unwrap();

    assert_eq!(outcome, SubmitOutcome::Aborted);
    assert!(calls.borrow().is_empty());
    post.assert();
}

#[test]
fn test_passing_test_submits_answer() {
    let mut server = mockito::Server::new();
    let reply = "<html><body><main><p>That's the right answer!</p></main></body></html>";
    let post = server
        .mock("POST", "/2023/day/7/answer")
        .match_header("cookie", format!("session={}", SESSION).as_str())
        .match_body(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("level".into(), "2".into()),
            mockito::Matcher::UrlEncoded("answer".into(), "1234".into()),
        ]))
        .with_status(200)
        .with_body(reply)
        .expect(1)
        .create();
    let calls = RefCell::new(Vec::new());
    let mut solver = spy(&calls, PathBuf::from("day-7/test.txt"));

    let options = SubmitOptions::new(2)
        .input_path("day-7/input.txt")
        .test_path("day-7/test.txt")
        .test_expected(Some(10))
        .verbose(false);
    let outcome = kit_for(&server).submit(&mut solver, &options).unwrap();

    post.assert();
    assert!(outcome.succeeded());
    assert_eq!(
        *calls.borrow(),
        vec![PathBuf::from("day-7/test.txt"), PathBuf::from("day-7/input.txt")]
    );
    match outcome {
        SubmitOutcome::Submitted {
            puzzle,
            part,
            answer,
            reply: response,
        } => {
            assert_eq!((puzzle.year, puzzle.day), (2023, 7));
            assert_eq!(part.get(), 2);
            assert_eq!(answer, 1234);
            assert_eq!(response.body, reply);
        }
        SubmitOutcome::Aborted => panic!("submission should not abort"),
    }
}

#[test]
fn test_submit_without_test_solves_once() {
    let mut server = mockito::Server::new();
    let post = server
        .mock("POST", "/2015/day/1/answer")
        .with_status(200)
        .with_body("That's not the right answer.")
        .expect(1)
        .create();
    let calls = RefCell::new(Vec::new());
    let mut solver = spy(&calls, PathBuf::from("test.txt"));

    let options = SubmitOptions::new(1)
        .day(1)
        .year(2015)
        .test(false)
        .verbose(false);
    let outcome = kit_for(&server).submit(&mut solver, &options).unwrap();

    post.assert();
    // A wrong answer still counts as a successful submission
    assert!(outcome.succeeded());
    assert_eq!(*calls.borrow(), vec![PathBuf::from("input.txt")]);
    assert_eq!(outcome.reply().unwrap().body, "That's not the right answer.");
}

#[test]
fn test_submit_without_session_fails_after_solving() {
    let mut server = mockito::Server::new();
    let post = server.mock("POST", mockito::Matcher::Any).expect(0).create();
    let calls = RefCell::new(Vec::new());
    let mut solver = spy(&calls, PathBuf::from("test.txt"));

    let kit = kit_with_credentials(&server, StaticCredentials::absent());
    let options = SubmitOptions::new(1).test(false).verbose(false);
    let result = kit.submit(&mut solver, &options);

    assert!(matches!(result, Err(KitError::MissingCredential { .. })));
    assert_eq!(calls.borrow().len(), 1);
    post.assert();
}

#[test]
fn test_solver_error_stops_submission() {
    let mut server = mockito::Server::new();
    let post = server.mock("POST", mockito::Matcher::Any).expect(0).create();
    let mut solver = |path: &Path| -> Result<i64, SolveError> { aoc_kit::read_input(path).map(|_| 0) };

    let options = SubmitOptions::new(1)
        .input_path("/definitely/missing/input.txt")
        .test(false)
        .verbose(false);
    let result = kit_for(&server).submit(&mut solver, &options);

    assert!(matches!(result, Err(KitError::Solve(SolveError::Io { .. }))));
    post.assert();
}
