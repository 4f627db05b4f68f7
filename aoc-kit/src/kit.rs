//! The workflow facade

use crate::browser::{BrowserOpener, SystemBrowser};
use crate::clock::{Clock, SystemClock};
use crate::error::KitError;
use crate::fs::{input_path, solution_path, write_file};
use crate::puzzle::{Part, PuzzleId};
use crate::report::Reporter;
use crate::runner;
use crate::scaffold::Template;
use crate::session::{CredentialSource, EnvCredentials};
use crate::solver::Solver;
use crate::submit::{self, SubmitContext, SubmitOptions, SubmitOutcome};
use aoc_http_client::{AocClient, Url};
use log::debug;
use std::path::{Path, PathBuf};

/// Entry point for every workflow operation
///
/// Day and year arguments are optional everywhere; missing ones come from
/// the configured [`Clock`]. The session token is looked up through the
/// configured [`CredentialSource`] each time the network is used.
///
/// # Example
///
/// ```no_run
/// use aoc_kit::{AocKit, SubmitOptions};
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let kit = AocKit::new()?;
/// kit.save_day_input(None, Some(1), Some(2024))?;
///
/// let mut solve = |path: &Path| -> Result<i64, aoc_kit::SolveError> {
///     Ok(aoc_kit::read_input(path)?.lines().count() as i64)
/// };
/// let options = SubmitOptions::new(1).day(1).year(2024).test_expected(Some(6));
/// let outcome = kit.submit(&mut solve, &options)?;
/// println!("sent: {}", outcome.succeeded());
/// # Ok(())
/// # }
/// ```
pub struct AocKit {
    client: AocClient,
    clock: Box<dyn Clock>,
    credentials: Box<dyn CredentialSource>,
    browser: Box<dyn BrowserOpener>,
    template: Template,
}

impl AocKit {
    /// Kit talking to adventofcode.com with `AOC_SESSION` and the local clock
    pub fn new() -> Result<Self, KitError> {
        Self::builder().build()
    }

    pub fn builder() -> KitBuilder {
        KitBuilder::new()
    }

    /// Resolve optional day/year against the clock
    pub fn puzzle(&self, day: Option<u8>, year: Option<u16>) -> PuzzleId {
        PuzzleId::resolve(day, year, self.clock.as_ref())
    }

    pub fn client(&self) -> &AocClient {
        &self.client
    }

    /// Open the puzzle page in the browser, returning the URL that was opened
    pub fn open_day(&self, day: Option<u8>, year: Option<u16>) -> Result<Url, KitError> {
        let puzzle = self.puzzle(day, year);
        let url = self.client.page_url(puzzle.year, puzzle.day)?;
        debug!("opening {}", url);
        self.browser
            .open(url.as_str())
            .map_err(|source| KitError::Browser {
                url: url.to_string(),
                source,
            })?;
        Ok(url)
    }

    /// Download the puzzle input
    ///
    /// # Errors
    ///
    /// * `KitError::MissingCredential` - no session token
    /// * `KitError::Http` - connection failure, 404 or another status
    pub fn fetch_day_input(&self, day: Option<u8>, year: Option<u16>) -> Result<String, KitError> {
        let puzzle = self.puzzle(day, year);
        let session = self.credentials.require()?;
        Ok(self.client.get_input(puzzle.year, puzzle.day, &session)?)
    }

    /// Download the puzzle input and write it to `{path}/input.txt`
    ///
    /// `path` defaults to `day-{day}`. Nothing is created on disk unless the
    /// download succeeds. Returns the path of the written file.
    pub fn save_day_input(
        &self,
        path: Option<&Path>,
        day: Option<u8>,
        year: Option<u16>,
    ) -> Result<PathBuf, KitError> {
        let puzzle = self.puzzle(day, year);
        let target = input_path(path, puzzle);
        let input = self.fetch_day_input(Some(puzzle.day), Some(puzzle.year))?;
        write_file(&target, &input)?;
        Ok(target)
    }

    /// Write a new solution file from the template
    ///
    /// `path` defaults to `day-{day}/main.rs`; an existing file is overwritten.
    /// Returns the path of the written file.
    pub fn scaffold_day(
        &self,
        path: Option<&Path>,
        part: Option<u8>,
        day: Option<u8>,
        year: Option<u16>,
    ) -> Result<PathBuf, KitError> {
        let puzzle = self.puzzle(day, year);
        let target = solution_path(path, puzzle);
        if target.exists() {
            log::warn!("overwriting {}", target.display());
        }
        write_file(&target, &self.template.render(Part::resolve(part), puzzle))?;
        Ok(target)
    }

    /// Run `solver` on a local test file, see [`run_test`](crate::run_test)
    pub fn run_test<S: Solver + ?Sized>(
        &self,
        solver: &mut S,
        expected: Option<i64>,
        path: &Path,
        verbose: bool,
    ) -> Result<bool, KitError> {
        Ok(runner::run_test(
            solver,
            expected,
            path,
            &Reporter::new(verbose),
        )?)
    }

    /// Test (unless disabled), solve the real input and post the answer
    ///
    /// A failing test returns [`SubmitOutcome::Aborted`] before the real input
    /// is solved. A submitted outcome only means the site replied; the reply
    /// is not checked for correctness.
    pub fn submit<S: Solver + ?Sized>(
        &self,
        solver: &mut S,
        options: &SubmitOptions,
    ) -> Result<SubmitOutcome, KitError> {
        let ctx = SubmitContext {
            client: &self.client,
            credentials: self.credentials.as_ref(),
            clock: self.clock.as_ref(),
        };
        submit::submit(&ctx, solver, options)
    }
}

/// Builder for [`AocKit`], every part has a default
pub struct KitBuilder {
    client: Option<AocClient>,
    clock: Box<dyn Clock>,
    credentials: Box<dyn CredentialSource>,
    browser: Box<dyn BrowserOpener>,
    template: Template,
}

impl KitBuilder {
    pub fn new() -> Self {
        Self {
            client: None,
            clock: Box::new(SystemClock),
            credentials: Box::new(EnvCredentials::default()),
            browser: Box::new(SystemBrowser),
            template: Template::builtin(),
        }
    }

    /// HTTP client to use, e.g. one pointed at a mock server
    pub fn client(mut self, client: AocClient) -> Self {
        self.client = Some(client);
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn credentials(mut self, credentials: impl CredentialSource + 'static) -> Self {
        self.credentials = Box::new(credentials);
        self
    }

    pub fn browser(mut self, browser: impl BrowserOpener + 'static) -> Self {
        self.browser = Box::new(browser);
        self
    }

    pub fn template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    /// # Errors
    ///
    /// `KitError::Http` when the default HTTP client cannot be initialized.
    pub fn build(self) -> Result<AocKit, KitError> {
        let client = match self.client {
            Some(client) => client,
            None => AocClient::new()?,
        };

        Ok(AocKit {
            client,
            clock: self.clock,
            credentials: self.credentials,
            browser: self.browser,
            template: self.template,
        })
    }
}

impl Default for KitBuilder {
    fn default() -> Self {
        Self::new()
    }
}
