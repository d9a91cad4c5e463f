//! Interactive session driver
//!
//! Connecting → Connected → AwaitingSelection → Executing → Displaying → Done
//!
//! Every stdout write is flushed before the next step, so output order
//! matches the state order exactly.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::catalog::{Catalog, QueryId};
use crate::engine::{Connection, Connector, QueryEngine};
use crate::observability::{ObservationScope, Timer};
use crate::style::{emit, print_styled, Color, StyleFlags};

use super::config::SessionConfig;
use super::errors::SessionResult;
use super::input::{parse_selection, read_line};

/// Session lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Connecting,
    Connected,
    AwaitingSelection,
    Executing,
    Displaying,
    Done,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Idle => "IDLE",
            SessionState::Connecting => "CONNECTING",
            SessionState::Connected => "CONNECTED",
            SessionState::AwaitingSelection => "AWAITING_SELECTION",
            SessionState::Executing => "EXECUTING",
            SessionState::Displaying => "DISPLAYING",
            SessionState::Done => "DONE",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of a completed session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub query: QueryId,
    pub documents: usize,
}

/// One interactive run over `input` and `output`
pub struct Session<'c, R, W> {
    input: R,
    output: W,
    catalog: &'c Catalog,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<'static, R, W> {
    /// Session using the process-wide catalog
    pub fn new(input: R, output: W) -> Self {
        Session::with_catalog(input, output, Catalog::global())
    }
}

impl<'c, R: BufRead, W: Write> Session<'c, R, W> {
    pub fn with_catalog(input: R, output: W, catalog: &'c Catalog) -> Self {
        Self {
            input,
            output,
            catalog,
            state: SessionState::Idle,
        }
    }

    /// Current state; after a failure, the state the failure happened in
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the whole session
    ///
    /// Any error aborts the session; output already written is kept and
    /// the connection is released on every path.
    pub fn run<C: Connector>(
        &mut self,
        connector: &C,
        config: &SessionConfig,
    ) -> SessionResult<SessionReport> {
        let scope = ObservationScope::new("SESSION");

        let connection = self.connect(connector, config)?;
        let query = self.await_selection()?;
        let documents = self.execute(connection.engine(), query)?;

        drop(connection);
        self.transition(SessionState::Done);

        scope.complete_with_fields(&[
            ("query", query.to_string().as_str()),
            ("documents", documents.to_string().as_str()),
        ]);
        Ok(SessionReport { query, documents })
    }

    fn transition(&mut self, next: SessionState) {
        debug!(from = %self.state, to = %next, "session transition");
        self.state = next;
    }

    fn connect<C: Connector>(
        &mut self,
        connector: &C,
        config: &SessionConfig,
    ) -> SessionResult<Connection<C::Engine>> {
        self.transition(SessionState::Connecting);
        self.print("Connecting to the database server...\n", Color::GRAY, StyleFlags::NONE)?;

        let timer = Timer::new();
        let scope = ObservationScope::with_fields(
            "CONNECT",
            &[
                ("database", config.database.as_str()),
                ("collection", config.collection.as_str()),
            ],
        );
        let connection = match Connection::open(connector, config) {
            Ok(connection) => connection,
            Err(e) => {
                scope.fail(&e.to_string());
                return Err(e);
            }
        };
        let ms = timer.elapsed_ms();
        scope.complete_with_fields(&[("elapsed_ms", ms.to_string().as_str())]);

        self.transition(SessionState::Connected);
        self.print_menu(ms)?;
        Ok(connection)
    }

    fn print_menu(&mut self, connect_ms: u128) -> SessionResult<()> {
        self.print("Connected to the database server successfully!", Color::DEFAULT, StyleFlags::NONE)?;
        self.print(&format!(" Took {}ms\n\n", connect_ms), Color::GRAY, StyleFlags::NONE)?;

        self.print("Which query would you like to execute?", Color::GREEN, StyleFlags::UNDERLINE)?;
        self.print(
            &format!(" ({}-{})\n\n", QueryId::MIN, QueryId::MAX),
            Color::GRAY,
            StyleFlags::NONE,
        )?;

        let catalog = self.catalog;
        for (id, question) in catalog.questions() {
            self.print(&id.to_string(), Color::GREEN, StyleFlags::UNDERLINE | StyleFlags::BOLD)?;
            self.print(&format!(". {}\n", question), Color::DEFAULT, StyleFlags::NONE)?;
        }

        self.newline()
    }

    fn await_selection(&mut self) -> SessionResult<QueryId> {
        self.transition(SessionState::AwaitingSelection);
        loop {
            let line = read_line(&mut self.input)?;
            match parse_selection(&line) {
                Ok(query) => return Ok(query),
                Err(rejected) => {
                    debug!(reason = %rejected, "selection rejected");
                    self.print(&format!("Error: {}\n", rejected), Color::RED, StyleFlags::NONE)?;
                }
            }
        }
    }

    fn execute<E: QueryEngine>(&mut self, engine: &E, query: QueryId) -> SessionResult<usize> {
        self.transition(SessionState::Executing);
        self.newline()?;
        self.print(&format!("Executing query {}...\n", query), Color::GRAY, StyleFlags::NONE)?;

        let pipeline = self.catalog.pipeline(query)?.clone();
        debug!(
            query = %query,
            pipeline = %serde_json::to_string(&pipeline).unwrap_or_default(),
            "submitting pipeline"
        );

        let timer = Timer::new();
        let scope =
            ObservationScope::with_fields("AGGREGATE", &[("query", query.to_string().as_str())]);
        let cursor = match engine.aggregate(pipeline) {
            Ok(cursor) => cursor,
            Err(e) => {
                scope.fail(&e.to_string());
                return Err(e);
            }
        };
        let ms = timer.elapsed_ms();
        scope.complete_with_fields(&[("elapsed_ms", ms.to_string().as_str())]);

        self.print("Success!", Color::DEFAULT, StyleFlags::NONE)?;
        self.print(&format!(" Took {}ms\n\n", ms), Color::GRAY, StyleFlags::NONE)?;
        self.print("Results:\n", Color::GREEN, StyleFlags::UNDERLINE)?;

        self.transition(SessionState::Displaying);
        let mut count = 0;
        for document in cursor {
            let document = document?;
            emit(&mut self.output, &format!("{}\n", document.to_json()))?;
            count += 1;
        }

        self.newline()?;
        self.print("Number of returned documents: ", Color::DEFAULT, StyleFlags::NONE)?;
        self.print(&format!("{}\n", count), Color::GREEN, StyleFlags::UNDERLINE)?;
        Ok(count)
    }

    fn print(&mut self, text: &str, color: Color, flags: StyleFlags) -> SessionResult<()> {
        print_styled(&mut self.output, text, color, flags)?;
        Ok(())
    }

    fn newline(&mut self) -> SessionResult<()> {
        emit(&mut self.output, "\n")?;
        Ok(())
    }
}
