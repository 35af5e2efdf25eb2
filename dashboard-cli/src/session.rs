//! A browsing session over one row set.
//!
//! The session is the calling page of the table: it owns the [`Listing`],
//! hands the table and pager the current slice and state, and commits the
//! requests they report through their callbacks.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use dashboard_lib::prelude::*;

use crate::command::{Command, HELP};
use crate::config::ViewConfig;
use crate::error::CliError;

/// A request reported by the table or pager.
#[derive(Debug, Clone)]
enum Request {
    Page(usize),
    PageSize(usize),
    Sort(String),
    View(Row),
    Delete(Value),
}

type Inbox = Rc<RefCell<Vec<Request>>>;

/// Table, pager and dataset wired together.
pub struct Session {
    listing: Listing,
    table: DataTable,
    pager: DynamicPagination,
    renderer: TextRenderer,
    internal: bool,
    inbox: Inbox,
}

impl Session {
    /// Create a session.
    ///
    /// With `internal` set the table receives the full filtered set and
    /// slices it itself; otherwise it receives the current page and the
    /// pager is drawn underneath.
    pub fn new(
        columns: Vec<ColumnSpec>,
        rows: Vec<Row>,
        search_fields: Vec<String>,
        config: &ViewConfig,
        internal: bool,
    ) -> Result<Self, CliError> {
        let listing = Listing::new(rows, search_fields, config.page_size)?;
        let inbox = Inbox::default();

        let mut table = DataTable::new(columns)
            .no_data_message(config.no_data_message.clone())
            .on_sort(sender(&inbox, |key: &str| Request::Sort(key.to_string())))
            .on_view(sender(&inbox, |row: &Row| Request::View(row.clone())))
            .on_delete(sender(&inbox, |id: &Value| Request::Delete(id.clone())));
        if internal {
            table = table
                .current_page(listing.pagination().current_page())
                .items_per_page(listing.pagination().items_per_page())
                .on_page_change(page_sender(&inbox, Request::Page));
        }

        let pager = DynamicPagination::new(page_sender(&inbox, Request::Page))
            .on_items_per_page_change(page_sender(&inbox, Request::PageSize))
            .with_config(config.pager());

        let renderer = TextRenderer::new(config.width).colored(config.colored);

        log::info!(
            "session: {} rows, {} mode",
            listing.rows().len(),
            if internal { "internal" } else { "external" }
        );

        Ok(Self {
            listing,
            table,
            pager,
            renderer,
            internal,
            inbox,
        })
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn listing_mut(&mut self) -> &mut Listing {
        &mut self.listing
    }

    /// Draw the current frame.
    pub fn render(&mut self) -> String {
        self.table.set_sort_state(Some(self.listing.sort().clone()));

        if self.internal {
            let state = self.listing.pagination();
            self.table.set_current_page(state.current_page());
            self.table.set_items_per_page(state.items_per_page());
            let view = self.table.render(self.listing.visible_rows());
            self.renderer.render(&view, None)
        } else {
            let view = self.table.render(self.listing.page_rows());
            let pager = self.pager.view(self.listing.pagination());
            self.renderer.render(&view, pager.as_ref())
        }
    }

    /// Run one command. Returns the messages to print.
    pub fn execute(&mut self, command: Command) -> Result<Vec<String>, CliError> {
        log::debug!("command: {:?}", command);
        let state = *self.listing.pagination();
        let total = self.listing.visible_rows().len();

        let mut notes = Vec::new();
        match command {
            Command::Next => {
                let requested = if self.internal {
                    self.table.next_page(total)
                } else {
                    self.pager.next(&state)
                };
                if !requested {
                    notes.push("already on the last page".to_string());
                }
            }
            Command::Prev => {
                let requested = if self.internal {
                    self.table.previous_page(total)
                } else {
                    self.pager.previous(&state)
                };
                if !requested {
                    notes.push("already on the first page".to_string());
                }
            }
            Command::Go(page) => {
                if !self.pager.select_page(&state, page) {
                    notes.push(format!("no page {} (1-{})", page, state.total_pages()));
                }
            }
            Command::PageSize(size) => {
                if !self.pager.select_page_size(size) {
                    notes.push("page size must be at least 1".to_string());
                }
            }
            Command::Sort(key) => {
                let index = self.table.columns().iter().position(|c| c.accessor == key);
                if !index.is_some_and(|i| self.table.click_header(i)) {
                    notes.push(format!("'{}' is not a sortable column", key));
                }
            }
            Command::Search(query) => self.listing.set_query(query),
            Command::Filter { field, value } => self.listing.set_exact_filter(field, value),
            Command::Clear => self.listing.clear_filters(),
            Command::View(n) => match self.page_row(n) {
                Some(row) => {
                    self.table.view(&row);
                }
                None => notes.push(format!("no row {} on this page", n)),
            },
            Command::Delete(n) => match self.page_row(n) {
                Some(row) => {
                    self.table.delete(&row);
                }
                None => notes.push(format!("no row {} on this page", n)),
            },
            Command::Help => notes.push(HELP.to_string()),
            Command::Quit => {}
        }

        notes.extend(self.commit()?);
        Ok(notes)
    }

    /// Read commands from `input` until `q` or end of input, drawing each
    /// frame to `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), CliError> {
        writeln!(output, "{}", self.render())?;
        write!(output, "> ")?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                write!(output, "> ")?;
                output.flush()?;
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => {
                    for note in self.execute(command)? {
                        writeln!(output, "{}", note)?;
                    }
                    writeln!(output, "{}", self.render())?;
                }
                Err(e) => writeln!(output, "{}", e)?,
            }
            write!(output, "> ")?;
            output.flush()?;
        }
        writeln!(output)?;
        Ok(())
    }

    /// Row `n` (1-indexed) of the page on screen.
    fn page_row(&self, n: usize) -> Option<Row> {
        n.checked_sub(1)
            .and_then(|i| self.listing.page_rows().get(i))
            .cloned()
    }

    /// Apply every pending request to the listing.
    fn commit(&mut self) -> Result<Vec<String>, CliError> {
        let requests: Vec<Request> = self.inbox.borrow_mut().drain(..).collect();
        let mut notes = Vec::new();
        for request in requests {
            match request {
                Request::Page(page) => {
                    self.listing.go_to(page);
                }
                Request::PageSize(size) => self.listing.set_page_size(size)?,
                Request::Sort(key) => {
                    self.listing.toggle_sort(&key, true);
                }
                Request::View(row) => notes.push(
                    serde_json::to_string_pretty(&row)
                        .unwrap_or_else(|e| format!("<unprintable row: {}>", e)),
                ),
                Request::Delete(id) if id.is_blank() => {
                    notes.push("row has no id, nothing deleted".to_string());
                }
                Request::Delete(id) => {
                    let id = id.render_text();
                    let removed = self.listing.remove_by_id(&id);
                    log::info!("deleted {} row(s) with id {}", removed, id);
                    notes.push(format!("deleted row {}", id));
                }
            }
        }
        Ok(notes)
    }
}

/// A callback that queues `make(arg)` into `inbox`.
fn sender<A, F>(inbox: &Inbox, make: F) -> impl FnMut(&A) + 'static
where
    A: ?Sized + 'static,
    F: Fn(&A) -> Request + 'static,
{
    let inbox = inbox.clone();
    move |arg: &A| inbox.borrow_mut().push(make(arg))
}

fn page_sender(inbox: &Inbox, make: fn(usize) -> Request) -> impl FnMut(usize) + 'static {
    let inbox = inbox.clone();
    move |page| inbox.borrow_mut().push(make(page))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<Row> {
        (1..=n)
            .map(|i| {
                Row::new()
                    .set("id", i as i64)
                    .set("name", format!("user{:02}", i))
                    .set("status", if i % 3 == 0 { "win" } else { "lose" })
            })
            .collect()
    }

    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("Name", "name").sortable(),
            ColumnSpec::new("Status", "status"),
        ]
    }

    fn session(n: usize, internal: bool) -> Session {
        let config = ViewConfig::default().with_colored(false).with_width(60);
        Session::new(
            columns(),
            rows(n),
            vec!["name".to_string(), "status".to_string()],
            &config,
            internal,
        )
        .unwrap()
    }

    fn current_page(session: &Session) -> usize {
        session.listing().pagination().current_page()
    }

    #[test]
    fn test_external_mode_renders_page_and_pager() {
        let mut session = session(25, false);
        let out = session.render();
        assert!(out.contains("user01"));
        assert!(!out.contains("user11"));
        assert!(out.contains("Showing 1 to 10 of 25 entries"));
    }

    #[test]
    fn test_internal_mode_renders_controls() {
        let mut session = session(25, true);
        session.execute(Command::Next).unwrap();
        let out = session.render();
        assert!(out.contains("user11"));
        assert!(out.contains("Page 2 of 3"));
        assert!(!out.contains("Showing"));
    }

    #[test]
    fn test_navigation_commits_requests() {
        for internal in [false, true] {
            let mut session = session(25, internal);
            session.execute(Command::Next).unwrap();
            session.execute(Command::Next).unwrap();
            assert_eq!(current_page(&session), 3);

            let notes = session.execute(Command::Next).unwrap();
            assert_eq!(notes, vec!["already on the last page"]);

            session.execute(Command::Prev).unwrap();
            assert_eq!(current_page(&session), 2);
            session.execute(Command::Go(1)).unwrap();
            assert_eq!(current_page(&session), 1);
        }
    }

    #[test]
    fn test_page_size_returns_to_first_page() {
        let mut session = session(40, false);
        session.execute(Command::Go(3)).unwrap();
        session.execute(Command::PageSize(20)).unwrap();
        assert_eq!(current_page(&session), 1);
        assert_eq!(session.listing().pagination().items_per_page(), 20);
    }

    #[test]
    fn test_sort_through_header() {
        let mut session = session(5, false);
        session.execute(Command::Sort("name".to_string())).unwrap();
        session.execute(Command::Sort("name".to_string())).unwrap();
        let first = session.listing().page_rows()[0].value("name").render_text();
        assert_eq!(first, "user05");

        let notes = session.execute(Command::Sort("status".to_string())).unwrap();
        assert_eq!(notes, vec!["'status' is not a sortable column"]);
    }

    #[test]
    fn test_search_and_filter_reset_page() {
        let mut session = session(30, false);
        session.execute(Command::Go(3)).unwrap();
        session.execute(Command::Filter {
            field: "status".to_string(),
            value: "win".to_string(),
        })
        .unwrap();
        assert_eq!(current_page(&session), 1);
        assert_eq!(session.listing().visible_rows().len(), 10);

        session.execute(Command::Search("user0".to_string())).unwrap();
        assert_eq!(session.listing().visible_rows().len(), 3);

        session.execute(Command::Clear).unwrap();
        assert_eq!(session.listing().visible_rows().len(), 30);
    }

    #[test]
    fn test_view_prints_row() {
        let mut session = session(3, false);
        let notes = session.execute(Command::View(2)).unwrap();
        assert_eq!(notes.len(), 1);
        assert!(notes[0].contains("user02"));

        let notes = session.execute(Command::View(9)).unwrap();
        assert_eq!(notes, vec!["no row 9 on this page"]);
    }

    #[test]
    fn test_delete_removes_row() {
        let mut session = session(11, false);
        session.execute(Command::Go(2)).unwrap();
        let notes = session.execute(Command::Delete(1)).unwrap();
        assert_eq!(notes, vec!["deleted row 11"]);
        assert_eq!(session.listing().rows().len(), 10);
        assert_eq!(current_page(&session), 1);
    }

    #[test]
    fn test_empty_rows_render_placeholder() {
        let mut session = session(0, false);
        let out = session.render();
        assert!(out.contains("No data found."));
        assert!(!out.contains("Showing"));
    }

    #[test]
    fn test_run_reads_until_quit() {
        let mut session = session(25, false);
        let input = b"n\nbogus\nq\nn\n";
        let mut output = Vec::new();
        session.run(&input[..], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("unknown command 'bogus'"));
        assert_eq!(current_page(&session), 2);
    }
}
