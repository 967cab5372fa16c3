//! Drive a dialog from the command line and print the document after each
//! step.

use std::{cell::Cell, io, rc::Rc};

use anyhow::{Context as _, Result, bail};
use clap::Parser;
use scrim::{
    Child, Document, Markup, Modal, ModalProps, NodeId, Size, dump::dump, event::key::Key,
};
use tracing::{Level, info};

/// CLI flags for the dialog demo.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Dialog size: sm, md or lg.
    #[clap(short, long, default_value = "md")]
    size: Size,

    /// Start with the dialog closed.
    #[clap(long)]
    closed: bool,

    /// Comma-separated steps to run: key names such as `tab`, `shift-tab` or
    /// `esc`, or `backdrop`, `close` and `open`.
    #[clap(long, default_value = "")]
    script: String,

    /// Press the backdrop after the script has run.
    #[clap(long)]
    click_backdrop: bool,

    /// Increase log verbosity. Repeat for more.
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// The document, the dialog, and the counter its `hide` callback bumps.
struct App {
    /// The document.
    doc: Document,
    /// The dialog.
    modal: Modal,
    /// Dismissal requests received.
    requests: Rc<Cell<usize>>,
    /// Requests already acted on.
    handled: usize,
}

impl App {
    /// Build and mount the dialog.
    fn new(size: Size, open: bool) -> Result<Self> {
        let mut doc = Document::new();
        let requests = Rc::new(Cell::new(0));
        let counter = Rc::clone(&requests);
        let props = ModalProps::builder()
            .size(size)
            .open(open)
            .hide(move || counter.set(counter.get() + 1))
            .child(Child::title("Confirm"))
            .child(Child::content(
                Markup::new("div")
                    .child(Markup::new("p").text("Save changes?"))
                    .child(Markup::new("button").text("Details"))
                    .child(Markup::new("button").text("Compare"))
                    .child(Markup::new("button").attr("tabindex", "-1").text("History")),
            ))
            .child(Child::footer(
                Markup::new("ul")
                    .class("rf-btns-group")
                    .child(Markup::new("li").child(Markup::new("button").text("Save")))
                    .child(Markup::new("li").child(Markup::new("button").text("Discard"))),
            ))
            .build()?;
        let mut modal = Modal::new(&mut doc, props)?;
        modal.mount(&mut doc)?;
        Ok(Self {
            doc,
            modal,
            requests,
            handled: 0,
        })
    }

    /// Close the dialog if it asked to be.
    fn settle(&mut self) -> Result<()> {
        let seen = self.requests.get();
        if seen > self.handled {
            self.handled = seen;
            info!(requests = seen, "dismissal requested, closing");
            self.modal.set_open(&mut self.doc, false)?;
        }
        Ok(())
    }

    /// The rendered dialog.
    fn dialog(&self) -> Result<NodeId> {
        self.modal.surface_root().context("dialog is closed")
    }

    /// Run one script step.
    fn step(&mut self, step: &str) -> Result<()> {
        match step {
            "open" => {
                self.modal.set_open(&mut self.doc, true)?;
            }
            "backdrop" => {
                let d = self.dialog()?;
                self.doc.click(d)?;
            }
            "close" => {
                let d = self.dialog()?;
                let Some(close) = self
                    .doc
                    .query_all(d, |el| el.has_class("rf-link--close"))
                    .first()
                    .copied()
                else {
                    bail!("no close control");
                };
                self.doc.click(close)?;
            }
            key => {
                let key: Key = key.parse()?;
                let ev = self.doc.key_down(key)?;
                info!(?key, prevented = ev.default_prevented(), "key pressed");
            }
        }
        self.settle()
    }

    /// Print the whole body.
    fn print(&self, label: &str) -> Result<()> {
        println!("== {label}");
        print!("{}", dump(&self.doc, self.doc.body())?);
        println!("-- dismissals: {}", self.requests.get());
        Ok(())
    }
}

/// Run the demo.
fn main() -> Result<()> {
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let mut app = App::new(args.size, !args.closed)?;
    app.print("initial")?;

    let mut steps: Vec<&str> = args
        .script
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if args.click_backdrop {
        steps.push("backdrop");
    }
    for step in steps {
        app.step(step)
            .with_context(|| format!("step {step:?} failed"))?;
        app.print(step)?;
    }
    Ok(())
}
