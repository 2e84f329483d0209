use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, Command};
use flowpad_editor::{DiagramLoader, Editor, EditorConfig, ImportReport};
use flowpad_model::{Document, Element, ElementId, ElementRecord, Point, PointerEvent, ShapeSpec};
use flowpad_suitability::{DelayPolicy, SuitabilityPadProvider};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("FLOWPAD_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Command::new("flowpad")
        .version(flowpad_editor::VERSION)
        .about("Headless flowpad diagram editor")
        .arg_required_else_help(false)
        .subcommand(
            Command::new("entries")
                .about("Print the context pad entry table for an anchor element")
                .arg(
                    Arg::new("no-auto-place")
                        .long("no-auto-place")
                        .action(ArgAction::SetTrue)
                        .help("Disable the auto-place capability"),
                ),
        )
        .subcommand(
            Command::new("click")
                .about("Trigger a pad entry's click action")
                .arg(
                    Arg::new("entry")
                        .long("entry")
                        .default_value("append.high-task")
                        .help("Entry id to trigger"),
                )
                .arg(
                    Arg::new("diagram")
                        .long("diagram")
                        .help("Diagram file to import first"),
                )
                .arg(
                    Arg::new("url")
                        .long("url")
                        .help("Diagram URL to load first"),
                )
                .arg(
                    Arg::new("no-auto-place")
                        .long("no-auto-place")
                        .action(ArgAction::SetTrue)
                        .help("Disable the auto-place capability"),
                )
                .arg(
                    Arg::new("delay-ms")
                        .long("delay-ms")
                        .default_value("1000")
                        .value_parser(value_parser!(u64))
                        .help("Click-path delay in milliseconds"),
                ),
        )
        .subcommand(
            Command::new("drag")
                .about("Trigger a pad entry's drag action and complete the drop")
                .arg(
                    Arg::new("entry")
                        .long("entry")
                        .default_value("append.high-task")
                        .help("Entry id to trigger"),
                )
                .arg(
                    Arg::new("diagram")
                        .long("diagram")
                        .help("Diagram file to import first"),
                )
                .arg(
                    Arg::new("url")
                        .long("url")
                        .help("Diagram URL to load first"),
                ),
        )
        .subcommand(
            Command::new("load")
                .about("Import a diagram and print the canvas contents")
                .arg(
                    Arg::new("diagram")
                        .long("diagram")
                        .help("Diagram file to import"),
                )
                .arg(
                    Arg::new("url")
                        .long("url")
                        .help("Diagram URL to load"),
                ),
        )
        .subcommand(
            Command::new("simulate")
                .about("Run a seeded sequence of random pad actions")
                .arg(
                    Arg::new("actions")
                        .long("actions")
                        .default_value("20")
                        .value_parser(value_parser!(u64))
                        .help("Number of pad actions to run"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .default_value("42")
                        .value_parser(value_parser!(u64))
                        .help("Random seed for reproducibility"),
                )
                .arg(
                    Arg::new("no-auto-place")
                        .long("no-auto-place")
                        .action(ArgAction::SetTrue)
                        .help("Disable the auto-place capability"),
                )
                .arg(
                    Arg::new("delay-ms")
                        .long("delay-ms")
                        .default_value("0")
                        .value_parser(value_parser!(u64))
                        .help("Click-path delay in milliseconds"),
                ),
        );

    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("entries", args)) => {
            let editor = build_editor(args.get_flag("no-auto-place"));
            SuitabilityPadProvider::install(&editor, DelayPolicy::DEFAULT);
            let anchor_id = commit_anchor(&editor)?;
            let anchor = editor
                .canvas()
                .element(anchor_id)
                .context("anchor missing from canvas")?;

            let entries = editor.pad().entries_for(&anchor);
            println!("Context pad entries: {}", entries.len());
            for (id, entry) in &entries {
                println!("  {} [{}] {}", id, entry.group, entry.class_name);
                println!("    {}", entry.title);
            }
        }
        Some(("click", args)) => {
            let entry = args.get_one::<String>("entry").context("entry id")?;
            let delay_ms = *args.get_one::<u64>("delay-ms").context("delay")?;

            let editor = build_editor(args.get_flag("no-auto-place"));
            SuitabilityPadProvider::install(
                &editor,
                DelayPolicy::new(Duration::from_millis(delay_ms)),
            );
            let report = load_diagram(
                &editor,
                args.get_one::<String>("diagram"),
                args.get_one::<String>("url"),
            )
            .await?;
            let anchor_id = report.imported[0];

            editor
                .click_entry(entry, &PointerEvent::at(0.0, 0.0), anchor_id)
                .await?;

            println!("Click dispatched: {}", entry);
            println!("Canvas elements: {}", editor.canvas().len());
            if let Some(pending) = editor.create_session().pending() {
                println!("Create session pending at {}", pending.origin);
            }
        }
        Some(("drag", args)) => {
            let entry = args.get_one::<String>("entry").context("entry id")?;

            let editor = build_editor(false);
            SuitabilityPadProvider::install(&editor, DelayPolicy::DEFAULT);
            let report = load_diagram(
                &editor,
                args.get_one::<String>("diagram"),
                args.get_one::<String>("url"),
            )
            .await?;
            let anchor_id = report.imported[0];

            editor.drag_entry(entry, &PointerEvent::at(200.0, 150.0), anchor_id)?;
            let pending = editor
                .create_session()
                .pending()
                .context("no pending session after drag start")?;
            println!("Create session started at {}", pending.origin);

            let id = editor
                .create_session()
                .complete_at(Point::new(400.0, 200.0))?;
            println!("Committed {} at the drop point", id);
        }
        Some(("load", args)) => {
            let editor = build_editor(false);
            let report = load_diagram(
                &editor,
                args.get_one::<String>("diagram"),
                args.get_one::<String>("url"),
            )
            .await?;

            println!(
                "Imported {} elements, {} warnings",
                report.imported.len(),
                report.warnings.len()
            );
            for warning in &report.warnings {
                println!("  warning: {}", warning);
            }
            for element in editor.canvas().elements() {
                print_element(&element);
            }
            let viewport = editor.canvas().viewport();
            println!(
                "Viewport: zoom {:.3} centered on {}",
                viewport.zoom, viewport.center
            );
        }
        Some(("simulate", args)) => {
            let actions = *args.get_one::<u64>("actions").context("actions")?;
            let seed = *args.get_one::<u64>("seed").context("seed")?;
            let delay_ms = *args.get_one::<u64>("delay-ms").context("delay")?;

            let editor = build_editor(args.get_flag("no-auto-place"));
            SuitabilityPadProvider::install(
                &editor,
                DelayPolicy::new(Duration::from_millis(delay_ms)),
            );
            commit_anchor(&editor)?;

            println!("Running pad simulation...");
            println!("Actions: {}", actions);
            println!("Seed: {}", seed);
            println!();

            let report = simulate(&editor, actions, seed).await;

            println!("Simulation Report:");
            println!("  Clicks: {}", report.clicks);
            println!("  Drags: {}", report.drags);
            println!("  Failures: {}", report.failures);
            println!("  Canvas elements: {}", editor.canvas().len());

            std::process::exit(if report.failures == 0 { 0 } else { 1 });
        }
        _ => {}
    }

    Ok(())
}

fn build_editor(no_auto_place: bool) -> Editor {
    Editor::new(EditorConfig::new().with_auto_place(!no_auto_place))
}

/// Commit a plain task for the pad to act against.
fn commit_anchor(editor: &Editor) -> anyhow::Result<ElementId> {
    let business_object = editor.business_objects().create("flow:Task")?;
    let shape = editor.element_factory().create_shape(ShapeSpec::new(
        business_object.type_name().clone(),
        business_object,
    ))?;
    let id = editor
        .canvas()
        .commit(shape.placed_at(Point::new(60.0, 60.0)))?;
    Ok(id)
}

/// Import from a file, a URL, or fall back to a scratch document.
async fn load_diagram(
    editor: &Editor,
    diagram: Option<&String>,
    url: Option<&String>,
) -> anyhow::Result<ImportReport> {
    if let Some(path) = diagram {
        let payload = std::fs::read_to_string(path)
            .with_context(|| format!("reading diagram file {}", path))?;
        Ok(editor.import_str(&payload)?)
    } else if let Some(url) = url {
        Ok(DiagramLoader::new().load_url(editor, url).await?)
    } else {
        let mut doc = Document::named("scratch");
        doc.elements.push(ElementRecord::new("flow:Task", 60.0, 60.0));
        Ok(editor.import_document(&doc)?)
    }
}

fn print_element(element: &Element) {
    match element.business_object().suitable() {
        Some(score) => println!(
            "  {} {} at {} suitable={}",
            element.id(),
            element.type_name(),
            element.bounds().origin,
            score.value()
        ),
        None => println!(
            "  {} {} at {}",
            element.id(),
            element.type_name(),
            element.bounds().origin
        ),
    }
}

struct SimulationReport {
    clicks: u64,
    drags: u64,
    failures: u64,
}

/// Drive random entries against random anchors, completing any drag the
/// previous step left pending.
async fn simulate(editor: &Editor, actions: u64, seed: u64) -> SimulationReport {
    const ENTRIES: [&str; 3] = ["append.low-task", "append.average-task", "append.high-task"];

    let mut rng = StdRng::seed_from_u64(seed);
    let mut report = SimulationReport {
        clicks: 0,
        drags: 0,
        failures: 0,
    };

    for _ in 0..actions {
        if editor.create_session().pending().is_some() {
            let drop = Point::new(rng.gen_range(0.0..800.0), rng.gen_range(0.0..600.0));
            if editor.create_session().complete_at(drop).is_err() {
                report.failures += 1;
            }
        }

        let entry = ENTRIES[rng.gen_range(0..ENTRIES.len())];
        let elements = editor.canvas().elements();
        let anchor = elements[rng.gen_range(0..elements.len())].id();
        let event = PointerEvent::at(rng.gen_range(0.0..800.0), rng.gen_range(0.0..600.0));

        if rng.gen_bool(0.5) {
            match editor.click_entry(entry, &event, anchor).await {
                Ok(()) => report.clicks += 1,
                Err(err) => {
                    tracing::warn!(%err, entry, "click failed");
                    report.failures += 1;
                }
            }
        } else {
            match editor.drag_entry(entry, &event, anchor) {
                Ok(()) => report.drags += 1,
                Err(err) => {
                    tracing::warn!(%err, entry, "drag failed");
                    report.failures += 1;
                }
            }
        }
    }

    report
}
