use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use serde_json::{Value, json};
use vellum_engine::logging::{LoggingConfig, init_logging};
use vellum_ui::gradient_picker::ListenerId;
use vellum_ui::prelude::*;

/// Headless driver for the autocomplete and gradient editing cores.
#[derive(Parser)]
#[command(name = "vellum-studio")]
#[command(about = "Drive the vellum editing cores from the command line")]
struct Cli {
    /// Log filter, e.g. "debug" or "vellum_ui=trace".
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a gradient, apply edits, print the result
    Gradient {
        /// CSS gradient value; the default gradient when omitted
        css: Option<String>,

        /// Insert a control point at this percent
        #[arg(long, requires = "color")]
        insert: Option<f32>,

        /// Color for the inserted point
        #[arg(long)]
        color: Option<String>,

        /// Drag a point, as INDEX:PERCENT
        #[arg(long = "move", value_parser = parse_move)]
        drag: Option<(usize, f32)>,

        /// Remove the point at this index
        #[arg(long)]
        remove: Option<usize>,

        /// Switch gradient type
        #[arg(long, value_enum)]
        kind: Option<KindArg>,

        /// Set the angle of a linear gradient
        #[arg(long)]
        angle: Option<f64>,
    },

    /// Run the autocomplete engine over a text with the caret at the end
    Complete {
        /// Text typed so far
        text: String,

        /// JSON array of options (strings or objects with "label"/"keywords")
        #[arg(short, long)]
        options: Option<PathBuf>,

        /// Trigger prefix
        #[arg(short, long, default_value = "@")]
        trigger: String,

        /// Press ArrowDown this many times, then Enter
        #[arg(short, long)]
        select: Option<usize>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Linear,
    Radial,
}

fn parse_move(s: &str) -> Result<(usize, f32), String> {
    let (index, position) = s.split_once(':').ok_or("expected INDEX:PERCENT")?;
    let index = index.parse().map_err(|e| format!("bad index: {e}"))?;
    let position = position.parse().map_err(|e| format!("bad percent: {e}"))?;
    Ok((index, position))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut logging = LoggingConfig::default();
    if let Some(filter) = cli.log {
        logging = logging.with_filter(filter);
    }
    init_logging(logging);

    match cli.command {
        Commands::Gradient { css, insert, color, drag, remove, kind, angle } => {
            run_gradient(css.as_deref(), insert.zip(color), drag, remove, kind, angle)
        }
        Commands::Complete { text, options, trigger, select } => {
            run_complete(text, options, trigger, select).await
        }
    }
}

// ── gradient ──────────────────────────────────────────────────────────────

/// Stdout stand-in for document-wide pointer listeners.
#[derive(Default)]
struct StdoutListeners {
    next: RefCell<ListenerId>,
}

impl PointerListeners for StdoutListeners {
    fn attach(&self) -> ListenerId {
        let mut next = self.next.borrow_mut();
        *next += 1;
        info!("pointer listeners {} attached", *next);
        *next
    }

    fn detach(&self, id: ListenerId) {
        info!("pointer listeners {id} detached");
    }
}

const BAR_WIDTH: f32 = 100.0;

fn run_gradient(
    css: Option<&str>,
    insert: Option<(f32, String)>,
    drag: Option<(usize, f32)>,
    remove: Option<usize>,
    kind: Option<KindArg>,
    angle: Option<f64>,
) -> anyhow::Result<()> {
    let mut picker = GradientPicker::new(css)
        .pointer_listeners(Rc::new(StdoutListeners::default()))
        .on_change(|css| info!("changed: {css}"));
    picker.set_bar_rect(Rect::new(0.0, 0.0, BAR_WIDTH, 24.0));

    if css.is_some() && !picker.has_gradient() {
        println!("  (unparsable value, using the default gradient)");
    }

    if let Some((position, color)) = insert {
        picker.handle_bar_event(&UiEvent::PointerMove { pos: Vec2::new(position, 12.0) });
        if !picker.bar_state().is_moving_inserter() {
            bail!("cannot insert at {position}%: too close to an existing point");
        }
        picker.open_inserter();
        picker.inserter_color_change(&color);
        picker.close_inserter();
    }

    if let Some((index, position)) = drag {
        let down = UiEvent::PointerDown { pos: Vec2::zero(), button: MouseButton::Left };
        picker.handle_control_point_event(index, &down);
        picker.handle_drag_event(&UiEvent::PointerMove { pos: Vec2::new(position, 12.0) });
        picker.handle_drag_event(&UiEvent::PointerUp { pos: Vec2::new(position, 12.0) });
    }

    if let Some(index) = remove {
        if picker.remove_control_point(index).is_none() {
            bail!("cannot remove point {index}: a gradient keeps at least two points");
        }
    }

    match kind {
        Some(KindArg::Linear) => { picker.set_kind(GradientKind::Linear); }
        Some(KindArg::Radial) => { picker.set_kind(GradientKind::Radial); }
        None => {}
    }
    if let Some(angle) = angle {
        picker.set_angle(angle);
    }

    println!("{}", picker.value());
    println!();
    for (i, point) in picker.control_points().iter().enumerate() {
        println!("  [{i}] {:>5.1}%  {}", point.position, point.color);
    }
    if picker.kind() == GradientKind::Linear {
        println!("  angle: {}deg", picker.angle());
    }
    println!("  bar:   {}", picker.bar_background());
    Ok(())
}

// ── autocomplete ──────────────────────────────────────────────────────────

/// Completer over a fixed JSON option list.
struct JsonCompleter {
    trigger: String,
    options: Vec<Value>,
}

impl JsonCompleter {
    fn label_of(option: &Value) -> String {
        match option {
            Value::String(s) => s.clone(),
            other => other["label"].as_str().unwrap_or_default().to_string(),
        }
    }
}

impl Completer for JsonCompleter {
    fn name(&self) -> &str {
        "json"
    }

    fn trigger_prefix(&self) -> &str {
        &self.trigger
    }

    fn options(&self, _query: &str) -> OptionsSource {
        OptionsSource::List(self.options.clone())
    }

    fn option_label(&self, option: &OptionValue) -> OptionLabel {
        OptionLabel::Text(Self::label_of(option))
    }

    fn option_keywords(&self, option: &OptionValue) -> Vec<String> {
        option["keywords"]
            .as_array()
            .map(|k| k.iter().filter_map(Value::as_str).map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn is_option_disabled(&self, option: &OptionValue) -> bool {
        option["disabled"].as_bool().unwrap_or(false)
    }

    fn option_completion(&self, option: &OptionValue, _query: &str) -> Option<Completion> {
        Some(Completion::InsertAtCaret(format!("{}{} ", self.trigger, Self::label_of(option))))
    }
}

fn default_options() -> Vec<Value> {
    vec![
        json!({ "label": "admin", "keywords": ["Site Administrator"] }),
        json!({ "label": "editor", "keywords": ["Éditrice"] }),
        json!({ "label": "author", "keywords": ["Writer"] }),
        json!({ "label": "wordsmith", "keywords": ["Contributor"] }),
    ]
}

async fn run_complete(
    text: String,
    options: Option<PathBuf>,
    trigger: String,
    select: Option<usize>,
) -> anyhow::Result<()> {
    let options = match options {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<Vec<Value>>(&raw)
                .with_context(|| format!("{} is not a JSON array", path.display()))?
        }
        None => default_options(),
    };

    let completer: Arc<dyn Completer> = Arc::new(JsonCompleter { trigger, options });
    let inserted = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&inserted);
    let mut ac = Autocomplete::new(vec![completer])
        .on_change(move |record: RichText| *sink.borrow_mut() = Some(record.text));

    ac.update_record(RichText::at_end(text));
    ac.poll_options();

    let session = ac.session();
    let Some(name) = session.active_name() else {
        println!("no completer triggered");
        return Ok(());
    };
    println!("completer {name:?}, query {:?}", session.filter_value);
    for option in &session.filtered_options {
        let label = option.label.as_text().unwrap_or("<markup>");
        let disabled = if option.is_disabled { "  (disabled)" } else { "" };
        println!("  {:<8} {label}{disabled}", option.key);
    }

    if let Some(steps) = select {
        for _ in 0..steps {
            ac.handle_key(Key::ArrowDown);
        }
        ac.handle_key(Key::Enter);
        match inserted.borrow().as_deref() {
            Some(text) => println!("-> {text}"),
            None => println!("-> nothing inserted"),
        }
    }
    Ok(())
}
