use std::sync::{mpsc, Arc};

use anyhow::{bail, Context};

use jobscraper_core::{update, AppState, Msg, SOURCES};
use jobscraper_engine::{SimulationSettings, TemplateStore};

use crate::cli::{Cli, Command, RunArgs, TemplatesAction};
use crate::effects::{map_template, EffectRunner};
use crate::persistence::FileSlot;
use crate::render::TerminalRenderer;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let store = Arc::new(TemplateStore::new(FileSlot::new(cli.templates_file.clone())));

    match cli.command {
        Command::Run(args) => run_scrape(store, cli.output_dir, args),
        Command::Templates { action } => manage_templates(&store, action),
        Command::Sources => {
            for site in SOURCES {
                println!("{:<18} {}", site.id, site.label);
            }
            Ok(())
        }
    }
}

/// The host view: owns the state, feeds the CLI input through messages,
/// drains engine/ticker messages until the run finishes, then handles any
/// requested template save and exports.
fn run_scrape(
    store: Arc<TemplateStore<FileSlot>>,
    output_dir: std::path::PathBuf,
    args: RunArgs,
) -> anyhow::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(
        msg_tx,
        store.clone(),
        output_dir,
        SimulationSettings::default(),
    );
    let mut session = Session {
        state: AppState::new(),
        runner,
        renderer: TerminalRenderer::new(),
    };

    let saved: Vec<_> = store.list().iter().map(map_template).collect();
    session.dispatch(Msg::TemplatesRestored(saved));

    if let Some(wanted) = &args.template {
        let id = session
            .state
            .view()
            .templates
            .iter()
            .find(|t| &t.id == wanted || &t.name == wanted)
            .map(|t| t.id.clone())
            .with_context(|| format!("no saved template matches {wanted:?}"))?;
        session.dispatch(Msg::TemplateApplied { id });
    }

    if let Some(url) = args.url {
        session.dispatch(Msg::UrlChanged(url));
    }
    if let Some(job_title) = args.job_title {
        session.dispatch(Msg::JobTitleChanged(job_title));
    }
    if let Some(location) = args.location {
        session.dispatch(Msg::LocationChanged(location));
    }
    if let Some(source) = args.source {
        session.dispatch(Msg::SourceChanged(source));
    }

    // Mirror the form: an omitted URL is templated from the filters when
    // at least one of them is present.
    let form = session.state.view().form;
    if form.url.is_empty() && !(form.job_title.is_empty() && form.location.is_empty()) {
        session.dispatch(Msg::GenerateUrlRequested);
    }

    session.dispatch(Msg::SubmitClicked);
    if !session.state.view().run.active {
        bail!("scrape not started");
    }

    while session.state.view().run.active {
        let msg = msg_rx.recv().context("engine channel closed mid-run")?;
        session.dispatch(msg);
    }

    session.renderer.results_table(&session.state.view());

    if let Some(name) = args.save_as {
        session.dispatch(Msg::SaveTemplateRequested { name });
        session.drain(&msg_rx);
    }
    for format in args.exports {
        session.dispatch(Msg::ExportRequested {
            format: format.into(),
        });
        session.drain(&msg_rx);
    }

    Ok(())
}

fn manage_templates(
    store: &TemplateStore<FileSlot>,
    action: TemplatesAction,
) -> anyhow::Result<()> {
    match action {
        TemplatesAction::List => {
            let entries: Vec<_> = store.list().iter().map(map_template).collect();
            let (state, _) = update(AppState::new(), Msg::TemplatesRestored(entries));
            TerminalRenderer::new().templates_list(&state.view());
            Ok(())
        }
        TemplatesAction::Delete { id } => {
            let parsed = id
                .parse::<uuid::Uuid>()
                .context("template ids are UUIDs; see `templates list`")?;
            store.delete(parsed)?;
            println!("Template {id} deleted.");
            Ok(())
        }
    }
}

struct Session {
    state: AppState,
    runner: EffectRunner,
    renderer: TerminalRenderer,
}

impl Session {
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.runner.run(effects);
        if state.consume_dirty() {
            self.renderer.draw(&state.view());
        }
        self.state = state;
    }

    /// Applies whatever the effect runner has already queued.
    fn drain(&mut self, msg_rx: &mpsc::Receiver<Msg>) {
        while let Ok(msg) = msg_rx.try_recv() {
            self.dispatch(msg);
        }
    }
}
