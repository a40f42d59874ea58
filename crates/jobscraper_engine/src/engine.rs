use std::sync::mpsc;
use std::thread;

use scraper_logging::scrape_info;

use crate::simulate::{ChannelProgressSink, ScrapeRunner};
use crate::{ScrapeEvent, ScrapeQuery};

enum EngineCommand {
    StartRun { query: ScrapeQuery },
}

/// Handle to the background scrape thread. Commands go in over a channel;
/// `ScrapeEvent`s come out of the receiver returned by [`EngineHandle::start`].
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    /// Spawns the engine thread around the given runner and returns the
    /// handle plus the event stream.
    pub fn start(runner: Box<dyn ScrapeRunner>) -> (Self, mpsc::Receiver<ScrapeEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel::<ScrapeEvent>();

        thread::spawn(move || {
            let mut runner = runner;
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            // One run at a time; pages within a run are sequential as well.
            while let Ok(EngineCommand::StartRun { query }) = cmd_rx.recv() {
                scrape_info!("engine run starting for {}", query.url);
                let sink = ChannelProgressSink::new(event_tx.clone());
                let jobs = runtime.block_on(runner.scrape(&query, &sink));
                if event_tx.send(ScrapeEvent::Completed { jobs }).is_err() {
                    break;
                }
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn start_run(&self, query: ScrapeQuery) {
        let _ = self.cmd_tx.send(EngineCommand::StartRun { query });
    }
}
