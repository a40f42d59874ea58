use std::sync::Mutex;

use jobscraper_engine::{
    ProgressSink, ProgressSnapshot, ScrapeEvent, ScrapeQuery, ScrapeRunner, ScriptedRandom,
    SimulatedScraper, SimulationSettings,
};

#[derive(Default)]
struct RecordingSink {
    snapshots: Mutex<Vec<ProgressSnapshot>>,
}

impl RecordingSink {
    fn snapshots(&self) -> Vec<ProgressSnapshot> {
        self.snapshots.lock().unwrap().clone()
    }
}

impl ProgressSink for RecordingSink {
    fn emit(&self, event: ScrapeEvent) {
        if let ScrapeEvent::Progress(snapshot) = event {
            self.snapshots.lock().unwrap().push(snapshot);
        }
    }
}

fn instant_settings() -> SimulationSettings {
    SimulationSettings {
        min_latency_ms: 0,
        max_latency_ms: 0,
        ..SimulationSettings::default()
    }
}

fn generic_query() -> ScrapeQuery {
    ScrapeQuery {
        url: "https://www.indeed.com/jobs?q=&l=".to_string(),
        source: "indeed".to_string(),
        ..ScrapeQuery::default()
    }
}

// Draw order per run: [pages], then per page [latency, failure] and, for a
// successful page, [count] plus [title, company, location, salary, quality]
// per job. An exhausted script keeps yielding zero.
#[tokio::test]
async fn failed_page_counts_as_processed_but_contributes_nothing() {
    let script = vec![
        0, // three pages
        0, 99, 0, // page 1: ok, five jobs
        0, 0, 0, 8, 0, // job: salary slot 8 is "unspecified"
        1, 1, 1, 1, 1, //
        2, 2, 2, 2, 2, //
        3, 3, 3, 3, 3, //
        4, 4, 4, 4, 4, //
        0, 0, // page 2: failed fetch
        0, 99, 3, // page 3: ok, eight jobs, all-zero draws follow
    ];
    let mut runner =
        SimulatedScraper::new(instant_settings(), Box::new(ScriptedRandom::new(script)));
    let sink = RecordingSink::default();

    let jobs = runner.scrape(&generic_query(), &sink).await;
    let snapshots = sink.snapshots();

    assert_eq!(snapshots.len(), 3);
    assert_eq!(
        snapshots[0],
        ProgressSnapshot {
            percent: 33,
            jobs_found: 5,
            pages_scraped: 1,
            error_count: 0,
        }
    );
    assert_eq!(
        snapshots[1],
        ProgressSnapshot {
            percent: 67,
            jobs_found: 5,
            pages_scraped: 2,
            error_count: 1,
        }
    );
    assert_eq!(
        snapshots[2],
        ProgressSnapshot {
            percent: 100,
            jobs_found: 13,
            pages_scraped: 3,
            error_count: 1,
        }
    );

    assert_eq!(jobs.len(), 13);
    assert_eq!(jobs[0].title, "Software Engineer");
    assert_eq!(jobs[0].salary, None);
    assert_eq!(jobs[1].salary, Some("$45,000 - $65,000".to_string()));
    assert_eq!(jobs[1].company, "TechGiant Inc.");
    assert_eq!(jobs[4].location, "Chicago, IL");
    assert!(jobs.iter().all(|j| (40..=100).contains(&j.data_quality)));
}

#[tokio::test]
async fn filtered_run_draws_from_templated_pools() {
    let settings = SimulationSettings {
        min_pages: 1,
        max_pages: 1,
        min_jobs_per_page: 10,
        max_jobs_per_page: 10,
        failure_percent: 0,
        min_latency_ms: 0,
        max_latency_ms: 0,
        ..SimulationSettings::default()
    };
    let mut script = vec![0, 0, 99, 0];
    for i in 0..10u64 {
        script.extend([i, 0, i, 0, i]);
    }
    let mut runner = SimulatedScraper::new(settings, Box::new(ScriptedRandom::new(script)));
    let sink = RecordingSink::default();
    let query = ScrapeQuery {
        url: "https://x".to_string(),
        job_title: "Software Engineer".to_string(),
        location: "Austin".to_string(),
        source: "linkedin".to_string(),
    };

    let jobs = runner.scrape(&query, &sink).await;

    let titles: Vec<&str> = jobs.iter().map(|j| j.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Senior Software Engineer",
            "Software Engineer Manager",
            "Software Engineer Associate",
            "Software Engineer Specialist",
            "Junior Software Engineer",
            "Entry-Level Software Engineer",
            "Software Engineer Intern",
            "Graduate Software Engineer",
            "Software Engineer Trainee",
            "Assistant Software Engineer",
        ]
    );
    assert_eq!(jobs[0].location, "Austin");
    assert_eq!(jobs[1].location, "Remote, Austin");
    assert_eq!(jobs[2].location, "Hybrid, Austin");
    assert_eq!(jobs[3].location, "Austin");

    let snapshots = sink.snapshots();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].percent, 100);
    assert_eq!(snapshots[0].jobs_found, 10);
}

#[tokio::test]
async fn system_rng_run_upholds_the_progress_contract() {
    let mut runner = SimulatedScraper::with_system_rng(instant_settings());
    let sink = RecordingSink::default();

    let jobs = runner.scrape(&generic_query(), &sink).await;
    let snapshots = sink.snapshots();

    // One callback per page, three to five pages.
    assert!((3..=5).contains(&snapshots.len()));
    assert_eq!(snapshots.last().unwrap().percent, 100);
    assert_eq!(snapshots.last().unwrap().jobs_found, jobs.len());
    assert!(jobs.len() <= 60);

    let mut prev_found = 0;
    let mut prev_percent = 0;
    let mut zero_pages = 0;
    for (i, snapshot) in snapshots.iter().enumerate() {
        assert!(snapshot.jobs_found >= prev_found);
        assert!(snapshot.percent >= prev_percent);
        assert_eq!(snapshot.pages_scraped, i + 1);
        if snapshot.jobs_found == prev_found {
            zero_pages += 1;
        }
        prev_found = snapshot.jobs_found;
        prev_percent = snapshot.percent;
    }
    assert_eq!(snapshots.last().unwrap().error_count, zero_pages);

    let generic = jobscraper_engine::title_variants("");
    assert!(jobs.iter().all(|j| generic.contains(&j.title)));
    assert!(jobs.iter().all(|j| (40..=100).contains(&j.data_quality)));
}
