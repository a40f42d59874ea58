use jobscraper_core::{update, AppState, Effect, Job, Msg, Notice};

fn job(title: &str, quality: u8) -> Job {
    Job {
        title: title.to_string(),
        company: "Acme Corp".to_string(),
        location: "Remote".to_string(),
        salary: None,
        description: None,
        url: None,
        post_date: None,
        data_quality: quality,
    }
}

fn running_state() -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::UrlChanged("https://example.com/jobs".to_string()),
    );
    let (state, _) = update(state, Msg::SubmitClicked);
    state
}

#[test]
fn progress_snapshots_are_applied_in_order() {
    let state = running_state();

    let (state, effects) = update(
        state,
        Msg::ScrapeProgress {
            percent: 33,
            jobs_found: 7,
            pages_scraped: 1,
            error_count: 0,
        },
    );
    assert!(effects.is_empty());

    let (state, _) = update(
        state,
        Msg::ScrapeProgress {
            percent: 67,
            jobs_found: 7,
            pages_scraped: 2,
            error_count: 1,
        },
    );
    let view = state.view();

    assert_eq!(view.run.percent, 67);
    assert_eq!(view.run.jobs_found, 7);
    assert_eq!(view.run.pages_scraped, 2);
    assert_eq!(view.run.error_count, 1);
}

#[test]
fn percent_never_moves_backwards_within_a_run() {
    let state = running_state();

    let (state, _) = update(
        state,
        Msg::ScrapeProgress {
            percent: 67,
            jobs_found: 5,
            pages_scraped: 2,
            error_count: 0,
        },
    );
    let (state, _) = update(
        state,
        Msg::ScrapeProgress {
            percent: 60,
            jobs_found: 12,
            pages_scraped: 3,
            error_count: 0,
        },
    );

    let view = state.view();
    assert_eq!(view.run.percent, 67);
    assert_eq!(view.run.pages_scraped, 3);
}

#[test]
fn timer_ticks_only_while_a_run_is_active() {
    let state = AppState::new();
    let (state, _) = update(state, Msg::TimerTick);
    assert_eq!(state.view().run.elapsed_secs, 0);

    let state = running_state();
    let (state, _) = update(state, Msg::TimerTick);
    let (state, _) = update(state, Msg::TimerTick);
    assert_eq!(state.view().run.elapsed_secs, 2);

    let (state, _) = update(state, Msg::ScrapeCompleted { jobs: Vec::new() });
    let (state, _) = update(state, Msg::TimerTick);
    assert_eq!(state.view().run.elapsed_secs, 2);
}

#[test]
fn completion_stores_jobs_and_stops_the_timer() {
    let state = running_state();
    let jobs = vec![job("Junior Developer", 55), job("Data Scientist", 88)];

    let (state, effects) = update(state, Msg::ScrapeCompleted { jobs });
    let view = state.view();

    assert_eq!(effects, vec![Effect::StopTimer]);
    assert!(!view.run.active);
    assert_eq!(view.job_count, 2);
    assert_eq!(view.run.jobs_found, 2);
    assert_eq!(
        view.notice,
        Some(Notice::Success("Successfully scraped 2 jobs".to_string()))
    );
}

#[test]
fn completion_notice_reports_zero_jobs_when_every_page_failed() {
    let state = running_state();

    let (state, _) = update(state, Msg::ScrapeCompleted { jobs: Vec::new() });

    assert_eq!(
        state.view().notice,
        Some(Notice::Success("Successfully scraped 0 jobs".to_string()))
    );
}

#[test]
fn job_rows_render_salary_placeholder_and_band() {
    let state = running_state();
    let mut paid = job("Product Manager", 91);
    paid.salary = Some("$80,000 - $100,000".to_string());
    let (state, _) = update(
        state,
        Msg::ScrapeCompleted {
            jobs: vec![paid, job("Research Assistant", 41)],
        },
    );

    let view = state.view();
    assert_eq!(view.jobs[0].salary_label, "$80,000 - $100,000");
    assert_eq!(view.jobs[0].quality_band.label(), "Excellent");
    assert_eq!(view.jobs[1].salary_label, "Not specified");
    assert_eq!(view.jobs[1].quality_band.label(), "Fair");
}
