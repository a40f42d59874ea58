//! Catalog of known job-board sites and their search URL templates.

/// Source id used when a configuration names a site we do not know.
pub const DEFAULT_SOURCE: &str = "linkedin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSite {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SOURCES: &[SourceSite] = &[
    SourceSite { id: "linkedin", label: "LinkedIn" },
    SourceSite { id: "indeed", label: "Indeed" },
    SourceSite { id: "glassdoor", label: "Glassdoor" },
    SourceSite { id: "monster", label: "Monster" },
    SourceSite { id: "handshake", label: "Handshake (Students/Grads)" },
    SourceSite { id: "ziprecruiter", label: "ZipRecruiter" },
    SourceSite { id: "wayup", label: "WayUp (Entry-level)" },
    SourceSite { id: "simplyhired", label: "SimplyHired" },
    SourceSite { id: "theladders", label: "The Ladders" },
    SourceSite { id: "youtern", label: "Youtern (Internships)" },
    SourceSite { id: "collegegrad", label: "CollegeGrad (New Grads)" },
    SourceSite { id: "builtin", label: "BuiltIn Tech" },
    SourceSite { id: "wellfound", label: "Wellfound (AngelList)" },
    SourceSite { id: "jobspresso", label: "Jobspresso" },
    SourceSite { id: "stackoverflow", label: "Stack Overflow Jobs" },
    SourceSite { id: "outsourcely", label: "Outsourcely" },
    SourceSite { id: "toptal", label: "Toptal" },
    SourceSite { id: "skipthedrive", label: "Skip The Drive" },
    SourceSite { id: "nodesk", label: "NoDesk" },
    SourceSite { id: "remotehabits", label: "RemoteHabits" },
    SourceSite { id: "remotive", label: "Remotive" },
    SourceSite { id: "remote4me", label: "Remote4Me" },
    SourceSite { id: "pangian", label: "Pangian" },
    SourceSite { id: "remotees", label: "Remotees" },
    SourceSite { id: "europeremotely", label: "Europe Remotely" },
    SourceSite { id: "remoteokeurope", label: "Remote OK Europe" },
    SourceSite { id: "remoteofasia", label: "Remote of Asia" },
    SourceSite { id: "flexjobs", label: "FlexJobs" },
    SourceSite { id: "remoteco", label: "Remote.co" },
    SourceSite { id: "weworkremotely", label: "We Work Remotely" },
    SourceSite { id: "remoteok", label: "RemoteOK" },
    SourceSite { id: "angellist", label: "AngelList" },
    SourceSite { id: "freelancer", label: "Freelancer" },
    SourceSite { id: "workingnomads", label: "Working Nomads" },
    SourceSite { id: "virtualvocations", label: "Virtual Vocations" },
    SourceSite { id: "remotefreelance", label: "Remote Freelance" },
    SourceSite { id: "remoterocketship", label: "Remote Rocketship" },
];

/// Looks up the display label for a source id.
pub fn source_label(id: &str) -> Option<&'static str> {
    SOURCES.iter().find(|s| s.id == id).map(|s| s.label)
}

/// Builds the search URL for a source site from the two filters.
///
/// Unknown source ids fall back to the default site's template rather than
/// failing; the catalog is advisory, not a validation gate.
pub fn search_url(source: &str, job_title: &str, location: &str) -> String {
    let title = encode(job_title);
    let loc = encode(location);

    match source {
        "linkedin" => format!(
            "https://www.linkedin.com/jobs/search/?keywords={title}&location={loc}"
        ),
        "indeed" => format!("https://www.indeed.com/jobs?q={title}&l={loc}"),
        "glassdoor" => format!(
            "https://www.glassdoor.com/Job/jobs.htm?sc.keyword={title}&locT=C&locId=0&locKeyword={loc}"
        ),
        "monster" => format!("https://www.monster.com/jobs/search?q={title}&where={loc}"),
        "handshake" => format!(
            "https://app.joinhandshake.com/stu/jobs?text={title}&location={loc}"
        ),
        "ziprecruiter" => format!("https://www.ziprecruiter.com/jobs/search?q={title}&l={loc}"),
        "wayup" => format!("https://www.wayup.com/search/{title}/?location={loc}"),
        "simplyhired" => format!("https://www.simplyhired.com/search?q={title}&l={loc}"),
        "theladders" => format!(
            "https://www.theladders.com/jobs/search-jobs?keywords={title}&location={loc}"
        ),
        "youtern" => format!("https://www.youtern.com/search/job?q={title}&location={loc}"),
        "collegegrad" => format!("https://collegegrad.com/search?q={title}&l={loc}"),
        "builtin" => format!("https://builtin.com/jobs?search={title}&location={loc}"),
        "wellfound" => format!("https://wellfound.com/jobs?search={title}&location={loc}"),
        "jobspresso" => format!(
            "https://jobspresso.co/?search_keywords={title}&search_location={loc}"
        ),
        "stackoverflow" => format!("https://stackoverflow.com/jobs?q={title}&l={loc}"),
        "outsourcely" => format!(
            "https://www.outsourcely.com/remote-jobs?keyword={title}&location={loc}"
        ),
        "toptal" => format!("https://www.toptal.com/jobs/search?term={title}"),
        "skipthedrive" => format!(
            "https://www.skipthedrive.com/search/?search={title}&location={loc}"
        ),
        "nodesk" => format!("https://nodesk.co/remote-jobs/?search={title}"),
        "remotehabits" => format!("https://remotehabits.com/remote-jobs/?search={title}"),
        "remotive" => format!("https://remotive.com/remote-jobs?search={title}"),
        "remote4me" => format!("https://remote4me.com/?keyword={title}"),
        "pangian" => format!("https://pangian.com/job-travel-remote/?search={title}"),
        "remotees" => format!("https://remotees.com/remote-jobs?search={title}"),
        "europeremotely" => format!("https://europeremotely.com/?search={title}"),
        "remoteokeurope" => format!(
            "https://remoteok.com/remote-jobs-in-europe?search={title}"
        ),
        "remoteofasia" => format!("https://remoteok.com/remote-jobs-in-asia?search={title}"),
        "flexjobs" => format!("https://www.flexjobs.com/search?search={title}&location={loc}"),
        "remoteco" => format!(
            "https://remote.co/remote-jobs/search/?search_keywords={title}"
        ),
        "weworkremotely" => format!("https://weworkremotely.com/remote-jobs/search?term={title}"),
        "remoteok" => format!("https://remoteok.com/remote-{}-jobs", slug(job_title)),
        "angellist" => format!("https://angel.co/jobs?q={title}&l={loc}"),
        "freelancer" => format!("https://www.freelancer.com/jobs/search?q={title}"),
        "workingnomads" => format!("https://www.workingnomads.com/jobs?search={title}"),
        "virtualvocations" => format!(
            "https://www.virtualvocations.com/jobs?search={title}&location={loc}"
        ),
        "remotefreelance" => format!("https://remote-freelance.com/jobs/search?q={title}"),
        "remoterocketship" => format!("https://remoterocketship.com/?s={title}"),
        _ => format!(
            "https://www.linkedin.com/jobs/search/?keywords={title}&location={loc}"
        ),
    }
}

fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// RemoteOK uses path slugs instead of query parameters.
fn slug(value: &str) -> String {
    value.to_lowercase().replace(' ', "-")
}
