//! Sample data the simulation draws from.

/// Generic role titles used when no job-title filter is given.
pub const GENERIC_TITLES: &[&str] = &[
    "Software Engineer",
    "Product Manager",
    "Data Scientist",
    "UX Designer",
    "Marketing Specialist",
    "Sales Representative",
    "Project Manager",
    "Business Analyst",
    "DevOps Engineer",
    "Full Stack Developer",
    "Junior Developer",
    "Entry-Level Software Engineer",
    "Graduate Software Developer",
    "Junior Data Analyst",
    "Marketing Assistant",
    "IT Support Technician",
    "Junior UX/UI Designer",
    "Sales Development Representative",
    "Customer Success Associate",
    "Research Assistant",
];

pub const COMPANIES: &[&str] = &[
    "Acme Corp",
    "TechGiant Inc.",
    "Innovative Solutions",
    "DataWise Analytics",
    "CloudScale Technologies",
    "DigitalFuture",
    "NextGen Systems",
    "ByteWorks",
    "GlobalTech Enterprises",
    "Quantum Software",
    "GradStart Inc.",
    "FirstJob Technologies",
    "NewTalent Group",
    "TechBootcamp Partners",
    "EarlyCareer Solutions",
    "JuniorHire Co.",
    "GrowthPath Labs",
    "FreshTalent Innovations",
    "CareerLaunch Systems",
    "DevTrainee Network",
];

/// Generic locations used when no location filter is given.
pub const GENERIC_LOCATIONS: &[&str] = &[
    "Remote",
    "New York, NY",
    "San Francisco, CA",
    "Austin, TX",
    "Chicago, IL",
    "Boston, MA",
];

/// Salary ranges; the two trailing `None` entries model listings that do
/// not state a salary.
pub const SALARY_RANGES: &[Option<&str>] = &[
    Some("$40,000 - $55,000"),
    Some("$45,000 - $65,000"),
    Some("$50,000 - $70,000"),
    Some("$55,000 - $75,000"),
    Some("$60,000 - $80,000"),
    Some("$70,000 - $90,000"),
    Some("$80,000 - $100,000"),
    Some("$90,000 - $110,000"),
    None,
    None,
];

/// Title pool for a run: ten seniority/role variants templated from the
/// filter when one is given, the generic catalog otherwise.
pub fn title_variants(job_title: &str) -> Vec<String> {
    if job_title.is_empty() {
        return GENERIC_TITLES.iter().map(|t| t.to_string()).collect();
    }
    vec![
        format!("Senior {job_title}"),
        format!("{job_title} Manager"),
        format!("{job_title} Associate"),
        format!("{job_title} Specialist"),
        format!("Junior {job_title}"),
        format!("Entry-Level {job_title}"),
        format!("{job_title} Intern"),
        format!("Graduate {job_title}"),
        format!("{job_title} Trainee"),
        format!("Assistant {job_title}"),
    ]
}

/// Location pool for a run: plain/remote/hybrid variants of the filter when
/// one is given, the generic catalog otherwise.
pub fn location_variants(location: &str) -> Vec<String> {
    if location.is_empty() {
        return GENERIC_LOCATIONS.iter().map(|l| l.to_string()).collect();
    }
    vec![
        location.to_string(),
        format!("Remote, {location}"),
        format!("Hybrid, {location}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::{location_variants, title_variants, SALARY_RANGES};

    #[test]
    fn filtered_title_pool_has_ten_variants() {
        let variants = title_variants("Software Engineer");
        assert_eq!(variants.len(), 10);
        assert!(variants.iter().all(|v| v.contains("Software Engineer")));
    }

    #[test]
    fn empty_filters_use_the_generic_pools() {
        assert_eq!(title_variants("").len(), 20);
        assert_eq!(location_variants("").len(), 6);
    }

    #[test]
    fn two_salary_entries_are_unspecified() {
        assert_eq!(SALARY_RANGES.len(), 10);
        assert_eq!(SALARY_RANGES.iter().filter(|s| s.is_none()).count(), 2);
    }
}
