use crate::ExportFormat;

/// Download name of the form
/// `{ISO-date}_{title-or-All-Jobs}_{location-or-All-Locations}.{ext}`,
/// with whitespace runs collapsed to single hyphens.
pub fn export_file_name(
    job_title: &str,
    location: &str,
    format: ExportFormat,
    iso_date: &str,
) -> String {
    let title = hyphenate_or(job_title, "All-Jobs");
    let loc = hyphenate_or(location, "All-Locations");
    format!("{iso_date}_{title}_{loc}.{}", format.extension())
}

fn hyphenate_or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        return fallback.to_string();
    }
    value.split_whitespace().collect::<Vec<_>>().join("-")
}

#[cfg(test)]
mod tests {
    use super::export_file_name;
    use crate::ExportFormat;

    #[test]
    fn spaces_become_hyphens() {
        let name = export_file_name(
            "Software Engineer",
            "New York, NY",
            ExportFormat::Csv,
            "2026-08-08",
        );
        assert_eq!(name, "2026-08-08_Software-Engineer_New-York,-NY.csv");
    }

    #[test]
    fn empty_filters_use_placeholders() {
        let name = export_file_name("", "", ExportFormat::Word, "2026-08-08");
        assert_eq!(name, "2026-08-08_All-Jobs_All-Locations.docx");
    }
}
