use crate::JobRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Word,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Word => "docx",
        }
    }
}

const CSV_HEADER: &str = "Job Title,Company,Location,Salary,Data Quality";

/// Renders the job list as CSV: a fixed header line plus one quoted row per
/// job. A missing salary renders as "Not specified".
pub fn csv_document(jobs: &[JobRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    let rows: Vec<String> = jobs
        .iter()
        .map(|job| {
            format!(
                "{},{},{},{},{}",
                quote(&job.title),
                quote(&job.company),
                quote(&job.location),
                quote(job.salary.as_deref().unwrap_or("Not specified")),
                quote(&job.data_quality.to_string()),
            )
        })
        .collect();
    out.push_str(&rows.join("\n"));
    out
}

fn quote(field: &str) -> String {
    // Embedded quotes are doubled per the usual CSV convention.
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Renders the job list as a styled HTML table. This stands in for a real
/// Word document; word processors open it fine.
pub fn word_document(jobs: &[JobRecord], date_label: &str) -> String {
    let mut html = String::from(
        "<html>\n<head>\n<style>\n\
         body { font-family: Arial, sans-serif; }\n\
         table { border-collapse: collapse; width: 100%; }\n\
         th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }\n\
         th { background-color: #f2f2f2; }\n\
         </style>\n</head>\n<body>\n\
         <h1>Scraped Job Listings</h1>\n",
    );
    html.push_str(&format!("<p>Date: {date_label}</p>\n"));
    html.push_str(
        "<table>\n<thead>\n<tr><th>Job Title</th><th>Company</th>\
         <th>Location</th><th>Salary</th></tr>\n</thead>\n<tbody>\n",
    );
    for job in jobs {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&job.title),
            escape(&job.company),
            escape(&job.location),
            escape(job.salary.as_deref().unwrap_or("Not specified")),
        ));
    }
    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
