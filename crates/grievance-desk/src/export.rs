use grievance_core::dto::ComplaintSummaryDto;
use grievance_core::report::{render_csv, report_file_name};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Writes per-customer CSV reports into one directory.
#[derive(Debug, Clone)]
pub struct ReportExporter {
    dir: PathBuf,
}

impl ReportExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, customer_name: &str) -> PathBuf {
        self.dir.join(report_file_name(customer_name))
    }

    /// Creates the report directory if needed and overwrites the customer's
    /// report file.
    pub fn write(
        &self,
        customer_name: &str,
        complaints: &[ComplaintSummaryDto],
    ) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(customer_name);
        fs::write(&path, render_csv(complaints))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::ReportExporter;
    use grievance_core::domain::{ComplaintId, ComplaintStatus};
    use grievance_core::dto::ComplaintSummaryDto;
    use grievance_core::sentiment::Sentiment;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn write_creates_directory_and_overwrites() {
        let temp = TempDir::new().expect("tempdir");
        let exporter = ReportExporter::new(temp.path().join("nested").join("reports"));
        let row = ComplaintSummaryDto {
            id: ComplaintId(1),
            category: "Billing".to_string(),
            description: "Charged twice".to_string(),
            status: ComplaintStatus::Open,
            created_at: "2030-01-15 10:00:00".to_string(),
            sentiment: Sentiment::Neutral,
        };

        let path = exporter.write("Mary Ann", &[row.clone()]).expect("write");
        assert!(path.ends_with("mary_ann_report.csv"));

        let mut second = row;
        second.id = ComplaintId(2);
        exporter.write("Mary Ann", &[second]).expect("rewrite");
        let contents = fs::read_to_string(&path).expect("read");
        assert!(contents.contains("\r\n2,Billing,"));
        assert!(!contents.contains("\r\n1,Billing,"));
    }
}
