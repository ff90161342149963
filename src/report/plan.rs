//! Per-file report layouts.
//!
//! A [`ReportPlan`] is the whole configuration of a run: which files to load and, for each,
//! which columns to preview, list and aggregate. [`ReportPlan::resource_planning`] is the
//! built-in plan for the two resource-planning workbooks.

use std::path::PathBuf;

use crate::processing::UniqueOrder;

/// What to do when a column the plan names is not in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingColumnPolicy {
    /// Leave the column out of the output and keep going.
    Skip,
    /// Fail the report with [`crate::ReportError::MissingColumn`].
    Require,
}

/// How a unique-value listing is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    /// One line: `Unique Vendors (2): ['Acme', 'Globex']`.
    Inline,
    /// A heading line followed by one `  - value` line per value.
    Bulleted,
}

/// One `Unique <label> (<n>)` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueSection {
    pub column: String,
    pub label: String,
    pub order: UniqueOrder,
    pub style: ListStyle,
}

impl UniqueSection {
    /// First-seen order, rendered inline.
    pub fn inline(column: &str, label: &str) -> Self {
        Self {
            column: column.to_string(),
            label: label.to_string(),
            order: UniqueOrder::FirstSeen,
            style: ListStyle::Inline,
        }
    }

    /// Sorted, one value per line.
    pub fn bulleted(column: &str, label: &str) -> Self {
        Self {
            column: column.to_string(),
            label: label.to_string(),
            order: UniqueOrder::Sorted,
            style: ListStyle::Bulleted,
        }
    }
}

/// Currency aggregates: sum of `total_column`, mean/min/max of `cost_column`.
///
/// Both columns are always required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostSummary {
    pub title: String,
    pub total_column: String,
    pub cost_column: String,
}

/// Layout of the report for one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Banner line, e.g. `FILE 1: <file name>`.
    pub heading: String,
    pub path: PathBuf,
    /// Heading above the sample rows.
    pub preview_title: String,
    /// Columns shown for each sample row, in order. Absent columns are skipped.
    pub preview_columns: Vec<String>,
    /// Text printed for a null cell in the preview.
    pub null_label: String,
    /// Also print a `Key Column Names:` listing of the preview columns that exist.
    pub list_key_columns: bool,
    pub unique_sections: Vec<UniqueSection>,
    /// Applies to `unique_sections`.
    pub missing_columns: MissingColumnPolicy,
    pub cost_summary: Option<CostSummary>,
}

/// Everything a report run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPlan {
    pub title: String,
    pub files: Vec<FileReport>,
}

pub const RESOURCE_LIST_FILE: &str = "All SFDC Resource List 2.xlsx";
pub const RESOURCE_PLANNING_FILE: &str = "External Resource Planning_2026_Updated.xlsx";

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl ReportPlan {
    /// The built-in plan over the two resource-planning workbooks in the working directory.
    pub fn resource_planning() -> Self {
        Self {
            title: "DETAILED ANALYSIS OF BOTH EXCEL FILES".to_string(),
            files: vec![Self::resource_list(), Self::external_planning()],
        }
    }

    fn resource_list() -> FileReport {
        FileReport {
            heading: format!("FILE 1: {RESOURCE_LIST_FILE}"),
            path: PathBuf::from(RESOURCE_LIST_FILE),
            preview_title: "Data Preview (First 5 rows):".to_string(),
            preview_columns: columns(&["Name", "Technology", "Company", "BU", "Project Tied To", "Location"]),
            null_label: "nan".to_string(),
            list_key_columns: false,
            unique_sections: vec![
                UniqueSection::inline("Name", "Names/Resources"),
                UniqueSection::inline("Company", "Companies"),
                UniqueSection::inline("Technology", "Technologies"),
                UniqueSection::bulleted("Project Tied To", "Projects"),
                UniqueSection::inline("BU", "BUs"),
                UniqueSection::inline("Location", "Locations"),
            ],
            missing_columns: MissingColumnPolicy::Skip,
            cost_summary: None,
        }
    }

    fn external_planning() -> FileReport {
        FileReport {
            heading: format!("FILE 2: {RESOURCE_PLANNING_FILE}"),
            path: PathBuf::from(RESOURCE_PLANNING_FILE),
            preview_title: "Data Preview (First 5 rows - Key columns):".to_string(),
            preview_columns: columns(&[
                "Name",
                "Project",
                "Functional team",
                "Role",
                "Vendor",
                "Resource Name",
                "Cost",
                "Duration",
                "Location",
                "Monthly Rate",
            ]),
            null_label: "[NULL]".to_string(),
            list_key_columns: true,
            unique_sections: vec![
                UniqueSection::bulleted("Resource Name", "Resource Names"),
                UniqueSection::bulleted("Project", "Projects"),
                UniqueSection::bulleted("Vendor", "Vendors"),
                UniqueSection::bulleted("Role", "Roles"),
                UniqueSection::bulleted("Functional team", "Functional Teams"),
                UniqueSection::bulleted("Location", "Locations"),
            ],
            missing_columns: MissingColumnPolicy::Require,
            cost_summary: Some(CostSummary {
                title: "Cost Summary for File 2:".to_string(),
                total_column: "Total Cost".to_string(),
                cost_column: "Cost".to_string(),
            }),
        }
    }
}

impl Default for ReportPlan {
    fn default() -> Self {
        Self::resource_planning()
    }
}
