#![cfg(feature = "excel")]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use resource_planning_report::ingestion::IngestionOptions;
use resource_planning_report::report::{generate, ReportPlan};
use resource_planning_report::{IngestionError, ReportError};
use rust_xlsxwriter::Workbook;

fn tmp_file(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("resource-planning-report-{name}-{nanos}.xlsx"))
}

fn write_resource_list(path: &PathBuf) {
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    let header = ["Name", "Technology", "Company", "BU", "Project Tied To", "Location"];
    for (c, h) in header.iter().enumerate() {
        ws.write_string(0, c as u16, *h).unwrap();
    }
    let rows = [
        ["Ravi", "Salesforce", "Initech", "Sales", "Phoenix", "Pune"],
        ["Ana", "MuleSoft", "Acme", "Ops", "Atlas", "Austin"],
        ["Li", "Salesforce", "Initech", "Sales", "", "Pune"],
        ["Ravi", "Tableau", "Initech", "Sales", "Atlas", ""],
        ["Omar", "MuleSoft", "Globex", "Ops", "Phoenix", "Austin"],
        ["Zoe", "Salesforce", "Acme", "Sales", "Zeus", "Pune"],
    ];
    for (r, row) in rows.iter().enumerate() {
        for (c, v) in row.iter().enumerate() {
            if !v.is_empty() {
                ws.write_string(r as u32 + 1, c as u16, *v).unwrap();
            }
        }
    }
    wb.save(path).unwrap();
}

fn write_planning(path: &PathBuf, include_cost: bool) {
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    let mut header = vec!["Resource Name", "Project", "Vendor", "Role", "Functional team", "Location", "Total Cost"];
    if include_cost {
        header.push("Cost");
    }
    for (c, h) in header.iter().enumerate() {
        ws.write_string(0, c as u16, *h).unwrap();
    }
    let rows = [
        ("Ravi", "Phoenix", "Initech", "Dev", "CRM", "Pune", 150.0, 100.0),
        ("Ana", "Atlas", "Acme", "QA", "CRM", "Austin", 250.0, 200.0),
        ("Li", "Atlas", "Initech", "Dev", "Data", "Pune", 350.0, 300.0),
    ];
    for (r, (name, project, vendor, role, team, loc, total, cost)) in rows.iter().enumerate() {
        let r = r as u32 + 1;
        ws.write_string(r, 0, *name).unwrap();
        ws.write_string(r, 1, *project).unwrap();
        ws.write_string(r, 2, *vendor).unwrap();
        if *role != "QA" {
            ws.write_string(r, 3, *role).unwrap();
        }
        ws.write_string(r, 4, *team).unwrap();
        ws.write_string(r, 5, *loc).unwrap();
        ws.write_number(r, 6, *total).unwrap();
        if include_cost {
            ws.write_number(r, 7, *cost).unwrap();
        }
    }
    wb.save(path).unwrap();
}

fn plan_for(list: &PathBuf, planning: &PathBuf) -> ReportPlan {
    let mut plan = ReportPlan::resource_planning();
    plan.files[0].path = list.clone();
    plan.files[1].path = planning.clone();
    plan
}

fn run(plan: &ReportPlan) -> (String, Result<(), ReportError>) {
    let mut out = Vec::new();
    let result = generate(plan, &IngestionOptions::default(), &mut out);
    (String::from_utf8(out).unwrap(), result)
}

#[test]
fn full_report_over_both_workbooks() {
    let list = tmp_file("list");
    let planning = tmp_file("planning");
    write_resource_list(&list);
    write_planning(&planning, true);

    let (text, result) = run(&plan_for(&list, &planning));
    result.unwrap();

    let rule = "=".repeat(100);
    assert!(text.starts_with(&format!("{rule}\nDETAILED ANALYSIS OF BOTH EXCEL FILES\n{rule}\n\n{rule}\nFILE 1: ")));
    assert!(text.contains(&format!("\n\n\n{rule}\nFILE 2: ")));

    // File 1
    assert!(text.contains("Shape: 6 rows x 6 columns"));
    assert!(text.contains("Column Names (6 total):\n  1. Name\n  2. Technology\n"));
    assert!(text.contains("\nRow 2:\n  Name: Li\n  Technology: Salesforce\n  Company: Initech\n  BU: Sales\n  Project Tied To: nan\n  Location: Pune\n"));
    assert!(!text.contains("Row 5:"));
    assert!(text.contains("Unique Names/Resources (5): ['Ravi', 'Ana', 'Li', 'Omar', 'Zoe']"));
    assert!(text.contains("Unique Companies (3): ['Initech', 'Acme', 'Globex']"));
    assert!(text.contains("Unique Technologies (3): ['Salesforce', 'MuleSoft', 'Tableau']"));
    assert!(text.contains("Unique Projects (3):\n  - Atlas\n  - Phoenix\n  - Zeus\n"));
    assert!(text.contains("Unique BUs (2): ['Sales', 'Ops']"));
    assert!(text.contains("Unique Locations (2): ['Pune', 'Austin']"));

    // File 2
    assert!(text.contains("Shape: 3 rows x 8 columns"));
    assert!(text.contains("\nRow 1:\n  Project: Atlas\n  Functional team: CRM\n  Role: [NULL]\n"));
    assert!(text.contains("  Cost: 200\n"));
    assert!(text.contains("Unique Roles (1):\n  - Dev\n"));
    assert!(text.contains("Unique Locations (2):\n  - Austin\n  - Pune\n"));
    assert!(text.ends_with(
        "\n\nCost Summary for File 2:\n\
         Total Cost: $750.00\n\
         Average Cost per Resource: $200.00\n\
         Cost Range: $100.00 - $300.00\n"
    ));

    let _ = std::fs::remove_file(&list);
    let _ = std::fs::remove_file(&planning);
}

#[test]
fn missing_cost_column_stops_the_run() {
    let list = tmp_file("list-nocost");
    let planning = tmp_file("planning-nocost");
    write_resource_list(&list);
    write_planning(&planning, false);

    let (text, result) = run(&plan_for(&list, &planning));
    match result {
        Err(ReportError::MissingColumn { column, .. }) => assert_eq!(column, "Cost"),
        other => panic!("expected missing Cost column, got {other:?}"),
    }
    assert!(text.contains("Unique Locations (2):\n  - Austin\n  - Pune\n"));
    assert!(!text.contains("Cost Summary"));

    let _ = std::fs::remove_file(&list);
    let _ = std::fs::remove_file(&planning);
}

#[test]
fn missing_input_file_stops_before_second_file() {
    let list = tmp_file("list-missing");
    let planning = tmp_file("planning-unused");

    let (text, result) = run(&plan_for(&list, &planning));
    match result {
        Err(ReportError::Load { source: IngestionError::Io(_), path }) => {
            assert_eq!(path, list.display().to_string());
        }
        other => panic!("expected load failure, got {other:?}"),
    }
    assert!(text.contains("FILE 1: "));
    assert!(!text.contains("FILE 2: "));
}

#[test]
fn vendor_placeholders_are_null_and_padding_is_kept() {
    let list = tmp_file("list-vendors");
    let planning = tmp_file("planning-vendors");
    write_resource_list(&list);

    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    let header = ["Resource Name", "Project", "Vendor", "Role", "Functional team", "Location", "Total Cost", "Cost"];
    for (c, h) in header.iter().enumerate() {
        ws.write_string(0, c as u16, *h).unwrap();
    }
    for (r, vendor) in ["N/A", "Acme", "Acme ", " "].iter().enumerate() {
        let r = r as u32 + 1;
        for (c, v) in ["Ravi", "Atlas", *vendor, "Dev", "CRM", "Pune"].iter().enumerate() {
            ws.write_string(r, c as u16, *v).unwrap();
        }
        ws.write_number(r, 6, 10.0).unwrap();
        ws.write_number(r, 7, 5.0).unwrap();
    }
    wb.save(&planning).unwrap();

    let (text, result) = run(&plan_for(&list, &planning));
    result.unwrap();

    assert!(text.contains("\nRow 0:\n  Project: Atlas\n  Functional team: CRM\n  Role: Dev\n  Vendor: [NULL]\n"));
    assert!(text.contains("\nRow 2:\n  Project: Atlas\n  Functional team: CRM\n  Role: Dev\n  Vendor: Acme \n"));
    assert!(text.contains("Unique Vendors (3):\n  -  \n  - Acme\n  - Acme \n"));
    assert!(!text.contains("- N/A"));

    let _ = std::fs::remove_file(&list);
    let _ = std::fs::remove_file(&planning);
}
