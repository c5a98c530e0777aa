use chrono::Datelike;
use copyrighter::{BatchOptions, check_all};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Helper to drop a source file into the temp tree
fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

fn plain_header(years: &str) -> String {
    format!(
        "# Copyright (c) {} Megh Computing, Inc.\n\
         # All rights reserved.\n\
         \n\
         import os\n",
        years
    )
}

fn apache_header(years: &str) -> String {
    format!(
        "// Copyright {} Megh Computing, Inc.\n\
         //\n\
         // Licensed under the Apache License, Version 2.0 (the \"License\");\n\
         // you may not use this file except in compliance with the License.\n\
         \n\
         int main() {{ return 0; }}\n",
        years
    )
}

#[test]
fn test_stale_range_without_fix_leaves_file_untouched() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let content = plain_header("2019-2021");
    let path = write_file(&dir, "stale.py", &content);

    let summary = check_all(
        None,
        std::slice::from_ref(&path),
        BatchOptions::default(),
    )
    .expect("Batch should run");

    assert_eq!(summary.total, 1);
    assert!(!summary.all_passed(), "Stale year must fail the check");
    assert_eq!(
        fs::read_to_string(&path).expect("Failed to read back"),
        content,
        "Without --fix the file must not change"
    );
}

#[test]
fn test_stale_range_with_fix_rewrites_only_the_year_field() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(&dir, "stale.py", &plain_header("2019-2021"));

    let options = BatchOptions {
        autofix: true,
        verbose: false,
    };
    let summary = check_all(None, std::slice::from_ref(&path), options).expect("Batch should run");

    assert!(
        !summary.all_passed(),
        "A fixed file still counts as failed so the caller re-runs"
    );
    let expected = plain_header(&format!("2019-{}", current_year()));
    assert_eq!(
        fs::read_to_string(&path).expect("Failed to read back"),
        expected,
        "Only the year field may change"
    );

    // A second run over the fixed file passes clean.
    let summary = check_all(
        None,
        std::slice::from_ref(&path),
        BatchOptions::default(),
    )
    .expect("Batch should run");
    assert!(summary.all_passed(), "Fixed file should now pass");
}

#[test]
fn test_apache_header_with_current_year_passes() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(&dir, "main.cpp", &apache_header(&current_year().to_string()));

    let summary = check_all(
        None,
        std::slice::from_ref(&path),
        BatchOptions::default(),
    )
    .expect("Batch should run");

    assert!(summary.all_passed(), "Failed paths: {:?}", summary.failed);
}

#[test]
fn test_shebang_before_notice_still_parses() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let content = format!(
        "#!/usr/bin/env python3\n\n{}",
        plain_header(&current_year().to_string())
    );
    let path = write_file(&dir, "tool.py", &content);

    let summary = check_all(
        None,
        std::slice::from_ref(&path),
        BatchOptions::default(),
    )
    .expect("Batch should run");

    assert!(summary.all_passed(), "Failed paths: {:?}", summary.failed);
}

#[test]
fn test_blank_extension_file_aborts_with_nothing_checked() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let extensions = write_file(&dir, "extensions.txt", "\n   \n\n");
    let stale = write_file(&dir, "stale.py", &plain_header("2019-2021"));

    let options = BatchOptions {
        autofix: true,
        verbose: false,
    };
    let result = check_all(Some(&extensions), std::slice::from_ref(&stale), options);

    assert!(result.is_err(), "Blank extension list must abort the batch");
    assert_eq!(
        fs::read_to_string(&stale).expect("Failed to read back"),
        plain_header("2019-2021"),
        "No file may be checked or fixed after an extension-load failure"
    );
}

#[test]
fn test_mixed_batch_counts_and_failures() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let current = current_year().to_string();

    let passing = write_file(&dir, "good.py", &plain_header(&current));
    let apache = write_file(&dir, "good.cpp", &apache_header(&current));
    let stale = write_file(&dir, "stale.py", &plain_header("2020"));
    let headerless = write_file(&dir, "naked.py", "import sys\n");
    let skipped = write_file(&dir, "README.md", "# docs\n");
    let missing = dir.path().join("gone.py");

    let files = vec![
        passing,
        apache,
        stale.clone(),
        headerless.clone(),
        skipped,
        missing.clone(),
    ];
    let summary = check_all(None, &files, BatchOptions::default()).expect("Batch should run");

    assert_eq!(summary.total, 6);
    assert_eq!(
        summary.failed.len(),
        3,
        "Expected stale, headerless, and missing to fail, got: {:?}",
        summary.failed
    );
    let failed_names: Vec<_> = summary
        .failed
        .iter()
        .map(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .collect();
    assert_eq!(
        failed_names,
        vec![
            Some("stale.py".to_string()),
            Some("naked.py".to_string()),
            Some("gone.py".to_string()),
        ]
    );
}

#[test]
fn test_custom_extension_list_narrows_the_batch() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let extensions = write_file(&dir, "extensions.txt", ".cpp\n");
    let stale_py = write_file(&dir, "stale.py", &plain_header("2020"));
    let stale_cpp = write_file(&dir, "stale.cpp", &apache_header("2020"));

    let files = vec![stale_py.clone(), stale_cpp];
    let summary =
        check_all(Some(&extensions), &files, BatchOptions::default()).expect("Batch should run");

    assert_eq!(summary.total, 2);
    assert_eq!(
        summary.failed.len(),
        1,
        "Only the .cpp file is on the list, got: {:?}",
        summary.failed
    );
    assert_eq!(
        fs::read_to_string(&stale_py).expect("Failed to read back"),
        plain_header("2020"),
        "Off-list files are never touched"
    );
}

#[test]
fn test_fix_batch_repairs_every_checked_style() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let plain = write_file(&dir, "a.py", &plain_header("2018"));
    let ranged = write_file(&dir, "b.py", &plain_header("2019-2024"));
    let apache = write_file(&dir, "c.cpp", &apache_header("2020-2023"));

    let options = BatchOptions {
        autofix: true,
        verbose: true,
    };
    let files = vec![plain.clone(), ranged.clone(), apache.clone()];
    let summary = check_all(None, &files, options).expect("Batch should run");
    assert_eq!(summary.failed.len(), 3);

    let current = current_year();
    assert_eq!(
        fs::read_to_string(&plain).expect("Failed to read back"),
        plain_header(&format!("2018-{}", current))
    );
    assert_eq!(
        fs::read_to_string(&ranged).expect("Failed to read back"),
        plain_header(&format!("2019-{}", current))
    );
    assert_eq!(
        fs::read_to_string(&apache).expect("Failed to read back"),
        apache_header(&format!("2020-{}", current))
    );

    // Everything passes on re-check.
    let summary = check_all(None, &files, BatchOptions::default()).expect("Batch should run");
    assert!(summary.all_passed(), "Failed paths: {:?}", summary.failed);
}
