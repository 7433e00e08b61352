//! Integration tests for the run orchestration.

use std::fs;
use std::path::PathBuf;

use mailsum_cli::runner::{RunOptions, expand_inputs, needs_diagnostics, run};

fn write_csv(dir: &std::path::Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write csv");
    path
}

#[test]
fn processes_a_folder_and_writes_the_export() {
    let input_dir = tempfile::tempdir().expect("tempdir");
    let output_dir = tempfile::tempdir().expect("tempdir");
    write_csv(
        input_dir.path(),
        "a.csv",
        "邮件号,收寄机构,签收方式,反馈情况,投递员\n\
         1300000031,长安揽投部,本人签收,,张三\n\
         1400000000,长安揽投部,本人签收,妥投,张三\n",
    );
    write_csv(
        input_dir.path(),
        "b.csv",
        "运单,收寄局,投递方式,反馈\n1300000016,康巴什蒙欣,本人,妥投\n",
    );

    let options = RunOptions {
        output_dir: Some(output_dir.path().to_path_buf()),
        export_file: Some("out.csv".to_string()),
        dry_run: false,
    };
    let result = run(&[input_dir.path().to_path_buf()], &options).expect("run");

    assert_eq!(result.inputs.len(), 2);
    assert_eq!(result.stats.total_rows, 3);
    assert_eq!(result.stats.cainiao_rows, 2);
    assert_eq!(result.stats.excluded_rows, 1);
    assert_eq!(result.stats.final_count, 1);
    assert_eq!(result.stats.outcomes.redelivery, 1);
    assert_eq!(result.stats.courier_stats[0].name, "张三");

    let export = result.export_path.expect("export written");
    let text = fs::read_to_string(&export).expect("read export");
    assert!(text.contains("1300000031"));
    // The excluded-institution row is in scope but must not be exported.
    assert!(!text.contains("1300000016"));
}

#[test]
fn dry_run_writes_nothing() {
    let input_dir = tempfile::tempdir().expect("tempdir");
    write_csv(input_dir.path(), "a.csv", "邮件号\n1300000016\n");
    let options = RunOptions {
        dry_run: true,
        ..RunOptions::default()
    };
    let result = run(&[input_dir.path().to_path_buf()], &options).expect("run");
    assert!(result.export_path.is_none());
    assert_eq!(result.stats.final_count, 1);
}

#[test]
fn unreadable_input_is_fatal() {
    let options = RunOptions {
        dry_run: true,
        ..RunOptions::default()
    };
    let missing = PathBuf::from("/nonexistent/report.csv");
    assert!(run(&[missing], &options).is_err());
}

#[test]
fn empty_folder_is_an_error() {
    let input_dir = tempfile::tempdir().expect("tempdir");
    assert!(expand_inputs(&[input_dir.path().to_path_buf()]).is_err());
}

#[test]
fn explicit_files_keep_their_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let b = write_csv(dir.path(), "b.csv", "邮件号\n");
    let a = write_csv(dir.path(), "a.csv", "邮件号\n");
    let files = expand_inputs(&[b.clone(), a.clone()]).expect("expand");
    assert_eq!(files, vec![b, a]);
}

#[test]
fn zero_matches_is_reported_not_failed() {
    let input_dir = tempfile::tempdir().expect("tempdir");
    write_csv(
        input_dir.path(),
        "a.csv",
        "邮件号,收寄机构\n9999999999,长安揽投部\n",
    );
    let options = RunOptions {
        dry_run: true,
        ..RunOptions::default()
    };
    let result = run(&[input_dir.path().to_path_buf()], &options).expect("run");
    assert_eq!(result.stats.final_count, 0);
    assert!(needs_diagnostics(&result.stats));
}
