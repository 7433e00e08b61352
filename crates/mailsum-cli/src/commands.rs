use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use mailsum_cli::runner::{RunOptions, RunResult, run};
use mailsum_map::field_keywords;
use mailsum_model::MailField;
use mailsum_transform::{
    EXCLUDED_INSTITUTIONS,
    outcome::{
        ADDRESS_KEYWORDS, EXCEPTION_KEYWORDS, REDELIVERY_KEYWORDS, RETURNED_KEYWORDS,
        STATION_KEYWORDS,
    },
};

use crate::cli::ProcessArgs;
use crate::summary::apply_table_style;

pub fn run_process(args: &ProcessArgs) -> Result<RunResult> {
    let span = info_span!("process");
    let _guard = span.enter();
    let options = RunOptions {
        output_dir: args.output_dir.clone(),
        export_file: args.export_file.clone(),
        dry_run: args.dry_run,
    };
    run(&args.inputs, &options)
}

/// Prints the fixed column, filter, and classification policy.
pub fn run_keywords() -> Result<()> {
    let mut columns = Table::new();
    columns.set_header(vec!["Field", "Header keywords"]);
    apply_table_style(&mut columns);
    for field in MailField::ALL {
        columns.add_row(vec![
            field.label().to_string(),
            field_keywords(field).join("、"),
        ]);
    }
    println!("Column matching:");
    println!("{columns}");

    let mut rules = Table::new();
    rules.set_header(vec!["Rule", "Keywords"]);
    apply_table_style(&mut rules);
    rules.add_row(vec!["排除机构".to_string(), EXCLUDED_INSTITUTIONS.join("、")]);
    rules.add_row(vec!["退回".to_string(), RETURNED_KEYWORDS.join("、")]);
    rules.add_row(vec!["异常".to_string(), EXCEPTION_KEYWORDS.join("、")]);
    rules.add_row(vec![
        "再投".to_string(),
        format!("{}、(空反馈)", REDELIVERY_KEYWORDS.join("、")),
    ]);
    rules.add_row(vec!["驿站投递".to_string(), STATION_KEYWORDS.join("、")]);
    rules.add_row(vec![
        "按址投递".to_string(),
        format!("{}、(默认)", ADDRESS_KEYWORDS.join("、")),
    ]);
    println!("Filter and outcome rules (checked top to bottom):");
    println!("{rules}");
    Ok(())
}
