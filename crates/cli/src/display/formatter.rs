use isolgen_core::{
    FileStatus, RunReport, TypeKind, driver::FileOutcome, registry::TypeRegistry,
    utils::display_path,
};

/// `+new: <source>` or `edit: <source>` for files whose interface was written.
pub fn progress_line(outcome: &FileOutcome) -> Option<String> {
    let prefix = match outcome.status {
        FileStatus::Created => "+new:",
        FileStatus::Updated => "edit:",
        FileStatus::Unchanged | FileStatus::Skipped | FileStatus::Cached => return None,
    };
    Some(format!("{prefix} {}", display_path(&outcome.source)))
}

pub fn summary_line(report: &RunReport) -> String {
    format!(
        "✅ {} created, {} updated, {} unchanged, {} without interface, {} cached",
        report.count(FileStatus::Created),
        report.count(FileStatus::Updated),
        report.count(FileStatus::Unchanged),
        report.count(FileStatus::Skipped),
        report.count(FileStatus::Cached),
    )
}

pub fn print_report(report: &RunReport, quiet: bool) {
    if quiet {
        return;
    }
    for line in report.outcomes.iter().filter_map(progress_line) {
        println!("{line}");
    }
    println!("{}", summary_line(report));
}

/// `// <kind> <name> from <path>` followed by the definition, in registration order.
pub fn type_lines(registry: &TypeRegistry) -> Vec<String> {
    registry
        .iter()
        .map(|record| {
            let kind = match record.kind {
                TypeKind::Struct => "struct",
                TypeKind::Enum => "enum",
            };
            format!(
                "// {kind} {} from {}\n{}",
                record.name,
                display_path(&record.path),
                record.source
            )
        })
        .collect()
}

pub fn print_types(registry: &TypeRegistry) {
    let lines = type_lines(registry);
    if lines.is_empty() {
        eprintln!("No structs or enums registered");
        return;
    }
    println!("{}", lines.join("\n\n"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use isolgen_core::TypeRecord;
    use std::path::PathBuf;

    fn outcome(source: &str, status: FileStatus) -> FileOutcome {
        FileOutcome {
            source: PathBuf::from(source),
            status,
            interface: None,
        }
    }

    #[test]
    fn test_progress_lines() {
        assert_eq!(
            progress_line(&outcome("contracts/Token.sol", FileStatus::Created)).as_deref(),
            Some("+new: contracts/Token.sol")
        );
        assert_eq!(
            progress_line(&outcome("contracts/Token.sol", FileStatus::Updated)).as_deref(),
            Some("edit: contracts/Token.sol")
        );
        assert!(progress_line(&outcome("contracts/Token.sol", FileStatus::Cached)).is_none());
    }

    #[test]
    fn test_summary_counts() {
        let report = RunReport {
            outcomes: vec![
                outcome("contracts/A.sol", FileStatus::Created),
                outcome("contracts/B.sol", FileStatus::Cached),
                outcome("contracts/C.sol", FileStatus::Cached),
            ],
        };
        assert_eq!(
            summary_line(&report),
            "✅ 1 created, 0 updated, 0 unchanged, 0 without interface, 2 cached"
        );
    }

    #[test]
    fn test_type_lines_keep_registration_order() {
        let mut registry = TypeRegistry::new();
        registry.register(TypeRecord {
            name: "Side".to_string(),
            kind: TypeKind::Enum,
            path: PathBuf::from("contracts/Types.sol"),
            source: "enum Side { Bid, Ask }".to_string(),
        });
        registry.register(TypeRecord {
            name: "Asset".to_string(),
            kind: TypeKind::Struct,
            path: PathBuf::from("contracts/Types.sol"),
            source: "struct Asset { address token; }".to_string(),
        });

        assert_eq!(
            type_lines(&registry),
            vec![
                "// enum Side from contracts/Types.sol\nenum Side { Bid, Ask }",
                "// struct Asset from contracts/Types.sol\nstruct Asset { address token; }",
            ]
        );
    }
}
