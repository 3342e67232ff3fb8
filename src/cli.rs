use anyhow::{bail, Context, Result};
use std::path::PathBuf;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportArgs {
    pub config: Option<PathBuf>,
    pub organization: Option<String>,
    pub output: Option<PathBuf>,
    pub cli: Option<String>,
    pub items: Vec<u64>,
    pub help: bool,
}

/// Parse `azure-export` arguments.
///
/// Supported forms:
///   azure-export
///   azure-export 101 102 -o backlog.csv
///   azure-export --organization https://dev.azure.com/contoso 101
///   azure-export --config ./export.toml --cli /usr/local/bin/az
pub fn parse_export_args(args: &[String]) -> Result<ExportArgs> {
    let mut parsed = ExportArgs::default();
    let mut i = 0;

    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-h" | "--help" => parsed.help = true,
            "-c" | "--config" => parsed.config = Some(PathBuf::from(flag_value(args, &mut i)?)),
            "--organization" | "--org" => parsed.organization = Some(flag_value(args, &mut i)?),
            "-o" | "--output" => parsed.output = Some(PathBuf::from(flag_value(args, &mut i)?)),
            "--cli" => parsed.cli = Some(flag_value(args, &mut i)?),
            _ if flag.starts_with('-') => bail!("Unknown option {flag}"),
            _ => {
                let id = flag
                    .parse::<u64>()
                    .with_context(|| format!("Invalid work item id `{flag}`"))?;
                parsed.items.push(id);
            }
        }
        i += 1;
    }

    Ok(parsed)
}

fn flag_value(args: &[String], i: &mut usize) -> Result<String> {
    let flag = &args[*i];
    *i += 1;
    match args.get(*i) {
        Some(value) => Ok(value.clone()),
        None => bail!("Missing value for {flag}"),
    }
}

pub fn print_help() {
    println!("azure-export: export Azure DevOps work items to CSV\n");
    println!("USAGE:");
    println!("  azure-export [OPTIONS] [ID...]");
    println!();
    println!("OPTIONS:");
    println!("  -c, --config <path>        Config file (default ~/.azure-export/config.toml)");
    println!("      --organization <url>   Azure DevOps organization URL");
    println!("  -o, --output <path>        CSV file to write (default work_items.csv)");
    println!("      --cli <program>        Azure CLI executable (default az)");
    println!("  -h, --help                 Show this help");
    println!();
    println!("Ids given on the command line replace the `items` list from the config file.");
    println!();
    println!("EXAMPLES:");
    println!("  azure-export");
    println!("  azure-export 101 102 -o sprint.csv");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_no_args() {
        assert_eq!(parse_export_args(&[]).unwrap(), ExportArgs::default());
    }

    #[test]
    fn parse_ids_in_order() {
        let parsed = parse_export_args(&args(&["102", "101", "102"])).unwrap();
        assert_eq!(parsed.items, vec![102, 101, 102]);
    }

    #[test]
    fn parse_all_flags() {
        let parsed = parse_export_args(&args(&[
            "--config",
            "export.toml",
            "--organization",
            "https://dev.azure.com/contoso",
            "-o",
            "out.csv",
            "--cli",
            "/usr/bin/az",
            "5",
        ]))
        .unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("export.toml")));
        assert_eq!(
            parsed.organization.as_deref(),
            Some("https://dev.azure.com/contoso")
        );
        assert_eq!(parsed.output, Some(PathBuf::from("out.csv")));
        assert_eq!(parsed.cli.as_deref(), Some("/usr/bin/az"));
        assert_eq!(parsed.items, vec![5]);
        assert!(!parsed.help);
    }

    #[test]
    fn parse_help() {
        assert!(parse_export_args(&args(&["-h"])).unwrap().help);
        assert!(parse_export_args(&args(&["1", "--help"])).unwrap().help);
    }

    #[test]
    fn parse_missing_value_fails() {
        let result = parse_export_args(&args(&["101", "-o"]));
        assert!(result.unwrap_err().to_string().contains("Missing value"));
    }

    #[test]
    fn parse_invalid_id_fails() {
        let result = parse_export_args(&args(&["abc"]));
        assert!(result.unwrap_err().to_string().contains("Invalid work item id"));
    }

    #[test]
    fn parse_negative_id_is_unknown_option() {
        let result = parse_export_args(&args(&["-5"]));
        assert!(result.unwrap_err().to_string().contains("Unknown option"));
    }
}
