//! `tabsplit demo`: split the built-in sample dinner.

use clap::Args;
use tabsplit_core::sample::sample_assigned_receipt;

use super::{render, OutputArgs};
use crate::config::CliConfig;
use crate::error::CliResult;

#[derive(Args, Debug, Clone, Default)]
pub struct DemoArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: &DemoArgs, config: &CliConfig) -> CliResult<String> {
    let store = sample_assigned_receipt();
    let tip = args.output.resolve_tip(config.tip_policy());
    render(&store, &tip, &args.output, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_without_tip() {
        let out = run(&DemoArgs::default(), &CliConfig::default()).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[4], "Emma: $8.09");
        assert_eq!(lines[5], "Subtotal: $112.94");
        assert_eq!(lines[7], "Total: $112.94");
    }

    #[test]
    fn test_demo_detail_mentions_unclaimed_espresso() {
        let args = DemoArgs {
            output: OutputArgs {
                detail: true,
                tip: Some("18".to_string()),
                ..OutputArgs::default()
            },
        };
        let out = run(&args, &CliConfig::default()).unwrap();

        assert!(out.contains("  Tiramisu (Shared Dessert) (1/2, with Derik): $4.50"));
        assert!(out.ends_with("Unassigned (not split): $3.00"));
    }
}
