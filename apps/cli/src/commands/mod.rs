//! # Commands
//!
//! Each subcommand builds a [`ReceiptStore`], resolves the tip and renders
//! the breakdown. Commands return their output instead of printing it.
//!
//! ## Tip Resolution
//! ```text
//! config [tip] ──► bill "tip" ──► --tip-mode ──► --tip ──► --tip-included
//!   (lowest)                                                  (highest)
//! ```

pub mod demo;
pub mod split;

use clap::Args;
use tabsplit_core::{render_detail_text, render_share_text, ReceiptStore, TipMode, TipPolicy};
use tracing::info;

use crate::config::CliConfig;
use crate::error::CliResult;

/// Flags shared by every command that prints a split.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct OutputArgs {
    /// Tip value; a percentage or an amount depending on --tip-mode.
    /// Text that is not a number counts as 0.
    #[arg(long, value_name = "VALUE")]
    pub tip: Option<String>,

    /// How --tip is interpreted: percentage or fixed.
    #[arg(long, value_name = "MODE")]
    pub tip_mode: Option<TipMode>,

    /// Prices already include gratuity; no tip is added.
    #[arg(long)]
    pub tip_included: bool,

    /// List each person's items under their total.
    #[arg(long)]
    pub detail: bool,

    /// Print the breakdown as JSON.
    #[arg(long)]
    pub json: bool,
}

impl OutputArgs {
    /// Layers the tip flags over `base`.
    pub fn resolve_tip(&self, base: TipPolicy) -> TipPolicy {
        let mut tip = base;
        if let Some(mode) = self.tip_mode {
            tip = tip.with_mode(mode);
        }
        if let Some(text) = &self.tip {
            tip.set_value(TipPolicy::parse_value(text));
        }
        if self.tip_included {
            tip = tip.with_included(true);
        }
        tip
    }
}

/// Computes and renders the split of `store`.
pub(crate) fn render(
    store: &ReceiptStore,
    tip: &TipPolicy,
    args: &OutputArgs,
    config: &CliConfig,
) -> CliResult<String> {
    let breakdown = store.compute(tip);
    info!(
        people = store.people().len(),
        items = store.items().len(),
        tip_mode = %tip.mode,
        tip_value = tip.value(),
        grand_total = breakdown.grand_total.value(),
        "split computed"
    );

    if args.json {
        return Ok(breakdown.to_json_pretty()?);
    }

    let currency = config.currency_format();
    if args.detail || config.output.detail {
        Ok(render_detail_text(&breakdown, &currency))
    } else {
        Ok(render_share_text(&breakdown, &currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_tip_no_flags_keeps_base() {
        let base = TipPolicy::fixed(6.0);
        assert_eq!(OutputArgs::default().resolve_tip(base), base);
    }

    #[test]
    fn test_resolve_tip_flags_override() {
        let args = OutputArgs {
            tip: Some("20".to_string()),
            tip_mode: Some(TipMode::Percentage),
            ..OutputArgs::default()
        };
        assert_eq!(args.resolve_tip(TipPolicy::fixed(6.0)), TipPolicy::percentage(20.0));
    }

    #[test]
    fn test_resolve_tip_mode_switch_keeps_value() {
        let args = OutputArgs {
            tip_mode: Some(TipMode::Fixed),
            ..OutputArgs::default()
        };
        assert_eq!(args.resolve_tip(TipPolicy::percentage(15.0)), TipPolicy::fixed(15.0));
    }

    #[test]
    fn test_resolve_tip_garbage_is_zero() {
        let args = OutputArgs {
            tip: Some("generous".to_string()),
            ..OutputArgs::default()
        };
        assert_eq!(args.resolve_tip(TipPolicy::percentage(15.0)).value(), 0.0);
    }

    #[test]
    fn test_resolve_tip_included() {
        let args = OutputArgs {
            tip_included: true,
            ..OutputArgs::default()
        };
        let tip = args.resolve_tip(TipPolicy::percentage(15.0));
        assert!(tip.included_in_subtotal);
    }
}
