use anyhow::Result;
use carepick_tui::PickOutcome;

/// `id<TAB>label` for an accepted pick; `None` when there is nothing to print.
pub(crate) fn format_plain(outcome: &PickOutcome) -> Option<String> {
	if !outcome.accepted {
		return None;
	}
	outcome
		.selection
		.as_ref()
		.map(|candidate| format!("{}\t{}", candidate.id, candidate.label))
}

pub(crate) fn format_json(outcome: &PickOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

pub(crate) fn print_plain(outcome: &PickOutcome) {
	if let Some(line) = format_plain(outcome) {
		println!("{line}");
	}
}

pub(crate) fn print_json(outcome: &PickOutcome) -> Result<()> {
	println!("{}", format_json(outcome)?);
	Ok(())
}
