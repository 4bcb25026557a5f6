use carepick_api::Candidate;
use ratatui::widgets::{Cell, Row};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Build one `label | id` row per candidate, truncating labels to `label_width`.
#[must_use]
pub fn build_candidate_rows(candidates: &[Candidate], label_width: Option<u16>) -> Vec<Row<'_>> {
	candidates
		.iter()
		.map(|candidate| {
			let label = match label_width {
				Some(width) => truncate_to_width(&candidate.label, usize::from(width)),
				None => candidate.label.clone(),
			};
			Row::new([Cell::from(label), Cell::from(candidate.id.as_str())])
		})
		.collect()
}

/// Cut `text` to at most `width` columns, ending in an ellipsis when cut.
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> String {
	if text.width() <= width {
		return text.to_string();
	}
	if width == 0 {
		return String::new();
	}

	let budget = width - ELLIPSIS.width().unwrap_or(1);
	let mut used = 0;
	let mut out = String::new();
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if used + ch_width > budget {
			break;
		}
		used += ch_width;
		out.push(ch);
	}
	out.push(ELLIPSIS);
	out
}
