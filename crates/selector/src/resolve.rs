use carepick_api::Candidate;

/// Find the candidate whose id equals `selected_id`.
///
/// Only the given result set is consulted. When the selected record is not
/// part of the current (filtered) candidates this returns `None` even though
/// the record exists; hosts that need a label outside an active search must
/// keep it themselves, for example from
/// [`SearchProvider::fetch`](carepick_api::SearchProvider::fetch).
#[must_use]
pub fn resolve_display_value<'a>(
	selected_id: Option<&str>,
	candidates: &'a [Candidate],
) -> Option<&'a Candidate> {
	let selected_id = selected_id?;
	candidates
		.iter()
		.find(|candidate| candidate.id == selected_id)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn results() -> Vec<Candidate> {
		vec![Candidate::new("1", "Alice"), Candidate::new("2", "Bob")]
	}

	#[test]
	fn none_without_selection() {
		assert_eq!(resolve_display_value(None, &results()), None);
	}

	#[test]
	fn none_when_selection_is_filtered_out() {
		assert_eq!(resolve_display_value(Some("42"), &results()), None);
		assert_eq!(resolve_display_value(Some("1"), &[]), None);
	}

	#[test]
	fn finds_matching_candidate() {
		let results = results();
		let first = resolve_display_value(Some("2"), &results);
		let second = resolve_display_value(Some("2"), &results);
		assert_eq!(first, Some(&Candidate::new("2", "Bob")));
		assert_eq!(first, second);
	}
}
