//! Status code resolution.
//!
//! Given a concrete status code, [`resolve`] returns the single rule whose
//! matching range is the most specific. Insertion order never influences
//! the outcome.

use tracing::{debug, trace};

use crate::error::ResolveError;
use crate::range::{StatusCode, StatusRange};
use crate::rule::Rule;
use crate::rule_set::RuleSet;

/// Picks the rule that should decode a response with status `code`.
///
/// When several rules match, each is represented by its narrowest matching
/// range (see [`Rule::most_specific_range_for`]) and the winner must be
/// strictly more specific than every other candidate.
///
/// # Errors
///
/// - [`ResolveError::NotConfigured`] if no rule matches.
/// - [`ResolveError::Ambiguous`] if no candidate strictly wins. A set built
///   through [`RuleSet`]'s checked mutations never produces this.
pub fn resolve<T>(rules: &RuleSet<T>, code: StatusCode) -> Result<&Rule<T>, ResolveError> {
    let candidates: Vec<(&Rule<T>, &StatusRange)> = rules
        .iter()
        .filter_map(|rule| rule.most_specific_range_for(code).map(|range| (rule, range)))
        .collect();

    let winner = match candidates.as_slice() {
        [] => {
            debug!(status = code, "no response rule matches status");
            return Err(ResolveError::NotConfigured { status: code });
        }
        [(rule, _)] => *rule,
        _ => pick_most_specific(&candidates, code)?,
    };

    debug!(status = code, rule = %winner, "resolved response rule");
    Ok(winner)
}

fn pick_most_specific<'a, T>(
    candidates: &[(&'a Rule<T>, &StatusRange)],
    code: StatusCode,
) -> Result<&'a Rule<T>, ResolveError> {
    candidates
        .iter()
        .find(|(rule, range)| {
            candidates
                .iter()
                .filter(|(other, _)| !std::ptr::eq(*rule, *other))
                .all(|(other, other_range)| {
                    let wins = range.more_specific_than(other_range);
                    trace!(
                        status = code,
                        candidate = %rule.target(),
                        %range,
                        other = %other.target(),
                        %other_range,
                        wins,
                        "comparing response rules"
                    );
                    wins
                })
        })
        .map(|(rule, _)| *rule)
        .ok_or_else(|| ResolveError::Ambiguous {
            status: code,
            candidates: candidates
                .iter()
                .map(|(rule, _)| rule.target().clone())
                .collect(),
        })
}
