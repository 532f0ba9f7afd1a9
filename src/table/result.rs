use crate::types::Outcome;

/// Overall outcome: `Failed` if anything failed, otherwise `Passed`.
///
/// `Skipped` and `Unknown` never fail the run.
pub fn to_result<I>(results: I) -> Outcome
where
    I: IntoIterator<Item = Outcome>,
{
    if results.into_iter().any(|r| r.is_failed()) { Outcome::Failed } else { Outcome::Passed }
}
