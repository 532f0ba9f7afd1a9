use crate::report::Failure;

/// Annotation lines for every failure, in failure order
pub fn to_annotations(failures: &[Failure]) -> Vec<String> {
    failures.iter().map(|f| f.annotation().body()).collect()
}
