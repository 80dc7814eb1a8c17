/// License evaluation layer - the record shape produced by the upstream evaluator
///
/// How outcomes are decided is not part of this crate; only the results are.
pub mod domain;
