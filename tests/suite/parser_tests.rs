//! Parser tests for einsum notation.

use pretty_assertions::assert_eq;

use dense_einsum::{EinsumError, parse};

#[test]
fn test_parse_basic_matmul() {
    let expr = parse("ij,jk->ik", &[2, 2]).unwrap();
    assert_eq!(expr.num_inputs(), 2);
    assert_eq!(expr.to_string(), "ij,jk->ik");
}

#[test]
fn test_parse_benchmark_expression() {
    let expr = parse("ra,rb,rc,rd,re->abcde", &[2, 2, 2, 2, 2]).unwrap();
    assert_eq!(expr.num_inputs(), 5);
    assert_eq!(expr.output().to_string(), "abcde");
}

#[test]
fn test_parse_implicit_output() {
    let expr = parse("ij,jk", &[2, 2]).unwrap();
    assert_eq!(expr.output().to_string(), "ik");
}

#[test]
fn test_parse_implicit_output_is_sorted() {
    let expr = parse("kji", &[3]).unwrap();
    assert_eq!(expr.output().to_string(), "ijk");
}

#[test]
fn test_parse_scalar_output() {
    let expr = parse("i,i->", &[1, 1]).unwrap();
    assert!(expr.is_scalar_output());
}

#[test]
fn test_parse_unary_permutation() {
    let expr = parse("ij->ji", &[2]).unwrap();
    assert!(expr.is_unary());
    assert_eq!(expr.output().to_string(), "ji");
}

#[test]
fn test_parse_wrong_group_count() {
    let result = parse("ij,jk->ik", &[2]);
    assert!(matches!(result, Err(EinsumError::MalformedSpec { .. })));
}

#[test]
fn test_parse_rank_mismatch() {
    let result = parse("ij->ij", &[3]);
    assert!(matches!(result, Err(EinsumError::RankMismatch { .. })));
}

#[test]
fn test_parse_unknown_output_index() {
    let result = parse("ij->ik", &[2]);
    assert_eq!(result.unwrap_err(), EinsumError::UnknownOutputIndex { index: 'k' });
}

#[test]
fn test_parse_diagonal_rejected() {
    let result = parse("ii->", &[2]);
    assert_eq!(
        result.unwrap_err(),
        EinsumError::RepeatedIndexUnsupported { index: 'i' }
    );
}

#[test]
fn test_parse_invalid_character() {
    let result = parse("i1j", &[3]);
    assert!(matches!(result, Err(EinsumError::MalformedSpec { .. })));
}

#[test]
fn test_bind_reports_extent_conflicts() {
    let expr = parse("ij,jk->ik", &[2, 2]).unwrap();
    let result = expr.bind(&[&[3, 4], &[9, 5]]);
    assert_eq!(
        result.unwrap_err(),
        EinsumError::DimensionMismatch {
            index: 'j',
            expected: 4,
            got: 9
        }
    );
}
