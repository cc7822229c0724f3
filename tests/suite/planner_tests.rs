//! Contraction path planning tests.

use dense_einsum::{
    ContractionStep, EinsumError, IndexPlan, PathStrategy, parse, plan,
};

fn index_plan(spec: &str, shapes: &[&[usize]]) -> IndexPlan {
    let ranks: Vec<usize> = shapes.iter().map(|s| s.len()).collect();
    parse(spec, &ranks).unwrap().bind(shapes).unwrap()
}

#[test]
fn test_fused_path_for_two_operands() {
    let ip = index_plan("ij,jk->ik", &[&[10, 20], &[20, 30]]);
    let path = plan(&ip, PathStrategy::Fused).unwrap();

    assert!(path.is_fused());
    match &path.steps()[0] {
        ContractionStep::Fused { summed } => assert_eq!(summed, &['j']),
        other => panic!("unexpected step {:?}", other),
    }
}

#[test]
fn test_fused_path_for_five_operands() {
    let shapes: Vec<&[usize]> = vec![&[30, 30]; 5];
    let ip = index_plan("ra,rb,rc,rd,re->abcde", &shapes);
    let path = plan(&ip, PathStrategy::Fused).unwrap();

    assert!(path.is_fused());
    match &path.steps()[0] {
        ContractionStep::Fused { summed } => assert_eq!(summed, &['r']),
        other => panic!("unexpected step {:?}", other),
    }
}

#[test]
fn test_greedy_two_operands_is_fused() {
    let ip = index_plan("ij,jk->ik", &[&[10, 20], &[20, 30]]);
    let path = plan(&ip, PathStrategy::Greedy).unwrap();
    assert!(path.is_fused());
}

#[test]
fn test_greedy_chain_has_pairwise_steps() {
    let ip = index_plan("ij,jk,kl->il", &[&[10, 20], &[20, 30], &[30, 40]]);
    let path = plan(&ip, PathStrategy::Greedy).unwrap();

    assert_eq!(path.len(), 2);
    assert!(!path.is_fused());
}

#[test]
fn test_greedy_picks_cheapest_pair_first() {
    // Contracting the second and third operands leaves a 10x3 intermediate,
    // far smaller than the 2x1000 left by the first pair.
    let ip = index_plan("ij,jk,kl->il", &[&[2, 10], &[10, 1000], &[1000, 3]]);
    let path = plan(&ip, PathStrategy::Greedy).unwrap();

    match &path.steps()[0] {
        ContractionStep::Pair { operands, size, .. } => {
            assert_eq!(*operands, (1, 2));
            assert_eq!(*size, 30);
        }
        other => panic!("unexpected step {:?}", other),
    }
}

#[test]
fn test_greedy_final_step_in_output_order() {
    let ip = index_plan("ab,bc,cd->da", &[&[3, 4], &[4, 5], &[5, 6]]);
    let path = plan(&ip, PathStrategy::Greedy).unwrap();

    match path.steps().last().unwrap() {
        ContractionStep::Pair { result, .. } => assert_eq!(result, &['d', 'a']),
        other => panic!("unexpected step {:?}", other),
    }
}

#[test]
fn test_plan_rejects_empty_inputs() {
    let tensors: [dense_einsum::Tensor<f64>; 0] = [];
    let result = dense_einsum::contract("ij->ij", &tensors);
    assert_eq!(result.unwrap_err(), EinsumError::EmptyInputList);
}
