//! End-to-end contraction tests.

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use dense_einsum::{EinsumConfig, EinsumError, Tensor, contract, contract_with};

#[test]
fn test_output_shape_follows_output_subscript() {
    let a = Tensor::<f64>::random_normal(&[2, 3, 4]);
    let b = Tensor::<f64>::random_normal(&[4, 5]);

    let out = contract("ijk,kl->lij", &[a, b]).unwrap();
    assert_eq!(out.shape(), &[5, 2, 3]);
}

#[test]
fn test_matmul_equivalence() {
    let mut rng = StdRng::seed_from_u64(42);
    let a = Tensor::<f64>::random_normal_with_rng(&[3, 4], &mut rng);
    let b = Tensor::<f64>::random_normal_with_rng(&[4, 5], &mut rng);

    let c = contract("ij,jk->ik", &[a.clone(), b.clone()]).unwrap();

    assert_eq!(c.shape(), &[3, 5]);
    for i in 0..3 {
        for k in 0..5 {
            let mut expected = 0.0;
            for j in 0..4 {
                expected += a.get(&[i, j]).unwrap() * b.get(&[j, k]).unwrap();
            }
            assert_relative_eq!(*c.get(&[i, k]).unwrap(), expected, max_relative = 1e-9);
        }
    }
}

#[test]
fn test_reduction_orders_agree() {
    let mut rng = StdRng::seed_from_u64(7);
    let a = Tensor::<f64>::random_normal_with_rng(&[4, 5], &mut rng);
    let b = Tensor::<f64>::random_normal_with_rng(&[5, 6], &mut rng);
    let c = Tensor::<f64>::random_normal_with_rng(&[6, 3], &mut rng);
    let tensors = [a, b, c];

    let fused = contract_with("ij,jk,kl->il", &tensors, &EinsumConfig::reference()).unwrap();
    let greedy = contract_with("ij,jk,kl->il", &tensors, &EinsumConfig::greedy()).unwrap();

    assert_eq!(fused.shape(), greedy.shape());
    for (x, y) in fused.data().iter().zip(greedy.data().iter()) {
        assert_relative_eq!(*x, *y, max_relative = 1e-9);
    }
}

#[test]
fn test_identity_returns_equal_copy() {
    let a = Tensor::<f64>::random_normal_with_rng(&[3, 4, 2], &mut StdRng::seed_from_u64(3));
    let out = contract("ijk->ijk", &[a.clone()]).unwrap();
    assert_eq!(out, a);
}

#[test]
fn test_permutation() {
    let a = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    let t = contract("ij->ji", &[a]).unwrap();

    assert_eq!(t.shape(), &[3, 2]);
    assert_eq!(t.data(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
}

#[test]
fn test_row_sum() {
    let a = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    let s = contract("ij->i", &[a]).unwrap();

    assert_eq!(s.shape(), &[2]);
    assert_eq!(s.data(), &[6.0, 15.0]);
}

#[test]
fn test_full_reduction_to_scalar() {
    let a = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    let s = contract("ij->", &[a]).unwrap();

    assert_eq!(s.rank(), 0);
    assert_relative_eq!(*s.get_linear(0).unwrap(), 10.0);
}

#[test]
fn test_dot_product() {
    let a = Tensor::from_vec(vec![1.0, 2.0, 3.0], &[3]).unwrap();
    let b = Tensor::from_vec(vec![4.0, 5.0, 6.0], &[3]).unwrap();
    let s = contract("i,i->", &[a, b]).unwrap();

    assert_relative_eq!(*s.get_linear(0).unwrap(), 32.0);
}

#[test]
fn test_outer_product() {
    let a = Tensor::from_vec(vec![1.0, 2.0], &[2]).unwrap();
    let b = Tensor::from_vec(vec![3.0, 4.0, 5.0], &[3]).unwrap();
    let c = contract("i,j->ij", &[a, b]).unwrap();

    assert_eq!(c.shape(), &[2, 3]);
    assert_eq!(c.data(), &[3.0, 4.0, 5.0, 6.0, 8.0, 10.0]);
}

#[test]
fn test_implicit_output_matches_explicit() {
    let mut rng = StdRng::seed_from_u64(11);
    let a = Tensor::<f64>::random_normal_with_rng(&[3, 4], &mut rng);
    let b = Tensor::<f64>::random_normal_with_rng(&[4, 5], &mut rng);

    let implicit = contract("ij,jk", &[a.clone(), b.clone()]).unwrap();
    let explicit = contract("ij,jk->ik", &[a, b]).unwrap();

    assert_eq!(implicit, explicit);
}

#[test]
fn test_benchmark_scenario() {
    // The reference workload at a smaller extent: five d×d matrices via
    // "ra,rb,rc,rd,re->abcde". Entry (a,b,c,d,e) must equal
    // Σ_r A[r,a]·B[r,b]·C[r,c]·D[r,d]·E[r,e].
    let dim = 4;
    let mut rng = StdRng::seed_from_u64(30);
    let inputs: Vec<Tensor<f64>> = (0..5)
        .map(|_| Tensor::random_normal_with_rng(&[dim, dim], &mut rng))
        .collect();

    for config in [EinsumConfig::reference(), EinsumConfig::greedy()] {
        let out = contract_with("ra,rb,rc,rd,re->abcde", &inputs, &config).unwrap();
        assert_eq!(out.shape(), &[dim; 5]);

        for &(a, b, c, d, e) in &[(0, 0, 0, 0, 0), (1, 2, 3, 0, 1), (3, 3, 3, 3, 3), (2, 0, 1, 3, 2)] {
            let mut expected = 0.0;
            for r in 0..dim {
                expected += inputs[0].get(&[r, a]).unwrap()
                    * inputs[1].get(&[r, b]).unwrap()
                    * inputs[2].get(&[r, c]).unwrap()
                    * inputs[3].get(&[r, d]).unwrap()
                    * inputs[4].get(&[r, e]).unwrap();
            }
            assert_relative_eq!(
                *out.get(&[a, b, c, d, e]).unwrap(),
                expected,
                max_relative = 1e-9
            );
        }
    }
}

#[test]
fn test_wrong_tensor_count_is_malformed() {
    let a = Tensor::<f64>::random_normal(&[2, 2]);
    let result = contract("ij,jk->ik", &[a]);
    assert!(matches!(result, Err(EinsumError::MalformedSpec { .. })));
}

#[test]
fn test_unknown_output_index() {
    let a = Tensor::<f64>::random_normal(&[2, 2]);
    let result = contract("ij->ik", &[a]);
    assert_eq!(result.unwrap_err(), EinsumError::UnknownOutputIndex { index: 'k' });
}

#[test]
fn test_shared_dimension_mismatch() {
    let a = Tensor::<f64>::random_normal(&[3, 4]);
    let b = Tensor::<f64>::random_normal(&[5, 6]);
    let result = contract("ij,jk->ik", &[a, b]);
    assert_eq!(
        result.unwrap_err(),
        EinsumError::DimensionMismatch {
            index: 'j',
            expected: 4,
            got: 5
        }
    );
}

#[test]
fn test_diagonal_subscript_rejected() {
    let a = Tensor::<f64>::random_normal(&[4, 4]);
    let result = contract("ii->", &[a]);
    assert_eq!(
        result.unwrap_err(),
        EinsumError::RepeatedIndexUnsupported { index: 'i' }
    );
}

#[test]
fn test_size_one_axis_does_not_broadcast() {
    // Size-1 axes do not stand in for larger extents; the mismatch is an
    // error like any other.
    let a = Tensor::<f64>::random_normal(&[1, 4]);
    let b = Tensor::<f64>::random_normal(&[3, 4]);
    let result = contract("ij,ij->ij", &[a, b]);
    assert!(matches!(result, Err(EinsumError::DimensionMismatch { .. })));
}

#[test]
fn test_float32_elements() {
    let a = Tensor::<f32>::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    let b = Tensor::<f32>::from_vec(vec![5.0, 6.0, 7.0, 8.0], &[2, 2]).unwrap();
    let c = contract("ij,jk->ik", &[a, b]).unwrap();

    assert_eq!(c.data(), &[19.0f32, 22.0, 43.0, 50.0]);
}

#[test]
fn test_concurrent_calls_share_nothing() {
    let handles: Vec<_> = (0..4)
        .map(|seed| {
            std::thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(seed);
                let a = Tensor::<f64>::random_normal_with_rng(&[6, 7], &mut rng);
                let b = Tensor::<f64>::random_normal_with_rng(&[7, 5], &mut rng);
                contract("ij,jk->ik", &[a, b]).unwrap().shape().to_vec()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec![6, 5]);
    }
}
