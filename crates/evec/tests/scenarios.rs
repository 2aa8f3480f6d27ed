use evec::{Error, Vector};

#[test]
fn identical_vectors_have_equal_unit_vectors() {
    let mut a = Vector::new(2);
    a[0] = 1.0;
    a[1] = 2.0;
    let mut b = Vector::new(2);
    b[0] = 1.0;
    b[1] = 2.0;

    let c = a.normalize().unwrap();
    let d = b.normalize().unwrap();
    assert_eq!(c, d);
}

#[test]
fn accessing_missing_dimension() {
    let mut a = Vector::from([1.0, 2.0]);
    let err = a.at(2).unwrap_err();
    assert_eq!(
        err,
        Error::DimensionIndex {
            index: 2,
            dimension: 2
        }
    );
    assert_eq!(
        err.to_string(),
        "index 2 is not valid for this vector of dimension 2"
    );
    assert!(a.at_mut(usize::MAX).is_err());
    assert_eq!(a.at(1), Ok(a[1]));
}

#[test]
fn operations_between_different_dimensions() {
    let mut a = Vector::new(2);
    let b = Vector::new(4);
    let mismatch = Error::DimensionMismatch { lhs: 2, rhs: 4 };

    assert_eq!(a.try_add_assign(&b), Err(mismatch.clone()));
    assert_eq!(&a + &b, Err(mismatch.clone()));
    assert_eq!(a.try_sub_assign(&b), Err(mismatch.clone()));
    assert_eq!(&a - &b, Err(mismatch.clone()));
    assert_eq!(a.dot(&b), Err(mismatch.clone()));
    assert_eq!(
        mismatch.to_string(),
        "dimensions of LHS(2) and RHS(4) do not match"
    );

    let swapped = (&b + &a).unwrap_err();
    assert_eq!(swapped, Error::DimensionMismatch { lhs: 4, rhs: 2 });
}

#[test]
fn division_by_zero() {
    let mut a = Vector::splat(4, 3.0);
    assert_eq!(&a / 0.0, Err(Error::DivisionByZero));
    assert_eq!(a.try_div_assign(0.0), Err(Error::DivisionByZero));
    assert_eq!(a, Vector::splat(4, 3.0));
}

#[test]
fn same_length_different_order() {
    let a = Vector::from([5.0, 4.0]);
    let b = Vector::from([4.0, 5.0]);

    assert_ne!(a, b);
    assert!(a != b);
    assert_eq!(a.norm(), b.norm());
    assert_eq!(a.norm().unwrap(), 41f64.sqrt());
}

#[test]
fn degenerate_norms() {
    assert_eq!(Vector::new(0).norm(), Err(Error::EmptyVector));
    assert_eq!(Vector::new(0).normalize(), Err(Error::EmptyVector));
    assert_eq!(Vector::new(5).normalize(), Err(Error::ZeroNorm));
    assert_eq!(Vector::new(5).norm(), Ok(0.0));
}

#[test]
fn constructors() {
    for d in [0, 1, 7, 100] {
        let v = Vector::new(d);
        assert_eq!(v.dimension(), d);
        assert!(v.iter().all(|&x| x == 0.0));

        let v = Vector::splat(d, -1.25);
        assert_eq!(v.dimension(), d);
        assert!(v.iter().all(|&x| x == -1.25));
    }

    let source = vec![1.0, 2.0, 3.0];
    let v: Vector = source.iter().copied().collect();
    drop(source);
    assert_eq!(v, [1.0, 2.0, 3.0]);
}

#[test]
fn copy_and_move() {
    let source = Vector::from([1.0, 2.0, 3.0]);
    let mut copy = source.clone();
    copy[1] = 20.0;
    assert_eq!(source, [1.0, 2.0, 3.0]);

    let mut assigned = Vector::new(1);
    assigned.clone_from(&source);
    assert_eq!(assigned, source);

    let mut moved_from = source;
    let moved_to = moved_from.take();
    assert_eq!(moved_from.dimension(), 0);
    assert_eq!(moved_to, [1.0, 2.0, 3.0]);

    moved_from = moved_to.clone() * 2.0;
    assert_eq!(moved_from, [2.0, 4.0, 6.0]);
}

#[test]
fn arithmetic_does_not_mutate_operands() {
    let a = Vector::from([1.0, -2.0]);
    let b = Vector::from([0.5, 4.0]);

    let _ = &a + &b;
    let _ = &a - &b;
    let _ = &a * &b;
    let _ = &a * 3.0;
    let _ = &a / 2.0;
    let _ = a.normalize();
    assert_eq!(a, [1.0, -2.0]);
    assert_eq!(b, [0.5, 4.0]);
}

#[test]
fn compound_operations() {
    let mut a = Vector::from([1.0, 2.0, 3.0]);
    let b = Vector::from([1.0, 1.0, 1.0]);

    a.try_add_assign(&b).unwrap();
    assert_eq!(a, [2.0, 3.0, 4.0]);
    a.try_sub_assign(&b).unwrap();
    assert_eq!(a, [1.0, 2.0, 3.0]);
    a *= 2.0;
    assert_eq!(a, [2.0, 4.0, 6.0]);
    a.try_div_assign(4.0).unwrap();
    assert_eq!(a, [0.5, 1.0, 1.5]);
}

#[test]
fn export_and_display() {
    let v = Vector::from([1.0, 2.5, -3.0]);
    let exported: Vec<f64> = v.to_vec();
    assert_eq!(exported, vec![1.0, 2.5, -3.0]);
    assert_eq!(Vec::from(v.clone()), exported);

    assert_eq!(v.to_string(), "[1 2.5 -3]");
    assert_eq!(Vector::new(0).to_string(), "[]");
}
