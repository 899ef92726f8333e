use itertools::Itertools;

use crate::puzzle::Cell;
use crate::puzzle::Operation;

/// The satisfying tuples of an arithmetic cage over `cells`, in a grid with values `1..=size`.
///
/// Every multiset of values which produces `target` under `operation` contributes all of its
/// orderings. When the cells share a row or a column their values are distinct, so only
/// multisets without repetition are considered.
pub fn cage_tuples(
    size: usize,
    cells: &[Cell],
    target: i32,
    operation: Operation,
) -> Vec<Vec<i32>> {
    let arity = cells.len();
    let values = 1..=size as i32;

    let shares_line = cells.iter().map(|cell| cell.row).all_equal()
        || cells.iter().map(|cell| cell.column).all_equal();

    let multisets: Vec<Vec<i32>> = if shares_line {
        values.combinations(arity).collect()
    } else {
        values.combinations_with_replacement(arity).collect()
    };

    multisets
        .into_iter()
        .filter(|multiset| operation.is_satisfied_by(multiset, target))
        .flat_map(|multiset| multiset.into_iter().permutations(arity).unique())
        .collect()
}
