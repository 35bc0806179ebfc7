//! Two-column layout split for the design grid.

#[cfg(test)]
#[path = "columns_test.rs"]
mod columns_test;

/// Items for the left and right grid columns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Columns<T> {
    pub left: Vec<T>,
    pub right: Vec<T>,
}

/// Split by index parity: even indexes go left, odd go right. Relative order
/// is preserved within each column and every item lands in exactly one.
#[must_use]
pub fn split_columns<T: Clone>(items: &[T]) -> Columns<T> {
    let mut columns = Columns { left: Vec::with_capacity(items.len().div_ceil(2)), right: Vec::with_capacity(items.len() / 2) };
    for (index, item) in items.iter().enumerate() {
        if index % 2 == 0 {
            columns.left.push(item.clone());
        } else {
            columns.right.push(item.clone());
        }
    }
    columns
}
